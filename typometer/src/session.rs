//! # Session Module - Typing Burst Tracking
//!
//! A [`TypingSession`] remembers when the current typing burst began and turns the
//! full text of an input surface into fresh [`TextMetrics`] on every change.
//!
//! ## Session Lifecycle
//!
#![doc = simple_mermaid::mermaid!("../diagrams/session_lifecycle.mmd")]
//!
//! A burst begins the first time the text is non-empty and ends whenever the text
//! holds no words again. WPM is always measured from the start of the current
//! burst, never from the previous keystroke.
//!
//! ## Usage
//!
//! ```rust
//! use typometer::{SessionState, TypingSession};
//!
//! let mut session = TypingSession::new();
//!
//! session.on_text_changed("new", 5_000);
//! assert_eq!(session.state(), SessionState::Active { started_at: 5_000 });
//!
//! let metrics = session.on_text_changed("", 9_000);
//! assert_eq!(metrics.wpm, 0);
//! assert_eq!(session.state(), SessionState::Idle);
//! ```

use crate::{Clock, TextMetrics, Timestamp, Wpm, line_count, minutes, word_count};

/// Where a [`TypingSession`] is in its lifecycle
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SessionState {
    /// Nothing has been typed since creation or the last reset
    #[default]
    Idle,
    /// A typing burst is in progress
    Active {
        /// Timestamp at which the burst began
        started_at: Timestamp,
    },
}

/// Typing state owned by a single input surface
///
/// Holds only the start of the current typing burst. Whether typing has started is
/// derived from it, so the two can never disagree.
///
/// # Thread Safety
///
/// A session is plain data. Each input surface owns its own; sessions never
/// interact.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TypingSession {
    started_at: Option<Timestamp>,
}

impl TypingSession {
    /// Creates an idle session
    pub const fn new() -> Self {
        Self { started_at: None }
    }

    /// Recomputes the metrics for the complete current `text` at time `now`
    ///
    /// Call this on every modification of the input surface, passing the whole text
    /// rather than the change. `now` is in milliseconds and should not decrease
    /// between calls; a reading earlier than the burst start counts as no time
    /// elapsed.
    ///
    /// Side effects on the session:
    /// - an idle session becomes active at `now` once `text` is non-empty
    /// - a text without words resets the session to idle and reports zero WPM
    ///
    /// ```rust
    /// use typometer::{TextMetrics, TypingSession};
    ///
    /// let mut session = TypingSession::new();
    ///
    /// // No time has elapsed at the first keystroke of a burst
    /// let metrics = session.on_text_changed("hello", 0);
    /// assert_eq!(metrics, TextMetrics { word_count: 1, line_count: 1, wpm: 0 });
    ///
    /// // Two words, half a minute in
    /// let metrics = session.on_text_changed("hello world", 30_000);
    /// assert_eq!(metrics, TextMetrics { word_count: 2, line_count: 1, wpm: 4 });
    /// ```
    pub fn on_text_changed(&mut self, text: &str, now: Timestamp) -> TextMetrics {
        let word_count = word_count(text);
        let line_count = line_count(text);

        if self.started_at.is_none() && !text.is_empty() {
            tracing::debug!(started_at = now, "typing burst started");
            self.started_at = Some(now);
        }

        let wpm = if word_count == 0 {
            self.reset();
            Wpm::ZERO
        } else if let Some(started_at) = self.started_at {
            Wpm::calculate(word_count, minutes(now.saturating_sub(started_at)))
        } else {
            // Unreachable: non-empty words imply non-empty text, which started the burst
            Wpm::ZERO
        };

        let metrics = TextMetrics {
            word_count,
            line_count,
            wpm: wpm.get(),
        };
        tracing::trace!(?metrics, now, "metrics computed");
        metrics
    }

    /// Same as [`on_text_changed`](Self::on_text_changed), reading `now` from `clock`
    pub fn on_text_changed_with(&mut self, text: &str, clock: &impl Clock) -> TextMetrics {
        self.on_text_changed(text, clock.now())
    }

    /// Returns the session to idle, forgetting the current burst
    pub fn reset(&mut self) {
        if let Some(started_at) = self.started_at.take() {
            tracing::debug!(started_at, "typing burst reset");
        }
    }

    /// Returns true if a typing burst is in progress
    pub const fn is_started(&self) -> bool {
        self.started_at.is_some()
    }

    /// Timestamp at which the current burst began, if any
    pub const fn started_at(&self) -> Option<Timestamp> {
        self.started_at
    }

    /// The lifecycle state of the session
    pub const fn state(&self) -> SessionState {
        match self.started_at {
            Some(started_at) => SessionState::Active { started_at },
            None => SessionState::Idle,
        }
    }
}
