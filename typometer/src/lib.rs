//! # typometer
//!
//! Live typing statistics for a text-entry surface: word count, line count and
//! words-per-minute, recomputed from the full text on every change.
//!
//! The host owns a [`TypingSession`] and hands it the complete current text
//! together with a millisecond timestamp whenever the text changes:
//!
//! ```rust
//! use typometer::{TextMetrics, TypingSession};
//!
//! let mut session = TypingSession::new();
//!
//! let metrics = session.on_text_changed("hello", 0);
//! assert_eq!(metrics, TextMetrics { word_count: 1, line_count: 1, wpm: 0 });
//!
//! let metrics = session.on_text_changed("hello world", 30_000);
//! assert_eq!(metrics.wpm, 4);
//! ```

pub mod clock;
pub mod math;
pub mod metrics;
pub mod session;
pub mod text;

pub use clock::{Clock, ManualClock, MonotonicClock};
pub use math::Wpm;
pub use metrics::TextMetrics;
pub use session::{SessionState, TypingSession};
pub use text::{line_count, word_count};

const MILLIS_PER_MINUTE: Float = 60_000.0;

// Types for more general type-safety

/// Milliseconds on the host's clock
pub type Timestamp = u64;
/// Fractional minutes
pub type Minutes = f64;

type Float = f64;

/// Get the minutes represented by a span of milliseconds
pub fn minutes(elapsed_ms: Timestamp) -> Minutes {
    elapsed_ms as Float / MILLIS_PER_MINUTE
}
