//! Clocks producing the millisecond timestamps fed to a [`TypingSession`](crate::TypingSession).

use std::cell::Cell;

use web_time::Instant;

use crate::Timestamp;

/// A source of millisecond timestamps
///
/// Readings must never decrease.
pub trait Clock {
    /// The current reading in milliseconds
    fn now(&self) -> Timestamp;
}

/// Monotonic clock counting milliseconds since its creation
///
/// Backed by [`web_time::Instant`], so it works the same natively and in the browser.
#[derive(Debug, Clone, Copy)]
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    fn now(&self) -> Timestamp {
        // u64 milliseconds outlast any realistic session
        self.origin.elapsed().as_millis() as Timestamp
    }
}

/// A clock that only moves when told to
///
/// Useful for tests and for hosts that drive time themselves.
///
/// ```rust
/// use typometer::{Clock, ManualClock};
///
/// let clock = ManualClock::new(1_000);
/// clock.advance(500);
/// assert_eq!(clock.now(), 1_500);
/// ```
#[derive(Debug, Default, Clone)]
pub struct ManualClock {
    now: Cell<Timestamp>,
}

impl ManualClock {
    pub fn new(start: Timestamp) -> Self {
        Self {
            now: Cell::new(start),
        }
    }

    /// Moves the clock forward by `millis`
    pub fn advance(&self, millis: Timestamp) {
        self.now.set(self.now.get().saturating_add(millis));
    }

    /// Sets the reading. Going backwards is the caller's responsibility.
    pub fn set(&self, now: Timestamp) {
        self.now.set(now);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Timestamp {
        self.now.get()
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> Timestamp {
        (**self).now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manual_clock() {
        let clock = ManualClock::default();
        assert_eq!(clock.now(), 0);

        clock.advance(250);
        clock.advance(250);
        assert_eq!(clock.now(), 500);

        clock.set(60_000);
        assert_eq!(clock.now(), 60_000);

        clock.set(Timestamp::MAX);
        clock.advance(1);
        assert_eq!(clock.now(), Timestamp::MAX);
    }

    #[test]
    fn test_monotonic_clock_never_decreases() {
        let clock = MonotonicClock::new();
        let first = clock.now();
        let second = clock.now();
        assert!(second >= first);
    }

    #[test]
    fn test_clock_by_reference() {
        fn read(clock: impl Clock) -> Timestamp {
            clock.now()
        }

        let clock = ManualClock::new(42);
        assert_eq!(read(&clock), 42);
    }
}
