use std::fmt;

use crate::{Float, Minutes};

/// Words Per Minute
///
/// A whole number of words per minute, rounded to the nearest integer.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Wpm(u32);

impl Wpm {
    /// No measurable typing rate
    pub const ZERO: Self = Self(0);

    /// Calculate Words Per Minute
    ///
    /// * `words` - How many words the text holds
    /// * `minutes` - How many minutes have gone by since the typing burst began
    ///
    /// When no time has gone by yet the rate cannot be measured and is reported
    /// as zero instead of an infinite rate.
    ///
    /// ```rust
    /// use typometer::Wpm;
    ///
    /// assert_eq!(Wpm::calculate(2, 0.5).get(), 4);
    /// assert_eq!(Wpm::calculate(7, 0.0), Wpm::ZERO);
    /// ```
    pub fn calculate(words: usize, minutes: Minutes) -> Self {
        if minutes.is_nan() || minutes <= 0.0 {
            return Self::ZERO;
        }

        // `as` saturates, so absurdly short bursts clamp to u32::MAX
        Self((words as Float / minutes).round() as u32)
    }

    /// The rate as a plain number
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl From<Wpm> for u32 {
    fn from(wpm: Wpm) -> Self {
        wpm.0
    }
}

impl fmt::Display for Wpm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
