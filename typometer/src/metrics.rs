use std::fmt;

/// The statistics reported for a text after a change
///
/// Values are always produced fresh by [`TypingSession::on_text_changed`](crate::TypingSession::on_text_changed)
/// and are meant to be rendered verbatim by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextMetrics {
    /// Whitespace-separated words in the text
    pub word_count: usize,
    /// Lines in the text. Never below 1.
    pub line_count: usize,
    /// Words per minute since the current typing burst began
    pub wpm: u32,
}

impl TextMetrics {
    /// The metrics of an empty text: no words, a single line and no typing rate.
    pub const EMPTY: Self = Self {
        word_count: 0,
        line_count: 1,
        wpm: 0,
    };
}

impl Default for TextMetrics {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl fmt::Display for TextMetrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "WPM: {} | Words: {} | Lines: {}",
            self.wpm, self.word_count, self.line_count
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_empty_text() {
        let metrics = TextMetrics::default();
        assert_eq!(metrics.word_count, 0);
        assert_eq!(metrics.line_count, 1);
        assert_eq!(metrics.wpm, 0);
    }

    #[test]
    fn test_display() {
        let metrics = TextMetrics {
            word_count: 6,
            line_count: 3,
            wpm: 42,
        };
        assert_eq!(metrics.to_string(), "WPM: 42 | Words: 6 | Lines: 3");
    }
}
