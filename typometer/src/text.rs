//! Counting words and lines in raw text.
//!
//! Both counts are computed over the whole text on every call. Whitespace is
//! Unicode whitespace as understood by [`char::is_whitespace`]; lines are
//! delimited by `'\n'` only.

/// Counts the words in `text`.
///
/// Leading and trailing whitespace is ignored, and any run of whitespace between
/// two words counts as a single separator. Text that is empty or made only of
/// whitespace has no words.
///
/// ```rust
/// use typometer::word_count;
///
/// assert_eq!(word_count(""), 0);
/// assert_eq!(word_count("   "), 0);
/// assert_eq!(word_count("a  b   c"), 3);
/// assert_eq!(word_count("  trailing\n\tand leading  "), 3);
/// ```
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Counts the lines in `text`.
///
/// This is the number of segments produced by splitting on `'\n'`, so the result
/// is never below 1: an empty text is a single, empty line.
///
/// ```rust
/// use typometer::line_count;
///
/// assert_eq!(line_count(""), 1);
/// assert_eq!(line_count("a\nb\nc"), 3);
/// assert_eq!(line_count("ends with newline\n"), 2);
/// ```
pub fn line_count(text: &str) -> usize {
    text.split('\n').count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_count_empty_and_blank() {
        assert_eq!(word_count(""), 0);
        assert_eq!(word_count(" "), 0);
        assert_eq!(word_count("\n\n\t  \r\n"), 0);
        // Non-breaking space and ideographic space are whitespace too
        assert_eq!(word_count("\u{a0}\u{3000}"), 0);
    }

    #[test]
    fn test_word_count_collapses_whitespace_runs() {
        assert_eq!(word_count("hello"), 1);
        assert_eq!(word_count("hello world"), 2);
        assert_eq!(word_count("a  b   c"), 3);
        assert_eq!(word_count("  a\t\tb\n\nc  "), 3);
        assert_eq!(word_count("line one\nline two\nline three"), 6);
    }

    #[test]
    fn test_word_count_counts_tokens_not_length() {
        // Punctuation and long tokens are single words
        assert_eq!(word_count("supercalifragilisticexpialidocious"), 1);
        assert_eq!(word_count("don't stop-believing!"), 2);
        assert_eq!(word_count("café 🚀 naïve"), 3);
    }

    #[test]
    fn test_word_count_zero_iff_trimmed_empty() {
        let samples = ["", " ", "x", " x ", "\t\n", "a b", "\n\nz"];
        for sample in samples {
            assert_eq!(
                word_count(sample) == 0,
                sample.trim().is_empty(),
                "sample: {sample:?}"
            );
        }
    }

    #[test]
    fn test_line_count() {
        assert_eq!(line_count(""), 1);
        assert_eq!(line_count("single"), 1);
        assert_eq!(line_count("a\nb\nc"), 3);
        assert_eq!(line_count("\n"), 2);
        assert_eq!(line_count("\n\n\n"), 4);
        assert_eq!(line_count("line one\nline two\nline three"), 3);
    }

    #[test]
    fn test_line_count_matches_newline_occurrences() {
        let samples = ["", "abc", "a\n", "\r\n\r\n", "x\ny\n\nz", "   \n   "];
        for sample in samples {
            let newlines = sample.chars().filter(|&c| c == '\n').count();
            assert_eq!(line_count(sample), newlines + 1, "sample: {sample:?}");
        }
    }

    #[test]
    fn test_carriage_return_is_not_a_line_break() {
        assert_eq!(line_count("a\rb"), 1);
        assert_eq!(line_count("a\r\nb"), 2);
    }
}
