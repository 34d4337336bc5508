use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, IntoEnumIterator};
use typometer::TextMetrics;

/// A counter shown in the status bar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Display, EnumIter)]
#[serde(rename_all = "snake_case")]
pub enum StatusField {
    #[strum(to_string = "WPM")]
    Wpm,
    #[strum(to_string = "Words")]
    Words,
    #[strum(to_string = "Lines")]
    Lines,
}

impl StatusField {
    /// Picks this field's number out of `metrics`
    pub fn value(self, metrics: &TextMetrics) -> usize {
        match self {
            Self::Wpm => metrics.wpm as usize,
            Self::Words => metrics.word_count,
            Self::Lines => metrics.line_count,
        }
    }
}

#[derive(Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct StatusConfig {
    /// Counters to show, in order
    pub fields: Vec<StatusField>,
    pub separator: String,
}

impl Default for StatusConfig {
    fn default() -> Self {
        Self {
            fields: StatusField::iter().collect(),
            separator: "  ".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels() {
        assert_eq!(StatusField::Wpm.to_string(), "WPM");
        assert_eq!(StatusField::Words.to_string(), "Words");
        assert_eq!(StatusField::Lines.to_string(), "Lines");
    }

    #[test]
    fn test_values() {
        let metrics = TextMetrics {
            word_count: 6,
            line_count: 3,
            wpm: 71,
        };
        assert_eq!(StatusField::Wpm.value(&metrics), 71);
        assert_eq!(StatusField::Words.value(&metrics), 6);
        assert_eq!(StatusField::Lines.value(&metrics), 3);
    }
}
