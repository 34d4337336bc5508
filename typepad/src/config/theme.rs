use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use terminal_colorsaurus::QueryOptions;

/// General theme
#[derive(Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct Theme {
    pub border: Color,
    pub title: Color,
    pub placeholder: Color,
    /// Terminal foreground. Queried from the terminal when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub term_fg: Option<Color>,
    /// Terminal background. Queried from the terminal when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub term_bg: Option<Color>,
    pub status: StatusTheme,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            border: Color::Gray,
            title: Color::Reset,
            placeholder: Color::DarkGray,
            term_fg: None,
            term_bg: None,
            status: StatusTheme::default(),
        }
    }
}

impl Theme {
    /// Fills in unset terminal colors from the terminal's palette.
    ///
    /// Must run before the terminal enters raw mode.
    pub fn detect_terminal_colors(&mut self) {
        if self.term_fg.is_some() && self.term_bg.is_some() {
            return;
        }

        match terminal_colorsaurus::color_palette(QueryOptions::default()) {
            Ok(palette) => {
                let fg = palette.foreground.scale_to_8bit();
                let bg = palette.background.scale_to_8bit();
                self.term_fg = self.term_fg.or(Some(Color::Rgb(fg.0, fg.1, fg.2)));
                self.term_bg = self.term_bg.or(Some(Color::Rgb(bg.0, bg.1, bg.2)));
            }
            Err(error) => {
                tracing::debug!(%error, "terminal palette unavailable, using defaults");
            }
        }
    }

    /// Color of typed text
    pub fn foreground(&self) -> Color {
        self.term_fg.unwrap_or(Color::Reset)
    }

    pub fn background(&self) -> Color {
        self.term_bg.unwrap_or(Color::Reset)
    }
}

/// Status bar colors
#[derive(Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct StatusTheme {
    pub label: Color,
    pub value: Color,
    pub separator: Color,
}

impl Default for StatusTheme {
    fn default() -> Self {
        Self {
            label: Color::Blue,
            value: Color::Green,
            separator: Color::DarkGray,
        }
    }
}
