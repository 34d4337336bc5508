use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use typometer::{Clock, MonotonicClock, TextMetrics, TypingSession};

use crate::{config::Config, editor::Editor, utils::follow};

/// Page: Pad
///
/// A text area with a status bar. Every change to the text is handed to the
/// [`TypingSession`] in full, and the status bar shows what it reports.
#[derive(Debug)]
pub struct Pad<C: Clock = MonotonicClock> {
    editor: Editor,
    session: TypingSession,
    metrics: TextMetrics,
    clock: C,
    // (rows, columns)
    scroll: (usize, usize),
}

impl Pad {
    pub fn new() -> Self {
        Self::with_clock(MonotonicClock::new())
    }
}

impl Default for Pad {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> Pad<C> {
    pub fn with_clock(clock: C) -> Self {
        Self {
            editor: Editor::new(),
            session: TypingSession::new(),
            metrics: TextMetrics::EMPTY,
            clock,
            scroll: (0, 0),
        }
    }

    /// Statistics for the current text
    pub const fn metrics(&self) -> TextMetrics {
        self.metrics
    }

    pub fn text(&self) -> &str {
        self.editor.text()
    }

    /// Empties the pad, ending the current typing burst
    pub fn clear(&mut self) {
        if self.editor.clear() {
            tracing::debug!("pad cleared");
            self.text_changed();
        }
    }

    fn text_changed(&mut self) {
        self.metrics = self
            .session
            .on_text_changed_with(self.editor.text(), &self.clock);
    }
}

// Event handling
impl<C: Clock> Pad<C> {
    /// Handles an event, returning true if the pad consumed it
    pub fn handle_events(&mut self, event: &Event, config: &Config) -> bool {
        match event {
            Event::Key(key) if key.is_press() => self.handle_key_event(*key, config),
            Event::Paste(pasted) => {
                // Terminals may send carriage returns for line breaks
                let pasted = pasted
                    .replace("\r\n", "\n")
                    .replace('\r', "\n")
                    .replace('\t', &" ".repeat(config.settings.tab_width));
                if self.editor.insert_str(&pasted) {
                    self.text_changed();
                }
                true
            }
            _ => false,
        }
    }

    fn handle_key_event(&mut self, key: KeyEvent, config: &Config) -> bool {
        let editor = &mut self.editor;
        let changed = match key.code {
            KeyCode::Char(character) if is_typed(key.modifiers) => editor.insert_char(character),
            KeyCode::Enter => editor.insert_char('\n'),
            KeyCode::Tab => editor.insert_str(&" ".repeat(config.settings.tab_width)),
            KeyCode::Backspace => editor.backspace(),
            KeyCode::Delete => editor.delete(),
            KeyCode::Left => {
                editor.move_left();
                false
            }
            KeyCode::Right => {
                editor.move_right();
                false
            }
            KeyCode::Up => {
                editor.move_up();
                false
            }
            KeyCode::Down => {
                editor.move_down();
                false
            }
            KeyCode::Home => {
                editor.move_home();
                false
            }
            KeyCode::End => {
                editor.move_end();
                false
            }
            _ => return false,
        };

        if changed {
            self.text_changed();
        }
        true
    }
}

// Rendering logic
impl<C: Clock> Pad<C> {
    pub fn render(&mut self, frame: &mut Frame, area: Rect, config: &Config) {
        let settings = &config.settings;
        let theme = &settings.theme;

        let [text_area, status_area] =
            Layout::vertical([Constraint::Min(1), Constraint::Length(2)]).areas(area);

        let (row, column) = self.editor.cursor_position();

        if self.editor.is_empty() {
            self.scroll = (0, 0);
            let placeholder = Paragraph::new(settings.placeholder.as_str())
                .style(Style::new().fg(theme.placeholder).italic());
            frame.render_widget(placeholder, text_area);
        } else {
            self.scroll = (
                follow(row, self.scroll.0, text_area.height as usize),
                follow(column, self.scroll.1, text_area.width as usize),
            );
            let text = Paragraph::new(self.editor.text())
                .style(Style::new().fg(theme.foreground()).bg(theme.background()))
                .scroll((to_cells(self.scroll.0), to_cells(self.scroll.1)));
            frame.render_widget(text, text_area);
        }

        if !text_area.is_empty() {
            frame.set_cursor_position((
                text_area.x + to_cells(column - self.scroll.1),
                text_area.y + to_cells(row - self.scroll.0),
            ));
        }

        let status = Paragraph::new(self.status_line(config))
            .centered()
            .block(
                Block::new()
                    .borders(Borders::TOP)
                    .border_style(Style::new().fg(theme.border)),
            );
        frame.render_widget(status, status_area);
    }

    /// The configured counters, e.g. `WPM: 42  Words: 6  Lines: 3`
    pub fn status_line(&self, config: &Config) -> Line<'static> {
        let status = &config.settings.status;
        let theme = &config.settings.theme.status;

        let mut spans = Vec::with_capacity(status.fields.len() * 3);
        for (index, field) in status.fields.iter().enumerate() {
            if index > 0 {
                spans.push(Span::styled(
                    status.separator.clone(),
                    Style::new().fg(theme.separator),
                ));
            }
            spans.push(Span::styled(
                format!("{field}: "),
                Style::new().fg(theme.label).bold(),
            ));
            spans.push(Span::styled(
                field.value(&self.metrics).to_string(),
                Style::new().fg(theme.value),
            ));
        }

        Line::from(spans)
    }
}

/// Whether a character key is text rather than a shortcut
///
/// Windows reports AltGr as Ctrl+Alt, so only one of the two alone makes a shortcut.
fn is_typed(modifiers: KeyModifiers) -> bool {
    modifiers.contains(KeyModifiers::CONTROL) == modifiers.contains(KeyModifiers::ALT)
}

fn to_cells(value: usize) -> u16 {
    u16::try_from(value).unwrap_or(u16::MAX)
}
