use std::io::stdout;
use std::time::Duration;

use crossterm::cursor::SetCursorStyle;
use crossterm::event::{
    self, DisableBracketedPaste, EnableBracketedPaste, Event, KeyCode, KeyEvent, KeyModifiers,
};
use crossterm::execute;
use ratatui::{DefaultTerminal, Frame, style::Stylize, text::ToLine, widgets::Padding};

use crate::config::Config;
use crate::pad::Pad;
use crate::utils::ROUNDED_BLOCK;

/// An app message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// Empty the pad
    Clear,
    /// Quit the application
    Quit,
}

/// The app itself
pub struct App {
    pad: Pad,
    config: Config,
}

impl App {
    /// Creates a new `App`
    pub fn new(config: Config) -> Self {
        Self {
            pad: Pad::new(),
            config,
        }
    }

    /// Runs the app
    pub fn run(&mut self) -> std::io::Result<()> {
        let mut terminal = ratatui::init();

        let result = execute!(stdout(), SetCursorStyle::SteadyBar, EnableBracketedPaste)
            .and_then(|()| self.event_loop(&mut terminal));

        // Restore the terminal even if the loop failed
        let restored = execute!(
            stdout(),
            DisableBracketedPaste,
            SetCursorStyle::DefaultUserShape
        );
        ratatui::restore();

        result.and(restored)
    }

    fn event_loop(&mut self, terminal: &mut DefaultTerminal) -> std::io::Result<()> {
        let poll_interval = Duration::from_millis(self.config.settings.poll_interval_ms);

        loop {
            terminal.draw(|frame| self.draw(frame))?;

            let event = event::poll(poll_interval)?
                .then(event::read)
                .transpose()?;
            if let Some(message) = self.handle_events(event) {
                match message {
                    Message::Clear => self.pad.clear(),
                    Message::Quit => break,
                }
            }
        }

        let metrics = self.pad.metrics();
        tracing::info!(
            bytes = self.pad.text().len(),
            words = metrics.word_count,
            lines = metrics.line_count,
            wpm = metrics.wpm,
            "quitting"
        );

        Ok(())
    }

    /// Draws the next frame
    fn draw(&mut self, frame: &mut Frame) {
        let block = ROUNDED_BLOCK
            .padding(Padding::new(1, 1, 0, 0))
            .border_style(self.config.settings.theme.border)
            .title_top(
                "TYPEPAD"
                    .to_line()
                    .bold()
                    .fg(self.config.settings.theme.title)
                    .centered(),
            )
            .title_top("<ESC> to clear | <CTRL-Q> to exit".to_line().right_aligned());

        let area = frame.area();
        let content = block.inner(area);

        frame.render_widget(block, area);

        self.pad.render(frame, content, &self.config);
    }

    /// Global event handler
    fn handle_events(&mut self, event_opt: Option<Event>) -> Option<Message> {
        let event = event_opt?;
        if self.pad.handle_events(&event, &self.config) {
            return None;
        }
        match event {
            Event::Key(key) if key.is_press() => handle_key_event(key),
            _ => None, // Reserved for future event handling
        }
    }
}

/// Global key events
const fn handle_key_event(key: KeyEvent) -> Option<Message> {
    match (key.code, key.modifiers) {
        (KeyCode::Char('q'), KeyModifiers::CONTROL) => Some(Message::Quit),
        (KeyCode::Esc, KeyModifiers::NONE) => Some(Message::Clear),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> Option<Event> {
        Some(Event::Key(KeyEvent::new(code, modifiers)))
    }

    #[test]
    fn test_global_keys() {
        let mut app = App::new(Config::default());

        assert_eq!(
            app.handle_events(key(KeyCode::Char('q'), KeyModifiers::CONTROL)),
            Some(Message::Quit)
        );
        assert_eq!(
            app.handle_events(key(KeyCode::Esc, KeyModifiers::NONE)),
            Some(Message::Clear)
        );
        assert_eq!(app.handle_events(None), None);
    }

    #[test]
    fn test_text_keys_go_to_the_pad() {
        let mut app = App::new(Config::default());

        assert_eq!(
            app.handle_events(key(KeyCode::Char('q'), KeyModifiers::NONE)),
            None
        );
        assert_eq!(app.pad.text(), "q");
        assert_eq!(app.pad.metrics().word_count, 1);
    }
}
