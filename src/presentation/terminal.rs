// Terminal adapters for the view ports
use crate::application::view::{DateInput, StatusSink};
use crate::domain::status::StatusMessage;
use crate::domain::theme::Theme;
use owo_colors::OwoColorize;
use std::io::Write;

/// Date given on the command line.
#[derive(Debug, Clone)]
pub struct ArgDateInput(Option<String>);

impl ArgDateInput {
    pub fn new(date: Option<String>) -> Self {
        Self(date)
    }
}

impl DateInput for ArgDateInput {
    fn selected_date(&self) -> Option<String> {
        self.0.clone()
    }
}

/// Prints each status message on its own line in the message's color.
pub struct TerminalStatus<W: Write + Send> {
    out: W,
    color: bool,
    theme: Theme,
}

impl TerminalStatus<std::io::Stdout> {
    pub fn stdout(theme: Theme) -> Self {
        Self::new(std::io::stdout(), true, theme)
    }
}

impl<W: Write + Send> TerminalStatus<W> {
    pub fn new(out: W, color: bool, theme: Theme) -> Self {
        Self { out, color, theme }
    }

    fn render(&self, message: &StatusMessage) -> String {
        if !self.color {
            return message.text.clone();
        }

        let rgb = message.kind.color();
        let line = message.text.truecolor(rgb.0, rgb.1, rgb.2);
        match self.theme {
            Theme::Dark => line.on_truecolor(0x1e, 0x1e, 0x1e).to_string(),
            Theme::Light => line.to_string(),
        }
    }
}

impl<W: Write + Send> StatusSink for TerminalStatus<W> {
    fn show(&mut self, message: StatusMessage) {
        let line = self.render(&message);
        if let Err(e) = writeln!(self.out, "{}", line) {
            tracing::warn!("Failed to print status: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_output() {
        let mut sink = TerminalStatus::new(Vec::new(), false, Theme::Light);
        sink.show(StatusMessage::loading());
        sink.show(StatusMessage::showing(2, "2024-03-01"));

        let printed = String::from_utf8(sink.out).unwrap();
        assert_eq!(
            printed,
            "Loading historical data...\nShowing 2 data points for 2024-03-01\n"
        );
    }

    #[test]
    fn test_colored_output_uses_message_color() {
        let mut sink = TerminalStatus::new(Vec::new(), true, Theme::Light);
        sink.show(StatusMessage::empty("2024-03-02"));

        let printed = String::from_utf8(sink.out).unwrap();
        // #f39c12 as a 24-bit foreground escape
        assert!(printed.contains("\u{1b}[38;2;243;156;18m"));
        assert!(printed.contains("No data found for 2024-03-02. Try another date."));
    }

    #[test]
    fn test_date_input() {
        assert_eq!(ArgDateInput::new(None).selected_date(), None);
        assert_eq!(
            ArgDateInput::new(Some("2024-03-01".into())).selected_date().as_deref(),
            Some("2024-03-01")
        );
    }
}
