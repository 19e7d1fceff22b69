// Status message domain model - the single line of feedback shown to the user
use super::chart::Rgb;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Success,
    Warning,
    Error,
}

/// Phase of a history request the message reports on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Prompt,
    Loading,
    Error,
    Empty,
    Success,
}

impl StatusKind {
    pub fn severity(&self) -> Severity {
        match self {
            StatusKind::Prompt | StatusKind::Empty => Severity::Warning,
            StatusKind::Loading => Severity::Info,
            StatusKind::Error => Severity::Error,
            StatusKind::Success => Severity::Success,
        }
    }

    pub fn color(&self) -> Rgb {
        match self {
            StatusKind::Prompt | StatusKind::Error => Rgb(0xff, 0x6b, 0x6b),
            StatusKind::Loading => Rgb(0x4a, 0x90, 0xe2),
            StatusKind::Empty => Rgb(0xf3, 0x9c, 0x12),
            StatusKind::Success => Rgb(0x27, 0xae, 0x60),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub kind: StatusKind,
}

impl StatusMessage {
    fn new(kind: StatusKind, text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind,
        }
    }

    pub fn prompt() -> Self {
        Self::new(StatusKind::Prompt, "Please select a date.")
    }

    pub fn loading() -> Self {
        Self::new(StatusKind::Loading, "Loading historical data...")
    }

    pub fn server_error(message: &str) -> Self {
        Self::new(StatusKind::Error, format!("Error: {}", message))
    }

    pub fn transport_failure() -> Self {
        Self::new(
            StatusKind::Error,
            "Failed to load historical data. Check console for details.",
        )
    }

    pub fn render_failure() -> Self {
        Self::new(
            StatusKind::Error,
            "Failed to draw historical data. Check console for details.",
        )
    }

    pub fn empty(date: &str) -> Self {
        Self::new(
            StatusKind::Empty,
            format!("No data found for {}. Try another date.", date),
        )
    }

    pub fn showing(points: usize, date: &str) -> Self {
        Self::new(
            StatusKind::Success,
            format!("Showing {} data points for {}", points, date),
        )
    }

    pub fn severity(&self) -> Severity {
        self.kind.severity()
    }
}
