// View ports - the input, status line and chart surface the loader drives
use crate::domain::chart::ChartSpec;
use crate::domain::status::StatusMessage;

/// Where the selected date is read from.
pub trait DateInput: Send + Sync {
    fn selected_date(&self) -> Option<String>;
}

/// Displays the current status message, replacing the previous one.
pub trait StatusSink: Send {
    fn show(&mut self, message: StatusMessage);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChartId(pub u64);

/// Something charts can be drawn on and removed from.
pub trait ChartSurface: Send {
    fn create(&mut self, spec: &ChartSpec) -> anyhow::Result<ChartId>;

    fn destroy(&mut self, id: ChartId);
}
