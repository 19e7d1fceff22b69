// Domain layer - plain data with no I/O
pub mod chart;
pub mod control;
pub mod history;
pub mod status;
pub mod theme;
pub mod time_label;
