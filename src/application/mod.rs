// Application layer - ports and use cases
pub mod chart_controller;
pub mod device_control;
pub mod error;
pub mod history_service;
pub mod history_source;
pub mod theme_service;
pub mod view;

#[cfg(test)]
pub(crate) mod test_support;
