use crate::domain::time_label::{LabelZone, TimeLabeler};
use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

const DEFAULT_CONFIG_FILE: &str = "config/dashboard";

#[derive(Debug, Deserialize, Clone)]
pub struct DashboardConfig {
    pub api: ApiSettings,
    pub chart: ChartSettings,
    pub theme: ThemeSettings,
    pub log: LogSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ApiSettings {
    pub base_url: String,
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ChartSettings {
    pub time_format: String,
    pub time_zone: String,
    pub output: PathBuf,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ThemeSettings {
    pub state_file: PathBuf,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LogSettings {
    pub level: String,
}

impl ApiSettings {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

impl ChartSettings {
    pub fn labeler(&self) -> anyhow::Result<TimeLabeler> {
        let zone: LabelZone = self.time_zone.parse()?;
        Ok(TimeLabeler::new(zone, self.time_format.clone()))
    }
}

/// Load settings from `path` (or `config/dashboard.*` when absent, which
/// may be missing) with `DASHBOARD_*` environment overrides on top.
pub fn load_dashboard_config(path: Option<&str>) -> anyhow::Result<DashboardConfig> {
    let file = match path {
        Some(path) => config::File::with_name(path),
        None => config::File::with_name(DEFAULT_CONFIG_FILE).required(false),
    };

    let settings = config::Config::builder()
        .set_default("api.base_url", "http://127.0.0.1:5000")?
        .set_default("chart.time_format", "%H:%M:%S")?
        .set_default("chart.time_zone", "local")?
        .set_default("chart.output", "chart.json")?
        .set_default("theme.state_file", ".dashboard-theme.toml")?
        .set_default("log.level", "info")?
        .add_source(file)
        .add_source(
            config::Environment::with_prefix("DASHBOARD")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?;

    Ok(settings.try_deserialize()?)
}

/// Build the history endpoint URL for a date
pub fn history_url(base_url: &str, date: &str) -> String {
    format!(
        "{}/api/history?date={}",
        base_url.trim_end_matches('/'),
        urlencoding::encode(date)
    )
}

pub fn control_url(base_url: &str) -> String {
    format!("{}/api/control", base_url.trim_end_matches('/'))
}
