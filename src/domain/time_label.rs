// Time-of-day labels for the chart's x axis
use chrono::{DateTime, FixedOffset, Local, NaiveDateTime, Utc};
use std::str::FromStr;

/// Naive layouts the backend may send (Python `str(datetime)` and ISO).
const NAIVE_LAYOUTS: &[&str] = &["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"];

/// Offset-carrying layouts that are not strict RFC 3339.
const OFFSET_LAYOUTS: &[&str] = &["%Y-%m-%d %H:%M:%S%.f%:z", "%Y-%m-%d %H:%M:%S%.f%#z"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelZone {
    Local,
    Utc,
    Fixed(FixedOffset),
}

#[derive(Debug, thiserror::Error)]
#[error("unknown time zone '{0}', expected 'local', 'utc' or an offset like '+02:00'")]
pub struct InvalidZone(String);

impl FromStr for LabelZone {
    type Err = InvalidZone;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "local" => Ok(LabelZone::Local),
            "utc" | "z" => Ok(LabelZone::Utc),
            other => other
                .parse::<FixedOffset>()
                .map(LabelZone::Fixed)
                .map_err(|_| InvalidZone(s.to_string())),
        }
    }
}

/// Formats backend timestamps as wall-clock time, dropping the date.
#[derive(Debug, Clone)]
pub struct TimeLabeler {
    zone: LabelZone,
    format: String,
}

impl Default for TimeLabeler {
    fn default() -> Self {
        Self::new(LabelZone::Local, "%H:%M:%S")
    }
}

impl TimeLabeler {
    pub fn new(zone: LabelZone, format: impl Into<String>) -> Self {
        Self {
            zone,
            format: format.into(),
        }
    }

    /// Label for one timestamp. Timestamps without an offset are already
    /// wall-clock time and are formatted as-is; unparseable input is
    /// returned unchanged.
    pub fn label(&self, timestamp: &str) -> String {
        let raw = timestamp.trim();

        if let Some(instant) = parse_with_offset(raw) {
            return match self.zone {
                LabelZone::Local => {
                    instant.with_timezone(&Local).format(&self.format).to_string()
                }
                LabelZone::Utc => instant.with_timezone(&Utc).format(&self.format).to_string(),
                LabelZone::Fixed(offset) => {
                    instant.with_timezone(&offset).format(&self.format).to_string()
                }
            };
        }

        if let Some(naive) = NAIVE_LAYOUTS
            .iter()
            .find_map(|layout| NaiveDateTime::parse_from_str(raw, layout).ok())
        {
            return naive.format(&self.format).to_string();
        }

        tracing::debug!("Unparseable timestamp '{}', using it as label", raw);
        timestamp.to_string()
    }

    pub fn labels(&self, timestamps: &[String]) -> Vec<String> {
        timestamps.iter().map(|ts| self.label(ts)).collect()
    }
}

fn parse_with_offset(raw: &str) -> Option<DateTime<FixedOffset>> {
    DateTime::parse_from_rfc3339(raw).ok().or_else(|| {
        OFFSET_LAYOUTS
            .iter()
            .find_map(|layout| DateTime::parse_from_str(raw, layout).ok())
    })
}
