// History domain model - query and response shapes of /api/history
use serde::Deserialize;
use serde_json::Value;

/// A user-selected date to load readings for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryQuery {
    pub date: String,
}

impl HistoryQuery {
    /// Returns `None` when nothing usable was selected.
    pub fn from_input(value: Option<&str>) -> Option<Self> {
        let date = value.map(str::trim).filter(|d| !d.is_empty())?;
        Some(Self {
            date: date.to_string(),
        })
    }
}

/// Raw body returned by the backend. Any field may be missing, and fields
/// are kept as loose JSON so one odd value never hides the rest.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct HistoryResponse {
    #[serde(default)]
    pub error: Option<Value>,
    #[serde(default)]
    pub timestamps: Option<Value>,
    #[serde(default)]
    pub ir: Option<Value>,
    #[serde(default)]
    pub ultrasonic: Option<Value>,
    #[serde(default)]
    pub speed: Option<Value>,
}

/// Readings for one date. A `None` reading is a gap in the line.
#[derive(Debug, Clone, PartialEq)]
pub struct SensorHistory {
    pub timestamps: Vec<String>,
    pub ir: Vec<Option<f64>>,
    pub ultrasonic: Vec<Option<f64>>,
    pub speed: Vec<Option<f64>>,
}

impl SensorHistory {
    pub fn len(&self) -> usize {
        self.timestamps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timestamps.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum HistoryOutcome {
    ServerError(String),
    Empty,
    Series(SensorHistory),
}

impl HistoryResponse {
    /// Classify the body. A truthy `error` wins even when data arrays are
    /// also present; channel contents never affect the classification.
    pub fn into_outcome(self) -> HistoryOutcome {
        if let Some(message) = self.error.as_ref().and_then(error_message) {
            return HistoryOutcome::ServerError(message);
        }

        let timestamps: Vec<String> = elements(self.timestamps)
            .iter()
            .map(timestamp_text)
            .collect();
        if timestamps.is_empty() {
            return HistoryOutcome::Empty;
        }

        HistoryOutcome::Series(SensorHistory {
            timestamps,
            ir: readings(self.ir),
            ultrasonic: readings(self.ultrasonic),
            speed: readings(self.speed),
        })
    }
}

fn error_message(error: &Value) -> Option<String> {
    match error {
        Value::Null | Value::Bool(false) => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        other => Some(other.to_string()),
    }
}

fn elements(field: Option<Value>) -> Vec<Value> {
    match field {
        Some(Value::Array(items)) => items,
        _ => Vec::new(),
    }
}

fn timestamp_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Numbers, booleans and numeric strings plot; anything else is a gap.
fn readings(field: Option<Value>) -> Vec<Option<f64>> {
    elements(field)
        .iter()
        .map(|value| match value {
            Value::Number(n) => n.as_f64(),
            Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        })
        .collect()
}
