// Chart domain model - what gets drawn for a day of sensor history
use super::history::SensorHistory;
use super::time_label::TimeLabeler;
use serde_json::{json, Value};

/// Upper bound on x-axis tick labels, whatever the series length.
pub const MAX_X_TICKS: usize = 10;

const FILL_ALPHA: f64 = 0.1;
const LINE_TENSION: f64 = 0.3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub fn hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }

    pub fn rgba(&self, alpha: f64) -> String {
        format!("rgba({}, {}, {}, {})", self.0, self.1, self.2, alpha)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ChartKind {
    Line,
}

impl ChartKind {
    fn as_str(&self) -> &'static str {
        match self {
            ChartKind::Line => "line",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SeriesData {
    pub label: String,
    pub color: Rgb,
    /// `None` entries are gaps and serialize as `null`.
    pub values: Vec<Option<f64>>,
}

impl SeriesData {
    pub fn new(label: &str, color: Rgb, values: Vec<Option<f64>>) -> Self {
        Self {
            label: label.to_string(),
            color,
            values,
        }
    }

    pub fn fill(&self) -> String {
        self.color.rgba(FILL_ALPHA)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Axis {
    pub title: String,
    pub begin_at_zero: bool,
    pub max_ticks: Option<usize>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartSpec {
    pub kind: ChartKind,
    pub title: String,
    pub labels: Vec<String>,
    pub series: Vec<SeriesData>,
    pub x_axis: Axis,
    pub y_axis: Axis,
}

impl ChartSpec {
    /// IR, ultrasonic and speed channels over one shared time axis.
    pub fn sensor_history(date: &str, history: &SensorHistory, labeler: &TimeLabeler) -> Self {
        Self {
            kind: ChartKind::Line,
            title: format!("Sensor Data for {}", date),
            labels: labeler.labels(&history.timestamps),
            series: vec![
                SeriesData::new("IR Sensor", Rgb(231, 76, 60), history.ir.clone()),
                SeriesData::new("Ultrasonic (cm)", Rgb(52, 152, 219), history.ultrasonic.clone()),
                SeriesData::new("Speed", Rgb(46, 204, 113), history.speed.clone()),
            ],
            x_axis: Axis {
                title: "Time".to_string(),
                begin_at_zero: false,
                max_ticks: Some(MAX_X_TICKS),
            },
            y_axis: Axis {
                title: "Sensor Values".to_string(),
                begin_at_zero: true,
                max_ticks: None,
            },
        }
    }

    /// Labels actually shown on the x axis: evenly strided, first label
    /// always kept, never more than the axis limit.
    pub fn x_tick_labels(&self) -> Vec<&str> {
        let limit = self.x_axis.max_ticks.unwrap_or(self.labels.len()).max(1);
        let stride = self.labels.len().div_ceil(limit).max(1);

        self.labels
            .iter()
            .step_by(stride)
            .map(String::as_str)
            .collect()
    }

    /// Chart.js configuration for this chart.
    pub fn to_chartjs(&self) -> Value {
        let datasets: Vec<Value> = self
            .series
            .iter()
            .map(|s| {
                json!({
                    "label": s.label,
                    "data": s.values,
                    "borderColor": s.color.hex(),
                    "backgroundColor": s.fill(),
                    "fill": true,
                    "tension": LINE_TENSION,
                })
            })
            .collect();

        let mut x_ticks = json!({});
        if let Some(limit) = self.x_axis.max_ticks {
            x_ticks["maxTicksLimit"] = json!(limit);
        }

        json!({
            "type": self.kind.as_str(),
            "data": {
                "labels": self.labels,
                "datasets": datasets,
            },
            "options": {
                "responsive": true,
                "maintainAspectRatio": true,
                "plugins": {
                    "title": { "display": true, "text": self.title },
                    "legend": { "display": true, "position": "top" },
                },
                "scales": {
                    "y": {
                        "beginAtZero": self.y_axis.begin_at_zero,
                        "title": { "display": true, "text": self.y_axis.title },
                    },
                    "x": {
                        "title": { "display": true, "text": self.x_axis.title },
                        "ticks": x_ticks,
                    },
                },
            },
        })
    }
}
