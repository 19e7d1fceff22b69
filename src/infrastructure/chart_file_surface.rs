// Chart surface that writes Chart.js configurations to a file
use crate::application::view::{ChartId, ChartSurface};
use crate::domain::chart::ChartSpec;
use anyhow::Context;
use std::path::PathBuf;

/// Holds at most one chart: the file at `path`. Creating a chart writes the
/// Chart.js config there; destroying it removes the file.
#[derive(Debug)]
pub struct ChartFileSurface {
    path: PathBuf,
    next_id: u64,
    current: Option<ChartId>,
}

impl ChartFileSurface {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            next_id: 0,
            current: None,
        }
    }
}

impl ChartSurface for ChartFileSurface {
    fn create(&mut self, spec: &ChartSpec) -> anyhow::Result<ChartId> {
        let body = serde_json::to_string_pretty(&spec.to_chartjs())?;
        std::fs::write(&self.path, body)
            .with_context(|| format!("Failed to write chart to {}", self.path.display()))?;

        self.next_id += 1;
        let id = ChartId(self.next_id);
        self.current = Some(id);
        Ok(id)
    }

    fn destroy(&mut self, id: ChartId) {
        if self.current != Some(id) {
            return;
        }
        self.current = None;

        if let Err(e) = std::fs::remove_file(&self.path) {
            if e.kind() != std::io::ErrorKind::NotFound {
                tracing::warn!("Failed to remove chart {}: {}", self.path.display(), e);
            }
        }
    }
}
