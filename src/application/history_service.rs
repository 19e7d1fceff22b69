// History service - Use case for loading a day of readings into the chart
use crate::application::chart_controller::{ChartController, ChartHandle};
use crate::application::error::{LoadError, TransportError};
use crate::application::history_source::HistorySource;
use crate::application::view::{ChartSurface, DateInput, StatusSink};
use crate::domain::chart::ChartSpec;
use crate::domain::history::{HistoryOutcome, HistoryQuery, HistoryResponse};
use crate::domain::status::StatusMessage;
use crate::domain::time_label::TimeLabeler;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    Rendered { points: usize },
    Empty,
    /// A later load was issued before this one completed; nothing applied.
    Superseded,
}

/// A load that passed validation and holds a request token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingLoad {
    pub query: HistoryQuery,
    ticket: u64,
}

struct HistoryView {
    status: Box<dyn StatusSink>,
    chart: ChartController,
}

pub struct HistoryLoader {
    source: Arc<dyn HistorySource>,
    input: Arc<dyn DateInput>,
    labeler: TimeLabeler,
    latest: AtomicU64,
    view: Mutex<HistoryView>,
}

impl HistoryLoader {
    pub fn new(
        source: Arc<dyn HistorySource>,
        input: Arc<dyn DateInput>,
        status: Box<dyn StatusSink>,
        surface: Box<dyn ChartSurface>,
        labeler: TimeLabeler,
    ) -> Self {
        Self {
            source,
            input,
            labeler,
            latest: AtomicU64::new(0),
            view: Mutex::new(HistoryView {
                status,
                chart: ChartController::new(surface),
            }),
        }
    }

    /// Load the date currently selected in the input and render it.
    pub async fn load_history(&self) -> Result<LoadOutcome, LoadError> {
        let pending = self.begin()?;
        self.resolve(pending).await
    }

    /// Validate the selected date, take a request token and show the
    /// loading message. No request is made here.
    pub fn begin(&self) -> Result<PendingLoad, LoadError> {
        let selected = self.input.selected_date();
        let Some(query) = HistoryQuery::from_input(selected.as_deref()) else {
            self.view().status.show(StatusMessage::prompt());
            return Err(LoadError::Validation);
        };

        let ticket = self.latest.fetch_add(1, Ordering::SeqCst) + 1;
        tracing::debug!("Loading history for {} (request {})", query.date, ticket);
        self.view().status.show(StatusMessage::loading());

        Ok(PendingLoad { query, ticket })
    }

    /// Fetch the pending load and apply the result, unless a newer load has
    /// been issued in the meantime.
    pub async fn resolve(&self, pending: PendingLoad) -> Result<LoadOutcome, LoadError> {
        let result = self.source.fetch_history(&pending.query).await;

        let mut view = self.view();
        let latest = self.latest.load(Ordering::SeqCst);
        if pending.ticket != latest {
            tracing::warn!(
                "Discarding history for {} (request {}, latest {})",
                pending.query.date,
                pending.ticket,
                latest
            );
            return Ok(LoadOutcome::Superseded);
        }

        self.apply(&mut view, &pending.query, result)
    }

    /// Snapshot of the chart currently shown, if any.
    pub fn live_chart(&self) -> Option<ChartHandle> {
        self.view().chart.live().cloned()
    }

    fn apply(
        &self,
        view: &mut HistoryView,
        query: &HistoryQuery,
        result: Result<HistoryResponse, TransportError>,
    ) -> Result<LoadOutcome, LoadError> {
        let response = match result {
            Ok(response) => response,
            Err(e) => {
                tracing::error!("Chart loading error for {}: {:?}", query.date, e);
                view.status.show(StatusMessage::transport_failure());
                return Err(e.into());
            }
        };

        match response.into_outcome() {
            HistoryOutcome::ServerError(message) => {
                tracing::warn!("Server reported error for {}: {}", query.date, message);
                view.status.show(StatusMessage::server_error(&message));
                Err(LoadError::ServerReported(message))
            }
            HistoryOutcome::Empty => {
                view.status.show(StatusMessage::empty(&query.date));
                view.chart.clear();
                Ok(LoadOutcome::Empty)
            }
            HistoryOutcome::Series(history) => {
                let points = history.len();
                let spec = ChartSpec::sensor_history(&query.date, &history, &self.labeler);

                if let Err(e) = view.chart.render(spec) {
                    tracing::error!("Chart rendering error for {}: {:?}", query.date, e);
                    view.status.show(StatusMessage::render_failure());
                    return Err(LoadError::Surface(e.into()));
                }

                view.status.show(StatusMessage::showing(points, &query.date));
                Ok(LoadOutcome::Rendered { points })
            }
        }
    }

    fn view(&self) -> MutexGuard<'_, HistoryView> {
        self.view.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
