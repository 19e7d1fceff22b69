// In-memory fakes of the ports, shared by the use case tests
use crate::application::error::TransportError;
use crate::application::history_source::HistorySource;
use crate::application::view::{ChartId, ChartSurface, DateInput, StatusSink};
use crate::domain::chart::ChartSpec;
use crate::domain::history::{HistoryQuery, HistoryResponse};
use crate::domain::status::StatusMessage;
use async_trait::async_trait;
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};
use tokio::sync::oneshot;

#[derive(Clone, Default)]
pub struct FixedDate(pub Option<String>);

impl FixedDate {
    pub fn of(date: &str) -> Self {
        Self(Some(date.to_string()))
    }
}

impl DateInput for FixedDate {
    fn selected_date(&self) -> Option<String> {
        self.0.clone()
    }
}

/// Date input whose value can be changed between loads.
#[derive(Clone, Default)]
pub struct SharedDate(Arc<Mutex<Option<String>>>);

impl SharedDate {
    pub fn set(&self, date: &str) {
        *self.0.lock().unwrap() = Some(date.to_string());
    }
}

impl DateInput for SharedDate {
    fn selected_date(&self) -> Option<String> {
        self.0.lock().unwrap().clone()
    }
}

#[derive(Clone, Default)]
pub struct RecordingStatus(Arc<Mutex<Vec<StatusMessage>>>);

impl RecordingStatus {
    pub fn messages(&self) -> Vec<StatusMessage> {
        self.0.lock().unwrap().clone()
    }

    pub fn last(&self) -> Option<StatusMessage> {
        self.0.lock().unwrap().last().cloned()
    }
}

impl StatusSink for RecordingStatus {
    fn show(&mut self, message: StatusMessage) {
        self.0.lock().unwrap().push(message);
    }
}

#[derive(Default)]
struct SurfaceState {
    next_id: u64,
    live: Vec<(ChartId, ChartSpec)>,
    destroyed: Vec<ChartId>,
    fail_next: bool,
}

#[derive(Clone, Default)]
pub struct RecordingSurface(Arc<Mutex<SurfaceState>>);

impl RecordingSurface {
    pub fn live_ids(&self) -> Vec<ChartId> {
        self.0.lock().unwrap().live.iter().map(|(id, _)| *id).collect()
    }

    pub fn live_specs(&self) -> Vec<ChartSpec> {
        self.0.lock().unwrap().live.iter().map(|(_, spec)| spec.clone()).collect()
    }

    pub fn destroyed(&self) -> Vec<ChartId> {
        self.0.lock().unwrap().destroyed.clone()
    }

    pub fn fail_next_create(&self) {
        self.0.lock().unwrap().fail_next = true;
    }
}

impl ChartSurface for RecordingSurface {
    fn create(&mut self, spec: &ChartSpec) -> anyhow::Result<ChartId> {
        let mut state = self.0.lock().unwrap();
        if std::mem::take(&mut state.fail_next) {
            anyhow::bail!("canvas unavailable");
        }
        state.next_id += 1;
        let id = ChartId(state.next_id);
        state.live.push((id, spec.clone()));
        Ok(id)
    }

    fn destroy(&mut self, id: ChartId) {
        let mut state = self.0.lock().unwrap();
        state.live.retain(|(live, _)| *live != id);
        state.destroyed.push(id);
    }
}

/// History source answering from a script, one reply per call.
#[derive(Clone, Default)]
pub struct ScriptedSource {
    replies: Arc<Mutex<VecDeque<Result<HistoryResponse, TransportError>>>>,
    requested: Arc<Mutex<Vec<String>>>,
}

impl ScriptedSource {
    pub fn reply(self, response: HistoryResponse) -> Self {
        self.replies.lock().unwrap().push_back(Ok(response));
        self
    }

    pub fn reply_json(self, body: &str) -> Self {
        self.reply(serde_json::from_str(body).unwrap())
    }

    pub fn fail(self, error: TransportError) -> Self {
        self.replies.lock().unwrap().push_back(Err(error));
        self
    }

    pub fn requested(&self) -> Vec<String> {
        self.requested.lock().unwrap().clone()
    }
}

#[async_trait]
impl HistorySource for ScriptedSource {
    async fn fetch_history(&self, query: &HistoryQuery) -> Result<HistoryResponse, TransportError> {
        self.requested.lock().unwrap().push(query.date.clone());
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .expect("no scripted reply left")
    }
}

/// History source whose replies are released by the test, per date.
#[derive(Clone, Default)]
pub struct GatedSource {
    gates: Arc<Mutex<HashMap<String, oneshot::Receiver<HistoryResponse>>>>,
}

impl GatedSource {
    pub fn gate(&self, date: &str) -> oneshot::Sender<HistoryResponse> {
        let (tx, rx) = oneshot::channel();
        self.gates.lock().unwrap().insert(date.to_string(), rx);
        tx
    }
}

#[async_trait]
impl HistorySource for GatedSource {
    async fn fetch_history(&self, query: &HistoryQuery) -> Result<HistoryResponse, TransportError> {
        let rx = self
            .gates
            .lock()
            .unwrap()
            .remove(&query.date)
            .expect("no gate for date");
        rx.await.map_err(|e| TransportError::Request {
            url: format!("/api/history?date={}", query.date),
            source: Box::new(e),
        })
    }
}

pub fn two_points() -> HistoryResponse {
    serde_json::from_str(
        r#"{"timestamps":["2024-03-01T10:00:00Z","2024-03-01T10:00:05Z"],"ir":[1,0],"ultrasonic":[12.5,13.0],"speed":[0,1]}"#,
    )
    .unwrap()
}
