// Port for fetching historical telemetry
use crate::application::error::TransportError;
use crate::domain::history::{HistoryQuery, HistoryResponse};
use async_trait::async_trait;

#[async_trait]
pub trait HistorySource: Send + Sync {
    /// Fetch the readings recorded on `query.date`.
    ///
    /// Server-reported errors come back as `Ok` with `error` set; only
    /// transport and decoding failures are `Err`.
    async fn fetch_history(&self, query: &HistoryQuery) -> Result<HistoryResponse, TransportError>;
}
