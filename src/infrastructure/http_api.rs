// Dashboard API client - reqwest adapter for the backend's JSON endpoints
use crate::application::device_control::DeviceControl;
use crate::application::error::TransportError;
use crate::application::history_source::HistorySource;
use crate::domain::control::{ControlAck, ControlCommand};
use crate::domain::history::{HistoryQuery, HistoryResponse};
use crate::infrastructure::config::{control_url, history_url, ApiSettings};
use anyhow::{Context, Result};
use async_trait::async_trait;

#[derive(Debug, Clone)]
pub struct DashboardApi {
    base_url: String,
    client: reqwest::Client,
}

impl DashboardApi {
    pub fn new(settings: &ApiSettings) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = settings.timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().context("Failed to build HTTP client")?;

        Ok(Self {
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            client,
        })
    }
}

#[async_trait]
impl HistorySource for DashboardApi {
    async fn fetch_history(&self, query: &HistoryQuery) -> Result<HistoryResponse, TransportError> {
        let url = history_url(&self.base_url, &query.date);
        tracing::debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| TransportError::Request {
                url: url.clone(),
                source: Box::new(e),
            })?;

        // Error statuses still carry a JSON body with an `error` field
        let status = response.status();
        if !status.is_success() {
            tracing::debug!("History request for {} answered {}", query.date, status);
        }

        response
            .json::<HistoryResponse>()
            .await
            .map_err(|e| TransportError::Decode {
                url,
                source: Box::new(e),
            })
    }
}

#[async_trait]
impl DeviceControl for DashboardApi {
    async fn send_control(&self, command: ControlCommand) -> Result<ControlAck> {
        let url = control_url(&self.base_url);
        let request = command.request();
        tracing::debug!("POST {} {:?}", url, request);

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .context("Failed to send control request")?;

        let status = response.status();
        let body = response
            .text()
            .await
            .context("Failed to read control response")?;

        serde_json::from_str::<ControlAck>(&body)
            .with_context(|| format!("Unexpected control response ({}): {}", status, body))
    }
}
