use std::sync::Arc;
use std::time::Duration;

use futures_util::StreamExt;
use pasi_core::AnalysisResult;
use reqwest::header::CONTENT_TYPE;
use serde::{Deserialize, Serialize};
use widget_logging::{widget_debug, widget_info};

use crate::{AnalysisFailure, FailureKind};

pub const DEFAULT_ENDPOINT: &str = "http://localhost:8080/api/pasi-score";
pub const SIMULATED_DELAY_MS: u64 = 3000;

const SIMULATED_SCORE_LINE: &str = "Head region PASI score: 4.8";
const SIMULATED_SUMMARY_LINE: &str =
    "Affected surface: 30% | erythema: moderate | induration: mild | desquamation: mild";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisMode {
    Remote,
    #[default]
    Simulated,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisSettings {
    pub mode: AnalysisMode,
    pub endpoint: String,
    /// No timeout unless the host sets one.
    pub request_timeout_ms: Option<u64>,
    pub max_response_bytes: u64,
    pub simulated_delay_ms: u64,
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        Self {
            mode: AnalysisMode::default(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            request_timeout_ms: None,
            max_response_bytes: 1024 * 1024,
            simulated_delay_ms: SIMULATED_DELAY_MS,
        }
    }
}

#[async_trait::async_trait]
pub trait AnalysisInvoker: Send + Sync {
    async fn invoke(&self, payload: &str) -> Result<AnalysisResult, AnalysisFailure>;
}

/// Picks the one invoker the settings ask for.
pub fn build_invoker(settings: &AnalysisSettings) -> Arc<dyn AnalysisInvoker> {
    match settings.mode {
        AnalysisMode::Remote => Arc::new(RemoteAnalysisInvoker::new(settings.clone())),
        AnalysisMode::Simulated => Arc::new(SimulatedAnalysisInvoker::new(Duration::from_millis(
            settings.simulated_delay_ms,
        ))),
    }
}

/// The fixed two-line result produced by the simulation.
pub fn synthetic_result() -> AnalysisResult {
    AnalysisResult::new(format!("{SIMULATED_SCORE_LINE}\n{SIMULATED_SUMMARY_LINE}"))
}

#[derive(Debug, Clone)]
pub struct SimulatedAnalysisInvoker {
    delay: Duration,
}

impl SimulatedAnalysisInvoker {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for SimulatedAnalysisInvoker {
    fn default() -> Self {
        Self::new(Duration::from_millis(SIMULATED_DELAY_MS))
    }
}

#[async_trait::async_trait]
impl AnalysisInvoker for SimulatedAnalysisInvoker {
    async fn invoke(&self, payload: &str) -> Result<AnalysisResult, AnalysisFailure> {
        widget_debug!(
            "simulating analysis of {} byte payload, delay={:?}",
            payload.len(),
            self.delay
        );
        tokio::time::sleep(self.delay).await;
        Ok(synthetic_result())
    }
}

/// Posts the payload to the scoring service once. No retry.
#[derive(Debug, Clone)]
pub struct RemoteAnalysisInvoker {
    settings: AnalysisSettings,
}

impl RemoteAnalysisInvoker {
    pub fn new(settings: AnalysisSettings) -> Self {
        Self { settings }
    }

    fn build_client(&self) -> Result<reqwest::Client, AnalysisFailure> {
        let mut builder = reqwest::Client::builder();
        if let Some(ms) = self.settings.request_timeout_ms {
            builder = builder.timeout(Duration::from_millis(ms));
        }
        builder
            .build()
            .map_err(|err| AnalysisFailure::new(FailureKind::Network, err.to_string()))
    }
}

#[async_trait::async_trait]
impl AnalysisInvoker for RemoteAnalysisInvoker {
    async fn invoke(&self, payload: &str) -> Result<AnalysisResult, AnalysisFailure> {
        let endpoint = url::Url::parse(&self.settings.endpoint)
            .map_err(|err| AnalysisFailure::new(FailureKind::InvalidEndpoint, err.to_string()))?;
        let body = serde_json::to_string(payload)
            .map_err(|err| AnalysisFailure::new(FailureKind::InvalidBody, err.to_string()))?;
        let client = self.build_client()?;

        widget_info!(
            "posting analysis request to {} body_len={}",
            endpoint,
            body.len()
        );
        let response = client
            .post(endpoint.as_str())
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(AnalysisFailure::new(
                FailureKind::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }

        let max_bytes = self.settings.max_response_bytes;
        if let Some(content_len) = response.content_length() {
            if content_len > max_bytes {
                return Err(AnalysisFailure::new(
                    FailureKind::TooLarge {
                        max_bytes,
                        actual: Some(content_len),
                    },
                    "response too large",
                ));
            }
        }

        let mut bytes = Vec::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(map_reqwest_error)?;
            let next_len = bytes.len() as u64 + chunk.len() as u64;
            if next_len > max_bytes {
                return Err(AnalysisFailure::new(
                    FailureKind::TooLarge {
                        max_bytes,
                        actual: Some(next_len),
                    },
                    "response too large",
                ));
            }
            bytes.extend_from_slice(&chunk);
        }

        let value: serde_json::Value = serde_json::from_slice(&bytes)
            .map_err(|err| AnalysisFailure::new(FailureKind::InvalidBody, err.to_string()))?;
        Ok(AnalysisResult::new(result_text(&value)))
    }
}

/// A bare string or an object's `result` string is shown as is; anything else
/// is shown as pretty-printed JSON.
fn result_text(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(text) => text.clone(),
        serde_json::Value::Object(map) => match map.get("result") {
            Some(serde_json::Value::String(text)) => text.clone(),
            _ => pretty(value),
        },
        _ => pretty(value),
    }
}

fn pretty(value: &serde_json::Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}

fn map_reqwest_error(err: reqwest::Error) -> AnalysisFailure {
    if err.is_timeout() {
        return AnalysisFailure::new(FailureKind::Timeout, err.to_string());
    }
    AnalysisFailure::new(FailureKind::Network, err.to_string())
}
