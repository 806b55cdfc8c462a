// src/api/client.rs
use reqwest::StatusCode;
use tracing::{debug, info};

use super::error::AnalysisError;
use super::types::{AnalyzeStocksRequest, AnalyzeStocksResponse, ErrorEnvelope};

/// Client for the remote stock-analysis endpoint.
///
/// No timeout and no retry: a call waits as long as the server takes.
#[derive(Debug, Clone)]
pub struct AnalysisClient {
    client: reqwest::Client,
    endpoint: String,
}

impl AnalysisClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    /// Issue one analysis request and return the `topPicks` text.
    pub async fn analyze(&self, request: &AnalyzeStocksRequest) -> Result<String, AnalysisError> {
        info!(
            endpoint = %self.endpoint,
            keywords = %request.search_params.keywords,
            "running stock analysis"
        );

        let response = self.client
            .post(&self.endpoint)
            .json(request)
            .send()
            .await
            .map_err(|e| AnalysisError::transport(None, e.to_string()))?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| AnalysisError::transport(None, e.to_string()))?;

        debug!(%status, bytes = body.len(), "analysis response received");
        interpret_response(status, &body)
    }
}

/// Map a raw HTTP response onto the analysis outcome.
pub fn interpret_response(status: StatusCode, body: &[u8]) -> Result<String, AnalysisError> {
    if !status.is_success() {
        let envelope: ErrorEnvelope = serde_json::from_slice(body).unwrap_or_default();
        return Err(AnalysisError::transport(
            envelope.message_text(),
            format!("server returned {}", status),
        ));
    }

    let payload: AnalyzeStocksResponse = serde_json::from_slice(body)
        .map_err(|e| AnalysisError::transport(None, format!("malformed response: {}", e)))?;

    if payload.succeeded() {
        Ok(payload.top_picks.unwrap_or_default())
    } else {
        Err(AnalysisError::application(payload.message_text()))
    }
}
