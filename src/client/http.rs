// src/client/http.rs

use reqwest::Client;
use std::time::Instant;

use crate::client::SentimentApi;
use crate::config::SentimentApiConfig;
use crate::errors::{Result, SentimentError};
use crate::models::{SentimentRequest, SentimentResponse};
use crate::validator::SubmissionText;

/// Client for the external sentiment model API.
#[derive(Clone)]
pub struct SentimentClient {
    client: Client,
    config: SentimentApiConfig,
}

impl SentimentClient {
    /// Creates a new `SentimentClient`.
    pub fn new(client: Client, config: SentimentApiConfig) -> Self {
        Self { client, config }
    }
}

impl SentimentApi for SentimentClient {
    /// Posts the text once and validates the returned body. No retries.
    async fn analyze(&self, text: &SubmissionText) -> Result<SentimentResponse> {
        let url = self.config.endpoint();
        let body = SentimentRequest::from(text);

        log::info!("Calling sentiment API: {}", url);
        log::debug!("Sentiment request text: {:?}", body.text);

        let start = Instant::now();

        // .json() also sets Content-Type: application/json
        let resp = self.client.post(&url).json(&body).send().await?;

        let status = resp.status();
        let latency_ms = start.elapsed().as_millis() as u64;

        log::info!("Sentiment API response status: {} ({}ms)", status, latency_ms);

        if !status.is_success() {
            let error_body = resp
                .text()
                .await
                .unwrap_or_else(|_| "Could not read error body".to_string());
            return Err(SentimentError::ApiError {
                status: status.as_u16(),
                body: error_body,
            });
        }

        let bytes = resp.bytes().await?;
        SentimentResponse::from_json(&bytes)
    }
}
