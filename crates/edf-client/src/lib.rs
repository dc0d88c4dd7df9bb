//! EDF Client: HTTP submission client for the classification endpoint.
//!
//! One multipart POST per call, single attempt, bounded timeout. Every
//! failure mode (network, timeout, bad status, undecodable body) collapses
//! into `SubmissionOutcome::TransportError` with the detail in the message.

pub mod payload;

use std::time::Duration;

use async_trait::async_trait;
use reqwest::multipart;

use edf_core::{CandidateFile, ClassificationBackend, SubmissionOutcome};
use payload::RawClassification;

/// Default per-request timeout when the caller does not configure one.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Client for one classification endpoint. Cheap to clone; the underlying
/// connection pool is shared.
#[derive(Debug, Clone)]
pub struct SubmissionClient {
    http: reqwest::Client,
    endpoint: String,
    timeout: Duration,
}

impl SubmissionClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: endpoint.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Override the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Send one file for classification. The multipart body carries a
    /// single part, field name `file`, with the original filename. The
    /// bytes are not retained after the call returns.
    pub async fn submit(&self, file: &CandidateFile) -> SubmissionOutcome {
        tracing::debug!(
            endpoint = %self.endpoint,
            file = %file.file_name,
            size = file.len(),
            "submitting file for classification"
        );

        let part = multipart::Part::bytes(file.bytes.clone()).file_name(file.file_name.clone());
        let form = multipart::Form::new().part("file", part);

        let response = match self
            .http
            .post(&self.endpoint)
            .multipart(form)
            .timeout(self.timeout)
            .send()
            .await
        {
            Ok(response) => response,
            Err(err) => {
                tracing::warn!(error = %err, "classification request failed to complete");
                return SubmissionOutcome::TransportError {
                    message: format!("request failed: {}", err),
                };
            }
        };

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(%status, "classification endpoint returned an error status");
            return SubmissionOutcome::TransportError {
                message: format!("backend returned status {}", status),
            };
        }

        match response.json::<RawClassification>().await {
            Ok(raw) => SubmissionOutcome::Response {
                classification: raw.classification,
                confidence: raw.confidence,
            },
            Err(err) => {
                tracing::warn!(error = %err, "classification response body was undecodable");
                SubmissionOutcome::TransportError {
                    message: format!("undecodable response body: {}", err),
                }
            }
        }
    }
}

#[async_trait]
impl ClassificationBackend for SubmissionClient {
    async fn submit(&self, file: &CandidateFile) -> SubmissionOutcome {
        SubmissionClient::submit(self, file).await
    }
}
