//! Spreadsheet script endpoint client

use crate::error::{Error, Result, SubmissionError};
use crate::proxy::{decode_ack, SubmissionSink};
use crate::types::Ack;
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, error, info, warn};
use url::Url;

/// Default upstream timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Sink posting to a Google Apps Script style endpoint using reqwest
pub struct SheetsClient {
    client: Client,
    endpoint: Url,
    timeout: Duration,
}

impl SheetsClient {
    /// Create a client for one endpoint with an explicit request timeout
    pub fn new(endpoint: Url, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::Config(format!("cannot build HTTP client: {e}")))?;

        Ok(Self {
            client,
            endpoint,
            timeout,
        })
    }

    /// Configured request timeout
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    fn transport_error(&self, err: &reqwest::Error) -> SubmissionError {
        let classified = SubmissionError::from_reqwest(err, self.timeout);
        error!(endpoint = %self.endpoint, error = %classified, "upstream request failed");
        classified
    }
}

#[async_trait]
impl SubmissionSink for SheetsClient {
    async fn submit(&self, payload: &Value) -> std::result::Result<Ack, SubmissionError> {
        debug!(endpoint = %self.endpoint, "forwarding submission");

        let response = self
            .client
            .post(self.endpoint.clone())
            .json(payload)
            .send()
            .await
            .map_err(|e| self.transport_error(&e))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| self.transport_error(&e))?;

        if !status.is_success() {
            warn!(
                endpoint = %self.endpoint,
                status = status.as_u16(),
                "upstream rejected submission"
            );
            return Err(SubmissionError::UpstreamStatus {
                status: status.as_u16(),
                body,
            });
        }

        info!(endpoint = %self.endpoint, status = status.as_u16(), "submission forwarded");
        Ok(decode_ack(&body))
    }

    fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}
