//! Mock submission sink for testing
//!
//! These are test utilities - not all may be used in current tests but are
//! available for future test development.

#![allow(dead_code)]

use async_trait::async_trait;
use maestera::error::SubmissionError;
use maestera::proxy::SubmissionSink;
use maestera::types::Ack;
use serde_json::{json, Value};
use std::sync::Mutex;
use url::Url;

/// Call-recording sink
///
/// Features:
/// - Records every payload it receives
/// - Configurable acknowledgement
/// - Error injection for failure path testing
pub struct MockSink {
    endpoint: Url,
    ack: Mutex<Value>,
    calls: Mutex<Vec<Value>>,
    error: Mutex<Option<SubmissionError>>,
}

impl Default for MockSink {
    fn default() -> Self {
        Self::new("https://script.example.com/exec")
    }
}

impl MockSink {
    /// Create a sink that acknowledges with `{"result":"success"}`
    pub fn new(endpoint: &str) -> Self {
        Self {
            endpoint: Url::parse(endpoint).unwrap(),
            ack: Mutex::new(json!({ "result": "success" })),
            calls: Mutex::new(Vec::new()),
            error: Mutex::new(None),
        }
    }

    // === Response configuration ===

    /// Acknowledge subsequent submissions with `ack`
    pub fn respond_with(&self, ack: Value) {
        *self.ack.lock().unwrap() = ack;
    }

    /// Make subsequent submissions fail
    pub fn fail_with(&self, err: SubmissionError) {
        *self.error.lock().unwrap() = Some(err);
    }

    /// Clear an injected failure
    pub fn recover(&self) {
        *self.error.lock().unwrap() = None;
    }

    // === Call verification ===

    /// Every payload submitted so far
    pub fn calls(&self) -> Vec<Value> {
        self.calls.lock().unwrap().clone()
    }

    /// Number of submissions so far
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// Assert exactly one submission with the given `fullName`
    pub fn assert_submitted_once_for(&self, full_name: &str) {
        let calls = self.calls();
        assert_eq!(calls.len(), 1, "Expected one submission but got: {calls:?}");
        assert_eq!(
            calls[0]["fullName"], full_name,
            "Unexpected payload: {:?}",
            calls[0]
        );
    }
}

#[async_trait]
impl SubmissionSink for MockSink {
    async fn submit(&self, payload: &Value) -> Result<Ack, SubmissionError> {
        self.calls.lock().unwrap().push(payload.clone());

        if let Some(err) = self.error.lock().unwrap().clone() {
            return Err(err);
        }

        Ok(Ack(self.ack.lock().unwrap().clone()))
    }

    fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}
