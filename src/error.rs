//! Error types for maestera

use crate::form::FieldIssue;
use std::time::Duration;
use thiserror::Error;

/// Failure forwarding a payload to the upstream script endpoint
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SubmissionError {
    /// Network failure before a response was received
    #[error("transport error: {0}")]
    Transport(String),

    /// Upstream answered with a non-2xx status
    #[error("upstream returned HTTP {status}: {body}")]
    UpstreamStatus {
        /// HTTP status code
        status: u16,
        /// Raw response body
        body: String,
    },

    /// Upstream did not answer within the configured timeout
    #[error("upstream timed out after {0:?}")]
    Timeout(Duration),
}

impl SubmissionError {
    /// Classify a reqwest error, keeping timeouts distinct
    pub fn from_reqwest(err: &reqwest::Error, timeout: Duration) -> Self {
        if err.is_timeout() {
            Self::Timeout(timeout)
        } else {
            Self::Transport(err.to_string())
        }
    }
}

/// Errors that can occur in maestera
#[derive(Debug, Error)]
pub enum Error {
    /// Missing or malformed configuration
    #[error("configuration error: {0}")]
    Config(String),

    /// A form step failed validation
    #[error("{}", format_issues(.issues))]
    Validation {
        /// Field-level warnings to surface to the user
        issues: Vec<FieldIssue>,
    },

    /// Upstream submission failed
    #[error(transparent)]
    Submission(#[from] SubmissionError),

    /// A submit was requested while one is already outstanding
    #[error("a submission is already in progress")]
    SubmissionInFlight,

    /// Session state machine was driven out of order
    #[error("invalid state transition: {0}")]
    InvalidState(String),

    /// JSON (de)serialization failure
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

fn format_issues(issues: &[FieldIssue]) -> String {
    match issues {
        [] => "validation failed".to_string(),
        [only] => only.message.clone(),
        [first, rest @ ..] => format!("{} (and {} more)", first.message, rest.len()),
    }
}

/// Result type alias for maestera operations
pub type Result<T> = std::result::Result<T, Error>;
