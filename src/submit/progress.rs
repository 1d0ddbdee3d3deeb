//! Progress callback trait for interface-agnostic updates
//!
//! This trait allows different interfaces (CLI, web server, etc.) to receive
//! progress updates during a submission.

use crate::error::Error;
use crate::types::{Ack, FormPart};
use async_trait::async_trait;
use std::fmt;

/// Submission phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Checking every step of the form
    Validating,
    /// Waiting on the upstream endpoint
    Submitting,
    /// Submission acknowledged
    Complete,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Validating => write!(f, "Validating"),
            Self::Submitting => write!(f, "Submitting"),
            Self::Complete => write!(f, "Complete"),
        }
    }
}

/// Progress callback trait
///
/// Implement this trait to receive progress updates during submission.
#[async_trait]
pub trait ProgressCallback: Send + Sync {
    /// Called when entering a new phase
    async fn on_phase(&self, phase: Phase);

    /// Called when upstream acknowledges a submission
    async fn on_submitted(&self, part: FormPart, ack: &Ack);

    /// Called with a diagnostic when validation or submission fails
    async fn on_error(&self, error: &Error);

    /// Called with a general status message
    async fn on_message(&self, message: &str);
}

/// No-op progress callback for testing or when progress isn't needed
pub struct NoopProgress;

#[async_trait]
impl ProgressCallback for NoopProgress {
    async fn on_phase(&self, _phase: Phase) {}
    async fn on_submitted(&self, _part: FormPart, _ack: &Ack) {}
    async fn on_error(&self, _error: &Error) {}
    async fn on_message(&self, _message: &str) {}
}
