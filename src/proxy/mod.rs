//! Submission proxy
//!
//! Forwards an opaque JSON payload to the spreadsheet script endpoint and
//! normalizes whatever comes back into an [`Ack`].

mod factory;
mod response;
mod sheets;

pub use factory::create_sink;
pub use response::decode_ack;
pub use sheets::{SheetsClient, DEFAULT_TIMEOUT_SECS};

use crate::error::SubmissionError;
use crate::types::Ack;
use async_trait::async_trait;
use serde_json::Value;
use url::Url;

/// Destination for form submissions
///
/// Implementations never panic on upstream trouble; every failure comes back
/// as a [`SubmissionError`].
#[async_trait]
pub trait SubmissionSink: Send + Sync {
    /// Forward one payload as a single POST
    async fn submit(&self, payload: &Value) -> Result<Ack, SubmissionError>;

    /// Upstream URL this sink posts to
    fn endpoint(&self) -> &Url;
}
