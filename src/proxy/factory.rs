//! Submission sink factory
//!
//! Creates sinks based on configuration.

use crate::config::ProxyConfig;
use crate::error::Result;
use crate::proxy::{SheetsClient, SubmissionSink};
use crate::types::FormPart;

/// Create the sink serving one form part
pub fn create_sink(config: &ProxyConfig, part: FormPart) -> Result<Box<dyn SubmissionSink>> {
    let endpoint = config.endpoint(part).clone();
    Ok(Box::new(SheetsClient::new(endpoint, config.upstream_timeout)?))
}
