//! Upstream response normalization

use crate::types::Ack;
use serde_json::{json, Value};
use tracing::debug;

/// Decode an upstream body, wrapping non-JSON text as `{ "result": text }`
///
/// Script endpoints sometimes answer with plain text; that is not an error.
pub fn decode_ack(body: &str) -> Ack {
    match serde_json::from_str::<Value>(body) {
        Ok(value) => Ack(value),
        Err(e) => {
            debug!(error = %e, "upstream reply is not JSON, wrapping raw text");
            Ack(json!({ "result": body }))
        }
    }
}
