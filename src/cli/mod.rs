//! CLI commands
//!
//! Command implementations for the `maestera` binary.

mod check;
mod logging;
mod progress;
mod serve;
mod style;
mod submit;

pub use check::run_check;
pub use logging::init_tracing;
pub use serve::run_serve;
pub use submit::run_submit;

use maestera::error::Result;
use serde::de::DeserializeOwned;
use std::path::Path;

/// Read a draft from a JSON file
fn load_draft<F: DeserializeOwned>(path: &Path) -> Result<F> {
    let raw = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}
