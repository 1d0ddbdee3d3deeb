//! Tracing subscriber setup

use maestera::config::{is_truthy, LOG_JSON_VAR};
use tracing_subscriber::EnvFilter;

/// Install the global subscriber
///
/// `RUST_LOG` picks the filter (default `info`). Logs go to stderr so command
/// output on stdout stays clean.
pub fn init_tracing() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let json = std::env::var(LOG_JSON_VAR).is_ok_and(|v| is_truthy(&v));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    let installed = if json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    installed.map_err(|e| anyhow::anyhow!("cannot install tracing subscriber: {e}"))
}
