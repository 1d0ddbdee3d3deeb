//! Proxy configuration from the environment
//!
//! Both upstream URLs are required; a missing one is a startup error rather
//! than a proxy that silently drops submissions.

use crate::error::{Error, Result};
use crate::proxy::DEFAULT_TIMEOUT_SECS;
use crate::types::FormPart;
use std::env;
use std::net::SocketAddr;
use std::time::Duration;
use url::Url;

/// Default listen address
pub const DEFAULT_BIND: &str = "127.0.0.1:3000";

/// Listen address override
pub const BIND_VAR: &str = "MAESTERA_BIND";

/// Upstream timeout override, in seconds
pub const TIMEOUT_VAR: &str = "MAESTERA_UPSTREAM_TIMEOUT_SECS";

/// Allowed CORS origin override
pub const CORS_ORIGIN_VAR: &str = "MAESTERA_CORS_ORIGIN";

/// Switches log output to JSON lines when truthy
pub const LOG_JSON_VAR: &str = "MAESTERA_LOG_JSON";

/// Whether a flag-style variable value means "on"
pub fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

/// Proxy settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProxyConfig {
    /// Upstream for the onboarding form (`SHEETS_SCRIPT_URL`)
    pub onboarding_url: Url,
    /// Upstream for the instrument listing (`SHEETS_SCRIPT_URL_PART2`)
    pub instruments_url: Url,
    /// Per-request upstream timeout
    pub upstream_timeout: Duration,
    /// Address the HTTP server listens on
    pub bind: SocketAddr,
    /// Value of `Access-Control-Allow-Origin`
    pub cors_origin: String,
}

impl ProxyConfig {
    /// Load from process environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load using an arbitrary variable lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let onboarding_url = required_url(&lookup, FormPart::Onboarding.env_var())?;
        let instruments_url = required_url(&lookup, FormPart::Instruments.env_var())?;

        let timeout_secs = match non_empty(&lookup, TIMEOUT_VAR) {
            Some(raw) => raw
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .ok_or_else(|| {
                    Error::Config(format!(
                        "{TIMEOUT_VAR} must be a positive number of seconds, got {raw:?}"
                    ))
                })?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        let bind_raw = non_empty(&lookup, BIND_VAR).unwrap_or_else(|| DEFAULT_BIND.to_string());
        let bind = bind_raw.parse::<SocketAddr>().map_err(|e| {
            Error::Config(format!("{BIND_VAR} is not a socket address ({bind_raw:?}): {e}"))
        })?;

        let cors_origin = non_empty(&lookup, CORS_ORIGIN_VAR).unwrap_or_else(|| "*".to_string());

        Ok(Self {
            onboarding_url,
            instruments_url,
            upstream_timeout: Duration::from_secs(timeout_secs),
            bind,
            cors_origin,
        })
    }

    /// Upstream URL for a form part
    pub const fn endpoint(&self, part: FormPart) -> &Url {
        match part {
            FormPart::Onboarding => &self.onboarding_url,
            FormPart::Instruments => &self.instruments_url,
        }
    }
}

fn non_empty(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<String> {
    lookup(key)
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn required_url(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Result<Url> {
    let raw = non_empty(lookup, key)
        .ok_or_else(|| Error::Config(format!("{key} is not set")))?;

    let url = Url::parse(&raw).map_err(|e| Error::Config(format!("{key} is not a valid URL: {e}")))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(Error::Config(format!(
            "{key} must be an http(s) URL, got scheme {other:?}"
        ))),
    }
}
