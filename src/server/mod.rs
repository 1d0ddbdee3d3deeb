//! HTTP surface for the submission proxy
//!
//! `POST /api/submit` forwards to the onboarding endpoint and
//! `POST /api/submit2` to the instrument listing endpoint. Bodies are passed
//! through unmodified.

mod cors;
mod handlers;

use crate::config::ProxyConfig;
use crate::error::{Error, Result};
use crate::proxy::{create_sink, SubmissionSink};
use crate::types::FormPart;
use axum::http::HeaderValue;
use axum::middleware::from_fn_with_state;
use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{info, warn};

/// Shared, immutable state for request handlers
#[derive(Clone)]
pub struct AppState {
    onboarding: Arc<dyn SubmissionSink>,
    instruments: Arc<dyn SubmissionSink>,
    cors_origin: HeaderValue,
}

impl AppState {
    /// Assemble state from explicit sinks
    pub fn new(
        onboarding: Arc<dyn SubmissionSink>,
        instruments: Arc<dyn SubmissionSink>,
        cors_origin: &str,
    ) -> Result<Self> {
        let cors_origin = HeaderValue::from_str(cors_origin)
            .map_err(|e| Error::Config(format!("invalid CORS origin {cors_origin:?}: {e}")))?;

        Ok(Self {
            onboarding,
            instruments,
            cors_origin,
        })
    }

    /// Build state with sinks for both form parts
    pub fn from_config(config: &ProxyConfig) -> Result<Self> {
        Self::new(
            Arc::from(create_sink(config, FormPart::Onboarding)?),
            Arc::from(create_sink(config, FormPart::Instruments)?),
            &config.cors_origin,
        )
    }

    fn sink(&self, part: FormPart) -> &dyn SubmissionSink {
        match part {
            FormPart::Onboarding => self.onboarding.as_ref(),
            FormPart::Instruments => self.instruments.as_ref(),
        }
    }
}

/// Build the proxy router
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(handlers::healthz))
        .route(
            FormPart::Onboarding.route(),
            post(handlers::submit_onboarding)
                .options(cors::preflight)
                .fallback(handlers::method_not_allowed),
        )
        .route(
            FormPart::Instruments.route(),
            post(handlers::submit_instruments)
                .options(cors::preflight)
                .fallback(handlers::method_not_allowed),
        )
        .layer(from_fn_with_state(state.clone(), cors::allow_origin))
        .with_state(state)
}

/// Serve until Ctrl-C
pub async fn serve(config: &ProxyConfig) -> Result<()> {
    let state = AppState::from_config(config)?;
    let listener = TcpListener::bind(config.bind).await?;

    info!(
        addr = %listener.local_addr()?,
        onboarding = %config.onboarding_url,
        instruments = %config.instruments_url,
        timeout_secs = config.upstream_timeout.as_secs(),
        "submission proxy listening"
    );

    axum::serve(listener, build_router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("submission proxy stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "cannot listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("shutdown requested, draining connections");
}
