//! Request handlers

use crate::error::SubmissionError;
use crate::proxy::SubmissionSink;
use crate::server::AppState;
use crate::types::FormPart;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::{json, Value};
use tracing::{error, warn};

pub async fn healthz() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

pub async fn submit_onboarding(State(state): State<AppState>, body: Bytes) -> Response {
    forward(state.sink(FormPart::Onboarding), FormPart::Onboarding, &body).await
}

pub async fn submit_instruments(State(state): State<AppState>, body: Bytes) -> Response {
    forward(state.sink(FormPart::Instruments), FormPart::Instruments, &body).await
}

pub async fn method_not_allowed() -> Response {
    error_response(StatusCode::METHOD_NOT_ALLOWED, "Method not allowed")
}

async fn forward(sink: &dyn SubmissionSink, part: FormPart, body: &[u8]) -> Response {
    let payload: Value = match serde_json::from_slice(body) {
        Ok(payload) => payload,
        Err(e) => {
            warn!(%part, error = %e, "rejecting non-JSON request body");
            return error_response(StatusCode::BAD_REQUEST, "Invalid JSON body");
        }
    };

    match sink.submit(&payload).await {
        Ok(ack) => (StatusCode::OK, Json(ack)).into_response(),
        Err(e) => {
            error!(%part, error = %e, "submission proxy error");
            error_response(status_for(&e), &e.to_string())
        }
    }
}

const fn status_for(err: &SubmissionError) -> StatusCode {
    match err {
        SubmissionError::Transport(_) => StatusCode::INTERNAL_SERVER_ERROR,
        SubmissionError::UpstreamStatus { .. } => StatusCode::BAD_GATEWAY,
        SubmissionError::Timeout(_) => StatusCode::GATEWAY_TIMEOUT,
    }
}

fn error_response(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "error": message }))).into_response()
}
