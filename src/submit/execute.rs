//! Session submission
//!
//! Validation failures never reach the network. Upstream failures are
//! reported, not raised: the caller gets a `Failed` outcome it can retry.

use crate::error::{Error, Result, SubmissionError};
use crate::form::{Clock, Form, FormSession, SubmissionState};
use crate::proxy::SubmissionSink;
use crate::submit::{Phase, ProgressCallback};
use crate::types::Ack;
use tracing::{info, warn};

/// Generic user-facing message for a failed submission
pub const RETRY_MESSAGE: &str = "Something went wrong while submitting. Please try again.";

/// Result of one submission attempt
#[derive(Debug, Clone, PartialEq)]
pub struct SubmissionOutcome {
    /// Session state after the attempt (`Submitted` or `Failed`)
    pub state: SubmissionState,
    /// Upstream acknowledgement, on success
    pub ack: Option<Ack>,
    /// Underlying failure, for diagnostics only
    pub failure: Option<SubmissionError>,
}

impl SubmissionOutcome {
    /// Whether upstream acknowledged the submission
    pub fn is_submitted(&self) -> bool {
        self.state == SubmissionState::Submitted
    }

    /// Message to show the user, if the attempt failed
    pub fn user_message(&self) -> Option<&'static str> {
        self.failure.as_ref().map(|_| RETRY_MESSAGE)
    }
}

/// Validate, build and forward a session's payload
///
/// Returns `Err` only when the session cannot be submitted at all (invalid
/// steps, submission already in flight, or a terminal state).
pub async fn submit_form<F: Form>(
    session: &mut FormSession<F>,
    sink: &dyn SubmissionSink,
    clock: &dyn Clock,
    progress: &dyn ProgressCallback,
) -> Result<SubmissionOutcome> {
    progress.on_phase(Phase::Validating).await;

    let payload = match session.begin_submit(clock) {
        Ok(payload) => payload,
        Err(e) => {
            progress.on_error(&e).await;
            return Err(e);
        }
    };

    let body = match serde_json::to_value(&payload) {
        Ok(body) => body,
        Err(e) => {
            session.finish_submit(&Err(SubmissionError::Transport(format!(
                "cannot encode payload: {e}"
            ))))?;
            return Err(Error::Json(e));
        }
    };

    progress.on_phase(Phase::Submitting).await;
    progress
        .on_message(&format!("Sending {} form to {}", F::PART, sink.endpoint()))
        .await;

    let result = sink.submit(&body).await;
    let state = session.finish_submit(&result)?;

    match result {
        Ok(ack) => {
            info!(part = %F::PART, "form submitted");
            progress.on_submitted(F::PART, &ack).await;
            progress.on_phase(Phase::Complete).await;
            Ok(SubmissionOutcome {
                state,
                ack: Some(ack),
                failure: None,
            })
        }
        Err(e) => {
            warn!(part = %F::PART, error = %e, "form submission failed");
            progress.on_error(&Error::Submission(e.clone())).await;
            Ok(SubmissionOutcome {
                state,
                ack: None,
                failure: Some(e),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::{FixedClock, Onboarding};
    use crate::submit::NoopProgress;
    use crate::types::{Association, FormPart, PreferenceSelections, ProfileDraft, TagGroup};
    use async_trait::async_trait;
    use chrono::{TimeZone, Utc};
    use serde_json::{json, Value};
    use std::sync::Mutex;
    use url::Url;

    struct RecordingSink {
        endpoint: Url,
        reply: std::result::Result<Ack, SubmissionError>,
        bodies: Mutex<Vec<Value>>,
    }

    impl RecordingSink {
        fn new(reply: std::result::Result<Ack, SubmissionError>) -> Self {
            Self {
                endpoint: Url::parse("https://script.example/exec").unwrap(),
                reply,
                bodies: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl SubmissionSink for RecordingSink {
        async fn submit(&self, payload: &Value) -> std::result::Result<Ack, SubmissionError> {
            self.bodies.lock().unwrap().push(payload.clone());
            self.reply.clone()
        }

        fn endpoint(&self) -> &Url {
            &self.endpoint
        }
    }

    struct CountingProgress {
        phases: Mutex<Vec<Phase>>,
        errors: Mutex<usize>,
    }

    #[async_trait]
    impl ProgressCallback for CountingProgress {
        async fn on_phase(&self, phase: Phase) {
            self.phases.lock().unwrap().push(phase);
        }
        async fn on_submitted(&self, part: FormPart, _ack: &Ack) {
            assert_eq!(part, FormPart::Onboarding);
        }
        async fn on_error(&self, _error: &Error) {
            *self.errors.lock().unwrap() += 1;
        }
        async fn on_message(&self, _message: &str) {}
    }

    fn clock() -> FixedClock {
        FixedClock(Utc.with_ymd_and_hms(2025, 9, 9, 9, 9, 9).unwrap())
    }

    fn ready_session() -> FormSession<Onboarding> {
        let mut form = Onboarding {
            draft: ProfileDraft {
                full_name: "Kabir".to_string(),
                phone: "9000000001".to_string(),
                email: "kabir@example.com".to_string(),
                city: "Delhi".to_string(),
                pincode: "110001".to_string(),
                performance_fee: Some("20000".to_string()),
                ..ProfileDraft::default()
            },
            selections: PreferenceSelections {
                association: Some(Association::Performance),
                ..PreferenceSelections::default()
            },
        };
        form.selections.toggle(TagGroup::PerformanceSettings, "Weddings");
        FormSession::new(form)
    }

    #[tokio::test]
    async fn test_successful_submission() {
        let sink = RecordingSink::new(Ok(Ack(json!({ "result": "OK" }))));
        let progress = CountingProgress {
            phases: Mutex::new(Vec::new()),
            errors: Mutex::new(0),
        };
        let mut session = ready_session();

        let outcome = submit_form(&mut session, &sink, &clock(), &progress)
            .await
            .unwrap();

        assert!(outcome.is_submitted());
        assert_eq!(outcome.ack, Some(Ack(json!({ "result": "OK" }))));
        assert_eq!(outcome.user_message(), None);
        assert_eq!(
            *progress.phases.lock().unwrap(),
            [Phase::Validating, Phase::Submitting, Phase::Complete]
        );

        let bodies = sink.bodies.lock().unwrap();
        assert_eq!(bodies.len(), 1);
        assert_eq!(bodies[0]["fullName"], "Kabir");
        assert_eq!(bodies[0]["timestamp"], "2025-09-09T09:09:09.000Z");
    }

    #[tokio::test]
    async fn test_upstream_failure_is_an_outcome_not_an_error() {
        let failure = SubmissionError::UpstreamStatus {
            status: 500,
            body: "oops".to_string(),
        };
        let sink = RecordingSink::new(Err(failure.clone()));
        let mut session = ready_session();

        let outcome = submit_form(&mut session, &sink, &clock(), &NoopProgress)
            .await
            .unwrap();

        assert_eq!(outcome.state, SubmissionState::Failed);
        assert_eq!(outcome.failure, Some(failure));
        assert_eq!(outcome.user_message(), Some(RETRY_MESSAGE));
        assert_eq!(session.state(), SubmissionState::Failed);
        assert_eq!(session.form().draft.full_name, "Kabir");
    }

    #[tokio::test]
    async fn test_invalid_session_never_reaches_sink() {
        let sink = RecordingSink::new(Ok(Ack(json!({}))));
        let mut session = FormSession::<Onboarding>::default();

        let err = submit_form(&mut session, &sink, &clock(), &NoopProgress)
            .await
            .unwrap_err();

        assert!(matches!(err, Error::Validation { .. }));
        assert!(sink.bodies.lock().unwrap().is_empty());
        assert_eq!(session.state(), SubmissionState::Idle);
    }
}
