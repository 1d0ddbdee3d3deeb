//! Session-to-sink submission flow

mod common;

use common::fixtures::{fixed_clock, make_instruments, make_onboarding};
use common::mock_sink::MockSink;
use maestera::error::{Error, SubmissionError};
use maestera::form::{FormSession, Onboarding, SubmissionState};
use maestera::submit::{submit_form, NoopProgress, RETRY_MESSAGE};
use maestera::types::InstrumentDraft;
use serde_json::json;
use tokio_test::{assert_err, assert_ok};

#[tokio::test]
async fn test_onboarding_submission_reaches_sink() {
    let sink = MockSink::default();
    let mut session = FormSession::new(make_onboarding("Asha Rao"));

    let outcome = assert_ok!(
        submit_form(&mut session, &sink, &fixed_clock(), &NoopProgress).await
    );

    assert!(outcome.is_submitted());
    assert_eq!(outcome.user_message(), None);
    sink.assert_submitted_once_for("Asha Rao");

    let payload = &sink.calls()[0];
    assert_eq!(payload["association"], "Both");
    assert_eq!(payload["timestamp"], "2025-03-14T09:30:00.000Z");
    assert_eq!(payload["teachingFee"], "800");
    assert_eq!(payload["performanceSettings"], json!(["Weddings"]));

    assert_eq!(session.form(), &Onboarding::default());
}

#[tokio::test]
async fn test_invalid_session_never_reaches_sink() {
    let sink = MockSink::default();
    let mut onboarding = make_onboarding("Asha Rao");
    onboarding.draft.performance_fee = None;
    let mut session = FormSession::new(onboarding);

    let err = assert_err!(
        submit_form(&mut session, &sink, &fixed_clock(), &NoopProgress).await
    );

    assert!(matches!(err, Error::Validation { ref issues } if issues[0].field == "performanceFee"));
    assert_eq!(sink.call_count(), 0);
    assert_eq!(session.state(), SubmissionState::Idle);
    assert_eq!(session.step(), 2);
}

#[tokio::test]
async fn test_failed_submission_keeps_answers_for_retry() {
    let sink = MockSink::default();
    sink.fail_with(SubmissionError::UpstreamStatus {
        status: 500,
        body: "boom".to_string(),
    });
    let mut session = FormSession::new(make_onboarding("Asha Rao"));

    let outcome = assert_ok!(
        submit_form(&mut session, &sink, &fixed_clock(), &NoopProgress).await
    );
    assert_eq!(outcome.state, SubmissionState::Failed);
    assert_eq!(outcome.user_message(), Some(RETRY_MESSAGE));
    assert_eq!(session.form(), &make_onboarding("Asha Rao"));

    sink.recover();
    session.retry().unwrap();
    let outcome = assert_ok!(
        submit_form(&mut session, &sink, &fixed_clock(), &NoopProgress).await
    );
    assert!(outcome.is_submitted());
    assert_eq!(sink.call_count(), 2);
}

#[tokio::test]
async fn test_instrument_listing_submission() {
    let sink = MockSink::default();
    let mut session = FormSession::<InstrumentDraft>::new(make_instruments("Asha Rao"));

    let outcome = assert_ok!(
        submit_form(&mut session, &sink, &fixed_clock(), &NoopProgress).await
    );
    assert!(outcome.is_submitted());

    let payload = &sink.calls()[0];
    assert_eq!(
        payload["instruments"],
        json!([
            {
                "instrument": "Tabla",
                "type": "Perform",
                "mode": "",
                "beginner": "",
                "intermediate": "",
                "advanced": "",
                "performanceFee": "5000"
            },
            {
                "instrument": "Sitar",
                "type": "Teach",
                "mode": "Online",
                "beginner": "500",
                "intermediate": "700",
                "advanced": "1000",
                "performanceFee": ""
            }
        ])
    );
}
