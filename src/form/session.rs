//! Per-session form state and the submission state machine

use crate::error::{Error, Result, SubmissionError};
use crate::form::{
    build_instrument_payload, build_payload, instrument_issues, step_issues, Clock, FieldIssue,
    OnboardingStep,
};
use crate::types::{
    Ack, FormPart, InstrumentDraft, InstrumentPayload, PreferenceSelections, ProfileDraft,
    SubmissionPayload,
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A multi-step form whose answers can be flattened into a payload
pub trait Form: Default + Send {
    /// Payload type sent upstream
    type Payload: Serialize + Send + Sync;

    /// Which upstream endpoint this form submits to
    const PART: FormPart;

    /// Number of steps
    fn step_count(&self) -> usize;

    /// Display name of a step
    fn step_name(&self, index: usize) -> String;

    /// Warnings blocking navigation past a step
    fn step_issues(&self, index: usize) -> Vec<FieldIssue>;

    /// Build the payload; only called once every step is valid
    fn build_payload(&self, clock: &dyn Clock) -> Self::Payload;
}

/// First form: profile draft plus preference selections
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Onboarding {
    /// Profile answers
    pub draft: ProfileDraft,
    /// Multi-select answers
    pub selections: PreferenceSelections,
}

impl Form for Onboarding {
    type Payload = SubmissionPayload;

    const PART: FormPart = FormPart::Onboarding;

    fn step_count(&self) -> usize {
        OnboardingStep::ALL.len()
    }

    fn step_name(&self, index: usize) -> String {
        OnboardingStep::from_index(index).map_or_else(|| format!("Step {index}"), |s| s.to_string())
    }

    fn step_issues(&self, index: usize) -> Vec<FieldIssue> {
        OnboardingStep::from_index(index)
            .map(|step| step_issues(step, &self.draft, &self.selections))
            .unwrap_or_default()
    }

    fn build_payload(&self, clock: &dyn Clock) -> SubmissionPayload {
        build_payload(&self.draft, &self.selections, clock)
    }
}

impl Form for InstrumentDraft {
    type Payload = InstrumentPayload;

    const PART: FormPart = FormPart::Instruments;

    fn step_count(&self) -> usize {
        1
    }

    fn step_name(&self, _index: usize) -> String {
        "Instrument listing".to_string()
    }

    fn step_issues(&self, index: usize) -> Vec<FieldIssue> {
        if index == 0 {
            instrument_issues(self)
        } else {
            Vec::new()
        }
    }

    fn build_payload(&self, clock: &dyn Clock) -> InstrumentPayload {
        build_instrument_payload(self, clock)
    }
}

/// Submission lifecycle of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionState {
    /// Editing; submit allowed
    Idle,
    /// A submission is outstanding
    Submitting,
    /// Upstream acknowledged the submission
    Submitted,
    /// Submission failed; `retry` returns to `Idle`
    Failed,
}

impl fmt::Display for SubmissionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idle => write!(f, "idle"),
            Self::Submitting => write!(f, "submitting"),
            Self::Submitted => write!(f, "submitted"),
            Self::Failed => write!(f, "failed"),
        }
    }
}

/// One user's pass through a form
///
/// Owns the answers, the current step and the submission state. Nothing is
/// shared between sessions.
#[derive(Debug, Clone)]
pub struct FormSession<F: Form> {
    form: F,
    step: usize,
    state: SubmissionState,
}

impl<F: Form> Default for FormSession<F> {
    fn default() -> Self {
        Self::new(F::default())
    }
}

impl<F: Form> FormSession<F> {
    /// Start a session from existing answers
    pub const fn new(form: F) -> Self {
        Self {
            form,
            step: 0,
            state: SubmissionState::Idle,
        }
    }

    /// Current answers
    pub const fn form(&self) -> &F {
        &self.form
    }

    /// Mutable access to the answers
    pub const fn form_mut(&mut self) -> &mut F {
        &mut self.form
    }

    /// Zero-based index of the current step
    pub const fn step(&self) -> usize {
        self.step
    }

    /// Current submission state
    pub const fn state(&self) -> SubmissionState {
        self.state
    }

    /// Whether the current step is the last one
    pub fn is_last_step(&self) -> bool {
        self.step + 1 >= self.form.step_count()
    }

    /// Warnings for the current step
    pub fn current_issues(&self) -> Vec<FieldIssue> {
        self.form.step_issues(self.step)
    }

    /// Whether the user may advance from the current step
    pub fn can_advance(&self) -> bool {
        !self.is_last_step() && self.current_issues().is_empty()
    }

    /// Move to the next step if the current one is valid
    pub fn advance(&mut self) -> Result<usize> {
        if self.is_last_step() {
            return Err(Error::InvalidState("already on the last step".to_string()));
        }

        let issues = self.current_issues();
        if !issues.is_empty() {
            return Err(Error::Validation { issues });
        }

        self.step += 1;
        Ok(self.step)
    }

    /// Move to the previous step
    pub const fn back(&mut self) -> usize {
        self.step = self.step.saturating_sub(1);
        self.step
    }

    /// Validate every step and build the payload, entering `Submitting`
    ///
    /// On a validation failure the session jumps to the first invalid step and
    /// stays `Idle`; no payload exists.
    pub fn begin_submit(&mut self, clock: &dyn Clock) -> Result<F::Payload> {
        match self.state {
            SubmissionState::Idle => {}
            SubmissionState::Submitting => return Err(Error::SubmissionInFlight),
            SubmissionState::Submitted => {
                return Err(Error::InvalidState("form was already submitted".to_string()));
            }
            SubmissionState::Failed => {
                return Err(Error::InvalidState(
                    "previous submission failed; retry first".to_string(),
                ));
            }
        }

        for index in 0..self.form.step_count() {
            let issues = self.form.step_issues(index);
            if !issues.is_empty() {
                self.step = index;
                return Err(Error::Validation { issues });
            }
        }

        let payload = self.form.build_payload(clock);
        self.state = SubmissionState::Submitting;
        Ok(payload)
    }

    /// Record the upstream outcome of the outstanding submission
    ///
    /// Success discards the answers; failure keeps them for a retry.
    pub fn finish_submit(
        &mut self,
        outcome: &std::result::Result<Ack, SubmissionError>,
    ) -> Result<SubmissionState> {
        if self.state != SubmissionState::Submitting {
            return Err(Error::InvalidState(format!(
                "no submission in flight (state: {})",
                self.state
            )));
        }

        match outcome {
            Ok(_) => {
                self.form = F::default();
                self.step = 0;
                self.state = SubmissionState::Submitted;
            }
            Err(_) => self.state = SubmissionState::Failed,
        }

        Ok(self.state)
    }

    /// Return a failed session to `Idle` so it can be submitted again
    pub fn retry(&mut self) -> Result<()> {
        if self.state != SubmissionState::Failed {
            return Err(Error::InvalidState(format!(
                "nothing to retry (state: {})",
                self.state
            )));
        }
        self.state = SubmissionState::Idle;
        Ok(())
    }
}
