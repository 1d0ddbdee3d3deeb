//! Form state and validation engine
//!
//! Pure computation over draft state: step gating, tag toggling and payload
//! assembly. All mutation happens in the caller's [`FormSession`].

mod clock;
mod instruments;
mod payload;
mod session;
mod tags;
mod validate;

pub use clock::{Clock, FixedClock, SystemClock};
pub use instruments::{build_instrument_payload, instrument_issues, is_instrument_draft_valid};
pub use payload::build_payload;
pub use session::{Form, FormSession, Onboarding, SubmissionState};
pub use tags::toggle_tag;
pub use validate::{is_step_valid, is_valid_email, is_valid_phone, step_issues, OnboardingStep};

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single inline warning produced by validation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldIssue {
    /// Wire name of the offending field
    pub field: String,
    /// User-facing message
    pub message: String,
}

impl FieldIssue {
    /// Create a new issue
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}
