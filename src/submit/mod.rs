//! Form submission driver
//!
//! Runs a session through validation, payload assembly and a single upstream
//! call, reporting progress to an interface-agnostic callback.

mod execute;
mod progress;

pub use execute::{submit_form, SubmissionOutcome, RETRY_MESSAGE};
pub use progress::{NoopProgress, Phase, ProgressCallback};
