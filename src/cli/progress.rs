//! CLI progress callback with a spinner

use crate::cli::style::{check, spinner_style, Stylize};
use anstream::{eprintln, println};
use async_trait::async_trait;
use indicatif::ProgressBar;
use maestera::error::Error;
use maestera::submit::{Phase, ProgressCallback};
use maestera::types::{Ack, FormPart};
use std::time::Duration;

/// Spinner-backed progress for `maestera submit`
pub struct CliProgress {
    spinner: ProgressBar,
}

impl Default for CliProgress {
    fn default() -> Self {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(spinner_style());
        Self { spinner }
    }
}

#[async_trait]
impl ProgressCallback for CliProgress {
    async fn on_phase(&self, phase: Phase) {
        match phase {
            Phase::Validating => {
                self.spinner.enable_steady_tick(Duration::from_millis(80));
                self.spinner.set_message(format!("{phase}..."));
            }
            Phase::Submitting => self.spinner.set_message(format!("{phase}...")),
            Phase::Complete => self.spinner.finish_and_clear(),
        }
    }

    async fn on_submitted(&self, part: FormPart, ack: &Ack) {
        self.spinner.finish_and_clear();
        println!("{} Submitted {} form", check(), part.accent());
        println!("  {}", ack.as_value().to_string().muted());
    }

    async fn on_error(&self, err: &Error) {
        self.spinner.finish_and_clear();
        eprintln!("{}: {}", "error".error(), err);
    }

    async fn on_message(&self, message: &str) {
        self.spinner.set_message(message.to_string());
    }
}
