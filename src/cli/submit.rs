//! Submit command - validate a draft file and send it upstream

use crate::cli::load_draft;
use crate::cli::progress::CliProgress;
use crate::cli::style::{arrow, Stylize};
use anstream::{eprintln, println};
use maestera::config::ProxyConfig;
use maestera::error::{Error, Result};
use maestera::form::{Form, FormSession, Onboarding, SystemClock};
use maestera::proxy::create_sink;
use maestera::submit::submit_form;
use maestera::types::{FormPart, InstrumentDraft};
use serde::de::DeserializeOwned;
use std::path::Path;

/// Run the submit command
pub async fn run_submit(path: &Path, part: FormPart, dry_run: bool) -> Result<()> {
    match part {
        FormPart::Onboarding => submit_draft::<Onboarding>(path, dry_run).await,
        FormPart::Instruments => submit_draft::<InstrumentDraft>(path, dry_run).await,
    }
}

async fn submit_draft<F: Form + DeserializeOwned>(path: &Path, dry_run: bool) -> Result<()> {
    let mut session = FormSession::new(load_draft::<F>(path)?);

    if dry_run {
        let payload = session.begin_submit(&SystemClock)?;
        println!(
            "{} {}",
            arrow(),
            format!("Dry run: {} payload not sent", F::PART).muted()
        );
        println!("{}", serde_json::to_string_pretty(&payload)?);
        return Ok(());
    }

    let config = ProxyConfig::from_env()?;
    let sink = create_sink(&config, F::PART)?;
    let progress = CliProgress::default();

    let outcome = submit_form(&mut session, sink.as_ref(), &SystemClock, &progress).await?;

    if let Some(message) = outcome.user_message() {
        eprintln!("{}", message.warn());
    }

    match outcome.failure {
        None => Ok(()),
        Some(failure) => Err(Error::Submission(failure)),
    }
}
