//! Check command - validate a draft file step by step

use crate::cli::load_draft;
use crate::cli::style::{check, cross, Stylize};
use anstream::println;
use maestera::error::{Error, Result};
use maestera::form::{Form, Onboarding};
use maestera::types::{FormPart, InstrumentDraft};
use serde::de::DeserializeOwned;
use std::path::Path;

/// Run the check command
pub fn run_check(path: &Path, part: FormPart) -> Result<()> {
    match part {
        FormPart::Onboarding => check_draft::<Onboarding>(path),
        FormPart::Instruments => check_draft::<InstrumentDraft>(path),
    }
}

fn check_draft<F: Form + DeserializeOwned>(path: &Path) -> Result<()> {
    let form: F = load_draft(path)?;

    println!(
        "Checking {} form {}",
        F::PART.accent(),
        path.display().muted()
    );

    let mut issues = Vec::new();
    for index in 0..form.step_count() {
        let step_issues = form.step_issues(index);
        if step_issues.is_empty() {
            println!("  {} {}", check(), form.step_name(index));
            continue;
        }

        println!(
            "  {} {}",
            cross().for_stdout(),
            form.step_name(index).emphasis()
        );
        for issue in &step_issues {
            println!(
                "      {}: {}",
                issue.field.accent(),
                issue.message.warn().for_stdout()
            );
        }
        issues.extend(step_issues);
    }

    if issues.is_empty() {
        println!("{}", "Ready to submit".success());
        Ok(())
    } else {
        Err(Error::Validation { issues })
    }
}
