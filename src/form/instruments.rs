//! Second form: instrument listing

use crate::form::validate::{filled, MIN_PHONE_DIGITS};
use crate::form::{is_valid_phone, Clock, FieldIssue};
use crate::types::{
    format_timestamp, InstrumentDraft, InstrumentPayload, InstrumentRow, InstrumentRowPayload,
    Offering,
};

/// Warnings blocking submission of the instrument listing
pub fn instrument_issues(draft: &InstrumentDraft) -> Vec<FieldIssue> {
    let mut issues = Vec::new();

    if !filled(&draft.full_name) {
        issues.push(FieldIssue::new("fullName", "Please enter your full name"));
    }
    if !is_valid_phone(&draft.phone) {
        issues.push(FieldIssue::new(
            "phone",
            format!("Please enter a phone number with at least {MIN_PHONE_DIGITS} digits"),
        ));
    }
    if draft.rows.is_empty() {
        issues.push(FieldIssue::new("rows", "Please add at least one instrument"));
    }

    for (idx, row) in draft.rows.iter().enumerate() {
        row_issues(idx, row, &mut issues);
    }

    issues
}

/// Whether the instrument listing can be submitted
pub fn is_instrument_draft_valid(draft: &InstrumentDraft) -> bool {
    instrument_issues(draft).is_empty()
}

fn row_issues(idx: usize, row: &InstrumentRow, issues: &mut Vec<FieldIssue>) {
    let number = idx + 1;
    let field = |name: &str| format!("rows[{idx}].{name}");

    if !filled(&row.instrument) {
        issues.push(FieldIssue::new(
            field("instrument"),
            format!("Instrument #{number}: please select an instrument"),
        ));
    }

    match &row.offering {
        None => issues.push(FieldIssue::new(
            field("type"),
            format!("Instrument #{number}: please choose Perform or Teach"),
        )),
        Some(Offering::Perform { performance_fee }) => {
            check_fee(issues, field("performanceFee"), number, "performance fee", performance_fee);
        }
        Some(Offering::Teach {
            mode,
            beginner_fee,
            intermediate_fee,
            advanced_fee,
        }) => {
            if mode.is_none() {
                issues.push(FieldIssue::new(
                    field("mode"),
                    format!("Instrument #{number}: please choose Online or Offline"),
                ));
            }
            check_fee(issues, field("beginner"), number, "beginner fee", beginner_fee);
            check_fee(issues, field("intermediate"), number, "intermediate fee", intermediate_fee);
            check_fee(issues, field("advanced"), number, "advanced fee", advanced_fee);
        }
    }
}

fn check_fee(issues: &mut Vec<FieldIssue>, field: String, number: usize, label: &str, fee: &str) {
    if !filled(fee) {
        issues.push(FieldIssue::new(
            field,
            format!("Instrument #{number}: please enter the {label}"),
        ));
    } else if !fee.trim().parse::<f64>().is_ok_and(|v| v.is_finite() && v >= 0.0) {
        issues.push(FieldIssue::new(
            field,
            format!("Instrument #{number}: the {label} must be a number"),
        ));
    }
}

/// Flatten the instrument listing into its wire payload
pub fn build_instrument_payload(draft: &InstrumentDraft, clock: &dyn Clock) -> InstrumentPayload {
    InstrumentPayload {
        full_name: draft.full_name.trim().to_string(),
        phone: draft.phone.trim().to_string(),
        instruments: draft.rows.iter().map(row_payload).collect(),
        timestamp: format_timestamp(clock.now()),
    }
}

fn row_payload(row: &InstrumentRow) -> InstrumentRowPayload {
    let mut out = InstrumentRowPayload {
        instrument: row.instrument.trim().to_string(),
        kind: String::new(),
        mode: String::new(),
        beginner: String::new(),
        intermediate: String::new(),
        advanced: String::new(),
        performance_fee: String::new(),
    };

    match &row.offering {
        None => {}
        Some(Offering::Perform { performance_fee }) => {
            out.kind = "Perform".to_string();
            out.performance_fee = performance_fee.trim().to_string();
        }
        Some(Offering::Teach {
            mode,
            beginner_fee,
            intermediate_fee,
            advanced_fee,
        }) => {
            out.kind = "Teach".to_string();
            out.mode = mode.map(|m| m.to_string()).unwrap_or_default();
            out.beginner = beginner_fee.trim().to_string();
            out.intermediate = intermediate_fee.trim().to_string();
            out.advanced = advanced_fee.trim().to_string();
        }
    }

    out
}
