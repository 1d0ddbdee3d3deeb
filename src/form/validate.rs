//! Step gating for the onboarding form

use crate::form::FieldIssue;
use crate::types::{Association, PreferenceSelections, ProfileDraft, TagGroup};
use regex::Regex;
use std::fmt;
use std::sync::OnceLock;

/// Minimum number of digits a phone number must contain
pub const MIN_PHONE_DIGITS: usize = 7;

/// Steps of the onboarding form, in navigation order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum OnboardingStep {
    /// Welcome screen
    Intro,
    /// Name, contact details and location
    BasicInfo,
    /// Association and multi-select preferences
    Preferences,
}

impl OnboardingStep {
    /// All steps in order
    pub const ALL: [Self; 3] = [Self::Intro, Self::BasicInfo, Self::Preferences];

    /// Step at a zero-based position
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Zero-based position of this step
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for OnboardingStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Intro => write!(f, "Intro"),
            Self::BasicInfo => write!(f, "Basic information"),
            Self::Preferences => write!(f, "Preferences"),
        }
    }
}

/// Whether the user may advance past `step`
pub fn is_step_valid(
    step: OnboardingStep,
    draft: &ProfileDraft,
    selections: &PreferenceSelections,
) -> bool {
    step_issues(step, draft, selections).is_empty()
}

/// Warnings blocking navigation past `step`; empty when the step is valid
pub fn step_issues(
    step: OnboardingStep,
    draft: &ProfileDraft,
    selections: &PreferenceSelections,
) -> Vec<FieldIssue> {
    match step {
        OnboardingStep::Intro => Vec::new(),
        OnboardingStep::BasicInfo => basic_info_issues(draft),
        OnboardingStep::Preferences => preference_issues(draft, selections),
    }
}

/// True iff `phone` contains at least [`MIN_PHONE_DIGITS`] digits
pub fn is_valid_phone(phone: &str) -> bool {
    phone.chars().filter(char::is_ascii_digit).count() >= MIN_PHONE_DIGITS
}

/// Basic `local@domain.tld` shape check
pub fn is_valid_email(email: &str) -> bool {
    email_pattern().is_match(email.trim())
}

fn email_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("hardcoded email pattern is valid")
    })
}

pub(crate) fn filled(value: &str) -> bool {
    !value.trim().is_empty()
}

fn filled_opt(value: Option<&String>) -> bool {
    value.is_some_and(|v| filled(v))
}

fn basic_info_issues(draft: &ProfileDraft) -> Vec<FieldIssue> {
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
    if !is_valid_email(&draft.email) {
        issues.push(FieldIssue::new("email", "Please enter a valid email address"));
    }
    if !filled(&draft.city) {
        issues.push(FieldIssue::new("city", "Please enter your current city"));
    }
    if !filled(&draft.pincode) {
        issues.push(FieldIssue::new("pincode", "Please enter your pincode"));
    }

    issues
}

fn preference_issues(draft: &ProfileDraft, selections: &PreferenceSelections) -> Vec<FieldIssue> {
    let Some(association) = selections.association else {
        return vec![FieldIssue::new(
            "association",
            "Please choose whether you want to teach, perform or both",
        )];
    };

    // Both requires every teaching AND every performance condition.
    match association {
        Association::Teaching => teaching_issues(draft, selections),
        Association::Performance => performance_issues(draft, selections),
        Association::Both => {
            let mut issues = teaching_issues(draft, selections);
            issues.extend(performance_issues(draft, selections));
            issues
        }
    }
}

fn teaching_issues(draft: &ProfileDraft, selections: &PreferenceSelections) -> Vec<FieldIssue> {
    let mut issues: Vec<FieldIssue> = TagGroup::TEACHING
        .iter()
        .filter(|group| selections.group(**group).is_empty())
        .map(|group| {
            FieldIssue::new(
                group.field(),
                format!("Please select at least one {}", group.label()),
            )
        })
        .collect();

    if !filled_opt(draft.teaching_fee.as_ref()) {
        issues.push(FieldIssue::new("teachingFee", "Please enter your teaching fee"));
    }

    issues
}

fn performance_issues(draft: &ProfileDraft, selections: &PreferenceSelections) -> Vec<FieldIssue> {
    let mut issues = Vec::new();

    if selections.performance_settings.is_empty() {
        issues.push(FieldIssue::new(
            TagGroup::PerformanceSettings.field(),
            format!(
                "Please select at least one {}",
                TagGroup::PerformanceSettings.label()
            ),
        ));
    }
    if !filled_opt(draft.performance_fee.as_ref()) {
        issues.push(FieldIssue::new(
            "performanceFee",
            "Please enter your performance fee",
        ));
    }

    issues
}
