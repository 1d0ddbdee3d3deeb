//! Core types for maestera

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeSet;
use std::fmt;

/// A set of multi-select answers; membership only, order irrelevant
pub type TagSet = BTreeSet<String>;

/// Basic profile answers collected by the onboarding form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProfileDraft {
    /// Full name
    pub full_name: String,
    /// Phone number, free-form (digits are counted, punctuation ignored)
    pub phone: String,
    /// Email address
    pub email: String,
    /// Date of birth as entered (`YYYY-MM-DD` from a date input)
    pub dob: String,
    /// Main instrument played or taught
    pub primary_instrument: String,
    /// Additional instruments
    pub secondary_instruments: Vec<String>,
    /// Current city
    pub city: String,
    /// Postal code
    pub pincode: String,
    /// Hourly teaching fee (teaching associations only)
    pub teaching_fee: Option<String>,
    /// Performance fee (performance associations only)
    pub performance_fee: Option<String>,
    /// Free-text contribution / anything else
    pub contribution: Option<String>,
}

/// How a musician wants to work with the platform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Association {
    /// Teaching students
    Teaching,
    /// Performing at events
    Performance,
    /// Teaching and performing
    Both,
}

impl Association {
    /// Whether the teaching questions apply
    pub const fn includes_teaching(self) -> bool {
        matches!(self, Self::Teaching | Self::Both)
    }

    /// Whether the performance questions apply
    pub const fn includes_performance(self) -> bool {
        matches!(self, Self::Performance | Self::Both)
    }
}

impl fmt::Display for Association {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Teaching => write!(f, "Teaching"),
            Self::Performance => write!(f, "Performance"),
            Self::Both => write!(f, "Both"),
        }
    }
}

/// One of the six multi-select groups on the preferences step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TagGroup {
    /// Class formats offered (1:1, group, ...)
    ClassFormats,
    /// Exam boards prepared for
    Exams,
    /// Additional formats (workshops, masterclasses, ...)
    AdditionalFormats,
    /// Learner age groups
    LearnerGroups,
    /// Performance settings (weddings, corporate, ...)
    PerformanceSettings,
    /// Collaborative projects of interest
    CollabProjects,
}

impl TagGroup {
    /// Groups that must all be filled in for a teaching association
    pub const TEACHING: [Self; 4] = [
        Self::ClassFormats,
        Self::Exams,
        Self::AdditionalFormats,
        Self::LearnerGroups,
    ];

    /// Wire field name of this group
    pub const fn field(self) -> &'static str {
        match self {
            Self::ClassFormats => "classFormats",
            Self::Exams => "exams",
            Self::AdditionalFormats => "additionalFormats",
            Self::LearnerGroups => "learnerGroups",
            Self::PerformanceSettings => "performanceSettings",
            Self::CollabProjects => "collabProjects",
        }
    }

    /// Human-readable label used in warnings
    pub const fn label(self) -> &'static str {
        match self {
            Self::ClassFormats => "class format",
            Self::Exams => "exam",
            Self::AdditionalFormats => "additional format",
            Self::LearnerGroups => "learner group",
            Self::PerformanceSettings => "performance setting",
            Self::CollabProjects => "collaborative project",
        }
    }
}

/// Multi-select answers from the preferences step
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PreferenceSelections {
    /// Selected association, if any
    pub association: Option<Association>,
    /// Class formats
    pub class_formats: TagSet,
    /// Exams
    pub exams: TagSet,
    /// Additional formats
    pub additional_formats: TagSet,
    /// Learner groups
    pub learner_groups: TagSet,
    /// Performance settings
    pub performance_settings: TagSet,
    /// Collaborative projects
    pub collab_projects: TagSet,
}

impl PreferenceSelections {
    /// Borrow the tag-set for a group
    pub const fn group(&self, group: TagGroup) -> &TagSet {
        match group {
            TagGroup::ClassFormats => &self.class_formats,
            TagGroup::Exams => &self.exams,
            TagGroup::AdditionalFormats => &self.additional_formats,
            TagGroup::LearnerGroups => &self.learner_groups,
            TagGroup::PerformanceSettings => &self.performance_settings,
            TagGroup::CollabProjects => &self.collab_projects,
        }
    }

    /// Mutably borrow the tag-set for a group
    pub fn group_mut(&mut self, group: TagGroup) -> &mut TagSet {
        match group {
            TagGroup::ClassFormats => &mut self.class_formats,
            TagGroup::Exams => &mut self.exams,
            TagGroup::AdditionalFormats => &mut self.additional_formats,
            TagGroup::LearnerGroups => &mut self.learner_groups,
            TagGroup::PerformanceSettings => &mut self.performance_settings,
            TagGroup::CollabProjects => &mut self.collab_projects,
        }
    }
}

/// Flattened onboarding submission, built once at submit time
///
/// Field order is the wire order. There is no mutation API: a payload is
/// only produced by `form::build_payload`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionPayload {
    pub(crate) full_name: String,
    pub(crate) phone: String,
    pub(crate) email: String,
    pub(crate) dob: String,
    pub(crate) primary_instrument: String,
    pub(crate) secondary_instruments: Vec<String>,
    pub(crate) city: String,
    pub(crate) pincode: String,
    pub(crate) association: String,
    pub(crate) class_formats: Vec<String>,
    pub(crate) exams: Vec<String>,
    pub(crate) additional_formats: Vec<String>,
    pub(crate) learner_groups: Vec<String>,
    pub(crate) teaching_fee: String,
    pub(crate) performance_settings: Vec<String>,
    pub(crate) performance_fee: String,
    pub(crate) collab_projects: Vec<String>,
    pub(crate) contribution: String,
    pub(crate) timestamp: String,
}

impl SubmissionPayload {
    /// Submitter's full name
    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    /// Selected association as sent on the wire
    pub fn association(&self) -> &str {
        &self.association
    }

    /// ISO-8601 submission timestamp
    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }
}

/// Render a timestamp the way payloads carry it
pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Answers collected by the second form (instrument listing)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InstrumentDraft {
    /// Full name, matching the onboarding submission
    pub full_name: String,
    /// Phone number, matching the onboarding submission
    pub phone: String,
    /// One entry per instrument offered
    pub rows: Vec<InstrumentRow>,
}

impl InstrumentDraft {
    /// Append an empty row ("add another instrument")
    pub fn add_row(&mut self) {
        self.rows.push(InstrumentRow::default());
    }
}

/// A single instrument offering
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InstrumentRow {
    /// Instrument name
    pub instrument: String,
    /// Whether the musician performs or teaches this instrument
    pub offering: Option<Offering>,
}

/// Perform-or-teach answer for an instrument row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all_fields = "camelCase")]
pub enum Offering {
    /// Performs this instrument
    Perform {
        /// Performance fee per hour
        #[serde(default)]
        performance_fee: String,
    },
    /// Teaches this instrument
    Teach {
        /// Where lessons happen
        #[serde(default)]
        mode: Option<TeachingMode>,
        /// Beginner fee per hour
        #[serde(default)]
        beginner_fee: String,
        /// Intermediate fee per hour
        #[serde(default)]
        intermediate_fee: String,
        /// Advanced fee per hour
        #[serde(default)]
        advanced_fee: String,
    },
}

/// Lesson delivery mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TeachingMode {
    /// Remote lessons
    Online,
    /// In-person lessons
    Offline,
}

impl fmt::Display for TeachingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Online => write!(f, "Online"),
            Self::Offline => write!(f, "Offline"),
        }
    }
}

/// Instrument listing submission, built once at submit time
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InstrumentPayload {
    pub(crate) full_name: String,
    pub(crate) phone: String,
    pub(crate) instruments: Vec<InstrumentRowPayload>,
    pub(crate) timestamp: String,
}

impl InstrumentPayload {
    /// Number of instrument rows
    pub fn row_count(&self) -> usize {
        self.instruments.len()
    }

    /// ISO-8601 submission timestamp
    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }
}

/// Flat wire shape of one instrument row; unused fields are empty strings
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InstrumentRowPayload {
    pub(crate) instrument: String,
    #[serde(rename = "type")]
    pub(crate) kind: String,
    pub(crate) mode: String,
    pub(crate) beginner: String,
    pub(crate) intermediate: String,
    pub(crate) advanced: String,
    #[serde(rename = "performanceFee")]
    pub(crate) performance_fee: String,
}

/// Upstream acknowledgement: decoded JSON or the `{ "result": text }` fallback
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Ack(pub Value);

impl Ack {
    /// Borrow the JSON value
    pub const fn as_value(&self) -> &Value {
        &self.0
    }
}

/// Which of the two forms a submission belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FormPart {
    /// First form: profile and preferences
    Onboarding,
    /// Second form: instrument listing
    Instruments,
}

impl FormPart {
    /// HTTP route the proxy serves this part on
    pub const fn route(self) -> &'static str {
        match self {
            Self::Onboarding => "/api/submit",
            Self::Instruments => "/api/submit2",
        }
    }

    /// Environment variable naming the upstream endpoint
    pub const fn env_var(self) -> &'static str {
        match self {
            Self::Onboarding => "SHEETS_SCRIPT_URL",
            Self::Instruments => "SHEETS_SCRIPT_URL_PART2",
        }
    }
}

impl fmt::Display for FormPart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Onboarding => write!(f, "onboarding"),
            Self::Instruments => write!(f, "instruments"),
        }
    }
}
