//! Test data factories for maestera types
//!
//! These are test utilities - not all may be used in current tests but are
//! available for future test development.

#![allow(dead_code)]

use chrono::{TimeZone, Utc};
use maestera::form::{FixedClock, Onboarding};
use maestera::types::{
    Association, InstrumentDraft, InstrumentRow, Offering, PreferenceSelections, ProfileDraft,
    TagGroup, TeachingMode,
};
use serde_json::{json, Value};

/// Clock pinned to 2025-03-14T09:30:00Z
pub fn fixed_clock() -> FixedClock {
    FixedClock(Utc.with_ymd_and_hms(2025, 3, 14, 9, 30, 0).unwrap())
}

/// Profile that passes the basic information step
pub fn make_profile(name: &str) -> ProfileDraft {
    ProfileDraft {
        full_name: name.to_string(),
        phone: "9876543210".to_string(),
        email: "a@b.com".to_string(),
        city: "Mumbai".to_string(),
        pincode: "400001".to_string(),
        ..ProfileDraft::default()
    }
}

/// Selections with every group populated for an association
pub fn make_selections(association: Association) -> PreferenceSelections {
    let mut selections = PreferenceSelections {
        association: Some(association),
        ..PreferenceSelections::default()
    };
    selections.toggle(TagGroup::ClassFormats, "One-on-one");
    selections.toggle(TagGroup::Exams, "Trinity");
    selections.toggle(TagGroup::AdditionalFormats, "Workshops");
    selections.toggle(TagGroup::LearnerGroups, "Adults");
    selections.toggle(TagGroup::PerformanceSettings, "Weddings");
    selections
}

/// Complete onboarding answers for a teaching-and-performing musician
pub fn make_onboarding(name: &str) -> Onboarding {
    Onboarding {
        draft: ProfileDraft {
            teaching_fee: Some("800".to_string()),
            performance_fee: Some("12000".to_string()),
            ..make_profile(name)
        },
        selections: make_selections(Association::Both),
    }
}

/// Onboarding answers as the JSON a client would post
pub fn onboarding_json(name: &str) -> Value {
    json!({
        "draft": {
            "fullName": name,
            "phone": "+91 98765 43210",
            "email": "a@b.com",
            "city": "Mumbai",
            "pincode": "400001",
            "performanceFee": "12000"
        },
        "selections": {
            "association": "Performance",
            "performanceSettings": ["Concerts"]
        }
    })
}

/// Instrument listing with one performing and one teaching row
pub fn make_instruments(name: &str) -> InstrumentDraft {
    InstrumentDraft {
        full_name: name.to_string(),
        phone: "9876543210".to_string(),
        rows: vec![
            InstrumentRow {
                instrument: "Tabla".to_string(),
                offering: Some(Offering::Perform {
                    performance_fee: "5000".to_string(),
                }),
            },
            InstrumentRow {
                instrument: "Sitar".to_string(),
                offering: Some(Offering::Teach {
                    mode: Some(TeachingMode::Online),
                    beginner_fee: "500".to_string(),
                    intermediate_fee: "700".to_string(),
                    advanced_fee: "1000".to_string(),
                }),
            },
        ],
    }
}
