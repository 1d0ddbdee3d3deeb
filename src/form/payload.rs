//! Onboarding payload assembly

use crate::form::Clock;
use crate::types::{
    format_timestamp, PreferenceSelections, ProfileDraft, SubmissionPayload, TagSet,
};

/// Flatten a draft and its selections into the submission payload
///
/// Pure apart from the clock; callers gate this on every step being valid.
pub fn build_payload(
    draft: &ProfileDraft,
    selections: &PreferenceSelections,
    clock: &dyn Clock,
) -> SubmissionPayload {
    SubmissionPayload {
        full_name: draft.full_name.trim().to_string(),
        phone: draft.phone.trim().to_string(),
        email: draft.email.trim().to_string(),
        dob: draft.dob.clone(),
        primary_instrument: draft.primary_instrument.clone(),
        secondary_instruments: draft.secondary_instruments.clone(),
        city: draft.city.trim().to_string(),
        pincode: draft.pincode.trim().to_string(),
        association: selections
            .association
            .map(|a| a.to_string())
            .unwrap_or_default(),
        class_formats: to_list(&selections.class_formats),
        exams: to_list(&selections.exams),
        additional_formats: to_list(&selections.additional_formats),
        learner_groups: to_list(&selections.learner_groups),
        teaching_fee: draft.teaching_fee.clone().unwrap_or_default(),
        performance_settings: to_list(&selections.performance_settings),
        performance_fee: draft.performance_fee.clone().unwrap_or_default(),
        collab_projects: to_list(&selections.collab_projects),
        contribution: draft.contribution.clone().unwrap_or_default(),
        timestamp: format_timestamp(clock.now()),
    }
}

fn to_list(set: &TagSet) -> Vec<String> {
    set.iter().cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::FixedClock;
    use crate::types::{Association, TagGroup};
    use chrono::{TimeZone, Utc};

    fn clock() -> FixedClock {
        FixedClock(Utc.with_ymd_and_hms(2025, 3, 14, 9, 30, 0).unwrap())
    }

    fn draft() -> ProfileDraft {
        ProfileDraft {
            full_name: " Asha Rao ".to_string(),
            phone: "9876543210".to_string(),
            email: "asha@example.com".to_string(),
            dob: "1994-02-11".to_string(),
            primary_instrument: "Sitar".to_string(),
            secondary_instruments: vec!["Tabla".to_string()],
            city: "Pune".to_string(),
            pincode: "411001".to_string(),
            teaching_fee: Some("800".to_string()),
            performance_fee: None,
            contribution: None,
        }
    }

    fn selections() -> PreferenceSelections {
        let mut selections = PreferenceSelections {
            association: Some(Association::Teaching),
            ..PreferenceSelections::default()
        };
        selections.toggle(TagGroup::ClassFormats, "Online 1:1");
        selections.toggle(TagGroup::ClassFormats, "Group");
        selections.toggle(TagGroup::Exams, "Gandharva");
        selections
    }

    #[test]
    fn test_payload_flattens_draft_and_selections() {
        let payload = build_payload(&draft(), &selections(), &clock());

        assert_eq!(payload.full_name(), "Asha Rao");
        assert_eq!(payload.association(), "Teaching");
        assert_eq!(payload.class_formats, ["Group", "Online 1:1"]);
        assert_eq!(payload.teaching_fee, "800");
        assert_eq!(payload.performance_fee, "");
        assert_eq!(payload.timestamp(), "2025-03-14T09:30:00.000Z");
    }

    #[test]
    fn test_payload_is_deterministic_for_fixed_clock() {
        let a = build_payload(&draft(), &selections(), &clock());
        let b = build_payload(&draft(), &selections(), &clock());
        assert_eq!(a, b);
    }

    #[test]
    fn test_payload_ignores_selection_order() {
        let mut reordered = PreferenceSelections {
            association: Some(Association::Teaching),
            ..PreferenceSelections::default()
        };
        reordered.toggle(TagGroup::Exams, "Gandharva");
        reordered.toggle(TagGroup::ClassFormats, "Group");
        reordered.toggle(TagGroup::ClassFormats, "Online 1:1");

        assert_eq!(
            build_payload(&draft(), &selections(), &clock()),
            build_payload(&draft(), &reordered, &clock())
        );
    }

    #[test]
    fn test_payload_wire_field_order() {
        let payload = build_payload(&draft(), &selections(), &clock());
        let json = serde_json::to_string(&payload).unwrap();

        let keys = [
            "fullName",
            "phone",
            "email",
            "dob",
            "primaryInstrument",
            "secondaryInstruments",
            "city",
            "pincode",
            "association",
            "classFormats",
            "exams",
            "additionalFormats",
            "learnerGroups",
            "teachingFee",
            "performanceSettings",
            "performanceFee",
            "collabProjects",
            "contribution",
            "timestamp",
        ];
        let positions: Vec<usize> = keys
            .iter()
            .map(|k| json.find(&format!("\"{k}\":")).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]), "{json}");
    }
}
