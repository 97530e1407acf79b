use proptest::prelude::*;

use super::common::*;
use crate::assessment::domain::{SurveyResponse, WorkInterference, YesNo};
use crate::assessment::features::{
    decision_vector, EncodedCognitiveRecord, COGNITIVE_FIELDS, DECISION_FIELDS,
};

#[test]
fn ordinals_match_fitted_positions() {
    assert_eq!(WorkInterference::Often.ordinal(), 3);
    assert_eq!(WorkInterference::Never.ordinal(), 0);
    assert_eq!(YesNo::No.ordinal(), 0);
    assert_eq!(YesNo::Yes.ordinal(), 1);
}

#[test]
fn labels_round_trip_through_ordinals() {
    for (position, option) in WorkInterference::ALL.into_iter().enumerate() {
        assert_eq!(option.ordinal() as usize, position);
        assert_eq!(
            WorkInterference::from_label(option.label()).expect("label is declared"),
            option
        );
    }
    for (position, option) in YesNo::ALL.into_iter().enumerate() {
        assert_eq!(option.ordinal() as usize, position);
        assert_eq!(
            YesNo::from_label(option.label()).expect("label is declared"),
            option
        );
    }
}

#[test]
fn undeclared_labels_are_rejected() {
    let error = WorkInterference::from_label("Constantly").expect_err("not a declared label");
    assert_eq!(error.value, "Constantly");
    assert_eq!(error.allowed, &WorkInterference::LABELS[..]);

    assert!(YesNo::from_label("Maybe").is_err());
    assert!(YesNo::from_label("yes").is_err(), "labels are case sensitive");
}

#[test]
fn survey_deserializes_from_form_labels() {
    let parsed: SurveyResponse = serde_json::from_value(serde_json::json!({
        "work_interfere": "Often",
        "mental_health_consequence": "No",
        "treatment": "No",
        "benefits": "Yes",
        "care_options": "No",
        "daily_screen_time_min": 420,
        "sleep_hours": 6,
        "focus_score": 5,
        "mood_score": 7,
        "anxiety_level": 8,
        "digital_wellbeing_score": 4,
    }))
    .expect("valid form payload");

    assert_eq!(parsed.work_interfere, WorkInterference::Often);
    assert_eq!(parsed.treatment, YesNo::No);

    let rejected = serde_json::from_value::<SurveyResponse>(serde_json::json!({
        "work_interfere": "Always",
        "mental_health_consequence": "No",
        "treatment": "No",
        "benefits": "No",
        "care_options": "No",
        "daily_screen_time_min": 300,
        "sleep_hours": 7,
        "focus_score": 6,
        "mood_score": 6,
        "anxiety_level": 4,
        "digital_wellbeing_score": 6,
    }));
    let message = rejected.expect_err("undeclared label").to_string();
    assert!(message.contains("not one of"), "got: {message}");
}

#[test]
fn record_columns_follow_the_fitted_order() {
    let record = EncodedCognitiveRecord::from_survey(&survey());

    assert_eq!(COGNITIVE_FIELDS.len(), 11);
    assert_eq!(
        record.as_row(),
        [2.0, 0.0, 1.0, 0.0, 1.0, 300.0, 7.0, 6.0, 6.0, 4.0, 6.0]
    );
}

#[test]
fn narrow_decision_vector_keeps_leading_fields() {
    let vector = decision_vector(&survey(), 4);
    assert_eq!(vector, vec![300.0, 7.0, 6.0, 6.0]);
}

#[test]
fn wide_decision_vector_zero_pads() {
    let vector = decision_vector(&survey(), 8);
    assert_eq!(vector, vec![300.0, 7.0, 6.0, 6.0, 4.0, 6.0, 0.0, 0.0]);
}

#[test]
fn zero_width_decision_vector_is_empty() {
    assert!(decision_vector(&survey(), 0).is_empty());
}

proptest! {
    #[test]
    fn decision_vector_always_matches_requested_width(
        response in any_survey(),
        width in 0usize..32,
    ) {
        let vector = decision_vector(&response, width);
        prop_assert_eq!(vector.len(), width);
        let kept = width.min(DECISION_FIELDS.len());
        prop_assert_eq!(&vector[..kept], &decision_vector(&response, DECISION_FIELDS.len())[..kept]);
        prop_assert!(vector[kept..].iter().all(|value| *value == 0.0));
    }
}
