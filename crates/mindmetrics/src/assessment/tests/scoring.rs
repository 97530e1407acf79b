use proptest::prelude::*;

use super::common::*;
use crate::assessment::scoring::{breakdown, readiness_score, ScoreFactor, MAX_SCORE};

#[test]
fn formula_caps_at_one_hundred() {
    // (10-4)*5 + 6*5 + 6*3 + 7*4 + 6*3 = 124, capped.
    let response = survey();
    let trail = breakdown(&response);

    assert_eq!(trail.raw_total, 124);
    assert_eq!(trail.score, 100);
}

#[test]
fn formula_floor_is_twenty_three() {
    let mut response = survey();
    response.anxiety_level = 10;
    response.focus_score = 1;
    response.mood_score = 1;
    response.sleep_hours = 3;
    response.digital_wellbeing_score = 1;

    let trail = breakdown(&response);

    assert_eq!(trail.raw_total, 23);
    assert_eq!(trail.score, 23);
}

#[test]
fn breakdown_components_sum_to_raw_total() {
    let trail = breakdown(&survey());

    assert_eq!(trail.components.len(), 5);
    let summed: i32 = trail.components.iter().map(|component| component.points).sum();
    assert_eq!(summed, trail.raw_total);
    assert!(trail
        .components
        .iter()
        .any(|component| component.factor == ScoreFactor::Anxiety && component.points == 30));
}

proptest! {
    #[test]
    fn score_stays_within_bounds(response in any_survey()) {
        let score = readiness_score(&response);
        prop_assert!(score <= MAX_SCORE);
        // The formula's natural minimum at the declared bounds is 23, so the
        // zero floor is never exercised by valid input.
        prop_assert!(score >= 23);
    }

    #[test]
    fn score_rises_with_focus(response in any_survey()) {
        prop_assume!(response.focus_score < 10);
        let mut improved = response;
        improved.focus_score += 1;
        prop_assert!(readiness_score(&improved) >= readiness_score(&response));
    }

    #[test]
    fn score_rises_with_mood(response in any_survey()) {
        prop_assume!(response.mood_score < 10);
        let mut improved = response;
        improved.mood_score += 1;
        prop_assert!(readiness_score(&improved) >= readiness_score(&response));
    }

    #[test]
    fn score_rises_with_sleep(response in any_survey()) {
        prop_assume!(response.sleep_hours < 10);
        let mut improved = response;
        improved.sleep_hours += 1;
        prop_assert!(readiness_score(&improved) >= readiness_score(&response));
    }

    #[test]
    fn score_rises_with_wellbeing(response in any_survey()) {
        prop_assume!(response.digital_wellbeing_score < 10);
        let mut improved = response;
        improved.digital_wellbeing_score += 1;
        prop_assert!(readiness_score(&improved) >= readiness_score(&response));
    }

    #[test]
    fn score_falls_as_anxiety_rises(response in any_survey()) {
        prop_assume!(response.anxiety_level < 10);
        let mut worse = response;
        worse.anxiety_level += 1;
        prop_assert!(readiness_score(&worse) <= readiness_score(&response));
    }
}
