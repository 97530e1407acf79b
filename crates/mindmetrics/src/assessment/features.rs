//! Fixed-shape feature encoders feeding the two pre-trained models. Field
//! names and ordering here are part of the fitted-model contract: reordering
//! either list silently invalidates every prediction.

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::domain::SurveyResponse;

/// Column names the clustering scaler/model were fitted on, in order.
pub const COGNITIVE_FIELDS: [&str; 11] = [
    "work_interfere",
    "mental_health_consequence",
    "treatment",
    "benefits",
    "care_options",
    "daily_screen_time_min",
    "sleep_hours",
    "focus_score",
    "mood_score",
    "anxiety_level",
    "digital_wellbeing_score",
];

/// Source fields for the decision vector, in the order the classifier
/// consumes them.
pub const DECISION_FIELDS: [&str; 6] = [
    "daily_screen_time_min",
    "sleep_hours",
    "focus_score",
    "mood_score",
    "anxiety_level",
    "digital_wellbeing_score",
];

/// Single fixed-schema row for the clustering pipeline: the five ordinal
/// codes followed by the six raw numeric answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncodedCognitiveRecord {
    pub work_interfere: u8,
    pub mental_health_consequence: u8,
    pub treatment: u8,
    pub benefits: u8,
    pub care_options: u8,
    pub daily_screen_time_min: u16,
    pub sleep_hours: u8,
    pub focus_score: u8,
    pub mood_score: u8,
    pub anxiety_level: u8,
    pub digital_wellbeing_score: u8,
}

impl EncodedCognitiveRecord {
    pub fn from_survey(survey: &SurveyResponse) -> Self {
        Self {
            work_interfere: survey.work_interfere.ordinal(),
            mental_health_consequence: survey.mental_health_consequence.ordinal(),
            treatment: survey.treatment.ordinal(),
            benefits: survey.benefits.ordinal(),
            care_options: survey.care_options.ordinal(),
            daily_screen_time_min: survey.daily_screen_time_min,
            sleep_hours: survey.sleep_hours,
            focus_score: survey.focus_score,
            mood_score: survey.mood_score,
            anxiety_level: survey.anxiety_level,
            digital_wellbeing_score: survey.digital_wellbeing_score,
        }
    }

    /// The record as one numeric row, column order matching
    /// [`COGNITIVE_FIELDS`].
    pub fn as_row(&self) -> [f64; 11] {
        [
            f64::from(self.work_interfere),
            f64::from(self.mental_health_consequence),
            f64::from(self.treatment),
            f64::from(self.benefits),
            f64::from(self.care_options),
            f64::from(self.daily_screen_time_min),
            f64::from(self.sleep_hours),
            f64::from(self.focus_score),
            f64::from(self.mood_score),
            f64::from(self.anxiety_level),
            f64::from(self.digital_wellbeing_score),
        ]
    }
}

/// Build the decision-style input vector at exactly `width` elements:
/// zero-padded on the right when the classifier expects more than the six
/// source fields, front-truncated when it expects fewer. Truncation drops
/// trailing answers without failing; that matches the fitted pipeline, so it
/// is logged rather than rejected.
pub fn decision_vector(survey: &SurveyResponse, width: usize) -> Vec<f64> {
    let mut vector = vec![
        f64::from(survey.daily_screen_time_min),
        f64::from(survey.sleep_hours),
        f64::from(survey.focus_score),
        f64::from(survey.mood_score),
        f64::from(survey.anxiety_level),
        f64::from(survey.digital_wellbeing_score),
    ];

    if width < vector.len() {
        warn!(
            width,
            dropped = ?&DECISION_FIELDS[width..],
            "decision vector narrower than its source fields; trailing answers dropped"
        );
        vector.truncate(width);
    } else {
        vector.resize(width, 0.0);
    }

    vector
}
