//! The cognitive readiness formula. Pure arithmetic over the six numeric
//! answers; the weights are fixed and the result is capped at 100, which is
//! also the formula's natural maximum at the declared input bounds.

use serde::{Deserialize, Serialize};

use super::domain::SurveyResponse;

pub const MAX_SCORE: u8 = 100;

/// Factors contributing to the readiness score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreFactor {
    Anxiety,
    Focus,
    Mood,
    Sleep,
    DigitalWellbeing,
}

impl ScoreFactor {
    pub const fn label(self) -> &'static str {
        match self {
            ScoreFactor::Anxiety => "anxiety",
            ScoreFactor::Focus => "focus",
            ScoreFactor::Mood => "mood",
            ScoreFactor::Sleep => "sleep",
            ScoreFactor::DigitalWellbeing => "digital wellbeing",
        }
    }
}

/// Discrete contribution to the readiness score, kept so callers can show
/// where the number came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreComponent {
    pub factor: ScoreFactor,
    pub points: i32,
    pub note: String,
}

/// Composite score plus its per-factor trail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub components: Vec<ScoreComponent>,
    pub raw_total: i32,
    pub score: u8,
}

/// Apply the readiness formula to a survey. Anxiety is inverted so that a
/// calmer respondent scores higher; every other factor contributes directly.
pub fn breakdown(survey: &SurveyResponse) -> ScoreBreakdown {
    let mut components = Vec::with_capacity(5);

    let calm_points = (10 - i32::from(survey.anxiety_level)) * 5;
    components.push(ScoreComponent {
        factor: ScoreFactor::Anxiety,
        points: calm_points,
        note: format!(
            "anxiety {} of 10, inverted at weight 5",
            survey.anxiety_level
        ),
    });

    let focus_points = i32::from(survey.focus_score) * 5;
    components.push(ScoreComponent {
        factor: ScoreFactor::Focus,
        points: focus_points,
        note: format!("focus {} of 10 at weight 5", survey.focus_score),
    });

    let mood_points = i32::from(survey.mood_score) * 3;
    components.push(ScoreComponent {
        factor: ScoreFactor::Mood,
        points: mood_points,
        note: format!("mood {} of 10 at weight 3", survey.mood_score),
    });

    let sleep_points = i32::from(survey.sleep_hours) * 4;
    components.push(ScoreComponent {
        factor: ScoreFactor::Sleep,
        points: sleep_points,
        note: format!("{} hours of sleep at weight 4", survey.sleep_hours),
    });

    let wellbeing_points = i32::from(survey.digital_wellbeing_score) * 3;
    components.push(ScoreComponent {
        factor: ScoreFactor::DigitalWellbeing,
        points: wellbeing_points,
        note: format!(
            "digital wellbeing {} of 10 at weight 3",
            survey.digital_wellbeing_score
        ),
    });

    let raw_total = components.iter().map(|component| component.points).sum();
    // In-bounds input always lands in [23, 125]; the clamp only ever trims
    // the top.
    let score = i32::clamp(raw_total, 0, i32::from(MAX_SCORE)) as u8;

    ScoreBreakdown {
        components,
        raw_total,
        score,
    }
}

/// The readiness score alone, for callers that do not need the trail.
pub fn readiness_score(survey: &SurveyResponse) -> u8 {
    breakdown(survey).score
}
