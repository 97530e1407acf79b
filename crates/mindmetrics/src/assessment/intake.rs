//! Defensive validation applied before any answer reaches the scoring or
//! encoding layers. The form constrains every field already; intake re-checks
//! so a malformed caller can never push out-of-contract values into the
//! fitted models.

use thiserror::Error;

use super::domain::SurveyResponse;

/// A categorical label outside the field's declared set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("'{value}' is not one of {allowed:?}")]
pub struct InvalidCategoryError {
    pub value: String,
    pub allowed: &'static [&'static str],
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IntakeError {
    #[error(transparent)]
    Category(#[from] InvalidCategoryError),
    #[error("{field} must be within [{min}, {max}], got {value}")]
    OutOfRange {
        field: &'static str,
        value: i64,
        min: i64,
        max: i64,
    },
}

fn in_range(field: &'static str, value: i64, min: i64, max: i64) -> Result<(), IntakeError> {
    if value < min || value > max {
        return Err(IntakeError::OutOfRange {
            field,
            value,
            min,
            max,
        });
    }
    Ok(())
}

/// Re-validate every numeric bound on a submitted survey. Categorical fields
/// are closed enums, so they are already inside their declared sets by the
/// time a `SurveyResponse` exists.
pub fn screen(survey: &SurveyResponse) -> Result<(), IntakeError> {
    let (screen_lo, screen_hi) = SurveyResponse::SCREEN_TIME_BOUNDS;
    in_range(
        "daily_screen_time_min",
        i64::from(survey.daily_screen_time_min),
        i64::from(screen_lo),
        i64::from(screen_hi),
    )?;

    let (sleep_lo, sleep_hi) = SurveyResponse::SLEEP_BOUNDS;
    in_range(
        "sleep_hours",
        i64::from(survey.sleep_hours),
        i64::from(sleep_lo),
        i64::from(sleep_hi),
    )?;

    let (scale_lo, scale_hi) = SurveyResponse::SCALE_BOUNDS;
    for (field, value) in [
        ("focus_score", survey.focus_score),
        ("mood_score", survey.mood_score),
        ("anxiety_level", survey.anxiety_level),
        ("digital_wellbeing_score", survey.digital_wellbeing_score),
    ] {
        in_range(
            field,
            i64::from(value),
            i64::from(scale_lo),
            i64::from(scale_hi),
        )?;
    }

    Ok(())
}
