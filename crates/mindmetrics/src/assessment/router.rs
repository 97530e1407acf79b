use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::json;

use super::domain::{SurveyResponse, WorkInterference, YesNo};
use super::engine::{AnalysisEngine, AnalysisError};
use super::models::{ClusterModel, DecisionClassifier, FeatureScaler};

/// Router builder exposing the assessment endpoints over a shared engine.
pub fn assessment_router<S, C, D>(engine: Arc<AnalysisEngine<S, C, D>>) -> Router
where
    S: FeatureScaler + 'static,
    C: ClusterModel + 'static,
    D: DecisionClassifier + 'static,
{
    Router::new()
        .route("/api/v1/assessment/analyze", post(analyze_handler::<S, C, D>))
        .route("/api/v1/assessment/schema", get(schema_handler))
        .with_state(engine)
}

pub(crate) async fn analyze_handler<S, C, D>(
    State(engine): State<Arc<AnalysisEngine<S, C, D>>>,
    Json(survey): Json<SurveyResponse>,
) -> Response
where
    S: FeatureScaler + 'static,
    C: ClusterModel + 'static,
    D: DecisionClassifier + 'static,
{
    match engine.analyze(&survey) {
        Ok(report) => (StatusCode::OK, Json(report)).into_response(),
        Err(AnalysisError::Intake(error)) => {
            let payload = json!({ "error": error.to_string() });
            (StatusCode::UNPROCESSABLE_ENTITY, Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({ "error": other.to_string() });
            (StatusCode::INTERNAL_SERVER_ERROR, Json(payload)).into_response()
        }
    }
}

/// Declared label sets, numeric bounds, and form defaults, so a client can
/// render the assessment form without hardcoding the contract.
pub(crate) async fn schema_handler() -> Json<serde_json::Value> {
    let defaults = SurveyResponse::form_defaults();
    let (screen_lo, screen_hi) = SurveyResponse::SCREEN_TIME_BOUNDS;
    let (sleep_lo, sleep_hi) = SurveyResponse::SLEEP_BOUNDS;
    let (scale_lo, scale_hi) = SurveyResponse::SCALE_BOUNDS;

    Json(json!({
        "categorical": {
            "work_interfere": WorkInterference::LABELS,
            "mental_health_consequence": YesNo::LABELS,
            "treatment": YesNo::LABELS,
            "benefits": YesNo::LABELS,
            "care_options": YesNo::LABELS,
        },
        "numeric": {
            "daily_screen_time_min": { "min": screen_lo, "max": screen_hi, "default": defaults.daily_screen_time_min },
            "sleep_hours": { "min": sleep_lo, "max": sleep_hi, "default": defaults.sleep_hours },
            "focus_score": { "min": scale_lo, "max": scale_hi, "default": defaults.focus_score },
            "mood_score": { "min": scale_lo, "max": scale_hi, "default": defaults.mood_score },
            "anxiety_level": { "min": scale_lo, "max": scale_hi, "default": defaults.anxiety_level },
            "digital_wellbeing_score": { "min": scale_lo, "max": scale_hi, "default": defaults.digital_wellbeing_score },
        },
        "defaults": defaults,
    }))
}
