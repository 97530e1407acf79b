use std::sync::Arc;

use axum::response::Response;
use proptest::prelude::*;
use serde_json::Value;

use crate::assessment::domain::{SurveyResponse, WorkInterference, YesNo};
use crate::assessment::engine::AnalysisEngine;
use crate::assessment::features::EncodedCognitiveRecord;
use crate::assessment::models::{ClusterModel, DecisionClassifier, FeatureScaler, InferenceError};

/// Fixture whose raw score total is 124, so the cap at 100 is exercised.
pub(super) fn survey() -> SurveyResponse {
    SurveyResponse {
        work_interfere: WorkInterference::Sometimes,
        mental_health_consequence: YesNo::No,
        treatment: YesNo::Yes,
        benefits: YesNo::No,
        care_options: YesNo::Yes,
        daily_screen_time_min: 300,
        sleep_hours: 7,
        focus_score: 6,
        mood_score: 6,
        anxiety_level: 4,
        digital_wellbeing_score: 6,
    }
}

pub(super) struct PassthroughScaler;

impl FeatureScaler for PassthroughScaler {
    fn transform(&self, record: &EncodedCognitiveRecord) -> Result<Vec<f64>, InferenceError> {
        Ok(record.as_row().to_vec())
    }
}

pub(super) struct FixedCluster(pub(super) u32);

impl ClusterModel for FixedCluster {
    fn predict(&self, _row: &[f64]) -> Result<u32, InferenceError> {
        Ok(self.0)
    }
}

pub(super) struct FixedClassifier(pub(super) &'static str);

impl DecisionClassifier for FixedClassifier {
    fn predict(&self, _vector: &[f64]) -> Result<String, InferenceError> {
        Ok(self.0.to_string())
    }
}

pub(super) fn engine(
    cluster: u32,
    style: &'static str,
) -> AnalysisEngine<PassthroughScaler, FixedCluster, FixedClassifier> {
    AnalysisEngine::new(
        Arc::new(PassthroughScaler),
        Arc::new(FixedCluster(cluster)),
        Arc::new(FixedClassifier(style)),
        6,
    )
}

pub(super) fn any_survey() -> impl Strategy<Value = SurveyResponse> {
    (
        (
            0usize..WorkInterference::ALL.len(),
            any::<bool>(),
            any::<bool>(),
            any::<bool>(),
            any::<bool>(),
        ),
        (
            30u16..=900,
            3u8..=10,
            1u8..=10,
            1u8..=10,
            1u8..=10,
            1u8..=10,
        ),
    )
        .prop_map(
            |(
                (interfere, consequence, treatment, benefits, care),
                (screen, sleep, focus, mood, anxiety, wellbeing),
            )| SurveyResponse {
                work_interfere: WorkInterference::ALL[interfere],
                mental_health_consequence: yes_no(consequence),
                treatment: yes_no(treatment),
                benefits: yes_no(benefits),
                care_options: yes_no(care),
                daily_screen_time_min: screen,
                sleep_hours: sleep,
                focus_score: focus,
                mood_score: mood,
                anxiety_level: anxiety,
                digital_wellbeing_score: wellbeing,
            },
        )
}

fn yes_no(value: bool) -> YesNo {
    if value {
        YesNo::Yes
    } else {
        YesNo::No
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
