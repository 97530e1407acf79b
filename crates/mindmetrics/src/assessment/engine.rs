//! Orchestrates one analysis run: screen the answers, compute the readiness
//! score, encode both feature shapes, and consult the two pre-trained models.
//! The engine is an immutable handle built once at startup and shared
//! read-only across runs.

use std::sync::Arc;

use thiserror::Error;
use tracing::warn;

use super::domain::{AnalysisResult, SurveyResponse};
use super::features::{decision_vector, EncodedCognitiveRecord};
use super::intake::{self, IntakeError};
use super::labels;
use super::models::{ClusterModel, DecisionClassifier, FeatureScaler, InferenceError};
use super::report::AnalysisReport;
use super::scoring;

pub struct AnalysisEngine<S, C, D> {
    scaler: Arc<S>,
    clusters: Arc<C>,
    classifier: Arc<D>,
    decision_feature_count: usize,
}

impl<S, C, D> AnalysisEngine<S, C, D>
where
    S: FeatureScaler + 'static,
    C: ClusterModel + 'static,
    D: DecisionClassifier + 'static,
{
    pub fn new(
        scaler: Arc<S>,
        clusters: Arc<C>,
        classifier: Arc<D>,
        decision_feature_count: usize,
    ) -> Self {
        Self {
            scaler,
            clusters,
            classifier,
            decision_feature_count,
        }
    }

    pub fn decision_feature_count(&self) -> usize {
        self.decision_feature_count
    }

    /// Run the full analysis. Cluster ids outside the label table degrade to
    /// the fallback profile instead of failing the run.
    pub fn analyze(&self, survey: &SurveyResponse) -> Result<AnalysisReport, AnalysisError> {
        intake::screen(survey)?;

        let breakdown = scoring::breakdown(survey);

        let record = EncodedCognitiveRecord::from_survey(survey);
        let scaled = self.scaler.transform(&record)?;
        let cluster_id = self.clusters.predict(&scaled)?;
        let cognitive_profile = match labels::cluster_profile(cluster_id) {
            Ok(profile) => profile.to_string(),
            Err(err) => {
                warn!(cluster_id, %err, "falling back to the generic profile label");
                labels::FALLBACK_PROFILE.to_string()
            }
        };

        let vector = decision_vector(survey, self.decision_feature_count);
        let decision_style = self.classifier.predict(&vector)?;

        let result = AnalysisResult {
            readiness_score: breakdown.score,
            cluster_id,
            cognitive_profile,
            decision_style,
        };

        Ok(AnalysisReport::assemble(survey, result, breakdown))
    }
}

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error(transparent)]
    Intake(#[from] IntakeError),
    #[error(transparent)]
    Inference(#[from] InferenceError),
}
