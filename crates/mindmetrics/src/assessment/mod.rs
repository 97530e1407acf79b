//! Survey intake, readiness scoring, feature encoding, and the inference
//! adapter around the pre-trained cognitive-cluster and decision-style
//! models.

pub mod artifacts;
pub mod domain;
pub mod engine;
pub mod features;
pub mod intake;
pub mod labels;
pub mod models;
pub mod report;
pub mod router;
pub mod scoring;

#[cfg(test)]
mod tests;

pub use artifacts::{
    CentroidClusters, DecisionTree, ModelBundle, ModelLoadError, StandardScaler, TreeEnsemble,
    TreeNode,
};
pub use domain::{AnalysisResult, SurveyResponse, WorkInterference, YesNo};
pub use engine::{AnalysisEngine, AnalysisError};
pub use features::{decision_vector, EncodedCognitiveRecord};
pub use intake::{IntakeError, InvalidCategoryError};
pub use models::{ClusterModel, DecisionClassifier, FeatureScaler, InferenceError};
pub use report::{AnalysisReport, MetricPoint, ReadinessBand};
pub use router::assessment_router;
pub use scoring::{ScoreBreakdown, ScoreComponent, ScoreFactor};
