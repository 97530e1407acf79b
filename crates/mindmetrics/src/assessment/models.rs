//! Capability traits for the pre-trained models. The models are external
//! collaborators: the service only ever calls `transform`/`predict` on
//! already-fitted artifacts and never looks inside them.

use thiserror::Error;

use super::features::EncodedCognitiveRecord;

/// Fitted normalization step the clustering model expects its input to have
/// passed through.
pub trait FeatureScaler: Send + Sync {
    fn transform(&self, record: &EncodedCognitiveRecord) -> Result<Vec<f64>, InferenceError>;
}

/// Pre-trained clustering model mapping a scaled record to a cluster id.
pub trait ClusterModel: Send + Sync {
    fn predict(&self, row: &[f64]) -> Result<u32, InferenceError>;
}

/// Pre-trained classifier mapping a decision vector to a style label.
pub trait DecisionClassifier: Send + Sync {
    fn predict(&self, vector: &[f64]) -> Result<String, InferenceError>;
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InferenceError {
    #[error("model expected {expected} features, got {actual}")]
    ShapeMismatch { expected: usize, actual: usize },
    #[error("model backend failure: {0}")]
    Backend(String),
}
