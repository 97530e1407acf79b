//! Loading of the four pre-trained model artifacts and the adapters that
//! expose them through the capability traits. Every number here was fitted
//! offline; the adapters only apply parameters at inference time.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::engine::AnalysisEngine;
use super::features::{EncodedCognitiveRecord, COGNITIVE_FIELDS};
use super::models::{ClusterModel, DecisionClassifier, FeatureScaler, InferenceError};

pub const SCALER_FILE: &str = "cognitive_scaler.json";
pub const CLUSTERS_FILE: &str = "cognitive_clusters.json";
pub const CLASSIFIER_FILE: &str = "decision_classifier.json";
pub const FEATURE_COUNT_FILE: &str = "decision_feature_count.json";

#[derive(Debug, Error)]
pub enum ModelLoadError {
    #[error("failed to read model artifact {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("model artifact {path} is not valid JSON: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("model artifact {path} is inconsistent: {detail}")]
    Schema { path: PathBuf, detail: String },
}

/// Fitted standardization parameters for the cognitive record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandardScaler {
    pub feature_names: Vec<String>,
    pub means: Vec<f64>,
    pub scales: Vec<f64>,
}

impl FeatureScaler for StandardScaler {
    fn transform(&self, record: &EncodedCognitiveRecord) -> Result<Vec<f64>, InferenceError> {
        let row = record.as_row();
        if self.means.len() != row.len() || self.scales.len() != row.len() {
            return Err(InferenceError::ShapeMismatch {
                expected: self.means.len(),
                actual: row.len(),
            });
        }

        Ok(row
            .iter()
            .zip(self.means.iter().zip(&self.scales))
            .map(|(value, (mean, scale))| {
                if *scale == 0.0 {
                    0.0
                } else {
                    (value - mean) / scale
                }
            })
            .collect())
    }
}

/// Fitted cluster centroids in scaled feature space. Prediction assigns the
/// nearest centroid by squared Euclidean distance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CentroidClusters {
    pub centroids: Vec<Vec<f64>>,
}

impl ClusterModel for CentroidClusters {
    fn predict(&self, row: &[f64]) -> Result<u32, InferenceError> {
        let mut best: Option<(usize, f64)> = None;
        for (index, centroid) in self.centroids.iter().enumerate() {
            if centroid.len() != row.len() {
                return Err(InferenceError::ShapeMismatch {
                    expected: centroid.len(),
                    actual: row.len(),
                });
            }
            let distance: f64 = centroid
                .iter()
                .zip(row)
                .map(|(center, value)| (center - value) * (center - value))
                .sum();
            if best.map_or(true, |(_, current)| distance < current) {
                best = Some((index, distance));
            }
        }

        best.map(|(index, _)| index as u32)
            .ok_or_else(|| InferenceError::Backend("cluster model has no centroids".to_string()))
    }
}

/// One node of a fitted decision tree, addressed by index into the tree's
/// node array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TreeNode {
    Branch {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
    },
    Leaf {
        class: usize,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionTree {
    pub nodes: Vec<TreeNode>,
}

/// Fitted tree ensemble voting on decision-style classes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreeEnsemble {
    pub classes: Vec<String>,
    pub n_features: usize,
    pub trees: Vec<DecisionTree>,
}

impl TreeEnsemble {
    fn vote(&self, tree: &DecisionTree, vector: &[f64]) -> Result<usize, InferenceError> {
        let mut cursor = 0usize;
        // A well-formed tree reaches a leaf in at most `nodes.len()` hops;
        // anything longer means the artifact encodes a cycle.
        for _ in 0..=tree.nodes.len() {
            match tree.nodes.get(cursor) {
                Some(TreeNode::Branch {
                    feature,
                    threshold,
                    left,
                    right,
                }) => {
                    let value =
                        vector
                            .get(*feature)
                            .ok_or_else(|| InferenceError::ShapeMismatch {
                                expected: feature + 1,
                                actual: vector.len(),
                            })?;
                    cursor = if *value <= *threshold { *left } else { *right };
                }
                Some(TreeNode::Leaf { class }) => return Ok(*class),
                None => {
                    return Err(InferenceError::Backend(format!(
                        "tree node index {cursor} out of range"
                    )))
                }
            }
        }

        Err(InferenceError::Backend(
            "tree walk exceeded node count; artifact encodes a cycle".to_string(),
        ))
    }
}

impl DecisionClassifier for TreeEnsemble {
    fn predict(&self, vector: &[f64]) -> Result<String, InferenceError> {
        if vector.len() != self.n_features {
            return Err(InferenceError::ShapeMismatch {
                expected: self.n_features,
                actual: vector.len(),
            });
        }

        let mut tally = vec![0usize; self.classes.len()];
        for tree in &self.trees {
            let class = self.vote(tree, vector)?;
            let slot = tally.get_mut(class).ok_or_else(|| {
                InferenceError::Backend(format!("tree voted for unknown class index {class}"))
            })?;
            *slot += 1;
        }

        // Ties resolve to the lowest class index, matching the fitted
        // pipeline's argmax behavior.
        let mut winner: Option<(usize, usize)> = None;
        for (index, count) in tally.iter().enumerate() {
            if winner.map_or(true, |(_, best)| *count > best) {
                winner = Some((index, *count));
            }
        }

        winner
            .map(|(index, _)| self.classes[index].clone())
            .ok_or_else(|| InferenceError::Backend("classifier has no classes".to_string()))
    }
}

fn read_artifact<T: DeserializeOwned>(path: &Path) -> Result<T, ModelLoadError> {
    let file = File::open(path).map_err(|source| ModelLoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_reader(BufReader::new(file)).map_err(|source| ModelLoadError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// The four artifacts loaded once per process and shared read-only for its
/// lifetime.
#[derive(Debug, Clone)]
pub struct ModelBundle {
    pub scaler: Arc<StandardScaler>,
    pub clusters: Arc<CentroidClusters>,
    pub classifier: Arc<TreeEnsemble>,
    pub decision_feature_count: usize,
}

impl ModelBundle {
    /// Load and cross-check every artifact in `dir`. Any failure is fatal to
    /// startup: no analysis can run without a coherent bundle.
    pub fn load(dir: &Path) -> Result<Self, ModelLoadError> {
        let scaler_path = dir.join(SCALER_FILE);
        let scaler: StandardScaler = read_artifact(&scaler_path)?;
        if !scaler
            .feature_names
            .iter()
            .map(String::as_str)
            .eq(COGNITIVE_FIELDS)
        {
            return Err(ModelLoadError::Schema {
                path: scaler_path,
                detail: format!(
                    "scaler was fitted on {:?}, expected {:?}",
                    scaler.feature_names, COGNITIVE_FIELDS
                ),
            });
        }
        if scaler.means.len() != COGNITIVE_FIELDS.len()
            || scaler.scales.len() != COGNITIVE_FIELDS.len()
        {
            return Err(ModelLoadError::Schema {
                path: scaler_path,
                detail: format!(
                    "scaler carries {} means and {} scales for {} features",
                    scaler.means.len(),
                    scaler.scales.len(),
                    COGNITIVE_FIELDS.len()
                ),
            });
        }

        let clusters_path = dir.join(CLUSTERS_FILE);
        let clusters: CentroidClusters = read_artifact(&clusters_path)?;
        if clusters.centroids.is_empty() {
            return Err(ModelLoadError::Schema {
                path: clusters_path,
                detail: "cluster model carries no centroids".to_string(),
            });
        }
        if let Some(centroid) = clusters
            .centroids
            .iter()
            .find(|centroid| centroid.len() != COGNITIVE_FIELDS.len())
        {
            return Err(ModelLoadError::Schema {
                path: clusters_path,
                detail: format!(
                    "centroid has {} dimensions, expected {}",
                    centroid.len(),
                    COGNITIVE_FIELDS.len()
                ),
            });
        }

        let classifier_path = dir.join(CLASSIFIER_FILE);
        let classifier: TreeEnsemble = read_artifact(&classifier_path)?;
        if classifier.classes.is_empty() {
            return Err(ModelLoadError::Schema {
                path: classifier_path,
                detail: "classifier carries no classes".to_string(),
            });
        }

        let count_path = dir.join(FEATURE_COUNT_FILE);
        let decision_feature_count: usize = read_artifact(&count_path)?;
        if classifier.n_features != decision_feature_count {
            return Err(ModelLoadError::Schema {
                path: count_path,
                detail: format!(
                    "feature count artifact says {} but the classifier was fitted on {}",
                    decision_feature_count, classifier.n_features
                ),
            });
        }

        Ok(Self {
            scaler: Arc::new(scaler),
            clusters: Arc::new(clusters),
            classifier: Arc::new(classifier),
            decision_feature_count,
        })
    }

    /// Build the immutable analysis handle over this bundle.
    pub fn engine(&self) -> AnalysisEngine<StandardScaler, CentroidClusters, TreeEnsemble> {
        AnalysisEngine::new(
            self.scaler.clone(),
            self.clusters.clone(),
            self.classifier.clone(),
            self.decision_feature_count,
        )
    }
}
