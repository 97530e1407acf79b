//! Static mapping from cluster ids to human-readable cognitive profiles.
//! The table is closed; anything outside it falls back to a generic label so
//! a drifted model can never fail an analysis run.

use thiserror::Error;

pub const FALLBACK_PROFILE: &str = "Unrecognized Profile";

pub const CLUSTER_PROFILES: [(u32, &str); 3] = [
    (0, "Balanced Cognitive State"),
    (1, "High Cognitive Load & Anxiety"),
    (2, "Low Focus & Digital Fatigue"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("cluster id {0} has no profile label")]
pub struct UnknownClusterError(pub u32);

pub fn cluster_profile(id: u32) -> Result<&'static str, UnknownClusterError> {
    CLUSTER_PROFILES
        .iter()
        .find(|(cluster, _)| *cluster == id)
        .map(|(_, profile)| *profile)
        .ok_or(UnknownClusterError(id))
}
