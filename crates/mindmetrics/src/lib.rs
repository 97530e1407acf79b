//! Core library for the cognitive self-assessment service: survey intake,
//! the readiness scoring formula, feature encoding, and the adapter layer
//! around the pre-trained clustering and decision-style models.

pub mod assessment;
pub mod config;
pub mod error;
pub mod telemetry;
