//! # genics-core
//!
//! Foundation crate for the GuerillaGenics scoring pipeline.
//! Defines all types, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod probability;

// Re-export the most commonly used types at the crate root.
pub use config::GenicsConfig;
pub use errors::{ScoreError, ScoreResult};
pub use models::{
    AlertEvent, AlertKind, AlignmentFeatures, BirthdayAlignment, CipherSet, CompositeScore,
    ConfidenceBand, DateNumerology, FusionResult, MetricType,
};
pub use probability::Probability;
