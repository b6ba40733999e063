//! # genics-bio
//!
//! Biometric side of the pipeline: per-metric normalization curves and the
//! weighted composite aggregator with data-completeness confidence.

pub mod composite;
pub mod curves;
pub mod normalize;

pub use composite::{aggregate, score_readings};
pub use normalize::normalize;
