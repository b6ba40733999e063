//! # genics-fusion
//!
//! The single point where the two independently-designed models meet: maps
//! the biometric composite to a baseline probability, converts alignment
//! signals to a log-odds adjustment, and fuses them into one probability
//! with an edge delta and a discrete confidence band. Also hosts the
//! end-to-end per-entity pipeline and parallel slate scoring.

pub mod engine;
pub mod math;
pub mod pipeline;

pub use engine::FusionEngine;
pub use pipeline::{score_entity, score_slate};
