//! # genics-alerts
//!
//! Threshold monitor over composite scores. The monitor never looks up
//! history itself — the caller supplies the prior reading — so the scoring
//! core stays stateless and parallelizable; the only state here is the
//! one-shot dedup set and the per-entity alert history this instance raised.

pub mod monitor;

pub use monitor::{PriorScore, ThresholdMonitor};
