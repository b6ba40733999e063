use serde::{Deserialize, Serialize};
use std::fmt;

use crate::probability::Probability;

/// Discrete confidence label from a probability's distance to 0.5.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConfidenceBand {
    High,
    Medium,
    Low,
}

impl fmt::Display for ConfidenceBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        };
        f.write_str(s)
    }
}

/// Output of the probability fusion engine.
///
/// Invariant: `final_probability == sigmoid(z)` and
/// `edge_probability == final_probability − baseline`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FusionResult {
    /// Fused win/rank probability, strictly inside (0, 1).
    pub final_probability: Probability,
    /// Delta over the composite-only baseline. Signed.
    pub edge_probability: f64,
    /// Discrete confidence label.
    pub band: ConfidenceBand,
    /// The summed log-odds the final probability was mapped from.
    pub z: f64,
}
