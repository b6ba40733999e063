use serde::{Deserialize, Serialize};
use std::fmt;

/// Probability clamped to [0.0, 1.0].
///
/// Used for baseline and fused win probabilities. Construction clamps, so a
/// `Probability` can never hold an out-of-range value. Clamping does not catch
/// NaN; callers validate finiteness before constructing one.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Probability(f64);

impl Probability {
    /// The coin-flip midpoint confidence bands are measured from.
    pub const MIDPOINT: f64 = 0.5;

    /// Create a new Probability, clamping to [0.0, 1.0].
    pub fn new(value: f64) -> Self {
        Self(value.clamp(0.0, 1.0))
    }

    /// Get the raw f64 value.
    pub fn value(self) -> f64 {
        self.0
    }

    /// Absolute distance from the 0.5 midpoint, the input to confidence banding.
    pub fn distance_from_midpoint(self) -> f64 {
        (self.0 - Self::MIDPOINT).abs()
    }
}

impl Default for Probability {
    fn default() -> Self {
        Self(Self::MIDPOINT)
    }
}

impl fmt::Display for Probability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4}", self.0)
    }
}

impl From<f64> for Probability {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl From<Probability> for f64 {
    fn from(p: Probability) -> Self {
        p.0
    }
}
