use serde::{Deserialize, Serialize};

use super::defaults;

/// Probability fusion configuration.
///
/// The single place the composite→probability clamp bounds and the log-odds
/// influence weights live, so they are independently testable and tunable.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FusionConfig {
    /// Baseline probability floor when mapping composite/100.
    pub baseline_floor: f64,
    /// Baseline probability ceiling.
    pub baseline_ceiling: f64,
    /// Probabilities are clamped to [ε, 1−ε] before logit.
    pub logit_epsilon: f64,
    /// Log-odds weight on GAS (a).
    pub gas_weight: f64,
    /// Log-odds weight on ritual strength (b).
    pub ritual_weight: f64,
    /// Log-odds weight on the birthday term (c).
    pub birthday_weight: f64,
    /// |p − 0.5| ≥ this → High.
    pub band_high: f64,
    /// |p − 0.5| ≥ this → Medium.
    pub band_medium: f64,
}

impl Default for FusionConfig {
    fn default() -> Self {
        Self {
            baseline_floor: defaults::BASELINE_FLOOR,
            baseline_ceiling: defaults::BASELINE_CEILING,
            logit_epsilon: defaults::LOGIT_EPSILON,
            gas_weight: defaults::FUSION_GAS_WEIGHT,
            ritual_weight: defaults::FUSION_RITUAL_WEIGHT,
            birthday_weight: defaults::FUSION_BIRTHDAY_WEIGHT,
            band_high: defaults::BAND_HIGH_THRESHOLD,
            band_medium: defaults::BAND_MEDIUM_THRESHOLD,
        }
    }
}
