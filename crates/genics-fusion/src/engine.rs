use genics_core::config::FusionConfig;
use genics_core::errors::{ScoreError, ScoreResult};
use genics_core::models::{AlignmentFeatures, BirthdayAlignment, ConfidenceBand, FusionResult};
use genics_core::probability::Probability;

use crate::math;

/// Birthday term fed into the log-odds sum: full weight on the anniversary
/// itself, half within a week, nothing otherwise.
fn birthday_term(birthday: &BirthdayAlignment) -> f64 {
    if birthday.exact {
        1.0
    } else if birthday.within_week {
        0.5
    } else {
        0.0
    }
}

/// Probability fusion engine.
///
/// ```text
/// z = logit(baseline) + a × GAS + b × ritualStrength + c × birthdayTerm
/// finalProbability = sigmoid(z)
/// edgeProbability  = finalProbability − baseline
/// ```
///
/// The weights a, b, c, the baseline clamp bounds, and the banding
/// thresholds all come from [`FusionConfig`]; nothing here is learned.
pub struct FusionEngine {
    config: FusionConfig,
}

impl FusionEngine {
    pub fn new(config: FusionConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &FusionConfig {
        &self.config
    }

    /// Map a 0–100 composite score to a baseline probability, clamped away
    /// from degenerate certainty.
    pub fn baseline_from_composite(&self, composite_value: f64) -> Probability {
        Probability::new(
            (composite_value / 100.0).clamp(self.config.baseline_floor, self.config.baseline_ceiling),
        )
    }

    /// Fuse the baseline probability with the alignment model.
    pub fn fuse(
        &self,
        baseline: Probability,
        gas: f64,
        features: &AlignmentFeatures,
        birthday: &BirthdayAlignment,
    ) -> ScoreResult<FusionResult> {
        if !gas.is_finite() {
            return Err(ScoreError::NonFiniteInput {
                field: "gas".to_string(),
                value: gas,
            });
        }
        if !features.ritual_strength.is_finite() {
            return Err(ScoreError::NonFiniteInput {
                field: "ritual_strength".to_string(),
                value: features.ritual_strength,
            });
        }

        let z = math::logit(baseline.value(), self.config.logit_epsilon)
            + self.config.gas_weight * gas
            + self.config.ritual_weight * features.ritual_strength
            + self.config.birthday_weight * birthday_term(birthday);

        let final_probability = Probability::new(math::sigmoid(z));
        let edge_probability = final_probability.value() - baseline.value();

        Ok(FusionResult {
            final_probability,
            edge_probability,
            band: self.band(final_probability),
            z,
        })
    }

    /// Discrete confidence label from distance to the 0.5 midpoint.
    pub fn band(&self, p: Probability) -> ConfidenceBand {
        let distance = p.distance_from_midpoint();
        if distance >= self.config.band_high {
            ConfidenceBand::High
        } else if distance >= self.config.band_medium {
            ConfidenceBand::Medium
        } else {
            ConfidenceBand::Low
        }
    }
}

impl Default for FusionEngine {
    fn default() -> Self {
        Self::new(FusionConfig::default())
    }
}
