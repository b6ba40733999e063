pub mod alert_config;
pub mod bio_config;
pub mod defaults;
pub mod fusion_config;
pub mod juju_config;

pub use alert_config::AlertConfig;
pub use bio_config::BioConfig;
pub use fusion_config::FusionConfig;
pub use juju_config::JujuConfig;

use serde::{Deserialize, Serialize};

use crate::errors::{ScoreError, ScoreResult};

/// Top-level pipeline configuration.
///
/// Read-only after process start; every scoring function takes it by
/// reference, never as a mutable global.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GenicsConfig {
    pub bio: BioConfig,
    pub juju: JujuConfig,
    pub fusion: FusionConfig,
    pub alert: AlertConfig,
}

impl GenicsConfig {
    /// Parse a configuration from TOML, validating tunable invariants.
    pub fn from_toml_str(s: &str) -> ScoreResult<Self> {
        let config: Self = toml::from_str(s).map_err(|e| ScoreError::InvalidConfig {
            reason: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Check cross-field invariants the type system cannot express.
    pub fn validate(&self) -> ScoreResult<()> {
        if self.bio.weights.is_empty() {
            return Err(ScoreError::EmptyWeights);
        }
        if !(0.0 < self.fusion.baseline_floor
            && self.fusion.baseline_floor < self.fusion.baseline_ceiling
            && self.fusion.baseline_ceiling < 1.0)
        {
            return Err(ScoreError::InvalidConfig {
                reason: format!(
                    "baseline clamp bounds must satisfy 0 < floor < ceiling < 1, got {} / {}",
                    self.fusion.baseline_floor, self.fusion.baseline_ceiling
                ),
            });
        }
        if self.fusion.band_medium > self.fusion.band_high {
            return Err(ScoreError::InvalidConfig {
                reason: format!(
                    "band thresholds inverted: medium {} > high {}",
                    self.fusion.band_medium, self.fusion.band_high
                ),
            });
        }
        if self.juju.ritual_band <= 0.0 {
            return Err(ScoreError::InvalidConfig {
                reason: format!("ritual_band must be positive, got {}", self.juju.ritual_band),
            });
        }
        Ok(())
    }
}
