use serde::{Deserialize, Serialize};

use super::defaults;

/// Symbolic alignment (juju) configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct JujuConfig {
    /// The ritual-number set cipher values are measured against.
    pub ritual_numbers: Vec<u32>,
    /// Proximity at which ritual strength reaches 0.0.
    pub ritual_band: f64,
    /// GAS weight on ritual strength (w1).
    pub gas_ritual_weight: f64,
    /// GAS weight on an exact match (w2).
    pub gas_exact_weight: f64,
    /// GAS weight on the birthday term (w3).
    pub gas_birthday_weight: f64,
}

impl Default for JujuConfig {
    fn default() -> Self {
        Self {
            ritual_numbers: defaults::RITUAL_NUMBERS.to_vec(),
            ritual_band: defaults::RITUAL_BAND,
            gas_ritual_weight: defaults::GAS_RITUAL_WEIGHT,
            gas_exact_weight: defaults::GAS_EXACT_WEIGHT,
            gas_birthday_weight: defaults::GAS_BIRTHDAY_WEIGHT,
        }
    }
}
