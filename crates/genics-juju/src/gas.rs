//! Aggregate alignment score (GAS).
//!
//! ```text
//! GAS = w1 × ritualStrength
//!     + w2 × exactMatch
//!     + w3 × (bdayWeek × 0.7 + bdayExact × 0.3)
//! ```
//!
//! Clamped to [0.0, 1.0]. Exact matches and ritual hits dominate by
//! configuration; birthday proximity is a secondary signal.

use genics_core::config::JujuConfig;
use genics_core::models::{AlignmentFeatures, BirthdayAlignment};

/// Weight of the within-a-week component of the birthday term.
const BDAY_WEEK_SHARE: f64 = 0.7;
/// Additional share when the event lands on the anniversary itself.
const BDAY_EXACT_SHARE: f64 = 0.3;

/// Reduce alignment features to one bounded score in [0, 1].
pub fn gas_of(
    features: &AlignmentFeatures,
    birthday: &BirthdayAlignment,
    config: &JujuConfig,
) -> f64 {
    let exact_term = if features.exact_match { 1.0 } else { 0.0 };
    let mut bday_term = 0.0;
    if birthday.within_week {
        bday_term += BDAY_WEEK_SHARE;
    }
    if birthday.exact {
        bday_term += BDAY_EXACT_SHARE;
    }

    let gas = config.gas_ritual_weight * features.ritual_strength
        + config.gas_exact_weight * exact_term
        + config.gas_birthday_weight * bday_term;

    gas.clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn features(exact: bool, strength: f64) -> AlignmentFeatures {
        AlignmentFeatures {
            exact_match: exact,
            ritual_proximity: 0,
            ritual_hit: strength >= 1.0,
            ritual_strength: strength,
        }
    }

    fn birthday(exact: bool, within_week: bool) -> BirthdayAlignment {
        BirthdayAlignment {
            exact,
            within_week,
            diff_days: if exact { 0 } else if within_week { 3 } else { 200 },
        }
    }

    #[test]
    fn everything_aligned_saturates() {
        let config = JujuConfig::default();
        let gas = gas_of(&features(true, 1.0), &birthday(true, true), &config);
        assert_eq!(gas, 1.0);
    }

    #[test]
    fn nothing_aligned_is_zero() {
        let config = JujuConfig::default();
        let gas = gas_of(&features(false, 0.0), &BirthdayAlignment::none(), &config);
        assert_eq!(gas, 0.0);
    }

    #[test]
    fn exact_birthday_outweighs_week_only() {
        let config = JujuConfig::default();
        let week = gas_of(&features(false, 0.0), &birthday(false, true), &config);
        let exact = gas_of(&features(false, 0.0), &birthday(true, true), &config);
        assert!(exact > week);
    }

    #[test]
    fn bounded() {
        let config = JujuConfig::default();
        for strength in [0.0, 0.25, 0.5, 1.0] {
            for exact in [false, true] {
                let gas = gas_of(&features(exact, strength), &birthday(true, true), &config);
                assert!((0.0..=1.0).contains(&gas), "gas out of range: {gas}");
            }
        }
    }
}
