//! Named default constants for every tunable in the pipeline.
//!
//! The ritual-number set, fusion weights, clamp bounds, and band thresholds
//! are empirically chosen, not derived; they live here as overridable config
//! defaults and are validated by the property tests, not treated as ground
//! truth.

// ── Biometric normalization ──────────────────────────────────────────────

/// Neutral midpoint returned when no sub-metric is present at all.
pub const NEUTRAL_COMPOSITE: f64 = 50.0;

/// Points lost per hour of sleep away from the optimum.
pub const SLEEP_PENALTY_PER_HOUR: f64 = 15.0;

/// Cap applied at/above the sleep range max. Oversleeping is non-optimal,
/// so "too much" never scores 100.
pub const SLEEP_OVERSHOOT_CAP: f64 = 85.0;

/// Points lost per outstanding recovery day.
pub const RECOVERY_DAY_PENALTY: f64 = 25.0;

// ── Alignment (juju) ─────────────────────────────────────────────────────

/// Ritual numbers the cipher values are measured against.
pub const RITUAL_NUMBERS: [u32; 5] = [7, 11, 13, 22, 33];

/// Proximity at which ritual strength bottoms out at 0.0.
pub const RITUAL_BAND: f64 = 10.0;

/// GAS weight on ritual strength.
pub const GAS_RITUAL_WEIGHT: f64 = 0.5;
/// GAS weight on an exact cipher/date match.
pub const GAS_EXACT_WEIGHT: f64 = 0.3;
/// GAS weight on the birthday term.
pub const GAS_BIRTHDAY_WEIGHT: f64 = 0.2;

// ── Probability fusion ───────────────────────────────────────────────────

/// Baseline probability clamp: floor. Keeps the composite→probability
/// mapping away from degenerate certainty.
pub const BASELINE_FLOOR: f64 = 0.1;
/// Baseline probability clamp: ceiling.
pub const BASELINE_CEILING: f64 = 0.9;

/// Probabilities are clamped to [ε, 1−ε] before logit.
pub const LOGIT_EPSILON: f64 = 1.0e-4;

/// Log-odds weight on the aggregate alignment score (a).
pub const FUSION_GAS_WEIGHT: f64 = 0.8;
/// Log-odds weight on ritual strength (b).
pub const FUSION_RITUAL_WEIGHT: f64 = 0.4;
/// Log-odds weight on the birthday term (c).
pub const FUSION_BIRTHDAY_WEIGHT: f64 = 0.2;

/// |p − 0.5| at or above this → High band.
pub const BAND_HIGH_THRESHOLD: f64 = 0.15;
/// |p − 0.5| at or above this → Medium band.
pub const BAND_MEDIUM_THRESHOLD: f64 = 0.08;

// ── Alerts ───────────────────────────────────────────────────────────────

/// Composite-score delta that triggers a spike/dip alert.
pub const SPIKE_THRESHOLD: f64 = 15.0;

/// Prior readings older than this are outside the comparison window.
pub const ALERT_WINDOW_HOURS: i64 = 24;
