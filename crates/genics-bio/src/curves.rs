//! Per-metric-type normalization curves. Each is a pure function from a raw
//! reading and its configured range to a 0–100 sub-score.

use genics_core::models::MetricRange;

/// Linear rescale from `[min, max]` to `[0, 100]`, clamped.
pub fn linear(value: f64, range: MetricRange) -> f64 {
    let span = range.span();
    if span <= 0.0 {
        return 50.0;
    }
    ((value - range.min) / span * 100.0).clamp(0.0, 100.0)
}

/// Inverted linear rescale: lower raw value ⇒ higher score.
///
/// Used for stress proxies where elevated readings are the bad direction.
pub fn inverted(value: f64, range: MetricRange) -> f64 {
    let span = range.span();
    if span <= 0.0 {
        return 50.0;
    }
    ((range.max - value) / span * 100.0).clamp(0.0, 100.0)
}

/// Bell-curve score around the optimum.
///
/// Formula: `100 − |value − optimal| × penalty_per_unit`, floored at 0.
/// Values at/above the range max score exactly `overshoot_cap`: overshooting
/// is non-optimal but not as bad as the distance penalty alone would say.
/// Non-positive input floors at 0.
pub fn bell(value: f64, range: MetricRange, penalty_per_unit: f64, overshoot_cap: f64) -> f64 {
    if value <= 0.0 {
        return 0.0;
    }
    if value >= range.max {
        return overshoot_cap;
    }
    (100.0 - (value - range.optimal).abs() * penalty_per_unit).max(0.0)
}

/// Decay score for counts of outstanding bad days.
///
/// Formula: `100 − value × per_day_penalty`, clamped to [0, 100].
/// ≤ 0 days ⇒ 100; at/past the point the penalty exhausts the scale ⇒ 0.
pub fn decay(value: f64, per_day_penalty: f64) -> f64 {
    if value <= 0.0 {
        return 100.0;
    }
    (100.0 - value * per_day_penalty).clamp(0.0, 100.0)
}

/// Fallback for unknown metric types: clamp the raw value into [0, 100].
pub fn clamp_raw(value: f64) -> f64 {
    value.clamp(0.0, 100.0)
}
