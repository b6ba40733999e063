use genics_core::config::BioConfig;
use genics_core::errors::{ScoreError, ScoreResult};
use genics_core::models::MetricType;
use tracing::warn;

use crate::curves;

/// Normalize one raw metric reading to a 0–100 sub-score.
///
/// Pure function of the inputs and the fixed range table. Unknown metric
/// types (and known types with no configured range) fall back to clamping
/// the raw value into [0, 100], logged at warning level; only non-finite
/// input is an error.
pub fn normalize(value: f64, metric: &MetricType, config: &BioConfig) -> ScoreResult<f64> {
    if !value.is_finite() {
        return Err(ScoreError::NonFiniteInput {
            field: metric.name().to_string(),
            value,
        });
    }

    if let MetricType::Unknown(name) = metric {
        warn!(metric = %name, value, "unknown metric type, clamping raw value");
        return Ok(curves::clamp_raw(value));
    }

    let Some(range) = config.range(metric) else {
        warn!(metric = %metric, value, "no configured range, clamping raw value");
        return Ok(curves::clamp_raw(value));
    };

    let score = match metric {
        MetricType::Sleep => curves::bell(
            value,
            range,
            config.sleep_penalty_per_hour,
            config.sleep_overshoot_cap,
        ),
        MetricType::CortisolProxy => curves::inverted(value, range),
        MetricType::RecoveryDays => curves::decay(value, config.recovery_day_penalty),
        MetricType::RecoveryScore
        | MetricType::HydrationLevel
        | MetricType::TestosteroneProxy
        | MetricType::PerformanceIndex => curves::linear(value, range),
        MetricType::Unknown(_) => unreachable!("handled above"),
    };

    Ok(score)
}
