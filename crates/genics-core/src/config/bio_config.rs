use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::defaults;
use crate::models::{MetricRange, MetricType};

/// Biometric normalization and aggregation configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BioConfig {
    /// Valid range and optimum per metric type.
    pub ranges: BTreeMap<MetricType, MetricRange>,
    /// Composite weight per metric type. Weights need not sum to 1; the
    /// aggregator re-normalizes over the metrics actually present.
    pub weights: BTreeMap<MetricType, f64>,
    /// Points lost per hour of sleep away from the optimum.
    pub sleep_penalty_per_hour: f64,
    /// Score cap at/above the sleep range max.
    pub sleep_overshoot_cap: f64,
    /// Points lost per outstanding recovery day.
    pub recovery_day_penalty: f64,
    /// Composite value when no metric is present (confidence 0).
    pub neutral_midpoint: f64,
}

impl BioConfig {
    /// Range lookup for one metric type, `None` for unknown types.
    pub fn range(&self, metric: &MetricType) -> Option<MetricRange> {
        self.ranges.get(metric).copied()
    }

    /// Number of metrics the confidence denominator expects.
    pub fn expected_metrics(&self) -> usize {
        self.weights.len()
    }
}

impl Default for BioConfig {
    fn default() -> Self {
        Self {
            ranges: default_ranges(),
            weights: default_weights(),
            sleep_penalty_per_hour: defaults::SLEEP_PENALTY_PER_HOUR,
            sleep_overshoot_cap: defaults::SLEEP_OVERSHOOT_CAP,
            recovery_day_penalty: defaults::RECOVERY_DAY_PENALTY,
            neutral_midpoint: defaults::NEUTRAL_COMPOSITE,
        }
    }
}

fn default_ranges() -> BTreeMap<MetricType, MetricRange> {
    BTreeMap::from([
        (MetricType::Sleep, MetricRange::new(4.0, 10.0, 7.5)),
        (MetricType::RecoveryScore, MetricRange::new(0.0, 100.0, 100.0)),
        (MetricType::HydrationLevel, MetricRange::new(0.0, 100.0, 100.0)),
        (MetricType::CortisolProxy, MetricRange::new(5.0, 25.0, 5.0)),
        (
            MetricType::TestosteroneProxy,
            MetricRange::new(300.0, 1100.0, 1100.0),
        ),
        (
            MetricType::PerformanceIndex,
            MetricRange::new(0.0, 100.0, 100.0),
        ),
        (MetricType::RecoveryDays, MetricRange::new(0.0, 4.0, 0.0)),
    ])
}

fn default_weights() -> BTreeMap<MetricType, f64> {
    // Six expected metrics: three present → 50% confidence.
    BTreeMap::from([
        (MetricType::Sleep, 0.25),
        (MetricType::RecoveryScore, 0.20),
        (MetricType::HydrationLevel, 0.15),
        (MetricType::TestosteroneProxy, 0.15),
        (MetricType::CortisolProxy, 0.15),
        (MetricType::PerformanceIndex, 0.10),
    ])
}
