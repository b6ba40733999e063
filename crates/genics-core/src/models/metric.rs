use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Biometric sub-metric types.
///
/// Closed set plus an explicit `Unknown` fallback carrying the unrecognized
/// raw name, so string-keyed inputs from acquisition layers never panic and
/// the fallback path stays visible in breakdowns and logs.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum MetricType {
    /// Hours slept last night. Bell-curve scored around an optimum.
    Sleep,
    /// Wearable recovery/readiness score, already 0–100.
    RecoveryScore,
    /// Hydration level percentage.
    HydrationLevel,
    /// Stress proxy; lower raw readings score higher.
    CortisolProxy,
    /// Testosterone proxy (ng/dL band).
    TestosteroneProxy,
    /// Recent on-field performance index, 0–100.
    PerformanceIndex,
    /// Days of outstanding recovery (injury rest). Decay scored.
    RecoveryDays,
    /// Unrecognized metric name from an upstream feed.
    Unknown(String),
}

impl MetricType {
    /// Canonical snake_case name, the inverse of the `From<String>` parse.
    pub fn name(&self) -> &str {
        match self {
            Self::Sleep => "sleep",
            Self::RecoveryScore => "recovery_score",
            Self::HydrationLevel => "hydration_level",
            Self::CortisolProxy => "cortisol_proxy",
            Self::TestosteroneProxy => "testosterone_proxy",
            Self::PerformanceIndex => "performance_index",
            Self::RecoveryDays => "recovery_days",
            Self::Unknown(name) => name,
        }
    }
}

impl From<String> for MetricType {
    fn from(s: String) -> Self {
        match s.as_str() {
            "sleep" => Self::Sleep,
            "recovery_score" => Self::RecoveryScore,
            "hydration_level" => Self::HydrationLevel,
            "cortisol_proxy" => Self::CortisolProxy,
            "testosterone_proxy" => Self::TestosteroneProxy,
            "performance_index" => Self::PerformanceIndex,
            "recovery_days" => Self::RecoveryDays,
            _ => Self::Unknown(s),
        }
    }
}

impl From<MetricType> for String {
    fn from(m: MetricType) -> Self {
        m.name().to_string()
    }
}

impl fmt::Display for MetricType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Valid range and optimum for one metric type. Immutable process-wide
/// configuration owned by the normalizer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricRange {
    pub min: f64,
    pub max: f64,
    pub optimal: f64,
}

impl MetricRange {
    pub fn new(min: f64, max: f64, optimal: f64) -> Self {
        Self { min, max, optimal }
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }
}

/// One metric's contribution to a composite score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricContribution {
    /// Normalized sub-score, 0–100.
    pub value: f64,
    /// Configured weight for this metric.
    pub weight: f64,
    /// `value × weight`, before re-normalization.
    pub contribution: f64,
}

/// Weighted aggregate of normalized sub-metrics.
///
/// `value` is computed only over metrics actually present; `confidence`
/// reports data completeness (present / expected × 100) so downstream
/// consumers can discount sparse-data scores.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompositeScore {
    /// Weighted aggregate, 0–100.
    pub value: f64,
    /// Data-completeness confidence, 0–100.
    pub confidence: f64,
    /// Per-metric breakdown of what went into `value`.
    pub breakdown: BTreeMap<MetricType, MetricContribution>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metric_type_round_trips_through_name() {
        for name in [
            "sleep",
            "recovery_score",
            "hydration_level",
            "cortisol_proxy",
            "testosterone_proxy",
            "performance_index",
            "recovery_days",
        ] {
            let m = MetricType::from(name.to_string());
            assert!(!matches!(m, MetricType::Unknown(_)), "{name} parsed as Unknown");
            assert_eq!(m.name(), name);
        }
    }

    #[test]
    fn unrecognized_name_becomes_unknown() {
        let m = MetricType::from("banana_intake".to_string());
        assert_eq!(m, MetricType::Unknown("banana_intake".to_string()));
        assert_eq!(m.name(), "banana_intake");
    }

    #[test]
    fn metric_map_keys_serialize_as_plain_strings() {
        let readings = BTreeMap::from([
            (MetricType::Sleep, 7.5),
            (MetricType::Unknown("banana_intake".to_string()), 3.0),
        ]);
        let json = serde_json::to_string(&readings).unwrap();
        assert!(json.contains(r#""sleep":7.5"#));
        assert!(json.contains(r#""banana_intake":3.0"#));

        let back: BTreeMap<MetricType, f64> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, readings);
    }
}
