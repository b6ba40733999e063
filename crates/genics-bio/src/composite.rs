//! Weighted composite aggregation.
//!
//! ```text
//! value      = Σ (scoreᵢ × weightᵢ) / Σ weightᵢ      over present metrics
//! confidence = present / expected × 100
//! ```
//!
//! Re-normalizing by the weight mass actually used avoids penalizing
//! sparse-data entities in the score itself; the reduced `confidence` is how
//! missing data shows up.

use std::collections::BTreeMap;

use genics_core::config::BioConfig;
use genics_core::errors::{ScoreError, ScoreResult};
use genics_core::models::{CompositeScore, MetricContribution, MetricType};

use crate::normalize;

/// Aggregate already-normalized sub-scores into a composite score.
///
/// Only metrics present in both the input map and the weight table count.
/// An empty intersection yields the neutral midpoint with confidence 0.
pub fn aggregate(
    scores: &BTreeMap<MetricType, f64>,
    config: &BioConfig,
) -> ScoreResult<CompositeScore> {
    if config.weights.is_empty() {
        return Err(ScoreError::EmptyWeights);
    }

    let mut weighted_sum = 0.0;
    let mut weight_used = 0.0;
    let mut breakdown = BTreeMap::new();

    for (metric, &weight) in &config.weights {
        let Some(&score) = scores.get(metric) else {
            continue;
        };
        if !score.is_finite() {
            return Err(ScoreError::NonFiniteInput {
                field: metric.name().to_string(),
                value: score,
            });
        }
        let contribution = score * weight;
        weighted_sum += contribution;
        weight_used += weight;
        breakdown.insert(
            metric.clone(),
            MetricContribution {
                value: score,
                weight,
                contribution,
            },
        );
    }

    let expected = config.expected_metrics();
    let present = breakdown.len();
    let confidence = present as f64 / expected as f64 * 100.0;

    let value = if weight_used > 0.0 {
        (weighted_sum / weight_used).clamp(0.0, 100.0)
    } else {
        config.neutral_midpoint
    };

    Ok(CompositeScore {
        value,
        confidence,
        breakdown,
    })
}

/// Normalize raw readings, then aggregate: the full biometric half of the
/// pipeline in one call.
pub fn score_readings(
    readings: &BTreeMap<MetricType, f64>,
    config: &BioConfig,
) -> ScoreResult<CompositeScore> {
    let mut normalized = BTreeMap::new();
    for (metric, &raw) in readings {
        let score = normalize::normalize(raw, metric, config)?;
        normalized.insert(metric.clone(), score);
    }
    aggregate(&normalized, config)
}
