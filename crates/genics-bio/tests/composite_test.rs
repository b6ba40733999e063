use std::collections::BTreeMap;

use genics_bio::{normalize, score_readings};
use genics_core::config::BioConfig;
use genics_core::models::MetricType;

// ── Sleep bell curve ─────────────────────────────────────────────────────

#[test]
fn sleep_peaks_at_optimum_and_falls_by_one_penalty_unit() {
    let config = BioConfig::default();
    let optimal = config.range(&MetricType::Sleep).unwrap().optimal;

    let at_optimum = normalize(optimal, &MetricType::Sleep, &config).unwrap();
    assert_eq!(at_optimum, 100.0);

    let under = normalize(optimal - 1.0, &MetricType::Sleep, &config).unwrap();
    let over = normalize(optimal + 1.0, &MetricType::Sleep, &config).unwrap();
    assert!(under < 100.0);
    assert!(over < 100.0);
    assert_eq!(under, 100.0 - config.sleep_penalty_per_hour);
    assert_eq!(over, 100.0 - config.sleep_penalty_per_hour);
}

#[test]
fn oversleeping_floors_at_the_cap() {
    let config = BioConfig::default();
    let max = config.range(&MetricType::Sleep).unwrap().max;
    for hours in [max, max + 1.0, max + 5.0] {
        let score = normalize(hours, &MetricType::Sleep, &config).unwrap();
        assert_eq!(
            score, config.sleep_overshoot_cap,
            "{hours}h slept scored {score}"
        );
    }
}

// ── End-to-end raw readings → composite ──────────────────────────────────

#[test]
fn raw_readings_flow_through_to_composite() {
    let config = BioConfig::default();
    let readings = BTreeMap::from([
        (MetricType::Sleep, 7.5),          // 100
        (MetricType::RecoveryScore, 85.0), // 85
        (MetricType::CortisolProxy, 25.0), // 0 (worst stress reading)
    ]);
    let composite = score_readings(&readings, &config).unwrap();

    let expected = (100.0 * 0.25 + 85.0 * 0.20 + 0.0 * 0.15) / (0.25 + 0.20 + 0.15);
    assert!((composite.value - expected).abs() < 1e-9);
    assert_eq!(composite.confidence, 50.0);

    let sleep = &composite.breakdown[&MetricType::Sleep];
    assert_eq!(sleep.value, 100.0);
    assert_eq!(sleep.weight, 0.25);
    assert_eq!(sleep.contribution, 25.0);
}

#[test]
fn unknown_reading_degrades_instead_of_failing() {
    let config = BioConfig::default();
    let readings = BTreeMap::from([
        (MetricType::Sleep, 7.5),
        (MetricType::Unknown("banana_intake".to_string()), 140.0),
    ]);
    // Unknown metric normalizes (clamped) but carries no composite weight.
    let composite = score_readings(&readings, &config).unwrap();
    assert_eq!(composite.value, 100.0);
    assert_eq!(composite.breakdown.len(), 1);
}
