//! End-to-end entity scoring: raw readings and identity strings in, fused
//! probability out. Slate scoring is embarrassingly parallel and isolates
//! per-entity failures so one malformed record never aborts the batch.

use chrono::NaiveDate;
use rayon::prelude::*;
use tracing::{debug, info};

use genics_core::config::GenicsConfig;
use genics_core::errors::ScoreResult;
use genics_core::models::{EntityInput, EntityScore};

use crate::engine::FusionEngine;

/// Score one entity for one event date.
pub fn score_entity(
    input: &EntityInput,
    event_date: NaiveDate,
    config: &GenicsConfig,
) -> ScoreResult<EntityScore> {
    let composite = genics_bio::score_readings(&input.metrics, &config.bio)?;

    let cipher = genics_juju::cipher_of(&input.name);
    // Alignment runs over the combined identity: name + team + position.
    let composite_cipher = genics_juju::composite_cipher(&input.name, &input.team, &input.position);
    let numerology = genics_juju::numerology_of(event_date)?;
    let features = genics_juju::alignment_of(&composite_cipher, &numerology, &config.juju);
    let birthday = match input.birth_date {
        Some(birth) => genics_juju::birthday_alignment(birth, event_date),
        None => genics_core::models::BirthdayAlignment::none(),
    };
    let gas = genics_juju::gas_of(&features, &birthday, &config.juju);

    let engine = FusionEngine::new(config.fusion.clone());
    let baseline = engine.baseline_from_composite(composite.value);
    let fusion = engine.fuse(baseline, gas, &features, &birthday)?;

    debug!(
        entity = %input.entity_id,
        composite = composite.value,
        gas,
        final_probability = %fusion.final_probability,
        band = %fusion.band,
        "scored entity"
    );

    Ok(EntityScore {
        entity_id: input.entity_id.clone(),
        composite,
        cipher,
        composite_cipher,
        numerology,
        features,
        birthday,
        gas,
        fusion,
    })
}

/// Score a whole slate in parallel.
///
/// Results come back per entity; a failure for one entity is reported in its
/// slot and does not affect any other. No ordering guarantee beyond input
/// order is needed, so the output preserves it.
pub fn score_slate(
    inputs: &[EntityInput],
    event_date: NaiveDate,
    config: &GenicsConfig,
) -> Vec<(String, ScoreResult<EntityScore>)> {
    let results: Vec<_> = inputs
        .par_iter()
        .map(|input| {
            (
                input.entity_id.clone(),
                score_entity(input, event_date, config),
            )
        })
        .collect();

    let failures = results.iter().filter(|(_, r)| r.is_err()).count();
    info!(
        entities = inputs.len(),
        failures,
        %event_date,
        "scored slate"
    );

    results
}
