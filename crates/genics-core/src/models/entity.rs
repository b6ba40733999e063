use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::alignment::{AlignmentFeatures, BirthdayAlignment};
use super::cipher::CipherSet;
use super::fusion_result::FusionResult;
use super::metric::{CompositeScore, MetricType};
use super::numerology::DateNumerology;

/// One entity's point-in-time input to the scoring pipeline.
///
/// Supplied per call by acquisition layers; the core never stores these.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityInput {
    pub entity_id: String,
    /// Subject identity string (player name).
    pub name: String,
    /// Affiliation (team).
    pub team: String,
    /// Associated role (position).
    pub position: String,
    /// Birth date, when known, for birthday proximity.
    pub birth_date: Option<NaiveDate>,
    /// Raw metric readings keyed by type. Absent metrics are fine.
    pub metrics: BTreeMap<MetricType, f64>,
}

/// Full scoring output for one entity on one event date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityScore {
    pub entity_id: String,
    pub composite: CompositeScore,
    /// Cipher over the subject name alone.
    pub cipher: CipherSet,
    /// Cipher over name + team + position combined.
    pub composite_cipher: CipherSet,
    pub numerology: DateNumerology,
    pub features: AlignmentFeatures,
    pub birthday: BirthdayAlignment,
    /// Aggregate alignment score, [0, 1].
    pub gas: f64,
    pub fusion: FusionResult,
}
