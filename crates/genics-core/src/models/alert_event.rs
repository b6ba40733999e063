use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Alert category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertKind {
    Spike,
    Dip,
    Milestone,
    Weather,
    Injury,
}

/// An immutable alert raised for one entity.
///
/// Created once by the threshold monitor (or by external collaborators for
/// the non-score kinds) and appended to the entity's history, never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlertEvent {
    pub id: uuid::Uuid,
    pub entity_id: String,
    pub kind: AlertKind,
    pub message: String,
    pub triggered_at: DateTime<Utc>,
}

impl AlertEvent {
    pub fn new(entity_id: impl Into<String>, kind: AlertKind, message: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4(),
            entity_id: entity_id.into(),
            kind,
            message: message.into(),
            triggered_at: Utc::now(),
        }
    }
}
