use serde::{Deserialize, Serialize};

/// Prop stat categories with sigma rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatType {
    ReceivingYards,
    Receptions,
    RushingYards,
    RushRecYards,
    PassingYards,
    PassingTds,
    RushingTds,
    FantasyPoints,
}

/// Usage/volatility archetypes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoleArchetype {
    AlphaWr,
    SlotWr,
    FieldStretcher,
    Rb1,
    Rb2,
    PassRb,
    Te1,
    Te2,
    Qb,
    Other,
}

/// Game script the correlation priors are keyed by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameScript {
    Shootout,
    Control,
    Neutral,
}

/// Over/Under recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Over,
    Under,
}

/// Slip-construction role a scored pick fills.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoleTag {
    /// Strong edge and probability; the slip is built around these.
    Anchor,
    /// Steady volume stat on a low-volatility archetype.
    LowVariance,
    /// Everything else; valuable through stacking correlation.
    Correlation,
}

/// Letter grade for a slip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SlipGrade {
    A,
    B,
    C,
}

/// One prop pick as supplied by the lines feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropPick {
    pub player: String,
    pub team: String,
    pub opponent: String,
    pub stat_type: StatType,
    pub line: f64,
    pub projection: f64,
    pub archetype: RoleArchetype,
    pub script: GameScript,
}

/// A pick with its computed evaluation attached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredPick {
    pub pick: PropPick,
    pub sigma: f64,
    pub direction: Direction,
    pub win_probability: f64,
    pub ev_percentage: f64,
    pub role: RoleTag,
}
