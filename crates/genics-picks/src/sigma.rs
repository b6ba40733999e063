//! Stat-type sigma model.
//!
//! Standard deviation per stat type is the larger of a percentage of the
//! line and an absolute floor, scaled by the role archetype's volatility
//! multiplier. High-usage roles run tighter distributions.

use crate::types::{RoleArchetype, StatType};

/// (percent of line, absolute floor) per stat type.
fn sigma_rule(stat: StatType) -> (f64, f64) {
    match stat {
        StatType::ReceivingYards => (0.28, 9.0),
        StatType::Receptions => (0.38, 1.2),
        StatType::RushingYards => (0.30, 10.0),
        StatType::RushRecYards => (0.27, 12.0),
        StatType::PassingYards => (0.22, 18.0),
        StatType::PassingTds => (0.55, 0.6),
        StatType::RushingTds => (0.70, 0.5),
        StatType::FantasyPoints => (0.40, 4.0),
    }
}

/// Volatility multiplier per role archetype.
fn volatility(archetype: RoleArchetype) -> f64 {
    match archetype {
        RoleArchetype::AlphaWr => 0.9,
        RoleArchetype::SlotWr => 1.0,
        RoleArchetype::FieldStretcher => 1.2,
        RoleArchetype::Rb1 => 0.95,
        RoleArchetype::Rb2 => 1.1,
        RoleArchetype::PassRb => 1.05,
        RoleArchetype::Te1 => 1.05,
        RoleArchetype::Te2 => 1.25,
        RoleArchetype::Qb => 0.9,
        RoleArchetype::Other => 1.1,
    }
}

/// Standard deviation for one prop.
pub fn sigma_for(stat: StatType, line: f64, archetype: RoleArchetype) -> f64 {
    let (pct, floor) = sigma_rule(stat);
    (line * pct).max(floor) * volatility(archetype)
}
