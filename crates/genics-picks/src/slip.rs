//! Pick scoring, role classification, correlation priors, and slip grading.

use serde::{Deserialize, Serialize};

use crate::ev::ev_percentage;
use crate::sigma::sigma_for;
use crate::types::{Direction, GameScript, PropPick, RoleTag, ScoredPick, SlipGrade, StatType};
use crate::winprob::win_probability;

/// Evaluate one pick: sigma, direction, win probability, EV, role.
pub fn score_pick(pick: PropPick) -> ScoredPick {
    let sigma = sigma_for(pick.stat_type, pick.line, pick.archetype);
    let direction = if pick.projection >= pick.line {
        Direction::Over
    } else {
        Direction::Under
    };
    let win_probability = win_probability(pick.line, pick.projection, sigma, direction);
    let ev_percentage = ev_percentage(pick.line, pick.projection);
    let role = classify_role(ev_percentage, win_probability, pick.stat_type, pick.archetype);

    ScoredPick {
        pick,
        sigma,
        direction,
        win_probability,
        ev_percentage,
        role,
    }
}

/// Slip-construction role for one evaluated pick.
pub fn classify_role(
    ev_pct: f64,
    win_prob: f64,
    stat: StatType,
    archetype: crate::types::RoleArchetype,
) -> RoleTag {
    use crate::types::RoleArchetype::{Rb1, SlotWr, Te1};

    if ev_pct >= 12.0 && win_prob >= 0.62 {
        return RoleTag::Anchor;
    }
    let volume_stat = matches!(
        stat,
        StatType::Receptions | StatType::RushingYards | StatType::ReceivingYards
    );
    if volume_stat && matches!(archetype, Te1 | Rb1 | SlotWr) && win_prob >= 0.58 {
        return RoleTag::LowVariance;
    }
    RoleTag::Correlation
}

/// Correlation prior for a pair of stat types within a game script.
///
/// Positive values tend to hit together; negative values oppose. The lookup
/// is symmetric in the stat pair and defaults to 0.0 for unlisted combos.
pub fn pair_correlation(a: StatType, b: StatType, script: GameScript) -> f64 {
    use GameScript::{Control, Neutral, Shootout};
    use StatType::{PassingYards, Receptions, ReceivingYards, RushRecYards, RushingYards};

    let prior = |a: StatType, b: StatType| -> Option<f64> {
        match (a, b, script) {
            (PassingYards, ReceivingYards, Shootout) => Some(0.45),
            (PassingYards, Receptions, Shootout) => Some(0.40),
            (PassingYards, ReceivingYards, Control) => Some(0.30),
            (RushingYards, PassingYards, Control) => Some(-0.10),
            (RushingYards, Receptions, Control) => Some(0.05),
            (RushRecYards, PassingYards, Shootout) => Some(0.25),
            (RushRecYards, ReceivingYards, Shootout) => Some(0.20),
            (Receptions, ReceivingYards, Neutral) => Some(0.35),
            (RushingYards, RushRecYards, Neutral) => Some(0.30),
            _ => None,
        }
    };

    prior(a, b).or_else(|| prior(b, a)).unwrap_or(0.0)
}

/// Aggregate quality metrics for one slip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlipQuality {
    pub anchors: usize,
    pub low_variance: usize,
    pub correlation_picks: usize,
    /// Sum of pairwise correlation priors.
    pub corr_sum: f64,
    pub avg_ev_pct: f64,
    pub avg_win_prob: f64,
    /// Heuristic 0–100-ish overall score used for ranking slips.
    pub overall_score: f64,
    pub grade: SlipGrade,
}

/// Grade a slip of evaluated picks.
///
/// An `A` needs all three roles represented, meaningful stacked
/// correlation, and a solid average win probability.
pub fn slip_quality(picks: &[ScoredPick], script: GameScript) -> SlipQuality {
    let anchors = picks.iter().filter(|p| p.role == RoleTag::Anchor).count();
    let low_variance = picks.iter().filter(|p| p.role == RoleTag::LowVariance).count();
    let correlation_picks = picks.iter().filter(|p| p.role == RoleTag::Correlation).count();
    let role_mix = [anchors, low_variance, correlation_picks]
        .iter()
        .filter(|&&n| n >= 1)
        .count();

    let mut corr_sum = 0.0;
    for i in 0..picks.len() {
        for j in i + 1..picks.len() {
            corr_sum += pair_correlation(
                picks[i].pick.stat_type,
                picks[j].pick.stat_type,
                script,
            );
        }
    }

    let n = picks.len().max(1) as f64;
    let avg_ev_pct = picks.iter().map(|p| p.ev_percentage).sum::<f64>() / n;
    let avg_win_prob = picks.iter().map(|p| p.win_probability).sum::<f64>() / n;

    let overall_score =
        0.4 * (avg_win_prob * 100.0) + 0.3 * (avg_ev_pct + 100.0) + 0.3 * (corr_sum * 100.0 / 3.0);

    let grade = if role_mix == 3 && corr_sum >= 0.35 && avg_win_prob >= 0.63 {
        SlipGrade::A
    } else if role_mix >= 2 && corr_sum >= 0.20 && avg_win_prob >= 0.60 {
        SlipGrade::B
    } else {
        SlipGrade::C
    };

    SlipQuality {
        anchors,
        low_variance,
        correlation_picks,
        corr_sum,
        avg_ev_pct,
        avg_win_prob,
        overall_score,
        grade,
    }
}
