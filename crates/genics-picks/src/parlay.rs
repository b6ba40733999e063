//! Parlay arithmetic: decimal-odds EV, joint win probability with a
//! correlation adjustment, and total slip odds per slip kind.

use serde::{Deserialize, Serialize};

use crate::slip::pair_correlation;
use crate::types::{GameScript, ScoredPick};

/// Floor/ceiling on the correlation-adjusted parlay probability.
pub const PARLAY_PROB_FLOOR: f64 = 0.001;
pub const PARLAY_PROB_CEILING: f64 = 0.999;

/// Lift per unit of average pairwise correlation.
const CORRELATION_LIFT: f64 = 0.1;
/// Per-leg odds haircut for teaser slips.
const TEASER_ODDS_FACTOR: f64 = 0.8;

/// How a slip's legs combine into one payout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlipKind {
    Single,
    Parlay,
    Teaser,
}

/// EV breakdown for one pick at decimal odds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OddsEv {
    /// Expected profit in stake currency.
    pub ev: f64,
    /// EV as a percentage of the stake (the ROI).
    pub ev_percentage: f64,
    /// `p × odds × stake`.
    pub expected_return: f64,
    /// `(1 − p) × stake`.
    pub expected_loss: f64,
}

/// Expected value of a pick at decimal odds.
///
/// A non-positive stake yields all-zero metrics rather than a division error.
pub fn odds_ev(decimal_odds: f64, win_probability: f64, stake: f64) -> OddsEv {
    if stake <= 0.0 {
        return OddsEv {
            ev: 0.0,
            ev_percentage: 0.0,
            expected_return: 0.0,
            expected_loss: 0.0,
        };
    }
    let expected_return = win_probability * decimal_odds * stake;
    let expected_loss = (1.0 - win_probability) * stake;
    let ev = expected_return - stake;
    OddsEv {
        ev,
        ev_percentage: ev / stake * 100.0,
        expected_return,
        expected_loss,
    }
}

/// Joint win probability of independent legs: the plain product.
pub fn parlay_probability(legs: &[f64]) -> f64 {
    legs.iter().product()
}

/// Joint win probability adjusted for how the legs move together.
///
/// Positive average correlation lifts the independent product (correlated
/// legs tend to hit as a group), negative depresses it; the result is
/// clamped to [[`PARLAY_PROB_FLOOR`], [`PARLAY_PROB_CEILING`]].
pub fn correlated_parlay_probability(legs: &[f64], avg_correlation: f64) -> f64 {
    (parlay_probability(legs) * (1.0 + avg_correlation * CORRELATION_LIFT))
        .clamp(PARLAY_PROB_FLOOR, PARLAY_PROB_CEILING)
}

/// Joint win probability for a slip of evaluated picks.
///
/// The correlation adjustment uses the mean pairwise prior under the given
/// game script; slips of fewer than two picks have no pairs and fall back
/// to the independent product.
pub fn slip_parlay_probability(picks: &[ScoredPick], script: GameScript) -> f64 {
    let legs: Vec<f64> = picks.iter().map(|p| p.win_probability).collect();

    let mut corr_total = 0.0;
    let mut pairs = 0usize;
    for i in 0..picks.len() {
        for j in i + 1..picks.len() {
            corr_total += pair_correlation(
                picks[i].pick.stat_type,
                picks[j].pick.stat_type,
                script,
            );
            pairs += 1;
        }
    }

    if pairs == 0 {
        return parlay_probability(&legs);
    }
    correlated_parlay_probability(&legs, corr_total / pairs as f64)
}

/// Total decimal odds for a slip.
///
/// Singles pay the first leg's odds; parlays multiply the legs; teasers
/// multiply legs discounted by 0.8 each. An empty slip has even odds.
pub fn total_odds(leg_odds: &[f64], kind: SlipKind) -> f64 {
    match kind {
        SlipKind::Single => leg_odds.first().copied().unwrap_or(1.0),
        SlipKind::Parlay => leg_odds.iter().product(),
        SlipKind::Teaser => leg_odds.iter().map(|o| o * TEASER_ODDS_FACTOR).product(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slip::score_pick;
    use crate::types::{PropPick, RoleArchetype, StatType};

    #[test]
    fn odds_ev_at_minus_110() {
        // p = 0.55 at 1.91: return 1.0505, EV +0.0505, ~5.05% ROI.
        let ev = odds_ev(1.91, 0.55, 1.0);
        assert!((ev.expected_return - 1.0505).abs() < 1e-9);
        assert!((ev.ev - 0.0505).abs() < 1e-9);
        assert!((ev.ev_percentage - 5.05).abs() < 1e-9);
        assert!((ev.expected_loss - 0.45).abs() < 1e-9);
    }

    #[test]
    fn odds_ev_scales_with_stake() {
        let unit = odds_ev(2.0, 0.6, 1.0);
        let fifty = odds_ev(2.0, 0.6, 50.0);
        assert!((fifty.ev - unit.ev * 50.0).abs() < 1e-9);
        // ROI is stake-invariant.
        assert!((fifty.ev_percentage - unit.ev_percentage).abs() < 1e-9);
    }

    #[test]
    fn zero_stake_is_all_zeros() {
        assert_eq!(odds_ev(1.91, 0.55, 0.0), odds_ev(1.91, 0.55, -5.0));
        assert_eq!(odds_ev(1.91, 0.55, 0.0).ev_percentage, 0.0);
    }

    #[test]
    fn independent_parlay_is_the_product() {
        assert!((parlay_probability(&[0.6, 0.5, 0.5]) - 0.15).abs() < 1e-12);
        assert_eq!(parlay_probability(&[]), 1.0);
    }

    #[test]
    fn positive_correlation_lifts_the_parlay() {
        let legs = [0.6, 0.6];
        let independent = parlay_probability(&legs);
        let lifted = correlated_parlay_probability(&legs, 0.45);
        assert!(lifted > independent);
        assert!((lifted - independent * 1.045).abs() < 1e-12);

        let depressed = correlated_parlay_probability(&legs, -0.2);
        assert!(depressed < independent);
    }

    #[test]
    fn adjusted_probability_stays_clamped() {
        assert_eq!(correlated_parlay_probability(&[1.0, 1.0], 1.0), 0.999);
        assert_eq!(correlated_parlay_probability(&[1e-6, 1e-6], 0.0), 0.001);
    }

    #[test]
    fn correlated_stack_beats_the_independent_product() {
        let pick = |stat, line, projection, archetype| {
            score_pick(PropPick {
                player: "Stack Leg".to_string(),
                team: "BUF".to_string(),
                opponent: "MIA".to_string(),
                stat_type: stat,
                line,
                projection,
                archetype,
                script: GameScript::Shootout,
            })
        };
        let picks = vec![
            pick(StatType::PassingYards, 250.5, 300.0, RoleArchetype::Qb),
            pick(StatType::ReceivingYards, 70.5, 74.0, RoleArchetype::FieldStretcher),
        ];

        let joint = slip_parlay_probability(&picks, GameScript::Shootout);
        let independent =
            parlay_probability(&[picks[0].win_probability, picks[1].win_probability]);
        // Passing↔receiving carries a 0.45 prior in a shootout.
        assert!(joint > independent);

        // A single leg has no pairs and is just its own probability.
        let solo = slip_parlay_probability(&picks[..1], GameScript::Shootout);
        assert!((solo - picks[0].win_probability).abs() < 1e-12);
    }

    #[test]
    fn parlay_total_odds_multiply() {
        let legs = [1.91, 1.91, 2.0];
        assert!((total_odds(&legs, SlipKind::Parlay) - 1.91 * 1.91 * 2.0).abs() < 1e-9);
        assert_eq!(total_odds(&legs, SlipKind::Single), 1.91);
        assert!((total_odds(&legs, SlipKind::Teaser)
            - (1.91 * 0.8) * (1.91 * 0.8) * (2.0 * 0.8))
            .abs() < 1e-9);
        assert_eq!(total_odds(&[], SlipKind::Single), 1.0);
        assert_eq!(total_odds(&[], SlipKind::Parlay), 1.0);
    }
}
