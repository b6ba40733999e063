//! Expected value and fractional-Kelly staking.

use serde::{Deserialize, Serialize};

/// EV% caps: relative projection gaps beyond this are noise, not signal.
pub const EV_CAP: f64 = 60.0;

/// Default fraction of full Kelly to bet.
pub const DEFAULT_KELLY_FRACTION: f64 = 0.25;
/// Default cap on any single stake as a share of bankroll.
pub const DEFAULT_MAX_STAKE_PCT: f64 = 0.05;

/// EV as the relative gap between projection and line, in percent,
/// capped to ±[`EV_CAP`].
pub fn ev_percentage(line: f64, projection: f64) -> f64 {
    let denom = line.abs().max(1e-6);
    ((projection - line) / denom * 100.0).clamp(-EV_CAP, EV_CAP)
}

/// Fractional-Kelly stake recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KellyStake {
    /// Recommended stake in bankroll currency.
    pub stake: f64,
    /// Final stake as a fraction of bankroll, after fraction and cap.
    pub stake_fraction: f64,
    /// Uncapped full-Kelly fraction. Negative means no edge.
    pub full_kelly_fraction: f64,
    /// `p × odds − 1`, the raw edge.
    pub edge: f64,
}

/// Kelly criterion: `f = (b·p − q) / b` with `b = odds − 1`, scaled by
/// `kelly_fraction` and capped at `max_stake_pct` of bankroll. Negative-edge
/// picks always get a zero stake.
pub fn kelly_stake(
    win_probability: f64,
    decimal_odds: f64,
    bankroll: f64,
    kelly_fraction: f64,
    max_stake_pct: f64,
) -> KellyStake {
    let edge = win_probability * decimal_odds - 1.0;
    if bankroll <= 0.0 {
        return KellyStake {
            stake: 0.0,
            stake_fraction: 0.0,
            full_kelly_fraction: 0.0,
            edge,
        };
    }

    let b = decimal_odds - 1.0;
    let p = win_probability;
    let q = 1.0 - p;
    let full_kelly_fraction = if b <= 0.0 || p <= 0.0 {
        0.0
    } else {
        (b * p - q) / b
    };

    let stake_fraction = (full_kelly_fraction * kelly_fraction)
        .min(max_stake_pct)
        .max(0.0);

    KellyStake {
        stake: bankroll * stake_fraction,
        stake_fraction,
        full_kelly_fraction,
        edge,
    }
}
