//! # genics-picks
//!
//! Prop-pick evaluation on top of the scoring core: a per-stat-type sigma
//! model, Normal-model win probabilities, EV and fractional-Kelly staking,
//! role classification, correlation priors, parlay arithmetic, and 3-pick
//! slip grading.

pub mod ev;
pub mod parlay;
pub mod sigma;
pub mod slip;
pub mod types;
pub mod winprob;

pub use ev::{ev_percentage, kelly_stake, KellyStake};
pub use parlay::{
    correlated_parlay_probability, odds_ev, parlay_probability, slip_parlay_probability,
    total_odds, OddsEv, SlipKind,
};
pub use sigma::sigma_for;
pub use slip::{classify_role, pair_correlation, score_pick, slip_quality, SlipQuality};
pub use types::{Direction, GameScript, PropPick, RoleArchetype, RoleTag, ScoredPick, SlipGrade, StatType};
pub use winprob::{normal_cdf, win_probability};
