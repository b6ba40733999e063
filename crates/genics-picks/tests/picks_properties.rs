use proptest::prelude::*;

use genics_picks::{
    correlated_parlay_probability, ev_percentage, kelly_stake, parlay_probability, score_pick,
    sigma_for, slip_quality, win_probability, Direction, GameScript, PropPick, RoleArchetype,
    RoleTag, SlipGrade, StatType,
};

fn any_stat() -> impl Strategy<Value = StatType> {
    prop_oneof![
        Just(StatType::ReceivingYards),
        Just(StatType::Receptions),
        Just(StatType::RushingYards),
        Just(StatType::RushRecYards),
        Just(StatType::PassingYards),
        Just(StatType::PassingTds),
        Just(StatType::RushingTds),
        Just(StatType::FantasyPoints),
    ]
}

fn any_archetype() -> impl Strategy<Value = RoleArchetype> {
    prop_oneof![
        Just(RoleArchetype::AlphaWr),
        Just(RoleArchetype::SlotWr),
        Just(RoleArchetype::FieldStretcher),
        Just(RoleArchetype::Rb1),
        Just(RoleArchetype::Rb2),
        Just(RoleArchetype::PassRb),
        Just(RoleArchetype::Te1),
        Just(RoleArchetype::Te2),
        Just(RoleArchetype::Qb),
        Just(RoleArchetype::Other),
    ]
}

fn any_script() -> impl Strategy<Value = GameScript> {
    prop_oneof![
        Just(GameScript::Shootout),
        Just(GameScript::Control),
        Just(GameScript::Neutral),
    ]
}

fn any_pick() -> impl Strategy<Value = PropPick> {
    (any_stat(), 0.5f64..400.0, 0.0f64..450.0, any_archetype(), any_script()).prop_map(
        |(stat_type, line, projection, archetype, script)| PropPick {
            player: "Prop Bot".to_string(),
            team: "BUF".to_string(),
            opponent: "NYJ".to_string(),
            stat_type,
            line,
            projection,
            archetype,
            script,
        },
    )
}

proptest! {
    #[test]
    fn sigma_is_always_positive(stat in any_stat(), line in 0.0f64..500.0, arch in any_archetype()) {
        prop_assert!(sigma_for(stat, line, arch) > 0.0);
    }

    #[test]
    fn win_probability_is_a_probability(
        line in -100.0f64..400.0,
        projection in -100.0f64..400.0,
        sigma in 0.1f64..60.0,
    ) {
        for direction in [Direction::Over, Direction::Under] {
            let p = win_probability(line, projection, sigma, direction);
            prop_assert!((0.0..=1.0).contains(&p), "p = {p}");
        }
    }

    #[test]
    fn ev_is_capped(line in 0.5f64..400.0, projection in -1000.0f64..1000.0) {
        let ev = ev_percentage(line, projection);
        prop_assert!((-60.0..=60.0).contains(&ev));
    }

    #[test]
    fn kelly_stake_respects_the_cap(
        p in 0.0f64..1.0,
        odds in 1.0f64..5.0,
        bankroll in 0.0f64..100_000.0,
    ) {
        let k = kelly_stake(p, odds, bankroll, 0.25, 0.05);
        prop_assert!(k.stake_fraction >= 0.0);
        prop_assert!(k.stake_fraction <= 0.05 + 1e-12);
        prop_assert!(k.stake >= 0.0);
        prop_assert!(k.stake <= bankroll * 0.05 + 1e-6);
    }

    #[test]
    fn parlay_probabilities_stay_in_range(
        legs in proptest::collection::vec(0.0f64..=1.0, 0..6),
        corr in -0.5f64..=0.5,
    ) {
        let independent = parlay_probability(&legs);
        prop_assert!((0.0..=1.0).contains(&independent));

        let adjusted = correlated_parlay_probability(&legs, corr);
        prop_assert!((0.001..=0.999).contains(&adjusted));
    }

    #[test]
    fn scoring_is_deterministic(pick in any_pick()) {
        let a = score_pick(pick.clone());
        let b = score_pick(pick);
        prop_assert_eq!(a, b);
    }

    #[test]
    fn an_a_grade_needs_all_three_roles(picks in proptest::collection::vec(any_pick(), 0..6), script in any_script()) {
        let scored: Vec<_> = picks.into_iter().map(score_pick).collect();
        let q = slip_quality(&scored, script);
        if q.grade == SlipGrade::A {
            prop_assert!(scored.iter().any(|p| p.role == RoleTag::Anchor));
            prop_assert!(scored.iter().any(|p| p.role == RoleTag::LowVariance));
            prop_assert!(scored.iter().any(|p| p.role == RoleTag::Correlation));
            prop_assert!(q.avg_win_prob >= 0.63);
        }
    }
}
