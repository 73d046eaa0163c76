//! Invariant checks over random snapshots and seeds.
//!
//! - Dealing: equal decks of `n / 2`, at most `n` cards in play
//! - Conservation: cards only move between decks, never vanish or duplicate
//! - Scoring: score total equals decisive rounds played
//! - Atomicity: rejected calls change nothing

use proptest::prelude::*;
use recipe_trumps::cards::{Card, StatKind};
use recipe_trumps::core::{EngineConfig, GameRng, Side};
use recipe_trumps::game::{Phase, RoundOutcome, Score, TrumpsEngine};
use rustc_hash::FxHashSet;

fn nutrition() -> impl Strategy<Value = Option<String>> {
    prop::option::of(prop_oneof![
        (0u32..900).prop_map(|n| format!("{} kcal", n)),
        (0u32..80, 0u32..10).prop_map(|(whole, tenth)| format!("{},{} g", whole, tenth)),
        Just("n/a".to_string()),
    ])
}

fn cards(max: usize) -> impl Strategy<Value = Vec<Card>> {
    prop::collection::vec(
        (
            prop::option::of(0.0f64..5.0),
            prop::option::of(0u32..5000),
            prop::option::of(1u32..240),
            nutrition(),
            nutrition(),
        ),
        0..max,
    )
    .prop_map(|stats| {
        stats
            .into_iter()
            .enumerate()
            .map(|(i, (rating, reviews, time, calories, protein))| Card {
                rating,
                reviews,
                time,
                calories,
                protein,
                ..Card::new(format!("card-{}", i), "Recipe")
            })
            .collect()
    })
}

fn in_play<R>(engine: &TrumpsEngine<R>) -> Vec<String> {
    Side::BOTH
        .into_iter()
        .filter_map(|side| engine.deck(side))
        .flat_map(|deck| deck.iter().map(|card| card.id.0.clone()))
        .collect()
}

proptest! {
    #[test]
    fn prop_deal_splits_evenly(deck in cards(40), seed in any::<u64>()) {
        let n = deck.len();
        let mut engine = TrumpsEngine::new(GameRng::new(seed));
        let started = engine.start_game(deck);

        if n < 2 {
            prop_assert!(started.is_err());
            prop_assert_eq!(engine.current_phase(), None);
        } else {
            prop_assert!(started.is_ok());
            prop_assert_eq!(engine.player_deck_count(), n / 2);
            prop_assert_eq!(engine.computer_deck_count(), n / 2);
            prop_assert_eq!(in_play(&engine).len(), n - n % 2);
        }
    }

    #[test]
    fn prop_rounds_conserve_cards_and_score(
        deck in cards(24),
        seed in any::<u64>(),
        picks in prop::collection::vec(any::<prop::sample::Index>(), 300),
    ) {
        prop_assume!(deck.len() >= 2);
        let mut engine = TrumpsEngine::with_config(GameRng::new(seed), EngineConfig::new().instant_deal());
        engine.start_game(deck).unwrap();

        let dealt: FxHashSet<String> = in_play(&engine).into_iter().collect();
        let total = dealt.len();
        let mut decisive = 0;

        for pick in picks {
            if engine.current_phase() != Some(Phase::ChooseStat) {
                break;
            }

            // Browse the hand and present any card
            let hand: Vec<_> = engine.player_hand().map(|card| card.id.clone()).collect();
            engine.confirm_active_card(&hand[pick.index(hand.len())]).unwrap();

            let before = (engine.player_deck_count(), engine.computer_deck_count());
            let outcome = engine.resolve_round().unwrap();
            prop_assert_eq!(engine.current_phase(), Some(Phase::Reveal));
            engine.advance_round().unwrap();
            let after = (engine.player_deck_count(), engine.computer_deck_count());

            match outcome {
                RoundOutcome::PlayerWins => prop_assert_eq!(after, (before.0 + 1, before.1 - 1)),
                RoundOutcome::ComputerWins => prop_assert_eq!(after, (before.0 - 1, before.1 + 1)),
                RoundOutcome::Tie => prop_assert_eq!(after, before),
            }
            if outcome.is_decisive() {
                decisive += 1;
            }

            let now = in_play(&engine);
            prop_assert_eq!(now.len(), total);
            prop_assert_eq!(now.into_iter().collect::<FxHashSet<_>>(), dealt.clone());
            prop_assert_eq!(engine.score_snapshot().total(), decisive);
        }

        if engine.current_phase() == Some(Phase::GameOver) {
            prop_assert!(engine.player_deck_count() == 0 || engine.computer_deck_count() == 0);
            prop_assert!(engine.result().is_some());
        }
    }

    #[test]
    fn prop_rejected_calls_change_nothing(deck in cards(12), seed in any::<u64>()) {
        prop_assume!(deck.len() >= 2);
        let mut engine = TrumpsEngine::with_config(GameRng::new(seed), EngineConfig::new().instant_deal());
        engine.start_game(deck).unwrap();
        let events = engine.events().len();

        // No card confirmed yet, nothing resolved
        prop_assert!(engine.resolve_round().is_err());
        prop_assert!(engine.advance_round().is_err());
        prop_assert!(engine.finish_dealing().is_err());

        prop_assert_eq!(engine.current_phase(), Some(Phase::ChooseStat));
        prop_assert_eq!(engine.score_snapshot(), Score::default());
        prop_assert_eq!(engine.events().len(), events);
        prop_assert_eq!(engine.player_deck_count(), engine.computer_deck_count());
    }

    #[test]
    fn prop_stat_draws_stay_in_range(seed in any::<u64>()) {
        let mut engine = TrumpsEngine::with_config(GameRng::new(seed), EngineConfig::new().instant_deal());
        engine.start_game([Card::new("a", "A"), Card::new("b", "B")]).unwrap();

        let stat = engine.hints().highlighted_stat;
        prop_assert!(stat.is_some_and(|s| StatKind::ALL.contains(&s)));
        prop_assert!(engine.hints().direction.is_some());
    }
}
