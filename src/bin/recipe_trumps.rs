//! Play a full game against the computer from a saved-recipe JSON file.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use recipe_trumps::{
    Card, CardId, CardSource, Direction, EngineConfig, GameResult, GameRng, InMemoryCatalog,
    Phase, Side, TrumpsEngine,
};
use tracing::{info, warn};

/// How the scripted player picks the card to present.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Strategy {
    /// Always present the front of the deck.
    Top,
    /// Browse the hand and present the strongest card for the drawn stat.
    Best,
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Recipe card battle against the computer")]
struct Args {
    /// JSON array of saved recipes
    #[arg(short, long)]
    cards: PathBuf,

    /// Seed for the shuffle and stat draws (random if omitted)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Stop after this many rounds
    #[arg(long, default_value_t = 1000)]
    max_rounds: u32,

    #[arg(long, value_enum, default_value_t = Strategy::Top)]
    strategy: Strategy,

    #[arg(long, default_value = "info")]
    log_level: tracing::Level,
}

fn main() -> Result<()> {
    let args = Args::parse();
    tracing_subscriber::fmt().with_max_level(args.log_level).init();

    let json = std::fs::read_to_string(&args.cards)
        .with_context(|| format!("failed to read {}", args.cards.display()))?;
    let catalog = InMemoryCatalog::from_json(&json).context("failed to load saved recipes")?;

    let rng = args.seed.map_or_else(GameRng::from_entropy, GameRng::new);
    info!(seed = rng.seed(), cards = catalog.len(), "starting game");

    let mut engine = TrumpsEngine::with_config(rng, EngineConfig::new().instant_deal());
    engine.start_game(catalog.list_available_cards())?;

    while engine.current_phase() == Some(Phase::ChooseStat) {
        if engine.rounds_played() >= args.max_rounds {
            warn!(rounds = args.max_rounds, "round limit reached");
            break;
        }

        match args.strategy {
            Strategy::Top => {
                engine.confirm_top_card()?;
            }
            Strategy::Best => {
                let id = best_card(&engine).context("no card to present")?;
                engine.confirm_active_card(&id)?;
            }
        }
        engine.resolve_round()?;
        engine.advance_round()?;

        for event in engine.take_events() {
            info!(?event);
        }
    }

    info!(rng = ?engine.rng().state(), "game finished");

    let score = engine.score_snapshot();
    let verdict = match engine.result() {
        Some(GameResult::Winner(Side::Player)) => "You won!",
        Some(GameResult::Winner(Side::Computer)) => "You lost!",
        Some(GameResult::Draw) => "It's a draw!",
        None => "Game unfinished.",
    };
    println!(
        "{} You: {} points, {} cards. Computer: {} points, {} cards.",
        verdict,
        score.player,
        engine.player_deck_count(),
        score.computer,
        engine.computer_deck_count(),
    );
    Ok(())
}

/// Strongest card in the player's hand for this round's stat and direction.
fn best_card<R>(engine: &TrumpsEngine<R>) -> Option<CardId> {
    let draw = engine.round()?.draw?;
    let value = |card: &Card| draw.stat.value_of(card).comparable();
    let hand = engine.player_hand();

    let pick = match draw.direction {
        Direction::HigherWins => hand.max_by(|a, b| value(a).total_cmp(&value(b))),
        Direction::LowerWins => hand.min_by(|a, b| value(a).total_cmp(&value(b))),
    };
    pick.map(|card| card.id.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_args() {
        let args = Args::parse_from([
            "recipe-trumps",
            "--cards",
            "saved.json",
            "--seed",
            "7",
            "--strategy",
            "best",
            "--log-level",
            "debug",
        ]);

        assert_eq!(args.cards, PathBuf::from("saved.json"));
        assert_eq!(args.seed, Some(7));
        assert_eq!(args.max_rounds, 1000);
        assert_eq!(args.strategy, Strategy::Best);
        assert_eq!(args.log_level, tracing::Level::DEBUG);
    }

    #[test]
    fn best_card_respects_direction() {
        use recipe_trumps::{ScriptedRandom, StatKind};

        let cards = [
            Card::new("slow", "Stew").with_time(120),
            Card::new("fast", "Toast").with_time(5),
            Card::new("x", "X"),
            Card::new("y", "Y"),
        ];
        let rng = ScriptedRandom::new()
            .with_stats([StatKind::Time])
            .with_directions([Direction::LowerWins]);
        let mut engine = TrumpsEngine::with_config(rng, EngineConfig::new().instant_deal());
        engine.start_game(cards).unwrap();

        assert_eq!(best_card(&engine), Some(CardId::new("fast")));
    }
}
