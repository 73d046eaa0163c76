//! Game events.
//!
//! The engine appends one event per transition. Callers drain the log with
//! `TrumpsEngine::take_events` to learn what changed without diffing state.

use serde::{Deserialize, Serialize};

use super::round::{GameResult, RoundOutcome, Score, StatDraw};
use crate::cards::CardId;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Decks were dealt. `trimmed` is the card left out of an odd snapshot.
    GameStarted {
        player_deck: usize,
        computer_deck: usize,
        trimmed: Option<CardId>,
    },
    /// A round opened with a freshly drawn stat and direction.
    StatDrawn { round: u32, draw: StatDraw },
    /// The player picked the card to present.
    ActiveCardConfirmed { round: u32, card: CardId },
    /// Both cards were compared.
    RoundResolved {
        round: u32,
        draw: StatDraw,
        player_card: CardId,
        computer_card: CardId,
        outcome: RoundOutcome,
    },
    /// Cards moved and the score was updated.
    RoundAdvanced {
        round: u32,
        outcome: RoundOutcome,
        score: Score,
        player_deck: usize,
        computer_deck: usize,
    },
    /// A deck ran out.
    GameOver { result: GameResult, score: Score },
}
