//! Phases, round state, score and final result.

use serde::{Deserialize, Serialize};

use crate::cards::{CardId, Direction, StatKind};
use crate::core::Side;

/// Where a game is in its lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Cards dealt, waiting for the presentation layer to finish the deal.
    Dealing,
    /// Stat drawn, waiting for the player to present a card.
    ChooseStat,
    /// Outcome computed and shown.
    Reveal,
    /// One deck ran out. Terminal until a new game starts.
    GameOver,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Phase::Dealing => "dealing",
            Phase::ChooseStat => "choose-stat",
            Phase::Reveal => "reveal",
            Phase::GameOver => "game-over",
        };
        f.write_str(name)
    }
}

/// Result of comparing two cards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoundOutcome {
    PlayerWins,
    ComputerWins,
    Tie,
}

impl RoundOutcome {
    /// Build from the winning side, `None` meaning a tie.
    #[must_use]
    pub fn from_winner(winner: Option<Side>) -> Self {
        match winner {
            Some(Side::Player) => RoundOutcome::PlayerWins,
            Some(Side::Computer) => RoundOutcome::ComputerWins,
            None => RoundOutcome::Tie,
        }
    }

    /// The winning side, `None` on a tie.
    #[must_use]
    pub fn winner(self) -> Option<Side> {
        match self {
            RoundOutcome::PlayerWins => Some(Side::Player),
            RoundOutcome::ComputerWins => Some(Side::Computer),
            RoundOutcome::Tie => None,
        }
    }

    #[must_use]
    pub fn is_decisive(self) -> bool {
        self != RoundOutcome::Tie
    }
}

/// The stat and direction drawn for a round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatDraw {
    pub stat: StatKind,
    pub direction: Direction,
}

/// Transient per-round state, cleared when the round advances.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundState {
    /// Round number, starting at 1.
    pub number: u32,
    pub draw: Option<StatDraw>,
    /// Player card chosen for comparison.
    pub active_card: Option<CardId>,
    pub outcome: Option<RoundOutcome>,
}

impl RoundState {
    /// Fresh state for round `number` with its draw.
    #[must_use]
    pub fn drawn(number: u32, draw: StatDraw) -> Self {
        Self {
            number,
            draw: Some(draw),
            active_card: None,
            outcome: None,
        }
    }
}

/// Decisive rounds won by each side.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub player: u32,
    pub computer: u32,
}

impl Score {
    /// Credit one decisive round to `side`.
    pub fn award(&mut self, side: Side) {
        match side {
            Side::Player => self.player += 1,
            Side::Computer => self.computer += 1,
        }
    }

    /// Number of decisive rounds recorded.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.player + self.computer
    }
}

impl std::fmt::Display for Score {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.player, self.computer)
    }
}

/// Result of a completed game, decided by final score alone.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    Winner(Side),
    Draw,
}

impl GameResult {
    #[must_use]
    pub fn from_score(score: Score) -> Self {
        match score.player.cmp(&score.computer) {
            std::cmp::Ordering::Greater => GameResult::Winner(Side::Player),
            std::cmp::Ordering::Less => GameResult::Winner(Side::Computer),
            std::cmp::Ordering::Equal => GameResult::Draw,
        }
    }

    /// Check if a side won.
    #[must_use]
    pub fn is_winner(&self, side: Side) -> bool {
        matches!(self, GameResult::Winner(s) if *s == side)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_winner_roundtrip() {
        for winner in [Some(Side::Player), Some(Side::Computer), None] {
            assert_eq!(RoundOutcome::from_winner(winner).winner(), winner);
        }
        assert!(!RoundOutcome::Tie.is_decisive());
        assert!(RoundOutcome::ComputerWins.is_decisive());
    }

    #[test]
    fn test_score_award() {
        let mut score = Score::default();
        score.award(Side::Player);
        score.award(Side::Player);
        score.award(Side::Computer);

        assert_eq!(score, Score { player: 2, computer: 1 });
        assert_eq!(score.total(), 3);
        assert_eq!(format!("{}", score), "2-1");
    }

    #[test]
    fn test_game_result_from_score() {
        let result = GameResult::from_score(Score { player: 3, computer: 1 });
        assert!(result.is_winner(Side::Player));
        assert!(!result.is_winner(Side::Computer));

        let lost = GameResult::from_score(Score { player: 0, computer: 2 });
        assert_eq!(lost, GameResult::Winner(Side::Computer));

        let draw = GameResult::from_score(Score { player: 2, computer: 2 });
        assert_eq!(draw, GameResult::Draw);
        assert!(!draw.is_winner(Side::Player));
        assert!(!draw.is_winner(Side::Computer));
    }

    #[test]
    fn test_phase_display() {
        assert_eq!(Phase::ChooseStat.to_string(), "choose-stat");
        assert_eq!(Phase::GameOver.to_string(), "game-over");
    }
}
