//! Engine errors.
//!
//! Every error is raised before any state is touched, so a rejected call
//! leaves the game exactly as it was.

use thiserror::Error;

use super::round::Phase;
use crate::cards::CardId;
use crate::core::Side;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("not enough cards to play: need {required}, have {available}")]
    InsufficientCards { required: usize, available: usize },
    #[error("card {0} appears more than once")]
    DuplicateCard(CardId),
    #[error(transparent)]
    Precondition(#[from] PreconditionViolation),
}

/// A caller invoked an operation the current state does not allow.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum PreconditionViolation {
    #[error("no game in progress")]
    NoActiveGame,
    #[error("operation requires phase {expected}, game is in {actual}")]
    WrongPhase { expected: Phase, actual: Phase },
    #[error("{0} deck is empty")]
    EmptyDeck(Side),
    #[error("no stat drawn for this round")]
    NoStatDrawn,
    #[error("no active card confirmed")]
    NoActiveCard,
    #[error("card {0} is not in the player's deck")]
    UnknownCard(CardId),
    #[error("round has no outcome to apply")]
    Unresolved,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = GameError::InsufficientCards { required: 2, available: 1 };
        assert_eq!(err.to_string(), "not enough cards to play: need 2, have 1");

        let err: GameError = PreconditionViolation::WrongPhase {
            expected: Phase::Reveal,
            actual: Phase::ChooseStat,
        }
        .into();
        assert_eq!(
            err.to_string(),
            "operation requires phase reveal, game is in choose-stat"
        );

        let err: GameError = PreconditionViolation::EmptyDeck(Side::Computer).into();
        assert_eq!(err.to_string(), "computer deck is empty");
    }
}
