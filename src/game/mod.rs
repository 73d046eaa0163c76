//! Top-Trumps game engine.
//!
//! Deals two decks from a card snapshot and runs rounds until one deck is
//! empty:
//!
//! 1. A stat and a direction are drawn
//! 2. The player confirms which card to present
//! 3. Cards are compared, the winner takes both (ties go back to their owners)
//!
//! The final result is decided by score, not by which deck ran out.

pub mod engine;
pub mod error;
pub mod event;
pub mod round;

pub use engine::{PresentationHints, TrumpsEngine};
pub use error::{GameError, PreconditionViolation};
pub use event::GameEvent;
pub use round::{GameResult, Phase, RoundOutcome, RoundState, Score, StatDraw};
