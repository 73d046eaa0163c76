//! # recipe-trumps
//!
//! A Top-Trumps style card battle over saved recipes.
//!
//! Saved recipes become cards carrying seven stats (rating, reviews, time,
//! calories, carbs, fat, protein). A game splits the cards into a player deck
//! and a computer deck; every round the engine draws a stat and whether the
//! higher or lower value wins, and the winner of the comparison takes both
//! cards.
//!
//! ## Design Principles
//!
//! 1. **Caller-Driven**: No timers or background work. Every transition is a
//!    synchronous call that is either fully applied or rejected untouched.
//!
//! 2. **Injected Randomness**: Shuffles and draws go through one
//!    `RandomSource`, so games replay exactly from a seed or a script.
//!
//! 3. **Persistent Data Structures**: Decks and the event log use `im-rs`,
//!    making engine clones cheap.
//!
//! ## Modules
//!
//! - `core`: Sides, random sources, configuration
//! - `cards`: Card snapshots, stat valuation and comparison
//! - `catalog`: Saved-recipe store interface and in-memory adapter
//! - `game`: Round state machine, score, events

pub mod cards;
pub mod catalog;
pub mod core;
pub mod game;

// Re-export commonly used types
pub use crate::core::{EngineConfig, GameRng, GameRngState, RandomSource, ScriptedRandom, Side, SideMap};

pub use crate::cards::{Card, CardId, Direction, StatKind, StatValue};

pub use crate::catalog::{CardSource, CatalogError, InMemoryCatalog, SavedRecipe};

pub use crate::game::{
    GameError, GameEvent, GameResult, Phase, PreconditionViolation, PresentationHints,
    RoundOutcome, RoundState, Score, StatDraw, TrumpsEngine,
};
