//! Core engine types: sides, randomness, configuration.
//!
//! Nothing in here knows about rounds or scoring; the game module builds on
//! these pieces.

pub mod config;
pub mod rng;
pub mod side;

pub use config::{EngineConfig, MIN_PLAYABLE_CARDS};
pub use rng::{GameRng, GameRngState, RandomSource, ScriptedRandom};
pub use side::{Side, SideMap};
