//! Random sources for the engine.
//!
//! Every random decision the engine makes (deck shuffle, stat draw,
//! direction coin-flip) goes through a single [`RandomSource`] injected at
//! construction time.
//!
//! - [`GameRng`]: seedable ChaCha8 source used in real games, with
//!   [`GameRngState`] checkpoints
//! - [`ScriptedRandom`]: replays a fixed sequence of draws
//!
//! ```
//! use recipe_trumps::core::{GameRng, RandomSource};
//!
//! let mut a = GameRng::new(42);
//! let mut b = GameRng::new(42);
//! assert_eq!(a.draw_stat(), b.draw_stat());
//! ```

use std::collections::VecDeque;

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::cards::{Direction, StatKind};

/// Source of every random decision the engine takes.
pub trait RandomSource {
    /// Shuffle a slice in place with a uniform permutation.
    fn shuffle<T>(&mut self, items: &mut [T]);

    /// Draw one of the seven stat kinds uniformly.
    fn draw_stat(&mut self) -> StatKind;

    /// Draw the comparison direction, 50/50.
    fn draw_direction(&mut self) -> Direction;
}

/// Deterministic RNG backed by ChaCha8.
///
/// Same seed produces the same shuffles and draws.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG seeded from the operating system.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::thread_rng().gen())
    }

    /// The seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Capture the current position in the stream.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Resume from a captured state.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

/// Serializable [`GameRng`] checkpoint.
///
/// Stores the ChaCha8 word position, so its size does not grow with the
/// number of draws taken.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
}

impl RandomSource for GameRng {
    fn shuffle<T>(&mut self, items: &mut [T]) {
        items.shuffle(&mut self.inner);
    }

    fn draw_stat(&mut self) -> StatKind {
        StatKind::ALL[self.inner.gen_range(0..StatKind::ALL.len())]
    }

    fn draw_direction(&mut self) -> Direction {
        if self.inner.gen_bool(0.5) {
            Direction::HigherWins
        } else {
            Direction::LowerWins
        }
    }
}

/// Replays queued stat and direction draws.
///
/// Shuffles leave the input order untouched, so the deal is exactly the
/// order the cards were supplied in. Once a queue runs dry the draws fall
/// back to `Rating` / `HigherWins`.
#[derive(Clone, Debug, Default)]
pub struct ScriptedRandom {
    stats: VecDeque<StatKind>,
    directions: VecDeque<Direction>,
}

impl ScriptedRandom {
    /// Create an empty script.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue stat draws (builder pattern).
    #[must_use]
    pub fn with_stats(mut self, stats: impl IntoIterator<Item = StatKind>) -> Self {
        self.stats.extend(stats);
        self
    }

    /// Queue direction draws (builder pattern).
    #[must_use]
    pub fn with_directions(mut self, directions: impl IntoIterator<Item = Direction>) -> Self {
        self.directions.extend(directions);
        self
    }

    /// Queue one round: a stat and its direction.
    pub fn push_round(&mut self, stat: StatKind, direction: Direction) {
        self.stats.push_back(stat);
        self.directions.push_back(direction);
    }
}

impl RandomSource for ScriptedRandom {
    fn shuffle<T>(&mut self, _items: &mut [T]) {}

    fn draw_stat(&mut self) -> StatKind {
        self.stats.pop_front().unwrap_or(StatKind::Rating)
    }

    fn draw_direction(&mut self) -> Direction {
        self.directions.pop_front().unwrap_or(Direction::HigherWins)
    }
}
