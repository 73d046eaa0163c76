//! Card snapshots and stat valuation.
//!
//! ## Key Types
//!
//! - `CardId`: Stable string identity of a saved recipe
//! - `Card`: Immutable stat snapshot taken at game start
//! - `StatKind`: The seven comparable stats
//! - `StatValue`: `Numeric(v)` or `Unavailable`
//! - `Direction`: Higher-wins or lower-wins

pub mod card;
pub mod stats;

pub use card::{Card, CardId};
pub use stats::{parse_leading_number, winner, Direction, StatKind, StatValue};
