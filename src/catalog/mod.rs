//! Card catalog adapter.
//!
//! The saved-recipe store is owned outside the engine. The engine only needs
//! an ordered snapshot at game start, which it gets through [`CardSource`].
//!
//! - `SavedRecipe`: one stored record, convertible to a `Card`
//! - `InMemoryCatalog`: `CardSource` over a map of records, JSON-loadable

pub mod memory;
pub mod recipe;

pub use memory::InMemoryCatalog;
pub use recipe::SavedRecipe;

use thiserror::Error;

use crate::cards::{Card, CardId};

/// Errors raised while loading or writing a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("malformed catalog json: {0}")]
    Json(#[from] serde_json::Error),
}

/// Read side of the saved-recipe store.
pub trait CardSource {
    /// All saved cards, most recently saved first.
    fn list_available_cards(&self) -> Vec<Card>;

    /// Remove a saved card. Returns false if no card had this id.
    ///
    /// Snapshots already handed to an engine are unaffected.
    fn delete_card(&mut self, id: &CardId) -> bool;
}
