//! In-memory saved-recipe store.

use rustc_hash::FxHashMap;
use tracing::debug;

use super::{CardSource, CatalogError, SavedRecipe};
use crate::cards::{Card, CardId};

/// Saved recipes keyed by id.
///
/// ## Example
///
/// ```
/// use recipe_trumps::catalog::{CardSource, InMemoryCatalog, SavedRecipe};
///
/// let mut catalog = InMemoryCatalog::new();
/// catalog.insert(SavedRecipe::new("old", "Porridge", 1));
/// catalog.insert(SavedRecipe::new("new", "Ramen", 2));
///
/// let cards = catalog.list_available_cards();
/// assert_eq!(cards[0].title, "Ramen");
/// ```
#[derive(Clone, Debug, Default)]
pub struct InMemoryCatalog {
    recipes: FxHashMap<CardId, SavedRecipe>,
}

impl InMemoryCatalog {
    /// Create an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a catalog from a JSON array of saved recipes.
    ///
    /// Later entries replace earlier ones with the same id.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let recipes: Vec<SavedRecipe> = serde_json::from_str(json)?;
        let mut catalog = Self::new();
        for recipe in recipes {
            catalog.insert(recipe);
        }
        Ok(catalog)
    }

    /// Write the catalog as a JSON array, newest first.
    pub fn to_json(&self) -> Result<String, CatalogError> {
        Ok(serde_json::to_string_pretty(&self.newest_first())?)
    }

    /// Save a recipe, replacing any record with the same id.
    ///
    /// Returns the replaced record.
    pub fn insert(&mut self, recipe: SavedRecipe) -> Option<SavedRecipe> {
        debug!(id = %recipe.id, title = %recipe.title, "saving recipe");
        self.recipes.insert(recipe.id.clone(), recipe)
    }

    /// Get a saved recipe by id.
    #[must_use]
    pub fn get(&self, id: &CardId) -> Option<&SavedRecipe> {
        self.recipes.get(id)
    }

    /// Check if a recipe is saved.
    #[must_use]
    pub fn contains(&self, id: &CardId) -> bool {
        self.recipes.contains_key(id)
    }

    /// Remove and return a saved recipe.
    pub fn remove(&mut self, id: &CardId) -> Option<SavedRecipe> {
        self.recipes.remove(id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    /// Records ordered by save time, newest first. Equal times order by id.
    fn newest_first(&self) -> Vec<&SavedRecipe> {
        let mut recipes: Vec<_> = self.recipes.values().collect();
        recipes.sort_by(|a, b| b.saved_at.cmp(&a.saved_at).then_with(|| a.id.cmp(&b.id)));
        recipes
    }
}

impl CardSource for InMemoryCatalog {
    fn list_available_cards(&self) -> Vec<Card> {
        self.newest_first().into_iter().map(SavedRecipe::to_card).collect()
    }

    fn delete_card(&mut self, id: &CardId) -> bool {
        let removed = self.remove(id).is_some();
        debug!(%id, removed, "deleting recipe");
        removed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> InMemoryCatalog {
        let mut catalog = InMemoryCatalog::new();
        catalog.insert(SavedRecipe::new("b", "Bagel", 20));
        catalog.insert(SavedRecipe::new("a", "Apple Pie", 30));
        catalog.insert(SavedRecipe::new("c", "Chili", 10));
        catalog
    }

    #[test]
    fn test_list_newest_first() {
        let ids: Vec<_> = sample()
            .list_available_cards()
            .into_iter()
            .map(|c| c.id.0)
            .collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_equal_save_times_order_by_id() {
        let mut catalog = InMemoryCatalog::new();
        catalog.insert(SavedRecipe::new("z", "Z", 1));
        catalog.insert(SavedRecipe::new("y", "Y", 1));

        let ids: Vec<_> = catalog.list_available_cards().into_iter().map(|c| c.id.0).collect();
        assert_eq!(ids, vec!["y", "z"]);
    }

    #[test]
    fn test_insert_replaces_same_id() {
        let mut catalog = sample();
        let old = catalog.insert(SavedRecipe::new("a", "Apple Crumble", 40));

        assert_eq!(old.map(|r| r.title), Some("Apple Pie".to_string()));
        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.get(&"a".into()).map(|r| r.title.as_str()), Some("Apple Crumble"));
    }

    #[test]
    fn test_delete_card() {
        let mut catalog = sample();

        assert!(catalog.delete_card(&"b".into()));
        assert!(!catalog.delete_card(&"b".into()));
        assert!(!catalog.contains(&"b".into()));
        assert_eq!(catalog.list_available_cards().len(), 2);
    }

    #[test]
    fn test_json_roundtrip_keeps_order() {
        let catalog = sample();
        let json = catalog.to_json().unwrap();
        let loaded = InMemoryCatalog::from_json(&json).unwrap();

        assert_eq!(loaded.list_available_cards(), catalog.list_available_cards());
    }

    #[test]
    fn test_malformed_json() {
        let err = InMemoryCatalog::from_json("{not json").unwrap_err();
        assert!(matches!(err, CatalogError::Json(_)));
        assert!(InMemoryCatalog::from_json("[]").unwrap().is_empty());
    }
}
