//! Saved recipe records.

use serde::{Deserialize, Serialize};

use crate::cards::{Card, CardId};

/// A recipe as stored by the catalog.
///
/// Field names follow the remote catalog's JSON (`numberOfRatings`,
/// `totalTime`); nutrition values are the free text scraped from the recipe
/// page.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedRecipe {
    pub id: CardId,
    pub title: String,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub number_of_ratings: Option<u32>,
    /// Minutes.
    #[serde(default)]
    pub total_time: Option<u32>,
    #[serde(default)]
    pub calories: Option<String>,
    #[serde(default)]
    pub carbs: Option<String>,
    #[serde(default)]
    pub fat: Option<String>,
    #[serde(default)]
    pub protein: Option<String>,
    /// Save time, milliseconds since the Unix epoch.
    pub saved_at: u64,
}

impl SavedRecipe {
    /// Create a record with no stats.
    pub fn new(id: impl Into<CardId>, title: impl Into<String>, saved_at: u64) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            rating: None,
            number_of_ratings: None,
            total_time: None,
            calories: None,
            carbs: None,
            fat: None,
            protein: None,
            saved_at,
        }
    }

    /// Snapshot this record as a game card.
    #[must_use]
    pub fn to_card(&self) -> Card {
        Card {
            id: self.id.clone(),
            title: self.title.clone(),
            rating: self.rating,
            reviews: self.number_of_ratings,
            time: self.total_time,
            calories: self.calories.clone(),
            carbs: self.carbs.clone(),
            fat: self.fat.clone(),
            protein: self.protein.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_card_maps_fields() {
        let recipe = SavedRecipe {
            rating: Some(4.7),
            number_of_ratings: Some(88),
            total_time: Some(25),
            protein: Some("21 g".to_string()),
            ..SavedRecipe::new("r1", "Pasta", 1_000)
        };

        let card = recipe.to_card();
        assert_eq!(card.id, CardId::new("r1"));
        assert_eq!(card.title, "Pasta");
        assert_eq!(card.rating, Some(4.7));
        assert_eq!(card.reviews, Some(88));
        assert_eq!(card.time, Some(25));
        assert_eq!(card.protein.as_deref(), Some("21 g"));
        assert_eq!(card.fat, None);
    }

    #[test]
    fn test_catalog_field_names() {
        let json = r#"{
            "id": "r2",
            "title": "Curry",
            "numberOfRatings": 12,
            "totalTime": 40,
            "calories": "512 kcal",
            "savedAt": 5
        }"#;

        let recipe: SavedRecipe = serde_json::from_str(json).unwrap();
        assert_eq!(recipe.number_of_ratings, Some(12));
        assert_eq!(recipe.total_time, Some(40));
        assert_eq!(recipe.calories.as_deref(), Some("512 kcal"));
        assert_eq!(recipe.rating, None);
        assert_eq!(recipe.saved_at, 5);
    }
}
