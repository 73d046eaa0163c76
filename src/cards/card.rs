//! Card snapshots.
//!
//! A `Card` is an immutable copy of one saved recipe taken when a game
//! starts. The engine moves cards between decks but never edits them.

use serde::{Deserialize, Serialize};

/// Stable identity of a saved recipe.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardId(pub String);

impl CardId {
    /// Create a new card ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the raw ID value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for CardId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for CardId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Immutable stat snapshot of a saved recipe.
///
/// Numeric stats are stored as-is; nutrition stats keep the catalog's free
/// text ("350 kcal", "12 g") and are parsed when compared.
///
/// ## Example
///
/// ```
/// use recipe_trumps::cards::{Card, StatKind, StatValue};
///
/// let soup = Card::new("r1", "Tomato Soup")
///     .with_rating(4.5)
///     .with_calories("350 kcal");
///
/// assert_eq!(StatKind::Calories.value_of(&soup), StatValue::Numeric(350.0));
/// assert_eq!(StatKind::Protein.value_of(&soup), StatValue::Unavailable);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    pub title: String,
    #[serde(default)]
    pub rating: Option<f64>,
    /// Number of ratings.
    #[serde(default)]
    pub reviews: Option<u32>,
    /// Total time in minutes.
    #[serde(default)]
    pub time: Option<u32>,
    #[serde(default)]
    pub calories: Option<String>,
    #[serde(default)]
    pub carbs: Option<String>,
    #[serde(default)]
    pub fat: Option<String>,
    #[serde(default)]
    pub protein: Option<String>,
}

impl Card {
    /// Create a card with no stats.
    pub fn new(id: impl Into<CardId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            rating: None,
            reviews: None,
            time: None,
            calories: None,
            carbs: None,
            fat: None,
            protein: None,
        }
    }

    #[must_use]
    pub fn with_rating(mut self, rating: f64) -> Self {
        self.rating = Some(rating);
        self
    }

    #[must_use]
    pub fn with_reviews(mut self, reviews: u32) -> Self {
        self.reviews = Some(reviews);
        self
    }

    #[must_use]
    pub fn with_time(mut self, minutes: u32) -> Self {
        self.time = Some(minutes);
        self
    }

    #[must_use]
    pub fn with_calories(mut self, calories: impl Into<String>) -> Self {
        self.calories = Some(calories.into());
        self
    }

    #[must_use]
    pub fn with_carbs(mut self, carbs: impl Into<String>) -> Self {
        self.carbs = Some(carbs.into());
        self
    }

    #[must_use]
    pub fn with_fat(mut self, fat: impl Into<String>) -> Self {
        self.fat = Some(fat.into());
        self
    }

    #[must_use]
    pub fn with_protein(mut self, protein: impl Into<String>) -> Self {
        self.protein = Some(protein.into());
        self
    }
}
