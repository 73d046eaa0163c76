//! Engine configuration.
//!
//! Callers configure the engine at construction time:
//! - `min_cards`: smallest snapshot that starts a game (never below 2)
//! - `instant_deal`: skip the `Dealing` gate and go straight to the first round

use serde::{Deserialize, Serialize};

/// Smallest number of cards a game can be played with.
pub const MIN_PLAYABLE_CARDS: usize = 2;

/// Complete engine configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Minimum snapshot size accepted by `start_game`.
    pub min_cards: usize,

    /// Leave `Dealing` immediately on start.
    ///
    /// Presentation layers that animate the deal keep this off and call
    /// `finish_dealing` once the animation completes.
    pub instant_deal: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            min_cards: MIN_PLAYABLE_CARDS,
            instant_deal: false,
        }
    }
}

impl EngineConfig {
    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Require at least `count` cards to start. Clamped to 2.
    #[must_use]
    pub fn with_min_cards(mut self, count: usize) -> Self {
        self.min_cards = count.max(MIN_PLAYABLE_CARDS);
        self
    }

    /// Skip the dealing gate.
    #[must_use]
    pub fn instant_deal(mut self) -> Self {
        self.instant_deal = true;
        self
    }

    /// Effective minimum, guarding against hand-built configs below 2.
    #[must_use]
    pub fn required_cards(&self) -> usize {
        self.min_cards.max(MIN_PLAYABLE_CARDS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EngineConfig::new();
        assert_eq!(config.min_cards, 2);
        assert!(!config.instant_deal);
    }

    #[test]
    fn test_builder() {
        let config = EngineConfig::new().with_min_cards(6).instant_deal();
        assert_eq!(config.required_cards(), 6);
        assert!(config.instant_deal);
    }

    #[test]
    fn test_min_cards_clamped() {
        assert_eq!(EngineConfig::new().with_min_cards(0).min_cards, 2);

        let hand_built = EngineConfig {
            min_cards: 1,
            instant_deal: false,
        };
        assert_eq!(hand_built.required_cards(), 2);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: EngineConfig = serde_json::from_str(r#"{"instant_deal": true}"#).unwrap();
        assert_eq!(config.min_cards, 2);
        assert!(config.instant_deal);
    }
}
