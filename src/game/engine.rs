//! The card comparison engine.
//!
//! ## Round lifecycle
//!
//! ```text
//! start_game ──> Dealing ──finish_dealing──> ChooseStat ──resolve_round──> Reveal
//!                                                ^                           │
//!                                                └───────advance_round───────┤
//!                                                                            v
//!                                                                        GameOver
//! ```
//!
//! Each time `ChooseStat` is entered the engine draws a stat and a direction.
//! The player picks which of their cards to present; the computer always
//! presents the front of its deck. Decks are FIFO queues: won and tied cards
//! go to the back.

use im::Vector;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use super::error::{GameError, PreconditionViolation};
use super::event::GameEvent;
use super::round::{GameResult, Phase, RoundOutcome, RoundState, Score, StatDraw};
use crate::cards::{winner, Card, CardId, Direction, StatKind};
use crate::core::{EngineConfig, RandomSource, Side, SideMap};

/// State of one game, from deal to game over.
#[derive(Clone, Debug)]
struct Match {
    decks: SideMap<Vector<Card>>,
    phase: Phase,
    round: RoundState,
    score: Score,
    rounds_played: u32,
    result: Option<GameResult>,
}

impl Match {
    fn expect_phase(&self, expected: Phase) -> Result<(), PreconditionViolation> {
        if self.phase == expected {
            Ok(())
        } else {
            Err(PreconditionViolation::WrongPhase {
                expected,
                actual: self.phase,
            })
        }
    }

    fn player_position(&self, id: &CardId) -> Option<usize> {
        self.decks[Side::Player].iter().position(|card| &card.id == id)
    }
}

/// What the presentation layer should highlight.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresentationHints {
    /// Stat under comparison this round.
    pub highlighted_stat: Option<StatKind>,
    pub direction: Option<Direction>,
    /// The computer's card stays hidden until the round is revealed.
    pub computer_card_face_down: bool,
    pub outcome: Option<RoundOutcome>,
}

/// Top-Trumps engine over recipe cards.
///
/// Every transition appends to an event log that only empties on
/// [`start_game`](Self::start_game) or [`take_events`](Self::take_events).
/// Callers are expected to drain it as they go; a long run of ties otherwise
/// grows it by a few events per round.
///
/// ## Example
///
/// ```
/// use recipe_trumps::cards::{Card, Direction, StatKind};
/// use recipe_trumps::core::{EngineConfig, ScriptedRandom};
/// use recipe_trumps::game::{Phase, RoundOutcome, TrumpsEngine};
///
/// let rng = ScriptedRandom::new()
///     .with_stats([StatKind::Rating])
///     .with_directions([Direction::HigherWins]);
/// let mut engine = TrumpsEngine::with_config(rng, EngineConfig::new().instant_deal());
///
/// engine
///     .start_game([
///         Card::new("a", "Lasagne").with_rating(4.8),
///         Card::new("b", "Salad").with_rating(3.9),
///     ])
///     .unwrap();
///
/// engine.confirm_top_card().unwrap();
/// assert_eq!(engine.resolve_round().unwrap(), RoundOutcome::PlayerWins);
/// assert_eq!(engine.advance_round().unwrap(), Phase::GameOver);
/// assert_eq!(engine.score_snapshot().player, 1);
/// ```
#[derive(Clone, Debug)]
pub struct TrumpsEngine<R> {
    config: EngineConfig,
    rng: R,
    game: Option<Match>,
    events: Vector<GameEvent>,
}

impl<R: RandomSource> TrumpsEngine<R> {
    /// Create an engine with the default configuration.
    #[must_use]
    pub fn new(rng: R) -> Self {
        Self::with_config(rng, EngineConfig::default())
    }

    #[must_use]
    pub fn with_config(rng: R, config: EngineConfig) -> Self {
        Self {
            config,
            rng,
            game: None,
            events: Vector::new(),
        }
    }

    // === Operations ===

    /// Shuffle `cards` and deal two equal decks.
    ///
    /// With an odd count the last shuffled card sits out the whole game.
    /// Replaces any game in progress. On failure the engine holds no game.
    pub fn start_game(&mut self, cards: impl IntoIterator<Item = Card>) -> Result<(), GameError> {
        let mut cards: Vec<Card> = cards.into_iter().collect();
        self.events.clear();

        let required = self.config.required_cards();
        if cards.len() < required {
            self.game = None;
            let err = GameError::InsufficientCards {
                required,
                available: cards.len(),
            };
            warn!(%err, "cannot start game");
            return Err(err);
        }
        if let Some(id) = first_duplicate(&cards) {
            self.game = None;
            let err = GameError::DuplicateCard(id);
            warn!(%err, "cannot start game");
            return Err(err);
        }

        self.rng.shuffle(&mut cards);
        let half = cards.len() / 2;
        let trimmed = (cards.len() % 2 == 1).then(|| cards[cards.len() - 1].id.clone());

        let mut dealt = cards.into_iter();
        let player: Vector<Card> = dealt.by_ref().take(half).collect();
        let computer: Vector<Card> = dealt.take(half).collect();

        info!(deck_size = half, trimmed = ?trimmed, "game started");
        self.events.push_back(GameEvent::GameStarted {
            player_deck: player.len(),
            computer_deck: computer.len(),
            trimmed,
        });
        self.game = Some(Match {
            decks: SideMap::new(player, computer),
            phase: Phase::Dealing,
            round: RoundState::default(),
            score: Score::default(),
            rounds_played: 0,
            result: None,
        });

        if self.config.instant_deal {
            self.finish_dealing()?;
        }
        Ok(())
    }

    /// Leave `Dealing` and open the first round.
    pub fn finish_dealing(&mut self) -> Result<(), GameError> {
        self.logged("finish_dealing", |engine| {
            let game = active(&mut engine.game)?;
            game.expect_phase(Phase::Dealing)?;
            open_round(&mut engine.rng, game, &mut engine.events);
            Ok(())
        })
    }

    /// Choose which of the player's cards to present this round.
    ///
    /// May be called repeatedly while browsing; the last choice wins.
    pub fn confirm_active_card(&mut self, id: &CardId) -> Result<(), GameError> {
        self.logged("confirm_active_card", |engine| {
            let game = active(&mut engine.game)?;
            game.expect_phase(Phase::ChooseStat)?;
            if game.player_position(id).is_none() {
                return Err(PreconditionViolation::UnknownCard(id.clone()).into());
            }
            confirm(game, &mut engine.events, id.clone());
            Ok(())
        })
    }

    /// Present the front card of the player's deck.
    pub fn confirm_top_card(&mut self) -> Result<CardId, GameError> {
        self.logged("confirm_top_card", |engine| {
            let game = active(&mut engine.game)?;
            game.expect_phase(Phase::ChooseStat)?;
            let id = game.decks[Side::Player]
                .front()
                .map(|card| card.id.clone())
                .ok_or(PreconditionViolation::EmptyDeck(Side::Player))?;
            confirm(game, &mut engine.events, id.clone());
            Ok(id)
        })
    }

    /// Compare the active player card with the computer's front card.
    pub fn resolve_round(&mut self) -> Result<RoundOutcome, GameError> {
        self.logged("resolve_round", |engine| {
            let game = active(&mut engine.game)?;
            game.expect_phase(Phase::ChooseStat)?;
            for side in Side::BOTH {
                if game.decks[side].is_empty() {
                    return Err(PreconditionViolation::EmptyDeck(side).into());
                }
            }
            let draw = game.round.draw.ok_or(PreconditionViolation::NoStatDrawn)?;
            let active_id = game
                .round
                .active_card
                .as_ref()
                .ok_or(PreconditionViolation::NoActiveCard)?;
            let index = game
                .player_position(active_id)
                .ok_or_else(|| PreconditionViolation::UnknownCard(active_id.clone()))?;

            let player_card = &game.decks[Side::Player][index];
            let computer_card = game.decks[Side::Computer]
                .front()
                .ok_or(PreconditionViolation::EmptyDeck(Side::Computer))?;
            let outcome = RoundOutcome::from_winner(winner(
                draw.stat,
                draw.direction,
                player_card,
                computer_card,
            ));
            debug!(
                round = game.round.number,
                stat = %draw.stat,
                direction = %draw.direction,
                player = %player_card.id,
                computer = %computer_card.id,
                ?outcome,
                "round resolved"
            );
            let event = GameEvent::RoundResolved {
                round: game.round.number,
                draw,
                player_card: player_card.id.clone(),
                computer_card: computer_card.id.clone(),
                outcome,
            };

            game.round.outcome = Some(outcome);
            game.phase = Phase::Reveal;
            engine.events.push_back(event);
            Ok(outcome)
        })
    }

    /// Move the compared cards, update the score and open the next round.
    ///
    /// Returns the phase the game is in afterwards.
    pub fn advance_round(&mut self) -> Result<Phase, GameError> {
        self.logged("advance_round", |engine| {
            let game = active(&mut engine.game)?;
            game.expect_phase(Phase::Reveal)?;
            let outcome = game.round.outcome.ok_or(PreconditionViolation::Unresolved)?;
            let active_id = game
                .round
                .active_card
                .clone()
                .ok_or(PreconditionViolation::NoActiveCard)?;
            let index = game
                .player_position(&active_id)
                .ok_or(PreconditionViolation::UnknownCard(active_id))?;

            let computer_card = game.decks[Side::Computer]
                .pop_front()
                .ok_or(PreconditionViolation::EmptyDeck(Side::Computer))?;
            let player_card = game.decks[Side::Player].remove(index);

            match outcome.winner() {
                Some(Side::Player) => {
                    game.decks[Side::Player].push_back(player_card);
                    game.decks[Side::Player].push_back(computer_card);
                }
                Some(Side::Computer) => {
                    game.decks[Side::Computer].push_back(computer_card);
                    game.decks[Side::Computer].push_back(player_card);
                }
                None => {
                    game.decks[Side::Player].push_back(player_card);
                    game.decks[Side::Computer].push_back(computer_card);
                }
            }
            if let Some(side) = outcome.winner() {
                game.score.award(side);
            }
            game.rounds_played += 1;

            let round = game.round.number;
            debug!(round, ?outcome, score = %game.score, "round advanced");
            engine.events.push_back(GameEvent::RoundAdvanced {
                round,
                outcome,
                score: game.score,
                player_deck: game.decks[Side::Player].len(),
                computer_deck: game.decks[Side::Computer].len(),
            });

            if game.decks.iter().any(|(_, deck)| deck.is_empty()) {
                let result = GameResult::from_score(game.score);
                game.phase = Phase::GameOver;
                game.result = Some(result);
                game.round = RoundState {
                    number: round,
                    ..RoundState::default()
                };
                info!(?result, score = %game.score, rounds = game.rounds_played, "game over");
                engine.events.push_back(GameEvent::GameOver {
                    result,
                    score: game.score,
                });
                return Ok(Phase::GameOver);
            }

            open_round(&mut engine.rng, game, &mut engine.events);
            Ok(Phase::ChooseStat)
        })
    }

    fn logged<T>(
        &mut self,
        operation: &'static str,
        f: impl FnOnce(&mut Self) -> Result<T, GameError>,
    ) -> Result<T, GameError> {
        f(self).inspect_err(|err| warn!(operation, %err, "operation rejected"))
    }
}

impl<R> TrumpsEngine<R> {
    // === Queries ===

    /// Current phase, `None` when no game could be started.
    #[must_use]
    pub fn current_phase(&self) -> Option<Phase> {
        self.game.as_ref().map(|game| game.phase)
    }

    #[must_use]
    pub fn is_playable(&self) -> bool {
        self.game.is_some()
    }

    #[must_use]
    pub fn score_snapshot(&self) -> Score {
        self.game.as_ref().map(|game| game.score).unwrap_or_default()
    }

    #[must_use]
    pub fn player_deck_count(&self) -> usize {
        self.deck_count(Side::Player)
    }

    #[must_use]
    pub fn computer_deck_count(&self) -> usize {
        self.deck_count(Side::Computer)
    }

    #[must_use]
    pub fn deck_count(&self, side: Side) -> usize {
        self.deck(side).map_or(0, Vector::len)
    }

    /// A side's deck, front first.
    #[must_use]
    pub fn deck(&self, side: Side) -> Option<&Vector<Card>> {
        self.game.as_ref().map(|game| &game.decks[side])
    }

    /// The player's remaining cards, for browsing before confirming one.
    pub fn player_hand(&self) -> impl Iterator<Item = &Card> {
        self.deck(Side::Player).into_iter().flatten()
    }

    /// Front card of a side's deck.
    #[must_use]
    pub fn top_card(&self, side: Side) -> Option<&Card> {
        self.deck(side).and_then(Vector::front)
    }

    /// The card the player confirmed for this round.
    #[must_use]
    pub fn active_card(&self) -> Option<&Card> {
        let game = self.game.as_ref()?;
        let id = game.round.active_card.as_ref()?;
        game.decks[Side::Player].iter().find(|card| &card.id == id)
    }

    #[must_use]
    pub fn round(&self) -> Option<&RoundState> {
        self.game.as_ref().map(|game| &game.round)
    }

    /// Rounds advanced so far, ties included.
    #[must_use]
    pub fn rounds_played(&self) -> u32 {
        self.game.as_ref().map_or(0, |game| game.rounds_played)
    }

    /// Final result once the game is over.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        self.game.as_ref().and_then(|game| game.result)
    }

    #[must_use]
    pub fn hints(&self) -> PresentationHints {
        let Some(game) = self.game.as_ref() else {
            return PresentationHints::default();
        };
        PresentationHints {
            highlighted_stat: game.round.draw.map(|draw| draw.stat),
            direction: game.round.draw.map(|draw| draw.direction),
            computer_card_face_down: matches!(game.phase, Phase::Dealing | Phase::ChooseStat),
            outcome: game.round.outcome,
        }
    }

    /// Events not yet taken, oldest first.
    #[must_use]
    pub fn events(&self) -> &Vector<GameEvent> {
        &self.events
    }

    /// Drain the event log.
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events).into_iter().collect()
    }

    /// The random source, e.g. to checkpoint a [`GameRng`](crate::core::GameRng).
    #[must_use]
    pub fn rng(&self) -> &R {
        &self.rng
    }
}

fn active(game: &mut Option<Match>) -> Result<&mut Match, PreconditionViolation> {
    game.as_mut().ok_or(PreconditionViolation::NoActiveGame)
}

fn open_round<R: RandomSource>(rng: &mut R, game: &mut Match, events: &mut Vector<GameEvent>) {
    let draw = StatDraw {
        stat: rng.draw_stat(),
        direction: rng.draw_direction(),
    };
    let number = game.round.number + 1;
    game.round = RoundState::drawn(number, draw);
    game.phase = Phase::ChooseStat;
    debug!(round = number, stat = %draw.stat, direction = %draw.direction, "round opened");
    events.push_back(GameEvent::StatDrawn { round: number, draw });
}

fn confirm(game: &mut Match, events: &mut Vector<GameEvent>, id: CardId) {
    debug!(round = game.round.number, card = %id, "active card confirmed");
    events.push_back(GameEvent::ActiveCardConfirmed {
        round: game.round.number,
        card: id.clone(),
    });
    game.round.active_card = Some(id);
}

fn first_duplicate(cards: &[Card]) -> Option<CardId> {
    let mut seen = FxHashSet::default();
    cards
        .iter()
        .find(|card| !seen.insert(&card.id))
        .map(|card| card.id.clone())
}
