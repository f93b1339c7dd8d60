//! Round engine: dealing, wildcard injection and the draft protocol.
//!
//! The caller owns one `GameEngine` per game and drives it with
//! `start_round`, `draft_card` and `confirm_turn`. Every call runs to
//! completion synchronously; there is no internal locking, so calls must
//! be serialized by the caller.
//!
//! ## Draft protocol
//!
//! ```text
//! PICKING --draft_card--> REVEALED --confirm_turn--> next player's PICKING
//!                                              \--> round ANSWERING (last player)
//! ```
//!
//! A rejected action leaves the engine untouched: all checks run before
//! any write.

use serde::Serialize;

use super::state::{RoundPhase, RoundState, TurnStatus};
use crate::cards::{CardPool, Question, QuestionId};
use crate::core::{
    DeckError, EngineConfig, GameConfig, GameMode, GameRng, Player, PlayerId, Session, SetupError,
    TurnError,
};

/// Read-only copy of the engine state for a presentation layer.
///
/// Cloning is cheap: the `im` collections inside share structure with the
/// live engine.
#[derive(Clone, Debug, Serialize)]
pub struct Snapshot {
    pub session: Session,
    pub round: RoundState,
}

/// Owner of one game's session and round state.
///
/// ## Example
///
/// ```
/// use deep_talk::cards::{CardPool, Depth, Question};
/// use deep_talk::core::{GameConfig, Player};
/// use deep_talk::round::{GameEngine, RoundPhase};
///
/// let pool = CardPool::new((0..10).map(|i| {
///     Question::new(format!("fn-{i}").as_str(), "fun", "?", Depth::Light)
/// }))
/// .unwrap();
///
/// let mut engine = GameEngine::new(
///     GameConfig::shared("fun", 2),
///     vec![Player::new("a", "Ayu"), Player::new("b", "Bima")],
///     pool,
/// )
/// .unwrap();
///
/// let snapshot = engine.start_round();
/// assert_eq!(snapshot.round.phase, RoundPhase::Answering);
/// assert_eq!(snapshot.round.picks.len(), 2);
/// ```
#[derive(Clone, Debug)]
pub struct GameEngine {
    pool: CardPool,
    settings: EngineConfig,
    session: Session,
    round: RoundState,
    rng: GameRng,
}

impl GameEngine {
    /// Create an engine seeded from OS entropy.
    pub fn new(config: GameConfig, players: Vec<Player>, pool: CardPool) -> Result<Self, SetupError> {
        Self::with_rng(config, players, pool, GameRng::from_entropy())
    }

    /// Create an engine with an injected random source.
    pub fn with_rng(
        config: GameConfig,
        players: Vec<Player>,
        pool: CardPool,
        rng: GameRng,
    ) -> Result<Self, SetupError> {
        Ok(Self {
            pool,
            settings: EngineConfig::default(),
            session: Session::new(config, players)?,
            round: RoundState::idle(),
            rng,
        })
    }

    /// Replace the engine tunables (builder pattern).
    #[must_use]
    pub fn with_settings(mut self, settings: EngineConfig) -> Self {
        self.settings = settings;
        self
    }

    // === Accessors ===

    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    #[must_use]
    pub fn round(&self) -> &RoundState {
        &self.round
    }

    #[must_use]
    pub fn pool(&self) -> &CardPool {
        &self.pool
    }

    #[must_use]
    pub fn settings(&self) -> &EngineConfig {
        &self.settings
    }

    /// Copy of the current session and round.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            session: self.session.clone(),
            round: self.round.clone(),
        }
    }

    /// The player whose turn it is, if any.
    #[must_use]
    pub fn active_player(&self) -> Option<&PlayerId> {
        self.session.player_at_turn(self.round.current_turn_index)
    }

    // === Round Management ===

    /// Start a new round, replacing the previous round state.
    ///
    /// Never fails: if the deck can't supply the exact deal, a shuffled
    /// slice of the configured category is dealt instead, which may be
    /// short.
    pub fn start_round(&mut self) -> Snapshot {
        self.session.round_count += 1;
        let mode = self.session.config.mode;

        let mut turn_order: Vec<PlayerId> = self.session.player_ids().cloned().collect();
        if mode == GameMode::Draft {
            self.rng.shuffle(&mut turn_order);
        }
        self.session.turn_order = turn_order.into_iter().collect();

        let cards_needed = match mode {
            GameMode::Draft => self.session.player_count(),
            GameMode::Shared => 1,
        };

        let include_wildcard = self.roll_wildcard(mode);
        let deck = self.deal(cards_needed, include_wildcard);

        tracing::debug!(
            target: "deep_talk::round",
            round = self.session.round_count,
            mode = %mode,
            needed = cards_needed,
            dealt = deck.len(),
            wildcard = include_wildcard,
            "started round"
        );

        self.round = RoundState::dealt(mode, deck);

        if mode == GameMode::Shared {
            if let Some(card) = self.round.deck.front().map(|q| q.id.clone()) {
                for id in self.session.player_ids() {
                    self.round.picks.insert(id.clone(), card.clone());
                }
            }
        }

        self.snapshot()
    }

    /// Wildcards are never mixed into a deal from the wildcard category itself.
    fn roll_wildcard(&mut self, mode: GameMode) -> bool {
        if self.session.config.category_id == self.settings.wildcard_category {
            return false;
        }
        self.rng.gen_bool(self.settings.wildcard_chance(mode))
    }

    fn deal(&mut self, cards_needed: usize, include_wildcard: bool) -> Vec<Question> {
        match self.try_deal(cards_needed, include_wildcard) {
            Ok(deck) => deck,
            Err(err) => {
                let category = &self.session.config.category_id;
                tracing::warn!(
                    target: "deep_talk::round",
                    category = %category,
                    needed = cards_needed,
                    error = %err,
                    "deal failed; falling back to a shuffled category slice"
                );
                let mut fallback = self.rng.shuffled(self.pool.in_category(category).cloned());
                fallback.truncate(cards_needed);
                fallback
            }
        }
    }

    fn try_deal(&mut self, cards_needed: usize, include_wildcard: bool) -> Result<Vec<Question>, DeckError> {
        let category = &self.session.config.category_id;
        let decks = &mut self.session.decks;

        if !include_wildcard {
            return decks.draw_unique(&self.pool, category, cards_needed, &mut self.rng);
        }

        let normal_count = cards_needed.saturating_sub(1);
        let mut cards = if normal_count > 0 {
            decks.draw_unique(&self.pool, category, normal_count, &mut self.rng)?
        } else {
            Vec::new()
        };
        let wildcard = decks.draw_unique(&self.pool, &self.settings.wildcard_category, 1, &mut self.rng)?;
        cards.extend(wildcard);
        self.rng.shuffle(&mut cards);
        Ok(cards)
    }

    /// Return to the pre-game state: no rounds, no decks, `Idle` round.
    pub fn reset(&mut self) {
        self.session.reset();
        self.round = RoundState::idle();
    }

    // === Draft Logic ===

    /// Active player picks a card from the available pool.
    ///
    /// Moves the turn from `Picking` to `Revealed`.
    pub fn try_draft_card(&mut self, user: &PlayerId, card: &QuestionId) -> Result<(), TurnError> {
        self.round.expect_phase(RoundPhase::Drafting)?;
        self.expect_active(user)?;
        self.round.expect_status(TurnStatus::Picking)?;
        let position = self
            .round
            .available_position(card)
            .ok_or_else(|| TurnError::CardUnavailable(card.clone()))?;

        self.round.picks.insert(user.clone(), card.clone());
        self.round.available_cards.remove(position);
        self.round.turn_status = TurnStatus::Revealed;
        Ok(())
    }

    /// Boolean form of [`try_draft_card`](Self::try_draft_card).
    pub fn draft_card(&mut self, user: &PlayerId, card: &QuestionId) -> bool {
        self.try_draft_card(user, card).is_ok()
    }

    /// Active player acknowledges their revealed card.
    ///
    /// Passes the turn on, or ends the draft after the last player.
    pub fn try_confirm_turn(&mut self, user: &PlayerId) -> Result<(), TurnError> {
        self.expect_active(user)?;
        self.round.expect_status(TurnStatus::Revealed)?;

        self.round.current_turn_index += 1;
        if self.round.current_turn_index >= self.session.player_count() {
            self.round.phase = RoundPhase::Answering;
        } else {
            self.round.turn_status = TurnStatus::Picking;
        }
        Ok(())
    }

    /// Boolean form of [`try_confirm_turn`](Self::try_confirm_turn).
    pub fn confirm_turn(&mut self, user: &PlayerId) -> bool {
        self.try_confirm_turn(user).is_ok()
    }

    fn expect_active(&self, user: &PlayerId) -> Result<(), TurnError> {
        let active = self.active_player();
        if active == Some(user) {
            Ok(())
        } else {
            Err(TurnError::NotYourTurn {
                expected: active.cloned(),
                actual: user.clone(),
            })
        }
    }

    // === Answering ===

    /// Record that a player finished answering this round.
    pub fn mark_answered(&mut self, user: &PlayerId) -> Result<(), TurnError> {
        self.round.expect_phase(RoundPhase::Answering)?;
        if !self.session.has_player(user) {
            return Err(TurnError::UnknownPlayer(user.clone()));
        }
        self.round.player_answers.insert(user.clone(), true);
        Ok(())
    }

    /// Check if every player has answered this round.
    #[must_use]
    pub fn all_answered(&self) -> bool {
        self.round.phase == RoundPhase::Answering
            && self.session.player_ids().all(|id| self.round.has_answered(id))
    }
}
