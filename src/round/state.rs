//! Round state: what has been dealt and who has picked what.
//!
//! ## Phases
//!
//! `Idle` → `Drafting` (draft mode) → `Answering`, or `Idle` → `Answering`
//! directly in shared mode. `Scoring` is reserved.
//!
//! ## Turn sub-status
//!
//! Within `Drafting`, the active player goes `Picking` → `Revealed`, then
//! confirming hands `Picking` to the next player.

use im::{HashMap as ImHashMap, Vector};
use serde::{Deserialize, Serialize};

use crate::cards::{Question, QuestionId};
use crate::core::{GameMode, PlayerId, TurnError};

/// Phase of the current round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RoundPhase {
    /// No round started yet.
    Idle,
    /// Players pick cards in turn.
    Drafting,
    /// Everyone answers their card.
    Answering,
    /// Reserved for a post-round summary.
    Scoring,
}

/// Sub-status of the active player's turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TurnStatus {
    /// Waiting for the active player to pick.
    Picking,
    /// Pick made and shown; waiting for the player to confirm.
    Revealed,
    /// Reserved.
    Done,
}

/// State of one round. Replaced wholesale by every `start_round`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RoundState {
    pub phase: RoundPhase,

    /// Cards dealt this round.
    pub deck: Vector<Question>,

    /// Cards still pickable (draft mode only).
    pub available_cards: Vector<Question>,

    /// Index into the session turn order.
    pub current_turn_index: usize,

    pub turn_status: TurnStatus,

    /// Player → question they picked or were given.
    pub picks: ImHashMap<PlayerId, QuestionId>,

    /// Player → finished answering.
    pub player_answers: ImHashMap<PlayerId, bool>,
}

impl Default for RoundState {
    fn default() -> Self {
        Self::idle()
    }
}

impl RoundState {
    /// State before the first round.
    #[must_use]
    pub fn idle() -> Self {
        Self {
            phase: RoundPhase::Idle,
            deck: Vector::new(),
            available_cards: Vector::new(),
            current_turn_index: 0,
            turn_status: TurnStatus::Picking,
            picks: ImHashMap::new(),
            player_answers: ImHashMap::new(),
        }
    }

    /// Fresh round state for a deal.
    #[must_use]
    pub fn dealt(mode: GameMode, deck: Vec<Question>) -> Self {
        let deck: Vector<Question> = deck.into_iter().collect();
        let (phase, available_cards) = match mode {
            GameMode::Draft => (RoundPhase::Drafting, deck.clone()),
            GameMode::Shared => (RoundPhase::Answering, Vector::new()),
        };

        Self {
            phase,
            deck,
            available_cards,
            ..Self::idle()
        }
    }

    /// Position of a card in `available_cards`.
    #[must_use]
    pub fn available_position(&self, card: &QuestionId) -> Option<usize> {
        self.available_cards.iter().position(|q| &q.id == card)
    }

    /// Check if a card can still be picked.
    #[must_use]
    pub fn is_available(&self, card: &QuestionId) -> bool {
        self.available_position(card).is_some()
    }

    /// The card a player holds this round.
    #[must_use]
    pub fn pick_of(&self, player: &PlayerId) -> Option<&QuestionId> {
        self.picks.get(player)
    }

    /// Check if a player has marked their answer done.
    #[must_use]
    pub fn has_answered(&self, player: &PlayerId) -> bool {
        self.player_answers.get(player).copied().unwrap_or(false)
    }

    pub(crate) fn expect_phase(&self, phase: RoundPhase) -> Result<(), TurnError> {
        if self.phase == phase {
            Ok(())
        } else {
            Err(TurnError::WrongPhase(self.phase))
        }
    }

    pub(crate) fn expect_status(&self, expected: TurnStatus) -> Result<(), TurnError> {
        if self.turn_status == expected {
            Ok(())
        } else {
            Err(TurnError::WrongTurnStatus {
                expected,
                actual: self.turn_status,
            })
        }
    }
}
