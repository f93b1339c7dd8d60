//! Session state: everything that lives for the whole game.
//!
//! ## Session
//!
//! - Config and roster (fixed at setup)
//! - Turn order (recomputed every round)
//! - Round counter
//! - Per-category decks
//!
//! The round engine is the only writer. Collections use `im` so a
//! snapshot clone shares structure with the live session.

use im::Vector;
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

use super::config::GameConfig;
use super::error::SetupError;
use super::player::{Player, PlayerId};
use crate::deck::DeckManager;

/// Durable-for-the-game record of players, turn order and decks.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Session {
    /// Session identifier (`session-<unix millis>`).
    pub id: String,

    pub config: GameConfig,

    /// Roster in setup order.
    pub players: Vector<Player>,

    /// Player IDs in acting order for the current round.
    pub turn_order: Vector<PlayerId>,

    /// Rounds started so far.
    pub round_count: u32,

    /// Category decks, created lazily on first draw.
    pub decks: DeckManager,
}

impl Session {
    /// Create a session for a roster.
    ///
    /// Fails on an empty roster or a repeated player ID.
    pub fn new(config: GameConfig, players: Vec<Player>) -> Result<Self, SetupError> {
        if players.is_empty() {
            return Err(SetupError::EmptyRoster);
        }

        for (i, player) in players.iter().enumerate() {
            if players[..i].iter().any(|p| p.id == player.id) {
                return Err(SetupError::DuplicatePlayer(player.id.clone()));
            }
        }

        Ok(Self {
            id: new_session_id(),
            config,
            players: players.into_iter().collect(),
            turn_order: Vector::new(),
            round_count: 0,
            decks: DeckManager::new(),
        })
    }

    /// Number of players on the roster.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// Iterate over roster player IDs in setup order.
    pub fn player_ids(&self) -> impl Iterator<Item = &PlayerId> {
        self.players.iter().map(|p| &p.id)
    }

    /// Check if a player is on the roster.
    #[must_use]
    pub fn has_player(&self, id: &PlayerId) -> bool {
        self.players.iter().any(|p| &p.id == id)
    }

    /// Look up a roster entry.
    #[must_use]
    pub fn player(&self, id: &PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| &p.id == id)
    }

    /// The player at a position in the current turn order.
    #[must_use]
    pub fn player_at_turn(&self, turn_index: usize) -> Option<&PlayerId> {
        self.turn_order.get(turn_index)
    }

    /// Forget turn order, round count and decks. The roster and config stay.
    pub fn reset(&mut self) {
        self.turn_order.clear();
        self.round_count = 0;
        self.decks.clear();
    }
}

fn new_session_id() -> String {
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or(0);
    format!("session-{millis}")
}
