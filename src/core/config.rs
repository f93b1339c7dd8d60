//! Game configuration types.
//!
//! Callers configure a session by providing:
//! - `GameConfig`: mode, target category and player count
//! - `EngineConfig`: tunables for wildcard injection
//!
//! Both are plain serde structs so a host can load them from JSON.

use serde::{Deserialize, Serialize};

use crate::cards::CategoryId;

/// Conventional name of the cross-cutting wildcard category.
pub const WILDCARD_CATEGORY: &str = "wildcard";

/// How cards are handed out each round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GameMode {
    /// One card per round, shown to everyone.
    Shared,
    /// One card per player, picked in turn from a shared pool.
    Draft,
}

impl std::fmt::Display for GameMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameMode::Shared => f.write_str("SHARED"),
            GameMode::Draft => f.write_str("DRAFT"),
        }
    }
}

/// Session setup chosen by the players.
///
/// `player_count` is informational. Turn arithmetic always uses the
/// actual roster length.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub mode: GameMode,
    pub category_id: CategoryId,
    pub player_count: usize,
}

impl GameConfig {
    /// Create a new game configuration.
    #[must_use]
    pub fn new(mode: GameMode, category_id: impl Into<CategoryId>, player_count: usize) -> Self {
        Self {
            mode,
            category_id: category_id.into(),
            player_count,
        }
    }

    /// Shorthand for a shared-mode game.
    #[must_use]
    pub fn shared(category_id: impl Into<CategoryId>, player_count: usize) -> Self {
        Self::new(GameMode::Shared, category_id, player_count)
    }

    /// Shorthand for a draft-mode game.
    #[must_use]
    pub fn draft(category_id: impl Into<CategoryId>, player_count: usize) -> Self {
        Self::new(GameMode::Draft, category_id, player_count)
    }
}

/// Engine tunables.
///
/// ## Example
///
/// ```
/// use deep_talk::core::{EngineConfig, GameMode};
///
/// let settings = EngineConfig::default().without_wildcards();
/// assert_eq!(settings.wildcard_chance(GameMode::Draft), 0.0);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Category wildcards are drawn from.
    pub wildcard_category: CategoryId,

    /// Chance of mixing a wildcard into a draft deal.
    pub draft_wildcard_chance: f64,

    /// Chance of a shared round's card being a wildcard.
    pub shared_wildcard_chance: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            wildcard_category: CategoryId::new(WILDCARD_CATEGORY),
            draft_wildcard_chance: 0.25,
            shared_wildcard_chance: 0.15,
        }
    }
}

impl EngineConfig {
    /// Draw wildcards from a different category.
    #[must_use]
    pub fn with_wildcard_category(mut self, category: impl Into<CategoryId>) -> Self {
        self.wildcard_category = category.into();
        self
    }

    /// Set the draft-mode wildcard chance.
    #[must_use]
    pub fn with_draft_wildcard_chance(mut self, chance: f64) -> Self {
        self.draft_wildcard_chance = chance;
        self
    }

    /// Set the shared-mode wildcard chance.
    #[must_use]
    pub fn with_shared_wildcard_chance(mut self, chance: f64) -> Self {
        self.shared_wildcard_chance = chance;
        self
    }

    /// Never inject wildcards.
    #[must_use]
    pub fn without_wildcards(self) -> Self {
        self.with_draft_wildcard_chance(0.0)
            .with_shared_wildcard_chance(0.0)
    }

    /// Wildcard chance for a mode, clamped to `[0, 1]`.
    #[must_use]
    pub fn wildcard_chance(&self, mode: GameMode) -> f64 {
        let chance = match mode {
            GameMode::Draft => self.draft_wildcard_chance,
            GameMode::Shared => self.shared_wildcard_chance,
        };
        if chance.is_nan() {
            0.0
        } else {
            chance.clamp(0.0, 1.0)
        }
    }
}
