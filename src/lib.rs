//! # deep-talk
//!
//! Round and turn engine for a conversation-card party game.
//!
//! Players pick a topic category and draw question cards, either one card
//! shared by everyone or one card each, drafted in turn from a common pool.
//!
//! ## Design Principles
//!
//! 1. **Explicit ownership**: The caller owns a `GameEngine` and passes it
//!    around. There is no process-wide game instance.
//!
//! 2. **No repeats within an epoch**: Each category deck hands out every
//!    question once before reshuffling.
//!
//! 3. **Booleans at the edge**: `draft_card`/`confirm_turn` answer yes or no;
//!    the `try_` variants say why. A rejected action never mutates state.
//!
//! 4. **Injectable randomness**: Every shuffle and wildcard roll goes through
//!    a seedable `GameRng`.
//!
//! ## Modules
//!
//! - `core`: players, configuration, errors, RNG, session state
//! - `cards`: questions, categories, card pool (static or generated)
//! - `deck`: per-category draw-without-replacement
//! - `round`: round state and the draft protocol
//! - `solo`: single-player browsing with history and favorites

pub mod core;
pub mod cards;
pub mod deck;
pub mod round;
pub mod solo;

// Re-export commonly used types
pub use crate::core::{
    DeckError, EngineConfig, GameConfig, GameMode, GameRng, Player, PlayerId, PoolError,
    Session, SetupError, TurnError, WILDCARD_CATEGORY,
};

pub use crate::cards::{CardPool, Category, CategoryId, Depth, Question, QuestionId};

pub use crate::deck::{CategoryDeck, DeckManager};

pub use crate::round::{GameEngine, RoundPhase, RoundState, Snapshot, TurnStatus};

pub use crate::solo::SoloQueue;
