//! Core session types: players, configuration, errors, RNG, session state.
//!
//! These are the building blocks the deck manager and round engine share.

pub mod player;
pub mod rng;
pub mod config;
pub mod error;
pub mod session;

pub use player::{Player, PlayerId};
pub use rng::GameRng;
pub use config::{EngineConfig, GameConfig, GameMode, WILDCARD_CATEGORY};
pub use error::{DeckError, PoolError, SetupError, TurnError};
pub use session::Session;
