//! Round engine and per-round state.
//!
//! - `RoundState`: phase, dealt cards, pickable cards, picks
//! - `GameEngine`: starts rounds and runs the pick → reveal → confirm cycle

pub mod engine;
pub mod state;

pub use engine::{GameEngine, Snapshot};
pub use state::{RoundPhase, RoundState, TurnStatus};
