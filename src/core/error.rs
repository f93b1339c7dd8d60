//! Error types.
//!
//! None of these are fatal. `DeckError` is absorbed by the round engine's
//! fallback deal, `TurnError` backs the boolean draft/confirm API.

use thiserror::Error;

use super::player::PlayerId;
use crate::cards::{CategoryId, QuestionId};
use crate::round::{RoundPhase, TurnStatus};

/// Deck draw failures.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DeckError {
    #[error("insufficient cards in category {category}: needed {needed}, found {available}")]
    InsufficientCards {
        category: CategoryId,
        needed: usize,
        available: usize,
    },
}

/// Session construction failures.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SetupError {
    #[error("a session needs at least one player")]
    EmptyRoster,

    #[error("duplicate player id: {0}")]
    DuplicatePlayer(PlayerId),
}

/// Rejected player actions. The engine state is untouched when one is returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TurnError {
    #[error("action not allowed while the round is {0:?}")]
    WrongPhase(RoundPhase),

    #[error("not {actual}'s turn")]
    NotYourTurn {
        expected: Option<PlayerId>,
        actual: PlayerId,
    },

    #[error("turn is {actual:?}, expected {expected:?}")]
    WrongTurnStatus {
        expected: TurnStatus,
        actual: TurnStatus,
    },

    #[error("card {0} is not available")]
    CardUnavailable(QuestionId),

    #[error("unknown player: {0}")]
    UnknownPlayer(PlayerId),
}

/// Card pool construction and import failures.
#[derive(Error, Debug)]
pub enum PoolError {
    #[error("invalid question batch: {0}")]
    Json(#[from] serde_json::Error),

    #[error("no JSON object found in generator response")]
    NoJsonObject,

    #[error("duplicate question id: {0}")]
    DuplicateQuestion(QuestionId),

    #[error("depth must be 1, 2 or 3, got {0}")]
    InvalidDepth(u8),
}
