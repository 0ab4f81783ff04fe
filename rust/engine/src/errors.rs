use thiserror::Error;

use crate::cards::{CardId, GameId, UserId};
use crate::game::GameStatus;

/// Every way a claim can be refused. These are expected, user-facing
/// outcomes: reported to the caller, never retried automatically, never a
/// panic.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ClaimError {
    #[error("game {game_id} is not accepting claims (status {status:?})")]
    GameNotActive { game_id: GameId, status: GameStatus },
    #[error("card {card_id} is not valid for this claim")]
    InvalidCard { card_id: CardId },
    #[error("game {game_id} is not valid for this claim")]
    InvalidGame { game_id: GameId },
    #[error("card {card_id} has already been credited this win")]
    AlreadyClaimed { card_id: CardId },
    #[error("card {card_id} has no fully marked row")]
    NotAQuine { card_id: CardId },
    #[error("card {card_id} is not fully marked")]
    NotABingo { card_id: CardId },
}

/// Rejected number draws.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CallError {
    #[error("number {number} is outside 1-90")]
    OutOfRange { number: u8 },
    #[error("number {number} has already been called")]
    AlreadyCalled { number: u8 },
    #[error("game is not active")]
    GameNotActive,
}

/// Failures of the external prize ledger. These signal corrupted upstream
/// data (an invariant violation in the system of record) and are surfaced as
/// hard errors, never swallowed.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LedgerError {
    #[error("unknown user {user_id}")]
    UnknownUser { user_id: UserId },
    #[error("ledger rejected the operation: {reason}")]
    Rejected { reason: String },
}

/// Invalid engine configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid configuration value: {0}")]
    InvalidValue(String),
}
