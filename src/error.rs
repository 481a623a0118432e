//! Engine error taxonomy
//!
//! None of these are fatal. Combat-level errors (`InsufficientResource`,
//! `InvalidAction`) are recovered inside the encounter; `RecordNotFound` is
//! recovered by the session; storage errors are reported to the shell.

use thiserror::Error;

/// Errors raised by the engine
#[derive(Debug, Error)]
pub enum GameError {
    #[error("not enough magic: needs {needed}, has {available}")]
    InsufficientResource { needed: u32, available: u32 },

    #[error("no save record for '{0}'")]
    RecordNotFound(String),

    #[error("unrecognized action '{0}'")]
    InvalidAction(String),

    #[error("storage failure: {0}")]
    StorageFailure(#[from] sqlx::Error),

    #[error("save record for '{name}' is unreadable: {reason}")]
    CorruptRecord { name: String, reason: String },

    #[error("invalid character name '{0}'")]
    InvalidName(String),

    #[error("not enough gold: costs {price}, has {available}")]
    InsufficientGold { price: u32, available: u32 },

    #[error("no item in inventory slot {0}")]
    ItemNotFound(usize),

    #[error("{0} is incapacitated")]
    Incapacitated(String),
}

impl GameError {
    /// Whether the engine recovers from this error without involving the caller
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            GameError::InsufficientResource { .. }
                | GameError::RecordNotFound(_)
                | GameError::InvalidAction(_)
        )
    }
}

/// Result alias for engine operations
pub type GameResult<T> = Result<T, GameError>;
