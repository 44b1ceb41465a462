//! Coordinator error types.

use thiserror::Error;

/// Errors surfaced to the requesting connection. Every other anomaly is
/// ignored silently.
#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum CoordinatorError {
    /// Empty, whitespace-only, or overlong display name
    #[error("Invalid username")]
    InvalidName,

    /// Display name held by another live connection
    #[error("Username already taken")]
    NameTaken,

    /// Connection already joined under some name
    #[error("Already joined as {0}")]
    AlreadyJoined(String),

    /// Not enough idle players to build a bracket
    #[error("Need at least {needed} players for tournament, have {available}")]
    InsufficientPlayers { needed: usize, available: usize },
}

/// Result type for coordinator operations
pub type CoordinatorResult<T> = Result<T, CoordinatorError>;
