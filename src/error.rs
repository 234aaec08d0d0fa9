//! Error types for the board model and the application shell.

use std::io;
use thiserror::Error;

/// Rejected board operations. None of these are fatal: the board is left
/// exactly as it was and stays usable.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BoardError {
    /// The dragged task is not on the board.
    #[error("unknown task id: {0}")]
    UnknownTaskId(String),

    /// The drop target is not one of the board's statuses.
    #[error("invalid status '{0}', expected one of todo, in-progress, done, blocked")]
    InvalidStatus(String),

    /// Two tasks share an id.
    #[error("duplicate task id: {0}")]
    DuplicateTaskId(String),
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Board(#[from] BoardError),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Logging error: {0}")]
    Logging(String),
}

impl AppError {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn logging(msg: impl Into<String>) -> Self {
        Self::Logging(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
