//! Errors surfaced by the game's collaborators.

use thiserror::Error;

/// Errors that can occur outside the simulation itself.
#[derive(Error, Debug)]
pub enum GameError {
    /// Reading or writing a file failed.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// The settings file is not valid JSON for `Settings`.
    #[error("invalid settings file: {0}")]
    Settings(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, GameError>;
