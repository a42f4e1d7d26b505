//! Error types for the puzzle trainer

use chess_core::{ChessError, Square};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TrainerError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse puzzle data: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to parse config: {0}")]
    Config(#[from] toml::de::Error),

    #[error(transparent)]
    Chess(#[from] ChessError),

    /// Puzzle without any solution moves
    #[error("puzzle {0} has an empty solution")]
    EmptySolution(String),

    /// A move was submitted while the session was not waiting for the player
    #[error("it is not the player's turn")]
    NotPlayersTurn,

    /// Destination is not among the legal destinations of the origin piece
    #[error("illegal move {from}{to}")]
    IllegalMove { from: Square, to: Square },

    #[error("no puzzle with id {0}")]
    UnknownPuzzle(String),

    #[error("puzzle set is empty")]
    NoPuzzles,
}

/// Result type alias for puzzle trainer operations
pub type TrainerResult<T> = Result<T, TrainerError>;
