//! Error types for textual square and move parsing.
//!
//! Position decoding never fails; only the explicit text grammars for squares
//! and compact moves report errors.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChessError {
    /// Text that is not a file letter `a`-`h` followed by a rank digit `1`-`8`
    #[error("invalid square: {0:?}")]
    InvalidSquare(String),

    /// Text that is not an origin square followed by a destination square
    #[error("invalid move: {0:?}")]
    InvalidMove(String),
}

/// Result type alias for chess_core operations
pub type ChessResult<T> = Result<T, ChessError>;
