use crate::{
    board::{Position, encode},
    error::ChessResult,
    types::*,
};

impl Position {
    /// The position after `mv`. Whatever stands on the destination is
    /// captured; legality is not checked. The side to move flips and the
    /// trailing fields are carried over unchanged.
    pub fn apply(&self, mv: Move) -> Position {
        let mut board = self.board;
        let moved = board.piece_at(mv.from);
        board.set_piece(mv.from, None);
        board.set_piece(mv.to, moved);

        Position {
            board,
            side_to_move: self.side_to_move.other(),
            trailing: self.trailing_or_default().to_string(),
        }
    }
}

/// Plays `from` -> `to` on position text and returns the successor text.
///
/// The mover is whatever stands on `from`; an empty origin just clears the
/// destination.
pub fn apply_move(text: &str, from: Square, to: Square) -> String {
    let mut pos = Position::from_fen(text);
    let moved = pos.board.piece_at(from);
    pos.board.set_piece(from, None);
    pos.board.set_piece(to, moved);
    encode(&pos, pos.trailing_or_default())
}

/// [`apply_move`] for a compact move such as `"e2e4"`.
pub fn apply_uci(text: &str, mv: &str) -> ChessResult<String> {
    let mv: Move = mv.parse()?;
    Ok(apply_move(text, mv.from, mv.to))
}

#[cfg(test)]
#[path = "apply_tests.rs"]
mod apply_tests;
