//! Direction tables and the attack test used to keep the mover's king safe.
//!
//! Squares are walked ray by ray on a mailbox board; there are no
//! precomputed attack sets.

use serde::{Deserialize, Serialize};

use crate::{board::Board, types::*};

/// (rank, file) steps of a knight jump.
pub const KNIGHT_DELTAS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

pub const ORTHOGONALS: [(i8, i8); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];

pub const DIAGONALS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

/// Adjacent squares; also the union of the slider directions.
pub const KING_DELTAS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Knobs of the attack test.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Rules {
    /// Treat an enemy king standing next to a square as attacking it. Off by
    /// default, so kings may step next to each other.
    pub king_contact: bool,
}

impl Rules {
    pub fn with_king_contact() -> Self {
        Self { king_contact: true }
    }
}

/// Whether any piece of colour `by` could move to `target` in one step.
pub fn is_square_attacked(board: &Board, target: Square, by: Color, rules: &Rules) -> bool {
    // A pawn attacks the forward diagonals, so look one row behind its direction.
    let behind = -by.forward();
    for df in [-1, 1] {
        if let Some(s) = target.offset(behind, df)
            && board.piece_at(s) == Some(Piece::new(by, PieceKind::Pawn))
        {
            return true;
        }
    }

    for (dr, df) in KNIGHT_DELTAS {
        if let Some(s) = target.offset(dr, df)
            && board.piece_at(s) == Some(Piece::new(by, PieceKind::Knight))
        {
            return true;
        }
    }

    for (dr, df) in KING_DELTAS {
        let diagonal = dr != 0 && df != 0;
        let mut distance = 1;
        let mut cur = target.offset(dr, df);
        while let Some(s) = cur {
            if let Some(pc) = board.piece_at(s) {
                if pc.color == by {
                    let hit = match pc.kind {
                        PieceKind::Queen => true,
                        PieceKind::Bishop => diagonal,
                        PieceKind::Rook => !diagonal,
                        PieceKind::King => rules.king_contact && distance == 1,
                        _ => false,
                    };
                    if hit {
                        return true;
                    }
                }
                break;
            }
            distance += 1;
            cur = s.offset(dr, df);
        }
    }

    false
}

/// Whether `c`'s king is attacked. A board without that king is never in check.
pub fn in_check(board: &Board, c: Color, rules: &Rules) -> bool {
    match board.king_square(c) {
        Some(ksq) => is_square_attacked(board, ksq, c.other(), rules),
        None => false,
    }
}

#[cfg(test)]
#[path = "attacks_tests.rs"]
mod attacks_tests;
