use crate::{
    attacks::{DIAGONALS, KING_DELTAS, KNIGHT_DELTAS, ORTHOGONALS, Rules, in_check},
    board::{Board, Position},
    types::*,
};

/// Legal destinations of the piece on `from`, using the default [`Rules`].
///
/// An empty square yields no destinations. The colour of the piece decides
/// who moves; the position's side to move is not consulted.
pub fn legal_destinations(pos: &Position, from: Square) -> Vec<Square> {
    legal_destinations_with(pos, from, &Rules::default())
}

/// Legal destinations of the piece on `from` under `rules`.
pub fn legal_destinations_with(pos: &Position, from: Square, rules: &Rules) -> Vec<Square> {
    let Some(pc) = pos.piece_at(from) else {
        return Vec::new();
    };

    let mut out = pseudo_destinations(&pos.board, from);
    out.retain(|&to| {
        // Simulate on an owned scratch copy; the real board is never touched.
        let mut scratch = pos.board;
        scratch.set_piece(from, None);
        scratch.set_piece(to, Some(pc));
        let exposed = in_check(&scratch, pc.color, rules);
        if exposed {
            tracing::trace!(%from, %to, "dropping move that leaves the king attacked");
        }
        !exposed
    });
    out
}

/// Every legal move for the side to move, with mover and captured piece filled in.
pub fn legal_moves(pos: &Position) -> Vec<Move> {
    legal_moves_with(pos, &Rules::default())
}

pub fn legal_moves_with(pos: &Position, rules: &Rules) -> Vec<Move> {
    let mut out = Vec::with_capacity(64);
    for (from, pc) in pos.board.pieces() {
        if pc.color != pos.side_to_move {
            continue;
        }
        for to in legal_destinations_with(pos, from, rules) {
            out.push(Move {
                from,
                to,
                piece: Some(pc),
                captured: pos.piece_at(to),
            });
        }
    }
    out
}

/// Destinations allowed by the movement pattern and blockers of the piece on
/// `from`, ignoring king safety.
pub fn pseudo_destinations(board: &Board, from: Square) -> Vec<Square> {
    let mut out = Vec::with_capacity(28);
    let Some(pc) = board.piece_at(from) else {
        return out;
    };
    match pc.kind {
        PieceKind::Pawn => gen_pawn(board, from, pc.color, &mut out),
        PieceKind::Knight => gen_steps(board, from, pc.color, &KNIGHT_DELTAS, &mut out),
        PieceKind::Bishop => gen_slider(board, from, pc.color, &DIAGONALS, &mut out),
        PieceKind::Rook => gen_slider(board, from, pc.color, &ORTHOGONALS, &mut out),
        PieceKind::Queen => {
            gen_slider(board, from, pc.color, &ORTHOGONALS, &mut out);
            gen_slider(board, from, pc.color, &DIAGONALS, &mut out);
        }
        PieceKind::King => gen_steps(board, from, pc.color, &KING_DELTAS, &mut out),
    }
    out
}

fn gen_pawn(board: &Board, from: Square, c: Color, out: &mut Vec<Square>) {
    let dir = c.forward();

    // forward 1, then forward 2 from the home rank
    if let Some(to) = from.offset(dir, 0)
        && board.piece_at(to).is_none()
    {
        out.push(to);
        if from.rank == c.pawn_home_rank()
            && let Some(to2) = to.offset(dir, 0)
            && board.piece_at(to2).is_none()
        {
            out.push(to2);
        }
    }

    // captures
    for df in [-1, 1] {
        if let Some(to) = from.offset(dir, df)
            && let Some(tpc) = board.piece_at(to)
            && tpc.color != c
        {
            out.push(to);
        }
    }
}

fn gen_steps(board: &Board, from: Square, c: Color, deltas: &[(i8, i8)], out: &mut Vec<Square>) {
    for &(dr, df) in deltas {
        if let Some(to) = from.offset(dr, df) {
            match board.piece_at(to) {
                None => out.push(to),
                Some(pc) if pc.color != c => out.push(to),
                _ => {}
            }
        }
    }
}

fn gen_slider(board: &Board, from: Square, c: Color, dirs: &[(i8, i8)], out: &mut Vec<Square>) {
    for &(dr, df) in dirs {
        let mut cur = from.offset(dr, df);
        while let Some(to) = cur {
            match board.piece_at(to) {
                None => out.push(to),
                Some(pc) if pc.color != c => {
                    out.push(to);
                    break;
                }
                _ => break,
            }
            cur = to.offset(dr, df);
        }
    }
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
