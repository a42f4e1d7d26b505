use crate::types::*;

/// Trailing fields written when the source text carried none.
pub const DEFAULT_TRAILING: &str = "KQkq - 0 1";

pub const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// An 8x8 grid of optional pieces indexed by (rank, file).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Board {
    squares: [[Option<Piece>; 8]; 8],
}

impl Board {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.squares[sq.rank as usize][sq.file as usize]
    }

    pub fn set_piece(&mut self, sq: Square, pc: Option<Piece>) {
        self.squares[sq.rank as usize][sq.file as usize] = pc;
    }

    /// Occupied squares in position-text order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::ALL
            .iter()
            .filter_map(|&sq| self.piece_at(sq).map(|pc| (sq, pc)))
    }

    pub fn king_square(&self, c: Color) -> Option<Square> {
        self.pieces()
            .find(|(_, pc)| pc.color == c && pc.kind == PieceKind::King)
            .map(|(sq, _)| sq)
    }

    pub fn is_empty(&self) -> bool {
        self.pieces().next().is_none()
    }

    /// Run-length encoded placement text, top rank first.
    pub fn placement(&self) -> String {
        let mut out = String::with_capacity(72);
        for rank in 0..8u8 {
            if rank > 0 {
                out.push('/');
            }
            let mut empty = 0u8;
            for file in 0..8u8 {
                match self.squares[rank as usize][file as usize] {
                    None => empty += 1,
                    Some(pc) => {
                        if empty > 0 {
                            out.push((b'0' + empty) as char);
                            empty = 0;
                        }
                        out.push(pc.fen_char());
                    }
                }
            }
            if empty > 0 {
                out.push((b'0' + empty) as char);
            }
        }
        out
    }

    /// Best-effort placement parser. A placement that does not have exactly
    /// eight ranks gives an empty board; unknown characters occupy one file as
    /// an empty square and anything past the h-file is dropped.
    pub fn from_placement(text: &str) -> Board {
        let mut board = Board::empty();
        let ranks: Vec<&str> = text.split('/').collect();
        if ranks.len() != 8 {
            tracing::debug!(ranks = ranks.len(), "placement is not eight ranks, using empty board");
            return board;
        }

        for (rank, row) in ranks.iter().enumerate() {
            let mut file = 0u8;
            for ch in row.chars() {
                if file >= 8 {
                    tracing::debug!(rank, row, "rank descriptor overflows the h-file");
                    break;
                }
                match ch {
                    '1'..='8' => file += ch as u8 - b'0',
                    _ => {
                        match Piece::from_fen_char(ch) {
                            Some(pc) => board.squares[rank][file as usize] = Some(pc),
                            None => tracing::debug!(%ch, "skipping unrecognised placement character"),
                        }
                        file += 1;
                    }
                }
            }
        }
        board
    }
}

/// A decoded position. Castling rights, en-passant target and move counters
/// are not modelled; they are kept verbatim in `trailing`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Position {
    pub board: Board,
    pub side_to_move: Color,
    pub trailing: String,
}

impl Position {
    pub fn startpos() -> Self {
        Position::from_fen(START_FEN)
    }

    /// Decodes position text. Never fails: empty or malformed input gives an
    /// empty board, and any side-to-move field other than `b` means White.
    pub fn from_fen(text: &str) -> Self {
        let mut fields = text.split_whitespace();
        let board = fields.next().map(Board::from_placement).unwrap_or_default();
        let side_to_move = match fields.next() {
            Some("b") => Color::Black,
            _ => Color::White,
        };
        let trailing = fields.collect::<Vec<_>>().join(" ");

        Position {
            board,
            side_to_move,
            trailing,
        }
    }

    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.board.piece_at(sq)
    }

    pub fn placement(&self) -> String {
        self.board.placement()
    }

    /// Trailing fields, or the default set when none were supplied.
    pub fn trailing_or_default(&self) -> &str {
        if self.trailing.is_empty() {
            DEFAULT_TRAILING
        } else {
            &self.trailing
        }
    }

    /// Encodes this position as-is, keeping its side to move.
    pub fn to_fen(&self) -> String {
        format!(
            "{} {} {}",
            self.placement(),
            self.side_to_move.fen_char(),
            self.trailing_or_default()
        )
    }
}

/// Encodes the placement of `pos` followed by the side that moves NEXT, i.e.
/// the opposite of `pos.side_to_move`, and the given trailing fields verbatim.
/// This is the text of the position after `pos`'s mover has played.
pub fn encode(pos: &Position, trailing: &str) -> String {
    let mut out = pos.placement();
    out.push(' ');
    out.push(pos.side_to_move.other().fen_char());
    if !trailing.is_empty() {
        out.push(' ');
        out.push_str(trailing);
    }
    out
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
