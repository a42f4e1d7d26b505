//! Plain text board diagrams for the terminal

use chess_core::{Position, Square};

/// Draws the board with coordinates. Unflipped boards have rank 8 at the
/// top; flipped ones show Black's view with rank 1 at the top and the h-file
/// on the left.
pub fn render_board(pos: &Position, flipped: bool) -> String {
    let order: Vec<u8> = if flipped {
        (0..8).rev().collect()
    } else {
        (0..8).collect()
    };

    let mut out = String::new();
    for &rank in &order {
        out.push((b'8' - rank) as char);
        out.push(' ');
        for &file in &order {
            let ch = Square::new(rank, file)
                .and_then(|sq| pos.piece_at(sq))
                .map(|pc| pc.fen_char())
                .unwrap_or('.');
            out.push(' ');
            out.push(ch);
        }
        out.push('\n');
    }
    out.push_str("  ");
    for &file in &order {
        out.push(' ');
        out.push((b'a' + file) as char);
    }
    out.push('\n');
    out
}
