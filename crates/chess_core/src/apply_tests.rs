use super::*;
use crate::board::START_FEN;

fn sq(s: &str) -> Square {
    s.parse().unwrap()
}

#[test]
fn test_apply_flips_side_and_keeps_trailing() {
    let next = apply_move(START_FEN, sq("e2"), sq("e4"));
    assert_eq!(
        next,
        "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq - 0 1"
    );

    let pos = Position::from_fen(&next);
    assert_eq!(pos.side_to_move, Color::Black);
    assert_eq!(pos.piece_at(sq("e2")), None);
    assert_eq!(
        pos.piece_at(sq("e4")),
        Some(Piece::new(Color::White, PieceKind::Pawn))
    );
}

#[test]
fn test_apply_black_move_gives_white_to_move() {
    let next = apply_move(
        "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq - 0 1",
        sq("e7"),
        sq("e5"),
    );
    assert_eq!(
        next,
        "rnbqkbnr/pppp1ppp/8/4p3/4P3/8/PPPP1PPP/RNBQKBNR w KQkq - 0 1"
    );
}

#[test]
fn test_apply_capture_replaces_piece() {
    let next = apply_move(
        "rnbqkbnr/ppp1pppp/8/3p4/4P3/8/PPPP1PPP/RNBQKBNR w KQkq - 0 2",
        sq("e4"),
        sq("d5"),
    );
    let pos = Position::from_fen(&next);
    assert_eq!(
        pos.piece_at(sq("d5")),
        Some(Piece::new(Color::White, PieceKind::Pawn))
    );
    assert_eq!(pos.board.pieces().count(), 31);
    assert!(next.ends_with(" b KQkq - 0 2"));
}

#[test]
fn test_apply_defaults_missing_trailing_fields() {
    assert_eq!(
        apply_move("4k3/8/8/8/8/8/4P3/4K3 w", sq("e2"), sq("e4")),
        "4k3/8/8/8/4P3/8/8/4K3 b KQkq - 0 1"
    );
    assert_eq!(
        apply_move("4k3/8/8/8/8/8/4P3/4K3", sq("e2"), sq("e3")),
        "4k3/8/8/8/8/4P3/8/4K3 b KQkq - 0 1"
    );
}

#[test]
fn test_apply_does_not_check_legality() {
    // A pawn jumping backwards is applied as asked
    let next = apply_move("4k3/8/8/8/4P3/8/8/4K3 w - - 0 1", sq("e4"), sq("e1"));
    assert_eq!(next, "4k3/8/8/8/8/8/8/4P3 b - - 0 1");
}

#[test]
fn test_apply_uci() {
    assert_eq!(
        apply_uci(START_FEN, "g1f3").unwrap(),
        "rnbqkbnr/pppppppp/8/8/8/5N2/PPPPPPPP/RNBQKB1R b KQkq - 0 1"
    );
    assert!(matches!(
        apply_uci(START_FEN, "g1"),
        Err(crate::error::ChessError::InvalidMove(_))
    ));
}

#[test]
fn test_position_apply_matches_text_apply() {
    let pos = Position::startpos();
    let mv = Move::new(sq("b1"), sq("c3"));
    assert_eq!(
        pos.apply(mv).to_fen(),
        apply_move(START_FEN, mv.from, mv.to)
    );
    // The original position is untouched
    assert_eq!(pos, Position::startpos());
}
