use super::*;

fn sq(s: &str) -> Square {
    s.parse().unwrap()
}

fn dests(fen: &str, from: &str) -> Vec<String> {
    dests_with(fen, from, &Rules::default())
}

fn dests_with(fen: &str, from: &str, rules: &Rules) -> Vec<String> {
    let pos = Position::from_fen(fen);
    let mut out: Vec<String> = legal_destinations_with(&pos, sq(from), rules)
        .into_iter()
        .map(|s| s.to_string())
        .collect();
    out.sort();
    out
}

const START: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

#[test]
fn test_startpos_pawn_and_knight() {
    assert_eq!(dests(START, "e2"), ["e3", "e4"]);
    assert_eq!(dests(START, "b1"), ["a3", "c3"]);
    assert_eq!(dests(START, "e7"), ["e5", "e6"]);
    assert!(dests(START, "a1").is_empty());
    assert!(dests(START, "e1").is_empty());
}

#[test]
fn test_startpos_moves() {
    let pos = Position::startpos();
    // Starting position has 20 legal moves
    assert_eq!(legal_moves(&pos).len(), 20);
}

#[test]
fn test_empty_square_has_no_destinations() {
    let pos = Position::startpos();
    for s in ["e4", "a3", "h5", "d6"] {
        assert!(legal_destinations(&pos, sq(s)).is_empty());
    }
    let empty = Position::from_fen("");
    assert!(Square::ALL
        .iter()
        .all(|&s| legal_destinations(&empty, s).is_empty()));
}

#[test]
fn test_pawn_capture() {
    let fen = "rnbqkbnr/ppp1pppp/8/3p4/4P3/8/PPPP1PPP/RNBQKBNR w KQkq - 0 2";
    assert_eq!(dests(fen, "e4"), ["d5", "e5"]);
    // Black pawn on d5 can take back on e4
    assert_eq!(dests(fen, "d5"), ["d4", "e4"]);
}

#[test]
fn test_pawn_blocked() {
    assert!(dests("4k3/8/8/8/8/4n3/4P3/4K3 w - - 0 1", "e2").is_empty());
    assert_eq!(dests("4k3/8/8/8/4n3/8/4P3/4K3 w - - 0 1", "e2"), ["e3"]);
    // No double step away from the home rank
    assert_eq!(dests("4k3/8/8/8/8/4P3/8/4K3 w - - 0 1", "e3"), ["e4"]);
}

#[test]
fn test_pawn_does_not_capture_forward_or_own_colour() {
    let fen = "4k3/8/8/8/3Pp3/4P3/8/4K3 w - - 0 1";
    // e3 pawn: e4 is occupied, d4 is white, f4 empty
    assert!(dests(fen, "e3").is_empty());
}

#[test]
fn test_knight_in_corner() {
    assert_eq!(dests("4k3/8/8/8/8/8/8/N3K3 w - - 0 1", "a1"), ["b3", "c2"]);
}

#[test]
fn test_slider_captures_and_stops() {
    // Rook on d4: own pawn on d6, enemy knight on f4
    let fen = "4k3/8/3P4/8/3R1n2/8/8/4K3 w - - 0 1";
    assert_eq!(
        dests(fen, "d4"),
        ["a4", "b4", "c4", "d1", "d2", "d3", "d5", "e4", "f4"]
    );
}

#[test]
fn test_queen_combines_rook_and_bishop() {
    let pos = Position::from_fen("7k/8/8/8/3Q4/8/8/K7 w - - 0 1");
    // 14 orthogonal + 13 diagonal squares, minus a1 held by the own king
    assert_eq!(legal_destinations(&pos, sq("d4")).len(), 26);
}

#[test]
fn test_pinned_bishop_has_no_moves() {
    // Bishop on e2 is pinned to the king by the rook on e8
    assert!(dests("4r2k/8/8/8/8/8/4B3/4K3 w - - 0 1", "e2").is_empty());
}

#[test]
fn test_pinned_rook_stays_on_the_pin_line() {
    assert_eq!(
        dests("4r2k/8/8/8/8/8/4R3/4K3 w - - 0 1", "e2"),
        ["e3", "e4", "e5", "e6", "e7", "e8"]
    );
}

#[test]
fn test_check_must_be_blocked() {
    // King on e1 in check from e8; rook on a4 can only interpose on e4
    assert_eq!(dests("4r2k/8/8/8/R7/8/8/4K3 w - - 0 1", "a4"), ["e4"]);
}

#[test]
fn test_king_avoids_attacked_squares() {
    // Black rook sweeps the second rank
    assert_eq!(dests("4k3/8/8/8/8/8/r7/4K3 w - - 0 1", "e1"), ["d1", "f1"]);
}

#[test]
fn test_king_may_not_capture_defended_piece() {
    // Rook on e2 is defended by the rook on e8
    assert_eq!(
        dests("4r2k/8/8/8/8/8/4r3/4K3 w - - 0 1", "e1"),
        ["d1", "f1"]
    );
}

#[test]
fn test_kings_may_touch_by_default() {
    let fen = "8/8/8/3k4/8/3K4/8/8 w - - 0 1";
    let lenient = dests(fen, "d3");
    assert!(lenient.contains(&"d4".to_string()));
    assert_eq!(lenient.len(), 8);

    let strict = dests_with(fen, "d3", &Rules::with_king_contact());
    assert_eq!(strict, ["c2", "c3", "d2", "e2", "e3"]);
}

#[test]
fn test_no_king_means_no_filter() {
    assert_eq!(dests("8/8/8/8/8/8/4P3/8 w", "e2"), ["e3", "e4"]);
}

#[test]
fn test_pseudo_destinations_ignore_pins() {
    let pos = Position::from_fen("4r2k/8/8/8/8/8/4B3/4K3 w - - 0 1");
    assert_eq!(pseudo_destinations(&pos.board, sq("e2")).len(), 9);
}

#[test]
fn test_legal_moves_annotate_captures() {
    let pos =
        Position::from_fen("rnbqkbnr/ppp1pppp/8/3p4/4P3/8/PPPP1PPP/RNBQKBNR w KQkq - 0 2");
    let capture = legal_moves(&pos)
        .into_iter()
        .find(|m| m.from == sq("e4") && m.to == sq("d5"))
        .unwrap();
    assert_eq!(capture.piece, Some(Piece::new(Color::White, PieceKind::Pawn)));
    assert_eq!(
        capture.captured,
        Some(Piece::new(Color::Black, PieceKind::Pawn))
    );
}

#[test]
fn test_legal_moves_only_for_side_to_move() {
    let pos = Position::from_fen("4k3/4p3/8/8/8/8/4P3/4K3 b - - 0 1");
    assert!(legal_moves(&pos)
        .iter()
        .all(|m| m.piece.map(|p| p.color) == Some(Color::Black)));
}
