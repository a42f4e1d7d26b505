use super::*;

#[test]
fn test_parse_compact_move() {
    let mv: Move = "e2e4".parse().unwrap();
    assert_eq!(mv.from.to_string(), "e2");
    assert_eq!(mv.to.to_string(), "e4");
    assert_eq!(move_to_uci(mv), "e2e4");
}

#[test]
fn test_promotion_suffix_is_ignored() {
    let mv: Move = "e7e8q".parse().unwrap();
    assert_eq!(move_to_uci(mv), "e7e8");
}

#[test]
fn test_bad_moves_are_rejected() {
    for bad in ["", "e2", "e2e", "e2e9", "z2e4", "e2e4qq", "e2-e4"] {
        assert_eq!(
            bad.parse::<Move>(),
            Err(ChessError::InvalidMove(bad.to_string())),
            "{bad:?} should not parse"
        );
    }
}

#[test]
fn test_parse_move_list() {
    let moves = parse_move_list("e2e4 e7e5  g1f3").unwrap();
    let text: Vec<String> = moves.into_iter().map(move_to_uci).collect();
    assert_eq!(text, ["e2e4", "e7e5", "g1f3"]);

    assert!(parse_move_list("").unwrap().is_empty());
    assert!(parse_move_list("e2e4 nonsense").is_err());
}
