use std::str::FromStr;

use crate::{error::ChessError, error::ChessResult, types::*};

pub fn move_to_uci(mv: Move) -> String {
    let mut s = String::with_capacity(4);
    s.push_str(&mv.from.to_string());
    s.push_str(&mv.to.to_string());
    s
}

impl FromStr for Move {
    type Err = ChessError;

    /// Parses `<from><to>` such as `"e2e4"`. A promotion letter after the
    /// destination is accepted and ignored.
    fn from_str(txt: &str) -> Result<Self, Self::Err> {
        if txt.len() < 4 || txt.len() > 5 || !txt.is_ascii() {
            return Err(ChessError::InvalidMove(txt.to_string()));
        }
        let invalid = |_| ChessError::InvalidMove(txt.to_string());
        let from: Square = txt[0..2].parse().map_err(invalid)?;
        let to: Square = txt[2..4].parse().map_err(invalid)?;
        Ok(Move::new(from, to))
    }
}

/// Parses a whitespace separated move list such as a puzzle solution.
pub fn parse_move_list(txt: &str) -> ChessResult<Vec<Move>> {
    txt.split_whitespace().map(str::parse).collect()
}

#[cfg(test)]
#[path = "uci_tests.rs"]
mod uci_tests;
