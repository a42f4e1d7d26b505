//! Puzzle records and puzzle collections

use std::path::Path;

use chess_core::{parse_move_list, Color, Move, Position};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{TrainerError, TrainerResult};

/// A puzzle as stored in the puzzle database.
///
/// `fen` is the position BEFORE the opponent's setup move; `moves` is the
/// whole line in compact notation, starting with that setup move.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Puzzle {
    pub puzzle_id: String,
    pub fen: String,
    pub moves: String,
    #[serde(default)]
    pub rating: u32,
    #[serde(default)]
    pub rating_deviation: u32,
    #[serde(default)]
    pub popularity: i32,
    #[serde(default)]
    pub nb_plays: u32,
    #[serde(default)]
    pub themes: String,
    #[serde(default)]
    pub game_url: String,
    #[serde(default)]
    pub opening_tags: String,
}

impl Puzzle {
    pub fn new(puzzle_id: &str, fen: &str, moves: &str, rating: u32) -> Self {
        Self {
            puzzle_id: puzzle_id.to_string(),
            fen: fen.to_string(),
            moves: moves.to_string(),
            rating,
            rating_deviation: 0,
            popularity: 0,
            nb_plays: 0,
            themes: String::new(),
            game_url: String::new(),
            opening_tags: String::new(),
        }
    }

    /// The solution line, setup move first.
    pub fn solution(&self) -> TrainerResult<Vec<Move>> {
        Ok(parse_move_list(&self.moves)?)
    }

    /// The side the solver plays: the opponent moves first from `fen`.
    pub fn player_color(&self) -> Color {
        Position::from_fen(&self.fen).side_to_move.other()
    }

    pub fn theme_list(&self) -> Vec<&str> {
        self.themes.split_whitespace().collect()
    }

    pub fn difficulty(&self) -> Difficulty {
        Difficulty::from_rating(self.rating)
    }
}

/// Rating bands shown next to a puzzle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    pub fn from_rating(rating: u32) -> Self {
        match rating {
            0..=1199 => Difficulty::Beginner,
            1200..=1799 => Difficulty::Intermediate,
            _ => Difficulty::Advanced,
        }
    }

    pub fn stars(self) -> &'static str {
        match self {
            Difficulty::Beginner => "★☆☆",
            Difficulty::Intermediate => "★★☆",
            Difficulty::Advanced => "★★★",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Beginner => "Beginner",
            Difficulty::Intermediate => "Intermediate",
            Difficulty::Advanced => "Advanced",
        }
    }
}

/// A collection of puzzles loaded from a JSON array
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PuzzleSet {
    pub puzzles: Vec<Puzzle>,
}

impl PuzzleSet {
    pub fn new(puzzles: Vec<Puzzle>) -> Self {
        Self { puzzles }
    }

    /// Load puzzles from a JSON file
    pub fn load(path: &Path) -> TrainerResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|source| TrainerError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let set = Self::from_json(&contents)?;
        tracing::info!(path = %path.display(), puzzles = set.len(), "loaded puzzle set");
        Ok(set)
    }

    pub fn from_json(json: &str) -> TrainerResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn len(&self) -> usize {
        self.puzzles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.puzzles.is_empty()
    }

    pub fn get(&self, id: &str) -> TrainerResult<&Puzzle> {
        self.puzzles
            .iter()
            .find(|p| p.puzzle_id == id)
            .ok_or_else(|| TrainerError::UnknownPuzzle(id.to_string()))
    }

    pub fn random<R: Rng + ?Sized>(&self, rng: &mut R) -> TrainerResult<&Puzzle> {
        self.puzzles.choose(rng).ok_or(TrainerError::NoPuzzles)
    }
}

#[cfg(test)]
#[path = "puzzle_tests.rs"]
mod puzzle_tests;
