//! Trainer settings

use std::path::{Path, PathBuf};

use chess_core::Rules;
use serde::{Deserialize, Serialize};

use crate::error::{TrainerError, TrainerResult};

/// Trainer configuration, read from a TOML file. Missing keys take their
/// defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainerConfig {
    /// Puzzle collection used when none is given on the command line
    pub puzzle_file: PathBuf,
    /// Length of a timed challenge
    pub challenge_seconds: u64,
    /// Show the board from Black's side when the player has Black
    pub flip_for_black: bool,
    /// Attack test settings passed to move generation
    pub rules: Rules,
}

impl Default for TrainerConfig {
    fn default() -> Self {
        Self {
            puzzle_file: PathBuf::from("puzzles.json"),
            challenge_seconds: 60,
            flip_for_black: true,
            rules: Rules::default(),
        }
    }
}

impl TrainerConfig {
    /// Load config from a TOML file
    pub fn load(path: &Path) -> TrainerResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|source| TrainerError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> TrainerResult<Self> {
        Ok(toml::from_str(contents)?)
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
