//! Puzzle trainer built on chess_core
//!
//! This crate provides:
//! - Puzzle records as stored by the puzzle database (JSON)
//! - The per-puzzle session: opponent setup move, player moves checked
//!   against the solution line, automatic opponent replies
//! - Timed challenges that count solved puzzles against a clock
//!
//! # Usage
//!
//! ```bash
//! # Solve a random puzzle from a file
//! cargo run -p puzzle_trainer -- play crates/puzzle_trainer/data/puzzles.json
//!
//! # Three minute challenge
//! cargo run -p puzzle_trainer -- challenge crates/puzzle_trainer/data/puzzles.json --seconds 180
//! ```

mod challenge;
mod config;
mod error;
mod puzzle;
mod render;
mod session;

pub use challenge::*;
pub use config::*;
pub use error::*;
pub use puzzle::*;
pub use render::*;
pub use session::*;
