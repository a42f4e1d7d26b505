//! Playing one puzzle against its known solution line

use chess_core::{apply_move, legal_destinations_with, Move, Position, Rules, Square};
use serde::{Deserialize, Serialize};

use crate::error::{TrainerError, TrainerResult};
use crate::puzzle::Puzzle;

/// Where a session is in the puzzle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionState {
    /// The opponent's setup move has not been played yet
    AwaitingOpponentSetup,
    PlayerToMove,
    Solved,
    Failed,
}

impl SessionState {
    pub fn is_finished(self) -> bool {
        matches!(self, SessionState::Solved | SessionState::Failed)
    }
}

/// What a submitted move led to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Correct, and the opponent answered with `reply`
    Continue { reply: Move },
    /// Correct, and the line is complete
    Solved,
    /// Not the solution move; it was still played on the board
    Incorrect { expected: Move },
}

/// One attempt at a puzzle.
///
/// The session owns the current position text and the solution line; every
/// board update goes through [`apply_move`].
#[derive(Debug, Clone)]
pub struct PuzzleSession {
    puzzle: Puzzle,
    solution: Vec<Move>,
    fen: String,
    played: Vec<Move>,
    state: SessionState,
    rules: Rules,
}

impl PuzzleSession {
    pub fn new(puzzle: Puzzle) -> TrainerResult<Self> {
        Self::with_rules(puzzle, Rules::default())
    }

    pub fn with_rules(puzzle: Puzzle, rules: Rules) -> TrainerResult<Self> {
        let solution = puzzle.solution()?;
        if solution.is_empty() {
            return Err(TrainerError::EmptySolution(puzzle.puzzle_id.clone()));
        }
        let fen = puzzle.fen.clone();
        Ok(Self {
            puzzle,
            solution,
            fen,
            played: Vec::new(),
            state: SessionState::AwaitingOpponentSetup,
            rules,
        })
    }

    pub fn puzzle(&self) -> &Puzzle {
        &self.puzzle
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Current position text
    pub fn fen(&self) -> &str {
        &self.fen
    }

    pub fn position(&self) -> Position {
        Position::from_fen(&self.fen)
    }

    /// Moves played so far, setup move included
    pub fn played(&self) -> &[Move] {
        &self.played
    }

    /// The solution move the player is expected to find next
    pub fn expected_move(&self) -> Option<Move> {
        match self.state {
            SessionState::PlayerToMove => self.solution.get(self.played.len()).copied(),
            _ => None,
        }
    }

    /// Plays the opponent's setup move. Does nothing once it has been played.
    pub fn play_setup(&mut self) -> Option<Move> {
        if self.state != SessionState::AwaitingOpponentSetup {
            return None;
        }
        let setup = self.solution[0];
        self.play(setup);
        if self.played.len() == self.solution.len() {
            self.state = SessionState::Solved;
        } else {
            self.state = SessionState::PlayerToMove;
        }
        tracing::info!(puzzle = %self.puzzle.puzzle_id, setup = %setup, "opponent setup played");
        Some(setup)
    }

    /// Legal destinations for the piece on `from`, when it belongs to the side
    /// the player moves. Anything else yields nothing to select.
    pub fn destinations(&self, from: Square) -> Vec<Square> {
        if self.state != SessionState::PlayerToMove {
            return Vec::new();
        }
        let pos = self.position();
        match pos.piece_at(from) {
            Some(pc) if pc.color == pos.side_to_move => {
                legal_destinations_with(&pos, from, &self.rules)
            }
            _ => Vec::new(),
        }
    }

    /// Submits the player's move and advances the session.
    pub fn submit(&mut self, from: Square, to: Square) -> TrainerResult<MoveOutcome> {
        if self.state != SessionState::PlayerToMove {
            return Err(TrainerError::NotPlayersTurn);
        }
        if !self.destinations(from).contains(&to) {
            return Err(TrainerError::IllegalMove { from, to });
        }

        let mv = Move::new(from, to);
        let expected = self.solution[self.played.len()];
        self.play(mv);

        if mv != expected {
            self.state = SessionState::Failed;
            tracing::info!(puzzle = %self.puzzle.puzzle_id, played = %mv, expected = %expected, "puzzle failed");
            return Ok(MoveOutcome::Incorrect { expected });
        }

        let Some(&reply) = self.solution.get(self.played.len()) else {
            self.state = SessionState::Solved;
            tracing::info!(puzzle = %self.puzzle.puzzle_id, "puzzle solved");
            return Ok(MoveOutcome::Solved);
        };

        self.play(reply);
        if self.played.len() == self.solution.len() {
            self.state = SessionState::Solved;
            tracing::info!(puzzle = %self.puzzle.puzzle_id, "puzzle solved on the final reply");
            return Ok(MoveOutcome::Solved);
        }
        Ok(MoveOutcome::Continue { reply })
    }

    fn play(&mut self, mv: Move) {
        self.fen = apply_move(&self.fen, mv.from, mv.to);
        self.played.push(mv);
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod session_tests;
