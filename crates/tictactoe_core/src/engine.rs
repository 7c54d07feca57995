//! The game engine: board, turn and outcome behind three operations.

use super::action::{Move, MoveError};
use super::outcome::Outcome;
use super::position::Position;
use super::rules::evaluate_outcome;
use super::types::{Board, Mark};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

/// Owns one game of tic-tac-toe.
///
/// Illegal requests never panic and never change state: they come back as a
/// [`MoveError`]. Once the outcome is decided every move is rejected until
/// [`reset`](Self::reset).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameEngine {
    board: Board,
    turn: Mark,
    outcome: Outcome,
    history: Vec<Move>,
}

/// Read-only copy of the engine state for a presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// The board.
    pub board: Board,
    /// Mark to move next (frozen once the game is decided).
    pub turn: Mark,
    /// Current outcome.
    pub outcome: Outcome,
    /// Accepted moves since the last reset.
    pub history: Vec<Move>,
}

impl GameEngine {
    /// Creates a fresh game: empty board, First to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            turn: Mark::First,
            outcome: Outcome::InProgress,
            history: Vec::new(),
        }
    }

    /// Builds an engine by playing `(row, col)` moves in order.
    ///
    /// # Errors
    ///
    /// Returns the first rejection; later moves are not attempted.
    #[instrument]
    pub fn replay(moves: &[(usize, usize)]) -> Result<Self, MoveError> {
        let mut engine = Self::new();
        for &(row, col) in moves {
            engine.attempt_move(row, col)?;
        }
        Ok(engine)
    }

    /// Places the current turn's mark at `(row, col)`.
    ///
    /// On success the returned value is the outcome after the move. The turn
    /// passes to the opponent only while the game is still in progress.
    ///
    /// # Errors
    ///
    /// - [`MoveError::GameOver`] if the outcome is already decided
    /// - [`MoveError::OutOfBounds`] if `(row, col)` is not on the board
    /// - [`MoveError::CellOccupied`] if the cell already holds a mark
    #[instrument(skip(self), fields(turn = ?self.turn))]
    pub fn attempt_move(&mut self, row: usize, col: usize) -> Result<Outcome, MoveError> {
        let position = self.check_move(row, col).inspect_err(|e| {
            warn!(error = %e, "Move rejected");
        })?;

        self.board.set(position, self.turn);
        self.history.push(Move::new(self.turn, position));
        self.outcome = evaluate_outcome(&self.board);

        if self.outcome.is_terminal() {
            debug!(outcome = %self.outcome, "Game decided");
        } else {
            self.turn = self.turn.opponent();
        }

        self.debug_check_invariants();
        Ok(self.outcome)
    }

    /// Preconditions of [`attempt_move`](Self::attempt_move), in order.
    fn check_move(&self, row: usize, col: usize) -> Result<Position, MoveError> {
        if self.outcome.is_terminal() {
            return Err(MoveError::GameOver(self.outcome));
        }
        let position = Position::from_coords(row, col)
            .ok_or(MoveError::OutOfBounds { row, col })?;
        if !self.board.is_empty(position) {
            return Err(MoveError::CellOccupied(position));
        }
        Ok(position)
    }

    #[cfg(debug_assertions)]
    fn debug_check_invariants(&self) {
        use super::invariants::{EngineInvariants, InvariantSet};

        if let Err(violations) = EngineInvariants::check_all(self) {
            for violation in &violations {
                warn!(%violation, "Invariant violated");
            }
            debug_assert!(
                violations.is_empty(),
                "engine invariants violated: {violations:?}"
            );
        }
    }

    #[cfg(not(debug_assertions))]
    fn debug_check_invariants(&self) {}

    /// Clears the board and gives the first move back to First.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        debug!(moves = self.history.len(), "Resetting game");
        *self = Self::new();
    }

    /// Current outcome.
    pub fn current_outcome(&self) -> Outcome {
        self.outcome
    }

    /// Mark that moves next. Meaningless once the game is decided.
    pub fn current_turn(&self) -> Mark {
        self.turn
    }

    /// The board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Accepted moves since the last reset.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Empty positions, or none at all once the game is decided.
    pub fn available_positions(&self) -> Vec<Position> {
        if self.outcome.is_terminal() {
            Vec::new()
        } else {
            Position::valid_moves(&self.board)
        }
    }

    /// Copies the current state out.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            board: self.board,
            turn: self.turn,
            outcome: self.outcome,
            history: self.history.clone(),
        }
    }

    #[cfg(test)]
    pub(crate) fn corrupt_for_test(&mut self, position: Position, mark: Mark) {
        self.board.set(position, mark);
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}
