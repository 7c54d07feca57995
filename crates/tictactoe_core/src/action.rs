//! Moves and move rejection.

use super::outcome::Outcome;
use super::position::Position;
use super::types::Mark;
use serde::{Deserialize, Serialize};

/// An accepted move: a mark placed at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The mark that was placed.
    pub mark: Mark,
    /// Where it was placed.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(mark: Mark, position: Position) -> Self {
        Self { mark, position }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?} -> {}", self.mark, self.position)
    }
}

/// Reason a move was rejected. The engine state is unchanged in every case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The game is already decided.
    #[display("Game is already over ({})", _0)]
    GameOver(Outcome),

    /// The cell already holds a mark.
    #[display("{} is already occupied", _0)]
    CellOccupied(Position),

    /// The coordinates are not on the board.
    #[display("({row}, {col}) is off the board")]
    OutOfBounds {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },
}

impl std::error::Error for MoveError {}
