//! Game outcome.

use super::types::Mark;
use serde::{Deserialize, Serialize};

/// Classification of a game: still running or decided.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, derive_more::Display,
)]
pub enum Outcome {
    /// No winner yet and at least one empty cell.
    #[default]
    #[display("In progress")]
    InProgress,
    /// The first player completed a line.
    #[display("First wins")]
    FirstWins,
    /// The second player completed a line.
    #[display("Second wins")]
    SecondWins,
    /// Board full, no line completed.
    #[display("Draw")]
    Draw,
}

impl Outcome {
    /// Outcome for a completed line of `mark`. `Empty` never wins.
    pub fn won_by(mark: Mark) -> Self {
        match mark {
            Mark::First => Outcome::FirstWins,
            Mark::Second => Outcome::SecondWins,
            Mark::Empty => Outcome::InProgress,
        }
    }

    /// Returns the winner if there is one.
    pub fn winner(self) -> Option<Mark> {
        match self {
            Outcome::FirstWins => Some(Mark::First),
            Outcome::SecondWins => Some(Mark::Second),
            Outcome::InProgress | Outcome::Draw => None,
        }
    }

    /// Returns true once the game is decided.
    pub fn is_terminal(self) -> bool {
        self != Outcome::InProgress
    }
}
