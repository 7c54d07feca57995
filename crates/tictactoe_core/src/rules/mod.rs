//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board). Nothing here touches
//! engine state, so the same board always yields the same answer.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{LINES, Line, check_winner, winning_line};

use super::outcome::Outcome;
use super::types::Board;
use tracing::instrument;

/// Classifies a board.
///
/// A completed line wins, with ties between several lines broken by the
/// scan order of [`LINES`]. Without a winner, a full board is a draw and
/// anything else is still in progress.
#[instrument]
pub fn evaluate_outcome(board: &Board) -> Outcome {
    if let Some(mark) = check_winner(board) {
        return Outcome::won_by(mark);
    }
    if is_full(board) {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}
