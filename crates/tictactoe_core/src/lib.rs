//! Tic-tac-toe game state and win detection.
//!
//! This crate holds the only real logic of the game: a 3x3 board, strict
//! turn alternation and an eight-line win detector. It has no rendering
//! dependency; a presentation layer drives a [`GameEngine`] and polls its
//! state after every operation.
//!
//! # Example
//!
//! ```
//! use tictactoe_core::{GameEngine, Mark, Outcome};
//!
//! let mut engine = GameEngine::new();
//! assert_eq!(engine.current_turn(), Mark::First);
//!
//! engine.attempt_move(1, 1).unwrap();
//! assert_eq!(engine.current_turn(), Mark::Second);
//! assert_eq!(engine.current_outcome(), Outcome::InProgress);
//!
//! // The centre is taken: the move is rejected and nothing changes.
//! assert!(engine.attempt_move(1, 1).is_err());
//! assert_eq!(engine.current_turn(), Mark::Second);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod engine;
mod outcome;
mod position;
mod types;

pub mod invariants;
pub mod rules;

pub use action::{Move, MoveError};
pub use engine::{GameEngine, Snapshot};
pub use outcome::Outcome;
pub use position::Position;
pub use rules::evaluate_outcome;
pub use types::{Board, Mark};
