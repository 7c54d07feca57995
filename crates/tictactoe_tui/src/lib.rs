//! Terminal front end for the tic-tac-toe engine.
//!
//! The engine in `tictactoe_core` decides everything about the game; this
//! crate maps keys and mouse clicks to board coordinates, draws the board
//! with ratatui and turns the engine state into a status line.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod app;
mod cli;
mod config;
mod input;
mod logging;
mod play;
mod status;
mod terminal;
mod ui;

pub use app::App;
pub use cli::{Cli, Command};
pub use config::{ConfigError, DEFAULT_CONFIG_PATH, Symbols, TuiConfig};
pub use input::{Action, action_for_key};
pub use logging::{init_file_logging, init_stderr_logging};
pub use play::{parse_coords, run_play};
pub use status::status_line;
pub use terminal::run_tui;
pub use ui::{board_area, cell_at, cell_rect, draw};
