//! Application state and logic.

use crate::config::{Symbols, TuiConfig};
use crate::input::Action;
use crate::status::{rejection_notice, status_line};
use tictactoe_core::{GameEngine, Outcome, Position};
use tracing::{debug, info, instrument};

/// Main application state.
#[derive(Debug)]
pub struct App {
    engine: GameEngine,
    symbols: Symbols,
    cursor: Position,
    notice: Option<String>,
    should_quit: bool,
}

impl App {
    /// Creates a new application.
    pub fn new(config: &TuiConfig) -> Self {
        Self::with_symbols(config.symbols())
    }

    /// Creates a new application with explicit symbols.
    pub fn with_symbols(symbols: Symbols) -> Self {
        Self {
            engine: GameEngine::new(),
            symbols,
            cursor: Position::Center,
            notice: None,
            should_quit: false,
        }
    }

    /// Gets the game engine.
    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// Gets the player symbols.
    pub fn symbols(&self) -> &Symbols {
        &self.symbols
    }

    /// Cell under the cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Message about the last rejected move, until the next action clears it.
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// Gets the status line.
    pub fn status_line(&self) -> String {
        status_line(&self.engine, &self.symbols)
    }

    /// Whether the user asked to quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Applies a user action.
    #[instrument(skip(self))]
    pub fn handle_action(&mut self, action: Action) {
        match action {
            Action::MoveCursor { d_row, d_col } => {
                self.notice = None;
                self.cursor = self.cursor.step(d_row, d_col);
            }
            Action::PlaceAtCursor => self.place(self.cursor),
            Action::PlaceAt(position) => {
                self.cursor = position;
                self.place(position);
            }
            Action::Restart => self.restart(),
            Action::Quit => {
                info!("Quit requested");
                self.should_quit = true;
            }
        }
    }

    fn place(&mut self, position: Position) {
        match self.engine.attempt_move(position.row(), position.col()) {
            Ok(outcome) => {
                self.notice = None;
                debug!(%position, %outcome, "Move applied");
                if outcome != Outcome::InProgress {
                    info!(%outcome, moves = self.engine.history().len(), "Game over");
                }
            }
            Err(e) => {
                self.notice = Some(rejection_notice(&e));
            }
        }
    }

    /// Restarts the game.
    pub fn restart(&mut self) {
        debug!("Restarting game");
        self.engine.reset();
        self.cursor = Position::Center;
        self.notice = None;
    }
}
