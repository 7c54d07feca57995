//! Command-line interface.

use crate::play::parse_coords;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Two-player tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (defaults to ./tictactoe.toml when present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Log file, overriding the config
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    /// Subcommand to run (defaults to `tui`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play interactively in the terminal
    Tui,

    /// Apply moves given as `row,col` pairs and print the result
    Play {
        /// Moves in turn order, e.g. `0,0 1,1 0,1`
        #[arg(value_parser = parse_coords)]
        moves: Vec<(usize, usize)>,

        /// Print the final state as JSON instead of a board
        #[arg(long)]
        json: bool,
    },
}

impl Cli {
    /// Returns the subcommand, falling back to the interactive game.
    pub fn command_or_default(&self) -> Command {
        self.command.clone().unwrap_or(Command::Tui)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults_to_tui() {
        let cli = Cli::try_parse_from(["tictactoe"]).unwrap();
        assert_eq!(cli.command_or_default(), Command::Tui);
        assert!(cli.config.is_none());
    }

    #[test]
    fn test_play_moves() {
        let args = ["tictactoe", "play", "0,0", "1,1", "--json"];
        let cli = Cli::try_parse_from(args).unwrap();
        assert_eq!(
            cli.command_or_default(),
            Command::Play {
                moves: vec![(0, 0), (1, 1)],
                json: true,
            }
        );
    }

    #[test]
    fn test_global_config_after_subcommand() {
        let args = ["tictactoe", "tui", "--config", "alt.toml"];
        let cli = Cli::try_parse_from(args).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("alt.toml")));
    }

    #[test]
    fn test_bad_move_rejected_by_parser() {
        let args = ["tictactoe", "play", "middle"];
        assert!(Cli::try_parse_from(args).is_err());
    }
}
