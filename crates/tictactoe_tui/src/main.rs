//! Tic-tac-toe command-line entry point.

use anyhow::Result;
use clap::Parser;
use tictactoe_tui::{
    Cli, Command, TuiConfig, init_file_logging, init_stderr_logging, run_play, run_tui,
};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = TuiConfig::load(cli.config.as_deref())?;
    if let Some(path) = cli.log_file.clone() {
        config = config.with_log_file(path);
    }

    match cli.command_or_default() {
        Command::Tui => {
            init_file_logging(config.log_file(), config.log_filter())?;
            run_tui(&config)
        }
        Command::Play { moves, json } => {
            init_stderr_logging(config.log_filter());
            let stdout = std::io::stdout();
            run_play(&config, &moves, json, &mut stdout.lock())?;
            Ok(())
        }
    }
}
