//! Front-end configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tictactoe_core::Mark;
use tracing::{debug, info, instrument};
use tracing_subscriber::EnvFilter;
use unicode_width::UnicodeWidthStr;

/// Config file read when `--config` is not given, if it exists.
pub const DEFAULT_CONFIG_PATH: &str = "tictactoe.toml";

/// Terminal columns a player symbol may take.
const MAX_SYMBOL_WIDTH: usize = 3;

/// Settings for the terminal front end. Missing keys take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TuiConfig {
    /// Symbol drawn for the first player.
    first_symbol: String,

    /// Symbol drawn for the second player.
    second_symbol: String,

    /// Where the interactive game writes its log.
    log_file: PathBuf,

    /// Filter used when `RUST_LOG` is unset.
    log_filter: String,
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            first_symbol: "X".to_string(),
            second_symbol: "O".to_string(),
            log_file: PathBuf::from("tictactoe_tui.log"),
            log_filter: "info".to_string(),
        }
    }
}

impl TuiConfig {
    /// Loads `path`, or the default config file if present, or the defaults.
    #[instrument]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None if Path::new(DEFAULT_CONFIG_PATH).exists() => Self::from_file(DEFAULT_CONFIG_PATH),
            None => {
                debug!("No config file, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml_str(&content)?;
        info!(first = %config.first_symbol, second = %config.second_symbol, "Config loaded");
        Ok(config)
    }

    /// Parses and validates configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Checks the symbols and the log filter.
    #[instrument(skip(self))]
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, symbol) in [
            ("first_symbol", &self.first_symbol),
            ("second_symbol", &self.second_symbol),
        ] {
            let width = symbol.trim().width();
            if width == 0 || width > MAX_SYMBOL_WIDTH {
                return Err(ConfigError::new(format!(
                    "{} must be 1 to {} columns wide, got {:?}",
                    name, MAX_SYMBOL_WIDTH, symbol
                )));
            }
        }

        if self.first_symbol.trim() == self.second_symbol.trim() {
            return Err(ConfigError::new(format!(
                "Both players use the symbol {:?}",
                self.first_symbol
            )));
        }

        EnvFilter::try_new(&self.log_filter)
            .map_err(|e| ConfigError::new(format!("Invalid log_filter: {}", e)))?;

        Ok(())
    }

    /// Replaces the log file path.
    pub fn with_log_file(mut self, log_file: PathBuf) -> Self {
        self.log_file = log_file;
        self
    }

    /// Symbols used to draw the two players.
    pub fn symbols(&self) -> Symbols {
        Symbols {
            first: self.first_symbol.trim().to_string(),
            second: self.second_symbol.trim().to_string(),
        }
    }
}

/// Display symbols for the two players.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Symbols {
    /// First player's symbol.
    pub first: String,
    /// Second player's symbol.
    pub second: String,
}

impl Symbols {
    /// Symbol for a mark; empty cells have none.
    pub fn of(&self, mark: Mark) -> &str {
        match mark {
            Mark::First => &self.first,
            Mark::Second => &self.second,
            Mark::Empty => "",
        }
    }
}

impl Default for Symbols {
    fn default() -> Self {
        TuiConfig::default().symbols()
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error at the caller's location.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
