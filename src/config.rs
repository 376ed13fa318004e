//! Game configuration loaded from TOML and overridden from the command line.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tictac_engine::{GameMode, Player};
use tracing::{debug, info, instrument};

/// Default location of the configuration file.
pub const DEFAULT_CONFIG_PATH: &str = "tictac.toml";

/// Settings for a terminal session.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Who plays whom.
    #[serde(default)]
    mode: GameMode,

    /// Side played by the computer in human-vs-computer games.
    #[serde(default = "default_computer")]
    computer: Player,

    /// Display name for X (blank means "Player X").
    #[serde(default)]
    x_name: String,

    /// Display name for O (blank means "Player O").
    #[serde(default)]
    o_name: String,

    /// Pause before a computer move is shown, in milliseconds.
    #[serde(default = "default_computer_delay_ms")]
    computer_delay_ms: u64,

    /// Where tracing output goes while the terminal UI owns the screen.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,
}

fn default_computer() -> Player {
    Player::O
}

fn default_computer_delay_ms() -> u64 {
    500
}

fn default_log_file() -> PathBuf {
    PathBuf::from("tictac.log")
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            mode: GameMode::default(),
            computer: default_computer(),
            x_name: String::new(),
            o_name: String::new(),
            computer_delay_ms: default_computer_delay_ms(),
            log_file: default_log_file(),
        }
    }
}

/// Values that replace whatever the file said, when present.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    /// Replaces `mode`.
    pub mode: Option<GameMode>,
    /// Replaces `computer`.
    pub computer: Option<Player>,
    /// Replaces `x_name`.
    pub x_name: Option<String>,
    /// Replaces `o_name`.
    pub o_name: Option<String>,
    /// Replaces `computer_delay_ms`.
    pub computer_delay_ms: Option<u64>,
}

impl GameConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(mode = %config.mode, computer = %config.computer, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise returns the defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Applies command-line overrides.
    #[instrument(skip(self))]
    pub fn with_overrides(mut self, overrides: ConfigOverrides) -> Self {
        if let Some(mode) = overrides.mode {
            self.mode = mode;
        }
        if let Some(computer) = overrides.computer {
            self.computer = computer;
        }
        if let Some(name) = overrides.x_name {
            self.x_name = name;
        }
        if let Some(name) = overrides.o_name {
            self.o_name = name;
        }
        if let Some(delay) = overrides.computer_delay_ms {
            self.computer_delay_ms = delay;
        }
        self
    }

    /// Name shown for `player` while playing in `mode`.
    ///
    /// The computer's side is always "Computer". A blank configured name
    /// falls back to "Player X" or "Player O".
    pub fn display_name(&self, player: Player, mode: GameMode) -> String {
        if mode == GameMode::HumanVsComputer && player == self.computer {
            return "Computer".to_string();
        }

        let configured = match player {
            Player::X => &self.x_name,
            Player::O => &self.o_name,
        };
        if configured.trim().is_empty() {
            format!("Player {}", player)
        } else {
            configured.clone()
        }
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
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
