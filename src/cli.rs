//! Command-line interface for tictac.

use crate::config::{ConfigOverrides, DEFAULT_CONFIG_PATH};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tictac_engine::{Board, GameMode, Player};

/// Tic-tac-toe against a friend or an opponent that never loses
#[derive(Parser, Debug)]
#[command(name = "tictac")]
#[command(about = "Terminal tic-tac-toe with an unbeatable computer opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Cli {
    /// The requested command, with `play` standing in when none was given.
    pub fn into_command(self) -> Command {
        self.command.unwrap_or_else(|| Command::Play(PlayArgs::default()))
    }
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal UI
    Play(PlayArgs),

    /// Score every legal move on a board and show the one search picks
    Solve {
        /// Nine cells, X/O for marks and . - _ for empty (whitespace and | ignored)
        board: Board,

        /// Side to move (defaults to whoever is due by mark count)
        #[arg(long)]
        side: Option<Player>,

        /// Print the analysis as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Options for the `play` command.
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct PlayArgs {
    /// Path to the TOML configuration file
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,

    /// Game mode (human-vs-human or human-vs-computer)
    #[arg(long)]
    pub mode: Option<GameMode>,

    /// Side played by the computer (x or o)
    #[arg(long)]
    pub computer: Option<Player>,

    /// Display name for X
    #[arg(long)]
    pub x_name: Option<String>,

    /// Display name for O
    #[arg(long)]
    pub o_name: Option<String>,

    /// Pause before showing a computer move, in milliseconds
    #[arg(long)]
    pub delay_ms: Option<u64>,
}

impl Default for PlayArgs {
    fn default() -> Self {
        Self {
            config: PathBuf::from(DEFAULT_CONFIG_PATH),
            mode: None,
            computer: None,
            x_name: None,
            o_name: None,
            delay_ms: None,
        }
    }
}

impl PlayArgs {
    /// Flags that replace values from the configuration file.
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            mode: self.mode,
            computer: self.computer,
            x_name: self.x_name.clone(),
            o_name: self.o_name.clone(),
            computer_delay_ms: self.delay_ms,
        }
    }
}
