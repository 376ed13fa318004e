//! tictac - terminal tic-tac-toe with an unbeatable computer opponent.
//!
//! The game rules, turn sequencing and minimax search live in
//! [`tictac_engine`]. This crate adds everything around them.
//!
//! # Architecture
//!
//! - **Config**: TOML file plus command-line overrides
//! - **TUI**: ratatui front end that renders engine events
//! - **Solve**: offline scoring of a single position
//!
//! # Example
//!
//! ```
//! use tictac::analyze;
//! use tictac_engine::Player;
//!
//! let analysis = analyze("XO. OOX XX.".parse().unwrap(), Some(Player::O));
//! assert_eq!(analysis.best, Some(8));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod solve;
mod tui;

pub use cli::{Cli, Command, PlayArgs};
pub use config::{ConfigError, ConfigOverrides, DEFAULT_CONFIG_PATH, GameConfig};
pub use solve::{Analysis, MoveScore, analyze};
pub use tui::{App, run_tui};
