//! Pure tic-tac-toe game logic with an unbeatable computer opponent.
//!
//! # Architecture
//!
//! - **Rules**: [`evaluate`] turns a [`Board`] into an [`Outcome`]
//! - **Engine**: [`Engine`] owns a live game, sequences turns and keeps score
//! - **Search**: [`select_move`] picks the optimal square by exhaustive minimax
//!
//! # Example
//!
//! ```
//! use tictac_engine::{Engine, GameMode, Player};
//!
//! let mut engine = Engine::new(GameMode::HumanVsHuman);
//! for index in [0, 4, 1, 7, 2] {
//!     engine.apply_move(index);
//! }
//! assert_eq!(engine.outcome().winner(), Some(Player::X));
//! assert!(!engine.is_active());
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod engine;
mod event;
pub mod invariants;
mod position;
pub mod rules;
pub mod search;
mod types;

pub use engine::{Engine, Snapshot};
pub use event::{Controller, GameEvent};
pub use position::Position;
pub use rules::{Outcome, WINNING_LINES, WinningLine, evaluate};
pub use search::{Score, move_scores, select_move};
pub use types::{Board, BoardParseError, CELLS, GameMode, PlaceError, Player, ScoreTally, Square};
