//! Notifications emitted by the engine.
//!
//! Every state change is reported as an event so front ends can render
//! (and pace) the game without reaching into engine internals. A single
//! human move can produce a chain: the placement, the turn passing, and
//! the computer's reply with its own consequences.

use crate::rules::WinningLine;
use crate::Player;
use serde::{Deserialize, Serialize};

/// Who asked for a placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Controller {
    /// A move request from outside the engine.
    Human,
    /// A move chosen by the engine's search.
    Computer,
}

/// A state change caused by `reset` or `apply_move`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameEvent {
    /// A mark was written to the board.
    Placed {
        /// Owner of the mark.
        player: Player,
        /// Board index (0-8).
        index: usize,
        /// Origin of the move request.
        by: Controller,
    },
    /// The game continues with this player to move.
    TurnPassed(Player),
    /// The last placement completed a line.
    Won {
        /// The winning player.
        player: Player,
        /// The completed line.
        line: WinningLine,
    },
    /// The last placement filled the board without a line.
    Drawn,
}

impl GameEvent {
    /// Returns true for events that end the game.
    pub fn is_terminal(&self) -> bool {
        matches!(self, GameEvent::Won { .. } | GameEvent::Drawn)
    }
}

impl std::fmt::Display for GameEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameEvent::Placed { player, index, by } => {
                write!(f, "{} ({}) -> {}", player, by, index)
            }
            GameEvent::TurnPassed(player) => write!(f, "{} to move", player),
            GameEvent::Won { player, line } => write!(f, "{} wins on {}", player, line),
            GameEvent::Drawn => write!(f, "Draw"),
        }
    }
}
