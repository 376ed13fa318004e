//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`]. Nothing here is stored; the outcome of a
//! position is recomputed from its squares on demand. These run on every
//! node of the search tree, so they carry no tracing spans.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{WINNING_LINES, WinningLine, check_winner, winning_line};

use crate::{Board, Player};
use serde::{Deserialize, Serialize};

/// Status of a board, derived from its squares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// No winning line and at least one empty square.
    Undecided,
    /// `player` holds every square of `line`.
    Win {
        /// The winning player.
        player: Player,
        /// The completed line.
        line: WinningLine,
    },
    /// Board full, no winning line.
    Draw,
}

impl Outcome {
    /// Returns true once no further moves are possible.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::Undecided)
    }

    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Win { player, .. } => Some(*player),
            _ => None,
        }
    }

    /// Returns the completed line on a win.
    pub fn line(&self) -> Option<WinningLine> {
        match self {
            Outcome::Win { line, .. } => Some(*line),
            _ => None,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Undecided => write!(f, "Undecided"),
            Outcome::Win { player, line } => write!(f, "Player {} wins on {}", player, line),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}

/// Evaluates a board.
///
/// Lines are scanned in [`WINNING_LINES`] order and the first complete one
/// wins. A full board without a line is a draw.
pub fn evaluate(board: &Board) -> Outcome {
    if let Some((player, line)) = winning_line(board) {
        Outcome::Win { player, line }
    } else if is_full(board) {
        Outcome::Draw
    } else {
        Outcome::Undecided
    }
}
