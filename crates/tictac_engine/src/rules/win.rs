//! Win detection logic for tic-tac-toe.

use crate::{Board, Player, Square};
use serde::{Deserialize, Serialize};

/// Three board indices whose uniform occupation ends the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WinningLine([usize; 3]);

impl WinningLine {
    const fn new(cells: [usize; 3]) -> Self {
        Self(cells)
    }

    /// The three indices, ascending.
    pub fn cells(self) -> [usize; 3] {
        self.0
    }

    /// Returns true if `index` is part of the line.
    pub fn contains(self, index: usize) -> bool {
        self.0.contains(&index)
    }
}

impl std::fmt::Display for WinningLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [a, b, c] = self.0;
        write!(f, "[{}, {}, {}]", a, b, c)
    }
}

/// Every winning line.
pub const WINNING_LINES: [WinningLine; 8] = [
    // Rows
    WinningLine::new([0, 1, 2]),
    WinningLine::new([3, 4, 5]),
    WinningLine::new([6, 7, 8]),
    // Columns
    WinningLine::new([0, 3, 6]),
    WinningLine::new([1, 4, 7]),
    WinningLine::new([2, 5, 8]),
    // Diagonals
    WinningLine::new([0, 4, 8]),
    WinningLine::new([2, 4, 6]),
];

/// Finds the first line fully held by one player.
pub fn winning_line(board: &Board) -> Option<(Player, WinningLine)> {
    let squares = board.squares();
    WINNING_LINES.iter().find_map(|&line| {
        let [a, b, c] = line.cells();
        match squares[a] {
            Square::Occupied(player) if squares[b] == squares[a] && squares[c] == squares[a] => {
                Some((player, line))
            }
            _ => None,
        }
    })
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` if the player has three in a row,
/// `None` otherwise.
pub fn check_winner(board: &Board) -> Option<Player> {
    winning_line(board).map(|(player, _)| player)
}
