//! Exhaustive minimax move selection.
//!
//! Every reachable continuation is explored, with no pruning and no depth
//! limit; the 3x3 tree is small enough to finish quickly. Each step
//! recurses on its own copy of the board, so the caller's board is never
//! touched and nothing has to be undone.
//!
//! Scores ignore depth: a win nine plies away is worth as much as a win
//! on the next move. Among equal scores the lowest index is chosen.

use crate::rules::{Outcome, evaluate};
use crate::{Board, Player};
use tracing::{debug, instrument};

/// Minimax value of a position, from the searching side's point of view.
pub type Score = i8;

/// The searching side has a completed line.
pub const WIN: Score = 1;
/// Full board, no line.
pub const DRAW: Score = 0;
/// The opponent has a completed line.
pub const LOSS: Score = -1;

/// Scores `board` for `side` with `mover` to play next.
///
/// `side` maximises and its opponent minimises.
pub fn minimax(board: &Board, side: Player, mover: Player) -> Score {
    match evaluate(board) {
        Outcome::Win { player, .. } if player == side => WIN,
        Outcome::Win { .. } => LOSS,
        Outcome::Draw => DRAW,
        Outcome::Undecided => {
            let scores = board
                .empty_cells()
                .map(|index| minimax(&board.with_mark(index, mover), side, mover.opponent()));
            let best = if mover == side {
                scores.max()
            } else {
                scores.min()
            };
            // Undecided implies an empty square, so `best` is always set.
            best.unwrap_or(DRAW)
        }
    }
}

/// Scores every empty square for `side`, in ascending index order.
///
/// Each entry is the minimax value after `side` plays that square and the
/// opponent replies.
pub fn move_scores(board: &Board, side: Player) -> Vec<(usize, Score)> {
    board
        .empty_cells()
        .map(|index| {
            let next = board.with_mark(index, side);
            (index, minimax(&next, side, side.opponent()))
        })
        .collect()
}

/// Picks the optimal square for `side`.
///
/// Returns the first index with the greatest score, or `None` on a full
/// board.
#[instrument(skip(board), fields(filled = board.filled()))]
pub fn select_move(board: &Board, side: Player) -> Option<usize> {
    let mut best: Option<(usize, Score)> = None;
    for (index, score) in move_scores(board, side) {
        if best.is_none_or(|(_, top)| score > top) {
            best = Some((index, score));
        }
    }

    if let Some((index, score)) = best {
        debug!(index, score, "Selected move");
    }
    best.map(|(index, _)| index)
}
