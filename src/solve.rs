//! Offline analysis of a single position.

use serde::Serialize;
use tictac_engine::{Board, Outcome, Player, Position, Score, evaluate, move_scores, select_move};
use tracing::{debug, instrument};

/// Minimax value of one candidate square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MoveScore {
    /// Board index (0-8).
    pub index: usize,
    /// Named position of `index`.
    pub position: Position,
    /// +1 forced win, 0 draw, -1 forced loss for the side to move.
    pub score: Score,
}

/// Result of analysing a board for one side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Analysis {
    /// The analysed board.
    pub board: Board,
    /// Side whose moves were scored.
    pub side: Player,
    /// Outcome of the board as given.
    pub outcome: Outcome,
    /// Every legal move, ascending by index. Empty once the game is over.
    pub scores: Vec<MoveScore>,
    /// The square search would play.
    pub best: Option<usize>,
}

/// Scores every legal move for `side` (or the side due to move).
#[instrument(skip(board), fields(filled = board.filled()))]
pub fn analyze(board: Board, side: Option<Player>) -> Analysis {
    let side = side.unwrap_or_else(|| board.side_to_move());
    let outcome = evaluate(&board);

    let (scores, best) = if outcome.is_terminal() {
        debug!(%outcome, "Board is already decided");
        (Vec::new(), None)
    } else {
        let scores = move_scores(&board, side)
            .into_iter()
            .filter_map(|(index, score)| {
                Position::from_index(index).map(|position| MoveScore {
                    index,
                    position,
                    score,
                })
            })
            .collect();
        (scores, select_move(&board, side))
    };

    Analysis {
        board,
        side,
        outcome,
        scores,
        best,
    }
}

impl Analysis {
    /// Plain-text report for the terminal.
    pub fn render(&self) -> String {
        let mut out = format!("{}\n\n", self.board.display());

        if self.outcome.is_terminal() {
            out.push_str(&format!("Game over: {}\n", self.outcome));
            return out;
        }

        out.push_str(&format!("{} to move\n", self.side));
        for entry in &self.scores {
            let verdict = match entry.score {
                s if s > 0 => "win",
                0 => "draw",
                _ => "loss",
            };
            let marker = if Some(entry.index) == self.best { "  <- best" } else { "" };
            out.push_str(&format!(
                "  {} ({:<13}) {:>2} {}{}\n",
                entry.index,
                entry.position.label(),
                entry.score,
                verdict,
                marker
            ));
        }
        out
    }
}
