//! Game engine for tic-tac-toe.
//!
//! [`Engine`] owns the authoritative board, the turn, the active flag and the
//! running score. Invalid requests are rejected silently: they leave every
//! field untouched and report no events.

use crate::event::{Controller, GameEvent};
use crate::invariants::{EngineInvariants, InvariantSet};
use crate::rules::{Outcome, evaluate};
use crate::search::select_move;
use crate::{Board, GameMode, Player, ScoreTally};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Tic-tac-toe game engine.
#[derive(Debug, Clone)]
pub struct Engine {
    pub(crate) board: Board,
    pub(crate) turn: Player,
    pub(crate) active: bool,
    pub(crate) mode: GameMode,
    pub(crate) computer: Player,
    pub(crate) tally: ScoreTally,
}

/// Read-only view of an engine, for rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Current board.
    pub board: Board,
    /// Side to move, or the side that moved last once the game is over.
    pub turn: Player,
    /// Outcome of the current board.
    pub outcome: Outcome,
    /// Running score.
    pub tally: ScoreTally,
    /// Whether further moves are accepted.
    pub active: bool,
    /// Current game mode.
    pub mode: GameMode,
    /// The side played by search under [`GameMode::HumanVsComputer`].
    pub computer: Player,
}

impl Engine {
    /// Creates an engine where the computer, if enabled, plays O.
    pub fn new(mode: GameMode) -> Self {
        Self::with_computer(mode, Player::O)
    }

    /// Creates an engine with the computer assigned to `computer`.
    ///
    /// The board starts empty with X to move. If the computer plays X under
    /// [`GameMode::HumanVsComputer`], call [`Engine::reset`] to start the
    /// game: it makes the opening move and reports it.
    #[instrument]
    pub fn with_computer(mode: GameMode, computer: Player) -> Self {
        Self {
            board: Board::new(),
            turn: Player::X,
            active: true,
            mode,
            computer,
            tally: ScoreTally::default(),
        }
    }

    /// Starts a new game in `mode`. The score is kept.
    ///
    /// Returns the events of the computer's opening move, if it moves first.
    #[instrument(skip(self), fields(computer = %self.computer))]
    pub fn reset(&mut self, mode: GameMode) -> Vec<GameEvent> {
        self.board = Board::new();
        self.turn = Player::X;
        self.active = true;
        self.mode = mode;
        info!(%mode, "Game reset");

        let mut events = Vec::new();
        if self.computer_to_move() {
            self.play_computer(&mut events);
        }
        events
    }

    /// Plays the current side's mark at `index` (0-8).
    ///
    /// Nothing happens if the game is over, `index` is off the board, the
    /// square is taken, or it is the computer's turn. Otherwise the move is
    /// applied and resolved, including the computer's reply when one is due.
    #[instrument(skip(self), fields(turn = %self.turn))]
    pub fn apply_move(&mut self, index: usize) -> Vec<GameEvent> {
        let mut events = Vec::new();
        if self.computer_to_move() {
            debug!("Rejected move: computer's turn");
            return events;
        }
        self.place(index, Controller::Human, &mut events);
        events
    }

    /// Current outcome, recomputed from the board.
    pub fn outcome(&self) -> Outcome {
        evaluate(&self.board)
    }

    /// Side to move. After a finished game, the side that moved last.
    pub fn turn(&self) -> Player {
        self.turn
    }

    /// Whether further moves are accepted.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Current game mode.
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    /// Side played by search.
    pub fn computer_side(&self) -> Player {
        self.computer
    }

    /// Running score.
    pub fn tally(&self) -> ScoreTally {
        self.tally
    }

    /// Current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Bundles every query into one value.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            board: self.board,
            turn: self.turn,
            outcome: self.outcome(),
            tally: self.tally,
            active: self.active,
            mode: self.mode,
            computer: self.computer,
        }
    }

    fn computer_to_move(&self) -> bool {
        self.active && self.mode == GameMode::HumanVsComputer && self.turn == self.computer
    }

    fn place(&mut self, index: usize, by: Controller, events: &mut Vec<GameEvent>) {
        if !self.active {
            debug!(index, "Rejected move: game is over");
            return;
        }

        let player = self.turn;
        if let Err(e) = self.board.place(index, player) {
            debug!(error = %e, "Rejected move");
            return;
        }
        debug!(index, %player, %by, "Mark placed");
        events.push(GameEvent::Placed { player, index, by });

        self.resolve(events);

        if cfg!(debug_assertions)
            && let Err(violations) = EngineInvariants::check_all(self)
        {
            warn!(?violations, "Engine invariants violated");
        }
    }

    fn resolve(&mut self, events: &mut Vec<GameEvent>) {
        match evaluate(&self.board) {
            Outcome::Win { player, line } => {
                self.active = false;
                self.tally.record_win(player);
                info!(%player, %line, "Game won");
                events.push(GameEvent::Won { player, line });
            }
            Outcome::Draw => {
                self.active = false;
                self.tally.record_tie();
                info!("Game drawn");
                events.push(GameEvent::Drawn);
            }
            Outcome::Undecided => {
                self.turn = self.turn.opponent();
                events.push(GameEvent::TurnPassed(self.turn));
                if self.computer_to_move() {
                    self.play_computer(events);
                }
            }
        }
    }

    fn play_computer(&mut self, events: &mut Vec<GameEvent>) {
        if let Some(index) = select_move(&self.board, self.computer) {
            self.place(index, Controller::Computer, events);
        }
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(GameMode::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_engine() {
        let engine = Engine::new(GameMode::HumanVsHuman);
        assert_eq!(engine.turn(), Player::X);
        assert!(engine.is_active());
        assert_eq!(engine.outcome(), Outcome::Undecided);
        assert_eq!(engine.tally(), ScoreTally::default());
    }

    #[test]
    fn test_human_move_events() {
        let mut engine = Engine::new(GameMode::HumanVsHuman);
        let events = engine.apply_move(4);
        assert_eq!(
            events,
            vec![
                GameEvent::Placed {
                    player: Player::X,
                    index: 4,
                    by: Controller::Human,
                },
                GameEvent::TurnPassed(Player::O),
            ]
        );
    }

    #[test]
    fn test_computer_replies_in_same_call() {
        let mut engine = Engine::new(GameMode::HumanVsComputer);
        let events = engine.apply_move(0);
        assert_eq!(events.len(), 4);
        assert!(matches!(
            events[2],
            GameEvent::Placed {
                player: Player::O,
                by: Controller::Computer,
                ..
            }
        ));
        assert_eq!(events[3], GameEvent::TurnPassed(Player::X));
        assert_eq!(engine.turn(), Player::X);
        assert_eq!(engine.board().filled(), 2);
    }

    #[test]
    fn test_computer_as_x_opens_on_reset() {
        let mut engine = Engine::with_computer(GameMode::HumanVsComputer, Player::X);
        assert_eq!(engine.board().filled(), 0);
        assert_eq!(engine.turn(), Player::X);

        let events = engine.reset(GameMode::HumanVsComputer);
        assert_eq!(
            events,
            vec![
                GameEvent::Placed {
                    player: Player::X,
                    index: 0,
                    by: Controller::Computer,
                },
                GameEvent::TurnPassed(Player::O),
            ]
        );
        assert_eq!(engine.board().count(Player::X), 1);
        assert_eq!(engine.turn(), Player::O);

        // A second reset replays the opening on a cleared board.
        let events = engine.reset(GameMode::HumanVsComputer);
        assert_eq!(events.len(), 2);
        assert_eq!(engine.board().filled(), 1);
    }

    #[test]
    fn test_human_cannot_move_for_computer_before_reset() {
        let mut engine = Engine::with_computer(GameMode::HumanVsComputer, Player::X);
        assert!(engine.apply_move(4).is_empty());
        assert_eq!(engine.board().filled(), 0);
    }

    #[test]
    fn test_reset_keeps_tally() {
        let mut engine = Engine::new(GameMode::HumanVsHuman);
        for index in [0, 3, 1, 4, 2] {
            engine.apply_move(index);
        }
        assert_eq!(engine.tally().wins(Player::X), 1);

        let events = engine.reset(GameMode::HumanVsHuman);
        assert!(events.is_empty());
        assert_eq!(engine.board(), &Board::new());
        assert_eq!(engine.turn(), Player::X);
        assert!(engine.is_active());
        assert_eq!(engine.tally().wins(Player::X), 1);
    }

    #[test]
    fn test_snapshot_matches_queries() {
        let mut engine = Engine::new(GameMode::HumanVsComputer);
        engine.apply_move(4);
        let snapshot = engine.snapshot();
        assert_eq!(snapshot.board, *engine.board());
        assert_eq!(snapshot.turn, engine.turn());
        assert_eq!(snapshot.outcome, engine.outcome());
        assert_eq!(snapshot.mode, GameMode::HumanVsComputer);
        assert_eq!(snapshot.computer, Player::O);
        assert!(snapshot.active);
    }
}
