//! Application state and logic.

use crate::config::GameConfig;
use crossterm::event::KeyCode;
use std::collections::VecDeque;
use std::time::{Duration, Instant};
use tictac_engine::{
    Board, Controller, Engine, GameEvent, GameMode, Outcome, Player, Position, Snapshot,
};
use tracing::{debug, info, instrument};

use super::input::move_cursor;

/// Main application state.
///
/// The engine resolves a move, and any computer reply, immediately. The
/// screen instead shows `view`, which catches up by replaying the engine's
/// events. A computer placement is held back until `computer_delay_ms` has
/// passed so the reply is visible as a separate step.
#[derive(Debug)]
pub struct App {
    engine: Engine,
    config: GameConfig,
    view: Snapshot,
    pending: VecDeque<GameEvent>,
    reveal_at: Option<Instant>,
    cursor: Position,
    should_quit: bool,
}

impl App {
    /// Creates a new application and starts the first game.
    ///
    /// The first game begins with [`App::restart`], so a computer playing X
    /// has its opening move queued for reveal like any other.
    #[instrument(skip(config), fields(mode = %config.mode(), computer = %config.computer()))]
    pub fn new(config: GameConfig, now: Instant) -> Self {
        let engine = Engine::with_computer(*config.mode(), *config.computer());
        let view = fresh_view(&engine);
        let mut app = Self {
            engine,
            config,
            view,
            pending: VecDeque::new(),
            reveal_at: None,
            cursor: Position::Center,
            should_quit: false,
        };
        app.restart(*app.config.mode(), now);
        app
    }

    /// The state currently on screen.
    pub fn view(&self) -> &Snapshot {
        &self.view
    }

    /// The authoritative game.
    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    /// Loaded configuration.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Highlighted square.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Whether the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Whether a computer move is still waiting to be shown.
    pub fn is_revealing(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Name shown for `player` in the current mode.
    pub fn name(&self, player: Player) -> String {
        self.config.display_name(player, self.view.mode)
    }

    /// Status line for the current view.
    pub fn status(&self) -> String {
        if let Some(GameEvent::Placed {
            player,
            by: Controller::Computer,
            ..
        }) = self.pending.front()
        {
            return format!("{} is thinking...", self.name(*player));
        }

        match self.view.outcome {
            Outcome::Win { player, .. } => format!("{} has won!", self.name(player)),
            Outcome::Draw => "Game ended in a tie!".to_string(),
            Outcome::Undecided => format!("{}'s turn", self.name(self.view.turn)),
        }
    }

    /// Handles one key press.
    #[instrument(skip(self, now))]
    pub fn handle_key(&mut self, key: KeyCode, now: Instant) {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => {
                info!("User quit");
                self.should_quit = true;
            }
            KeyCode::Char('r') => self.restart(self.engine.mode(), now),
            KeyCode::Char('m') => self.restart(self.engine.mode().toggle(), now),
            KeyCode::Enter | KeyCode::Char(' ') => self.play(self.cursor.index(), now),
            KeyCode::Char(c) => {
                if let Some(pos) = c
                    .to_digit(10)
                    .and_then(|digit| (digit as usize).checked_sub(1))
                    .and_then(Position::from_index)
                {
                    if self.is_revealing() {
                        debug!(index = pos.index(), "Ignoring input during reveal");
                    } else {
                        self.cursor = pos;
                        self.play(pos.index(), now);
                    }
                } else {
                    self.cursor = move_cursor(self.cursor, key);
                }
            }
            other => self.cursor = move_cursor(self.cursor, other),
        }
    }

    /// Requests a move at `index`. Ignored while a reveal is pending.
    pub fn play(&mut self, index: usize, now: Instant) {
        if self.is_revealing() {
            debug!(index, "Ignoring input during reveal");
            return;
        }
        let events = self.engine.apply_move(index);
        self.enqueue(events, now);
    }

    /// Starts a new game in `mode`, keeping the score.
    pub fn restart(&mut self, mode: GameMode, now: Instant) {
        debug!(%mode, "Restarting game");
        self.pending.clear();
        self.reveal_at = None;
        let events = self.engine.reset(mode);
        self.view = fresh_view(&self.engine);
        self.enqueue(events, now);
    }

    /// Advances the view, revealing held-back moves whose time has come.
    pub fn tick(&mut self, now: Instant) {
        while let Some(event) = self.pending.front().copied() {
            if matches!(
                event,
                GameEvent::Placed {
                    by: Controller::Computer,
                    ..
                }
            ) {
                let delay = self.delay();
                let at = *self.reveal_at.get_or_insert(now + delay);
                if now < at {
                    break;
                }
                self.reveal_at = None;
            }

            self.pending.pop_front();
            apply_event(&mut self.view, &event);
        }

        if self.pending.is_empty() {
            self.view.tally = self.engine.tally();
        }
    }

    /// Time left before the next reveal, if one is scheduled.
    pub fn until_reveal(&self, now: Instant) -> Option<Duration> {
        self.reveal_at.map(|at| at.saturating_duration_since(now))
    }

    fn enqueue(&mut self, events: Vec<GameEvent>, now: Instant) {
        self.pending.extend(events);
        self.tick(now);
    }

    fn delay(&self) -> Duration {
        Duration::from_millis(*self.config.computer_delay_ms())
    }
}

fn fresh_view(engine: &Engine) -> Snapshot {
    Snapshot {
        board: Board::new(),
        turn: Player::X,
        outcome: Outcome::Undecided,
        tally: engine.tally(),
        active: true,
        mode: engine.mode(),
        computer: engine.computer_side(),
    }
}

fn apply_event(view: &mut Snapshot, event: &GameEvent) {
    if event.is_terminal() {
        view.active = false;
    }
    match *event {
        GameEvent::Placed { player, index, .. } => {
            if let Err(e) = view.board.place(index, player) {
                debug!(error = %e, "View out of step with engine");
            }
        }
        GameEvent::TurnPassed(player) => view.turn = player,
        GameEvent::Won { player, line } => view.outcome = Outcome::Win { player, line },
        GameEvent::Drawn => view.outcome = Outcome::Draw,
    }
}
