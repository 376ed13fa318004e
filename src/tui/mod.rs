//! Terminal UI for tictac.

mod app;
mod input;
mod ui;

pub use app::App;

use crate::config::GameConfig;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::{Duration, Instant};
use tictac_engine::Player;
use tokio::time::sleep;
use tracing::{debug, error, info, instrument};

/// Upper bound on how long one loop iteration waits for a key.
const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Runs the terminal game until the user quits.
pub async fn run_tui(config: GameConfig) -> Result<()> {
    info!("Starting tictac TUI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(config, Instant::now());
    let res = run_app(&mut terminal, &mut app).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!(
        x_wins = app.engine().tally().wins(Player::X),
        o_wins = app.engine().tally().wins(Player::O),
        ties = app.engine().tally().ties(),
        "Session finished"
    );
    res
}

#[instrument(skip_all)]
async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<()> {
    loop {
        app.tick(Instant::now());
        terminal.draw(|frame| ui::draw(frame, app))?;

        if app.should_quit() {
            return Ok(());
        }

        // Wake in time for a pending reveal even without input.
        let wait = app
            .until_reveal(Instant::now())
            .map_or(POLL_INTERVAL, |left| left.min(POLL_INTERVAL));

        if event::poll(Duration::ZERO)? {
            if let Event::Key(key) = event::read()?
                && key.kind == KeyEventKind::Press
            {
                debug!(code = ?key.code, "Key pressed");
                app.handle_key(key.code, Instant::now());
            }
        } else {
            sleep(wait).await;
        }
    }
}
