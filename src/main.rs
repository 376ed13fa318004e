//! tictac - command-line entry point.

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use std::sync::Arc;
use tictac::{Cli, Command, GameConfig, PlayArgs, analyze, run_tui};
use tictac_engine::{Board, Player};
use tracing::{info, instrument};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.into_command() {
        Command::Play(args) => run_play(args).await,
        Command::Solve { board, side, json } => run_solve(board, side, json),
    }
}

/// Run the terminal game, logging to a file so the screen stays clean.
async fn run_play(args: PlayArgs) -> Result<()> {
    let config = GameConfig::load(&args.config)?.with_overrides(args.overrides());

    initialize_file_tracing(&config)?;

    info!(
        config_path = %args.config.display(),
        mode = %config.mode(),
        computer = %config.computer(),
        delay_ms = config.computer_delay_ms(),
        "Configuration resolved"
    );

    run_tui(config).await
}

/// Sends tracing output to the configured log file.
#[instrument(skip_all)]
fn initialize_file_tracing(config: &GameConfig) -> Result<()> {
    let log_file = std::fs::File::create(config.log_file())?;
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tictac=debug,tictac_engine=debug".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(Arc::new(log_file))
                .with_ansi(false),
        )
        .init();

    info!(log_file = %config.log_file().display(), "File tracing initialized");
    Ok(())
}

/// Score a single board and print the result.
#[instrument(skip(board))]
fn run_solve(board: Board, side: Option<Player>, json: bool) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let analysis = analyze(board, side);
    if json {
        println!("{}", serde_json::to_string_pretty(&analysis)?);
    } else {
        print!("{}", analysis.render());
    }
    Ok(())
}
