//! Tests for command-line parsing.

use clap::Parser;
use std::path::PathBuf;
use tictac::{Cli, Command, PlayArgs};
use tictac_engine::{GameMode, Player, Square};

#[test]
fn test_no_subcommand_plays() {
    let cli = Cli::try_parse_from(["tictac"]).unwrap();
    match cli.into_command() {
        Command::Play(args) => assert_eq!(args, PlayArgs::default()),
        other => panic!("expected play, got {:?}", other),
    }
}

#[test]
fn test_play_flags() {
    let cli = Cli::try_parse_from([
        "tictac",
        "play",
        "--config",
        "custom.toml",
        "--mode",
        "human-vs-human",
        "--computer",
        "x",
        "--x-name",
        "Ada",
        "--delay-ms",
        "0",
    ])
    .unwrap();

    let Command::Play(args) = cli.into_command() else {
        panic!("expected play");
    };
    assert_eq!(args.config, PathBuf::from("custom.toml"));

    let overrides = args.overrides();
    assert_eq!(overrides.mode, Some(GameMode::HumanVsHuman));
    assert_eq!(overrides.computer, Some(Player::X));
    assert_eq!(overrides.x_name.as_deref(), Some("Ada"));
    assert_eq!(overrides.o_name, None);
    assert_eq!(overrides.computer_delay_ms, Some(0));
}

#[test]
fn test_solve_parses_board() {
    let cli = Cli::try_parse_from(["tictac", "solve", "XO.|OOX|XX.", "--side", "o", "--json"])
        .unwrap();

    let Command::Solve { board, side, json } = cli.into_command() else {
        panic!("expected solve");
    };
    assert_eq!(board.get(0), Some(Square::Occupied(Player::X)));
    assert_eq!(board.get(2), Some(Square::Empty));
    assert_eq!(side, Some(Player::O));
    assert!(json);
}

#[test]
fn test_solve_rejects_bad_board() {
    assert!(Cli::try_parse_from(["tictac", "solve", "XOZ......"]).is_err());
    assert!(Cli::try_parse_from(["tictac", "solve", "XO"]).is_err());
}

#[test]
fn test_unknown_mode_is_rejected() {
    assert!(Cli::try_parse_from(["tictac", "play", "--mode", "sideways"]).is_err());
}
