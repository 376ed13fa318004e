//! Tests for configuration loading.

use std::io::Write;
use tempfile::NamedTempFile;
use tictac::{ConfigOverrides, GameConfig};
use tictac_engine::{GameMode, Player};

fn write_config(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_config_from_toml() {
    let file = write_config(
        r#"
mode = "human-vs-human"
computer = "X"
x_name = "Ada"
o_name = "Grace"
computer_delay_ms = 0
log_file = "game.log"
"#,
    );

    let config = GameConfig::from_file(file.path()).unwrap();
    assert_eq!(*config.mode(), GameMode::HumanVsHuman);
    assert_eq!(*config.computer(), Player::X);
    assert_eq!(config.x_name(), "Ada");
    assert_eq!(config.o_name(), "Grace");
    assert_eq!(*config.computer_delay_ms(), 0);
    assert_eq!(config.log_file().to_str(), Some("game.log"));
}

#[test]
fn test_missing_keys_use_defaults() {
    let file = write_config("x_name = \"Ada\"\n");

    let config = GameConfig::from_file(file.path()).unwrap();
    assert_eq!(*config.mode(), GameMode::HumanVsComputer);
    assert_eq!(*config.computer(), Player::O);
    assert_eq!(config.x_name(), "Ada");
    assert_eq!(config.o_name(), "");
    assert_eq!(*config.computer_delay_ms(), 500);
    assert_eq!(config.log_file().to_str(), Some("tictac.log"));
}

#[test]
fn test_missing_file_loads_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = GameConfig::load(dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, GameConfig::default());
}

#[test]
fn test_missing_file_is_an_error_when_read_directly() {
    let dir = tempfile::tempdir().unwrap();
    let err = GameConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(err.message.contains("Failed to read config file"));
}

#[test]
fn test_invalid_toml_is_reported() {
    let file = write_config("mode = \"sideways\"\n");

    let err = GameConfig::load(file.path()).unwrap_err();
    assert!(err.message.contains("Failed to parse config"));
    assert!(err.to_string().starts_with("Config error:"));
}

#[test]
fn test_overrides_replace_file_values() {
    let file = write_config("computer_delay_ms = 900\nx_name = \"Ada\"\n");

    let config = GameConfig::load(file.path())
        .unwrap()
        .with_overrides(ConfigOverrides {
            mode: Some(GameMode::HumanVsHuman),
            computer_delay_ms: Some(0),
            ..Default::default()
        });
    assert_eq!(*config.mode(), GameMode::HumanVsHuman);
    assert_eq!(*config.computer_delay_ms(), 0);
    assert_eq!(config.x_name(), "Ada");
}
