//! Tests for loading the TOML configuration.

use std::io::Write;
use std::path::PathBuf;

use tictac::AppConfig;

#[test]
fn test_missing_file_gives_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = AppConfig::load(dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, AppConfig::default());
    assert_eq!(*config.seed(), None);
    assert_eq!(config.log_file(), &PathBuf::from("tictac.log"));
    assert_eq!(config.log_filter(), "info");
}

#[test]
fn test_full_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "seed = 42").unwrap();
    writeln!(file, "log_file = \"/tmp/game.log\"").unwrap();
    writeln!(file, "log_filter = \"tictac_core=debug\"").unwrap();

    let config = AppConfig::load(file.path()).unwrap();
    assert_eq!(*config.seed(), Some(42));
    assert_eq!(config.log_file(), &PathBuf::from("/tmp/game.log"));
    assert_eq!(config.log_filter(), "tictac_core=debug");
}

#[test]
fn test_partial_file_fills_defaults() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "log_filter = \"warn\"").unwrap();

    let config = AppConfig::from_file(file.path()).unwrap();
    assert_eq!(*config.seed(), None);
    assert_eq!(config.log_file(), &PathBuf::from("tictac.log"));
    assert_eq!(config.log_filter(), "warn");
}

#[test]
fn test_malformed_file_is_an_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "seed = \"not a number\"").unwrap();

    let err = AppConfig::load(file.path()).unwrap_err();
    assert!(err.to_string().contains("Failed to parse config"));
}

#[test]
fn test_cli_overrides_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "seed = 1").unwrap();

    let config = AppConfig::load(file.path())
        .unwrap()
        .with_overrides(Some(2), Some(PathBuf::from("cli.log")));
    assert_eq!(*config.seed(), Some(2));
    assert_eq!(config.log_file(), &PathBuf::from("cli.log"));
}
