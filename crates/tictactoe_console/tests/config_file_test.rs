//! Tests for loading settings from disk.

use std::io::Write;
use tictactoe_console::{KeyLayout, Settings};

#[test]
fn test_missing_file_gives_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let settings = Settings::load(dir.path().join("absent.toml")).unwrap();
    assert_eq!(settings, Settings::default());
}

#[test]
fn test_file_values_are_read() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "layout = \"numpad\"").unwrap();
    writeln!(file, "seed = 8").unwrap();
    writeln!(file, "indicator = false").unwrap();
    writeln!(file, "log_filter = \"debug\"").unwrap();

    let settings = Settings::load(file.path()).unwrap();
    assert_eq!(*settings.layout(), KeyLayout::Numpad);
    assert_eq!(*settings.seed(), Some(8));
    assert!(!*settings.indicator());
    assert_eq!(settings.log_filter(), "debug");
}

#[test]
fn test_malformed_file_is_an_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "seed = \"not a number\"").unwrap();

    let err = Settings::load(file.path()).unwrap_err();
    assert!(err.to_string().starts_with("Config error: Failed to parse config"));
}
