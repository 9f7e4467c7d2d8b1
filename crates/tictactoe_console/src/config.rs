//! Settings loaded from TOML and overridden from the command line.

use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// How number keys map onto cells.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    clap::ValueEnum,
    strum::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum KeyLayout {
    /// `1`-`9` pick cells 1-9 in reading order.
    #[default]
    Digits,
    /// Keys mirror a numeric keypad: `7 8 9` is the top row, `1 2 3` the bottom.
    Numpad,
}

impl KeyLayout {
    /// Resolves a typed character to a cell number.
    #[instrument]
    pub fn resolve(self, key: char) -> Option<u8> {
        let digit = u8::try_from(key.to_digit(10)?).ok()?;
        match (self, digit) {
            (_, 0) => None,
            (KeyLayout::Digits, n) => Some(n),
            (KeyLayout::Numpad, n @ 7..=9) => Some(n - 6),
            (KeyLayout::Numpad, n @ 4..=6) => Some(n),
            (KeyLayout::Numpad, n) => Some(n + 6),
        }
    }
}

/// User-configurable settings.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[serde(default)]
#[setters(prefix = "with_")]
pub struct Settings {
    /// Key mapping for cell selection.
    layout: KeyLayout,

    /// Fixed seed for reproducible games; entropy when absent.
    seed: Option<u64>,

    /// Light the outcome indicator after each game.
    indicator: bool,

    /// Default tracing filter when `RUST_LOG` is unset.
    log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            layout: KeyLayout::default(),
            seed: None,
            indicator: true,
            log_filter: "warn".to_string(),
        }
    }
}

impl Settings {
    /// Loads settings from a TOML file, falling back to defaults when it is missing.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            debug!("Config file not found, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;
        let settings = Self::from_toml(&content)?;
        info!(?settings, "Config loaded");
        Ok(settings)
    }

    /// Parses settings from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Renders the settings as TOML.
    #[instrument(skip(self))]
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string(self)
            .map_err(|e| ConfigError::new(format!("Failed to serialize config: {}", e)))
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
