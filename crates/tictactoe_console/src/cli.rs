//! Command-line interface for the tic-tac-toe console.

use crate::config::{KeyLayout, Settings};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::instrument;

/// Tic-tac-toe against a heuristic opponent
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Play tic-tac-toe in the terminal against the computer", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML settings file (ignored if missing)
    #[arg(short, long, default_value = "tictactoe.toml", global = true)]
    pub config: PathBuf,

    /// Seed for reproducible games
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Key mapping for cell selection
    #[arg(long, value_enum, global = true)]
    pub layout: Option<KeyLayout>,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Play one or more games
    Play {
        /// Stop after this many games instead of asking to play again
        #[arg(short, long)]
        games: Option<u32>,

        /// Print the final statistics as JSON on exit
        #[arg(long)]
        stats_json: bool,
    },

    /// Print the effective settings as TOML
    ShowConfig,
}

impl Cli {
    /// The subcommand, with `play` filled in when none was given.
    pub fn resolved_command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Play {
            games: None,
            stats_json: false,
        })
    }

    /// Applies command-line overrides on top of file settings.
    #[instrument(skip(self, settings))]
    pub fn apply(&self, settings: Settings) -> Settings {
        let settings = match self.seed {
            Some(seed) => settings.with_seed(Some(seed)),
            None => settings,
        };
        match self.layout {
            Some(layout) => settings.with_layout(layout),
            None => settings,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_play() {
        let cli = Cli::parse_from(["tictactoe"]);
        assert!(matches!(
            cli.resolved_command(),
            Command::Play {
                games: None,
                stats_json: false
            }
        ));
        assert_eq!(cli.config, PathBuf::from("tictactoe.toml"));
    }

    #[test]
    fn test_overrides_replace_file_settings() {
        let cli = Cli::parse_from(["tictactoe", "--seed", "5", "--layout", "numpad", "play", "-g", "3"]);
        let settings = cli.apply(Settings::default().with_seed(Some(1)));
        assert_eq!(*settings.seed(), Some(5));
        assert_eq!(*settings.layout(), KeyLayout::Numpad);
        assert!(matches!(cli.resolved_command(), Command::Play { games: Some(3), .. }));
    }

    #[test]
    fn test_missing_overrides_keep_file_settings() {
        let cli = Cli::parse_from(["tictactoe", "show-config"]);
        let file = Settings::default().with_seed(Some(1));
        assert_eq!(cli.apply(file.clone()), file);
    }
}
