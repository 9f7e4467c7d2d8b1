//! Terminal front-end for playing tic-tac-toe against the heuristic opponent.
//!
//! The game logic lives in [`tictactoe_core`]; this crate supplies the
//! collaborators it needs: keyboard input, board drawing, and an outcome
//! reporter with statistics and a blinking indicator.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod app;
pub mod cli;
pub mod config;
pub mod console;
pub mod indicator;
pub mod keyboard;

pub use cli::{Cli, Command};
pub use config::{ConfigError, KeyLayout, Settings};
pub use console::{ConsoleRenderer, ConsoleReporter};
pub use indicator::{FlashPattern, TerminalIndicator};
pub use keyboard::{KeyboardInput, RawModeGuard};
