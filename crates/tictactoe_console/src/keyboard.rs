//! Keyboard input: raw-mode terminal keys resolved to cell numbers.

use crate::config::KeyLayout;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use crossterm::terminal;
use std::time::Duration;
use tictactoe_core::MoveSource;
use tokio::sync::mpsc;
use tracing::{debug, instrument, trace, warn};

/// Puts the terminal in raw mode; restores it on drop.
#[derive(Debug)]
pub struct RawModeGuard;

impl RawModeGuard {
    /// Enables raw mode.
    #[instrument]
    pub fn enable() -> std::io::Result<Self> {
        terminal::enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        if let Err(e) = terminal::disable_raw_mode() {
            warn!(error = %e, "Failed to restore terminal mode");
        }
    }
}

/// Spawns a thread forwarding key presses until the receiver is dropped.
#[instrument]
pub fn spawn_reader() -> mpsc::UnboundedReceiver<KeyCode> {
    let (tx, rx) = mpsc::unbounded_channel();
    std::thread::spawn(move || {
        while !tx.is_closed() {
            match event::poll(Duration::from_millis(100)) {
                Ok(false) => continue,
                Ok(true) => {}
                Err(e) => {
                    warn!(error = %e, "Polling terminal events failed");
                    break;
                }
            }
            match event::read() {
                Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                    trace!(code = ?key.code, "Key pressed");
                    if tx.send(key.code).is_err() {
                        break;
                    }
                }
                Ok(_) => {}
                Err(e) => {
                    warn!(error = %e, "Reading terminal event failed");
                    break;
                }
            }
        }
        debug!("Key reader stopped");
    });
    rx
}

/// Human input from the keyboard.
///
/// `q` or `Esc` ends the stream; keys that do not resolve to a cell are
/// dropped.
pub struct KeyboardInput {
    keys: mpsc::UnboundedReceiver<KeyCode>,
    layout: KeyLayout,
    quit: bool,
}

impl KeyboardInput {
    /// Creates input over a stream of key codes.
    pub fn new(keys: mpsc::UnboundedReceiver<KeyCode>, layout: KeyLayout) -> Self {
        Self {
            keys,
            layout,
            quit: false,
        }
    }

    /// True once the player asked to quit or the key stream ended.
    pub fn has_quit(&self) -> bool {
        self.quit
    }

    /// Waits for a yes/no answer. `y` or `Enter` means yes.
    #[instrument(skip(self))]
    pub async fn confirm(&mut self) -> bool {
        if self.quit {
            return false;
        }
        match self.keys.recv().await {
            Some(KeyCode::Char('y' | 'Y') | KeyCode::Enter) => true,
            Some(_) => false,
            None => {
                self.quit = true;
                false
            }
        }
    }
}

#[async_trait::async_trait]
impl MoveSource for KeyboardInput {
    #[instrument(skip(self))]
    async fn next_selection(&mut self) -> Option<u8> {
        while !self.quit {
            match self.keys.recv().await {
                None | Some(KeyCode::Esc | KeyCode::Char('q' | 'Q')) => {
                    debug!("Quit requested");
                    self.quit = true;
                }
                Some(KeyCode::Char(key)) => {
                    if let Some(number) = self.layout.resolve(key) {
                        return Some(number);
                    }
                    trace!(%key, "Key does not select a cell");
                }
                Some(code) => trace!(?code, "Ignoring key"),
            }
        }
        None
    }
}
