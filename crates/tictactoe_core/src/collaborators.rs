//! Boundaries to the outside world: input, rendering, outcome reporting.

use crate::board::Board;
use crate::cell::Player;
use crate::outcome::Outcome;
use tokio::sync::mpsc;
use tracing::{debug, instrument};

/// Stream of "select cell N" events for the human's turns.
///
/// Numbers are passed through unvalidated; the orchestrator drops anything
/// outside 1-9 or pointing at an occupied cell and asks again.
#[async_trait::async_trait]
pub trait MoveSource: Send {
    /// Waits for the next selection. `None` once the stream has closed.
    async fn next_selection(&mut self) -> Option<u8>;
}

/// Draws the board after it changes.
pub trait BoardRenderer {
    /// Redraws the current board.
    fn render(&mut self, board: &Board, human: Player);
}

/// Receives the result of a finished game.
pub trait OutcomeReporter {
    /// Called once at setup, before the first move.
    fn reset(&mut self) {}

    /// Called exactly once, when the game reaches a terminal state.
    fn report(&mut self, outcome: Outcome, human: Player);
}

/// [`MoveSource`] fed by an unbounded channel.
#[derive(Debug)]
pub struct ChannelMoveSource {
    rx: mpsc::UnboundedReceiver<u8>,
}

impl ChannelMoveSource {
    /// Wraps a receiver.
    pub fn new(rx: mpsc::UnboundedReceiver<u8>) -> Self {
        Self { rx }
    }

    /// Creates a connected sender/source pair.
    pub fn channel() -> (mpsc::UnboundedSender<u8>, Self) {
        let (tx, rx) = mpsc::unbounded_channel();
        (tx, Self::new(rx))
    }
}

#[async_trait::async_trait]
impl MoveSource for ChannelMoveSource {
    #[instrument(skip(self))]
    async fn next_selection(&mut self) -> Option<u8> {
        let selection = self.rx.recv().await;
        debug!(?selection, "Selection received");
        selection
    }
}

/// Renderer that draws nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullRenderer;

impl BoardRenderer for NullRenderer {
    fn render(&mut self, _board: &Board, _human: Player) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_channel_source_yields_in_order_then_closes() {
        let (tx, mut source) = ChannelMoveSource::channel();
        tx.send(5).unwrap();
        tx.send(1).unwrap();
        drop(tx);

        assert_eq!(source.next_selection().await, Some(5));
        assert_eq!(source.next_selection().await, Some(1));
        assert_eq!(source.next_selection().await, None);
    }
}
