//! Turn orchestration between the human and the heuristic.

use crate::cell::Cell;
use crate::collaborators::{BoardRenderer, MoveSource, OutcomeReporter};
use crate::random::RandomSource;
use crate::session::{SessionFinished, SessionInProgress, SessionSetup, Turn};
use derive_more::{Display, Error};
use tracing::{debug, info, instrument, warn};

/// Why a session stopped before reaching a terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum SessionError {
    /// The input stream ended while waiting on the human.
    #[display("Input closed before the game ended")]
    InputClosed,
}

/// Drives one session from setup to a terminal state.
pub struct Orchestrator<'a> {
    input: &'a mut dyn MoveSource,
    renderer: &'a mut dyn BoardRenderer,
    reporter: &'a mut dyn OutcomeReporter,
    random: &'a mut dyn RandomSource,
}

impl<'a> Orchestrator<'a> {
    /// Creates a new orchestrator over borrowed collaborators.
    pub fn new(
        input: &'a mut dyn MoveSource,
        renderer: &'a mut dyn BoardRenderer,
        reporter: &'a mut dyn OutcomeReporter,
        random: &'a mut dyn RandomSource,
    ) -> Self {
        Self {
            input,
            renderer,
            reporter,
            random,
        }
    }

    /// Runs the game loop.
    ///
    /// The board is checked for a terminal state before every move,
    /// including the first. The outcome is reported exactly once. If input
    /// closes mid-game nothing is reported.
    #[instrument(skip(self, setup), fields(human = %setup.human()))]
    pub async fn run(&mut self, setup: SessionSetup) -> Result<SessionFinished, SessionError> {
        info!("Starting session");
        self.reporter.reset();
        self.renderer.render(setup.board(), *setup.human());

        let mut session = setup.start();
        loop {
            session = match session.finish() {
                Ok(finished) => {
                    self.reporter
                        .report(*finished.outcome(), *finished.human());
                    return Ok(finished);
                }
                Err(session) => session,
            };

            match session.turn() {
                Turn::Human => self.human_turn(&mut session).await?,
                Turn::Opponent => {
                    let cell = session.play_opponent(&mut *self.random);
                    info!(%cell, "Opponent moved");
                }
            }

            self.renderer.render(session.board(), session.human());
        }
    }

    /// Waits until the human picks an empty cell.
    ///
    /// Out-of-range numbers and occupied cells are dropped silently.
    #[instrument(skip_all)]
    async fn human_turn(&mut self, session: &mut SessionInProgress) -> Result<(), SessionError> {
        loop {
            let Some(number) = self.input.next_selection().await else {
                warn!("Input closed during human turn");
                return Err(SessionError::InputClosed);
            };

            let Some(cell) = Cell::from_number(number) else {
                debug!(number, "Ignoring selection outside the board");
                continue;
            };

            if session.play_human(cell) {
                info!(%cell, "Human moved");
                return Ok(());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;
    use crate::cell::Player;
    use crate::collaborators::{ChannelMoveSource, NullRenderer};
    use crate::outcome::Outcome;
    use crate::random::RngSource;

    #[derive(Default)]
    struct CountingReporter {
        resets: usize,
        reports: Vec<Outcome>,
    }

    impl OutcomeReporter for CountingReporter {
        fn reset(&mut self) {
            self.resets += 1;
        }

        fn report(&mut self, outcome: Outcome, _human: Player) {
            self.reports.push(outcome);
        }
    }

    #[derive(Default)]
    struct Frames(Vec<Board>);

    impl BoardRenderer for Frames {
        fn render(&mut self, board: &Board, _human: Player) {
            self.0.push(board.clone());
        }
    }

    #[tokio::test]
    async fn test_closed_input_aborts_without_report() {
        let (tx, mut input) = ChannelMoveSource::channel();
        drop(tx);
        let mut renderer = NullRenderer;
        let mut reporter = CountingReporter::default();
        let mut random = RngSource::seeded(0);

        let result = Orchestrator::new(&mut input, &mut renderer, &mut reporter, &mut random)
            .run(SessionSetup::with_human(Player::X))
            .await;

        assert_eq!(result.unwrap_err(), SessionError::InputClosed);
        assert_eq!(reporter.resets, 1);
        assert!(reporter.reports.is_empty());
    }

    #[tokio::test]
    async fn test_renders_setup_and_every_move() {
        let (tx, mut input) = ChannelMoveSource::channel();
        for number in 1..=9 {
            tx.send(number).unwrap();
        }
        let mut renderer = Frames::default();
        let mut reporter = CountingReporter::default();
        let mut random = RngSource::seeded(9);

        let finished = Orchestrator::new(&mut input, &mut renderer, &mut reporter, &mut random)
            .run(SessionSetup::with_human(Player::X))
            .await
            .unwrap();

        let frames = renderer.0;
        assert_eq!(frames.len(), finished.history().len() + 1);
        assert_eq!(frames[0], Board::new());
        assert_eq!(frames.last(), Some(finished.board()));
        assert_eq!(reporter.reports, vec![*finished.outcome()]);
    }
}
