//! Tic-tac-toe against a heuristic opponent.
//!
//! # Architecture
//!
//! - **Board**: the 9 cells, the 8 winning lines, and the queries the
//!   opponent needs (immediate wins, threat lines, empty cells)
//! - **Heuristic**: win now, else block the most threats, else random
//! - **Session**: setup, in-progress and finished phases as distinct types
//! - **Orchestrator**: alternates turns, enforcing that X always moves first
//! - **Collaborators**: input, rendering and outcome reporting live outside
//!   the core behind traits
//!
//! # Example
//!
//! ```no_run
//! use tictactoe_core::{ChannelMoveSource, NullRenderer, Orchestrator, RngSource, SessionSetup};
//! # use tictactoe_core::{OutcomeReporter, Outcome, Player};
//! # struct Print;
//! # impl OutcomeReporter for Print {
//! #     fn report(&mut self, outcome: Outcome, _human: Player) { println!("{outcome}"); }
//! # }
//!
//! # async fn example() -> Result<(), tictactoe_core::SessionError> {
//! let (tx, mut input) = ChannelMoveSource::channel();
//! let mut random = RngSource::seeded(7);
//! let setup = SessionSetup::new(&mut random);
//! tx.send(5).ok();
//!
//! let finished = Orchestrator::new(&mut input, &mut NullRenderer, &mut Print, &mut random)
//!     .run(setup)
//!     .await?;
//! println!("{}", finished.outcome());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod cell;
mod collaborators;
pub mod heuristic;
mod orchestrator;
mod outcome;
mod random;
mod session;
mod statistics;

pub use board::{Board, Status};
pub use cell::{Cell, LINES, Line, Mark, Player};
pub use collaborators::{BoardRenderer, ChannelMoveSource, MoveSource, NullRenderer, OutcomeReporter};
pub use heuristic::{Decision, choose_move};
pub use orchestrator::{Orchestrator, SessionError};
pub use outcome::{Outcome, Verdict};
pub use random::{RandomSource, RngSource};
pub use session::{Move, SessionFinished, SessionInProgress, SessionSetup, Turn};
pub use statistics::Statistics;
