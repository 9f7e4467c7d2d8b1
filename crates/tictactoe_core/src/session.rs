//! Phase-specific session structs.
//!
//! Each phase is its own type: a [`SessionFinished`] always carries an
//! outcome, and only a [`SessionInProgress`] accepts moves.

use crate::board::{Board, Status};
use crate::cell::{Cell, Player};
use crate::heuristic;
use crate::outcome::{Outcome, Verdict};
use crate::random::RandomSource;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// A mark placed during the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new)]
pub struct Move {
    /// Who placed the mark.
    pub player: Player,
    /// Where it went.
    pub cell: Cell,
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.cell)
    }
}

/// Whose turn it is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Turn {
    /// Waiting on a selection from the input collaborator.
    Human,
    /// The heuristic moves.
    Opponent,
}

// ─────────────────────────────────────────────────────────────
//  Setup Phase
// ─────────────────────────────────────────────────────────────

/// Session before the first move: the human's mark is known, the board is empty.
#[derive(Debug, Clone, Getters)]
pub struct SessionSetup {
    /// The human's mark.
    human: Player,
    /// Always empty.
    board: Board,
}

impl SessionSetup {
    /// Assigns the human X or O with equal probability.
    #[instrument(skip(random))]
    pub fn new<R: RandomSource + ?Sized>(random: &mut R) -> Self {
        let human = if random.coin_flip() { Player::X } else { Player::O };
        info!(%human, "Human mark assigned");
        Self::with_human(human)
    }

    /// Setup with a fixed human mark.
    pub fn with_human(human: Player) -> Self {
        Self {
            human,
            board: Board::new(),
        }
    }

    /// The heuristic's mark.
    pub fn opponent(&self) -> Player {
        self.human.opposite()
    }

    /// Starts play (consumes setup).
    ///
    /// The turn counter starts one ahead when the human holds O, so that
    /// the counter's parity always hands the first move to X.
    #[instrument(skip(self), fields(human = %self.human))]
    pub fn start(self) -> SessionInProgress {
        let turn = match self.human {
            Player::X => 0,
            Player::O => 1,
        };
        SessionInProgress {
            board: self.board,
            human: self.human,
            turn,
            history: Vec::new(),
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  InProgress Phase
// ─────────────────────────────────────────────────────────────

/// Session accepting moves.
///
/// Even counter values belong to the human, odd ones to the heuristic.
#[derive(Debug, Clone)]
pub struct SessionInProgress {
    board: Board,
    human: Player,
    turn: u32,
    history: Vec<Move>,
}

impl SessionInProgress {
    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The human's mark.
    pub fn human(&self) -> Player {
        self.human
    }

    /// The heuristic's mark.
    pub fn opponent(&self) -> Player {
        self.human.opposite()
    }

    /// Raw turn counter.
    pub fn turn_counter(&self) -> u32 {
        self.turn
    }

    /// Whose move it is.
    pub fn turn(&self) -> Turn {
        if self.turn % 2 == 0 {
            Turn::Human
        } else {
            Turn::Opponent
        }
    }

    /// The mark about to be placed.
    pub fn mark_to_move(&self) -> Player {
        match self.turn() {
            Turn::Human => self.human,
            Turn::Opponent => self.opponent(),
        }
    }

    /// Moves made so far.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Current terminal check.
    pub fn status(&self) -> Status {
        self.board.check_terminal()
    }

    /// Applies the human's selection.
    ///
    /// Returns false and changes nothing if the cell is taken; the turn
    /// stays with the human.
    ///
    /// # Panics
    ///
    /// Panics when called on the heuristic's turn.
    #[instrument(skip(self, cell), fields(cell = cell.number(), turn = self.turn))]
    pub fn play_human(&mut self, cell: Cell) -> bool {
        assert_eq!(self.turn(), Turn::Human, "human moved out of turn");
        if !self.board.place(cell, self.human) {
            debug!("Selection rejected");
            return false;
        }
        self.record(Move::new(self.human, cell));
        true
    }

    /// Lets the heuristic move and returns the cell it took.
    ///
    /// # Panics
    ///
    /// Panics when called on the human's turn, on a full board, or if the
    /// chosen cell cannot be placed. All three are logic errors.
    #[instrument(skip(self, random), fields(turn = self.turn))]
    pub fn play_opponent<R: RandomSource + ?Sized>(&mut self, random: &mut R) -> Cell {
        assert_eq!(self.turn(), Turn::Opponent, "opponent moved out of turn");
        let opponent = self.opponent();
        let cell = heuristic::choose_move(&self.board, opponent, random);
        let placed = self.board.place(cell, opponent);
        assert!(placed, "heuristic chose occupied cell {cell}");
        self.record(Move::new(opponent, cell));
        cell
    }

    /// Transitions to [`SessionFinished`] if the board is terminal.
    ///
    /// Hands the session back unchanged while play continues.
    #[instrument(skip(self))]
    pub fn finish(self) -> Result<SessionFinished, SessionInProgress> {
        match self.status().outcome() {
            Some(outcome) => {
                info!(%outcome, moves = self.history.len(), "Session finished");
                Ok(SessionFinished {
                    board: self.board,
                    human: self.human,
                    history: self.history,
                    outcome,
                })
            }
            None => Err(self),
        }
    }

    fn record(&mut self, action: Move) {
        debug!(%action, "Move applied");
        self.history.push(action);
        self.turn += 1;
    }
}

// ─────────────────────────────────────────────────────────────
//  Finished Phase
// ─────────────────────────────────────────────────────────────

/// Session with a decided outcome. Nothing here mutates.
#[derive(Debug, Clone, Getters)]
pub struct SessionFinished {
    /// Final board.
    board: Board,
    /// The human's mark.
    human: Player,
    /// Every move, in play order.
    history: Vec<Move>,
    /// How the game ended.
    outcome: Outcome,
}

impl SessionFinished {
    /// The outcome from the human's point of view.
    pub fn verdict(&self) -> Verdict {
        self.outcome.verdict_for(self.human)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::RngSource;

    #[test]
    fn test_human_x_moves_first() {
        let session = SessionSetup::with_human(Player::X).start();
        assert_eq!(session.turn_counter(), 0);
        assert_eq!(session.turn(), Turn::Human);
        assert_eq!(session.mark_to_move(), Player::X);
    }

    #[test]
    fn test_human_o_waits_for_opponent() {
        let session = SessionSetup::with_human(Player::O).start();
        assert_eq!(session.turn_counter(), 1);
        assert_eq!(session.turn(), Turn::Opponent);
        assert_eq!(session.mark_to_move(), Player::X);
    }

    #[test]
    fn test_rejected_selection_keeps_turn() {
        let mut session = SessionSetup::with_human(Player::O).start();
        let mut random = RngSource::seeded(5);
        let taken = session.play_opponent(&mut random);

        assert_eq!(session.turn(), Turn::Human);
        assert!(!session.play_human(taken));
        assert_eq!(session.turn(), Turn::Human);
        assert_eq!(session.history().len(), 1);
    }

    #[test]
    fn test_setup_assigns_both_marks_over_many_draws() {
        let mut random = RngSource::seeded(11);
        let humans: Vec<_> = (0..64)
            .map(|_| *SessionSetup::new(&mut random).human())
            .collect();
        assert!(humans.contains(&Player::X));
        assert!(humans.contains(&Player::O));
    }

    #[test]
    fn test_finish_returns_session_while_ongoing() {
        let session = SessionSetup::with_human(Player::X).start();
        assert!(session.finish().is_err());
    }

    #[test]
    #[should_panic(expected = "out of turn")]
    fn test_human_cannot_move_on_opponent_turn() {
        let mut session = SessionSetup::with_human(Player::O).start();
        session.play_human(Cell::Center);
    }
}
