//! Terminal outcomes and how they read from the human's seat.

use crate::cell::Player;
use serde::{Deserialize, Serialize};

/// How a finished game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Board filled without a winning line.
    Tie,
    /// A player completed a line.
    Winner(Player),
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Winner(player) => Some(*player),
            Outcome::Tie => None,
        }
    }

    /// Returns true if the game was a tie.
    pub fn is_tie(&self) -> bool {
        matches!(self, Outcome::Tie)
    }

    /// Judges the outcome relative to the human's mark.
    pub fn verdict_for(&self, human: Player) -> Verdict {
        match self {
            Outcome::Tie => Verdict::Tie,
            Outcome::Winner(player) if *player == human => Verdict::Win,
            Outcome::Winner(_) => Verdict::Loss,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Winner(player) => write!(f, "Player {} wins", player),
            Outcome::Tie => write!(f, "Tie"),
        }
    }
}

/// Result of a game from the human's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Verdict {
    /// The human completed a line.
    #[display("You win!")]
    Win,
    /// The computer completed a line.
    #[display("You lose!")]
    Loss,
    /// Nobody did.
    #[display("Tie!")]
    Tie,
}
