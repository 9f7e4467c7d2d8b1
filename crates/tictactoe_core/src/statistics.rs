//! Win/loss/tie counters across sessions.

use crate::outcome::Verdict;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Running totals from the human's point of view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Statistics {
    /// Games the human won.
    wins: u32,
    /// Games the heuristic won.
    losses: u32,
    /// Games nobody won.
    ties: u32,
}

impl Statistics {
    /// Empty counters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts one finished game.
    #[instrument(skip(self))]
    pub fn record(&mut self, verdict: Verdict) {
        match verdict {
            Verdict::Win => self.wins += 1,
            Verdict::Loss => self.losses += 1,
            Verdict::Tie => self.ties += 1,
        }
    }

    /// Total number of games counted.
    pub fn games_played(&self) -> u32 {
        self.wins + self.losses + self.ties
    }

    /// Percentage of games won (0.0 with no games).
    pub fn win_rate(&self) -> f64 {
        if self.games_played() == 0 {
            0.0
        } else {
            f64::from(self.wins) / f64::from(self.games_played()) * 100.0
        }
    }
}

impl std::fmt::Display for Statistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Wins: {}  Losses: {}  Ties: {}",
            self.wins, self.losses, self.ties
        )
    }
}
