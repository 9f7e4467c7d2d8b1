//! The 3x3 board and its line queries.
//!
//! Every query is a bounded scan over [`LINES`] in catalogue order, so
//! results are deterministic for a given board.

use crate::cell::{Cell, LINES, Line, Mark, Player};
use crate::outcome::Outcome;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, trace};

/// Result of scanning the board for a terminal condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    /// Moves remain and nobody has a line.
    Ongoing,
    /// Board is full and nobody has a line.
    Tie,
    /// A player holds a full line.
    Winner(Player),
}

impl Status {
    /// Converts a terminal status to an outcome; `None` while ongoing.
    pub fn outcome(self) -> Option<Outcome> {
        match self {
            Status::Ongoing => None,
            Status::Tie => Some(Outcome::Tie),
            Status::Winner(player) => Some(Outcome::Winner(player)),
        }
    }

    /// Returns true if the game can continue.
    pub fn is_ongoing(self) -> bool {
        matches!(self, Status::Ongoing)
    }
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Board {
    /// Marks in row-major order (0-8).
    marks: [Mark; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the mark at the given cell.
    pub fn get(&self, cell: Cell) -> Mark {
        self.marks[cell.index()]
    }

    /// Checks if a cell is empty.
    pub fn is_empty(&self, cell: Cell) -> bool {
        self.get(cell) == Mark::Empty
    }

    /// Returns all marks in row-major order.
    pub fn marks(&self) -> &[Mark; 9] {
        &self.marks
    }

    /// Places `player`'s mark if the cell is empty.
    ///
    /// Returns false, leaving the board untouched, when the cell is occupied.
    /// This is the only way to change a cell.
    #[instrument(skip(self, cell), fields(cell = cell.number()))]
    pub fn place(&mut self, cell: Cell, player: Player) -> bool {
        if !self.is_empty(cell) {
            debug!(occupant = ?self.get(cell), "Cell already occupied");
            return false;
        }
        self.marks[cell.index()] = Mark::from(player);
        true
    }

    /// Checks if every cell holds a mark.
    pub fn is_full(&self) -> bool {
        self.marks.iter().all(|m| *m != Mark::Empty)
    }

    /// Number of cells holding a mark.
    pub fn occupied_count(&self) -> usize {
        self.marks.iter().filter(|m| **m != Mark::Empty).count()
    }

    /// Scans for a winner, then for a full board.
    ///
    /// The first uniformly marked line in catalogue order decides the winner.
    #[instrument(skip(self))]
    pub fn check_terminal(&self) -> Status {
        for line in &LINES {
            let [a, b, c] = *line.cells();
            let mark = self.get(a);
            let Mark::Occupied(player) = mark else {
                continue;
            };
            if mark == self.get(b) && mark == self.get(c) {
                trace!(?line, %player, "Winning line found");
                return Status::Winner(player);
            }
        }

        if self.is_full() {
            Status::Tie
        } else {
            Status::Ongoing
        }
    }

    /// Returns the empty cell of the first line where `player` needs one more mark.
    #[instrument(skip(self))]
    pub fn find_immediate_win(&self, player: Player) -> Option<Cell> {
        LINES
            .iter()
            .find_map(|line| self.completing_cell(line, player))
    }

    /// Returns every line where `player` holds two cells and the third is empty.
    #[instrument(skip(self))]
    pub fn find_threat_lines(&self, player: Player) -> Vec<Line> {
        LINES
            .iter()
            .filter(|line| self.completing_cell(line, player).is_some())
            .copied()
            .collect()
    }

    /// All empty cells, in row-major order.
    pub fn empty_cells(&self) -> Vec<Cell> {
        Cell::ALL
            .iter()
            .copied()
            .filter(|cell| self.is_empty(*cell))
            .collect()
    }

    /// Empty cells of `line`, in line order.
    pub fn empty_cells_in(&self, line: &Line) -> Vec<Cell> {
        line.cells()
            .iter()
            .copied()
            .filter(|cell| self.is_empty(*cell))
            .collect()
    }

    /// The single empty cell of `line` if `player` holds the other two.
    fn completing_cell(&self, line: &Line, player: Player) -> Option<Cell> {
        let mut owned = 0;
        let mut empty = None;
        for &cell in line.cells() {
            match self.get(cell) {
                Mark::Occupied(p) if p == player => owned += 1,
                Mark::Occupied(_) => return None,
                Mark::Empty => empty = Some(cell),
            }
        }
        if owned == 2 { empty } else { None }
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..3 {
            for col in 0..3 {
                let cell = Cell::ALL[row * 3 + col];
                match self.get(cell) {
                    Mark::Empty => write!(f, "{}", cell.number())?,
                    Mark::Occupied(player) => write!(f, "{}", player)?,
                }
                if col < 2 {
                    write!(f, "|")?;
                }
            }
            if row < 2 {
                write!(f, "\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}
