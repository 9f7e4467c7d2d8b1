//! Core domain types: players, marks, cells and the line catalogue.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Player in the game.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub enum Player {
    /// Player X (always moves first).
    X,
    /// Player O.
    O,
}

impl Player {
    /// Returns the other player.
    pub fn opposite(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// Contents of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Mark {
    /// Nobody has played here.
    #[default]
    Empty,
    /// Cell holds a player's mark.
    Occupied(Player),
}

impl From<Player> for Mark {
    fn from(player: Player) -> Self {
        Mark::Occupied(player)
    }
}

/// A cell on the board.
///
/// Cells are numbered 1-9 in row-major order for display and input,
/// and indexed 0-8 internally.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Cell {
    /// Top-left (cell 1)
    TopLeft,
    /// Top-center (cell 2)
    TopCenter,
    /// Top-right (cell 3)
    TopRight,
    /// Middle-left (cell 4)
    MiddleLeft,
    /// Center (cell 5)
    Center,
    /// Middle-right (cell 6)
    MiddleRight,
    /// Bottom-left (cell 7)
    BottomLeft,
    /// Bottom-center (cell 8)
    BottomCenter,
    /// Bottom-right (cell 9)
    BottomRight,
}

impl Cell {
    /// All 9 cells in row-major order.
    pub const ALL: [Cell; 9] = [
        Cell::TopLeft,
        Cell::TopCenter,
        Cell::TopRight,
        Cell::MiddleLeft,
        Cell::Center,
        Cell::MiddleRight,
        Cell::BottomLeft,
        Cell::BottomCenter,
        Cell::BottomRight,
    ];

    /// Converts the cell to its board index (0-8).
    pub fn index(self) -> usize {
        self as usize
    }

    /// Converts the cell to its player-facing number (1-9).
    pub fn number(self) -> u8 {
        self as u8 + 1
    }

    /// Resolves a player-facing number (1-9).
    #[instrument]
    pub fn from_number(number: u8) -> Option<Self> {
        match number {
            1..=9 => Self::from_index(usize::from(number - 1)),
            _ => None,
        }
    }

    /// Resolves a board index (0-8).
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Label for this cell (for display).
    pub fn label(self) -> &'static str {
        match self {
            Cell::TopLeft => "Top-left",
            Cell::TopCenter => "Top-center",
            Cell::TopRight => "Top-right",
            Cell::MiddleLeft => "Middle-left",
            Cell::Center => "Center",
            Cell::MiddleRight => "Middle-right",
            Cell::BottomLeft => "Bottom-left",
            Cell::BottomCenter => "Bottom-center",
            Cell::BottomRight => "Bottom-right",
        }
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.label(), self.number())
    }
}

/// Three cells that win the game when uniformly marked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Line([Cell; 3]);

impl Line {
    /// The cells of this line, in catalogue order.
    pub fn cells(&self) -> &[Cell; 3] {
        &self.0
    }

    /// Returns true if the line passes through `cell`.
    pub fn contains(&self, cell: Cell) -> bool {
        self.0.contains(&cell)
    }
}

/// The fixed catalogue of winning lines.
///
/// Order matters: every scan over the board walks this array front to back.
pub const LINES: [Line; 8] = [
    // Rows
    Line([Cell::TopLeft, Cell::TopCenter, Cell::TopRight]),
    Line([Cell::MiddleLeft, Cell::Center, Cell::MiddleRight]),
    Line([Cell::BottomLeft, Cell::BottomCenter, Cell::BottomRight]),
    // Columns
    Line([Cell::TopLeft, Cell::MiddleLeft, Cell::BottomLeft]),
    Line([Cell::TopCenter, Cell::Center, Cell::BottomCenter]),
    Line([Cell::TopRight, Cell::MiddleRight, Cell::BottomRight]),
    // Diagonals
    Line([Cell::TopLeft, Cell::Center, Cell::BottomRight]),
    Line([Cell::TopRight, Cell::Center, Cell::BottomLeft]),
];
