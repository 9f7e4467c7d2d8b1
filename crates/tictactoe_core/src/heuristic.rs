//! Opponent move selection.
//!
//! Three tiers, strictly in order: take an immediate win, block the cell
//! that stops the most opponent threats, otherwise play a random empty cell.

use crate::board::Board;
use crate::cell::{Cell, Player};
use crate::random::RandomSource;
use tracing::{debug, instrument};

/// Why the heuristic picked its cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum Decision {
    /// Completes one of our own lines.
    #[display("win at {_0}")]
    Win(Cell),
    /// Blocks `threats` of the other player's lines at once.
    #[display("block at {cell} ({threats} threat(s))")]
    Block {
        /// Cell to occupy.
        cell: Cell,
        /// How many threat lines pass through it.
        threats: usize,
    },
    /// No win, nothing to block.
    #[display("random at {_0}")]
    Random(Cell),
}

impl Decision {
    /// The chosen cell.
    pub fn cell(self) -> Cell {
        match self {
            Decision::Win(cell) | Decision::Random(cell) => cell,
            Decision::Block { cell, .. } => cell,
        }
    }
}

/// Chooses the cell `opponent` plays next.
///
/// # Panics
///
/// Panics if the board has no empty cell. Callers check for a terminal
/// board first.
pub fn choose_move<R>(board: &Board, opponent: Player, random: &mut R) -> Cell
where
    R: RandomSource + ?Sized,
{
    decide(board, opponent, random).cell()
}

/// Same as [`choose_move`], keeping the reason for the choice.
#[instrument(skip(board, random), fields(board = %board))]
pub fn decide<R>(board: &Board, opponent: Player, random: &mut R) -> Decision
where
    R: RandomSource + ?Sized,
{
    let empty = board.empty_cells();
    assert!(
        !empty.is_empty(),
        "opponent asked to move on a full board"
    );

    let decision = if let Some(cell) = board.find_immediate_win(opponent) {
        Decision::Win(cell)
    } else if let Some((cell, threats)) = best_block(board, opponent.opposite()) {
        Decision::Block { cell, threats }
    } else {
        Decision::Random(empty[random.pick_index(empty.len())])
    };

    debug!(%decision, "Opponent decided");
    decision
}

/// Cell shared by the most `threatening` lines, with its count.
///
/// Candidates are collected line by line in catalogue order. Among cells
/// tied on count, the one collected first wins.
fn best_block(board: &Board, threatening: Player) -> Option<(Cell, usize)> {
    // (cell, count) in order of first appearance
    let mut tally: Vec<(Cell, usize)> = Vec::new();
    for line in board.find_threat_lines(threatening) {
        for cell in board.empty_cells_in(&line) {
            match tally.iter_mut().find(|(c, _)| *c == cell) {
                Some((_, count)) => *count += 1,
                None => tally.push((cell, 1)),
            }
        }
    }

    tally.into_iter().fold(None, |best, (cell, count)| match best {
        Some((_, best_count)) if best_count >= count => best,
        _ => Some((cell, count)),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::RngSource;

    /// Random source that must never be consulted.
    struct NoRandom;

    impl RandomSource for NoRandom {
        fn pick_index(&mut self, _len: usize) -> usize {
            panic!("random fallback used")
        }

        fn coin_flip(&mut self) -> bool {
            panic!("coin flipped")
        }
    }

    fn board_with(x: &[Cell], o: &[Cell]) -> Board {
        let mut board = Board::new();
        for &cell in x {
            board.place(cell, Player::X);
        }
        for &cell in o {
            board.place(cell, Player::O);
        }
        board
    }

    #[test]
    fn test_blocks_single_threat() {
        let board = board_with(&[Cell::TopLeft, Cell::TopCenter], &[Cell::BottomRight]);
        assert_eq!(
            decide(&board, Player::O, &mut NoRandom),
            Decision::Block {
                cell: Cell::TopRight,
                threats: 1
            }
        );
    }

    #[test]
    fn test_win_beats_block() {
        // O can finish the middle column; X threatens the top row.
        let board = board_with(
            &[Cell::TopLeft, Cell::TopRight, Cell::BottomLeft],
            &[Cell::TopCenter, Cell::Center],
        );
        assert_eq!(
            choose_move(&board, Player::O, &mut NoRandom),
            Cell::BottomCenter
        );
    }

    #[test]
    fn test_block_prefers_cell_on_most_threats() {
        // X threatens 2, 4 and 7 once each, and 9 twice (column 3, diagonal).
        let board = board_with(
            &[Cell::TopLeft, Cell::TopRight, Cell::Center, Cell::MiddleRight],
            &[Cell::BottomCenter],
        );
        let decision = decide(&board, Player::O, &mut NoRandom);
        assert_eq!(
            decision,
            Decision::Block {
                cell: Cell::BottomRight,
                threats: 2
            }
        );
    }

    #[test]
    fn test_block_tie_goes_to_first_collected_cell() {
        // Row 1 needs 3, column 1 needs 7, each blocks one threat.
        let board = board_with(&[Cell::TopLeft, Cell::TopCenter, Cell::MiddleLeft], &[]);
        assert_eq!(
            choose_move(&board, Player::O, &mut NoRandom),
            Cell::TopRight
        );
    }

    #[test]
    fn test_random_fallback_picks_empty_cell() {
        let board = board_with(&[Cell::Center], &[]);
        let mut random = RngSource::seeded(3);
        for _ in 0..20 {
            match decide(&board, Player::O, &mut random) {
                Decision::Random(cell) => assert!(board.is_empty(cell)),
                other => panic!("unexpected decision {other:?}"),
            }
        }
    }

    #[test]
    #[should_panic(expected = "full board")]
    fn test_full_board_is_a_precondition_violation() {
        let board = board_with(
            &[
                Cell::TopLeft,
                Cell::TopRight,
                Cell::MiddleLeft,
                Cell::BottomCenter,
                Cell::BottomRight,
            ],
            &[
                Cell::TopCenter,
                Cell::Center,
                Cell::MiddleRight,
                Cell::BottomLeft,
            ],
        );
        choose_move(&board, Player::O, &mut NoRandom);
    }
}
