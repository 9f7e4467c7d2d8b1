//! Terminal rendering and outcome reporting.
//!
//! Output goes through crossterm commands and ends lines with `\r\n`, since
//! the terminal is in raw mode while a match runs.

use crate::indicator::TerminalIndicator;
use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::style::{Print, Stylize};
use crossterm::terminal::{Clear, ClearType};
use std::io::Write;
use tictactoe_core::{
    Board, BoardRenderer, Cell, Mark, Outcome, OutcomeReporter, Player, Statistics, Verdict,
};
use tracing::{info, instrument, warn};

/// Draws the board to a terminal.
pub struct ConsoleRenderer<W: Write> {
    out: W,
}

impl<W: Write> ConsoleRenderer<W> {
    /// Creates a renderer writing to `out`.
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Consumes the renderer, returning the writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn draw(&mut self, board: &Board, human: Player) -> std::io::Result<()> {
        queue!(
            self.out,
            Clear(ClearType::All),
            MoveTo(0, 0),
            Print(format!("Tic-tac-toe: you are {}, the computer is {}\r\n", human, human.opposite())),
            Print("Pick a cell with the number keys, q to quit\r\n\r\n"),
        )?;

        for row in Cell::ALL.chunks(3) {
            for (col, &cell) in row.iter().enumerate() {
                let glyph = match board.get(cell) {
                    Mark::Empty => cell.number().to_string().dark_grey(),
                    Mark::Occupied(Player::X) => "X".to_string().bold().cyan(),
                    Mark::Occupied(Player::O) => "O".to_string().bold().magenta(),
                };
                queue!(self.out, Print(" "), Print(glyph), Print(" "))?;
                if col < 2 {
                    queue!(self.out, Print("|"))?;
                }
            }
            queue!(self.out, Print("\r\n"))?;
            if row[0] != Cell::BottomLeft {
                queue!(self.out, Print("---+---+---\r\n"))?;
            }
        }
        self.out.flush()
    }
}

impl<W: Write> BoardRenderer for ConsoleRenderer<W> {
    fn render(&mut self, board: &Board, human: Player) {
        if let Err(e) = self.draw(board, human) {
            warn!(error = %e, "Failed to draw board");
        }
    }
}

/// Prints the verdict, keeps the statistics and drives the indicator.
pub struct ConsoleReporter<W: Write> {
    out: W,
    statistics: Statistics,
    indicator: TerminalIndicator,
}

impl<W: Write> ConsoleReporter<W> {
    /// Creates a reporter with empty statistics.
    pub fn new(out: W, indicator: TerminalIndicator) -> Self {
        Self {
            out,
            statistics: Statistics::new(),
            indicator,
        }
    }

    /// Totals so far.
    pub fn statistics(&self) -> &Statistics {
        &self.statistics
    }

    /// The outcome indicator.
    pub fn indicator(&self) -> &TerminalIndicator {
        &self.indicator
    }

    /// Consumes the reporter, returning the writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    /// Asks whether to play another game.
    pub fn prompt_rematch(&mut self) {
        if let Err(e) = self.write_line("Play again? (y/n)") {
            warn!(error = %e, "Failed to print prompt");
        }
    }

    fn announce(&mut self, verdict: Verdict) -> std::io::Result<()> {
        self.write_line("")?;
        self.write_line(&verdict.to_string())?;
        self.indicator.flash(&mut self.out, verdict)?;
        let totals = self.statistics.to_string();
        self.write_line(&totals)
    }

    fn write_line(&mut self, text: &str) -> std::io::Result<()> {
        queue!(self.out, Print(text), Print("\r\n"))?;
        self.out.flush()
    }
}

impl<W: Write> OutcomeReporter for ConsoleReporter<W> {
    fn reset(&mut self) {
        self.indicator.reset();
    }

    #[instrument(skip(self))]
    fn report(&mut self, outcome: Outcome, human: Player) {
        let verdict = outcome.verdict_for(human);
        self.statistics.record(verdict);
        info!(%verdict, statistics = %self.statistics, "Game reported");

        if let Err(e) = self.announce(verdict) {
            warn!(error = %e, "Failed to print outcome");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_shows_marks_and_free_numbers() {
        let mut board = Board::new();
        board.place(Cell::Center, Player::X);
        board.place(Cell::TopLeft, Player::O);

        let mut renderer = ConsoleRenderer::new(Vec::new());
        renderer.render(&board, Player::X);
        let text = String::from_utf8(renderer.into_inner()).unwrap();

        assert!(text.contains("you are X, the computer is O"));
        assert!(text.contains('X'));
        assert!(text.contains('O'));
        assert!(text.contains('9'));
        assert_eq!(text.matches("---+---+---").count(), 2);
    }

    #[test]
    fn test_report_counts_from_human_side() {
        let mut reporter = ConsoleReporter::new(Vec::new(), TerminalIndicator::new(true));
        reporter.report(Outcome::Winner(Player::O), Player::O);
        reporter.report(Outcome::Winner(Player::X), Player::O);
        reporter.report(Outcome::Tie, Player::X);

        assert_eq!(*reporter.statistics().wins(), 1);
        assert_eq!(*reporter.statistics().losses(), 1);
        assert_eq!(*reporter.statistics().ties(), 1);

        let text = String::from_utf8(reporter.into_inner()).unwrap();
        assert!(text.contains("You win!"));
        assert!(text.contains("You lose!"));
        assert!(text.contains("Tie!"));
    }

    #[test]
    fn test_reset_darkens_indicator() {
        let mut reporter = ConsoleReporter::new(Vec::new(), TerminalIndicator::new(true));
        reporter.report(Outcome::Tie, Player::X);
        assert!(reporter.indicator().lit().is_some());
        reporter.reset();
        assert!(reporter.indicator().lit().is_none());
    }
}
