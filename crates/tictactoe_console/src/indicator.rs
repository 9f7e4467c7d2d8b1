//! Outcome indicator: a blinking banner whose color and rhythm depend on the verdict.

use crossterm::queue;
use crossterm::style::{
    Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
};
use std::io::Write;
use tictactoe_core::Verdict;
use tracing::{debug, instrument};

/// What the indicator shows for one verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlashPattern {
    /// Banner background.
    pub color: Color,
    /// Blink attribute (terminal-driven).
    pub blink: Attribute,
    /// Banner text.
    pub label: &'static str,
}

impl FlashPattern {
    /// Pattern for a verdict. Each verdict gets a distinct one.
    pub fn for_verdict(verdict: Verdict) -> Self {
        match verdict {
            Verdict::Win => Self {
                color: Color::DarkGreen,
                blink: Attribute::SlowBlink,
                label: "  WIN  ",
            },
            Verdict::Loss => Self {
                color: Color::DarkRed,
                blink: Attribute::RapidBlink,
                label: "  LOSS  ",
            },
            Verdict::Tie => Self {
                color: Color::DarkYellow,
                blink: Attribute::Reverse,
                label: "  TIE  ",
            },
        }
    }
}

/// Terminal stand-in for a physical outcome light.
#[derive(Debug, Clone, Default)]
pub struct TerminalIndicator {
    enabled: bool,
    lit: Option<Verdict>,
}

impl TerminalIndicator {
    /// Creates a dark indicator.
    pub fn new(enabled: bool) -> Self {
        Self { enabled, lit: None }
    }

    /// Verdict currently shown, if any.
    pub fn lit(&self) -> Option<Verdict> {
        self.lit
    }

    /// Goes dark.
    pub fn reset(&mut self) {
        self.lit = None;
    }

    /// Shows the pattern for `verdict`.
    #[instrument(skip(self, out))]
    pub fn flash<W: Write>(&mut self, out: &mut W, verdict: Verdict) -> std::io::Result<()> {
        if !self.enabled {
            return Ok(());
        }
        let pattern = FlashPattern::for_verdict(verdict);
        debug!(?pattern, "Lighting indicator");
        queue!(
            out,
            SetForegroundColor(Color::White),
            SetBackgroundColor(pattern.color),
            SetAttribute(Attribute::Bold),
            SetAttribute(pattern.blink),
            Print(pattern.label),
            SetAttribute(Attribute::Reset),
            ResetColor,
            Print("\r\n"),
        )?;
        self.lit = Some(verdict);
        Ok(())
    }
}
