//! Match loop: one session after another until the player stops.

use crate::config::Settings;
use crate::console::{ConsoleRenderer, ConsoleReporter};
use crate::indicator::TerminalIndicator;
use crate::keyboard::{self, KeyboardInput, RawModeGuard};
use std::io::Write;
use tictactoe_core::{
    Orchestrator, RandomSource, RngSource, SessionError, SessionSetup, Statistics,
};
use tracing::{info, instrument};

/// Plays games until `games` is reached, the player declines a rematch,
/// or input closes. Returns the final statistics.
#[instrument(skip_all, fields(games = ?games))]
pub async fn play_match<W, V>(
    input: &mut KeyboardInput,
    renderer: &mut ConsoleRenderer<W>,
    reporter: &mut ConsoleReporter<V>,
    random: &mut dyn RandomSource,
    games: Option<u32>,
) -> Statistics
where
    W: Write,
    V: Write,
{
    let mut played = 0;
    loop {
        let setup = SessionSetup::new(random);
        let result = Orchestrator::new(input, renderer, reporter, random)
            .run(setup)
            .await;

        match result {
            Ok(finished) => {
                played += 1;
                info!(played, outcome = %finished.outcome(), "Game over");
            }
            Err(SessionError::InputClosed) => {
                info!(played, "Player quit mid-game");
                break;
            }
        }

        if games.is_some_and(|limit| played >= limit) {
            break;
        }
        if games.is_none() {
            reporter.prompt_rematch();
            if !input.confirm().await {
                break;
            }
        }
    }
    *reporter.statistics()
}

/// Runs an interactive match on the real terminal.
#[instrument(skip(settings))]
pub async fn run(settings: &Settings, games: Option<u32>) -> anyhow::Result<Statistics> {
    let mut random = match settings.seed() {
        Some(seed) => RngSource::seeded(*seed),
        None => RngSource::from_entropy(),
    };

    let _raw = RawModeGuard::enable()?;
    let mut input = KeyboardInput::new(keyboard::spawn_reader(), *settings.layout());
    let mut renderer = ConsoleRenderer::new(std::io::stdout());
    let mut reporter = ConsoleReporter::new(
        std::io::stdout(),
        TerminalIndicator::new(*settings.indicator()),
    );

    let statistics = play_match(&mut input, &mut renderer, &mut reporter, &mut random, games).await;
    info!(%statistics, "Match finished");
    Ok(statistics)
}
