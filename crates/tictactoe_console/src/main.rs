//! Tic-tac-toe console
//!
//! Plays tic-tac-toe in the terminal against a heuristic opponent.

use anyhow::Result;
use clap::Parser;
use tictactoe_console::{Cli, Command, Settings, app};
use tracing::{info, instrument};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let settings = cli.apply(Settings::load(&cli.config)?);
    initialize_tracing(&settings);

    match cli.resolved_command() {
        Command::Play { games, stats_json } => play(&settings, games, stats_json).await,
        Command::ShowConfig => {
            print!("{}", settings.to_toml()?);
            Ok(())
        }
    }
}

/// Runs the match and prints the final statistics.
#[instrument(skip(settings))]
async fn play(settings: &Settings, games: Option<u32>, stats_json: bool) -> Result<()> {
    info!(layout = %settings.layout(), seed = ?settings.seed(), "Starting match");

    let statistics = app::run(settings, games).await?;

    println!();
    println!("{statistics}");
    if stats_json {
        println!("{}", serde_json::to_string_pretty(&statistics)?);
    }
    Ok(())
}

/// Logs go to stderr so they never interleave with the board.
fn initialize_tracing(settings: &Settings) {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(settings.log_filter())),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("Tracing initialized");
}
