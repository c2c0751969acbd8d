//! dicedelve - turn-based dice-combat dungeon crawl
//!
//! Entry point: builds the game state, runs the loop, and decides the
//! process exit. Victory and defeat both exit 0; the narration has already
//! told the story. Only I/O failures exit non-zero.

use std::io;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use dd_cli::App;
use dd_core::{GameRng, GameState};

/// Delve the dungeon, one die at a time
#[derive(Parser, Debug)]
#[command(name = "dicedelve", version, about)]
struct Args {
    /// Seed the RNG for a reproducible delve (default: entropy)
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Diagnostics go to stderr so stdout stays pure narration.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let rng = match args.seed {
        Some(seed) => GameRng::new(seed),
        None => GameRng::from_entropy(),
    };
    tracing::debug!(seed = rng.seed(), "game rng ready");

    let mut app = App::new(GameState::new(rng));
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout();

    let _ = app.run(&mut input, &mut out)?;
    Ok(())
}
