//! tictac - unified CLI

use anyhow::Result;
use clap::Parser;
use tictac::cli::{Cli, Command, PlayArgs};
use tictac::{AppConfig, logging, run_headless, seeded_rng, tui};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (RUST_LOG and friends)
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Some(Command::Play(args)) => run_play(args).await,
        None => run_play(cli.play).await,
        Some(Command::Auto { games, seed }) => run_auto(games, seed),
    }
}

/// Interactive game in the terminal.
async fn run_play(args: PlayArgs) -> Result<()> {
    let config = AppConfig::load_or_default(&args.config)?.with_overrides(
        args.mode,
        args.delay_ms,
        args.seed,
        args.log_file,
    );
    logging::init_file_logging(config.log_file())?;
    info!(?config, "Configuration resolved");

    tui::run_tui(config).await
}

/// Computer plays itself; prints the tally.
fn run_auto(games: u32, seed: Option<u64>) -> Result<()> {
    logging::init_stderr_logging();

    let x_rng = seeded_rng(seed);
    let o_rng = seeded_rng(seed.map(|s| s.wrapping_add(1)));
    let tally = run_headless(games, x_rng, o_rng);

    println!("{} games played", tally.total());
    println!("{}", tally);
    Ok(())
}
