//! Command-line interface for tictac.

use crate::mode::GameMode;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Tic-tac-toe in the terminal, against a friend or the computer
#[derive(Parser, Debug)]
#[command(name = "tictac")]
#[command(about = "Terminal tic-tac-toe with a score tally", long_about = None)]
#[command(version)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Options for `play` when no subcommand is given
    #[command(flatten)]
    pub play: PlayArgs,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively in the terminal
    Play(PlayArgs),

    /// Let the computer play itself and print the tally
    Auto {
        /// Number of rounds to play
        #[arg(short, long, default_value = "100")]
        games: u32,

        /// Seed for reproducible runs
        #[arg(long)]
        seed: Option<u64>,
    },
}

/// Options for interactive play. Unset flags fall back to the config file.
#[derive(Args, Debug)]
pub struct PlayArgs {
    /// Path to the TOML config file
    #[arg(short, long, default_value = "tictac.toml")]
    pub config: PathBuf,

    /// Opponent mode
    #[arg(short, long, value_enum)]
    pub mode: Option<GameMode>,

    /// Computer thinking delay in milliseconds
    #[arg(long)]
    pub delay_ms: Option<u64>,

    /// Seed for the computer's tie-breaks
    #[arg(long)]
    pub seed: Option<u64>,

    /// Log file path
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}
