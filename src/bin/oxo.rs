//! oxo CLI - perfect-play tic-tac-toe
//!
//! This CLI provides a unified interface for:
//! - Playing an interactive game against the engine
//! - Analyzing positions with the full-depth minimax search
//! - Exporting move-by-move analysis as JSON

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "oxo")]
#[command(version, about = "Perfect-play tic-tac-toe engine", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play an interactive game as X against the engine
    Play,

    /// Analyze positions with the full-depth search
    Analyze(oxo::cli::analyze::AnalyzeArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Play => oxo::cli::play::execute(),
        Commands::Analyze(args) => oxo::cli::analyze::execute(args),
    }
}
