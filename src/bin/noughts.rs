//! noughts CLI - Tic-Tac-Toe against a minimax engine
//!
//! This CLI provides:
//! - An interactive game against the random or optimal engine
//! - Engine-versus-engine batches
//! - Position analysis with per-move minimax scores
//!
//! Set `RUST_LOG` (e.g. `RUST_LOG=noughts=debug`) to see engine logs on stderr.

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "noughts")]
#[command(version, about = "Tic-Tac-Toe with an optimal opponent", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play against the engine
    Play(noughts::cli::commands::play::PlayArgs),

    /// Play the engine against itself
    SelfPlay(noughts::cli::commands::self_play::SelfPlayArgs),

    /// Score every move of a position
    Analyze(noughts::cli::commands::analyze::AnalyzeArgs),
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Play(args) => noughts::cli::commands::play::execute(args),
        Commands::SelfPlay(args) => noughts::cli::commands::self_play::execute(args),
        Commands::Analyze(args) => noughts::cli::commands::analyze::execute(args),
    }
}
