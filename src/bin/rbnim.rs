//! Red-Blue Nim CLI - play against and inspect the adversarial search engine

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "rbnim")]
#[command(version, about = "Two-pile Red-Blue Nim with adversarial search opponents", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play an interactive game against the computer
    Play(rbnim::cli::commands::play::PlayArgs),

    /// Report each search algorithm's choice for one position
    Analyze(rbnim::cli::commands::analyze::AnalyzeArgs),

    /// Exhaustively cross-check the search algorithms
    Verify(rbnim::cli::commands::verify::VerifyArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Play(args) => rbnim::cli::commands::play::execute(args),
        Commands::Analyze(args) => rbnim::cli::commands::analyze::execute(args),
        Commands::Verify(args) => rbnim::cli::commands::verify::execute(args),
    }
}
