//! xo - uninformed search move selection for tic-tac-toe
//!
//! This CLI provides:
//! - Single move recommendations for a board
//! - Side-by-side comparison of the four search strategies
//! - An interactive game against the computer
//! - Batch simulations against a random opponent

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "xo")]
#[command(version, about = "Tic-tac-toe move selection by uninformed search", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Recommend a move for a board
    Suggest(xo_search::cli::commands::suggest::SuggestArgs),

    /// Run all four strategies on one board
    Compare(xo_search::cli::commands::compare::CompareArgs),

    /// Play against the computer in the terminal
    Play(xo_search::cli::commands::play::PlayArgs),

    /// Play the computer against a random opponent
    Simulate(xo_search::cli::commands::simulate::SimulateArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Suggest(args) => xo_search::cli::commands::suggest::execute(args),
        Commands::Compare(args) => xo_search::cli::commands::compare::execute(args),
        Commands::Play(args) => xo_search::cli::commands::play::execute(args),
        Commands::Simulate(args) => xo_search::cli::commands::simulate::execute(args),
    }
}
