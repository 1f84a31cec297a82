//! Simulate command - play many games against a random opponent

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use crate::{
    RandomAgent, run_matches,
    cli::{
        config::SearchArgs,
        output::{create_progress, format_number, print_kv, print_section},
    },
};

#[derive(Parser, Debug)]
#[command(about = "Play the computer against a random opponent")]
pub struct SimulateArgs {
    /// Number of games
    #[arg(long, short = 'g', default_value_t = 100)]
    pub games: usize,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,

    #[command(flatten)]
    pub search: SearchArgs,

    /// Export the summary to a JSON file
    #[arg(long)]
    pub export: Option<PathBuf>,

    /// Hide the progress bar
    #[arg(long)]
    pub quiet: bool,
}

pub fn execute(args: SimulateArgs) -> Result<()> {
    let config = args.search.resolve()?;
    let mut agent = match args.seed {
        Some(seed) => RandomAgent::with_seed("random".to_string(), seed),
        None => RandomAgent::new("random".to_string()),
    };

    print_section("Simulation");
    print_kv("Strategy", &config.strategy.to_string());
    print_kv("Games", &format_number(args.games));
    if let Some(seed) = args.seed {
        print_kv("Seed", &seed.to_string());
    }

    let progress = (!args.quiet).then(|| create_progress(args.games as u64));
    let summary = run_matches(&config, &mut agent, args.games, |record| {
        if let Some(pb) = &progress {
            pb.set_message(record.outcome.to_string());
            pb.inc(1);
        }
    })?;
    if let Some(pb) = progress {
        pb.finish_and_clear();
    }

    let pct = |n: usize| {
        if summary.games == 0 {
            0.0
        } else {
            n as f64 * 100.0 / summary.games as f64
        }
    };
    print_section("Results");
    print_kv(
        "Player 1 (random)",
        &format!("{} ({:.1}%)", summary.player1_wins, pct(summary.player1_wins)),
    );
    print_kv(
        "Player 2 (computer)",
        &format!("{} ({:.1}%)", summary.player2_wins, pct(summary.player2_wins)),
    );
    print_kv(
        "Draws",
        &format!("{} ({:.1}%)", summary.draws, pct(summary.draws)),
    );

    if let Some(path) = &args.export {
        summary.write_json(path)?;
        println!("\n✓ Results exported to: {}", path.display());
    }

    Ok(())
}
