//! Suggest command - ask the selected strategy for one move

use anyhow::Result;
use clap::Parser;

use crate::{
    BoardState, Mark,
    cli::{
        config::SearchArgs,
        output::{format_move, format_number, print_kv, render_board},
    },
};

#[derive(Parser, Debug)]
#[command(about = "Recommend a move for a board")]
pub struct SuggestArgs {
    /// Board as rows separated by '/', e.g. "X.O/.X./..."
    pub board: String,

    /// Mark to search for (defaults to the computer's mark)
    #[arg(long, short = 'm')]
    pub mark: Option<String>,

    #[command(flatten)]
    pub search: SearchArgs,

    /// Show the board, search outcome and node count
    #[arg(long, short = 'v')]
    pub verbose: bool,
}

pub fn execute(args: SuggestArgs) -> Result<()> {
    let config = args.search.resolve()?;
    let board = BoardState::parse_sized(&args.board, config.board_size)?;
    let mark = match &args.mark {
        Some(mark) => mark.parse::<Mark>()?,
        None => config.computer_mark,
    };

    let report = config.selector().select_with_report(&board, mark)?;

    if args.verbose {
        println!("{}", render_board(&board));
        print_kv("Strategy", &config.strategy.to_string());
        print_kv("Mark", &mark.to_string());
        print_kv("Outcome", report.outcome.label());
        print_kv("Nodes expanded", &format_number(report.nodes_expanded));
    }
    println!("{}", format_move(report.best_move()));
    Ok(())
}
