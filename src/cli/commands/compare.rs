//! Compare command - run every strategy on one board

use anyhow::Result;
use clap::Parser;
use serde::Serialize;

use crate::{
    BoardState, Mark, SearchReport, SearchStrategy, Strategy,
    cli::output::{format_move, format_number, print_section, render_board},
};

#[derive(Parser, Debug)]
#[command(about = "Run all four strategies on one board")]
pub struct CompareArgs {
    /// Board as rows separated by '/'; size is inferred
    pub board: String,

    /// Mark to search for
    #[arg(long, short = 'm', default_value = "O")]
    pub mark: String,

    /// Depth limit for iterative deepening
    #[arg(long, default_value_t = crate::DEFAULT_MAX_DEPTH)]
    pub max_depth: usize,

    /// Print the comparison as JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
pub struct StrategyRow {
    pub strategy: Strategy,
    pub report: SearchReport,
}

/// Run each strategy directly, so a full board yields "none" rather than an error
pub fn compare_strategies(board: &BoardState, mark: Mark, max_depth: usize) -> Vec<StrategyRow> {
    Strategy::ALL
        .into_iter()
        .map(|strategy| StrategyRow {
            strategy,
            report: strategy.build(max_depth).search(board, mark),
        })
        .collect()
}

pub fn execute(args: CompareArgs) -> Result<()> {
    let board = BoardState::parse(&args.board)?;
    let mark = args.mark.parse::<Mark>()?;
    let rows = compare_strategies(&board, mark, args.max_depth);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    print_section(&format!("Strategies searching for {mark}"));
    println!("{}", render_board(&board));
    println!("  {:<22} {:<10} {:<10} {:>10}", "strategy", "move", "outcome", "nodes");
    for row in &rows {
        println!(
            "  {:<22} {:<10} {:<10} {:>10}",
            row.strategy.to_string(),
            format_move(row.report.best_move()),
            row.report.outcome.label(),
            format_number(row.report.nodes_expanded)
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Move;

    #[test]
    fn test_compare_covers_all_strategies() {
        let rows = compare_strategies(&BoardState::new(), Mark::O, 5);
        let moves: Vec<Option<Move>> = rows.iter().map(|r| r.report.best_move()).collect();
        assert_eq!(
            moves,
            vec![
                Some(Move::new(2, 0)),
                Some(Move::new(0, 2)),
                Some(Move::new(0, 2)),
                Some(Move::new(0, 0)),
            ]
        );
    }
}
