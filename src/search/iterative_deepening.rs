//! Iterative deepening over depth-limited depth-first search

use super::{SearchOutcome, SearchReport, SearchStrategy, depth_first::depth_limited};
use crate::board::{BoardState, Mark};

/// Depth limit used when none is configured
pub const DEFAULT_MAX_DEPTH: usize = 5;

/// Runs depth-limited search for limits `1..=max_depth` and returns the first
/// level that yields any move.
///
/// A level's move may be a win or that level's fallback; both end the
/// deepening loop.
#[derive(Debug, Clone, Copy)]
pub struct IterativeDeepening {
    pub max_depth: usize,
}

impl IterativeDeepening {
    pub fn new(max_depth: usize) -> Self {
        Self { max_depth }
    }
}

impl Default for IterativeDeepening {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_DEPTH)
    }
}

impl SearchStrategy for IterativeDeepening {
    fn search(&self, board: &BoardState, mark: Mark) -> SearchReport {
        let mut nodes_expanded = 0;

        for limit in 1..=self.max_depth {
            let level = depth_limited(board, mark, limit);
            nodes_expanded += level.nodes_expanded;
            if level.outcome != SearchOutcome::NoMove {
                return SearchReport {
                    outcome: level.outcome,
                    nodes_expanded,
                };
            }
        }

        SearchReport {
            outcome: SearchOutcome::NoMove,
            nodes_expanded,
        }
    }

    fn name(&self) -> &'static str {
        "iterative-deepening"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Move;

    #[test]
    fn test_empty_board_stops_at_depth_one_fallback() {
        let report = IterativeDeepening::default().search(&BoardState::new(), Mark::O);
        assert_eq!(report.outcome, SearchOutcome::Fallback(Move::new(0, 0)));
        assert_eq!(report.nodes_expanded, 10);
    }

    #[test]
    fn test_depth_one_finds_immediate_win() {
        let board = BoardState::parse("X.X/OO./X..").unwrap();
        let report = IterativeDeepening::new(1).search(&board, Mark::O);
        assert_eq!(report.outcome, SearchOutcome::Win(Move::new(1, 2)));
    }

    #[test]
    fn test_zero_depth_returns_no_move() {
        let board = BoardState::parse("X.X/OO./X..").unwrap();
        let report = IterativeDeepening::new(0).search(&board, Mark::O);
        assert_eq!(report.outcome, SearchOutcome::NoMove);
        assert_eq!(report.nodes_expanded, 0);
    }

    #[test]
    fn test_full_board_exhausts_every_level() {
        let board = BoardState::parse("XOX/OXO/OXO").unwrap();
        let report = IterativeDeepening::new(3).search(&board, Mark::O);
        assert_eq!(report.outcome, SearchOutcome::NoMove);
        assert_eq!(report.nodes_expanded, 3);
    }
}
