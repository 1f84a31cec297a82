//! Breadth-first search over a FIFO queue

use std::collections::VecDeque;

use super::{
    SearchOutcome, SearchReport, SearchStrategy,
    node::{SearchNode, expand},
};
use crate::board::{BoardState, Mark};

/// Queue-based exploration; nodes are expanded in insertion order.
#[derive(Debug, Clone, Copy, Default)]
pub struct BreadthFirst;

impl SearchStrategy for BreadthFirst {
    fn search(&self, board: &BoardState, mark: Mark) -> SearchReport {
        let mut queue = VecDeque::from([SearchNode::root(board)]);
        let mut last_path = None;
        let mut nodes_expanded = 0;

        while let Some(node) = queue.pop_front() {
            nodes_expanded += 1;
            if let Some(mv) = expand(&node, mark, |child| queue.push_back(child)) {
                return SearchReport {
                    outcome: SearchOutcome::Win(mv),
                    nodes_expanded,
                };
            }
            last_path = Some(node.path);
        }

        SearchReport {
            outcome: SearchOutcome::from_last_path(last_path.as_deref()),
            nodes_expanded,
        }
    }

    fn name(&self) -> &'static str {
        "bfs"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Move;

    #[test]
    fn test_empty_board_completes_top_row() {
        // All nine depth-1 nodes are expanded before the first depth-2 node
        // [(0,0), (0,1)], whose first successor fills the top row.
        let report = BreadthFirst.search(&BoardState::new(), Mark::O);
        assert_eq!(report.outcome, SearchOutcome::Win(Move::new(0, 2)));
        assert_eq!(report.nodes_expanded, 11);
    }

    #[test]
    fn test_fallback_comes_from_last_enqueued_branch() {
        let board = BoardState::parse("X../.XX/.X.").unwrap();
        let report = BreadthFirst.search(&board, Mark::O);
        assert_eq!(report.outcome, SearchOutcome::Fallback(Move::new(2, 2)));
    }

    #[test]
    fn test_full_board_returns_no_move() {
        let board = BoardState::parse("XOX/OXO/OXO").unwrap();
        let report = BreadthFirst.search(&board, Mark::O);
        assert_eq!(report.outcome, SearchOutcome::NoMove);
        assert_eq!(report.nodes_expanded, 1);
    }
}
