//! Depth-first search over a LIFO stack

use super::{
    SearchOutcome, SearchReport, SearchStrategy,
    node::{SearchNode, expand},
};
use crate::board::{BoardState, Mark};

/// Stack-based exploration.
///
/// Successors are pushed in row-major order, so the last row-major successor
/// is the next one popped.
#[derive(Debug, Clone, Copy, Default)]
pub struct DepthFirst;

impl SearchStrategy for DepthFirst {
    fn search(&self, board: &BoardState, mark: Mark) -> SearchReport {
        let mut stack = vec![SearchNode::root(board)];
        let mut last_path = None;
        let mut nodes_expanded = 0;

        while let Some(node) = stack.pop() {
            nodes_expanded += 1;
            if let Some(mv) = expand(&node, mark, |child| stack.push(child)) {
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
        "dfs"
    }
}

/// Depth-first search that does not expand nodes at or beyond `limit`.
///
/// Nodes past the limit are still popped, so they count as the last visited
/// node for the fallback move.
pub fn depth_limited(board: &BoardState, mark: Mark, limit: usize) -> SearchReport {
    let mut stack = vec![SearchNode::root(board)];
    let mut last_path = None;
    let mut nodes_expanded = 0;

    while let Some(node) = stack.pop() {
        nodes_expanded += 1;
        if node.depth() < limit {
            if let Some(mv) = expand(&node, mark, |child| stack.push(child)) {
                return SearchReport {
                    outcome: SearchOutcome::Win(mv),
                    nodes_expanded,
                };
            }
        }
        last_path = Some(node.path);
    }

    SearchReport {
        outcome: SearchOutcome::from_last_path(last_path.as_deref()),
        nodes_expanded,
    }
}
