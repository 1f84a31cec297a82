//! Uniform-cost search over a min-priority queue

use std::{
    cmp::{Ordering, Reverse},
    collections::BinaryHeap,
};

use super::{
    SearchOutcome, SearchReport, SearchStrategy,
    node::{SearchNode, expand},
};
use crate::board::{BoardState, Mark};

/// Heap entry ordered by `(cost, seq)`; `seq` is the insertion counter.
struct Prioritized {
    cost: usize,
    seq: u64,
    node: SearchNode,
}

impl Prioritized {
    fn key(&self) -> (usize, u64) {
        (self.cost, self.seq)
    }
}

impl PartialEq for Prioritized {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Prioritized {}

impl PartialOrd for Prioritized {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Prioritized {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key())
    }
}

/// Frontier ordered by cumulative path cost, one unit per placement.
///
/// With unit costs and ties broken by insertion order, nodes pop in the same
/// order as [`super::BreadthFirst`].
#[derive(Debug, Clone, Copy, Default)]
pub struct UniformCost;

impl SearchStrategy for UniformCost {
    fn search(&self, board: &BoardState, mark: Mark) -> SearchReport {
        let mut frontier = BinaryHeap::new();
        let mut seq = 0u64;
        frontier.push(Reverse(Prioritized {
            cost: 0,
            seq,
            node: SearchNode::root(board),
        }));

        let mut last_path = None;
        let mut nodes_expanded = 0;

        while let Some(Reverse(entry)) = frontier.pop() {
            nodes_expanded += 1;
            let cost = entry.cost + 1;
            let node = entry.node;
            let win = expand(&node, mark, |child| {
                seq += 1;
                frontier.push(Reverse(Prioritized {
                    cost,
                    seq,
                    node: child,
                }));
            });
            if let Some(mv) = win {
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
        "ucs"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{board::Move, search::BreadthFirst};

    #[test]
    fn test_matches_breadth_first_on_empty_board() {
        let board = BoardState::new();
        let ucs = UniformCost.search(&board, Mark::O);
        let bfs = BreadthFirst.search(&board, Mark::O);

        assert_eq!(ucs.outcome, SearchOutcome::Win(Move::new(0, 2)));
        assert_eq!(ucs, bfs);
    }

    #[test]
    fn test_matches_breadth_first_fallback() {
        let board = BoardState::parse("X../.XX/.X.").unwrap();
        let ucs = UniformCost.search(&board, Mark::O);
        let bfs = BreadthFirst.search(&board, Mark::O);

        assert_eq!(ucs.outcome, SearchOutcome::Fallback(Move::new(2, 2)));
        assert_eq!(ucs.nodes_expanded, bfs.nodes_expanded);
    }

    #[test]
    fn test_equal_costs_pop_in_insertion_order() {
        let mut heap = BinaryHeap::new();
        for seq in [3u64, 1, 2] {
            heap.push(Reverse(Prioritized {
                cost: 1,
                seq,
                node: SearchNode::root(&BoardState::new()),
            }));
        }
        heap.push(Reverse(Prioritized {
            cost: 0,
            seq: 9,
            node: SearchNode::root(&BoardState::new()),
        }));

        let order: Vec<(usize, u64)> =
            std::iter::from_fn(|| heap.pop().map(|Reverse(e)| e.key())).collect();
        assert_eq!(order, vec![(0, 9), (1, 1), (1, 2), (1, 3)]);
    }
}
