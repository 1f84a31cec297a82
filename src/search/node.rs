//! Search nodes, results, and the shared expansion step

use serde::{Deserialize, Serialize};

use crate::board::{BoardState, Mark, Move, successors};

/// A frontier entry: an owned board and the moves that produced it
#[derive(Debug, Clone)]
pub struct SearchNode {
    pub state: BoardState,
    pub path: Vec<Move>,
}

impl SearchNode {
    pub fn root(board: &BoardState) -> Self {
        SearchNode {
            state: board.clone(),
            path: Vec::new(),
        }
    }

    /// Number of placements from the root. Doubles as the path cost, since
    /// every placement costs 1.
    pub fn depth(&self) -> usize {
        self.path.len()
    }

    fn child(&self, state: BoardState, mv: Move) -> Self {
        let mut path = Vec::with_capacity(self.path.len() + 1);
        path.extend_from_slice(&self.path);
        path.push(mv);
        SearchNode { state, path }
    }
}

/// How a search ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SearchOutcome {
    /// A successor completed a line for the searching mark.
    Win(Move),
    /// The frontier emptied; the move is the first step of the last popped path.
    Fallback(Move),
    /// The frontier emptied and the last popped node was the root.
    NoMove,
}

impl SearchOutcome {
    pub fn best_move(self) -> Option<Move> {
        match self {
            SearchOutcome::Win(mv) | SearchOutcome::Fallback(mv) => Some(mv),
            SearchOutcome::NoMove => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SearchOutcome::Win(_) => "win",
            SearchOutcome::Fallback(_) => "fallback",
            SearchOutcome::NoMove => "none",
        }
    }

    /// Outcome once the frontier is empty, taken from the last popped path.
    pub(crate) fn from_last_path(path: Option<&[Move]>) -> Self {
        match path.and_then(|p| p.first()) {
            Some(mv) => SearchOutcome::Fallback(*mv),
            None => SearchOutcome::NoMove,
        }
    }
}

/// Result of running one strategy on one board
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchReport {
    pub outcome: SearchOutcome,
    /// Frontier pops, across all depth levels for iterative deepening
    pub nodes_expanded: usize,
}

impl SearchReport {
    pub fn best_move(&self) -> Option<Move> {
        self.outcome.best_move()
    }
}

/// Generate `node`'s successors for `mark` in row-major order.
///
/// Returns the first successor's move that completes a line, without handing
/// any further successors to `push`. Otherwise every successor is handed to
/// `push` as a child node and `None` is returned.
pub(crate) fn expand<F>(node: &SearchNode, mark: Mark, mut push: F) -> Option<Move>
where
    F: FnMut(SearchNode),
{
    for (state, mv) in successors(&node.state, mark) {
        if state.check_win(mark) {
            return Some(mv);
        }
        push(node.child(state, mv));
    }
    None
}
