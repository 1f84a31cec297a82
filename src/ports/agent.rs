//! Agent port - abstraction over sources of moves
//!
//! The session itself only ever asks the [`crate::MoveSelector`] for the
//! computer's moves. An agent stands in for the human side wherever a game is
//! driven without a terminal: simulations, replays and tests.

use crate::{
    Result,
    board::{BoardState, Move},
};

pub trait Agent: Send {
    /// Select a move for the given board.
    ///
    /// # Errors
    ///
    /// Returns an error if no move can be made (for example the board is full).
    fn select_move(&mut self, board: &BoardState) -> Result<Move>;

    /// Agent name, used in summaries
    fn name(&self) -> &str;

    /// Return to initial conditions before a new game.
    ///
    /// The default implementation does nothing, suitable for stateless agents.
    fn reset(&mut self) {}
}
