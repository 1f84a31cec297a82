//! Search engine and the move-selector facade used by the game loop

use super::{SearchReport, SearchStrategy, Strategy, iterative_deepening::DEFAULT_MAX_DEPTH};
use crate::{
    Result,
    board::{BoardState, Mark, Move},
};

/// Drives one strategy to a single recommended move.
///
/// Unlike the bare strategies, the engine checks its preconditions and fails
/// before searching when they do not hold.
pub struct SearchEngine {
    strategy: Box<dyn SearchStrategy>,
}

impl SearchEngine {
    pub fn new(strategy: Box<dyn SearchStrategy>) -> Self {
        Self { strategy }
    }

    pub fn strategy_name(&self) -> &'static str {
        self.strategy.name()
    }

    /// Search `board` for `mark`.
    ///
    /// # Errors
    ///
    /// - [`crate::Error::InvalidSearchMark`] when `mark` is `Empty`
    /// - [`crate::Error::NoEmptyCells`] when there is nowhere left to move
    pub fn run(&self, board: &BoardState, mark: Mark) -> Result<SearchReport> {
        if mark == Mark::Empty {
            return Err(crate::Error::InvalidSearchMark);
        }
        if board.check_full() {
            return Err(crate::Error::NoEmptyCells);
        }
        Ok(self.strategy.search(board, mark))
    }
}

/// Binds a [`Strategy`] to a [`SearchEngine`] and exposes one entry point.
///
/// The selector never changes the board; applying the returned move is the
/// caller's job.
///
/// # Examples
///
/// ```
/// use xo_search::{BoardState, Mark, Move, MoveSelector, Strategy};
///
/// let board = BoardState::parse("OO./XX./X..")?;
/// let selector = MoveSelector::new(Strategy::BreadthFirst);
/// assert_eq!(selector.select_move(&board, Mark::O)?, Some(Move::new(0, 2)));
/// # Ok::<(), xo_search::Error>(())
/// ```
pub struct MoveSelector {
    strategy: Strategy,
    max_depth: usize,
    engine: SearchEngine,
}

impl MoveSelector {
    pub fn new(strategy: Strategy) -> Self {
        Self::with_max_depth(strategy, DEFAULT_MAX_DEPTH)
    }

    /// Selector whose iterative deepening stops at `max_depth`.
    pub fn with_max_depth(strategy: Strategy, max_depth: usize) -> Self {
        Self {
            strategy,
            max_depth,
            engine: SearchEngine::new(strategy.build(max_depth)),
        }
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// The move this selector's strategy recommends for `mark`, if any.
    pub fn select_move(&self, board: &BoardState, mark: Mark) -> Result<Option<Move>> {
        Ok(self.engine.run(board, mark)?.best_move())
    }

    /// Like [`MoveSelector::select_move`], with the full search report.
    pub fn select_with_report(&self, board: &BoardState, mark: Mark) -> Result<SearchReport> {
        self.engine.run(board, mark)
    }
}

impl Default for MoveSelector {
    fn default() -> Self {
        Self::new(Strategy::default())
    }
}
