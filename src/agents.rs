//! Agent implementations: random, scripted, and search-backed

use rand::{Rng, SeedableRng, random, rngs::StdRng};

use crate::{
    Result,
    board::{BoardState, Mark, Move},
    ports::Agent,
    search::{MoveSelector, Strategy},
};

/// Picks uniformly among empty cells
pub struct RandomAgent {
    name: String,
    rng: StdRng,
}

impl RandomAgent {
    pub fn new(name: String) -> Self {
        Self::with_seed(name, random())
    }

    /// Create a random agent with a deterministic seed
    pub fn with_seed(name: String, seed: u64) -> Self {
        Self {
            name,
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Agent for RandomAgent {
    fn select_move(&mut self, board: &BoardState) -> Result<Move> {
        let moves = board.empty_cells();
        if moves.is_empty() {
            return Err(crate::Error::NoEmptyCells);
        }
        let index = self.rng.random_range(0..moves.len());
        Ok(moves[index])
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Plays a fixed list of moves, then the first empty cell once the list runs out
pub struct ScriptedAgent {
    name: String,
    moves: Vec<Move>,
    next: usize,
}

impl ScriptedAgent {
    pub fn new(name: String, moves: Vec<Move>) -> Self {
        Self {
            name,
            moves,
            next: 0,
        }
    }
}

impl Agent for ScriptedAgent {
    fn select_move(&mut self, board: &BoardState) -> Result<Move> {
        while let Some(&mv) = self.moves.get(self.next) {
            self.next += 1;
            if board.is_empty_cell(mv) {
                return Ok(mv);
            }
        }
        board
            .empty_cells()
            .first()
            .copied()
            .ok_or(crate::Error::NoEmptyCells)
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn reset(&mut self) {
        self.next = 0;
    }
}

/// Uses a [`MoveSelector`] to play one mark
pub struct SearchAgent {
    name: String,
    mark: Mark,
    selector: MoveSelector,
}

impl SearchAgent {
    pub fn new(mark: Mark, selector: MoveSelector) -> Self {
        Self {
            name: format!("search-{}", selector.strategy()),
            mark,
            selector,
        }
    }

    pub fn for_strategy(mark: Mark, strategy: Strategy) -> Self {
        Self::new(mark, MoveSelector::new(strategy))
    }
}

impl Agent for SearchAgent {
    fn select_move(&mut self, board: &BoardState) -> Result<Move> {
        self.selector
            .select_move(board, self.mark)?
            .ok_or(crate::Error::NoEmptyCells)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_agent_is_reproducible_with_seed() {
        let board = BoardState::parse("X.O/.X./...").unwrap();
        let mut a = RandomAgent::with_seed("a".to_string(), 7);
        let mut b = RandomAgent::with_seed("b".to_string(), 7);

        for _ in 0..10 {
            let mv = a.select_move(&board).unwrap();
            assert_eq!(mv, b.select_move(&board).unwrap());
            assert!(board.is_empty_cell(mv));
        }
    }

    #[test]
    fn test_random_agent_fails_on_full_board() {
        let board = BoardState::parse("XOX/OXO/OXO").unwrap();
        let mut agent = RandomAgent::with_seed("r".to_string(), 1);
        assert!(matches!(
            agent.select_move(&board),
            Err(crate::Error::NoEmptyCells)
        ));
    }

    #[test]
    fn test_scripted_agent_skips_taken_cells() {
        let board = BoardState::parse("X../.../...").unwrap();
        let mut agent = ScriptedAgent::new(
            "s".to_string(),
            vec![Move::new(0, 0), Move::new(2, 2)],
        );
        assert_eq!(agent.select_move(&board).unwrap(), Move::new(2, 2));
        assert_eq!(agent.select_move(&board).unwrap(), Move::new(0, 1));

        agent.reset();
        assert_eq!(agent.select_move(&board).unwrap(), Move::new(2, 2));
    }

    #[test]
    fn test_search_agent_takes_the_win() {
        let board = BoardState::parse("XX./OO./...").unwrap();
        let mut agent = SearchAgent::for_strategy(Mark::X, Strategy::IterativeDeepening);
        assert_eq!(agent.select_move(&board).unwrap(), Move::new(0, 2));
        assert_eq!(agent.name(), "search-iterative-deepening");
    }
}
