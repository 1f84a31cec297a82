//! Successor generation
//!
//! Successors are produced one per empty cell in row-major order (row 0
//! first, columns left to right within a row). Every strategy's fallback move
//! depends on this order, so it must not change.

use super::state::{BoardState, Mark, Move};

/// Iterator over `(next_state, move)` pairs for one mark
pub struct Successors<'a> {
    board: &'a BoardState,
    mark: Mark,
    next_index: usize,
}

impl Iterator for Successors<'_> {
    type Item = (BoardState, Move);

    fn next(&mut self) -> Option<Self::Item> {
        let size = self.board.size();
        let cells = self.board.cells();
        while self.next_index < cells.len() {
            let idx = self.next_index;
            self.next_index += 1;
            if cells[idx] == Mark::Empty {
                let mv = Move::new(idx / size, idx % size);
                let mut next = self.board.clone();
                // The cell was just checked to be on the board.
                next.set(mv, self.mark).ok()?;
                return Some((next, mv));
            }
        }
        None
    }
}

/// Enumerate the boards reachable by placing `mark` on each empty cell.
pub fn successors(board: &BoardState, mark: Mark) -> Successors<'_> {
    Successors {
        board,
        mark,
        next_index: 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_successor_per_empty_cell() {
        let board = BoardState::parse("X.O/.X./O..").unwrap();
        let generated: Vec<_> = successors(&board, Mark::O).collect();

        assert_eq!(generated.len(), 5);
        for (state, mv) in &generated {
            assert_eq!(state.get(*mv), Some(Mark::O));
            assert_eq!(state.count(Mark::Empty), 4);
            assert_eq!(board.get(*mv), Some(Mark::Empty));
        }
    }

    #[test]
    fn test_successor_order_is_row_major() {
        let board = BoardState::new();
        let moves: Vec<Move> = successors(&board, Mark::X).map(|(_, mv)| mv).collect();
        let expected: Vec<Move> = (0..3)
            .flat_map(|row| (0..3).map(move |col| Move::new(row, col)))
            .collect();
        assert_eq!(moves, expected);
    }

    #[test]
    fn test_full_board_has_no_successors() {
        let board = BoardState::parse("XOX/OXO/OXO").unwrap();
        assert_eq!(successors(&board, Mark::O).count(), 0);
    }
}
