//! Winning line analysis for N×N boards

use super::state::{BoardState, Mark, Move};

/// Every winning line of a `size`×`size` board as row-major cell indices:
/// rows first, then columns, then the main and anti diagonals.
pub fn winning_lines(size: usize) -> Vec<Vec<usize>> {
    let mut lines = Vec::with_capacity(2 * size + 2);
    for row in 0..size {
        lines.push((0..size).map(|col| row * size + col).collect());
    }
    for col in 0..size {
        lines.push((0..size).map(|row| row * size + col).collect());
    }
    lines.push((0..size).map(|i| i * size + i).collect());
    lines.push((0..size).map(|i| i * size + (size - 1 - i)).collect());
    lines
}

/// Utility for analyzing winning lines
pub struct LineAnalyzer;

impl LineAnalyzer {
    /// Check if `mark` fills any complete line
    pub fn has_won(board: &BoardState, mark: Mark) -> bool {
        let size = board.size();
        let cells = board.cells();
        let at = |row: usize, col: usize| cells[row * size + col];

        (0..size).any(|row| (0..size).all(|col| at(row, col) == mark))
            || (0..size).any(|col| (0..size).all(|row| at(row, col) == mark))
            || (0..size).all(|i| at(i, i) == mark)
            || (0..size).all(|i| at(i, size - 1 - i) == mark)
    }

    /// Cells that would complete a line for `mark` in one placement, row-major
    pub fn winning_moves(board: &BoardState, mark: Mark) -> Vec<Move> {
        let size = board.size();
        let cells = board.cells();
        let mut moves: Vec<Move> = winning_lines(size)
            .iter()
            .filter_map(|line| {
                let mut empty = None;
                for &idx in line {
                    match cells[idx] {
                        Mark::Empty if empty.is_none() => empty = Some(idx),
                        c if c == mark => {}
                        _ => return None,
                    }
                }
                empty.map(|idx| Move::new(idx / size, idx % size))
            })
            .collect();
        moves.sort();
        moves.dedup();
        moves
    }

    /// Check if `mark` can win with a single placement
    pub fn has_immediate_win(board: &BoardState, mark: Mark) -> bool {
        !Self::winning_moves(board, mark).is_empty()
    }
}
