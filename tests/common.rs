//! Common test utilities for the xo_search test suite.

#![allow(dead_code)]

use xo_search::{BoardState, Mark, Move};

/// Parse a board literal, panicking on malformed fixtures.
pub fn board(text: &str) -> BoardState {
    BoardState::parse(text).unwrap_or_else(|err| panic!("bad fixture '{text}': {err}"))
}

/// Apply `mv` for `mark` and report whether it completes a line.
pub fn wins_after(board: &BoardState, mv: Move, mark: Mark) -> bool {
    board
        .with_mark(mv, mark)
        .map(|next| next.check_win(mark))
        .unwrap_or(false)
}

/// Boards where O has at least one immediate win available.
pub const O_WIN_FIXTURES: &[&str] = &[
    "OO./XX./X..",
    "X.O/XO./...",
    ".X./XO./..O",
    "O../O.X/.X.",
    "XXO/.O./..X",
];
