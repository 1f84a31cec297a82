//! N×N board model: marks, moves, win/full queries and successor generation

pub mod lines;
pub mod state;
pub mod successors;

pub use lines::{LineAnalyzer, winning_lines};
pub use state::{BoardState, Mark, Move};
pub use successors::{Successors, successors};
