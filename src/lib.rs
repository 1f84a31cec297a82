//! Move selection for tic-tac-toe style games by uninformed search
//!
//! This crate provides:
//! - An N×N board model with win/full queries and row-major successor generation
//! - Depth-first, breadth-first, uniform-cost and iterative-deepening search
//! - A move-selector facade and a game session that drives the turn cycle
//! - Agents and batch simulation for exercising the engine
//! - The `xo` command-line interface

pub mod agents;
pub mod board;
pub mod cli;
pub mod config;
pub mod error;
pub mod ports;
pub mod search;
pub mod session;
pub mod simulation;

pub use agents::{RandomAgent, ScriptedAgent, SearchAgent};
pub use board::{BoardState, LineAnalyzer, Mark, Move, successors};
pub use config::SessionConfig;
pub use error::{Error, Result};
pub use search::{
    BreadthFirst, DEFAULT_MAX_DEPTH, DepthFirst, IterativeDeepening, MoveSelector, SearchEngine,
    SearchOutcome, SearchReport, SearchStrategy, Strategy, UniformCost,
};
pub use session::{GameOutcome, GameSession, Phase, RoundResult, TurnResult};
pub use simulation::{GameRecord, MatchSummary, play_game, run_matches};
