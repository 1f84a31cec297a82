//! CLI infrastructure for the xo toolkit
//!
//! This module provides the command-line interface for asking the search
//! engine for moves, comparing strategies, playing in the terminal, and
//! running batches of simulated games.

pub mod commands;
pub mod config;
pub mod output;
