//! Ports (trait boundaries) between the game loop and whoever supplies moves.

pub mod agent;

pub use agent::Agent;
