//! Uninformed move search
//!
//! Four interchangeable strategies explore boards reachable by placing the
//! searching mark over and over (no opponent replies are modelled):
//! - [`DepthFirst`]: LIFO stack
//! - [`BreadthFirst`]: FIFO queue
//! - [`UniformCost`]: min-priority queue on path cost
//! - [`IterativeDeepening`]: depth-limited depth-first search at growing limits
//!
//! Every strategy returns the first successor that completes a line. When the
//! frontier empties without a win, it falls back to the first move of the
//! last popped node's path.

pub mod breadth_first;
pub mod depth_first;
pub mod engine;
pub mod iterative_deepening;
pub mod node;
pub mod strategy;
pub mod uniform_cost;

pub use breadth_first::BreadthFirst;
pub use depth_first::{DepthFirst, depth_limited};
pub use engine::{MoveSelector, SearchEngine};
pub use iterative_deepening::{DEFAULT_MAX_DEPTH, IterativeDeepening};
pub use node::{SearchNode, SearchOutcome, SearchReport};
pub use strategy::{SearchStrategy, Strategy};
pub use uniform_cost::UniformCost;
