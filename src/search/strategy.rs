//! Strategy port and the closed set of selectable strategies

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use super::{
    BreadthFirst, DepthFirst, IterativeDeepening, SearchReport, UniformCost,
    iterative_deepening::DEFAULT_MAX_DEPTH,
};
use crate::board::{BoardState, Mark};

/// An uninformed exploration policy over the successor graph.
///
/// Implementations are pure with respect to their input: the same board and
/// mark always explore the same node sequence and yield the same report.
pub trait SearchStrategy: Send + Sync {
    /// Explore boards reachable by repeatedly placing `mark`.
    fn search(&self, board: &BoardState, mark: Mark) -> SearchReport;

    /// Short name used in reports
    fn name(&self) -> &'static str;
}

/// The four selectable strategies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Strategy {
    #[default]
    DepthFirst,
    BreadthFirst,
    UniformCost,
    IterativeDeepening,
}

impl Strategy {
    pub const ALL: [Strategy; 4] = [
        Strategy::DepthFirst,
        Strategy::BreadthFirst,
        Strategy::UniformCost,
        Strategy::IterativeDeepening,
    ];

    /// Instantiate the strategy. `max_depth` only affects iterative deepening.
    pub fn build(self, max_depth: usize) -> Box<dyn SearchStrategy> {
        match self {
            Strategy::DepthFirst => Box::new(DepthFirst),
            Strategy::BreadthFirst => Box::new(BreadthFirst),
            Strategy::UniformCost => Box::new(UniformCost),
            Strategy::IterativeDeepening => Box::new(IterativeDeepening::new(max_depth)),
        }
    }

    /// Instantiate with the default depth limit
    pub fn build_default(self) -> Box<dyn SearchStrategy> {
        self.build(DEFAULT_MAX_DEPTH)
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Strategy::DepthFirst => "dfs",
            Strategy::BreadthFirst => "bfs",
            Strategy::UniformCost => "ucs",
            Strategy::IterativeDeepening => "iterative-deepening",
        };
        f.write_str(label)
    }
}

impl FromStr for Strategy {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalised = s.trim().to_ascii_lowercase().replace(['_', ' '], "-");
        match normalised.as_str() {
            "dfs" | "depth-first" => Ok(Strategy::DepthFirst),
            "bfs" | "breadth-first" => Ok(Strategy::BreadthFirst),
            "ucs" | "uniform-cost" => Ok(Strategy::UniformCost),
            "ids" | "iddfs" | "iterative-deepening" => Ok(Strategy::IterativeDeepening),
            _ => Err(crate::Error::ParseStrategy {
                input: s.to_string(),
                expected: "dfs, bfs, ucs, iterative-deepening".to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_strategy_names() {
        assert_eq!("DFS".parse::<Strategy>().unwrap(), Strategy::DepthFirst);
        assert_eq!("breadth_first".parse::<Strategy>().unwrap(), Strategy::BreadthFirst);
        assert_eq!("UCS".parse::<Strategy>().unwrap(), Strategy::UniformCost);
        assert_eq!(
            "Iterative Deepening".parse::<Strategy>().unwrap(),
            Strategy::IterativeDeepening
        );
        assert!(matches!(
            "astar".parse::<Strategy>(),
            Err(crate::Error::ParseStrategy { .. })
        ));
    }

    #[test]
    fn test_display_round_trips_through_from_str() {
        for strategy in Strategy::ALL {
            assert_eq!(strategy.to_string().parse::<Strategy>().unwrap(), strategy);
        }
    }

    #[test]
    fn test_uniform_cost_is_not_aliased_to_breadth_first() {
        assert_eq!(Strategy::UniformCost.build_default().name(), "ucs");
        assert_eq!(Strategy::BreadthFirst.build_default().name(), "bfs");
    }
}
