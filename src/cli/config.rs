//! Shared configuration arguments for CLI commands

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use crate::{Mark, SessionConfig, Strategy};

/// Options that pick and tune the computer's search
#[derive(Args, Debug, Clone, Default)]
pub struct SearchArgs {
    /// JSON session config; flags below override its values
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Search strategy (dfs, bfs, ucs, iterative-deepening)
    #[arg(long, short = 's')]
    pub strategy: Option<String>,

    /// Depth limit for iterative deepening
    #[arg(long)]
    pub max_depth: Option<usize>,

    /// Board side length
    #[arg(long)]
    pub size: Option<usize>,

    /// Mark placed by the computer (`x` or `o`)
    #[arg(long)]
    pub computer_mark: Option<String>,
}

impl SearchArgs {
    /// Merge the config file (if any) with command-line overrides.
    pub fn resolve(&self) -> Result<SessionConfig> {
        let mut config = match &self.config {
            Some(path) => SessionConfig::load(path)
                .with_context(|| format!("loading config from {}", path.display()))?,
            None => SessionConfig::default(),
        };

        if let Some(strategy) = &self.strategy {
            config.strategy = strategy.parse::<Strategy>()?;
        }
        if let Some(max_depth) = self.max_depth {
            config.max_depth = max_depth;
        }
        if let Some(size) = self.size {
            config.board_size = size;
        }
        if let Some(mark) = &self.computer_mark {
            let computer = mark.parse::<Mark>()?;
            config.computer_mark = computer;
            config.human_mark = computer.opponent();
        }

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_defaults() {
        let args = SearchArgs {
            strategy: Some("ucs".to_string()),
            max_depth: Some(2),
            computer_mark: Some("x".to_string()),
            ..SearchArgs::default()
        };
        let config = args.resolve().unwrap();

        assert_eq!(config.strategy, Strategy::UniformCost);
        assert_eq!(config.max_depth, 2);
        assert_eq!(config.computer_mark, Mark::X);
        assert_eq!(config.human_mark, Mark::O);
    }

    #[test]
    fn test_unknown_strategy_is_reported() {
        let args = SearchArgs {
            strategy: Some("minimax".to_string()),
            ..SearchArgs::default()
        };
        let err = args.resolve().unwrap_err();
        assert!(err.to_string().contains("invalid strategy 'minimax'"));
    }
}
