//! Session configuration.

use std::{fs::File, io::BufReader, path::Path};

use serde::{Deserialize, Serialize};

use crate::{
    Result,
    board::{BoardState, Mark},
    search::{DEFAULT_MAX_DEPTH, MoveSelector, Strategy},
};

/// Configuration for a game session.
///
/// # Examples
///
/// ```
/// use xo_search::{Mark, SessionConfig, Strategy};
///
/// let config = SessionConfig::default()
///     .with_strategy(Strategy::BreadthFirst)
///     .with_marks(Mark::O, Mark::X);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Side length of the board
    pub board_size: usize,
    /// Strategy the computer uses to pick its moves
    pub strategy: Strategy,
    /// Depth limit for iterative deepening
    pub max_depth: usize,
    /// Mark placed by player 1 (the human)
    pub human_mark: Mark,
    /// Mark placed by player 2 (the computer)
    pub computer_mark: Mark,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            board_size: BoardState::DEFAULT_SIZE,
            strategy: Strategy::DepthFirst,
            max_depth: DEFAULT_MAX_DEPTH,
            human_mark: Mark::X,
            computer_mark: Mark::O,
        }
    }
}

impl SessionConfig {
    /// Load a JSON configuration file. Missing fields take their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|source| crate::Error::Io {
            operation: format!("open config {}", path.display()),
            source,
        })?;
        let config: SessionConfig = serde_json::from_reader(BufReader::new(file))?;
        config.validate()?;
        Ok(config)
    }

    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_board_size(mut self, board_size: usize) -> Self {
        self.board_size = board_size;
        self
    }

    pub fn with_marks(mut self, human_mark: Mark, computer_mark: Mark) -> Self {
        self.human_mark = human_mark;
        self.computer_mark = computer_mark;
        self
    }

    /// Check that the configuration describes a playable game.
    pub fn validate(&self) -> Result<()> {
        let invalid = |message: &str| {
            Err(crate::Error::InvalidConfiguration {
                message: message.to_string(),
            })
        };

        if self.board_size == 0 {
            return invalid("board_size must be at least 1");
        }
        if self.human_mark == Mark::Empty || self.computer_mark == Mark::Empty {
            return invalid("player marks must be X or O");
        }
        if self.human_mark == self.computer_mark {
            return invalid("human and computer must use different marks");
        }
        Ok(())
    }

    /// Selector for the configured strategy and depth
    pub fn selector(&self) -> MoveSelector {
        MoveSelector::with_max_depth(self.strategy, self.max_depth)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_classic_game() {
        let config = SessionConfig::default();
        assert_eq!(config.board_size, 3);
        assert_eq!(config.strategy, Strategy::DepthFirst);
        assert_eq!(config.max_depth, 5);
        assert_eq!(config.human_mark, Mark::X);
        assert_eq!(config.computer_mark, Mark::O);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_shared_or_empty_marks() {
        let same = SessionConfig::default().with_marks(Mark::X, Mark::X);
        assert!(matches!(
            same.validate(),
            Err(crate::Error::InvalidConfiguration { .. })
        ));

        let empty = SessionConfig::default().with_marks(Mark::Empty, Mark::O);
        assert!(empty.validate().is_err());

        let zero = SessionConfig::default().with_board_size(0);
        assert!(zero.validate().is_err());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: SessionConfig =
            serde_json::from_str(r#"{"strategy": "BreadthFirst", "max_depth": 2}"#).unwrap();
        assert_eq!(config.strategy, Strategy::BreadthFirst);
        assert_eq!(config.max_depth, 2);
        assert_eq!(config.board_size, 3);
    }
}
