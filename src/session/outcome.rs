use std::fmt;

use serde::{Deserialize, Serialize};

use crate::board::{Mark, Move};

/// How a finished game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    /// The human completed a line
    Player1Win,
    /// The computer completed a line
    Player2Win,
    Draw,
}

impl fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            GameOutcome::Player1Win => "Player 1 wins!",
            GameOutcome::Player2Win => "Player 2 (Computer) wins!",
            GameOutcome::Draw => "It's a draw!",
        };
        f.write_str(message)
    }
}

/// Where the session is in its turn cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    HumanTurn,
    ComputerTurn,
    Finished(GameOutcome),
}

/// One placement, or the computer passing when its selector had no move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnResult {
    pub mark: Mark,
    pub mv: Option<Move>,
    /// Set when this turn ended the game
    pub outcome: Option<GameOutcome>,
}

/// A human move and, unless the game ended, the computer's reply
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundResult {
    pub human: TurnResult,
    pub computer: Option<TurnResult>,
}

impl RoundResult {
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.computer
            .and_then(|turn| turn.outcome)
            .or(self.human.outcome)
    }
}
