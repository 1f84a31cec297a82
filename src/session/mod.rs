//! Game session: the turn loop around the move selector
//!
//! A [`GameSession`] owns the live board and the computer's selector; nothing
//! is stored in process-wide state. Turns alternate
//! `HumanTurn → ComputerTurn → HumanTurn`, with a terminal check after every
//! placement. A finished game rejects further moves until [`GameSession::reset`].

mod outcome;

pub use outcome::{GameOutcome, Phase, RoundResult, TurnResult};

use crate::{
    Result,
    board::{BoardState, Mark, Move},
    config::SessionConfig,
    search::MoveSelector,
};

pub struct GameSession {
    config: SessionConfig,
    selector: MoveSelector,
    board: BoardState,
    phase: Phase,
    history: Vec<(Mark, Move)>,
}

impl GameSession {
    /// Start a session on an empty board with the human to move.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidConfiguration`] for an unplayable config.
    pub fn new(config: SessionConfig) -> Result<Self> {
        config.validate()?;
        let board = BoardState::empty(config.board_size)?;
        Ok(Self {
            selector: config.selector(),
            config,
            board,
            phase: Phase::HumanTurn,
            history: Vec::new(),
        })
    }

    pub fn board(&self) -> &BoardState {
        &self.board
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Placements since the last reset, in order
    pub fn history(&self) -> &[(Mark, Move)] {
        &self.history
    }

    pub fn outcome(&self) -> Option<GameOutcome> {
        match self.phase {
            Phase::Finished(outcome) => Some(outcome),
            _ => None,
        }
    }

    /// Clear the board and hand the first move back to the human.
    pub fn reset(&mut self) {
        self.board = BoardState::empty(self.config.board_size).unwrap_or_default();
        self.phase = Phase::HumanTurn;
        self.history.clear();
    }

    /// Apply the human's move and run the terminal check.
    ///
    /// # Errors
    ///
    /// Fails if the game is over, it is the computer's turn, or the cell is
    /// off the board or occupied. The board is unchanged on error.
    pub fn play_human(&mut self, mv: Move) -> Result<TurnResult> {
        self.expect_phase(Phase::HumanTurn, "human's")?;
        let mark = self.config.human_mark;
        self.board = self.board.with_mark(mv, mark)?;
        self.history.push((mark, mv));

        let outcome = self.terminal_outcome();
        self.phase = outcome.map_or(Phase::ComputerTurn, Phase::Finished);
        Ok(TurnResult {
            mark,
            mv: Some(mv),
            outcome,
        })
    }

    /// Ask the selector for the computer's move, apply it, and run the
    /// terminal check. If the selector has no move, the turn passes back to
    /// the human with the board unchanged.
    pub fn play_computer(&mut self) -> Result<TurnResult> {
        self.expect_phase(Phase::ComputerTurn, "computer's")?;
        let mark = self.config.computer_mark;
        let chosen = self.selector.select_move(&self.board, mark)?;

        let outcome = match chosen {
            Some(mv) => {
                self.board = self.board.with_mark(mv, mark)?;
                self.history.push((mark, mv));
                self.terminal_outcome()
            }
            None => None,
        };
        self.phase = outcome.map_or(Phase::HumanTurn, Phase::Finished);
        Ok(TurnResult {
            mark,
            mv: chosen,
            outcome,
        })
    }

    /// Play the human's move, then the computer's reply if the game goes on.
    pub fn play_round(&mut self, mv: Move) -> Result<RoundResult> {
        let human = self.play_human(mv)?;
        let computer = if human.outcome.is_none() {
            Some(self.play_computer()?)
        } else {
            None
        };
        Ok(RoundResult { human, computer })
    }

    fn expect_phase(&self, expected: Phase, label: &'static str) -> Result<()> {
        match self.phase {
            Phase::Finished(_) => Err(crate::Error::GameOver),
            phase if phase == expected => Ok(()),
            _ => Err(crate::Error::OutOfTurn { expected: label }),
        }
    }

    fn terminal_outcome(&self) -> Option<GameOutcome> {
        if self.board.check_win(self.config.human_mark) {
            Some(GameOutcome::Player1Win)
        } else if self.board.check_win(self.config.computer_mark) {
            Some(GameOutcome::Player2Win)
        } else if self.board.check_full() {
            Some(GameOutcome::Draw)
        } else {
            None
        }
    }
}
