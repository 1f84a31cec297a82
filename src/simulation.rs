//! Play whole games between an agent (as player 1) and the computer

use std::{fs::File, io::BufWriter, path::Path};

use serde::{Deserialize, Serialize};

use crate::{
    Result,
    board::{Mark, Move},
    config::SessionConfig,
    ports::Agent,
    search::Strategy,
    session::{GameOutcome, GameSession},
};

/// One finished game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    pub index: usize,
    pub moves: Vec<(Mark, Move)>,
    pub outcome: GameOutcome,
}

/// Totals over a batch of games
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchSummary {
    pub strategy: Strategy,
    pub opponent: String,
    pub games: usize,
    pub player1_wins: usize,
    pub player2_wins: usize,
    pub draws: usize,
    pub records: Vec<GameRecord>,
}

impl MatchSummary {
    fn new(strategy: Strategy, opponent: String) -> Self {
        Self {
            strategy,
            opponent,
            games: 0,
            player1_wins: 0,
            player2_wins: 0,
            draws: 0,
            records: Vec::new(),
        }
    }

    fn record(&mut self, record: GameRecord) {
        self.games += 1;
        match record.outcome {
            GameOutcome::Player1Win => self.player1_wins += 1,
            GameOutcome::Player2Win => self.player2_wins += 1,
            GameOutcome::Draw => self.draws += 1,
        }
        self.records.push(record);
    }

    /// Fraction of games the computer won
    pub fn computer_win_rate(&self) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            self.player2_wins as f64 / self.games as f64
        }
    }

    /// Write the summary as pretty-printed JSON.
    pub fn write_json(&self, path: &Path) -> Result<()> {
        let file = File::create(path).map_err(|source| crate::Error::Io {
            operation: format!("create {}", path.display()),
            source,
        })?;
        serde_json::to_writer_pretty(BufWriter::new(file), self)?;
        Ok(())
    }
}

/// Play one game to completion from the session's current position.
///
/// The agent supplies every human move; the session's selector answers.
pub fn play_game(session: &mut GameSession, agent: &mut dyn Agent) -> Result<GameOutcome> {
    loop {
        if let Some(outcome) = session.outcome() {
            return Ok(outcome);
        }
        let mv = agent.select_move(session.board())?;
        if let Some(outcome) = session.play_round(mv)?.outcome() {
            return Ok(outcome);
        }
    }
}

/// Play `games` fresh games, calling `on_game` after each one.
pub fn run_matches<F>(
    config: &SessionConfig,
    agent: &mut dyn Agent,
    games: usize,
    mut on_game: F,
) -> Result<MatchSummary>
where
    F: FnMut(&GameRecord),
{
    let mut session = GameSession::new(config.clone())?;
    let mut summary = MatchSummary::new(config.strategy, agent.name().to_string());

    for index in 0..games {
        session.reset();
        agent.reset();
        let outcome = play_game(&mut session, agent)?;
        let record = GameRecord {
            index,
            moves: session.history().to_vec(),
            outcome,
        };
        on_game(&record);
        summary.record(record);
    }

    Ok(summary)
}
