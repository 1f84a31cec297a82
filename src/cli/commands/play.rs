//! Play command - interactive game against the search engine

use std::io::{self, BufRead, Write};

use anyhow::Result;
use clap::Parser;

use crate::{
    GameSession, Move,
    cli::{
        config::SearchArgs,
        output::{format_move, print_kv, print_section, render_board},
    },
};

#[derive(Parser, Debug)]
#[command(about = "Play against the computer in the terminal")]
pub struct PlayArgs {
    #[command(flatten)]
    pub search: SearchArgs,
}

pub fn execute(args: PlayArgs) -> Result<()> {
    let config = args.search.resolve()?;
    print_section("Tic-Tac-Toe");
    print_kv("Strategy", &config.strategy.to_string());
    print_kv("You play", &config.human_mark.to_string());
    print_kv("Computer plays", &config.computer_mark.to_string());

    let mut session = GameSession::new(config)?;
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_interactive(&mut session, stdin.lock(), stdout.lock())
}

/// Drive `session` from line-based input until `q` or end of input.
///
/// Finished games are announced and the board is reset before play resumes.
pub fn run_interactive<R, W>(session: &mut GameSession, input: R, mut out: W) -> Result<()>
where
    R: BufRead,
    W: Write,
{
    let size = session.board().size();
    write!(out, "\n{}", render_board(session.board()))?;
    write!(out, "Your move (row,col), 'r' to reset, 'q' to quit: ")?;
    out.flush()?;

    for line in input.lines() {
        let line = line?;
        match line.trim() {
            "" => {}
            "q" | "quit" => break,
            "r" | "reset" => {
                session.reset();
                writeln!(out, "Board reset.")?;
            }
            text => match Move::parse(text, size).and_then(|mv| session.play_round(mv)) {
                Ok(round) => {
                    if let Some(computer) = round.computer {
                        writeln!(out, "Computer plays {}", format_move(computer.mv))?;
                    }
                    if let Some(outcome) = round.outcome() {
                        write!(out, "\n{}", render_board(session.board()))?;
                        writeln!(out, "{outcome}")?;
                        session.reset();
                        writeln!(out, "Starting a new game.")?;
                    }
                }
                Err(err) => writeln!(out, "{err}")?,
            },
        }
        write!(out, "\n{}", render_board(session.board()))?;
        write!(out, "Your move (row,col), 'r' to reset, 'q' to quit: ")?;
        out.flush()?;
    }

    writeln!(out)?;
    Ok(())
}
