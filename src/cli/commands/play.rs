//! Play command - Interactive game against the engine on the terminal

use std::{
    io::{self, BufRead, Write},
    path::PathBuf,
};

use anyhow::{Context, Result};
use clap::Parser;

use crate::{
    Error,
    cli::{commands::parse_symbol_token, output::format_board},
    config::{Difficulty, SessionConfig},
    session::Session,
    tictactoe::{Move, Outcome},
};

#[derive(Parser, Debug, Default)]
#[command(about = "Play against the engine")]
pub struct PlayArgs {
    /// Engine strength (`random` or `optimal`)
    #[arg(long, short = 'd')]
    pub difficulty: Option<Difficulty>,

    /// Which symbol you play (`x` moves first)
    #[arg(long, short = 's')]
    pub symbol: Option<String>,

    /// Random seed for the random engine
    #[arg(long)]
    pub seed: Option<u64>,

    /// TOML file with session settings (flags override it)
    #[arg(long, short = 'c')]
    pub config: Option<PathBuf>,
}

impl PlayArgs {
    /// Resolve defaults, config file, and flags into one configuration
    pub fn session_config(&self) -> Result<SessionConfig> {
        let mut config = match &self.config {
            Some(path) => SessionConfig::from_file(path)
                .with_context(|| format!("loading {}", path.display()))?,
            None => SessionConfig::default(),
        };
        if let Some(difficulty) = self.difficulty {
            config = config.with_difficulty(difficulty);
        }
        if let Some(symbol) = &self.symbol {
            config = config.with_human_symbol(parse_symbol_token(symbol, "--symbol")?);
        }
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        Ok(config)
    }
}

pub fn execute(args: PlayArgs) -> Result<()> {
    let config = args.session_config()?;
    let stdin = io::stdin();
    let stdout = io::stdout();
    run(config, stdin.lock(), stdout.lock())
}

/// Drive sessions over arbitrary text streams.
///
/// Moves are read as `row,col`, one per line. `q` or end of input quits.
/// After each game the player is asked whether to play again.
pub fn run<R: BufRead, W: Write>(config: SessionConfig, mut input: R, mut out: W) -> Result<()> {
    let mut session = Session::new(config);
    writeln!(
        out,
        "You are {} against the {} engine. Enter moves as row,col (q to quit).",
        session.human().symbol(),
        session.config().difficulty
    )?;

    loop {
        write!(out, "\n{}", format_board(session.board()))?;

        while !session.is_over() {
            if session.is_human_turn() {
                write!(out, "Your move: ")?;
                out.flush()?;
                let Some(line) = read_line(&mut input)? else {
                    return Ok(());
                };
                if line.eq_ignore_ascii_case("q") {
                    return Ok(());
                }

                let mv: Move = match line.parse() {
                    Ok(mv) => mv,
                    Err(e) => {
                        writeln!(out, "{e}")?;
                        continue;
                    }
                };
                match session.play_human(mv) {
                    Ok(_) => {}
                    Err(e @ Error::CellOccupied { .. }) => {
                        writeln!(out, "{e}. Try again.")?;
                        continue;
                    }
                    Err(e) => return Err(e.into()),
                }
            } else {
                let mv = session.play_automated()?;
                writeln!(
                    out,
                    "{} ({}) plays {mv}",
                    session.automated().name(),
                    session.automated().symbol()
                )?;
            }
            write!(out, "{}", format_board(session.board()))?;
        }

        let message = match session.outcome() {
            Outcome::Won(symbol) if symbol == session.human().symbol() => {
                format!("{symbol} wins! You beat the engine.")
            }
            Outcome::Won(symbol) => format!("{symbol} wins! The engine takes this one."),
            Outcome::Drawn | Outcome::InProgress => "Draw!".to_string(),
        };
        writeln!(out, "{message}")?;

        write!(out, "Play again? [y/N] ")?;
        out.flush()?;
        match read_line(&mut input)? {
            Some(answer) if answer.eq_ignore_ascii_case("y") => session.reset(),
            _ => return Ok(()),
        }
    }
}

fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transcript(config: SessionConfig, script: &str) -> String {
        let mut out = Vec::new();
        run(config, script.as_bytes(), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_quit_immediately() {
        let text = transcript(SessionConfig::default(), "q\n");
        assert!(text.contains("You are X"));
        assert!(!text.contains("plays"));
    }

    #[test]
    fn test_bad_input_is_reported() {
        let text = transcript(SessionConfig::default(), "nine\n5,5\nq\n");
        assert!(text.contains("invalid move 'nine'"));
        assert!(text.contains("out of bounds"));
    }

    #[test]
    fn test_engine_replies_and_rejects_taken_cell() {
        // the engine answers a corner opening with the center
        let text = transcript(SessionConfig::default(), "0,0\n1,1\nq\n");
        assert!(text.contains("Optimal (O) plays 1,1"));
        assert!(text.contains("already occupied"));
    }

    #[test]
    fn test_engine_opens_when_human_is_o() {
        let config = SessionConfig::default().with_human_symbol(crate::tictactoe::Symbol::O);
        let text = transcript(config, "");
        assert!(text.contains("Optimal (X) plays 1,1"));
    }

    #[test]
    fn test_args_override_defaults() {
        let args = PlayArgs {
            difficulty: Some(Difficulty::Random),
            symbol: Some("o".to_string()),
            seed: Some(5),
            config: None,
        };
        let config = args.session_config().unwrap();
        assert_eq!(config.difficulty, Difficulty::Random);
        assert_eq!(config.human_symbol, crate::tictactoe::Symbol::O);
        assert_eq!(config.seed, Some(5));
    }
}
