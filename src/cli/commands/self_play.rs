//! Self-play command - Batch of engine-versus-engine games

use anyhow::Result;
use clap::Parser;
use serde::Serialize;
use tracing::info;

use crate::{
    cli::output::{create_games_progress, percent, print_kv, print_section},
    config::Difficulty,
    player::Player,
    session::play_out,
    tictactoe::{Outcome, Symbol},
};

#[derive(Parser, Debug, Clone)]
#[command(about = "Play the engine against itself")]
pub struct SelfPlayArgs {
    /// Number of games
    #[arg(long, short = 'g', default_value_t = 100)]
    pub games: usize,

    /// Strategy for X (moves first)
    #[arg(long, default_value_t = Difficulty::Optimal)]
    pub x: Difficulty,

    /// Strategy for O
    #[arg(long, default_value_t = Difficulty::Random)]
    pub o: Difficulty,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,

    /// Print the summary as JSON
    #[arg(long)]
    pub json: bool,

    /// Hide the progress bar
    #[arg(long)]
    pub quiet: bool,
}

/// Tally of a self-play batch
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SelfPlaySummary {
    pub games: usize,
    pub x_wins: usize,
    pub o_wins: usize,
    pub draws: usize,
}

impl SelfPlaySummary {
    fn record(&mut self, outcome: Outcome) {
        self.games += 1;
        match outcome {
            Outcome::Won(Symbol::X) => self.x_wins += 1,
            Outcome::Won(Symbol::O) => self.o_wins += 1,
            Outcome::Drawn | Outcome::InProgress => self.draws += 1,
        }
    }
}

/// Play `args.games` games and tally the results.
///
/// With a seed, game `i` seeds X with `seed + 2i` and O with `seed + 2i + 1`,
/// so a batch is reproducible.
pub fn run(args: &SelfPlayArgs) -> Result<SelfPlaySummary> {
    let progress = if args.quiet {
        None
    } else {
        Some(create_games_progress(args.games as u64)?)
    };

    let mut summary = SelfPlaySummary::default();
    for i in 0..args.games {
        let offset = 2 * i as u64;
        let mut x = Player::automated(
            Symbol::X,
            args.x,
            args.seed.map(|s| s.wrapping_add(offset)),
        );
        let mut o = Player::automated(
            Symbol::O,
            args.o,
            args.seed.map(|s| s.wrapping_add(offset + 1)),
        );
        summary.record(play_out(&mut x, &mut o)?);

        if let Some(pb) = &progress {
            pb.inc(1);
            pb.set_message(format!(
                "X {} / O {} / draw {}",
                summary.x_wins, summary.o_wins, summary.draws
            ));
        }
    }
    if let Some(pb) = progress {
        pb.finish_and_clear();
    }

    info!(
        games = summary.games,
        x_wins = summary.x_wins,
        o_wins = summary.o_wins,
        draws = summary.draws,
        "self-play finished"
    );
    Ok(summary)
}

pub fn execute(args: SelfPlayArgs) -> Result<()> {
    let summary = run(&args)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    print_section(&format!("Self-play: {} (X) vs {} (O)", args.x, args.o));
    print_kv("Games", &summary.games.to_string());
    print_kv(
        "X wins",
        &format!("{} ({})", summary.x_wins, percent(summary.x_wins, summary.games)),
    );
    print_kv(
        "O wins",
        &format!("{} ({})", summary.o_wins, percent(summary.o_wins, summary.games)),
    );
    print_kv(
        "Draws",
        &format!("{} ({})", summary.draws, percent(summary.draws, summary.games)),
    );
    Ok(())
}
