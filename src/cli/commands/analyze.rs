//! Analyze command - Score every move of a position

use anyhow::Result;
use clap::Parser;
use serde::Serialize;

use crate::{
    cli::{
        commands::parse_symbol_token,
        output::{format_board, print_kv, print_section},
    },
    engine,
    tictactoe::{Board, Cell, Move, Outcome, Symbol},
};

#[derive(Parser, Debug)]
#[command(about = "Show the optimal move and per-move scores for a position")]
pub struct AnalyzeArgs {
    /// Board as 9 cells in row-major order, e.g. "XO..X...."
    pub board: String,

    /// Symbol to move (inferred from piece counts if omitted)
    #[arg(long, short = 's')]
    pub symbol: Option<String>,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct MoveScore {
    #[serde(rename = "move")]
    pub mv: Move,
    pub score: i32,
}

/// Everything the analyzer knows about a position
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub board: String,
    pub to_move: Symbol,
    pub outcome: Outcome,
    pub best: Option<Move>,
    pub best_score: Option<i32>,
    pub nodes: u64,
    pub moves: Vec<MoveScore>,
}

/// X opens, so equal counts mean X is to move.
fn infer_to_move(board: &Board) -> Symbol {
    let count = |symbol| {
        board
            .cells()
            .iter()
            .filter(|&&c| c == Cell::Mark(symbol))
            .count()
    };
    if count(Symbol::X) > count(Symbol::O) {
        Symbol::O
    } else {
        Symbol::X
    }
}

pub fn analyze(mut board: Board, to_move: Symbol) -> Result<AnalysisReport> {
    let outcome = board.outcome();
    let mut report = AnalysisReport {
        board: board.cells().iter().map(|c| c.to_char()).collect(),
        to_move,
        outcome,
        best: None,
        best_score: None,
        nodes: 0,
        moves: Vec::new(),
    };
    if outcome.is_terminal() {
        return Ok(report);
    }

    let search = engine::search(&mut board, to_move)?;
    report.best = Some(search.best);
    report.best_score = search.score;
    report.nodes = search.stats.nodes;
    report.moves = engine::evaluate_moves(&mut board, to_move)
        .into_iter()
        .map(|(mv, score)| MoveScore { mv, score })
        .collect();
    Ok(report)
}

pub fn execute(args: AnalyzeArgs) -> Result<()> {
    let board = Board::from_string(&args.board)?;
    let to_move = match &args.symbol {
        Some(value) => parse_symbol_token(value, "--symbol")?,
        None => infer_to_move(&board),
    };
    let report = analyze(board, to_move)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    print_section("Position");
    print!("{}", format_board(&board));
    print_kv("To move", &report.to_move.to_string());
    print_kv("Outcome", &report.outcome.to_string());

    if let Some(best) = report.best {
        let score = report
            .best_score
            .map_or_else(|| "opening (not searched)".to_string(), |s| s.to_string());
        print_kv("Best move", &best.to_string());
        print_kv("Score", &score);
        print_kv("Nodes", &report.nodes.to_string());

        print_section("Move scores");
        for entry in &report.moves {
            let marker = if entry.mv == best { " *" } else { "" };
            println!("  {}  {:>4}{marker}", entry.mv, entry.score);
        }
    }
    Ok(())
}
