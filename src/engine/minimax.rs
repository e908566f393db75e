//! Exhaustive minimax search with depth-sensitive scoring
//!
//! Scores are taken from the perspective of the searching symbol (the
//! maximizer). A win found with `n` empty cells left is worth `n + 1`, a loss
//! `-(n + 1)`, a draw `0`, so among equal results the search prefers the
//! quickest win and the slowest loss.
//!
//! The search explores hypothetical moves on the caller's board in place and
//! undoes every one of them before returning.

use serde::Serialize;
use tracing::{debug, instrument};

use crate::{
    Error, Result,
    tictactoe::{Board, Move, Symbol},
};

/// Counters collected during one search
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SearchStats {
    /// Number of game-tree nodes visited
    pub nodes: u64,
}

/// Result of a top-level search
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SearchOutcome {
    pub best: Move,
    /// Minimax score of `best`; `None` when the opening fast path was taken
    pub score: Option<i32>,
    pub stats: SearchStats,
}

#[derive(Debug, Clone, Copy)]
struct Scored {
    position: Option<Move>,
    score: i32,
}

struct Minimax {
    maximizer: Symbol,
    stats: SearchStats,
}

impl Minimax {
    fn new(maximizer: Symbol) -> Self {
        Self {
            maximizer,
            stats: SearchStats::default(),
        }
    }

    /// Score the position with `mover` about to play.
    fn search(&mut self, board: &mut Board, mover: Symbol) -> Scored {
        self.stats.nodes += 1;

        let previous = mover.opponent();
        if board.winner() == Some(previous) {
            let magnitude = board.empty_count() as i32 + 1;
            let score = if previous == self.maximizer {
                magnitude
            } else {
                -magnitude
            };
            return Scored {
                position: None,
                score,
            };
        }
        if !board.has_empty_cell() {
            return Scored {
                position: None,
                score: 0,
            };
        }

        let maximizing = mover == self.maximizer;
        let mut best = Scored {
            position: None,
            score: if maximizing { i32::MIN } else { i32::MAX },
        };

        for mv in board.legal_moves() {
            let score = self.score_move(board, mv, mover);

            // strict comparison keeps the first row-major move among ties
            let better = if maximizing {
                score > best.score
            } else {
                score < best.score
            };
            if better {
                best = Scored {
                    position: Some(mv),
                    score,
                };
            }
        }

        best
    }

    /// Play `mv` for `mover`, score the reply position, and take the move back.
    fn score_move(&mut self, board: &mut Board, mv: Move, mover: Symbol) -> i32 {
        let placed = board.apply_move(mv, mover);
        debug_assert!(placed, "legal move {mv} was rejected");
        let score = self.search(board, mover.opponent()).score;
        board.undo_move(mv);
        score
    }
}

/// Search for the best move for `symbol`, returning score and statistics.
///
/// An empty board short-circuits to the center cell without searching.
///
/// # Errors
///
/// Returns [`Error::NoLegalMoves`] if the game is already over.
#[instrument(level = "debug", skip(board), fields(empty = board.empty_count()))]
pub fn search(board: &mut Board, symbol: Symbol) -> Result<SearchOutcome> {
    if board.is_empty_board() {
        debug!(%symbol, "opening fast path");
        return Ok(SearchOutcome {
            best: Move::CENTER,
            score: None,
            stats: SearchStats::default(),
        });
    }

    let mut minimax = Minimax::new(symbol);
    let root = minimax.search(board, symbol);
    let best = root.position.ok_or(Error::NoLegalMoves)?;

    debug!(%best, score = root.score, nodes = minimax.stats.nodes, "search finished");
    Ok(SearchOutcome {
        best,
        score: Some(root.score),
        stats: minimax.stats,
    })
}

/// Best move for `symbol` on `board`.
///
/// The board is borrowed mutably for in-place exploration and is returned
/// exactly as it was passed in.
///
/// # Errors
///
/// Returns [`Error::NoLegalMoves`] if the game is already over.
pub fn best_move(board: &mut Board, symbol: Symbol) -> Result<Move> {
    search(board, symbol).map(|outcome| outcome.best)
}

/// Minimax score of every legal move for `symbol`, in row-major order.
pub fn evaluate_moves(board: &mut Board, symbol: Symbol) -> Vec<(Move, i32)> {
    let mut minimax = Minimax::new(symbol);
    board
        .legal_moves()
        .into_iter()
        .map(|mv| (mv, minimax.score_move(board, mv, symbol)))
        .collect()
}
