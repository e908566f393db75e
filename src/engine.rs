//! Move selection for automated players
//!
//! Two strategies are provided:
//! - [`random`]: uniform choice among the legal moves
//! - [`minimax`]: exhaustive game-tree search that never loses

pub mod minimax;
pub mod random;

pub use minimax::{SearchOutcome, SearchStats, best_move, evaluate_moves, search};
pub use random::choose_move;
