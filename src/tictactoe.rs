//! Tic-Tac-Toe board, moves and line analysis

pub mod board;
pub mod lines;
pub mod moves;

pub use board::{Board, Cell, Outcome, Symbol};
pub use lines::{LineAnalyzer, WINNING_LINES};
pub use moves::{BOARD_SIZE, Move};
