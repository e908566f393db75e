//! Tic-Tac-Toe engine with an optimal opponent
//!
//! This crate provides:
//! - The 3x3 board with move application, win/draw detection and reset
//! - A decision engine choosing moves at random or by exhaustive minimax
//! - Players (human, random, optimal) and a session driver enforcing turns
//! - A terminal front end for playing, self-play batches and analysis
//!
//! # Examples
//!
//! ```
//! use noughts::{engine, tictactoe::{Board, Move, Symbol}};
//!
//! let mut board = Board::from_string("XX. .O. ...").unwrap();
//! let reply = engine::best_move(&mut board, Symbol::O).unwrap();
//! assert_eq!(reply, Move::new(0, 2).unwrap());
//! ```

pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod player;
pub mod session;
pub mod tictactoe;

pub use config::{Difficulty, SessionConfig};
pub use error::{Error, Result};
pub use player::Player;
pub use session::{Session, play_out};
pub use tictactoe::{Board, Cell, Move, Outcome, Symbol};
