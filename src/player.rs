//! Players bound to a symbol for the length of a session

use rand::{SeedableRng, random, rngs::StdRng};
use tracing::debug;

use crate::{
    Result,
    config::Difficulty,
    engine,
    tictactoe::{Board, Move, Symbol},
};

/// Automated player choosing uniformly among legal moves
#[derive(Debug, Clone)]
pub struct RandomPlayer {
    symbol: Symbol,
    rng: StdRng,
}

impl RandomPlayer {
    /// Create a random player, seeded from entropy unless a seed is given
    pub fn new(symbol: Symbol, seed: Option<u64>) -> Self {
        Self {
            symbol,
            rng: StdRng::seed_from_u64(seed.unwrap_or_else(random)),
        }
    }

    pub fn reseed(&mut self, seed: u64) {
        self.rng = StdRng::seed_from_u64(seed);
    }

    fn select_move(&mut self, board: &Board) -> Result<Move> {
        engine::choose_move(board, &mut self.rng)
    }
}

/// Automated player using full-depth minimax search
#[derive(Debug, Clone, Copy)]
pub struct OptimalPlayer {
    symbol: Symbol,
}

impl OptimalPlayer {
    pub fn new(symbol: Symbol) -> Self {
        Self { symbol }
    }

    fn select_move(&self, board: &mut Board) -> Result<Move> {
        engine::best_move(board, self.symbol)
    }
}

/// Any participant in a game.
///
/// Every variant can be asked for a move; a human's move comes from outside
/// the engine, so selection yields `None` for [`Player::Human`].
#[derive(Debug, Clone)]
pub enum Player {
    Human(Symbol),
    Random(RandomPlayer),
    Optimal(OptimalPlayer),
}

impl Player {
    pub fn human(symbol: Symbol) -> Self {
        Player::Human(symbol)
    }

    pub fn random(symbol: Symbol, seed: Option<u64>) -> Self {
        Player::Random(RandomPlayer::new(symbol, seed))
    }

    pub fn optimal(symbol: Symbol) -> Self {
        Player::Optimal(OptimalPlayer::new(symbol))
    }

    /// Build the automated player for a difficulty level
    pub fn automated(symbol: Symbol, difficulty: Difficulty, seed: Option<u64>) -> Self {
        match difficulty {
            Difficulty::Random => Self::random(symbol, seed),
            Difficulty::Optimal => Self::optimal(symbol),
        }
    }

    pub fn symbol(&self) -> Symbol {
        match self {
            Player::Human(symbol) => *symbol,
            Player::Random(player) => player.symbol,
            Player::Optimal(player) => player.symbol,
        }
    }

    pub fn is_human(&self) -> bool {
        matches!(self, Player::Human(_))
    }

    pub fn name(&self) -> &'static str {
        match self {
            Player::Human(_) => "Human",
            Player::Random(_) => "Random",
            Player::Optimal(_) => "Optimal",
        }
    }

    /// Ask the player for a move on `board`.
    ///
    /// Automated players return `Some(move)` without changing the board; the
    /// caller applies it. Humans return `None`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::NoLegalMoves`] when asked to move on a finished
    /// board.
    pub fn select_move(&mut self, board: &mut Board) -> Result<Option<Move>> {
        let mv = match self {
            Player::Human(_) => return Ok(None),
            Player::Random(player) => player.select_move(board)?,
            Player::Optimal(player) => player.select_move(board)?,
        };
        debug!(player = self.name(), symbol = %self.symbol(), %mv, "selected move");
        Ok(Some(mv))
    }
}
