//! Game session driver
//!
//! A [`Session`] owns the board and the two players. X always opens; after
//! every placement the outcome is re-read from the board, and once it is
//! terminal the session refuses moves until [`Session::reset`].

use tracing::{debug, info, instrument};

use crate::{
    Error, Result,
    config::SessionConfig,
    player::Player,
    tictactoe::{Board, Move, Outcome, Symbol},
};

/// The symbol that makes the first move of every game
pub const FIRST_SYMBOL: Symbol = Symbol::X;

/// One human-versus-engine session
#[derive(Debug, Clone)]
pub struct Session {
    config: SessionConfig,
    board: Board,
    human: Player,
    automated: Player,
    to_move: Symbol,
}

impl Session {
    /// Bind the human to `config.human_symbol` and the automated player to
    /// the other symbol, and start a fresh game.
    pub fn new(config: SessionConfig) -> Self {
        let human = Player::human(config.human_symbol);
        let automated =
            Player::automated(config.automated_symbol(), config.difficulty, config.seed);
        info!(
            human = %config.human_symbol,
            difficulty = %config.difficulty,
            "session started"
        );
        Self {
            config,
            board: Board::new(),
            human,
            automated,
            to_move: FIRST_SYMBOL,
        }
    }

    /// Start a new session with different symbols or difficulty
    pub fn rebind(&mut self, config: SessionConfig) {
        *self = Session::new(config);
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn human(&self) -> &Player {
        &self.human
    }

    pub fn automated(&self) -> &Player {
        &self.automated
    }

    /// Symbol whose turn it is
    pub fn to_move(&self) -> Symbol {
        self.to_move
    }

    pub fn outcome(&self) -> Outcome {
        self.board.outcome()
    }

    pub fn is_over(&self) -> bool {
        self.outcome().is_terminal()
    }

    pub fn is_human_turn(&self) -> bool {
        !self.is_over() && self.to_move == self.human.symbol()
    }

    /// Apply a move supplied by the human.
    ///
    /// # Errors
    ///
    /// - [`Error::GameOver`] if the game has finished
    /// - [`Error::NotYourTurn`] if the automated player is due to move
    /// - [`Error::CellOccupied`] if the target cell is taken
    #[instrument(level = "debug", skip(self))]
    pub fn play_human(&mut self, mv: Move) -> Result<Outcome> {
        let symbol = self.human.symbol();
        self.place(mv, symbol)
    }

    /// Ask the automated player for its move and apply it.
    ///
    /// # Errors
    ///
    /// - [`Error::GameOver`] if the game has finished
    /// - [`Error::NotYourTurn`] if the human is due to move
    pub fn play_automated(&mut self) -> Result<Move> {
        self.ensure_turn(self.automated.symbol())?;
        let mv = self
            .automated
            .select_move(&mut self.board)?
            .ok_or(Error::NoLegalMoves)?;
        let symbol = self.automated.symbol();
        self.place(mv, symbol)?;
        Ok(mv)
    }

    /// Clear the board for another game with the same players
    pub fn reset(&mut self) {
        debug!("board reset");
        self.board.reset();
        self.to_move = FIRST_SYMBOL;
    }

    fn ensure_turn(&self, symbol: Symbol) -> Result<()> {
        if self.is_over() {
            return Err(Error::GameOver);
        }
        if symbol != self.to_move {
            return Err(Error::NotYourTurn {
                expected: self.to_move,
                got: symbol,
            });
        }
        Ok(())
    }

    fn place(&mut self, mv: Move, symbol: Symbol) -> Result<Outcome> {
        self.ensure_turn(symbol)?;
        if !self.board.apply_move(mv, symbol) {
            return Err(Error::CellOccupied {
                row: mv.row(),
                col: mv.col(),
            });
        }
        self.to_move = symbol.opponent();

        let outcome = self.board.outcome();
        debug!(%symbol, %mv, %outcome, "move applied");
        if outcome.is_terminal() {
            info!(%outcome, "game finished");
        }
        Ok(outcome)
    }
}

/// Play a full game between two automated players from an empty board.
///
/// `x` opens. Returns the final outcome.
///
/// # Errors
///
/// Returns an error if a player's symbol does not match its seat or a human
/// is seated (humans cannot be driven automatically).
pub fn play_out(x: &mut Player, o: &mut Player) -> Result<Outcome> {
    if x.symbol() != Symbol::X || o.symbol() != Symbol::O {
        return Err(Error::InvalidConfiguration {
            message: format!(
                "players are seated on the wrong symbols (X seat holds {}, O seat holds {})",
                x.symbol(),
                o.symbol()
            ),
        });
    }

    let mut board = Board::new();
    let mut to_move = FIRST_SYMBOL;

    while !board.is_terminal() {
        let player = match to_move {
            Symbol::X => &mut *x,
            Symbol::O => &mut *o,
        };
        let mv = player
            .select_move(&mut board)?
            .ok_or_else(|| Error::InvalidConfiguration {
                message: format!("{to_move} is a human and cannot be played automatically"),
            })?;
        if !board.apply_move(mv, to_move) {
            return Err(Error::CellOccupied {
                row: mv.row(),
                col: mv.col(),
            });
        }
        to_move = to_move.opponent();
    }

    Ok(board.outcome())
}
