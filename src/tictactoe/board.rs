//! Board state representation and basic operations

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use tracing::trace;

use super::{LineAnalyzer, Move, WINNING_LINES};

/// One of the two marks placed on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Symbol {
    X,
    O,
}

impl Symbol {
    /// Get the opposing symbol
    pub fn opponent(self) -> Symbol {
        match self {
            Symbol::X => Symbol::O,
            Symbol::O => Symbol::X,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Symbol::X => 'X',
            Symbol::O => 'O',
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

impl FromStr for Symbol {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "x" => Ok(Symbol::X),
            "o" => Ok(Symbol::O),
            _ => Err(crate::Error::ParseSymbol {
                input: s.to_string(),
            }),
        }
    }
}

/// A cell on the Tic-Tac-Toe board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    Mark(Symbol),
}

impl Cell {
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Mark(symbol) => symbol.to_char(),
        }
    }

    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' | ' ' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::Mark(Symbol::X)),
            'O' | 'o' | '0' => Some(Cell::Mark(Symbol::O)),
            _ => None,
        }
    }

    pub fn symbol(self) -> Option<Symbol> {
        match self {
            Cell::Empty => None,
            Cell::Mark(symbol) => Some(symbol),
        }
    }
}

/// State of a game as a function of the board contents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    InProgress,
    Won(Symbol),
    Drawn,
}

impl Outcome {
    /// Won and Drawn are terminal; no further moves are accepted.
    pub fn is_terminal(self) -> bool {
        !matches!(self, Outcome::InProgress)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::InProgress => write!(f, "in progress"),
            Outcome::Won(symbol) => write!(f, "{symbol} wins"),
            Outcome::Drawn => write!(f, "draw"),
        }
    }
}

/// The 3x3 grid plus the recorded winner of the current game.
///
/// The recorded winner is set by [`Board::apply_move`] the moment a line is
/// completed and is cleared only by [`Board::reset`]. Cells are stored
/// row-major.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; 9],
    winner: Option<Symbol>,
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [Cell::Empty; 9],
            winner: None,
        }
    }

    /// Create a board from a string representation.
    ///
    /// The string should contain 9 cell characters in row-major order;
    /// whitespace is filtered out. The recorded winner is derived from the
    /// lines on the board.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - The string has fewer than 9 non-whitespace characters
    /// - Any character is not a valid cell representation
    /// - Both symbols hold a complete line
    pub fn from_string(s: &str) -> Result<Self, crate::Error> {
        let chars: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();
        if chars.len() < 9 {
            return Err(crate::Error::InvalidBoardLength {
                expected: 9,
                got: chars.len(),
                context: s.to_string(),
            });
        }

        let mut cells = [Cell::Empty; 9];
        for (i, &c) in chars.iter().take(9).enumerate() {
            cells[i] = Cell::from_char(c).ok_or_else(|| crate::Error::InvalidCellCharacter {
                character: c,
                position: i,
                context: s.to_string(),
            })?;
        }

        if LineAnalyzer::has_won(&cells, Symbol::X) && LineAnalyzer::has_won(&cells, Symbol::O) {
            return Err(crate::Error::ConflictingWinners {
                context: s.to_string(),
            });
        }

        Ok(Board {
            cells,
            winner: LineAnalyzer::winner(&cells),
        })
    }

    /// Raw cell contents in row-major order
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Get the cell at a coordinate
    pub fn get(&self, mv: Move) -> Cell {
        self.cells[mv.index()]
    }

    /// The winner recorded for this game, if a line has been completed
    pub fn winner(&self) -> Option<Symbol> {
        self.winner
    }

    /// Current state of the game
    pub fn outcome(&self) -> Outcome {
        match self.winner {
            Some(symbol) => Outcome::Won(symbol),
            None if self.is_full() => Outcome::Drawn,
            None => Outcome::InProgress,
        }
    }

    /// Check if the game is over (win or draw)
    pub fn is_terminal(&self) -> bool {
        self.outcome().is_terminal()
    }

    /// Every empty cell in row-major order, regardless of game state
    pub fn empty_cells(&self) -> Vec<Move> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == Cell::Empty)
            .map(|(i, _)| Move::from_index(i))
            .collect()
    }

    /// Legal moves in row-major order (row 0 to 2, column 0 to 2 within a row).
    ///
    /// The order is the search exploration order and therefore decides which
    /// of several equally scored moves the optimal player picks. Once a winner
    /// is recorded there are no legal moves.
    pub fn legal_moves(&self) -> Vec<Move> {
        if self.winner.is_some() {
            return Vec::new();
        }
        self.empty_cells()
    }

    /// Place `symbol` at `mv` and record a winner if that completes a line.
    ///
    /// Returns `false` without touching the board when the cell is occupied
    /// or the game has already been won.
    #[must_use = "apply_move reports whether the move was placed"]
    pub fn apply_move(&mut self, mv: Move, symbol: Symbol) -> bool {
        if self.get(mv) != Cell::Empty || self.winner.is_some() {
            trace!(%mv, %symbol, "rejected move");
            return false;
        }

        self.cells[mv.index()] = Cell::Mark(symbol);
        if self.is_terminal_line(mv.row(), mv.col(), symbol) {
            self.winner = Some(symbol);
        }
        true
    }

    /// Undo a move made during search: clear the cell and the recorded winner.
    pub(crate) fn undo_move(&mut self, mv: Move) {
        self.cells[mv.index()] = Cell::Empty;
        self.winner = None;
    }

    /// True iff `symbol` at `(row, col)` completes that cell's row, its
    /// column, or a diagonal the cell lies on.
    ///
    /// The cell itself is counted as holding `symbol`, so this answers the
    /// same question before and after the mark is placed. Out-of-range
    /// coordinates never complete a line.
    pub fn is_terminal_line(&self, row: usize, col: usize, symbol: Symbol) -> bool {
        let Ok(mv) = Move::new(row, col) else {
            return false;
        };
        let idx = mv.index();
        let target = Cell::Mark(symbol);
        LineAnalyzer::lines_through(mv)
            .any(|line| line.iter().all(|&i| i == idx || self.cells[i] == target))
    }

    /// Whether any cell is still empty
    pub fn has_empty_cell(&self) -> bool {
        self.cells.contains(&Cell::Empty)
    }

    /// Whether every cell is occupied
    pub fn is_full(&self) -> bool {
        !self.has_empty_cell()
    }

    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c == Cell::Empty).count()
    }

    /// Count the number of occupied cells on the board.
    pub fn occupied_count(&self) -> usize {
        self.cells.len() - self.empty_count()
    }

    /// Whether no mark has been placed yet
    pub fn is_empty_board(&self) -> bool {
        self.cells.iter().all(|&c| c == Cell::Empty)
    }

    /// Clear every cell and the recorded winner
    pub fn reset(&mut self) {
        *self = Board::new();
    }

    /// Whether the recorded winner agrees with the lines on the board
    pub fn is_consistent(&self) -> bool {
        match self.winner {
            Some(symbol) => WINNING_LINES
                .iter()
                .any(|line| line.iter().all(|&i| self.cells[i] == Cell::Mark(symbol))),
            None => true,
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, &cell) in self.cells.iter().enumerate() {
            write!(f, "{}", cell.to_char())?;
            if (i + 1) % 3 == 0 && i < 8 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Board::from_string(s)
    }
}
