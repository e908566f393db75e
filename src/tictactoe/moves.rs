//! Board coordinates

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Number of rows (and columns) on the board
pub const BOARD_SIZE: usize = 3;

/// A (row, column) coordinate on the 3x3 board.
///
/// Both coordinates are guaranteed to lie in `0..3`; the only way to build a
/// `Move` from untrusted input is [`Move::new`] (or parsing), which validates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Move {
    row: usize,
    col: usize,
}

impl Move {
    /// The center cell, the opening move of the optimal player
    pub const CENTER: Move = Move { row: 1, col: 1 };

    /// Create a move, rejecting out-of-range coordinates
    pub fn new(row: usize, col: usize) -> Result<Self, crate::Error> {
        if row >= BOARD_SIZE || col >= BOARD_SIZE {
            return Err(crate::Error::InvalidPosition { row, col });
        }
        Ok(Move { row, col })
    }

    /// Build a move from a row-major index (0-8).
    pub(crate) fn from_index(index: usize) -> Self {
        debug_assert!(index < BOARD_SIZE * BOARD_SIZE);
        Move {
            row: index / BOARD_SIZE,
            col: index % BOARD_SIZE,
        }
    }

    pub fn row(self) -> usize {
        self.row
    }

    pub fn col(self) -> usize {
        self.col
    }

    /// Row-major index of this cell (0-8)
    pub fn index(self) -> usize {
        self.row * BOARD_SIZE + self.col
    }

    /// Whether this cell lies on the main diagonal (top-left to bottom-right)
    pub fn on_main_diagonal(self) -> bool {
        self.row == self.col
    }

    /// Whether this cell lies on the anti-diagonal (top-right to bottom-left)
    pub fn on_anti_diagonal(self) -> bool {
        self.row + self.col == BOARD_SIZE - 1
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.row, self.col)
    }
}

impl FromStr for Move {
    type Err = crate::Error;

    /// Parse `"row,col"` (whitespace around either number is ignored).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parse_err = || crate::Error::ParseMove {
            input: s.to_string(),
        };

        let (row, col) = s.split_once(',').ok_or_else(parse_err)?;
        let row: usize = row.trim().parse().map_err(|_| parse_err())?;
        let col: usize = col.trim().parse().map_err(|_| parse_err())?;
        Move::new(row, col)
    }
}
