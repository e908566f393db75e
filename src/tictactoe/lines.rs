//! Winning line analysis for Tic-Tac-Toe

use super::{Cell, Move, Symbol};

/// Winning line indices on the 3x3 board (row-major cell indices)
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8], // rows
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8], // columns
    [0, 4, 8],
    [2, 4, 6], // diagonals
];

/// Utility for analyzing winning lines in Tic-Tac-Toe
pub struct LineAnalyzer;

impl LineAnalyzer {
    /// Check if a symbol holds all three cells of any line
    pub fn has_won(cells: &[Cell; 9], symbol: Symbol) -> bool {
        let target = Cell::Mark(symbol);
        WINNING_LINES
            .iter()
            .any(|line| line.iter().all(|&idx| cells[idx] == target))
    }

    /// The symbol holding a complete line, if any.
    ///
    /// Returns `None` both when nobody has won and when both symbols hold a
    /// line (which cannot arise in play).
    pub fn winner(cells: &[Cell; 9]) -> Option<Symbol> {
        match (
            Self::has_won(cells, Symbol::X),
            Self::has_won(cells, Symbol::O),
        ) {
            (true, false) => Some(Symbol::X),
            (false, true) => Some(Symbol::O),
            _ => None,
        }
    }

    /// Lines passing through a cell: its row, its column, and whichever
    /// diagonals it lies on.
    pub fn lines_through(mv: Move) -> impl Iterator<Item = &'static [usize; 3]> {
        let idx = mv.index();
        let lines: &'static [[usize; 3]; 8] = &WINNING_LINES;
        lines.iter().filter(move |line| line.contains(&idx))
    }

    /// Check whether every cell of a line through `mv` holds `symbol`
    pub fn completes_line(cells: &[Cell; 9], mv: Move, symbol: Symbol) -> bool {
        let target = Cell::Mark(symbol);
        Self::lines_through(mv).any(|line| line.iter().all(|&idx| cells[idx] == target))
    }

    /// Find all cells that would immediately win for the symbol, row-major
    pub fn winning_moves(cells: &[Cell; 9], symbol: Symbol) -> Vec<Move> {
        let mut moves: Vec<Move> = WINNING_LINES
            .iter()
            .filter_map(|line| Self::winning_move_in_line(cells, symbol, line))
            .map(Move::from_index)
            .collect();
        moves.sort_unstable();
        moves.dedup();
        moves
    }

    /// Find the winning cell in a specific line, if one exists
    fn winning_move_in_line(cells: &[Cell; 9], symbol: Symbol, line: &[usize; 3]) -> Option<usize> {
        let target = Cell::Mark(symbol);
        let mut count = 0;
        let mut empty_pos = None;

        for &idx in line {
            match cells[idx] {
                Cell::Empty => {
                    if empty_pos.is_some() {
                        return None;
                    }
                    empty_pos = Some(idx);
                }
                c if c == target => count += 1,
                _ => return None,
            }
        }

        if count == 2 { empty_pos } else { None }
    }
}
