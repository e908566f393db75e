//! Uniform random move selection

use rand::{Rng, seq::IndexedRandom};

use crate::{
    Error, Result,
    tictactoe::{Board, Move},
};

/// Pick one of the board's legal moves uniformly at random.
///
/// # Errors
///
/// Returns [`Error::NoLegalMoves`] when the game is over.
pub fn choose_move<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Result<Move> {
    board
        .legal_moves()
        .choose(rng)
        .copied()
        .ok_or(Error::NoLegalMoves)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::{SeedableRng, rngs::StdRng};

    use super::*;

    #[test]
    fn test_choose_move_is_legal() {
        let board = Board::from_string("XO. .X. O..").unwrap();
        let legal: HashSet<Move> = board.legal_moves().into_iter().collect();
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..50 {
            let mv = choose_move(&board, &mut rng).unwrap();
            assert!(legal.contains(&mv));
        }
    }

    #[test]
    fn test_choose_move_covers_all_cells() {
        let board = Board::new();
        let mut rng = StdRng::seed_from_u64(7);
        let seen: HashSet<Move> = (0..500)
            .map(|_| choose_move(&board, &mut rng).unwrap())
            .collect();
        assert_eq!(seen.len(), 9);
    }

    #[test]
    fn test_same_seed_same_moves() {
        let board = Board::new();
        let mut rng1 = StdRng::seed_from_u64(12345);
        let mut rng2 = StdRng::seed_from_u64(12345);
        for _ in 0..10 {
            assert_eq!(
                choose_move(&board, &mut rng1).unwrap(),
                choose_move(&board, &mut rng2).unwrap()
            );
        }
    }

    #[test]
    fn test_no_moves_on_finished_board() {
        let board = Board::from_string("XOX XOO OXX").unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        assert!(matches!(
            choose_move(&board, &mut rng),
            Err(Error::NoLegalMoves)
        ));
    }
}
