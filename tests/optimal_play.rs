//! Decision engine behaviour: fast path, tactics, reversibility and strength

use noughts::{
    Difficulty, Player, play_out,
    engine::{self, evaluate_moves, search},
    tictactoe::{Board, Move, Outcome, Symbol},
};

fn mv(row: usize, col: usize) -> Move {
    Move::new(row, col).unwrap()
}

mod scenarios {
    use super::*;

    #[test]
    fn test_opening_move_is_center() {
        let mut board = Board::new();
        assert_eq!(engine::best_move(&mut board, Symbol::X).unwrap(), mv(1, 1));
        assert_eq!(engine::best_move(&mut board, Symbol::O).unwrap(), mv(1, 1));
    }

    #[test]
    fn test_completes_own_row() {
        let mut board = Board::from_string("XX. ... ...").unwrap();
        assert_eq!(engine::best_move(&mut board, Symbol::X).unwrap(), mv(0, 2));
    }

    #[test]
    fn test_blocks_opponent_row() {
        let mut board = Board::from_string("XX. ... ...").unwrap();
        assert_eq!(engine::best_move(&mut board, Symbol::O).unwrap(), mv(0, 2));
    }

    #[test]
    fn test_center_reply_to_corner_opening() {
        let mut board = Board::from_string("X.. ... ...").unwrap();
        assert_eq!(engine::best_move(&mut board, Symbol::O).unwrap(), mv(1, 1));
    }

    #[test]
    fn test_ties_keep_first_row_major_move() {
        // X can win at (0,2) or (2,0); both score the same
        let mut board = Board::from_string("XX. XOO .O.").unwrap();
        let scores = evaluate_moves(&mut board, Symbol::X);
        let score_of = |m: Move| scores.iter().find(|(c, _)| *c == m).unwrap().1;
        assert_eq!(score_of(mv(0, 2)), score_of(mv(2, 0)));
        assert_eq!(engine::best_move(&mut board, Symbol::X).unwrap(), mv(0, 2));
    }

    #[test]
    fn test_quicker_win_scores_higher() {
        // X wins now at (0,2); other moves win later at best
        let mut board = Board::from_string("XX. OO. ...").unwrap();
        let scores = evaluate_moves(&mut board, Symbol::X);
        let immediate = scores.iter().find(|(m, _)| *m == mv(0, 2)).unwrap().1;
        assert!(scores.iter().all(|&(m, s)| m == mv(0, 2) || s < immediate));
    }

    #[test]
    fn test_delays_unavoidable_loss() {
        // Blocking at (0,2) still loses to the fork at (1,1), three cells
        // from the end; any other move loses at once with five cells left
        let mut board = Board::from_string("XX. ... ...").unwrap();
        let scores = evaluate_moves(&mut board, Symbol::O);
        for &(m, score) in &scores {
            if m == mv(0, 2) {
                assert_eq!(score, -4);
            } else {
                assert_eq!(score, -6, "move {m}");
            }
        }
        assert_eq!(engine::best_move(&mut board, Symbol::O).unwrap(), mv(0, 2));
    }
}

mod reversibility {
    use super::*;

    #[test]
    fn test_search_restores_every_sampled_position() {
        let positions = [
            "X........",
            "X...O....",
            "XO..X....",
            "XO..X...O",
            "XOX.O....",
            "XOXOX....",
            "XX.OO....",
            "X.O.X.O..",
        ];
        for text in positions {
            let mut board = Board::from_string(text).unwrap();
            let before = board;
            for symbol in [Symbol::X, Symbol::O] {
                let _ = search(&mut board, symbol).unwrap();
                assert_eq!(board, before, "search changed {text}");
                assert_eq!(board.winner(), before.winner());
            }
        }
    }
}

mod strength {
    use super::*;

    #[test]
    fn test_optimal_against_optimal_is_a_draw() {
        let mut x = Player::optimal(Symbol::X);
        let mut o = Player::optimal(Symbol::O);
        assert_eq!(play_out(&mut x, &mut o).unwrap(), Outcome::Drawn);
    }

    #[test]
    fn test_optimal_first_never_loses_to_random() {
        for seed in 0..40 {
            let mut x = Player::optimal(Symbol::X);
            let mut o = Player::automated(Symbol::O, Difficulty::Random, Some(seed));
            let outcome = play_out(&mut x, &mut o).unwrap();
            assert_ne!(outcome, Outcome::Won(Symbol::O), "seed {seed}");
        }
    }

    #[test]
    fn test_optimal_second_never_loses_to_random() {
        for seed in 0..40 {
            let mut x = Player::automated(Symbol::X, Difficulty::Random, Some(seed));
            let mut o = Player::optimal(Symbol::O);
            let outcome = play_out(&mut x, &mut o).unwrap();
            assert_ne!(outcome, Outcome::Won(Symbol::X), "seed {seed}");
        }
    }
}
