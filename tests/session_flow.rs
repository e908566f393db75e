//! Session driver and configuration, exercised through the public API

use std::io::Write;

use noughts::{
    Difficulty, Error, Session, SessionConfig, engine,
    tictactoe::{Board, Cell, Move, Outcome, Symbol},
};
use rand::{SeedableRng, rngs::StdRng};

fn mv(row: usize, col: usize) -> Move {
    Move::new(row, col).unwrap()
}

/// Drive the human side with `choose` until the game ends.
fn play_human_with(session: &mut Session, mut choose: impl FnMut(&Board) -> Move) -> Outcome {
    while !session.is_over() {
        if session.is_human_turn() {
            let m = choose(session.board());
            session.play_human(m).unwrap();
        } else {
            session.play_automated().unwrap();
        }
    }
    session.outcome()
}

/// Always take the first empty cell in row-major order.
fn first_empty(board: &Board) -> Move {
    board.legal_moves()[0]
}

mod state_machine {
    use super::*;

    #[test]
    fn test_engine_punishes_weak_play() {
        // X: (0,0) (0,1) (1,0); O: center, forced block at (0,2), then wins on
        // the anti-diagonal at (2,0)
        let mut session = Session::new(SessionConfig::default());
        let outcome = play_human_with(&mut session, first_empty);
        assert_eq!(outcome, Outcome::Won(Symbol::O));
        assert_eq!(session.board().get(mv(2, 0)), Cell::Mark(Symbol::O));
        assert!(session.is_over());
        assert!(!session.is_human_turn());
    }

    #[test]
    fn test_finished_game_refuses_moves_until_reset() {
        let mut session = Session::new(SessionConfig::default());
        play_human_with(&mut session, first_empty);
        assert!(session.is_over());

        assert!(session.board().legal_moves().is_empty());
        assert!(matches!(session.play_human(mv(2, 2)), Err(Error::GameOver)));
        assert!(matches!(session.play_automated(), Err(Error::GameOver)));

        session.reset();
        assert_eq!(session.outcome(), Outcome::InProgress);
        assert!(session.play_human(mv(2, 2)).is_ok());
    }

    #[test]
    fn test_engine_never_loses_a_session() {
        for seed in 0..10 {
            let mut session = Session::new(SessionConfig::default());
            let mut rng = StdRng::seed_from_u64(seed);
            let outcome = play_human_with(&mut session, |board| {
                engine::choose_move(board, &mut rng).unwrap()
            });
            assert_ne!(outcome, Outcome::Won(Symbol::X), "seed {seed}");
        }
    }

    #[test]
    fn test_engine_advised_human_draws() {
        let config = SessionConfig::default().with_human_symbol(Symbol::O);
        let mut session = Session::new(config);
        let outcome = play_human_with(&mut session, |board| {
            let mut scratch = *board;
            engine::best_move(&mut scratch, Symbol::O).unwrap()
        });
        assert_eq!(outcome, Outcome::Drawn);
        assert!(session.board().is_full());
    }
}

mod configuration {
    use super::*;

    #[test]
    fn test_config_file_drives_session() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "difficulty = \"random\"").unwrap();
        writeln!(file, "human_symbol = \"O\"").unwrap();
        writeln!(file, "seed = 3").unwrap();

        let config = SessionConfig::from_file(file.path()).unwrap();
        assert_eq!(config.difficulty, Difficulty::Random);
        assert_eq!(config.seed, Some(3));

        let session = Session::new(config);
        assert_eq!(session.human().symbol(), Symbol::O);
        assert_eq!(session.automated().symbol(), Symbol::X);
        assert_eq!(session.automated().name(), "Random");
        assert!(!session.is_human_turn());
    }

    #[test]
    fn test_missing_config_file_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        let err = SessionConfig::from_file(&path).unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
        assert!(err.to_string().contains("absent.toml"));
    }

    #[test]
    fn test_unknown_key_rejected() {
        let err = SessionConfig::from_toml_str("board_size = 4\n").unwrap_err();
        assert!(matches!(err, Error::Toml(_)));
    }
}
