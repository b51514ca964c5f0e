//! End-to-end move validation scenarios.

use chess_rules::position::chess_rules::STARTING_POSITION_FEN;
use chess_rules::utils::algebraic::algebraic_to_square;
use chess_rules::{
    Color, GameStatus, Piece, PieceKind, Position, RuleEngine, RuleEngineConfig, RuleError,
};

const FOOLS_MATE_BEFORE_QH4: &str =
    "rnbqkbnr/pppp1ppp/8/4p3/6P1/5P2/PPPPP2P/RNBQKBNR b KQkq - 0 2";

#[test]
fn starting_position_round_trips_verbatim() {
    let engine = RuleEngine::new(STARTING_POSITION_FEN);
    assert_eq!(engine.fen(), STARTING_POSITION_FEN);
}

#[test]
fn pawn_double_step_only_from_home_rank() {
    let mut engine = RuleEngine::new(STARTING_POSITION_FEN);
    assert_eq!(
        engine.validate_move("e2", "e5"),
        Err(RuleError::IllegalMove {
            from: "e2".to_owned(),
            to: "e5".to_owned(),
        })
    );

    let mv = engine.validate_move("e2", "e4").expect("e2e4 should be legal");
    assert_eq!(mv.notation, "e4");

    // The turn is not flipped, so white may try to double-step the same pawn again.
    assert!(matches!(
        engine.validate_move("e4", "e6"),
        Err(RuleError::IllegalMove { .. })
    ));
}

#[test]
fn rook_cannot_pass_a_blocker() {
    let fen = "4k3/8/8/8/P7/8/8/R3K3 w - - 0 1";

    for target in ["a5", "a6", "a8"] {
        let mut engine = RuleEngine::new(fen);
        assert!(
            matches!(
                engine.validate_move("a1", target),
                Err(RuleError::IllegalMove { .. })
            ),
            "a1{target} should be blocked"
        );
        assert_eq!(engine.fen(), fen);
    }

    let mut engine = RuleEngine::new(fen);
    let mv = engine.validate_move("a1", "a3").expect("a1a3 should be legal");
    assert_eq!(mv.notation, "Ra3");
    assert_eq!(mv.fen, "4k3/8/8/8/P7/R7/8/4K3 w - - 0 1");
}

#[test]
fn moving_the_wrong_color_is_rejected() {
    let mut engine = RuleEngine::new(STARTING_POSITION_FEN);
    assert_eq!(
        engine.validate_move("g8", "f6"),
        Err(RuleError::WrongColor {
            square: "g8".to_owned(),
            piece: Piece::new(Color::Dark, PieceKind::Knight),
            side_to_move: Color::Light,
        })
    );
}

#[test]
fn fools_mate_is_checkmate() {
    let mut engine = RuleEngine::new(FOOLS_MATE_BEFORE_QH4);
    let mv = engine.validate_move("d8", "h4").expect("Qh4 should be legal");

    assert_eq!(mv.notation, "Qh4");
    assert!(mv.is_check);
    assert!(mv.is_checkmate);
    assert!(!mv.is_stalemate);
    assert_eq!(
        mv.fen,
        "rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR b KQkq - 0 2"
    );
    assert!(engine.is_in_check(Color::Light));
    assert!(!engine.has_legal_moves(Color::Light));
}

#[test]
fn fools_mate_played_from_the_start_with_turn_tracking() {
    let config = RuleEngineConfig::default().with_advance_turn(true);
    let mut engine = RuleEngine::with_config(STARTING_POSITION_FEN, config);

    for (from, to) in [("f2", "f3"), ("e7", "e5"), ("g2", "g4")] {
        let mv = engine.validate_move(from, to).expect("opening move should be legal");
        assert!(!mv.is_check);
    }
    let mv = engine.validate_move("d8", "h4").expect("Qh4 should be legal");

    assert!(mv.is_checkmate);
    assert_eq!(
        mv.fen,
        "rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3"
    );
    assert_eq!(engine.status(), GameStatus::Checkmate);
}

#[test]
fn cornering_the_king_without_check_is_stalemate() {
    let mut engine = RuleEngine::new("7k/8/6K1/8/8/8/8/5Q2 w - - 0 1");
    let mv = engine.validate_move("f1", "f7").expect("Qf7 should be legal");

    assert_eq!(mv.notation, "Qf7");
    assert!(!mv.is_check);
    assert!(mv.is_stalemate);
    assert!(!mv.is_checkmate);
    assert_eq!(mv.fen, "7k/5Q2/6K1/8/8/8/8/8 w - - 0 1");
}

#[test]
fn terminal_search_leaves_only_the_committed_move() {
    let before = Position::from_fen(FOOLS_MATE_BEFORE_QH4);
    let mut engine = RuleEngine::new(FOOLS_MATE_BEFORE_QH4);
    engine.validate_move("d8", "h4").expect("Qh4 should be legal");
    engine.status();
    engine.legal_moves_from("e1").expect("e1 holds the white king");

    let from = algebraic_to_square("d8").expect("d8 should parse");
    let to = algebraic_to_square("h4").expect("h4 should parse");
    let after = engine.position();

    for (rank, row) in after.occupancy.iter().enumerate() {
        for (file, occupant) in row.iter().enumerate() {
            let here = (rank as u8, file as u8);
            if here == (from.rank, from.file) {
                assert_eq!(*occupant, None);
            } else if here == (to.rank, to.file) {
                assert_eq!(*occupant, Some(Piece::new(Color::Dark, PieceKind::Queen)));
            } else {
                assert_eq!(*occupant, before.occupancy[rank][file]);
            }
        }
    }
}

#[test]
fn capture_replaces_only_the_captured_square() {
    let fen = "4k3/8/8/3q4/8/8/8/3RK3 w - - 0 1";
    let mut engine = RuleEngine::new(fen);
    let mv = engine.validate_move("d1", "d5").expect("Rxd5 should be legal");

    assert_eq!(mv.notation, "Rxd5");
    assert_eq!(mv.captured_piece, Some(Piece::new(Color::Dark, PieceKind::Queen)));
    assert_eq!(mv.fen, "4k3/8/8/3R4/8/8/8/4K3 w - - 0 1");
    assert!(!mv.is_check);
    assert!(!mv.is_stalemate);
}

#[test]
fn invalid_square_names_are_rejected() {
    let mut engine = RuleEngine::new(STARTING_POSITION_FEN);
    assert_eq!(
        engine.validate_move("z9", "e4"),
        Err(RuleError::InvalidSquare("z9".to_owned()))
    );
    assert_eq!(
        engine.validate_move("e2", "e"),
        Err(RuleError::InvalidSquare("e".to_owned()))
    );
    assert_eq!(engine.fen(), STARTING_POSITION_FEN);
}

#[test]
fn empty_source_square_is_rejected() {
    let mut engine = RuleEngine::new(STARTING_POSITION_FEN);
    assert_eq!(
        engine.validate_move("e4", "e5"),
        Err(RuleError::EmptySquare("e4".to_owned()))
    );
}

#[test]
fn rejection_and_commit_are_reported_as_info_lines() {
    let mut engine = RuleEngine::new(FOOLS_MATE_BEFORE_QH4);
    let _ = engine.validate_move("d8", "d1");
    engine.validate_move("d8", "h4").expect("Qh4 should be legal");

    let lines = engine.take_info_lines();
    assert_eq!(
        lines,
        vec![
            "info string rule_engine rejected d8d1: illegal move from d8 to d1".to_owned(),
            "info string rule_engine move d8h4 Qh4".to_owned(),
            "info string rule_engine checkmate black wins".to_owned(),
        ]
    );
}
