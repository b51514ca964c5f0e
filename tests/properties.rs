//! Property-based tests for the position encoding and the rule engine.
//!
//! Positions are generated by random playouts from the starting position
//! with turn tracking enabled, so both colors get to move.

use chess_rules::rules::terminal::legal_destinations;
use chess_rules::utils::algebraic::square_to_algebraic;
use chess_rules::{BoardSquare, Position, RuleEngine, RuleEngineConfig};
use proptest::prelude::*;

fn playout_config() -> RuleEngineConfig {
    RuleEngineConfig::default()
        .with_advance_turn(true)
        .with_reject_self_check(true)
}

fn legal_moves(position: &Position) -> Vec<(BoardSquare, BoardSquare)> {
    let mut scratch = position.clone();
    let side = position.side_to_move;
    let movers: Vec<BoardSquare> = position
        .pieces()
        .filter(|(_, piece)| piece.color == side)
        .map(|(square, _)| square)
        .collect();

    movers
        .into_iter()
        .flat_map(|from| {
            legal_destinations(&mut scratch, from)
                .into_iter()
                .map(move |to| (from, to))
        })
        .collect()
}

/// Position reached after up to 40 random legal moves from the start.
fn arb_played_position() -> impl Strategy<Value = Position> {
    proptest::collection::vec(0usize..256, 0..40).prop_map(|choices| {
        let mut engine = RuleEngine::from_position(Position::starting(), playout_config());
        for choice in choices {
            let moves = legal_moves(engine.position());
            if moves.is_empty() {
                break;
            }
            let (from, to) = moves[choice % moves.len()];
            engine
                .validate_move(&square_to_algebraic(from), &square_to_algebraic(to))
                .expect("listed move should validate");
        }
        engine.into_position()
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    /// serialize(parse(serialize(p))) == serialize(p)
    #[test]
    fn prop_fen_roundtrip(position in arb_played_position()) {
        let fen = position.to_fen();
        let parsed = Position::try_from_fen(&fen).expect("generated FEN should parse");
        prop_assert_eq!(parsed.to_fen(), fen.clone());
        prop_assert_eq!(Position::from_fen(&fen), position);
    }

    /// A committed move changes exactly the source and destination squares.
    #[test]
    fn prop_commit_touches_only_source_and_destination(
        position in arb_played_position(),
        choice in 0usize..256,
    ) {
        let moves = legal_moves(&position);
        prop_assume!(!moves.is_empty());
        let (from, to) = moves[choice % moves.len()];
        let moving = position.piece_on(from);

        let mut engine = RuleEngine::from_position(position.clone(), RuleEngineConfig::default());
        let mv = engine
            .validate_move(&square_to_algebraic(from), &square_to_algebraic(to))
            .expect("generated move should validate");
        prop_assert_eq!(mv.captured_piece, position.piece_on(to));

        let after = engine.position();
        for square in BoardSquare::all() {
            let expected = if square == from {
                None
            } else if square == to {
                moving
            } else {
                position.piece_on(square)
            };
            prop_assert_eq!(after.piece_on(square), expected);
        }
        prop_assert_eq!(after.side_to_move, position.side_to_move);
        prop_assert_eq!(mv.fen.clone(), after.to_fen());
    }

    /// Scanning for legal moves never mutates the board.
    #[test]
    fn prop_terminal_scan_is_side_effect_free(position in arb_played_position()) {
        let mut engine = RuleEngine::from_position(position.clone(), RuleEngineConfig::default());
        engine.status();
        engine.has_legal_moves(position.side_to_move.opposite());
        prop_assert_eq!(engine.position(), &position);
    }
}
