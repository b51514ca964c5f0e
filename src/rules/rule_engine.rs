//! Move validation for one in-progress game.
//!
//! `RuleEngine` owns a `Position` and is the only thing that mutates it. One
//! engine corresponds to one game; callers serialize access to it.
//!
//! `validate_move` leaves the position untouched on every rejection. Once a
//! move passes validation it is committed, and check, checkmate and
//! stalemate are evaluated for the opponent of the piece that moved.

use crate::chess_move::{simplified_notation, ChessMove};
use crate::errors::{RuleError, RuleResult};
use crate::position::chess_rules::{DARK_BACK_RANK, LIGHT_BACK_RANK};
use crate::position::chess_types::*;
use crate::rules::attacks::is_king_in_check;
use crate::rules::engine_config::RuleEngineConfig;
use crate::rules::piece_rules::is_piece_move_legal;
use crate::rules::terminal::{
    classify, has_legal_moves, legal_destinations, trial_leaves_king_safe, GameStatus,
};
use crate::utils::algebraic::{algebraic_to_square, square_to_algebraic};
use crate::utils::fen_parser::parse_fen;

#[derive(Debug, Clone)]
pub struct RuleEngine {
    position: Position,
    config: RuleEngineConfig,
    info_lines: Vec<String>,
}

impl Default for RuleEngine {
    fn default() -> Self {
        Self::from_position(Position::starting(), RuleEngineConfig::default())
    }
}

impl RuleEngine {
    /// Build an engine from FEN with the default configuration.
    ///
    /// Malformed or short FEN silently becomes the starting position.
    pub fn new(fen: &str) -> Self {
        Self::with_config(fen, RuleEngineConfig::default())
    }

    pub fn with_config(fen: &str, config: RuleEngineConfig) -> Self {
        match parse_fen(fen) {
            Ok(position) => Self::from_position(position, config),
            Err(err) => {
                let mut engine = Self::from_position(Position::starting(), config);
                engine.info(format!("{err}; using starting position"));
                engine
            }
        }
    }

    pub fn from_position(position: Position, config: RuleEngineConfig) -> Self {
        Self {
            position,
            config,
            info_lines: Vec::new(),
        }
    }

    pub fn position(&self) -> &Position {
        &self.position
    }

    pub fn into_position(self) -> Position {
        self.position
    }

    pub fn config(&self) -> RuleEngineConfig {
        self.config
    }

    pub fn fen(&self) -> String {
        self.position.to_fen()
    }

    /// Drain accumulated `info string` diagnostics.
    pub fn take_info_lines(&mut self) -> Vec<String> {
        std::mem::take(&mut self.info_lines)
    }

    pub fn is_in_check(&self, color: Color) -> bool {
        is_king_in_check(&self.position, color)
    }

    pub fn has_legal_moves(&mut self, color: Color) -> bool {
        has_legal_moves(&mut self.position, color)
    }

    /// Status of the side to move.
    pub fn status(&mut self) -> GameStatus {
        let side = self.position.side_to_move;
        classify(&mut self.position, side)
    }

    /// Fully legal destination square names for the piece on `square`.
    pub fn legal_moves_from(&mut self, square: &str) -> RuleResult<Vec<String>> {
        let from = algebraic_to_square(square)?;
        if self.position.piece_on(from).is_none() {
            return Err(RuleError::EmptySquare(square.to_owned()));
        }
        Ok(legal_destinations(&mut self.position, from)
            .into_iter()
            .map(square_to_algebraic)
            .collect())
    }

    /// Validate `from -> to` for the side to move and commit it.
    pub fn validate_move(&mut self, from: &str, to: &str) -> RuleResult<ChessMove> {
        let result = self.validate_and_commit(from, to);
        match &result {
            Ok(mv) => {
                self.info(format!("move {} {}", mv.to_long_algebraic(), mv.notation));
                if mv.is_checkmate {
                    self.info(format!("checkmate {} wins", mv.moved_piece.color));
                } else if mv.is_stalemate {
                    self.info("stalemate".to_owned());
                }
            }
            Err(err) => self.info(format!("rejected {from}{to}: {err}")),
        }
        result
    }

    fn validate_and_commit(&mut self, from_name: &str, to_name: &str) -> RuleResult<ChessMove> {
        let from = algebraic_to_square(from_name)?;
        let to = algebraic_to_square(to_name)?;

        let piece = self
            .position
            .piece_on(from)
            .ok_or_else(|| RuleError::EmptySquare(from_name.to_owned()))?;

        if piece.color != self.position.side_to_move {
            return Err(RuleError::WrongColor {
                square: from_name.to_owned(),
                piece,
                side_to_move: self.position.side_to_move,
            });
        }

        let illegal = || RuleError::IllegalMove {
            from: from_name.to_owned(),
            to: to_name.to_owned(),
        };
        if !is_piece_move_legal(&self.position, from, to, piece) {
            return Err(illegal());
        }
        if self.config.reject_self_check
            && !trial_leaves_king_safe(&mut self.position, from, to, piece.color)
        {
            return Err(illegal());
        }

        let captured = self.position.piece_on(to);

        // Committed from here on.
        self.position.apply_move(from, to);
        if self.config.advance_turn {
            advance_turn(&mut self.position, from, to, piece, captured);
        }

        let opponent = piece.color.opposite();
        let is_check = is_king_in_check(&self.position, opponent);
        let opponent_can_move = has_legal_moves(&mut self.position, opponent);

        Ok(ChessMove {
            from,
            to,
            moved_piece: piece,
            captured_piece: captured,
            promotion: None,
            is_check,
            is_checkmate: is_check && !opponent_can_move,
            is_stalemate: !is_check && !opponent_can_move,
            notation: simplified_notation(piece, to, captured.is_some()),
            fen: self.position.to_fen(),
        })
    }

    fn info(&mut self, message: String) {
        self.info_lines
            .push(format!("info string rule_engine {message}"));
    }
}

/// Post-move bookkeeping applied only when `advance_turn` is enabled.
fn advance_turn(
    position: &mut Position,
    from: BoardSquare,
    to: BoardSquare,
    moved: Piece,
    captured: Option<Piece>,
) {
    let is_pawn = moved.kind == PieceKind::Pawn;

    position.en_passant_target = if is_pawn && (to.rank_i8() - from.rank_i8()).abs() == 2 {
        BoardSquare::new((from.rank_i8() + to.rank_i8()) / 2, from.file_i8())
    } else {
        None
    };

    if is_pawn || captured.is_some() {
        position.halfmove_clock = 0;
    } else {
        position.halfmove_clock = position.halfmove_clock.saturating_add(1);
    }

    if moved.color == Color::Dark {
        position.fullmove_number = position.fullmove_number.saturating_add(1);
    }

    if moved.kind == PieceKind::King {
        let rights = match moved.color {
            Color::Light => CASTLE_LIGHT_KINGSIDE | CASTLE_LIGHT_QUEENSIDE,
            Color::Dark => CASTLE_DARK_KINGSIDE | CASTLE_DARK_QUEENSIDE,
        };
        position.revoke_castling_rights(rights);
    }
    position.revoke_castling_rights(corner_rights(from) | corner_rights(to));

    position.side_to_move = moved.color.opposite();
}

/// Castling right tied to a rook's home corner, if `square` is one.
fn corner_rights(square: BoardSquare) -> CastlingRights {
    match (square.rank, square.file) {
        (LIGHT_BACK_RANK, 0) => CASTLE_LIGHT_QUEENSIDE,
        (LIGHT_BACK_RANK, 7) => CASTLE_LIGHT_KINGSIDE,
        (DARK_BACK_RANK, 0) => CASTLE_DARK_QUEENSIDE,
        (DARK_BACK_RANK, 7) => CASTLE_DARK_KINGSIDE,
        _ => 0,
    }
}
