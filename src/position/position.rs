//! Board position model.
//!
//! `Position` owns an 8×8 grid of occupants plus side-to-move, castling
//! rights, en-passant target and move clocks. It is mutated in place by the
//! rule engine and serialized back to FEN after every committed move.
//!
//! Coordinate accessors are permissive: reads outside the board return no
//! piece and writes outside the board are ignored. Path-walking code in the
//! rule checks relies on this when probing one step past an edge.

use std::fmt;

use crate::errors::RuleResult;
use crate::position::chess_rules::{BOARD_SIZE, STARTING_POSITION_FEN};
use crate::position::chess_types::*;
use crate::utils::fen_generator::generate_fen;
use crate::utils::fen_parser::{parse_fen, parse_fen_or_default};
use crate::utils::render_position::render_position;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position {
    // [rank][file], rank 0 is rank 8.
    pub occupancy: [[Option<Piece>; BOARD_SIZE]; BOARD_SIZE],

    pub side_to_move: Color,
    pub castling_rights: CastlingRights,
    pub en_passant_target: Option<BoardSquare>,

    pub halfmove_clock: u32,
    pub fullmove_number: u32,
}

impl Default for Position {
    /// The standard starting position.
    fn default() -> Self {
        Self::starting()
    }
}

impl Position {
    /// A board with no pieces, white to move and no castling rights.
    pub fn empty() -> Self {
        Self {
            occupancy: [[None; BOARD_SIZE]; BOARD_SIZE],
            side_to_move: Color::Light,
            castling_rights: 0,
            en_passant_target: None,
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }

    pub fn starting() -> Self {
        parse_fen_or_default(STARTING_POSITION_FEN)
    }

    /// Permissive constructor: malformed or short input yields the starting position.
    pub fn from_fen(fen: &str) -> Self {
        parse_fen_or_default(fen)
    }

    /// Strict constructor for callers that want to know why a FEN was refused.
    pub fn try_from_fen(fen: &str) -> RuleResult<Self> {
        parse_fen(fen)
    }

    pub fn to_fen(&self) -> String {
        generate_fen(self)
    }

    /// Occupant at `(rank, file)`, or `None` when empty or off the board.
    #[inline]
    pub fn piece_at(&self, rank: i8, file: i8) -> Option<Piece> {
        match BoardSquare::new(rank, file) {
            Some(square) => self.piece_on(square),
            None => None,
        }
    }

    /// Replace the occupant at `(rank, file)`. Off-board writes are ignored.
    #[inline]
    pub fn set_piece_at(&mut self, rank: i8, file: i8, piece: Option<Piece>) {
        if let Some(square) = BoardSquare::new(rank, file) {
            self.set_piece_on(square, piece);
        }
    }

    /// Occupant of `square`, or `None` when empty or off the board.
    #[inline]
    pub fn piece_on(&self, square: BoardSquare) -> Option<Piece> {
        self.occupancy
            .get(square.rank as usize)
            .and_then(|row| row.get(square.file as usize))
            .copied()
            .flatten()
    }

    /// Replace the occupant of `square`. Off-board writes are ignored.
    #[inline]
    pub fn set_piece_on(&mut self, square: BoardSquare, piece: Option<Piece>) {
        if let Some(cell) = self
            .occupancy
            .get_mut(square.rank as usize)
            .and_then(|row| row.get_mut(square.file as usize))
        {
            *cell = piece;
        }
    }

    /// Relocate the occupant of `from` to `to`, clearing `from`.
    ///
    /// No legality check is made and no side effects (castling rook, en
    /// passant removal, promotion) are applied. Nothing happens when either
    /// square is off the board.
    pub fn apply_move(&mut self, from: BoardSquare, to: BoardSquare) {
        if !from.is_on_board() || !to.is_on_board() {
            return;
        }
        let moving = self.piece_on(from);
        self.set_piece_on(from, None);
        self.set_piece_on(to, moving);
    }

    /// Occupied squares with their pieces, in rank-major order from a8.
    pub fn pieces(&self) -> impl Iterator<Item = (BoardSquare, Piece)> + '_ {
        BoardSquare::all().filter_map(move |square| self.piece_on(square).map(|p| (square, p)))
    }

    pub fn has_castling_right(&self, right: CastlingRights) -> bool {
        (self.castling_rights & right) != 0
    }

    /// Clear castling rights. Rights are never re-granted once cleared.
    pub fn revoke_castling_rights(&mut self, rights: CastlingRights) {
        self.castling_rights &= !rights;
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", render_position(self))
    }
}
