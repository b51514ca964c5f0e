//! Result record of a validated move.

use crate::position::chess_types::{BoardSquare, Piece, PieceKind};
use crate::utils::algebraic::square_to_algebraic;

/// Outcome of one successful `RuleEngine::validate_move` call.
///
/// Immutable once built; owned by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChessMove {
    pub from: BoardSquare,
    pub to: BoardSquare,
    pub moved_piece: Piece,
    pub captured_piece: Option<Piece>,
    /// Never populated: promotion substitution is not performed.
    pub promotion: Option<PieceKind>,
    pub is_check: bool,
    pub is_checkmate: bool,
    pub is_stalemate: bool,
    pub notation: String,
    /// Position after the move, as FEN.
    pub fen: String,
}

impl ChessMove {
    pub fn is_capture(&self) -> bool {
        self.captured_piece.is_some()
    }

    /// Origin and destination in long algebraic form, e.g. `e2e4`.
    pub fn to_long_algebraic(&self) -> String {
        format!(
            "{}{}",
            square_to_algebraic(self.from),
            square_to_algebraic(self.to)
        )
    }
}

/// Simplified algebraic notation: piece letter (none for pawns), `x` on a
/// capture, destination square. No disambiguation or check suffix.
pub fn simplified_notation(moved: Piece, to: BoardSquare, is_capture: bool) -> String {
    let mut out = String::with_capacity(4);
    if let Some(letter) = moved.kind.notation_letter() {
        out.push(letter);
    }
    if is_capture {
        out.push('x');
    }
    out.push_str(&square_to_algebraic(to));
    out
}
