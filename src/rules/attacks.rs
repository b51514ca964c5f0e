//! Attack and check detection.
//!
//! A square is attacked by a color when some piece of that color could
//! legally move onto it under the per-piece rules. Pawns therefore attack
//! only occupied diagonal squares, which is all a king square ever is.

use crate::position::chess_types::*;
use crate::rules::piece_rules::is_piece_move_legal;

/// Locate the king of `color` by scanning the whole board.
pub fn king_square(position: &Position, color: Color) -> Option<BoardSquare> {
    let king = Piece::new(color, PieceKind::King);
    position
        .pieces()
        .find(|(_, piece)| *piece == king)
        .map(|(square, _)| square)
}

pub fn is_square_attacked(position: &Position, square: BoardSquare, attacker_color: Color) -> bool {
    position.pieces().any(|(from, piece)| {
        piece.color == attacker_color && is_piece_move_legal(position, from, square, piece)
    })
}

/// All pieces of `attacker_color` that could move onto `square`.
pub fn attackers_to_square(
    position: &Position,
    square: BoardSquare,
    attacker_color: Color,
) -> Vec<(BoardSquare, Piece)> {
    position
        .pieces()
        .filter(|(from, piece)| {
            piece.color == attacker_color && is_piece_move_legal(position, *from, square, *piece)
        })
        .collect()
}

/// True when `color`'s king is on the board and attacked by the other color.
/// A missing king is never in check.
#[inline]
pub fn is_king_in_check(position: &Position, color: Color) -> bool {
    let Some(king_sq) = king_square(position, color) else {
        return false;
    };
    is_square_attacked(position, king_sq, color.opposite())
}
