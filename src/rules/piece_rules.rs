//! Per-piece movement legality.
//!
//! Each check is a pure function of `(position, from, to, piece)` and only
//! answers whether the geometry and occupancy permit the move. Whether the
//! move leaves the mover's own king attacked is decided elsewhere.

use crate::position::chess_rules::{DARK_PAWN_HOME_RANK, LIGHT_PAWN_HOME_RANK};
use crate::position::chess_types::*;

/// Dispatch to the rule for `piece.kind`.
///
/// A null move and a move onto a piece of the mover's own color are never
/// legal for any kind.
pub fn is_piece_move_legal(
    position: &Position,
    from: BoardSquare,
    to: BoardSquare,
    piece: Piece,
) -> bool {
    if from == to {
        return false;
    }
    if let Some(target) = position.piece_on(to) {
        if target.color == piece.color {
            return false;
        }
    }

    match piece.kind {
        PieceKind::Pawn => pawn_move_legal(position, from, to, piece.color),
        PieceKind::Knight => knight_move_legal(from, to),
        PieceKind::Bishop => bishop_move_legal(position, from, to),
        PieceKind::Rook => rook_move_legal(position, from, to),
        PieceKind::Queen => queen_move_legal(position, from, to),
        PieceKind::King => king_move_legal(from, to),
    }
}

pub fn pawn_move_legal(position: &Position, from: BoardSquare, to: BoardSquare, color: Color) -> bool {
    let direction = color.pawn_direction();
    let d_rank = to.rank_i8() - from.rank_i8();
    let d_file = to.file_i8() - from.file_i8();
    let destination = position.piece_on(to);

    if d_file == 0 {
        if d_rank == direction {
            return destination.is_none();
        }

        let home_rank = match color {
            Color::Light => LIGHT_PAWN_HOME_RANK,
            Color::Dark => DARK_PAWN_HOME_RANK,
        };
        if d_rank == 2 * direction && from.rank == home_rank {
            let skipped = position.piece_at(from.rank_i8() + direction, from.file_i8());
            return skipped.is_none() && destination.is_none();
        }

        return false;
    }

    // Diagonal steps only capture; en-passant targets are not recognized.
    if d_file.abs() == 1 && d_rank == direction {
        return matches!(destination, Some(target) if target.color != color);
    }

    false
}

pub fn knight_move_legal(from: BoardSquare, to: BoardSquare) -> bool {
    let d_rank = (to.rank_i8() - from.rank_i8()).abs();
    let d_file = (to.file_i8() - from.file_i8()).abs();
    (d_rank == 1 && d_file == 2) || (d_rank == 2 && d_file == 1)
}

pub fn bishop_move_legal(position: &Position, from: BoardSquare, to: BoardSquare) -> bool {
    let d_rank = to.rank_i8() - from.rank_i8();
    let d_file = to.file_i8() - from.file_i8();
    if d_rank == 0 || d_rank.abs() != d_file.abs() {
        return false;
    }
    is_path_clear(position, from, to)
}

pub fn rook_move_legal(position: &Position, from: BoardSquare, to: BoardSquare) -> bool {
    if from.rank != to.rank && from.file != to.file {
        return false;
    }
    is_path_clear(position, from, to)
}

pub fn queen_move_legal(position: &Position, from: BoardSquare, to: BoardSquare) -> bool {
    rook_move_legal(position, from, to) || bishop_move_legal(position, from, to)
}

pub fn king_move_legal(from: BoardSquare, to: BoardSquare) -> bool {
    let d_rank = (to.rank_i8() - from.rank_i8()).abs();
    let d_file = (to.file_i8() - from.file_i8()).abs();
    d_rank <= 1 && d_file <= 1
}

/// True when every square strictly between `from` and `to` is empty.
///
/// Callers guarantee the two squares share a rank, file or diagonal.
pub fn is_path_clear(position: &Position, from: BoardSquare, to: BoardSquare) -> bool {
    let step_rank = (to.rank_i8() - from.rank_i8()).signum();
    let step_file = (to.file_i8() - from.file_i8()).signum();

    let mut rank = from.rank_i8() + step_rank;
    let mut file = from.file_i8() + step_file;
    while (rank, file) != (to.rank_i8(), to.file_i8()) {
        if position.piece_at(rank, file).is_some() {
            return false;
        }
        rank += step_rank;
        file += step_file;
    }

    true
}
