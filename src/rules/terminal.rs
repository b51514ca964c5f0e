//! Terminal-state search.
//!
//! Exhaustively scans every piece of a color against every target square.
//! Candidates that pass the piece rules are tried on the board itself: the
//! source and destination occupants are saved, the move is applied, the
//! mover's king is tested, and both occupants are restored before anything
//! else happens. No trial leaves a trace on the position.

use crate::position::chess_types::*;
use crate::rules::attacks::is_king_in_check;
use crate::rules::piece_rules::is_piece_move_legal;

/// Outcome of the position for the side about to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Ongoing,
    Check,
    Checkmate,
    Stalemate,
}

impl GameStatus {
    pub fn is_terminal(self) -> bool {
        matches!(self, GameStatus::Checkmate | GameStatus::Stalemate)
    }
}

/// Try `from -> to` for `color` and report whether its king is safe afterwards.
///
/// The position is restored to exactly its prior occupants before returning.
pub fn trial_leaves_king_safe(
    position: &mut Position,
    from: BoardSquare,
    to: BoardSquare,
    color: Color,
) -> bool {
    let saved_from = position.piece_on(from);
    let saved_to = position.piece_on(to);

    position.apply_move(from, to);
    let safe = !is_king_in_check(position, color);

    position.set_piece_on(from, saved_from);
    position.set_piece_on(to, saved_to);

    safe
}

/// True on the first fully legal move found for `color`.
pub fn has_legal_moves(position: &mut Position, color: Color) -> bool {
    let movers: Vec<(BoardSquare, Piece)> = position
        .pieces()
        .filter(|(_, piece)| piece.color == color)
        .collect();

    for (from, piece) in movers {
        for to in BoardSquare::all() {
            if !is_piece_move_legal(position, from, to, piece) {
                continue;
            }
            if trial_leaves_king_safe(position, from, to, color) {
                return true;
            }
        }
    }

    false
}

/// Fully legal destinations for the piece on `from`, in rank-major order.
/// Empty when `from` holds no piece.
pub fn legal_destinations(position: &mut Position, from: BoardSquare) -> Vec<BoardSquare> {
    let Some(piece) = position.piece_on(from) else {
        return Vec::new();
    };

    let mut out = Vec::new();
    for to in BoardSquare::all() {
        if is_piece_move_legal(position, from, to, piece)
            && trial_leaves_king_safe(position, from, to, piece.color)
        {
            out.push(to);
        }
    }
    out
}

/// Classify the position from `color`'s point of view.
pub fn classify(position: &mut Position, color: Color) -> GameStatus {
    let in_check = is_king_in_check(position, color);
    let can_move = has_legal_moves(position, color);
    match (in_check, can_move) {
        (true, false) => GameStatus::Checkmate,
        (false, false) => GameStatus::Stalemate,
        (true, true) => GameStatus::Check,
        (false, true) => GameStatus::Ongoing,
    }
}
