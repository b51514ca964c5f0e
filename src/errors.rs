//! Errors used throughout the rule engine.
//!
//! `RuleError` is the single error type returned by square parsing, strict
//! FEN parsing, and move validation. Every variant is recoverable: callers
//! surface the message to the player as a rejected move and keep going.

use thiserror::Error;

use crate::position::chess_types::{Color, Piece};

/// Unified error type for the rule engine.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RuleError {
    /// Square name was not two characters or fell outside `a1..=h8`.
    #[error("invalid square: {0:?}")]
    InvalidSquare(String),

    /// No piece stands on the source square.
    #[error("no piece on square {0}")]
    EmptySquare(String),

    /// The source piece does not belong to the side to move.
    #[error("piece {piece} on {square} does not belong to {side_to_move}")]
    WrongColor {
        square: String,
        piece: Piece,
        side_to_move: Color,
    },

    /// The piece-specific rule rejected the destination.
    #[error("illegal move from {from} to {to}")]
    IllegalMove { from: String, to: String },

    /// Strict FEN parsing failed. The permissive constructors never return this.
    #[error("invalid FEN: {0}")]
    InvalidFen(String),
}

pub type RuleResult<T> = Result<T, RuleError>;
