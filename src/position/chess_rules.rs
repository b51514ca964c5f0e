//! Canonical chess-rule constants.
//!
//! Static literals used to initialize positions and to drive the pawn rules.

/// Standard chess starting position in Forsyth-Edwards Notation (FEN).
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Number of space-separated fields in a complete FEN record.
pub const FEN_FIELD_COUNT: usize = 6;

pub const BOARD_SIZE: usize = 8;

/// Rank index (rank 2) white pawns may double-step from.
pub const LIGHT_PAWN_HOME_RANK: u8 = 6;
/// Rank index (rank 7) black pawns may double-step from.
pub const DARK_PAWN_HOME_RANK: u8 = 1;

/// Rank index holding the white back rank (rank 1).
pub const LIGHT_BACK_RANK: u8 = 7;
/// Rank index holding the black back rank (rank 8).
pub const DARK_BACK_RANK: u8 = 0;
