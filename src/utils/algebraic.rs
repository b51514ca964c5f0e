//! Square-name conversions.
//!
//! Converts between human-readable coordinates (e.g. `e4`) and the grid
//! addressing used by `Position`, where rank index 0 is rank 8.

use crate::errors::{RuleError, RuleResult};
use crate::position::chess_types::BoardSquare;

/// Parse a square name such as `"e4"`.
///
/// File is `letter - 'a'`, rank index is `8 - digit`. Anything that is not
/// exactly two characters or lands outside the board is `InvalidSquare`.
pub fn algebraic_to_square(name: &str) -> RuleResult<BoardSquare> {
    let bytes = name.as_bytes();
    if bytes.len() != 2 {
        return Err(RuleError::InvalidSquare(name.to_owned()));
    }

    let file = i16::from(bytes[0]) - i16::from(b'a');
    let rank = 8 - (i16::from(bytes[1]) - i16::from(b'0'));

    if !(0..8).contains(&file) || !(0..8).contains(&rank) {
        return Err(RuleError::InvalidSquare(name.to_owned()));
    }

    Ok(BoardSquare {
        rank: rank as u8,
        file: file as u8,
    })
}

/// Convert a grid square back to its name (for example rank 4, file 4 is `"e4"`).
#[inline]
pub fn square_to_algebraic(square: BoardSquare) -> String {
    let file_char = char::from(b'a' + square.file);
    let rank_char = char::from(b'8' - square.rank);
    format!("{file_char}{rank_char}")
}
