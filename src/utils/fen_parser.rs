//! FEN-to-Position parser.
//!
//! `parse_fen` is the strict core: it refuses a record with fewer than six
//! fields, a malformed placement, side-to-move or castling field. Numeric
//! clocks that fail to parse are read as zero and an unreadable en-passant
//! field is read as none; neither is fatal.
//!
//! `parse_fen_or_default` is the permissive contract used by the engine:
//! anything the strict parser refuses becomes the standard starting position.

use crate::errors::{RuleError, RuleResult};
use crate::position::chess_rules::{BOARD_SIZE, FEN_FIELD_COUNT, STARTING_POSITION_FEN};
use crate::position::chess_types::*;
use crate::utils::algebraic::algebraic_to_square;

pub fn parse_fen(fen: &str) -> RuleResult<Position> {
    let fields: Vec<&str> = fen.split_whitespace().collect();
    if fields.len() < FEN_FIELD_COUNT {
        return Err(RuleError::InvalidFen(format!(
            "expected {FEN_FIELD_COUNT} fields, found {}",
            fields.len()
        )));
    }

    let mut position = Position::empty();

    parse_placement(fields[0], &mut position)?;
    position.side_to_move = parse_side_to_move(fields[1])?;
    position.castling_rights = parse_castling_rights(fields[2])?;
    position.en_passant_target = parse_en_passant_target(fields[3]);
    position.halfmove_clock = fields[4].parse::<u32>().unwrap_or(0);
    position.fullmove_number = fields[5].parse::<u32>().unwrap_or(0);

    Ok(position)
}

/// Parse `fen`, falling back to the starting position on any refusal.
pub fn parse_fen_or_default(fen: &str) -> Position {
    parse_fen(fen).unwrap_or_else(|_| starting_position())
}

fn starting_position() -> Position {
    parse_fen(STARTING_POSITION_FEN).unwrap_or_else(|_| Position::empty())
}

fn parse_placement(placement: &str, position: &mut Position) -> RuleResult<()> {
    let ranks: Vec<&str> = placement.split('/').collect();
    if ranks.len() != BOARD_SIZE {
        return Err(RuleError::InvalidFen(
            "placement must contain 8 ranks".to_owned(),
        ));
    }

    for (rank, rank_str) in ranks.iter().enumerate() {
        let mut file = 0usize;

        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(RuleError::InvalidFen(format!(
                        "invalid empty-square count '{ch}'"
                    )));
                }
                file += empty_count as usize;
                continue;
            }

            let piece = Piece::from_fen_char(ch).ok_or_else(|| {
                RuleError::InvalidFen(format!("invalid piece character '{ch}'"))
            })?;

            if file >= BOARD_SIZE {
                return Err(RuleError::InvalidFen(format!(
                    "rank {} has too many files",
                    8 - rank
                )));
            }

            position.occupancy[rank][file] = Some(piece);
            file += 1;
        }

        if file != BOARD_SIZE {
            return Err(RuleError::InvalidFen(format!(
                "rank {} does not sum to 8 files",
                8 - rank
            )));
        }
    }

    Ok(())
}

fn parse_side_to_move(field: &str) -> RuleResult<Color> {
    match field {
        "w" => Ok(Color::Light),
        "b" => Ok(Color::Dark),
        _ => Err(RuleError::InvalidFen(format!(
            "invalid side-to-move field: {field}"
        ))),
    }
}

fn parse_castling_rights(field: &str) -> RuleResult<CastlingRights> {
    if field == "-" {
        return Ok(0);
    }

    let mut rights: CastlingRights = 0;
    for ch in field.chars() {
        match ch {
            'K' => rights |= CASTLE_LIGHT_KINGSIDE,
            'Q' => rights |= CASTLE_LIGHT_QUEENSIDE,
            'k' => rights |= CASTLE_DARK_KINGSIDE,
            'q' => rights |= CASTLE_DARK_QUEENSIDE,
            _ => {
                return Err(RuleError::InvalidFen(format!(
                    "invalid castling rights character: {ch}"
                )))
            }
        }
    }

    Ok(rights)
}

fn parse_en_passant_target(field: &str) -> Option<BoardSquare> {
    if field == "-" {
        return None;
    }
    algebraic_to_square(field).ok()
}
