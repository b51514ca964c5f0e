//! Crate root module declarations for the chess rule engine.
//!
//! Exposes the position model (board grid, FEN encoding), the rule checks
//! (per-piece legality, attack detection, terminal-state search), the
//! `RuleEngine` that validates and commits moves for one game, and utility
//! helpers for square names, FEN and board rendering.

pub mod chess_move;
pub mod errors;

pub mod position {
    pub mod chess_rules;
    pub mod chess_types;
    pub mod position;
}

pub mod rules {
    pub mod attacks;
    pub mod engine_config;
    pub mod piece_rules;
    pub mod rule_engine;
    pub mod terminal;
}

pub mod utils {
    pub mod algebraic;
    pub mod fen_generator;
    pub mod fen_parser;
    pub mod render_position;
}

pub use chess_move::ChessMove;
pub use errors::{RuleError, RuleResult};
pub use position::chess_types::{BoardSquare, Color, Piece, PieceKind};
pub use position::position::Position;
pub use rules::engine_config::RuleEngineConfig;
pub use rules::rule_engine::RuleEngine;
pub use rules::terminal::GameStatus;
