//! Rule engine configuration.
//!
//! Defaults reproduce the reference behavior: a committed move does not flip
//! the side to move or touch the clocks, and a move that exposes the mover's
//! own king is accepted as long as the piece rule allows it. Both can be
//! switched on per engine or through the environment.

pub const ENV_ADVANCE_TURN: &str = "CHESS_RULES_ADVANCE_TURN";
pub const ENV_REJECT_SELF_CHECK: &str = "CHESS_RULES_REJECT_SELF_CHECK";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RuleEngineConfig {
    /// Flip side to move and update clocks, en-passant target and castling
    /// rights after each committed move.
    pub advance_turn: bool,
    /// Reject moves that leave the mover's own king attacked.
    pub reject_self_check: bool,
}

impl RuleEngineConfig {
    pub fn with_advance_turn(mut self, enabled: bool) -> Self {
        self.advance_turn = enabled;
        self
    }

    pub fn with_reject_self_check(mut self, enabled: bool) -> Self {
        self.reject_self_check = enabled;
        self
    }

    /// Defaults overridden by `CHESS_RULES_ADVANCE_TURN` and
    /// `CHESS_RULES_REJECT_SELF_CHECK` when set.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(value) = lookup(ENV_ADVANCE_TURN) {
            config.advance_turn = parse_flag(&value);
        }
        if let Some(value) = lookup(ENV_REJECT_SELF_CHECK) {
            config.reject_self_check = parse_flag(&value);
        }
        config
    }
}

fn parse_flag(value: &str) -> bool {
    let value = value.trim();
    ["1", "true", "yes", "on"]
        .iter()
        .any(|accepted| value.eq_ignore_ascii_case(accepted))
}
