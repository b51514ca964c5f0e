//! Line-oriented front end for the rule engine.
//!
//! Run with:
//! `cargo run -- ["FEN"] [--advance-turn] [--reject-self-check] [--verbose]`
//!
//! Commands: `e2 e4` or `e2e4`, `moves <sq>`, `status`, `fen`, `board`, `quit`.

use std::io::{self, BufRead, Write};

use chess_rules::{Position, RuleEngine, RuleEngineConfig};

enum Reply {
    Text(String),
    Quit,
}

const FLAG_VERBOSE: &[&str] = &["--verbose", "-v"];
const FLAG_ADVANCE_TURN: &str = "--advance-turn";
const FLAG_REJECT_SELF_CHECK: &str = "--reject-self-check";

#[derive(Debug, Default, PartialEq, Eq)]
struct CliOptions {
    fen: Option<String>,
    verbose: bool,
    advance_turn: bool,
    reject_self_check: bool,
}

/// Known flags are picked out by name; the first remaining argument is the FEN.
fn parse_args(args: &[String]) -> CliOptions {
    let mut options = CliOptions::default();
    for arg in args {
        if FLAG_VERBOSE.contains(&arg.as_str()) {
            options.verbose = true;
        } else if arg == FLAG_ADVANCE_TURN {
            options.advance_turn = true;
        } else if arg == FLAG_REJECT_SELF_CHECK {
            options.reject_self_check = true;
        } else if options.fen.is_none() {
            options.fen = Some(arg.clone());
        }
    }
    options
}

fn main() -> io::Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let options = parse_args(&args);
    let verbose = options.verbose;

    let mut config = RuleEngineConfig::from_env();
    if options.advance_turn {
        config = config.with_advance_turn(true);
    }
    if options.reject_self_check {
        config = config.with_reject_self_check(true);
    }

    let mut engine = match &options.fen {
        Some(fen) => RuleEngine::with_config(fen, config),
        None => RuleEngine::from_position(Position::starting(), config),
    };

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    for line in stdin.lock().lines() {
        let line = line?;
        let reply = handle_command(&mut engine, line.trim());

        if verbose {
            for info in engine.take_info_lines() {
                writeln!(stdout, "{info}")?;
            }
        } else {
            engine.take_info_lines();
        }

        match reply {
            Some(Reply::Text(text)) => writeln!(stdout, "{text}")?,
            Some(Reply::Quit) => break,
            None => {}
        }
        stdout.flush()?;
    }

    Ok(())
}

fn handle_command(engine: &mut RuleEngine, line: &str) -> Option<Reply> {
    let tokens: Vec<&str> = line.split_whitespace().collect();

    let text = match tokens.as_slice() {
        [] => return None,
        ["quit"] | ["exit"] => return Some(Reply::Quit),
        ["fen"] => engine.fen(),
        ["board"] => engine.position().to_string(),
        ["status"] => format!("{:?}", engine.status()),
        ["moves", square] => match engine.legal_moves_from(square) {
            Ok(targets) if targets.is_empty() => "none".to_owned(),
            Ok(targets) => targets.join(" "),
            Err(err) => format!("error: {err}"),
        },
        [from, to] => play(engine, from, to),
        [both] if both.len() == 4 && both.is_char_boundary(2) => {
            let (from, to) = both.split_at(2);
            play(engine, from, to)
        }
        _ => format!("error: unknown command {line:?}"),
    };

    Some(Reply::Text(text))
}

fn play(engine: &mut RuleEngine, from: &str, to: &str) -> String {
    match engine.validate_move(from, to) {
        Ok(mv) => {
            let mut flags = Vec::new();
            if mv.is_checkmate {
                flags.push("checkmate");
            } else if mv.is_check {
                flags.push("check");
            }
            if mv.is_stalemate {
                flags.push("stalemate");
            }
            if flags.is_empty() {
                format!("{} {}", mv.notation, mv.fen)
            } else {
                format!("{} [{}] {}", mv.notation, flags.join(","), mv.fen)
            }
        }
        Err(err) => format!("error: {err}"),
    }
}
