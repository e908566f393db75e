//! Subcommands of the noughts binary

pub mod analyze;
pub mod play;
pub mod self_play;

use anyhow::{Result, anyhow};

use crate::tictactoe::Symbol;

pub(crate) fn parse_symbol_token(value: &str, flag: &str) -> Result<Symbol> {
    match value.trim().to_ascii_lowercase().as_str() {
        "x" | "first" => Ok(Symbol::X),
        "o" | "second" => Ok(Symbol::O),
        other => Err(anyhow!(
            "Invalid value '{other}' for {flag} (expected 'x' or 'o')"
        )),
    }
}
