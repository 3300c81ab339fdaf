//! `/score` command parsing.

use alphalert_core::types::Chain;
use once_cell::sync::Lazy;
use regex::Regex;

/// A parsed `/score` request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreCommand {
    pub wallet: String,
    pub chain: Chain,
}

/// Matches `/score <address> [chain]`, tolerating the `@botname` suffix
/// chat clients append in groups. Addresses are 32-44 alphanumeric chars.
static SCORE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^/score(?:@\w+)?\s+([A-Za-z0-9]{32,44})\s*(\w+)?").expect("valid regex")
});

/// Parse a `/score` command from free text.
///
/// The chain defaults to `sol`; an unrecognized chain or malformed address
/// fails the parse.
pub fn parse_command(text: &str) -> Option<ScoreCommand> {
    let captures = SCORE_RE.captures(text.trim())?;
    let wallet = captures.get(1)?.as_str().to_string();
    let chain = match captures.get(2) {
        Some(arg) => arg.as_str().parse::<Chain>().ok()?,
        None => Chain::Solana,
    };
    Some(ScoreCommand { wallet, chain })
}
