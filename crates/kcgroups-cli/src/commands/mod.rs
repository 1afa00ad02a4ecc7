//! CLI command implementations for kcgroups.

pub mod check;
pub mod groups;
pub mod token;

use anyhow::Context;
use std::fs;
use std::path::Path;

/// Read a token given either inline or as a path to a file containing it.
pub fn read_token_arg(token: String) -> anyhow::Result<String> {
    let path = Path::new(&token);
    if path.exists() {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read token from file: {}", path.display()))?;
        return Ok(content.trim().to_string());
    }
    Ok(token.trim().to_string())
}

/// Parse a lifetime such as "90s", "30m", "1h" or "7d".
///
/// The unit is required. A negative amount ("-5m") yields a lifetime that has
/// already run out, which is how an expired token is simulated.
pub fn parse_duration(s: &str) -> anyhow::Result<chrono::Duration> {
    let s = s.trim();
    let unit_at = s
        .find(|c: char| c.is_ascii_alphabetic())
        .with_context(|| format!("Duration needs a unit (s, m, h or d): {s}"))?;
    let (amount, unit) = s.split_at(unit_at);

    let amount: i64 = amount
        .parse()
        .with_context(|| format!("Invalid duration amount: {s}"))?;
    let unit_seconds = match unit {
        "s" => 1,
        "m" => 60,
        "h" => 60 * 60,
        "d" => 24 * 60 * 60,
        other => anyhow::bail!("Unknown duration unit '{other}' in {s}"),
    };

    amount
        .checked_mul(unit_seconds)
        .and_then(chrono::Duration::try_seconds)
        .with_context(|| format!("Duration out of range: {s}"))
}
