//! Token commands.
//!
//! `kcgroups token decode` - Print a token's claims.
//! `kcgroups token encode` - Build an unsigned token for testing.

use super::{parse_duration, read_token_arg};
use anyhow::Context;
use chrono::Utc;
use kcgroups_token::{ClaimSet, decode_claims, encode_unsigned};

/// Print the claims of a token as pretty JSON.
pub fn decode(token: String) -> anyhow::Result<()> {
    let token = read_token_arg(token)?;
    let claims = decode_claims(&token).context("Failed to decode token")?;

    println!("{}", serde_json::to_string_pretty(&claims)?);

    if let Some(expires_at) = claims.expires_at() {
        let state = if expires_at < Utc::now() { "expired" } else { "valid" };
        eprintln!("exp: {} ({})", expires_at.to_rfc3339(), state);
    }

    Ok(())
}

/// Print an unsigned token whose membership claim lists `groups`.
pub fn encode(
    groups: Vec<String>,
    claim: String,
    subject: Option<String>,
    expires_in: Option<String>,
) -> anyhow::Result<()> {
    let token = build_token(groups, &claim, subject, expires_in.as_deref())?;
    println!("{}", token);
    Ok(())
}

fn build_token(
    groups: Vec<String>,
    claim: &str,
    subject: Option<String>,
    expires_in: Option<&str>,
) -> anyhow::Result<String> {
    let mut claims = ClaimSet::new().with_claim(claim, groups);

    if let Some(sub) = subject {
        claims = claims.with_claim("sub", sub);
    }

    if let Some(expires_in) = expires_in {
        let exp = Utc::now() + parse_duration(expires_in)?;
        claims = claims.with_claim("exp", exp.timestamp());
    }

    Ok(encode_unsigned(&claims)?)
}
