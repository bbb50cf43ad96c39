//! Token commands.
//!
//! `hourly token inspect` - decode a token's claims (no verification).
//! `hourly token mint` - mint an unsigned token for demo mode.

use anyhow::{Context as _, bail};
use chrono::{Duration, Utc};
use hourly_auth::{Credential, decode_claims, mint_unsigned};
use hourly_core::UserId;

fn parse_duration(s: &str) -> anyhow::Result<Duration> {
    let s = s.trim().to_lowercase();

    let delta = if let Some(hours) = s.strip_suffix('h') {
        Duration::try_hours(hours.parse()?)
    } else if let Some(days) = s.strip_suffix('d') {
        Duration::try_days(days.parse()?)
    } else if let Some(minutes) = s.strip_suffix('m') {
        Duration::try_minutes(minutes.parse()?)
    } else if let Some(seconds) = s.strip_suffix('s') {
        Duration::try_seconds(seconds.parse()?)
    } else {
        // Bare numbers are hours
        Duration::try_hours(s.parse()?)
    };
    delta.with_context(|| format!("Duration {s} is out of range"))
}

/// Print a token's claims.
pub fn inspect(token: &str) -> anyhow::Result<()> {
    let claims = decode_claims(&Credential::new(token.trim())).context("Failed to decode token")?;

    println!("Token Information (unverified):");
    println!("  Subject: {}", claims.subject);
    if let Some(iat) = claims.issued_at_time() {
        println!("  Issued: {}", iat.to_rfc3339());
    }
    if let Some(exp) = claims.expires_at_time() {
        let state = if claims.is_expired_at(Utc::now()) {
            " (expired)"
        } else {
            ""
        };
        println!("  Expires: {}{}", exp.to_rfc3339(), state);
    }
    println!();
    println!("{}", serde_json::to_string_pretty(&claims.payload)?);
    Ok(())
}

/// Mint an unsigned token for `uid`.
pub fn mint(uid: &str, expires: Option<&str>) -> anyhow::Result<()> {
    let token = mint_token(uid, expires)?;
    println!("{}", token.as_str());
    Ok(())
}

fn mint_token(uid: &str, expires: Option<&str>) -> anyhow::Result<Credential> {
    let Some(subject) = UserId::new(uid.trim()) else {
        bail!("--uid must not be empty");
    };
    let ttl = expires
        .map(parse_duration)
        .transpose()
        .context("Invalid --expires value. Use e.g. 30m, 24h, 7d")?;
    let token = mint_unsigned(&subject, ttl).context("Invalid --expires value")?;
    tracing::info!(uid = %subject, "Minted unsigned token");
    Ok(token)
}
