//! Token status display for temporal claims.
//!
//! Renders human-readable lines for the `iat`, `nbf`, and `exp` claims.
//! This is informational only: expiry never changes whether a token is
//! reported as valid.

use chrono::{DateTime, TimeDelta, Utc};
use jwt_workbench::core::Claims;
use serde_json::Value;

/// Describe the temporal claims of a token relative to `now`.
///
/// Claims that are missing or not numeric are skipped. Returns a single
/// "no temporal claims" line when nothing applies.
pub fn token_status_lines(claims: &Claims, now: DateTime<Utc>) -> Vec<String> {
    let mut lines = Vec::new();

    if let Some(iat) = claim_time(claims, "iat") {
        lines.push(format!("Issued at:  {}", format_time(iat)));
    }

    if let Some(nbf) = claim_time(claims, "nbf") {
        let state = if nbf <= now {
            "in effect".to_string()
        } else {
            format!("NOT YET VALID (valid in {})", humanize(nbf - now))
        };
        lines.push(format!("Not before: {} ({state})", format_time(nbf)));
    }

    if let Some(exp) = claim_time(claims, "exp") {
        let state = if exp <= now {
            format!("EXPIRED ({} ago)", humanize(now - exp))
        } else {
            format!("expires in {}", humanize(exp - now))
        };
        lines.push(format!("Expires:    {} ({state})", format_time(exp)));
    }

    if lines.is_empty() {
        lines.push("No temporal claims (iat, nbf, exp)".to_string());
    }
    lines
}

fn claim_time(claims: &Claims, name: &str) -> Option<DateTime<Utc>> {
    let seconds = match claims.get(name)? {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64))?,
        _ => return None,
    };
    DateTime::from_timestamp(seconds, 0)
}

fn format_time(time: DateTime<Utc>) -> String {
    time.format("%Y-%m-%d %H:%M:%S UTC").to_string()
}

/// Render a duration using its two largest units, e.g. "3d 4h".
fn humanize(delta: TimeDelta) -> String {
    let total = delta.num_seconds().max(0);
    let units = [
        (total / 86_400, "d"),
        (total % 86_400 / 3_600, "h"),
        (total % 3_600 / 60, "m"),
        (total % 60, "s"),
    ];

    let parts: Vec<String> = units
        .iter()
        .skip_while(|(value, _)| *value == 0)
        .take(2)
        .filter(|(value, _)| *value > 0)
        .map(|(value, unit)| format!("{value}{unit}"))
        .collect();

    if parts.is_empty() {
        "0s".to_string()
    } else {
        parts.join(" ")
    }
}
