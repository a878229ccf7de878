//! Handler for the `decode` subcommand.
//!
//! Decodes a JWT, verifies its signature against a shared secret or a
//! PEM-encoded public key, and prints the header, payload, temporal
//! status, and verification outcome. Supports reading the token from a
//! CLI argument, environment variable, or stdin.

use anyhow::Result;
use chrono::Utc;
use jwt_workbench::core::{DecodeResult, decode};
use serde_json::{Value, json};

use super::{resolve_key_material, resolve_token};
use crate::cli::DecodeArgs;
use crate::display::json_printer::render_json;
use crate::display::token_status::token_status_lines;
use crate::display::{paint_status, use_color};

/// Execute the `decode` subcommand with the given arguments.
///
/// Returns `true` only when the token is well formed and its signature
/// verifies. Fails outright when nothing could be decoded at all.
pub fn execute(args: &DecodeArgs) -> Result<bool> {
    let token = resolve_token(args.token.as_deref(), args.token_env.as_deref())?;
    let key_material = resolve_key_material(
        args.secret.as_ref(),
        args.secret_env.as_deref(),
        args.key_file.as_deref(),
    )?;

    let result = decode(&token, &key_material);

    if args.json {
        println!("{}", render_json(&json_report(&result), false));
        return Ok(result.is_valid());
    }

    let color = use_color();
    if let Some(header) = result.header() {
        println!("--- Header ---");
        println!("{}", render_json(&Value::Object(header.clone()), color));
        println!();
    }

    let Some(decoded) = result.token() else {
        return match result.failure() {
            Some(err) => Err(anyhow::anyhow!("{err}")),
            None => Ok(false),
        };
    };

    println!("--- Payload ---");
    println!("{}", render_json(&Value::Object(decoded.claims.clone()), color));
    println!();
    println!("--- Token Status ---");
    for line in token_status_lines(&decoded.claims, Utc::now()) {
        println!("{line}");
    }
    println!();
    println!("--- Signature ---");
    println!("{}", signature_line(&result, color));

    Ok(result.is_valid())
}

/// The verification outcome, with the underlying reason when there is one.
fn signature_line(result: &DecodeResult, color: bool) -> String {
    let status = result.status_message();
    let text = match result.failure() {
        Some(err) if result.error().is_none() => format!("{status}: {err}"),
        _ => status,
    };
    paint_status(&text, result.is_valid(), color)
}

fn json_report(result: &DecodeResult) -> Value {
    json!({
        "header": result.header().map(|header| Value::Object(header.clone())),
        "payload": result.token().map(|t| Value::Object(t.claims.clone())),
        "token_valid": result.is_token_valid(),
        "signature_valid": result.is_signature_valid(),
        "error": result.failure().map(ToString::to_string),
    })
}
