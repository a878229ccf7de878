//! Handler for the `encode` subcommand.
//!
//! Validates the header and payload JSON, signs them with the shared
//! secret, and prints the resulting token. Every error that applies
//! (header, payload, signing) is reported, not just the first.

use anyhow::Result;
use jwt_workbench::core::{EncodeResult, encode_json};
use serde_json::json;

use super::resolve_key_material;
use crate::cli::EncodeArgs;
use crate::display::json_printer::render_json;

/// Execute the `encode` subcommand with the given arguments.
///
/// Returns `true` when a token was produced.
pub fn execute(args: &EncodeArgs) -> Result<bool> {
    let secret = resolve_key_material(args.secret.as_ref(), args.secret_env.as_deref(), None)?;
    let result = encode_json(&args.header, &args.payload, &secret);

    if args.json {
        println!("{}", render_json(&json_report(&result), false));
    } else if result.is_ok() {
        println!("{}", result.token());
    } else {
        for err in result.errors() {
            eprintln!("Error: {err}");
        }
    }

    Ok(result.is_ok())
}

fn json_report(result: &EncodeResult) -> serde_json::Value {
    json!({
        "token": result.token(),
        "header_error": result.header_error(),
        "payload_error": result.payload_error(),
        "signing_error": result.signing_error(),
    })
}
