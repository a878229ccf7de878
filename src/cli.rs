//! CLI argument definitions for jwt-workbench.
//!
//! Uses `clap` derive macros to define the command-line interface.
//! Each subcommand has its own argument struct for type-safe parsing.
//!
//! # Security
//!
//! `DecodeArgs` and `EncodeArgs` implement custom `Debug` to redact
//! sensitive fields (tokens and secrets) and prevent accidental leakage
//! through debug formatting, error chains, or logging.

use std::fmt;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use zeroize::Zeroizing;

/// Header used by `encode` when none is given.
pub const DEFAULT_HEADER: &str = r#"{"alg":"HS256","typ":"JWT"}"#;

/// An offline terminal workbench for decoding, verifying, and signing
/// JSON Web Tokens (JWTs).
#[derive(Debug, Parser)]
#[command(name = "jwt-workbench")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable debug logging (overridden by RUST_LOG).
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// The subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Decode a JWT and verify its signature with a secret or public key.
    Decode(DecodeArgs),

    /// Sign a header and payload into a new JWT.
    Encode(EncodeArgs),
}

/// Arguments for the `decode` subcommand.
#[derive(clap::Args)]
pub struct DecodeArgs {
    /// The JWT token to decode. If omitted, reads from stdin.
    pub token: Option<String>,

    /// Read the token from the specified environment variable.
    #[arg(long, value_name = "VAR_NAME")]
    pub token_env: Option<String>,

    /// HMAC shared secret, or a PEM-encoded public key, to verify with.
    ///
    /// WARNING: Passing secrets via CLI arguments may expose them in shell
    /// history. Prefer using --secret-env or --key-file instead.
    #[arg(
        long,
        value_name = "SECRET",
        value_parser = parse_zeroizing_string,
        conflicts_with_all = ["secret_env", "key_file"]
    )]
    pub secret: Option<Zeroizing<String>>,

    /// Read the secret or public key from the specified environment variable.
    #[arg(long, value_name = "VAR_NAME", conflicts_with = "key_file")]
    pub secret_env: Option<String>,

    /// Path to a file holding the secret or a PEM-encoded public key.
    #[arg(long, value_name = "FILE")]
    pub key_file: Option<PathBuf>,

    /// Output raw JSON without colors (machine-readable).
    #[arg(long)]
    pub json: bool,
}

/// Custom `Debug` that redacts token and secret fields.
impl fmt::Debug for DecodeArgs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DecodeArgs")
            .field("token", &self.token.as_ref().map(|_| "[REDACTED]"))
            .field("token_env", &self.token_env)
            .field("secret", &self.secret.as_ref().map(|_| "[REDACTED]"))
            .field("secret_env", &self.secret_env)
            .field("key_file", &self.key_file)
            .field("json", &self.json)
            .finish()
    }
}

/// Arguments for the `encode` subcommand.
#[derive(clap::Args)]
pub struct EncodeArgs {
    /// Header as a JSON object. `alg` picks the algorithm; `typ` is always JWT.
    #[arg(long, value_name = "JSON", default_value = DEFAULT_HEADER)]
    pub header: String,

    /// Payload (claims) as a JSON object.
    #[arg(long, value_name = "JSON")]
    pub payload: String,

    /// HMAC shared secret used to sign the token.
    ///
    /// WARNING: Passing secrets via CLI arguments may expose them in shell
    /// history. Prefer using --secret-env instead.
    #[arg(
        long,
        value_name = "SECRET",
        value_parser = parse_zeroizing_string,
        conflicts_with = "secret_env"
    )]
    pub secret: Option<Zeroizing<String>>,

    /// Read the signing secret from the specified environment variable.
    #[arg(long, value_name = "VAR_NAME")]
    pub secret_env: Option<String>,

    /// Output raw JSON without colors (machine-readable).
    #[arg(long)]
    pub json: bool,
}

/// Custom `Debug` that redacts the payload and secret fields.
impl fmt::Debug for EncodeArgs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EncodeArgs")
            .field("header", &self.header)
            .field("payload", &"[REDACTED]")
            .field("secret", &self.secret.as_ref().map(|_| "[REDACTED]"))
            .field("secret_env", &self.secret_env)
            .field("json", &self.json)
            .finish()
    }
}

/// Parse a string into a `Zeroizing<String>` for secure CLI arguments.
fn parse_zeroizing_string(s: &str) -> Result<Zeroizing<String>, std::convert::Infallible> {
    Ok(Zeroizing::new(s.to_string()))
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_decode_args_debug_redacts_secret() {
        let cli = Cli::parse_from(["jwt-workbench", "decode", "a.b.c", "--secret", "hunter2"]);
        let Commands::Decode(args) = cli.command else {
            panic!("expected decode");
        };
        let debug_output = format!("{args:?}");
        assert!(!debug_output.contains("hunter2"));
        assert!(!debug_output.contains("a.b.c"));
    }

    #[test]
    fn test_encode_uses_default_header() {
        let cli = Cli::parse_from(["jwt-workbench", "encode", "--payload", "{}"]);
        let Commands::Encode(args) = cli.command else {
            panic!("expected encode");
        };
        assert_eq!(args.header, DEFAULT_HEADER);
        assert!(args.secret.is_none());
    }

    #[test]
    fn test_secret_conflicts_with_key_file() {
        let result = Cli::try_parse_from([
            "jwt-workbench",
            "decode",
            "a.b.c",
            "--secret",
            "s",
            "--key-file",
            "key.pem",
        ]);
        assert!(result.is_err());
    }
}
