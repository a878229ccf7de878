//! Command handlers for each CLI subcommand.
//!
//! Each subcommand is implemented in its own module and exposes
//! a single `execute` function that receives the parsed arguments
//! and reports whether the command succeeded.
//!
//! The helpers below gather raw input (tokens, secrets, key files)
//! from arguments, environment variables, files, or stdin.

pub mod decode;
pub mod encode;

use std::io::{IsTerminal, Read};
use std::path::Path;

use jwt_workbench::JwtWorkbenchError;
use zeroize::Zeroizing;

/// Resolve the token from the argument, an environment variable, or stdin.
///
/// Stdin is only read when it is not a terminal, so an interactive
/// invocation without a token fails fast instead of waiting for input.
pub(crate) fn resolve_token(
    token: Option<&str>,
    token_env: Option<&str>,
) -> Result<String, JwtWorkbenchError> {
    let raw = match (token, token_env) {
        (Some(token), _) => token.to_string(),
        (None, Some(name)) => read_env_var(name)?.as_str().to_string(),
        (None, None) => read_stdin()?,
    };

    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(JwtWorkbenchError::NoTokenProvided);
    }
    Ok(trimmed.to_string())
}

/// Resolve key material from `--secret`, `--secret-env`, or `--key-file`.
///
/// Returns an empty secret when none is given. Key files keep their
/// content verbatim apart from a single trailing newline.
pub(crate) fn resolve_key_material(
    secret: Option<&Zeroizing<String>>,
    secret_env: Option<&str>,
    key_file: Option<&Path>,
) -> Result<Zeroizing<String>, JwtWorkbenchError> {
    if let Some(secret) = secret {
        return Ok(secret.clone());
    }
    if let Some(name) = secret_env {
        return read_env_var(name);
    }
    match key_file {
        Some(path) => read_key_file(path),
        None => Ok(Zeroizing::new(String::new())),
    }
}

/// Read an environment variable after validating its name.
pub(crate) fn read_env_var(name: &str) -> Result<Zeroizing<String>, JwtWorkbenchError> {
    if name.is_empty() || name.contains('=') || name.contains('\0') {
        return Err(JwtWorkbenchError::InvalidEnvVarName {
            name: name.to_string(),
        });
    }

    std::env::var(name)
        .map(Zeroizing::new)
        .map_err(|_| JwtWorkbenchError::EnvVarNotFound {
            name: name.to_string(),
        })
}

fn read_key_file(path: &Path) -> Result<Zeroizing<String>, JwtWorkbenchError> {
    let mut content = std::fs::read_to_string(path)
        .map(Zeroizing::new)
        .map_err(|e| JwtWorkbenchError::KeyFileError {
            path: path.display().to_string(),
            reason: e.kind().to_string(),
        })?;

    if content.ends_with('\n') {
        content.pop();
        if content.ends_with('\r') {
            content.pop();
        }
    }
    Ok(content)
}

fn read_stdin() -> Result<String, JwtWorkbenchError> {
    let mut stdin = std::io::stdin();
    if stdin.is_terminal() {
        return Ok(String::new());
    }

    let mut input = String::new();
    stdin
        .read_to_string(&mut input)
        .map_err(|e| JwtWorkbenchError::StdinReadError {
            reason: e.kind().to_string(),
        })?;
    Ok(input)
}
