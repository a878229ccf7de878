//! Token construction and signing.
//!
//! Builds a token from a header map and a claim set and signs it with a
//! shared secret. The algorithm comes from the header's `alg` field;
//! anything unrecognized silently falls back to HS256 so that signing is
//! always attempted.

use std::fmt;

use jsonwebtoken::{Algorithm, EncodingKey};
use log::debug;
use serde_json::Value;

use super::sanitize_jwt_error;
use super::segments::{Claims, Header, encode_segment};
use crate::error::JwtWorkbenchError;

/// The `typ` value written into every signed header.
pub const TOKEN_TYPE: &str = "JWT";

/// Algorithms the encoder can be asked for by name.
const SIGNING_ALGORITHMS: [(&str, Algorithm); 6] = [
    ("HS256", Algorithm::HS256),
    ("HS384", Algorithm::HS384),
    ("HS512", Algorithm::HS512),
    ("RS256", Algorithm::RS256),
    ("RS384", Algorithm::RS384),
    ("RS512", Algorithm::RS512),
];

/// The outcome of one encode attempt.
///
/// The token is empty whenever any error is set. Only `signing_error`
/// is ever produced by [`encode`]; the two validation errors come from
/// the JSON parsing step in [`encode_json`].
#[derive(Clone, Default, PartialEq, Eq)]
pub struct EncodeResult {
    token: String,
    header_error: Option<String>,
    payload_error: Option<String>,
    signing_error: Option<String>,
}

impl EncodeResult {
    /// The signed token, or `""` on failure.
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Why the header JSON was rejected.
    pub fn header_error(&self) -> Option<&str> {
        self.header_error.as_deref()
    }

    /// Why the payload JSON was rejected.
    pub fn payload_error(&self) -> Option<&str> {
        self.payload_error.as_deref()
    }

    /// Why signing failed.
    pub fn signing_error(&self) -> Option<&str> {
        self.signing_error.as_deref()
    }

    /// True when a token was produced.
    pub fn is_ok(&self) -> bool {
        self.header_error.is_none() && self.payload_error.is_none() && self.signing_error.is_none()
    }

    /// All error messages that are set, in header, payload, signing order.
    pub fn errors(&self) -> impl Iterator<Item = &str> {
        [&self.header_error, &self.payload_error, &self.signing_error]
            .into_iter()
            .filter_map(|err| err.as_deref())
    }
}

/// Custom `Debug` that redacts the token.
impl fmt::Debug for EncodeResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EncodeResult")
            .field("token", &(!self.token.is_empty()).then_some("[REDACTED]"))
            .field("header_error", &self.header_error)
            .field("payload_error", &self.payload_error)
            .field("signing_error", &self.signing_error)
            .finish()
    }
}

/// Pick the signing algorithm named by the header's `alg` field.
///
/// Falls back to HS256 when `alg` is absent, not a string, or not one of
/// HS256/384/512 or RS256/384/512.
pub fn select_algorithm(header: &Header) -> (&'static str, Algorithm) {
    let requested = header.get("alg").and_then(Value::as_str);
    SIGNING_ALGORITHMS
        .into_iter()
        .find(|(name, _)| Some(*name) == requested)
        .unwrap_or_else(|| {
            debug!("alg {requested:?} not recognized, signing with HS256");
            SIGNING_ALGORITHMS[0]
        })
}

/// Build and sign a token from a header and a claim set.
///
/// Every header field except `alg` and `typ` is carried over; those two
/// are always set by the signing operation. The raw bytes of `secret`
/// are the key for every algorithm, so RSA algorithms report a signing
/// error instead of producing a token.
pub fn encode(header: &Header, claims: &Claims, secret: &str) -> EncodeResult {
    match sign_token(header, claims, secret) {
        Ok(token) => EncodeResult {
            token,
            ..EncodeResult::default()
        },
        Err(err) => EncodeResult {
            signing_error: Some(err.to_string()),
            ..EncodeResult::default()
        },
    }
}

/// Parse header and payload JSON text, then sign.
///
/// Header and payload are validated independently so both errors can be
/// reported at once; [`encode`] only runs when both are JSON objects.
pub fn encode_json(header_json: &str, payload_json: &str, secret: &str) -> EncodeResult {
    match (
        parse_json_object(header_json, "header"),
        parse_json_object(payload_json, "payload"),
    ) {
        (Ok(header), Ok(claims)) => encode(&header, &claims, secret),
        (header, claims) => EncodeResult {
            header_error: header.err().map(|e| e.to_string()),
            payload_error: claims.err().map(|e| e.to_string()),
            ..EncodeResult::default()
        },
    }
}

fn sign_token(header: &Header, claims: &Claims, secret: &str) -> Result<String, JwtWorkbenchError> {
    let (name, algorithm) = select_algorithm(header);

    let mut token_header = header.clone();
    token_header.insert("alg".to_string(), Value::from(name));
    token_header.insert("typ".to_string(), Value::from(TOKEN_TYPE));

    let signing_input = format!(
        "{}.{}",
        encode_segment(&to_json_bytes(&token_header)?),
        encode_segment(&to_json_bytes(claims)?)
    );

    let key = EncodingKey::from_secret(secret.as_bytes());
    let signature = jsonwebtoken::crypto::sign(signing_input.as_bytes(), &key, algorithm)
        .map_err(|e| JwtWorkbenchError::SigningFailed {
            reason: sanitize_jwt_error(e.kind()),
        })?;

    debug!("signed token with {name}");
    Ok(format!("{signing_input}.{signature}"))
}

fn to_json_bytes(map: &serde_json::Map<String, Value>) -> Result<Vec<u8>, JwtWorkbenchError> {
    serde_json::to_vec(map).map_err(|e| JwtWorkbenchError::SigningFailed {
        reason: e.to_string(),
    })
}

fn parse_json_object(text: &str, field: &str) -> Result<serde_json::Map<String, Value>, JwtWorkbenchError> {
    let value: Value =
        serde_json::from_str(text).map_err(|e| JwtWorkbenchError::InvalidJsonInput {
            field: field.to_string(),
            reason: e.to_string(),
        })?;

    match value {
        Value::Object(map) => Ok(map),
        _ => Err(JwtWorkbenchError::InvalidJsonInput {
            field: field.to_string(),
            reason: "expected a JSON object".to_string(),
        }),
    }
}
