//! Token decoding and signature verification.
//!
//! Parses a token, resolves the verification key from the supplied key
//! material, checks the signature with the algorithm declared in the
//! token's own header, and classifies the outcome into a [`DecodeResult`].
//!
//! Only the signature is checked. Registered claims such as `exp` and
//! `nbf` are displayed by the caller but never rejected here.

use std::str::FromStr;

use jsonwebtoken::Algorithm;
use jsonwebtoken::errors::ErrorKind;
use log::debug;

use super::key_material::VerificationKey;
use super::sanitize_jwt_error;
use super::segments::{self, DecodedToken, Header};
use crate::error::{DecodeErrorKind, JwtWorkbenchError};

/// The outcome of one decode attempt.
///
/// `signature_valid` can only be true when `token_valid` is true.
#[derive(Debug)]
pub struct DecodeResult {
    token: Option<DecodedToken>,
    /// Header recovered on its own when the full token did not parse.
    partial_header: Option<Header>,
    failure: Option<JwtWorkbenchError>,
    token_valid: bool,
    signature_valid: bool,
}

impl DecodeResult {
    fn verified(token: DecodedToken) -> Self {
        Self {
            token: Some(token),
            partial_header: None,
            failure: None,
            token_valid: true,
            signature_valid: true,
        }
    }

    fn failed(token: Option<DecodedToken>, err: JwtWorkbenchError) -> Self {
        let kind = err.decode_error_kind();
        debug!("token classified as {kind:?}");

        // An unexpected failure leaves both flags set; the error itself
        // is what gets surfaced.
        let (token_valid, signature_valid) = match kind {
            DecodeErrorKind::MalformedToken => (false, false),
            DecodeErrorKind::InvalidSignature => (true, false),
            DecodeErrorKind::Unexpected => (true, true),
        };

        Self {
            token,
            partial_header: None,
            failure: Some(err),
            token_valid,
            signature_valid,
        }
    }

    fn unparsed(partial_header: Option<Header>, err: JwtWorkbenchError) -> Self {
        Self {
            partial_header,
            ..Self::failed(None, err)
        }
    }

    /// The parsed token, when header and claims could be decoded.
    pub fn token(&self) -> Option<&DecodedToken> {
        self.token.as_ref()
    }

    /// The parsed header, including one recovered from a token whose
    /// payload could not be decoded.
    pub fn header(&self) -> Option<&Header> {
        self.token
            .as_ref()
            .map(|token| &token.header)
            .or(self.partial_header.as_ref())
    }

    /// The error recorded for an unexpected failure.
    ///
    /// Malformed tokens and signature mismatches are reported through the
    /// validity flags instead; see [`DecodeResult::failure`] for those.
    pub fn error(&self) -> Option<&JwtWorkbenchError> {
        self.failure
            .as_ref()
            .filter(|err| err.decode_error_kind() == DecodeErrorKind::Unexpected)
    }

    /// Whatever stopped the token from verifying, of any kind.
    pub fn failure(&self) -> Option<&JwtWorkbenchError> {
        self.failure.as_ref()
    }

    /// How the attempt failed, or `None` when it succeeded.
    pub fn kind(&self) -> Option<DecodeErrorKind> {
        self.failure.as_ref().map(JwtWorkbenchError::decode_error_kind)
    }

    /// Whether the token is structurally well formed.
    pub fn is_token_valid(&self) -> bool {
        self.token_valid
    }

    /// Whether the signature verified under the supplied key.
    pub fn is_signature_valid(&self) -> bool {
        self.signature_valid
    }

    /// True when no unexpected error occurred and both flags hold.
    pub fn is_valid(&self) -> bool {
        self.error().is_none() && self.token_valid && self.signature_valid
    }

    /// The header as two-space indented JSON, or `""` if nothing was parsed.
    pub fn rendered_header(&self) -> String {
        self.header()
            .and_then(|header| serde_json::to_string_pretty(header).ok())
            .unwrap_or_default()
    }

    /// The claims as two-space indented JSON, or `""` if nothing was parsed.
    pub fn rendered_claims(&self) -> String {
        self.token
            .as_ref()
            .and_then(|token| serde_json::to_string_pretty(&token.claims).ok())
            .unwrap_or_default()
    }

    /// One-line status text for display next to the token.
    pub fn status_message(&self) -> String {
        let Some(err) = &self.failure else {
            return "Signature Verified".to_string();
        };
        match err.decode_error_kind() {
            DecodeErrorKind::MalformedToken => "Invalid Token".to_string(),
            DecodeErrorKind::InvalidSignature => "Invalid Signature".to_string(),
            DecodeErrorKind::Unexpected => err.to_string(),
        }
    }
}

/// Decode a token and verify it against the supplied key material.
///
/// Key material that is a PEM public key is used as such; anything else
/// is treated as the raw bytes of an HMAC secret. Never fails: every
/// outcome is captured in the returned [`DecodeResult`].
pub fn decode(token: &str, key_material: &str) -> DecodeResult {
    let key = VerificationKey::from_key_material(key_material);

    let decoded = match segments::decode_segments(token) {
        Ok(decoded) => decoded,
        Err(err) => {
            return DecodeResult::unparsed(segments::decode_header(token).ok(), err);
        }
    };

    match verify_signature(&decoded, &key) {
        Ok(()) => DecodeResult::verified(decoded),
        Err(err) => DecodeResult::failed(Some(decoded), err),
    }
}

/// Verify a decoded token's signature with the algorithm from its header.
///
/// # Errors
///
/// Returns [`JwtWorkbenchError::SignatureInvalid`] on a mismatch, a
/// structural error if the signature segment is not base64url, and an
/// unexpected-kind error for a missing or unsupported algorithm or a key
/// that does not fit the algorithm family.
pub fn verify_signature(
    token: &DecodedToken,
    key: &VerificationKey,
) -> Result<(), JwtWorkbenchError> {
    let algorithm = declared_algorithm(token)?;
    segments::check_signature_encoding(&token.signature)?;
    debug!("verifying signature with {algorithm:?}");

    match jsonwebtoken::crypto::verify(
        &token.signature,
        token.signing_input.as_bytes(),
        key.decoding_key(),
        algorithm,
    ) {
        Ok(true) => Ok(()),
        Ok(false) => Err(JwtWorkbenchError::SignatureInvalid {
            reason: "signature does not match the provided key".to_string(),
        }),
        Err(e) => Err(match e.kind() {
            ErrorKind::InvalidSignature => JwtWorkbenchError::SignatureInvalid {
                reason: sanitize_jwt_error(e.kind()),
            },
            ErrorKind::Base64(_) => JwtWorkbenchError::Base64DecodeError {
                segment: "signature".to_string(),
            },
            kind => JwtWorkbenchError::VerificationFailed {
                reason: sanitize_jwt_error(kind),
            },
        }),
    }
}

/// Resolve the `alg` header into a supported algorithm.
///
/// `none` is rejected along with every other unknown name.
fn declared_algorithm(token: &DecodedToken) -> Result<Algorithm, JwtWorkbenchError> {
    let name = token
        .algorithm_name()
        .ok_or(JwtWorkbenchError::MissingAlgorithm)?;

    Algorithm::from_str(name).map_err(|_| JwtWorkbenchError::UnsupportedAlgorithm {
        algorithm: name.to_string(),
    })
}
