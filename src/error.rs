//! Domain error types for jwt-workbench.
//!
//! All business-logic errors are defined here using `thiserror`.
//! These errors are converted to user-friendly messages at the CLI boundary.

use thiserror::Error;

/// How a failed decode attempt is classified.
///
/// Classification is derived from the error variant, never from the
/// rendered message text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeErrorKind {
    /// The token is not three base64url segments of JSON objects.
    MalformedToken,
    /// The token is well formed but its signature does not verify.
    InvalidSignature,
    /// Any other failure (unsupported algorithm, key mismatch, ...).
    Unexpected,
}

/// Errors that can occur while decoding, verifying, or signing tokens.
#[derive(Debug, Error)]
pub enum JwtWorkbenchError {
    /// The provided token does not have the expected three-part structure.
    #[error("invalid token format: expected 'header.payload.signature' structure")]
    InvalidTokenFormat,

    /// Failed to decode a base64url-encoded token segment.
    #[error("failed to decode {segment}: invalid base64url encoding")]
    Base64DecodeError {
        /// Which segment failed to decode (e.g., "header", "signature").
        segment: String,
    },

    /// Failed to parse decoded JSON content.
    #[error("failed to parse {segment} as JSON: {reason}")]
    JsonParseError {
        /// Which segment failed to parse (e.g., "header", "payload").
        segment: String,
        /// Description of the parsing failure.
        reason: String,
    },

    /// A decoded segment is valid JSON but not a JSON object.
    #[error("{segment} must be a JSON object")]
    SegmentNotObject {
        /// Which segment had the wrong shape.
        segment: String,
    },

    /// The token header carries no `alg` string.
    #[error("token is unverifiable: signing algorithm (alg) is unspecified")]
    MissingAlgorithm,

    /// The specified algorithm is not supported.
    #[error("unsupported algorithm: {algorithm}")]
    UnsupportedAlgorithm {
        /// The algorithm that was encountered.
        algorithm: String,
    },

    /// The signature does not match the verification key.
    #[error("signature validation failed: {reason}")]
    SignatureInvalid {
        /// Description of why validation failed.
        reason: String,
    },

    /// Verification could not be carried out at all.
    #[error("verification error: {reason}")]
    VerificationFailed {
        /// Description of the failure.
        reason: String,
    },

    /// Key material is not a recognized public key.
    #[error("key material is not a recognized public key: {reason}")]
    KeyMaterial {
        /// Why the key could not be read.
        reason: String,
    },

    /// The signing primitive rejected the key or algorithm.
    #[error("failed to sign token: {reason}")]
    SigningFailed {
        /// Description of the signing failure.
        reason: String,
    },

    /// User-supplied header or payload JSON is invalid.
    #[error("invalid {field} JSON: {reason}")]
    InvalidJsonInput {
        /// Which input field was invalid ("header" or "payload").
        field: String,
        /// Description of the parsing failure.
        reason: String,
    },

    /// Failed to read the provided key file.
    #[error("failed to read key file '{path}': {reason}")]
    KeyFileError {
        /// Path to the key file.
        path: String,
        /// Description of the read failure.
        reason: String,
    },

    /// Failed to read input from stdin.
    #[error("failed to read from stdin: {reason}")]
    StdinReadError {
        /// Description of the read failure.
        reason: String,
    },

    /// No token was provided via any input method.
    #[error("no token provided: pass a token as an argument, via --token-env, or through stdin")]
    NoTokenProvided,

    /// The specified environment variable is not set.
    #[error("environment variable '{name}' is not set")]
    EnvVarNotFound {
        /// Name of the missing environment variable.
        name: String,
    },

    /// The environment variable name cannot be looked up.
    #[error("invalid environment variable name '{name}'")]
    InvalidEnvVarName {
        /// The rejected name.
        name: String,
    },
}

impl JwtWorkbenchError {
    /// Classify this error as a decode outcome.
    pub fn decode_error_kind(&self) -> DecodeErrorKind {
        match self {
            Self::InvalidTokenFormat
            | Self::Base64DecodeError { .. }
            | Self::JsonParseError { .. }
            | Self::SegmentNotObject { .. } => DecodeErrorKind::MalformedToken,
            Self::SignatureInvalid { .. } => DecodeErrorKind::InvalidSignature,
            _ => DecodeErrorKind::Unexpected,
        }
    }
}
