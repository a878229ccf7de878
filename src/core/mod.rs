//! Core business logic for token operations.
//!
//! This module contains the decode/verify and encode/sign engines,
//! separated from CLI concerns. Everything here is pure and synchronous:
//! each call takes its inputs by reference and returns a self-contained
//! result, so repeated calls with the same inputs give the same output.

pub mod encoder;
pub mod key_material;
pub mod segments;
pub mod verifier;

use jsonwebtoken::errors::ErrorKind;

pub use encoder::{EncodeResult, encode, encode_json};
pub use key_material::{KeyFamily, PublicKey, VerificationKey, resolve_public_key};
pub use segments::{Claims, DecodedToken, Header, decode_header, decode_segments};
pub use verifier::{DecodeResult, decode};

/// Map a `jsonwebtoken` error kind to a short, user-facing reason.
///
/// Library error text is never forwarded verbatim; key parsing errors in
/// particular can echo fragments of the key.
pub(crate) fn sanitize_jwt_error(kind: &ErrorKind) -> String {
    match kind {
        ErrorKind::InvalidSignature => "signature does not match the provided key",
        ErrorKind::InvalidKeyFormat => "key does not match the algorithm family",
        ErrorKind::InvalidAlgorithm => "algorithm is not allowed for this key",
        ErrorKind::InvalidRsaKey(_) => "invalid RSA key",
        ErrorKind::InvalidEcdsaKey => "invalid ECDSA key",
        ErrorKind::InvalidEddsaKey => "invalid EdDSA key",
        ErrorKind::InvalidToken => "token is malformed",
        ErrorKind::Base64(_) => "invalid base64url encoding",
        ErrorKind::Json(_) => "invalid JSON",
        _ => "token could not be processed",
    }
    .to_string()
}
