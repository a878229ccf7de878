//! Token segment parsing.
//!
//! Handles splitting a raw token string into its three parts (header,
//! payload, signature), base64url-decoding the header and payload, and
//! parsing both as JSON objects. No cryptography happens here.

use std::fmt;

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde_json::{Map, Value};

use crate::error::JwtWorkbenchError;

/// A token header: `alg`, `typ` and any extra fields.
pub type Header = Map<String, Value>;

/// A token claim set.
pub type Claims = Map<String, Value>;

/// The decoded parts of a token.
///
/// Implements a custom `Debug` that redacts `claims` and `signature`
/// to prevent accidental leakage of sensitive claim data.
#[derive(Clone, PartialEq)]
pub struct DecodedToken {
    /// The parsed header (typically contains `alg` and `typ`).
    pub header: Header,
    /// The parsed claims.
    pub claims: Claims,
    /// `<header>.<payload>` exactly as received; the bytes the signature covers.
    pub signing_input: String,
    /// The raw base64url-encoded signature segment.
    pub signature: String,
}

impl DecodedToken {
    /// The `alg` value declared by the header, if it is a string.
    pub fn algorithm_name(&self) -> Option<&str> {
        self.header.get("alg").and_then(Value::as_str)
    }
}

impl fmt::Debug for DecodedToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DecodedToken")
            .field("header", &self.header)
            .field("claims", &"[REDACTED]")
            .field("signature", &"[REDACTED]")
            .finish()
    }
}

/// Decode a raw token string into its constituent parts.
///
/// # Errors
///
/// Returns an error if the token doesn't have exactly three parts,
/// if base64url decoding fails, if JSON parsing fails, or if the header
/// or payload is not a JSON object.
pub fn decode_segments(token: &str) -> Result<DecodedToken, JwtWorkbenchError> {
    let [header, payload, signature] = split_token(token)?;

    Ok(DecodedToken {
        header: decode_object(header, "header")?,
        claims: decode_object(payload, "payload")?,
        signing_input: format!("{header}.{payload}"),
        signature: signature.to_string(),
    })
}

/// Decode only the header of a three-part token.
///
/// Lets a caller show the header of a token whose payload is broken.
///
/// # Errors
///
/// Returns an error if the token doesn't have exactly three parts or the
/// header segment is not a base64url-encoded JSON object.
pub fn decode_header(token: &str) -> Result<Header, JwtWorkbenchError> {
    let [header, _, _] = split_token(token)?;
    decode_object(header, "header")
}

fn split_token(token: &str) -> Result<[&str; 3], JwtWorkbenchError> {
    let mut parts = token.split('.');
    match (parts.next(), parts.next(), parts.next(), parts.next()) {
        (Some(header), Some(payload), Some(signature), None) => Ok([header, payload, signature]),
        _ => Err(JwtWorkbenchError::InvalidTokenFormat),
    }
}

/// Base64url-encode a segment the way tokens carry it (no padding).
pub fn encode_segment(bytes: &[u8]) -> String {
    URL_SAFE_NO_PAD.encode(bytes)
}

/// Check that the signature segment is valid base64url.
pub(crate) fn check_signature_encoding(signature: &str) -> Result<(), JwtWorkbenchError> {
    URL_SAFE_NO_PAD
        .decode(signature)
        .map(|_| ())
        .map_err(|_| JwtWorkbenchError::Base64DecodeError {
            segment: "signature".to_string(),
        })
}

/// Base64url-decode a segment and parse it as a JSON object.
fn decode_object(encoded: &str, segment_name: &str) -> Result<Map<String, Value>, JwtWorkbenchError> {
    let bytes = URL_SAFE_NO_PAD
        .decode(encoded)
        .map_err(|_| JwtWorkbenchError::Base64DecodeError {
            segment: segment_name.to_string(),
        })?;

    let value: Value =
        serde_json::from_slice(&bytes).map_err(|e| JwtWorkbenchError::JsonParseError {
            segment: segment_name.to_string(),
            reason: e.to_string(),
        })?;

    match value {
        Value::Object(map) => Ok(map),
        _ => Err(JwtWorkbenchError::SegmentNotObject {
            segment: segment_name.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Header: {"alg":"HS256","typ":"JWT"}
    // Payload: {"sub":"1234567890","name":"Test User","iat":1516239022}
    const SAMPLE_TOKEN: &str = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9.\
                                eyJzdWIiOiIxMjM0NTY3ODkwIiwibmFtZSI6IlRlc3QgVXNlciIsImlhdCI6MTUxNjIzOTAyMn0.\
                                SflKxwRJSMeKKF2QT4fwpMeJf36POk6yJV_adQssw5c";

    #[test]
    fn test_decoded_token_debug_redacts_sensitive_fields() {
        let decoded = decode_segments(SAMPLE_TOKEN).unwrap();
        let debug_output = format!("{:?}", decoded);

        assert!(debug_output.contains("HS256"));
        assert!(debug_output.contains("[REDACTED]"));
        assert!(!debug_output.contains("1234567890"));
        assert!(!debug_output.contains("Test User"));
        assert!(!debug_output.contains("SflKxwRJSMeKKF2QT4fwpMeJf36POk6yJV_adQssw5c"));
    }

    #[test]
    fn test_decode_valid_hs256_token() {
        let decoded = decode_segments(SAMPLE_TOKEN).unwrap();

        assert_eq!(decoded.header["alg"], "HS256");
        assert_eq!(decoded.header["typ"], "JWT");
        assert_eq!(decoded.algorithm_name(), Some("HS256"));
        assert_eq!(decoded.claims["sub"], "1234567890");
        assert_eq!(decoded.claims["name"], "Test User");
        assert_eq!(decoded.claims["iat"], 1516239022);
        assert_eq!(
            decoded.signature,
            "SflKxwRJSMeKKF2QT4fwpMeJf36POk6yJV_adQssw5c"
        );
    }

    #[test]
    fn test_signing_input_keeps_original_segments() {
        let decoded = decode_segments(SAMPLE_TOKEN).unwrap();
        let (signing_input, _) = SAMPLE_TOKEN.rsplit_once('.').unwrap();
        assert_eq!(decoded.signing_input, signing_input);
    }

    #[test]
    fn test_decode_token_with_two_parts_fails() {
        let err = decode_segments("eyJhbGciOiJIUzI1NiJ9.eyJzdWIiOiIxMjM0In0").unwrap_err();
        assert!(matches!(err, JwtWorkbenchError::InvalidTokenFormat));
    }

    #[test]
    fn test_decode_token_with_one_part_fails() {
        let err = decode_segments("onlyonesegment").unwrap_err();
        assert!(matches!(err, JwtWorkbenchError::InvalidTokenFormat));
    }

    #[test]
    fn test_decode_token_with_five_parts_fails() {
        let err = decode_segments("not.a.token.four.parts").unwrap_err();
        assert!(matches!(err, JwtWorkbenchError::InvalidTokenFormat));
    }

    #[test]
    fn test_decode_token_empty_string_fails() {
        let err = decode_segments("").unwrap_err();
        assert!(matches!(err, JwtWorkbenchError::InvalidTokenFormat));
    }

    #[test]
    fn test_decode_token_invalid_base64_header_fails() {
        let err = decode_segments("!!!invalid!!!.eyJzdWIiOiIxMjM0In0.sig").unwrap_err();
        assert!(matches!(
            err,
            JwtWorkbenchError::Base64DecodeError { segment } if segment == "header"
        ));
    }

    #[test]
    fn test_decode_token_invalid_base64_payload_fails() {
        let err = decode_segments("eyJhbGciOiJIUzI1NiJ9.!!!invalid!!!.sig").unwrap_err();
        assert!(matches!(
            err,
            JwtWorkbenchError::Base64DecodeError { segment } if segment == "payload"
        ));
    }

    #[test]
    fn test_decode_token_invalid_json_header_fails() {
        // base64url("not json") = "bm90IGpzb24"
        let err = decode_segments("bm90IGpzb24.eyJzdWIiOiIxMjM0In0.sig").unwrap_err();
        assert!(matches!(
            err,
            JwtWorkbenchError::JsonParseError { segment, .. } if segment == "header"
        ));
    }

    #[test]
    fn test_decode_token_array_payload_fails() {
        // base64url("[1,2]") = "WzEsMl0"
        let err = decode_segments("eyJhbGciOiJIUzI1NiJ9.WzEsMl0.sig").unwrap_err();
        assert!(matches!(
            err,
            JwtWorkbenchError::SegmentNotObject { segment } if segment == "payload"
        ));
    }

    #[test]
    fn test_decode_token_with_empty_payload_object() {
        // {"alg":"none"} . {} . <empty signature>
        let decoded = decode_segments("eyJhbGciOiJub25lIn0.e30.").unwrap();
        assert_eq!(decoded.header["alg"], "none");
        assert!(decoded.claims.is_empty());
        assert_eq!(decoded.signature, "");
    }

    #[test]
    fn test_algorithm_name_ignores_non_string_alg() {
        // {"alg":5}
        let decoded = decode_segments("eyJhbGciOjV9.e30.").unwrap();
        assert_eq!(decoded.algorithm_name(), None);
    }

    #[test]
    fn test_check_signature_encoding_rejects_invalid_base64() {
        let err = check_signature_encoding("***").unwrap_err();
        assert!(matches!(
            err,
            JwtWorkbenchError::Base64DecodeError { segment } if segment == "signature"
        ));
        assert!(check_signature_encoding("SflKxwRJSMeKKF2QT4fwpMeJf36POk6yJV_adQssw5c").is_ok());
    }

    #[test]
    fn test_encode_segment_has_no_padding() {
        assert_eq!(encode_segment(b"{}"), "e30");
    }

    #[test]
    fn test_decode_header_survives_broken_payload() {
        let header = decode_header("eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9.!!!.c2ln").unwrap();
        assert_eq!(header["alg"], "HS256");
        assert_eq!(header["typ"], "JWT");
    }

    #[test]
    fn test_decode_header_requires_three_parts() {
        let err = decode_header("eyJhbGciOiJIUzI1NiJ9.e30").unwrap_err();
        assert!(matches!(err, JwtWorkbenchError::InvalidTokenFormat));
        assert!(decode_header("a.b.c.d").is_err());
    }
}
