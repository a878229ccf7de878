//! Key material resolution.
//!
//! Interprets user-supplied key material either as a PEM-encoded public
//! key or, failing that, as the raw bytes of a shared HMAC secret.

use std::fmt;

use jsonwebtoken::DecodingKey;
use log::debug;

use crate::error::JwtWorkbenchError;

/// The asymmetric key family a PEM public key belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyFamily {
    /// Elliptic-curve (ECDSA) public key.
    Ec,
    /// RSA public key.
    Rsa,
    /// Edwards-curve (EdDSA) public key.
    Ed,
}

impl fmt::Display for KeyFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ec => f.write_str("EC"),
            Self::Rsa => f.write_str("RSA"),
            Self::Ed => f.write_str("EdDSA"),
        }
    }
}

/// A public key read from PEM key material.
#[derive(Clone)]
pub struct PublicKey {
    /// Which family the key belongs to.
    pub family: KeyFamily,
    key: DecodingKey,
}

impl PublicKey {
    /// The key in the form the verification primitive consumes.
    pub fn decoding_key(&self) -> &DecodingKey {
        &self.key
    }
}

impl fmt::Debug for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PublicKey")
            .field("family", &self.family)
            .finish_non_exhaustive()
    }
}

/// The key a token is verified against.
#[derive(Clone)]
pub enum VerificationKey {
    /// A PEM public key.
    Public(PublicKey),
    /// Raw bytes of the key material, used as an HMAC secret.
    Secret(DecodingKey),
}

impl VerificationKey {
    /// Resolve key material, falling back to a raw secret.
    ///
    /// Never fails: anything that is not a PEM public key is used as
    /// the shared secret verbatim, including the empty string.
    pub fn from_key_material(material: &str) -> Self {
        match resolve_public_key(material) {
            Ok(public_key) => {
                debug!("key material resolved as {} public key", public_key.family);
                Self::Public(public_key)
            }
            Err(_) => {
                debug!("key material is not a public key, using it as a raw secret");
                Self::Secret(DecodingKey::from_secret(material.as_bytes()))
            }
        }
    }

    /// The key in the form the verification primitive consumes.
    pub fn decoding_key(&self) -> &DecodingKey {
        match self {
            Self::Public(public_key) => public_key.decoding_key(),
            Self::Secret(key) => key,
        }
    }
}

impl fmt::Debug for VerificationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Public(public_key) => f.debug_tuple("Public").field(public_key).finish(),
            Self::Secret(_) => f.debug_tuple("Secret").field(&"[REDACTED]").finish(),
        }
    }
}

/// Try to read a PEM-encoded public key.
///
/// Accepts SubjectPublicKeyInfo (`PUBLIC KEY`) blocks for EC, RSA and
/// EdDSA keys, and PKCS#1 `RSA PUBLIC KEY` blocks.
///
/// # Errors
///
/// Returns [`JwtWorkbenchError::KeyMaterial`] if no PEM block is found
/// or the block does not hold a public key (private keys included).
pub fn resolve_public_key(material: &str) -> Result<PublicKey, JwtWorkbenchError> {
    if !material.contains("-----BEGIN") {
        return Err(JwtWorkbenchError::KeyMaterial {
            reason: "no PEM block found".to_string(),
        });
    }
    // PKCS#1 RSA private keys would otherwise parse as RSA key material.
    if !material.contains("PUBLIC KEY-----") {
        return Err(JwtWorkbenchError::KeyMaterial {
            reason: "PEM block is not a public key".to_string(),
        });
    }

    let pem = material.trim().as_bytes();
    let candidates: [(KeyFamily, fn(&[u8]) -> jsonwebtoken::errors::Result<DecodingKey>); 3] = [
        (KeyFamily::Ec, DecodingKey::from_ec_pem),
        (KeyFamily::Rsa, DecodingKey::from_rsa_pem),
        (KeyFamily::Ed, DecodingKey::from_ed_pem),
    ];

    candidates
        .into_iter()
        .find_map(|(family, parse)| parse(pem).ok().map(|key| PublicKey { family, key }))
        .ok_or_else(|| JwtWorkbenchError::KeyMaterial {
            reason: "PEM block does not contain a supported public key".to_string(),
        })
}
