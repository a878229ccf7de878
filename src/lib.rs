//! jwt-workbench: decode, verify, and sign JSON Web Tokens offline.
//!
//! The [`core`] module holds the engines a front end drives on every input
//! change: [`core::decode`] parses a token and verifies it against a shared
//! secret or PEM public key, and [`core::encode`] signs a header and claim
//! set into a fresh token. Both return result objects instead of errors so
//! that partially decodable input can still be displayed.

#![forbid(unsafe_code)]

pub mod core;
pub mod error;

pub use error::{DecodeErrorKind, JwtWorkbenchError};
