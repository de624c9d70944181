// src/iv_ops.rs
//! Initialization vector generation and representation
//!
//! IVs are 128-bit, not secret, and must be unique per encryption under the
//! same key (uniqueness is the caller's responsibility when an override is
//! supplied). The IV is always embedded alongside the ciphertext in the
//! serialized payload, so the decrypting party never handles it separately.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::consts::IV_LEN;
use crate::error::{CoreError, Result};
use crate::payload::Format;
use crate::rng;

/// A precomputed IV in one of the wire encodings
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum IvRepr {
    /// Base64 encoding of the 16 raw IV bytes
    Base64(String),
    /// The 16 raw IV bytes
    Raw(Vec<u8>),
}

/// Generate a fresh random IV as raw bytes
pub fn generate_iv_bytes() -> Result<[u8; IV_LEN]> {
    rng::random_array::<IV_LEN>()
}

/// Generate a fresh random IV, encoded to match `format`
pub fn generate_iv(format: Format) -> Result<IvRepr> {
    let iv = generate_iv_bytes()?;
    Ok(match format {
        Format::Base64 => IvRepr::Base64(STANDARD.encode(iv)),
        Format::Binary => IvRepr::Raw(iv.to_vec()),
    })
}

/// Decode a caller-supplied IV override into raw bytes
pub(crate) fn resolve_iv(repr: &IvRepr) -> Result<[u8; IV_LEN]> {
    let bytes = match repr {
        IvRepr::Base64(text) => STANDARD
            .decode(text)
            .map_err(|_| CoreError::MalformedPayload("IV is not valid base64"))?,
        IvRepr::Raw(bytes) => bytes.clone(),
    };
    bytes
        .try_into()
        .map_err(|_| CoreError::MalformedPayload("IV must be exactly 16 bytes"))
}
