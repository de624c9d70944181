// src/key_ops.rs
//! Key generation, validation, and representation utilities
//!
//! Keys are 256-bit secrets. The canonical external form is a 64-character
//! hexadecimal string; validation happens eagerly at construction so caller
//! mistakes surface before any cipher work is attempted.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::aliases::{Key32, RevealSecret, ToHex};
use crate::consts::KEY_LEN;
use crate::error::{CoreError, Result};
use crate::rng;

pub type Key = Key32;

/// Output encoding for [`generate_key`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[non_exhaustive]
pub enum KeyFormat {
    #[default]
    Hex,
    Base64,
}

/// Generate a new random 256-bit key
pub fn generate_key_bytes() -> Result<Key> {
    Ok(Key::new(rng::random_array::<KEY_LEN>()?))
}

/// Parse a key from its 64-character hexadecimal form
///
/// Rejects anything that is not exactly 64 ASCII hex digits with
/// `InvalidKeyFormat`. Case-insensitive.
pub fn parse_key(text: &str) -> Result<Key> {
    if text.len() != 2 * KEY_LEN || !text.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(CoreError::InvalidKeyFormat);
    }
    let bytes = hex::decode(text).map_err(|_| CoreError::InvalidKeyFormat)?;
    let raw: [u8; KEY_LEN] = bytes.try_into().map_err(|_| CoreError::InvalidKeyFormat)?;
    Ok(Key::new(raw))
}

/// Generate a random key of `bits` length, encoded for transport
///
/// `bits` must be a positive multiple of 8. Note that only 256-bit keys are
/// accepted back by the cipher engine; other lengths exist for callers that
/// need generic random key material.
pub fn generate_key(bits: usize, format: KeyFormat) -> Result<String> {
    if bits == 0 || bits % 8 != 0 {
        return Err(CoreError::InvalidKeyFormat);
    }
    let bytes = rng::random_bytes(bits / 8)?;
    Ok(match format {
        KeyFormat::Hex => hex::encode(&bytes),
        KeyFormat::Base64 => STANDARD.encode(&bytes),
    })
}

/// Multiple string representations of a key for export/display
#[derive(Debug, Clone)]
pub struct KeyRepr {
    pub hex: String,
    pub base64: String,
}

pub fn key_representations(key: &Key) -> KeyRepr {
    KeyRepr {
        hex: key.expose_secret().to_hex(),
        base64: STANDARD.encode(key.expose_secret()),
    }
}
