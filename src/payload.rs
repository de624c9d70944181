// src/payload.rs
//! Serialization of (IV, ciphertext) pairs
//!
//! Two wire representations exist:
//! - text: `base64(iv) + "$" + base64(ciphertext)`, no embedded newlines
//! - binary: the raw IV bytes followed by the raw ciphertext bytes
//!
//! Round-trip law: `deserialize(serialize(iv, ct)) == (iv, ct)` exactly,
//! for both formats. A payload produced in one format never decodes under
//! the other; the mismatch is a `MalformedPayload` error.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::consts::{BLOCK_LEN, IV_LEN, PAYLOAD_DELIMITER, PLAIN_CHUNK_LEN};
use crate::error::{CoreError, Result};

/// Wire format for serialized payloads
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[non_exhaustive]
pub enum Format {
    #[default]
    Base64,
    Binary,
}

/// A serialized (IV, ciphertext) pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Payload {
    /// Text encoding: `base64(iv)$base64(ciphertext)`
    Base64(String),
    /// Raw byte pair, no further encoding
    Binary { iv: Vec<u8>, ciphertext: Vec<u8> },
}

impl Payload {
    /// Flatten the payload into the bytes written to a destination stream
    pub fn into_wire_bytes(self) -> Vec<u8> {
        match self {
            Payload::Base64(text) => text.into_bytes(),
            Payload::Binary { mut iv, ciphertext } => {
                iv.extend_from_slice(&ciphertext);
                iv
            }
        }
    }
}

/// Serialize an (IV, ciphertext) pair in the given format
pub fn serialize(format: Format, iv: &[u8], ciphertext: &[u8]) -> Payload {
    match format {
        Format::Base64 => {
            let mut text = STANDARD.encode(iv);
            text.push(PAYLOAD_DELIMITER);
            text.push_str(&STANDARD.encode(ciphertext));
            Payload::Base64(text)
        }
        Format::Binary => Payload::Binary {
            iv: iv.to_vec(),
            ciphertext: ciphertext.to_vec(),
        },
    }
}

/// Recover the (IV, ciphertext) pair from a payload
///
/// The payload variant must match `format`; text payloads must contain
/// exactly one delimiter and two decodable base64 segments, and the
/// recovered IV must be 16 bytes.
pub fn deserialize(format: Format, payload: &Payload) -> Result<(Vec<u8>, Vec<u8>)> {
    match (format, payload) {
        (Format::Base64, Payload::Base64(text)) => {
            let (iv_part, ct_part) = text
                .split_once(PAYLOAD_DELIMITER)
                .ok_or(CoreError::MalformedPayload("missing delimiter"))?;
            if ct_part.contains(PAYLOAD_DELIMITER) {
                return Err(CoreError::MalformedPayload("more than one delimiter"));
            }
            let iv = STANDARD
                .decode(iv_part)
                .map_err(|_| CoreError::MalformedPayload("IV segment is not valid base64"))?;
            let ciphertext = STANDARD.decode(ct_part).map_err(|_| {
                CoreError::MalformedPayload("ciphertext segment is not valid base64")
            })?;
            check_iv_len(&iv)?;
            Ok((iv, ciphertext))
        }
        (Format::Binary, Payload::Binary { iv, ciphertext }) => {
            check_iv_len(iv)?;
            Ok((iv.clone(), ciphertext.clone()))
        }
        (Format::Base64, Payload::Binary { .. }) => Err(CoreError::MalformedPayload(
            "binary payload given to a base64-format engine",
        )),
        (Format::Binary, Payload::Base64(_)) => Err(CoreError::MalformedPayload(
            "base64 payload given to a binary-format engine",
        )),
    }
}

/// Parse the bytes of one streamed chunk back into a payload
pub(crate) fn payload_from_wire(format: Format, bytes: &[u8]) -> Result<Payload> {
    match format {
        Format::Base64 => {
            let text = std::str::from_utf8(bytes)
                .map_err(|_| CoreError::MalformedPayload("payload is not valid UTF-8"))?;
            Ok(Payload::Base64(text.to_owned()))
        }
        Format::Binary => {
            if bytes.len() < IV_LEN {
                return Err(CoreError::MalformedPayload("payload shorter than one IV"));
            }
            Ok(Payload::Binary {
                iv: bytes[..IV_LEN].to_vec(),
                ciphertext: bytes[IV_LEN..].to_vec(),
            })
        }
    }
}

fn check_iv_len(iv: &[u8]) -> Result<()> {
    if iv.len() != IV_LEN {
        return Err(CoreError::MalformedPayload("IV must be exactly 16 bytes"));
    }
    Ok(())
}

/// Encoded length of `n` bytes in base64 (with `=` padding)
fn base64_len(n: usize) -> usize {
    n.div_ceil(3) * 4
}

/// Bytes one full plaintext chunk occupies on the wire after encryption
///
/// This is the read size the decrypt side of file streaming must use: every
/// full 2048-byte plaintext chunk serializes to exactly this many bytes, so
/// reading in these units recovers payload boundaries. Derived here from the
/// chunk size, the PKCS#7 expansion, and the format's own expansion rather
/// than kept as a hand-maintained constant.
pub fn encrypted_chunk_len(format: Format, padding: bool) -> usize {
    // PLAIN_CHUNK_LEN is block-aligned, so PKCS#7 always adds a full block
    let ct_len = if padding {
        PLAIN_CHUNK_LEN + BLOCK_LEN
    } else {
        PLAIN_CHUNK_LEN
    };
    match format {
        Format::Binary => IV_LEN + ct_len,
        Format::Base64 => base64_len(IV_LEN) + PAYLOAD_DELIMITER.len_utf8() + base64_len(ct_len),
    }
}
