// src/consts.rs
//! Shared constants — cipher parameters and wire-format defaults

/// Key length in bytes for AES-256
pub const KEY_LEN: usize = 32;

/// Initialization vector length in bytes (one AES block)
pub const IV_LEN: usize = 16;

/// AES block length in bytes
pub const BLOCK_LEN: usize = 16;

/// Delimiter between the base64 IV and base64 ciphertext segments
// '$' is not in the base64 alphabet, so splitting on it is unambiguous
pub const PAYLOAD_DELIMITER: char = '$';

/// Plaintext bytes consumed per chunk when streaming files
pub const PLAIN_CHUNK_LEN: usize = 2048;

/// The single cipher identifier supported by this build
pub const DEFAULT_CIPHER: &str = "AES-256-CBC";
