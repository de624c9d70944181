// src/error.rs
//! Public error type for the entire crate

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid key: expected exactly 64 hexadecimal characters")]
    InvalidKeyFormat,

    #[error("input length must be a multiple of the 16-byte block size")]
    InvalidBlockLength,

    #[error("malformed payload: {0}")]
    MalformedPayload(&'static str),

    /// Padding check failed during decryption. Wrong key, wrong IV, and
    /// corrupted ciphertext all land here — no integrity tag is carried,
    /// so they cannot be told apart.
    #[error("decryption failed: bad padding")]
    BadPadding,

    #[error("unsupported cipher: {0}")]
    UnsupportedCipher(String),

    /// The OS secure random generator failed. Fatal — there is no fallback.
    #[error("system random source unavailable")]
    RandomSourceUnavailable,
}

pub type Result<T> = std::result::Result<T, CoreError>;
