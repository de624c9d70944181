// src/lib.rs
//! aes-kit — ergonomic AES-256-CBC encryption for byte buffers and files
//!
//! Features:
//! - one-call encrypt/decrypt of in-memory buffers
//! - bounded-memory file streaming in fixed-size chunks
//! - random key/IV generation from the OS secure generator
//! - text (`base64$base64`) and raw binary payload formats
//!
//! No integrity layer is provided: ciphertext is not tamper-evident, and a
//! failed decrypt cannot distinguish a wrong key from corrupted data.
//!
//! The free functions below build one [`CipherEngine`] per call and share
//! no state. Callers doing many operations under one key should construct
//! a [`CipherEngine`] directly and reuse it.

pub mod aliases;
pub mod consts;
pub mod engine;
pub mod error;
pub mod file_ops;
pub mod iv_ops;
pub mod key_ops;
pub mod payload;
pub mod rng;

// Re-export everything users need at the crate root
pub use aliases::{Key32, RevealSecret, ToHex};
pub use engine::{CipherEngine, Options};
pub use error::{CoreError, Result};
pub use file_ops::{decrypt_stream, encrypt_stream};
pub use iv_ops::{generate_iv, IvRepr};
pub use key_ops::{generate_key, generate_key_bytes, key_representations, parse_key, Key, KeyFormat, KeyRepr};
pub use payload::{Format, Payload};

/// Encrypt a plaintext buffer with a 64-hex-character key
pub fn encrypt(plaintext: &[u8], key: &str, options: Options) -> Result<Payload> {
    let engine = CipherEngine::new(key_ops::parse_key(key)?, options)?;
    engine.encrypt(plaintext)
}

/// Decrypt a payload with a 64-hex-character key
pub fn decrypt(payload: &Payload, key: &str, options: Options) -> Result<Vec<u8>> {
    let engine = CipherEngine::new(key_ops::parse_key(key)?, options)?;
    engine.decrypt(payload)
}

/// Encrypt a file on disk with a 64-hex-character key
pub fn encrypt_file<P: AsRef<std::path::Path>>(
    input_path: P,
    output_path: P,
    key: &str,
    options: Options,
) -> Result<()> {
    let engine = CipherEngine::new(key_ops::parse_key(key)?, options)?;
    file_ops::encrypt_file(input_path, output_path, &engine)
}

/// Decrypt a file on disk with a 64-hex-character key
pub fn decrypt_file<P: AsRef<std::path::Path>>(
    input_path: P,
    output_path: P,
    key: &str,
    options: Options,
) -> Result<()> {
    let engine = CipherEngine::new(key_ops::parse_key(key)?, options)?;
    file_ops::decrypt_file(input_path, output_path, &engine)
}
