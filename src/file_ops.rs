// src/file_ops.rs
//! File-level encryption/decryption with bounded memory
//!
//! Drives one [`CipherEngine`] across fixed-size chunks so arbitrarily
//! large files are transformed while holding at most one chunk in memory.
//! The encrypt side consumes `PLAIN_CHUNK_LEN` plaintext bytes per payload;
//! the decrypt side reads back in units of the engine's
//! `encrypted_chunk_len`, which is exactly the wire size of one full
//! encrypted chunk. Reading in any other unit would split payloads across
//! reads and corrupt decoding.

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use crate::consts::PLAIN_CHUNK_LEN;
use crate::engine::CipherEngine;
use crate::error::Result;
use crate::payload;

/// Encrypt everything readable from `reader`, chunk by chunk, into `writer`
///
/// Each chunk is encrypted independently with a freshly resolved IV (unless
/// the engine carries a fixed override) and its serialized payload is
/// written consecutively. An empty source produces an empty destination.
pub fn encrypt_stream<R: Read, W: Write>(
    mut reader: R,
    mut writer: W,
    engine: &CipherEngine,
) -> Result<()> {
    let mut buf = [0u8; PLAIN_CHUNK_LEN];
    loop {
        let n = read_fill(&mut reader, &mut buf)?;
        if n == 0 {
            break;
        }
        let payload = engine.encrypt(&buf[..n])?;
        writer.write_all(&payload.into_wire_bytes())?;
    }
    writer.flush()?;
    Ok(())
}

/// Decrypt everything readable from `reader`, chunk by chunk, into `writer`
pub fn decrypt_stream<R: Read, W: Write>(
    mut reader: R,
    mut writer: W,
    engine: &CipherEngine,
) -> Result<()> {
    let mut buf = vec![0u8; engine.encrypted_chunk_len()];
    loop {
        let n = read_fill(&mut reader, &mut buf)?;
        if n == 0 {
            break;
        }
        let payload = payload::payload_from_wire(engine.format(), &buf[..n])?;
        let plaintext = engine.decrypt(&payload)?;
        writer.write_all(&plaintext)?;
    }
    writer.flush()?;
    Ok(())
}

/// Encrypt a file on disk
///
/// On failure, bytes already written to `output_path` stay in place; there
/// is no temp-file/rename protection.
pub fn encrypt_file<P: AsRef<Path>>(
    input_path: P,
    output_path: P,
    engine: &CipherEngine,
) -> Result<()> {
    let reader = BufReader::new(File::open(input_path.as_ref())?);
    let writer = BufWriter::new(File::create(output_path.as_ref())?);
    encrypt_stream(reader, writer, engine)
}

/// Decrypt a file on disk
pub fn decrypt_file<P: AsRef<Path>>(
    input_path: P,
    output_path: P,
    engine: &CipherEngine,
) -> Result<()> {
    let reader = BufReader::new(File::open(input_path.as_ref())?);
    let writer = BufWriter::new(File::create(output_path.as_ref())?);
    decrypt_stream(reader, writer, engine)
}

/// Read until `buf` is full or the source is exhausted
///
/// Plain `read` may return short counts; a short read here would split a
/// payload across iterations, so keep filling until EOF.
fn read_fill<R: Read>(reader: &mut R, buf: &mut [u8]) -> std::io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        let n = reader.read(&mut buf[filled..])?;
        if n == 0 {
            break;
        }
        filled += n;
    }
    Ok(filled)
}
