// tests/file_tests.rs
use std::fs;

use aes_kit::engine::Options;
use aes_kit::error::CoreError;
use aes_kit::iv_ops::generate_iv;
use aes_kit::payload::Format;
use aes_kit::{decrypt_file, encrypt_file};

const KEY_HEX: &str = "0123456789abcdef0123456789abcdef0123456789abcdef0123456789abcdef";

/// Deterministic patterned bytes so corruption shows up anywhere
fn patterned(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i % 251) as u8).collect()
}

fn roundtrip(len: usize, options: Options) -> Vec<u8> {
    let dir = tempfile::tempdir().unwrap();
    let plain = dir.path().join("message.bin");
    let encrypted = dir.path().join("encrypted.bin");
    let decrypted = dir.path().join("decrypted.bin");

    let data = patterned(len);
    fs::write(&plain, &data).unwrap();

    encrypt_file(&plain, &encrypted, KEY_HEX, options.clone()).unwrap();
    if len > 0 {
        assert_ne!(data, fs::read(&encrypted).unwrap());
    }
    decrypt_file(&encrypted, &decrypted, KEY_HEX, options).unwrap();

    let result = fs::read(&decrypted).unwrap();
    assert_eq!(data, result);
    result
}

#[test]
fn test_file_roundtrip_smaller_than_one_chunk() {
    roundtrip(10, Options::default());
}

#[test]
fn test_file_roundtrip_spanning_multiple_chunks() {
    roundtrip(5000, Options::default());
}

#[test]
fn test_file_roundtrip_exact_chunk_multiple() {
    roundtrip(4096, Options::default());
}

#[test]
fn test_empty_file_roundtrips_to_empty_file() {
    roundtrip(0, Options::default());
}

#[test]
fn test_file_roundtrip_binary_format() {
    let options = Options {
        format: Format::Binary,
        ..Options::default()
    };
    roundtrip(5000, options);
}

#[test]
fn test_file_roundtrip_without_padding() {
    // 4096 splits into two block-aligned chunks
    let options = Options {
        padding: false,
        ..Options::default()
    };
    roundtrip(4096, options);
}

#[test]
fn test_unaligned_file_fails_without_padding() {
    let dir = tempfile::tempdir().unwrap();
    let plain = dir.path().join("message.bin");
    let encrypted = dir.path().join("encrypted.bin");
    fs::write(&plain, patterned(10)).unwrap();

    let options = Options {
        padding: false,
        ..Options::default()
    };
    let result = encrypt_file(&plain, &encrypted, KEY_HEX, options);
    assert!(matches!(result, Err(CoreError::InvalidBlockLength)));
}

#[test]
fn test_encrypted_size_matches_chunk_formula() {
    // One full 2048-byte chunk serializes to 24 + 1 + 2752 = 2777 bytes in
    // the default format; the final 904-byte chunk pads to 912 ciphertext
    // bytes and serializes to 24 + 1 + 1216 = 1241.
    let dir = tempfile::tempdir().unwrap();
    let plain = dir.path().join("message.bin");
    let encrypted = dir.path().join("encrypted.bin");
    fs::write(&plain, patterned(5000)).unwrap();

    encrypt_file(&plain, &encrypted, KEY_HEX, Options::default()).unwrap();
    assert_eq!(fs::metadata(&encrypted).unwrap().len(), 2 * 2777 + 1241);
}

#[test]
fn test_encrypted_size_matches_chunk_formula_binary() {
    let dir = tempfile::tempdir().unwrap();
    let plain = dir.path().join("message.bin");
    let encrypted = dir.path().join("encrypted.bin");
    fs::write(&plain, patterned(5000)).unwrap();

    let options = Options {
        format: Format::Binary,
        ..Options::default()
    };
    encrypt_file(&plain, &encrypted, KEY_HEX, options).unwrap();
    // 16 + 2064 per full chunk, 16 + 912 for the final chunk
    assert_eq!(fs::metadata(&encrypted).unwrap().len(), 2 * 2080 + 928);
}

#[test]
fn test_fixed_iv_makes_file_encryption_deterministic() {
    let dir = tempfile::tempdir().unwrap();
    let plain = dir.path().join("message.bin");
    let first = dir.path().join("first.bin");
    let second = dir.path().join("second.bin");
    fs::write(&plain, patterned(5000)).unwrap();

    let options = Options {
        iv: Some(generate_iv(Format::Base64).unwrap()),
        ..Options::default()
    };
    encrypt_file(&plain, &first, KEY_HEX, options.clone()).unwrap();
    encrypt_file(&plain, &second, KEY_HEX, options).unwrap();
    assert_eq!(fs::read(&first).unwrap(), fs::read(&second).unwrap());
}

#[test]
fn test_fresh_ivs_make_file_encryption_nondeterministic() {
    let dir = tempfile::tempdir().unwrap();
    let plain = dir.path().join("message.bin");
    let first = dir.path().join("first.bin");
    let second = dir.path().join("second.bin");
    fs::write(&plain, patterned(100)).unwrap();

    encrypt_file(&plain, &first, KEY_HEX, Options::default()).unwrap();
    encrypt_file(&plain, &second, KEY_HEX, Options::default()).unwrap();
    assert_ne!(fs::read(&first).unwrap(), fs::read(&second).unwrap());
}

#[test]
fn test_stream_roundtrip_in_memory() {
    use aes_kit::engine::CipherEngine;
    use aes_kit::key_ops::parse_key;
    use aes_kit::{decrypt_stream, encrypt_stream};
    use std::io::Cursor;

    let engine = CipherEngine::new(parse_key(KEY_HEX).unwrap(), Options::default()).unwrap();
    let data = patterned(3000);

    let mut encrypted = Vec::new();
    encrypt_stream(Cursor::new(&data), &mut encrypted, &engine).unwrap();

    let mut decrypted = Vec::new();
    decrypt_stream(Cursor::new(&encrypted), &mut decrypted, &engine).unwrap();
    assert_eq!(data, decrypted);
}
