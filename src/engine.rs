// src/engine.rs
//! The cipher engine — single-shot encrypt/decrypt over AES-256-CBC
//!
//! An engine is built once from a key and a resolved [`Options`] set and
//! then performs any number of encrypt/decrypt calls under that one
//! configuration. A fresh CBC encryptor/decryptor is constructed per call
//! and dropped on return, so no cipher state leaks between operations.
//! Engines are not safe for concurrent sharing; concurrent callers should
//! build independent instances.

use aes::Aes256;
use cbc::cipher::block_padding::{NoPadding, Pkcs7};
use cbc::cipher::{BlockDecryptMut, BlockEncryptMut, KeyIvInit};

use crate::aliases::{Key32, RevealSecret};
use crate::consts::{BLOCK_LEN, DEFAULT_CIPHER, IV_LEN};
use crate::error::{CoreError, Result};
use crate::iv_ops::{self, IvRepr};
use crate::payload::{self, Format, Payload};

type Aes256CbcEnc = cbc::Encryptor<Aes256>;
type Aes256CbcDec = cbc::Decryptor<Aes256>;

/// Engine configuration, resolved once at construction time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Wire format for serialized payloads
    pub format: Format,
    /// Cipher identifier; only [`DEFAULT_CIPHER`] is accepted
    pub cipher: String,
    /// Optional fixed IV, encoded to match `format`. When set, every
    /// encrypt call reuses it; IV uniqueness becomes the caller's problem.
    pub iv: Option<IvRepr>,
    /// PKCS#7 padding. Disabling it requires block-aligned plaintext.
    pub padding: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            format: Format::default(),
            cipher: DEFAULT_CIPHER.to_owned(),
            iv: None,
            padding: true,
        }
    }
}

/// One configured encrypt/decrypt engine bound to a single key
pub struct CipherEngine {
    key: Key32,
    format: Format,
    padding: bool,
    iv_override: Option<[u8; IV_LEN]>,
}

impl CipherEngine {
    /// Build an engine, validating the cipher identifier and decoding any
    /// IV override eagerly
    pub fn new(key: Key32, options: Options) -> Result<Self> {
        if options.cipher != DEFAULT_CIPHER {
            return Err(CoreError::UnsupportedCipher(options.cipher));
        }
        let iv_override = match &options.iv {
            Some(repr) => Some(iv_ops::resolve_iv(repr)?),
            None => None,
        };
        Ok(Self {
            key,
            format: options.format,
            padding: options.padding,
            iv_override,
        })
    }

    pub fn format(&self) -> Format {
        self.format
    }

    /// Wire length of one full plaintext chunk under this configuration.
    /// The file codec reads encrypted input in exactly these units.
    pub fn encrypted_chunk_len(&self) -> usize {
        payload::encrypted_chunk_len(self.format, self.padding)
    }

    /// Encrypt a plaintext buffer into a serialized payload
    ///
    /// The IV is the configured override if present, otherwise fresh random
    /// bytes per call. Empty plaintext is valid in both padding modes.
    pub fn encrypt(&self, plaintext: &[u8]) -> Result<Payload> {
        let iv = match self.iv_override {
            Some(iv) => iv,
            None => iv_ops::generate_iv_bytes()?,
        };
        let cipher = Aes256CbcEnc::new(self.key.expose_secret().into(), (&iv).into());
        let ciphertext = if self.padding {
            cipher.encrypt_padded_vec_mut::<Pkcs7>(plaintext)
        } else {
            if plaintext.len() % BLOCK_LEN != 0 {
                return Err(CoreError::InvalidBlockLength);
            }
            cipher.encrypt_padded_vec_mut::<NoPadding>(plaintext)
        };
        Ok(payload::serialize(self.format, &iv, &ciphertext))
    }

    /// Decrypt a serialized payload back into plaintext
    ///
    /// Fails with `BadPadding` when the padding bytes do not verify. A wrong
    /// key, a wrong IV, and corrupted ciphertext are indistinguishable at
    /// this layer; the caller receives no partial plaintext.
    pub fn decrypt(&self, payload: &Payload) -> Result<Vec<u8>> {
        let (iv, ciphertext) = payload::deserialize(self.format, payload)?;
        if ciphertext.len() % BLOCK_LEN != 0 {
            return Err(CoreError::InvalidBlockLength);
        }
        let iv: [u8; IV_LEN] = iv
            .try_into()
            .map_err(|_| CoreError::MalformedPayload("IV must be exactly 16 bytes"))?;
        let cipher = Aes256CbcDec::new(self.key.expose_secret().into(), (&iv).into());
        if self.padding {
            cipher
                .decrypt_padded_vec_mut::<Pkcs7>(&ciphertext)
                .map_err(|_| CoreError::BadPadding)
        } else {
            cipher
                .decrypt_padded_vec_mut::<NoPadding>(&ciphertext)
                .map_err(|_| CoreError::BadPadding)
        }
    }
}
