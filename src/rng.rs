// src/rng.rs
//! Secure random byte generation
//!
//! The single source of randomness in the crate. Everything that needs
//! random bytes (keys, IVs) goes through here, and a generator failure
//! always surfaces as `RandomSourceUnavailable` — never a silent fallback
//! to a weaker generator.

use rand::rngs::OsRng;
use rand::TryRngCore;

use crate::error::{CoreError, Result};

/// Fill a new buffer with `n` bytes from the OS secure generator
pub fn random_bytes(n: usize) -> Result<Vec<u8>> {
    let mut buf = vec![0u8; n];
    OsRng
        .try_fill_bytes(&mut buf)
        .map_err(|_| CoreError::RandomSourceUnavailable)?;
    Ok(buf)
}

/// Fixed-size variant of [`random_bytes`] for key and IV material
pub fn random_array<const N: usize>() -> Result<[u8; N]> {
    let mut buf = [0u8; N];
    OsRng
        .try_fill_bytes(&mut buf)
        .map_err(|_| CoreError::RandomSourceUnavailable)?;
    Ok(buf)
}
