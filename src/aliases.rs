// src/aliases.rs
//! Re-exports secure-gate's ergonomic secret types
//!
//! These are the canonical secret types used throughout aes-kit.

pub use secure_gate::{fixed_alias, RevealSecret, ToHex};

// Fixed-size secrets
fixed_alias!(pub Key32, 32); // 256-bit AES key
