// src/aliases.rs
//! Re-exports secure-gate's ergonomic secret types
//!
//! These are the canonical types used throughout hexcrypt.

pub use secure_gate::{fixed_alias, SecureRandomExt};

// Fixed-size secrets
fixed_alias!(CipherKey16, 16); // 128-bit AES-CBC key material, zeroized on drop
