//! Hashing helpers shared across the crate
//!
//! SHA-256 is the only digest this crate speaks. It backs the public
//! [`sha256_hex`] helper and deterministic IV derivation.

use sha2::{Digest, Sha256};

/// Compute the SHA-256 digest of `data`
pub fn sha256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(data);
    let digest = hasher.finalize();
    let mut out = [0u8; 32];
    out.copy_from_slice(&digest);
    out
}

/// Digest a UTF-8 string with SHA-256 and return lowercase hex
///
/// The output is always exactly 64 hex characters.
#[inline]
pub fn sha256_hex(s: &str) -> String {
    hex::encode(sha256(s.as_bytes()))
}
