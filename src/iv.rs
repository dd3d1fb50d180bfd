// src/iv.rs
//! Validated CBC initialization vectors
//!
//! Three construction paths: fresh randomness, hex import, and
//! deterministic derivation from a seed string. All of them land on the
//! same 16-byte invariant; none can produce a short or long IV.

use rand::RngCore;

use crate::consts::IV_LEN;
use crate::error::{CoreError, Result};
use crate::hash::sha256;

/// A 16-byte AES-CBC initialization vector
///
/// IVs are public values. Unlike [`Key`](crate::key::Key) they sit in
/// plain memory and print in full via `Debug`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Iv {
    bytes: [u8; IV_LEN],
}

impl Iv {
    /// Generate a fresh random IV from the thread-local CSPRNG
    pub fn generate() -> Iv {
        let mut bytes = [0u8; IV_LEN];
        rand::rng().fill_bytes(&mut bytes);
        Iv { bytes }
    }

    /// Import an IV from its 32-character hex form
    pub fn from_hex(hex_iv: &str) -> Result<Iv> {
        let decoded = hex::decode(hex_iv)?;
        let bytes: [u8; IV_LEN] = decoded
            .try_into()
            .map_err(|v: Vec<u8>| CoreError::IvLength(v.len()))?;
        Ok(Iv { bytes })
    }

    /// Derive an IV deterministically from a non-empty seed string
    ///
    /// The seed is hashed with SHA-256 and the first 16 digest bytes
    /// become the IV. Identical seeds always yield identical IVs, which
    /// makes an encryption context reproducible from a human-chosen name.
    /// It also makes ciphertext linkable across messages under the same
    /// key; callers who need unlinkability should use [`Iv::generate`].
    pub fn from_seed(seed: &str) -> Result<Iv> {
        if seed.is_empty() {
            return Err(CoreError::EmptySeed);
        }
        let digest = sha256(seed.as_bytes());
        let mut bytes = [0u8; IV_LEN];
        bytes.copy_from_slice(&digest[..IV_LEN]);
        Ok(Iv { bytes })
    }

    /// Export the IV as 32 lowercase hex characters
    pub fn to_hex(&self) -> String {
        hex::encode(self.bytes)
    }

    /// Raw IV material
    #[inline]
    pub fn bytes(&self) -> &[u8; IV_LEN] {
        &self.bytes
    }
}
