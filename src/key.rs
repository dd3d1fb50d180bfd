// src/key.rs
//! Validated AES-128-CBC key material
//!
//! A [`Key`] only comes out of a validated constructor; material of the
//! wrong length, or declared for the wrong algorithm or usage set, never
//! becomes one. The raw bytes live in a zeroize-on-drop cell and stay out
//! of `Debug` output.

use std::fmt;

use crate::aliases::{CipherKey16, SecureRandomExt};
use crate::consts::KEY_LEN;
use crate::enums::{EncryptionAlgorithm, KeyUsage};
use crate::error::{CoreError, Result};

/// A 128-bit AES-CBC key, usable for encrypt and decrypt only
pub struct Key {
    material: CipherKey16,
}

impl Key {
    /// The only algorithm keys of this crate operate under
    pub const ALGORITHM: EncryptionAlgorithm = EncryptionAlgorithm::Aes128Cbc;

    /// The only usage set keys of this crate carry
    pub const USAGES: [KeyUsage; 2] = [KeyUsage::Encrypt, KeyUsage::Decrypt];

    /// Generate a fresh random 128-bit key
    #[inline]
    pub fn generate() -> Key {
        Key {
            material: CipherKey16::random(),
        }
    }

    /// Import raw key material under a caller-declared profile
    ///
    /// The declared algorithm and usage set must match the fixed
    /// AES-128-CBC encrypt+decrypt profile exactly. Usages compare as a
    /// set, so order and duplicates are irrelevant.
    pub fn import(
        algorithm: EncryptionAlgorithm,
        usages: &[KeyUsage],
        material: [u8; KEY_LEN],
    ) -> Result<Key> {
        if algorithm != Self::ALGORITHM {
            return Err(CoreError::AlgorithmMismatch {
                expected: Self::ALGORITHM,
                declared: algorithm,
            });
        }
        let foreign = usages.iter().any(|u| !Self::USAGES.contains(u));
        let complete = Self::USAGES.iter().all(|u| usages.contains(u));
        if foreign || !complete {
            return Err(CoreError::UsageMismatch);
        }
        Ok(Key {
            material: CipherKey16::new(material),
        })
    }

    /// Import a key from its 32-character hex form
    ///
    /// Either case is accepted on input; [`Key::to_hex`] always exports
    /// lowercase.
    pub fn from_hex(hex_key: &str) -> Result<Key> {
        let decoded = hex::decode(hex_key)?;
        let material: [u8; KEY_LEN] = decoded
            .try_into()
            .map_err(|v: Vec<u8>| CoreError::KeyLength(v.len()))?;
        Self::import(Self::ALGORITHM, &Self::USAGES, material)
    }

    /// Export the raw key material as 32 lowercase hex characters
    pub fn to_hex(&self) -> String {
        hex::encode(self.material.expose_secret())
    }

    /// The algorithm this key operates under
    #[inline]
    pub fn algorithm(&self) -> EncryptionAlgorithm {
        Self::ALGORITHM
    }

    /// The usages this key carries
    #[inline]
    pub fn usages(&self) -> &'static [KeyUsage] {
        &Self::USAGES
    }

    /// Expose the raw key bytes
    pub fn expose_secret(&self) -> &[u8; KEY_LEN] {
        self.material.expose_secret()
    }
}

impl Clone for Key {
    fn clone(&self) -> Self {
        Key {
            material: CipherKey16::new(*self.material.expose_secret()),
        }
    }
}

impl PartialEq for Key {
    fn eq(&self, other: &Self) -> bool {
        self.material.expose_secret() == other.material.expose_secret()
    }
}

impl Eq for Key {}

impl fmt::Debug for Key {
    // never print key material
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Key").finish_non_exhaustive()
    }
}
