// src/enums.rs
//! Public enum types used throughout the crate
//!
//! Central location for all #[derive(...)] enums that describe imported
//! key material: the declared algorithm and the declared usage set.

use serde::{Deserialize, Serialize};

/// Cipher algorithms key material can be declared for
///
/// Only the default is operable by this crate; importing material declared
/// for anything else is rejected up front rather than at first use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[non_exhaustive]
pub enum EncryptionAlgorithm {
    #[default]
    Aes128Cbc,
    Aes256Cbc,
    // Future:
    // ChaCha20Poly1305,
    // AES256GCM,
}

/// Operations key material can be declared usable for
///
/// The fixed profile accepts exactly encrypt plus decrypt; declaring any
/// signing or derivation usage fails validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum KeyUsage {
    Encrypt,
    Decrypt,
    Sign,
    Verify,
    DeriveKey,
    DeriveBits,
}
