// src/lib.rs
//! hexcrypt: AES-128-CBC text encryption with a hex wire format
//!
//! Features:
//! - Validated [`Key`] / [`Iv`] / [`Crypter`] construction (malformed
//!   material never becomes a value)
//! - Deterministic IV derivation from a seed string
//! - Hex round-trips for keys, IVs and ciphertext
//! - Per-message envelopes ([`seal_to_hex`] / [`open_hex`])
//! - SHA-256 and UUID v4 helpers
//!
//! AES-CBC provides confidentiality only. There is no authentication tag:
//! tampered ciphertext is detected only when padding or UTF-8 decoding
//! happens to break. Callers needing integrity must layer a MAC or move
//! to an AEAD.

pub mod aliases;
pub mod consts;
pub mod crypter;
pub mod enums;
pub mod error;
pub mod hash;
pub mod iv;
pub mod key;
pub mod uuid_ops;

// Re-export everything users need at the crate root
pub use crypter::{open_hex, seal_to_hex, Crypter};
pub use enums::{EncryptionAlgorithm, KeyUsage};
pub use error::{CoreError, Result};
pub use hash::{sha256, sha256_hex};
pub use iv::Iv;
pub use key::Key;
pub use uuid_ops::{is_uuid, random_uuid};
