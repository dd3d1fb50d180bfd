// src/error.rs
//! Public error type for the entire crate

use thiserror::Error;

use crate::consts::{BLOCK_LEN, IV_LEN, KEY_LEN};
use crate::enums::EncryptionAlgorithm;

/// Crate-wide result alias
pub type Result<T> = std::result::Result<T, CoreError>;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("invalid hex input: {0}")]
    InvalidHex(#[from] hex::FromHexError),

    #[error("invalid key length: expected {KEY_LEN} bytes, got {0}")]
    KeyLength(usize),

    #[error("invalid IV length: expected {IV_LEN} bytes, got {0}")]
    IvLength(usize),

    #[error("IV seed must not be empty")]
    EmptySeed,

    #[error("algorithm mismatch: expected {expected:?}, got {declared:?}")]
    AlgorithmMismatch {
        expected: EncryptionAlgorithm,
        declared: EncryptionAlgorithm,
    },

    #[error("usage mismatch: keys must be declared for exactly encrypt and decrypt")]
    UsageMismatch,

    #[error("ciphertext length {0} is not a positive multiple of the {BLOCK_LEN}-byte block size")]
    BlockAlignment(usize),

    #[error("padding check failed during decryption")]
    Padding,

    #[error("decrypted bytes are not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("payload too short to carry an IV prefix")]
    MissingIv,
}
