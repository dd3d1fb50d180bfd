// src/consts.rs
//! Shared constants: security parameters of the fixed cipher profile
//!
//! Every length here is pinned by the AES-128-CBC contract; there are no
//! runtime tunables in this crate.

/// AES-128 key size in bytes
pub const KEY_LEN: usize = 16;

/// CBC initialization vector size in bytes (one cipher block)
pub const IV_LEN: usize = 16;

/// AES block size in bytes
pub const BLOCK_LEN: usize = 16;

/// Hex characters in a serialized key (two per byte)
pub const KEY_HEX_LEN: usize = KEY_LEN * 2;

/// Hex characters in a serialized IV
pub const IV_HEX_LEN: usize = IV_LEN * 2;
