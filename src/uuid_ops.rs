// src/uuid_ops.rs
//! Random identifier generation and validation
//!
//! Thin pass-throughs over the `uuid` crate: fresh v4 identifiers plus a
//! structural check for the canonical hyphenated form.

use uuid::Uuid;

/// Generate a random v4 UUID in canonical `8-4-4-4-12` form
#[inline]
pub fn random_uuid() -> String {
    Uuid::new_v4().to_string()
}

/// Check whether `s` is a canonically formatted UUID
///
/// Accepts exactly the 36-character grouped form: hyphens at positions 8,
/// 13, 18 and 23, hex digits everywhere else, either case. The ungrouped
/// "simple" form and braced/urn forms return false even though
/// general-purpose parsers take them. Version and variant nibbles are not
/// inspected.
pub fn is_uuid(s: &str) -> bool {
    let b = s.as_bytes();
    if b.len() != 36 {
        return false;
    }
    if b[8] != b'-' || b[13] != b'-' || b[18] != b'-' || b[23] != b'-' {
        return false;
    }
    Uuid::parse_str(s).is_ok()
}
