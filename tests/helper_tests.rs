// tests/helper_tests.rs
//! SHA-256 and UUID helper behavior

use hexcrypt::hash::{sha256, sha256_hex};
use hexcrypt::uuid_ops::{is_uuid, random_uuid};

#[test]
fn test_sha256_hex_known_answers() {
    assert_eq!(
        sha256_hex("hello world"),
        "b94d27b9934d3e08a52e52d7da7dabfac484efe37a5380ee9088f7ace2efcde9"
    );
    // digest of the empty string
    assert_eq!(
        sha256_hex(""),
        "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
    );
}

#[test]
fn test_sha256_hex_shape_and_determinism() {
    let digest = sha256_hex("any input at all");
    assert_eq!(digest.len(), 64);
    assert!(digest
        .chars()
        .all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    assert_eq!(digest, sha256_hex("any input at all"));
    assert_ne!(digest, sha256_hex("any other input"));
}

#[test]
fn test_sha256_raw_matches_hex() {
    assert_eq!(hex::encode(sha256(b"abc")), sha256_hex("abc"));
    assert_eq!(
        sha256_hex("abc"),
        "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
    );
}

#[test]
fn test_random_uuid_is_valid_and_unique() {
    let id = random_uuid();
    assert_eq!(id.len(), 36);
    assert!(is_uuid(&id));
    assert_ne!(id, random_uuid());
}

#[test]
fn test_concatenated_uuids_are_not_a_uuid() {
    let doubled = random_uuid() + &random_uuid();
    assert!(!is_uuid(&doubled));
}

#[test]
fn test_is_uuid_structural_rules() {
    assert!(is_uuid("936da01f-9abd-4d9d-80c7-02af85c822a8"));
    // uppercase hex is still canonical
    assert!(is_uuid("936DA01F-9ABD-4D9D-80C7-02AF85C822A8"));
    // ungrouped "simple" form is rejected
    assert!(!is_uuid("936da01f9abd4d9d80c702af85c822a8"));
    // hyphens in the wrong spots
    assert!(!is_uuid("936da01f9-abd-4d9d-80c7-02af85c822a8"));
    // non-hex character
    assert!(!is_uuid("936da01f-9abd-4d9d-80c7-02af85c822ag"));
    // too short
    assert!(!is_uuid("936da01f-9abd-4d9d-80c7"));
    assert!(!is_uuid(""));
}
