// tests/iv_tests.rs
//! IV construction, seed derivation and hex round-trips

use hexcrypt::error::CoreError;
use hexcrypt::iv::Iv;

#[test]
fn test_generate_iv_is_random_and_16_bytes() {
    let iv1 = Iv::generate();
    let iv2 = Iv::generate();
    assert_eq!(iv1.bytes().len(), 16);
    assert_ne!(iv1, iv2);
}

#[test]
fn test_iv_hex_round_trip() {
    let iv = Iv::generate();
    let hex0 = iv.to_hex();
    assert_eq!(hex0.len(), 32);
    let imported = Iv::from_hex(&hex0).unwrap();
    assert_eq!(imported, iv);
    assert_eq!(imported.to_hex(), hex0);
}

#[test]
fn test_seed_derivation_is_deterministic() {
    let a = Iv::from_seed("hello world").unwrap();
    let b = Iv::from_seed("hello world").unwrap();
    assert_eq!(a, b);
    // first 16 bytes of sha-256("hello world")
    assert_eq!(a.to_hex(), "b94d27b9934d3e08a52e52d7da7dabfa");
}

#[test]
fn test_different_seeds_give_different_ivs() {
    let a = Iv::from_seed("alpha").unwrap();
    let b = Iv::from_seed("beta").unwrap();
    assert_ne!(a, b);
}

#[test]
fn test_seed_derivation_round_trips_through_hex() {
    let derived = Iv::from_seed("session-42").unwrap();
    let imported = Iv::from_hex(&derived.to_hex()).unwrap();
    assert_eq!(imported, derived);
}

#[test]
fn test_empty_seed_is_rejected() {
    assert!(matches!(Iv::from_seed(""), Err(CoreError::EmptySeed)));
}

#[test]
fn test_from_hex_rejects_wrong_lengths() {
    assert!(matches!(Iv::from_hex("00ff"), Err(CoreError::IvLength(2))));
    assert!(matches!(
        Iv::from_hex("00112233445566778899aabbccddeeff00"),
        Err(CoreError::IvLength(17))
    ));
}

#[test]
fn test_from_hex_rejects_non_hex_input() {
    // odd length
    assert!(matches!(Iv::from_hex("abc"), Err(CoreError::InvalidHex(_))));
    // non-hex characters
    assert!(matches!(
        Iv::from_hex("gg112233445566778899aabbccddeeff"),
        Err(CoreError::InvalidHex(_))
    ));
}
