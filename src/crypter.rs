// src/crypter.rs
//! AES-128-CBC encryption and decryption over a fixed key/IV pair
//!
//! [`Crypter`] is the reusable form: the same pair, deterministic output.
//! [`seal_to_hex`] / [`open_hex`] are the per-message form: a fresh IV per
//! call, carried in front of the ciphertext.
//!
//! CBC provides confidentiality only. Tampering surfaces as a padding or
//! UTF-8 error at best; callers needing integrity must layer a MAC.

use aes::cipher::{BlockDecryptMut, BlockEncryptMut, KeyIvInit};
use cbc::cipher::block_padding::Pkcs7;

use crate::consts::{BLOCK_LEN, IV_HEX_LEN};
use crate::error::{CoreError, Result};
use crate::iv::Iv;
use crate::key::Key;

type Aes128CbcEnc = cbc::Encryptor<aes::Aes128>;
type Aes128CbcDec = cbc::Decryptor<aes::Aes128>;

/// A key paired with an IV for repeated encrypt/decrypt calls
///
/// The pairing is fixed for the lifetime of the value: encrypting the same
/// clear text twice yields the same ciphertext. That determinism is
/// inherent to CBC under a fixed key and IV. Callers who need unlinkable
/// ciphertexts should use [`seal_to_hex`] or build a fresh `Crypter` per
/// message.
#[derive(Debug, Clone)]
pub struct Crypter {
    key: Key,
    iv: Iv,
}

impl Crypter {
    /// Pair an existing key and IV
    pub fn new(key: Key, iv: Iv) -> Crypter {
        Crypter { key, iv }
    }

    /// Generate a `Crypter` with a fresh random key and IV
    pub fn generate() -> Crypter {
        Crypter::new(Key::generate(), Iv::generate())
    }

    /// Construct a `Crypter` from the hex forms of a key and an IV
    pub fn from_hex(hex_key: &str, hex_iv: &str) -> Result<Crypter> {
        Ok(Crypter::new(Key::from_hex(hex_key)?, Iv::from_hex(hex_iv)?))
    }

    /// The key half of the pair
    pub fn key(&self) -> &Key {
        &self.key
    }

    /// The IV half of the pair
    pub fn iv(&self) -> &Iv {
        &self.iv
    }

    /// Encrypt raw bytes with PKCS#7 padding
    ///
    /// Output length is the next multiple of 16 above the input length:
    /// aligned input (the empty slice included) gains one full padding
    /// block.
    pub fn encrypt_to_vec(&self, plaintext: &[u8]) -> Vec<u8> {
        let key: &aes::cipher::Key<Aes128CbcEnc> = &(*self.key.expose_secret()).into();
        let iv: &aes::cipher::Iv<Aes128CbcEnc> = &(*self.iv.bytes()).into();
        Aes128CbcEnc::new(key, iv).encrypt_padded_vec_mut::<Pkcs7>(plaintext)
    }

    /// Decrypt raw bytes produced by [`Crypter::encrypt_to_vec`]
    ///
    /// The input must be a positive multiple of the block size and the
    /// PKCS#7 padding must verify. Either failure surfaces as an error,
    /// never as silently corrupted output.
    pub fn decrypt_to_vec(&self, ciphertext: &[u8]) -> Result<Vec<u8>> {
        if ciphertext.is_empty() || ciphertext.len() % BLOCK_LEN != 0 {
            return Err(CoreError::BlockAlignment(ciphertext.len()));
        }
        let key: &aes::cipher::Key<Aes128CbcDec> = &(*self.key.expose_secret()).into();
        let iv: &aes::cipher::Iv<Aes128CbcDec> = &(*self.iv.bytes()).into();
        Aes128CbcDec::new(key, iv)
            .decrypt_padded_vec_mut::<Pkcs7>(ciphertext)
            .map_err(|_| CoreError::Padding)
    }

    /// Encrypt a UTF-8 string and hex-encode the ciphertext
    pub fn encrypt_to_hex(&self, clear_text: &str) -> String {
        hex::encode(self.encrypt_to_vec(clear_text.as_bytes()))
    }

    /// Hex-decode a ciphertext and decrypt it back to a UTF-8 string
    pub fn decrypt_from_hex(&self, hex_cipher: &str) -> Result<String> {
        let ciphertext = hex::decode(hex_cipher)?;
        let plaintext = self.decrypt_to_vec(&ciphertext)?;
        Ok(String::from_utf8(plaintext)?)
    }
}

/// Encrypt with a fresh random IV and prepend that IV to the payload
///
/// Every call draws a new IV, so sealing the same text under the same key
/// twice produces different payloads. The result is the 32 hex characters
/// of the IV followed by the ciphertext hex, self-describing for
/// [`open_hex`].
pub fn seal_to_hex(clear_text: &str, key: &Key) -> String {
    let iv = Iv::generate();
    let mut payload = iv.to_hex();
    payload.push_str(&Crypter::new(key.clone(), iv).encrypt_to_hex(clear_text));
    payload
}

/// Open a payload produced by [`seal_to_hex`]
///
/// Splits the leading 32 hex characters back into the IV and decrypts the
/// remainder under it.
pub fn open_hex(payload: &str, key: &Key) -> Result<String> {
    let (hex_iv, hex_cipher) = match (payload.get(..IV_HEX_LEN), payload.get(IV_HEX_LEN..)) {
        (Some(iv), Some(cipher)) => (iv, cipher),
        _ => return Err(CoreError::MissingIv),
    };
    let iv = Iv::from_hex(hex_iv)?;
    Crypter::new(key.clone(), iv).decrypt_from_hex(hex_cipher)
}
