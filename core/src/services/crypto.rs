//! Resume-token codec using AES-128-GCM
//!
//! A token is a random 12-byte nonce followed by the ciphertext,
//! base64url-encoded without padding so it can ride in a link query string
//! untouched. Every encryption draws a fresh nonce, so the same application
//! id encrypts to a different token each time.

use aes_gcm::{
    aead::{Aead, KeyInit},
    Aes128Gcm, Key, Nonce,
};
use base64::{engine::general_purpose::URL_SAFE_NO_PAD as BASE64, Engine};
use rand::{rngs::OsRng, RngCore};

use crate::errors::CryptoError;

/// Required key length in bytes for AES-128-GCM
pub const KEY_LENGTH: usize = 16;

/// Nonce length in bytes mandated by GCM
const NONCE_LENGTH: usize = 12;

/// Generate a random nonce for AES-GCM
fn generate_nonce() -> [u8; NONCE_LENGTH] {
    let mut nonce = [0u8; NONCE_LENGTH];
    OsRng.fill_bytes(&mut nonce);
    nonce
}

fn build_cipher(key: &str) -> Result<Aes128Gcm, CryptoError> {
    if key.len() != KEY_LENGTH {
        return Err(CryptoError::InvalidKeyLength);
    }

    let key = Key::<Aes128Gcm>::from_slice(key.as_bytes());
    Ok(Aes128Gcm::new(key))
}

/// Encrypt `plaintext` into an opaque URL-safe token.
///
/// # Arguments
///
/// * `plaintext` - Value to protect, typically an application id
/// * `key` - Exactly 16 bytes of key material
pub fn encrypt(plaintext: &str, key: &str) -> Result<String, CryptoError> {
    let cipher = build_cipher(key)?;
    let nonce = generate_nonce();

    let ciphertext = cipher
        .encrypt(Nonce::from_slice(&nonce), plaintext.as_bytes())
        .map_err(|_| CryptoError::EncryptionFailed)?;

    let mut raw = Vec::with_capacity(NONCE_LENGTH + ciphertext.len());
    raw.extend_from_slice(&nonce);
    raw.extend_from_slice(&ciphertext);

    Ok(BASE64.encode(raw))
}

/// Decrypt a token produced by [`encrypt`].
///
/// Malformed base64, a truncated payload, a failed authentication tag and a
/// wrong key all collapse into [`CryptoError::DecryptionFailed`].
pub fn decrypt(token: &str, key: &str) -> Result<String, CryptoError> {
    let cipher = build_cipher(key)?;

    let raw = BASE64
        .decode(token)
        .map_err(|_| CryptoError::DecryptionFailed)?;

    if raw.len() <= NONCE_LENGTH {
        return Err(CryptoError::DecryptionFailed);
    }

    let (nonce, ciphertext) = raw.split_at(NONCE_LENGTH);

    let plaintext = cipher
        .decrypt(Nonce::from_slice(nonce), ciphertext)
        .map_err(|_| CryptoError::DecryptionFailed)?;

    String::from_utf8(plaintext).map_err(|_| CryptoError::DecryptionFailed)
}
