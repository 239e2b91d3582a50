//! Symmetric encryption for sensitive columns (bank account numbers, CLABE).
//!
//! The 256-bit AES-GCM key is the SHA-256 digest of `APP_KEY`. Every value is
//! encrypted with a fresh random nonce and stored as `base64(nonce || ciphertext)`.

use aes_gcm::{
    aead::{Aead, KeyInit},
    Aes256Gcm, Nonce,
};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use rand::Rng;
use sha2::{Digest, Sha256};

use crate::server::error::crypto::CryptoError;

const NONCE_LEN: usize = 12;

#[derive(Clone)]
pub struct FieldCipher {
    cipher: Aes256Gcm,
}

impl FieldCipher {
    pub fn new(secret: &str) -> Self {
        let key: [u8; 32] = Sha256::digest(secret.as_bytes()).into();

        Self {
            cipher: Aes256Gcm::new(&key.into()),
        }
    }

    pub fn encrypt(&self, plaintext: &str) -> Result<String, CryptoError> {
        let mut nonce = [0u8; NONCE_LEN];
        rand::rng().fill(&mut nonce);

        let ciphertext = self
            .cipher
            .encrypt(Nonce::from_slice(&nonce), plaintext.as_bytes())
            .map_err(|_| CryptoError::Encrypt)?;

        let mut payload = Vec::with_capacity(NONCE_LEN + ciphertext.len());
        payload.extend_from_slice(&nonce);
        payload.extend_from_slice(&ciphertext);

        Ok(STANDARD.encode(payload))
    }

    pub fn decrypt(&self, encoded: &str) -> Result<String, CryptoError> {
        let payload = STANDARD
            .decode(encoded)
            .map_err(|_| CryptoError::Malformed)?;
        if payload.len() <= NONCE_LEN {
            return Err(CryptoError::Malformed);
        }

        let (nonce, ciphertext) = payload.split_at(NONCE_LEN);
        let plaintext = self
            .cipher
            .decrypt(Nonce::from_slice(nonce), ciphertext)
            .map_err(|_| CryptoError::Decrypt)?;

        String::from_utf8(plaintext).map_err(|_| CryptoError::Decrypt)
    }
}

/// Trailing four characters kept in clear for display.
pub fn last_four(value: &str) -> String {
    let chars: Vec<char> = value.chars().collect();
    let start = chars.len().saturating_sub(4);
    chars[start..].iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_values() {
        let cipher = FieldCipher::new("app-key");

        let encrypted = cipher.encrypt("012345678901234567").unwrap();
        assert_ne!(encrypted, "012345678901234567");
        assert_eq!(cipher.decrypt(&encrypted).unwrap(), "012345678901234567");
    }

    #[test]
    fn uses_a_fresh_nonce_per_value() {
        let cipher = FieldCipher::new("app-key");

        let first = cipher.encrypt("1234567890").unwrap();
        let second = cipher.encrypt("1234567890").unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn rejects_other_keys_and_garbage() {
        let encrypted = FieldCipher::new("app-key").encrypt("1234567890").unwrap();

        assert!(matches!(
            FieldCipher::new("other-key").decrypt(&encrypted),
            Err(CryptoError::Decrypt)
        ));
        assert!(matches!(
            FieldCipher::new("app-key").decrypt("not base64!"),
            Err(CryptoError::Malformed)
        ));
    }

    #[test]
    fn keeps_last_four_characters() {
        assert_eq!(last_four("012345678901234567"), "4567");
        assert_eq!(last_four("123"), "123");
        assert_eq!(last_four(""), "");
    }
}
