use aes_gcm::aead::{Aead, KeyInit};
use aes_gcm::{Aes128Gcm, Aes256Gcm, Nonce as GcmNonce};

use crate::cipher::KeySize;
use crate::config::TAG_SIZE;
use crate::error::{CryptoError, Result};
use crate::nonce::Nonce;

enum Inner {
    Aes128(Box<Aes128Gcm>),
    Aes256(Box<Aes256Gcm>),
}

/// AES-GCM keyed at construction, sealing and opening with caller nonces.
pub struct AesGcm {
    inner: Inner,
}

impl AesGcm {
    pub fn new(key: &[u8]) -> Result<Self> {
        let invalid = |_| CryptoError::InvalidKeyLength { len: key.len() };
        let inner = match KeySize::from_key_len(key.len())? {
            KeySize::Aes128 => Inner::Aes128(Box::new(Aes128Gcm::new_from_slice(key).map_err(invalid)?)),
            KeySize::Aes256 => Inner::Aes256(Box::new(Aes256Gcm::new_from_slice(key).map_err(invalid)?)),
        };
        Ok(Self { inner })
    }

    #[inline]
    pub fn key_size(&self) -> KeySize {
        match self.inner {
            Inner::Aes128(_) => KeySize::Aes128,
            Inner::Aes256(_) => KeySize::Aes256,
        }
    }

    /// Returns `ciphertext || tag`.
    pub fn seal(&self, nonce: &Nonce, plaintext: &[u8]) -> Result<Vec<u8>> {
        let nonce = GcmNonce::from_slice(nonce.as_bytes());
        let sealed = match &self.inner {
            Inner::Aes128(aead) => aead.encrypt(nonce, plaintext),
            Inner::Aes256(aead) => aead.encrypt(nonce, plaintext),
        };
        sealed.map_err(|_| CryptoError::SealFailure)
    }

    /// Verifies the trailing tag and returns the plaintext.
    pub fn open(&self, nonce: &Nonce, sealed: &[u8]) -> Result<Vec<u8>> {
        if sealed.len() < TAG_SIZE {
            return Err(CryptoError::AuthenticationFailure);
        }

        let nonce = GcmNonce::from_slice(nonce.as_bytes());
        let opened = match &self.inner {
            Inner::Aes128(aead) => aead.decrypt(nonce, sealed),
            Inner::Aes256(aead) => aead.decrypt(nonce, sealed),
        };
        opened.map_err(|_| CryptoError::AuthenticationFailure)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ZERO_NONCE: Nonce = Nonce::new([0u8; 12]);

    #[test]
    fn test_new_rejects_bad_key() {
        assert!(matches!(AesGcm::new(&[0u8; 24]), Err(CryptoError::InvalidKeyLength { len: 24 })));
        assert!(matches!(AesGcm::new(b"short"), Err(CryptoError::InvalidKeyLength { len: 5 })));
    }

    #[test]
    fn test_aes128_known_answer() {
        let cipher = AesGcm::new(&[0u8; 16]).unwrap();
        assert_eq!(cipher.key_size(), KeySize::Aes128);

        let tag_only = cipher.seal(&ZERO_NONCE, b"").unwrap();
        assert_eq!(hex::encode(&tag_only), "58e2fccefa7e3061367f1d57a4e7455a");

        let sealed = cipher.seal(&ZERO_NONCE, &[0u8; 16]).unwrap();
        assert_eq!(hex::encode(&sealed), "0388dace60b6a392f328c2b971b2fe78ab6e47d42cec13bdf53a67b21257bddf");
    }

    #[test]
    fn test_aes256_known_answer() {
        let cipher = AesGcm::new(&[0u8; 32]).unwrap();
        assert_eq!(cipher.key_size(), KeySize::Aes256);

        let tag_only = cipher.seal(&ZERO_NONCE, b"").unwrap();
        assert_eq!(hex::encode(&tag_only), "530f8afbc74536b9a963b4f1c4cb738b");
    }

    #[test]
    fn test_seal_appends_tag() {
        let cipher = AesGcm::new(&[7u8; 32]).unwrap();
        let sealed = cipher.seal(&ZERO_NONCE, b"Hello, World!").unwrap();
        assert_eq!(sealed.len(), 13 + TAG_SIZE);
        assert_eq!(cipher.open(&ZERO_NONCE, &sealed).unwrap(), b"Hello, World!");
    }

    #[test]
    fn test_open_too_short() {
        let cipher = AesGcm::new(&[0u8; 16]).unwrap();
        assert!(matches!(cipher.open(&ZERO_NONCE, &[0u8; TAG_SIZE - 1]), Err(CryptoError::AuthenticationFailure)));
    }

    #[test]
    fn test_open_tampered() {
        let cipher = AesGcm::new(&[0u8; 16]).unwrap();
        let mut sealed = cipher.seal(&ZERO_NONCE, b"Hello, World!").unwrap();

        if let Some(last) = sealed.last_mut() {
            *last ^= 0xFF;
        }

        assert!(matches!(cipher.open(&ZERO_NONCE, &sealed), Err(CryptoError::AuthenticationFailure)));
    }

    #[test]
    fn test_open_wrong_key() {
        let sealed = AesGcm::new(&[1u8; 16]).unwrap().seal(&ZERO_NONCE, b"secret").unwrap();
        let other = AesGcm::new(&[2u8; 16]).unwrap();
        assert!(matches!(other.open(&ZERO_NONCE, &sealed), Err(CryptoError::AuthenticationFailure)));
    }
}
