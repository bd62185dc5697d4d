//! # AES-GCM primitive
//!
//! Thin facade over the RustCrypto `aes-gcm` instances. The variant is picked
//! from the key length at construction time:
//!
//! - 16-byte key: AES-128-GCM
//! - 32-byte key: AES-256-GCM
//!
//! Both variants take a 96-bit nonce and append a 128-bit tag, so the sealed
//! layout is `[Ciphertext] || [Auth Tag (16 bytes)]` with no framing. Nonces
//! are never generated here; callers supply them.

use strum::Display;

mod aes_gcm;

pub use aes_gcm::AesGcm;

use crate::config::{AES_128_KEY_SIZE, AES_256_KEY_SIZE};
use crate::error::{CryptoError, Result};

/// The AES key size, which selects the GCM instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum KeySize {
    #[strum(serialize = "AES-128-GCM")]
    Aes128,
    #[strum(serialize = "AES-256-GCM")]
    Aes256,
}

impl KeySize {
    /// Maps a raw key length to its variant.
    ///
    /// # Errors
    ///
    /// Returns [`CryptoError::InvalidKeyLength`] for anything but 16 or 32.
    pub fn from_key_len(len: usize) -> Result<Self> {
        match len {
            AES_128_KEY_SIZE => Ok(Self::Aes128),
            AES_256_KEY_SIZE => Ok(Self::Aes256),
            len => Err(CryptoError::InvalidKeyLength { len }),
        }
    }

    #[inline]
    pub fn key_len(self) -> usize {
        match self {
            Self::Aes128 => AES_128_KEY_SIZE,
            Self::Aes256 => AES_256_KEY_SIZE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_size_from_len() {
        assert_eq!(KeySize::from_key_len(16).unwrap(), KeySize::Aes128);
        assert_eq!(KeySize::from_key_len(32).unwrap(), KeySize::Aes256);
        assert!(matches!(KeySize::from_key_len(24), Err(CryptoError::InvalidKeyLength { len: 24 })));
        assert!(matches!(KeySize::from_key_len(0), Err(CryptoError::InvalidKeyLength { len: 0 })));
    }

    #[test]
    fn test_key_size_display() {
        assert_eq!(KeySize::Aes128.to_string(), "AES-128-GCM");
        assert_eq!(KeySize::Aes256.to_string(), "AES-256-GCM");
        assert_eq!(KeySize::Aes256.key_len(), 32);
    }
}
