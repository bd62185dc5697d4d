//! Fixed-size AES-GCM nonce.

use std::fmt::{Display, Formatter};

use crate::config::NONCE_SIZE;
use crate::encoding;
use crate::error::{CryptoError, Input, Result};

/// A 96-bit nonce, validated on construction.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Nonce([u8; NONCE_SIZE]);

impl Nonce {
    #[inline]
    pub const fn new(bytes: [u8; NONCE_SIZE]) -> Self {
        Self(bytes)
    }

    /// Builds a nonce from a slice, rejecting any length other than [`NONCE_SIZE`].
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        let bytes: [u8; NONCE_SIZE] = bytes.try_into().map_err(|_| CryptoError::InvalidNonceLength { len: bytes.len() })?;
        Ok(Self(bytes))
    }

    /// Parses a hex nonce. `input` names the argument in decode errors.
    pub fn from_hex(input: Input, text: &str) -> Result<Self> {
        Self::from_slice(&encoding::decode(input, text)?)
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8; NONCE_SIZE] {
        &self.0
    }

    #[inline]
    pub fn to_hex(&self) -> String {
        encoding::encode(&self.0)
    }
}

impl Display for Nonce {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl std::fmt::Debug for Nonce {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Nonce({})", self.to_hex())
    }
}
