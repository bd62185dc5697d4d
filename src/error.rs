//! Error taxonomy for the cipher handle.

use std::string::FromUtf8Error;

use strum::Display;
use thiserror::Error;

use crate::config::{AES_128_KEY_SIZE, AES_256_KEY_SIZE, NONCE_SIZE};

pub type Result<T> = std::result::Result<T, CryptoError>;

/// Names the hex input that failed to decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "kebab-case")]
pub enum Input {
    Ciphertext,
    Nonce,
    DefaultNonce,
}

/// The stage of a request an error belongs to.
///
/// Lets callers separate a malformed request (`Configuration`, `Decoding`)
/// from a ciphertext that failed authentication.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum Stage {
    Configuration,
    Decoding,
    Sealing,
    Authentication,
}

/// Errors produced by the cipher handle.
#[derive(Debug, Error)]
pub enum CryptoError {
    /// The key is neither an AES-128 nor an AES-256 key.
    #[error("invalid key length: expected {AES_128_KEY_SIZE} or {AES_256_KEY_SIZE} bytes, got {len}")]
    InvalidKeyLength { len: usize },

    /// A hex argument could not be decoded.
    #[error("invalid hex encoding in {input}")]
    InvalidHexEncoding {
        input: Input,
        #[source]
        source: hex::FromHexError,
    },

    /// The configured default nonce does not have the primitive's nonce length.
    #[error("invalid nonce length: expected {NONCE_SIZE} bytes, got {len}")]
    InvalidNonceLength { len: usize },

    /// A default-nonce operation was called on a handle configured without one.
    #[error("no default nonce configured")]
    UninitializedNonce,

    /// The primitive refused to seal the plaintext.
    #[error("aes-gcm seal failed")]
    SealFailure,

    /// The tag did not verify, or the ciphertext or nonce has an invalid length.
    #[error("aes-gcm authentication failed")]
    AuthenticationFailure,

    /// The authenticated plaintext is not UTF-8 text.
    #[error("decrypted plaintext is not valid utf-8")]
    InvalidUtf8(#[from] FromUtf8Error),
}

impl CryptoError {
    pub fn stage(&self) -> Stage {
        match self {
            Self::InvalidKeyLength { .. } | Self::InvalidNonceLength { .. } | Self::UninitializedNonce => Stage::Configuration,
            Self::InvalidHexEncoding { .. } | Self::InvalidUtf8(_) => Stage::Decoding,
            Self::SealFailure => Stage::Sealing,
            Self::AuthenticationFailure => Stage::Authentication,
        }
    }

    /// True when the ciphertext was tampered with or the key/nonce is wrong.
    #[inline]
    pub fn is_authentication_failure(&self) -> bool {
        matches!(self, Self::AuthenticationFailure)
    }
}
