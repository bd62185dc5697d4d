//! The configured cipher handle.
//!
//! A handle binds one AES-GCM key and an optional default nonce. Every
//! operation exchanges binary data as lowercase hex text:
//!
//! - plaintext in, `hex(ciphertext || tag)` out for sealing
//! - `hex(ciphertext || tag)` in, plaintext out for opening
//!
//! The default nonce is only a fallback; each call may override it. Nonce
//! uniqueness per key is the caller's responsibility.

use tracing::debug;

use crate::cipher::{AesGcm, KeySize};
use crate::encoding;
use crate::error::{CryptoError, Input, Result};
use crate::nonce::Nonce;

/// An AES-GCM instance plus the nonce used when a call does not supply one.
///
/// Operations take `&self`, so a handle can be shared across threads;
/// [`reconfigure`](Self::reconfigure) needs `&mut self`.
pub struct AuthenticatedCipherHandle {
    cipher: AesGcm,
    default_nonce: Option<Nonce>,
}

impl AuthenticatedCipherHandle {
    /// Builds a handle from a raw key and a hex default nonce.
    ///
    /// An empty `default_nonce_hex` configures no default; operations that
    /// rely on it then fail with [`CryptoError::UninitializedNonce`].
    ///
    /// # Errors
    ///
    /// - [`CryptoError::InvalidKeyLength`] if `key` is not 16 or 32 bytes
    /// - [`CryptoError::InvalidHexEncoding`] if the default nonce is not hex
    /// - [`CryptoError::InvalidNonceLength`] if it does not decode to 12 bytes
    pub fn configure(key: &[u8], default_nonce_hex: &str) -> Result<Self> {
        let cipher = AesGcm::new(key)?;
        let default_nonce = match default_nonce_hex {
            "" => None,
            nonce_hex => Some(Nonce::from_hex(Input::DefaultNonce, nonce_hex)?),
        };

        debug!(variant = %cipher.key_size(), default_nonce = default_nonce.is_some(), "cipher handle configured");

        Ok(Self { cipher, default_nonce })
    }

    /// Replaces key and default nonce together.
    ///
    /// On error the current configuration is kept.
    pub fn reconfigure(&mut self, key: &[u8], default_nonce_hex: &str) -> Result<()> {
        *self = Self::configure(key, default_nonce_hex)?;
        Ok(())
    }

    #[inline]
    pub fn key_size(&self) -> KeySize {
        self.cipher.key_size()
    }

    #[inline]
    pub fn default_nonce(&self) -> Option<&Nonce> {
        self.default_nonce.as_ref()
    }

    /// Encrypts `plaintext` under the default nonce.
    pub fn encrypt(&self, plaintext: &str) -> Result<String> {
        self.seal(plaintext.as_bytes(), None)
    }

    /// Encrypts `plaintext` under a hex nonce, ignoring the default.
    pub fn encrypt_with_nonce(&self, plaintext: &str, nonce_hex: &str) -> Result<String> {
        self.seal(plaintext.as_bytes(), Some(nonce_hex))
    }

    /// Decrypts hex ciphertext under the default nonce.
    pub fn decrypt(&self, ciphertext_hex: &str) -> Result<String> {
        Ok(String::from_utf8(self.open(ciphertext_hex, None)?)?)
    }

    /// Decrypts hex ciphertext under a hex nonce, ignoring the default.
    pub fn decrypt_with_nonce(&self, ciphertext_hex: &str, nonce_hex: &str) -> Result<String> {
        Ok(String::from_utf8(self.open(ciphertext_hex, Some(nonce_hex))?)?)
    }

    /// Seals raw bytes, using `nonce_hex` when given and the default otherwise.
    ///
    /// # Errors
    ///
    /// - [`CryptoError::UninitializedNonce`] if no nonce is available
    /// - [`CryptoError::InvalidHexEncoding`] if `nonce_hex` is not hex
    /// - [`CryptoError::SealFailure`] if the nonce has the wrong length
    pub fn seal(&self, plaintext: &[u8], nonce_hex: Option<&str>) -> Result<String> {
        let nonce = self.resolve_nonce(nonce_hex, CryptoError::SealFailure)?;
        let sealed = self.cipher.seal(&nonce, plaintext)?;
        Ok(encoding::encode(&sealed))
    }

    /// Opens hex ciphertext, using `nonce_hex` when given and the default otherwise.
    ///
    /// # Errors
    ///
    /// - [`CryptoError::InvalidHexEncoding`] if the ciphertext or nonce is not hex
    /// - [`CryptoError::UninitializedNonce`] if no nonce is available
    /// - [`CryptoError::AuthenticationFailure`] if the tag does not verify, or
    ///   the ciphertext or nonce has an invalid length
    pub fn open(&self, ciphertext_hex: &str, nonce_hex: Option<&str>) -> Result<Vec<u8>> {
        let sealed = encoding::decode(Input::Ciphertext, ciphertext_hex)?;
        let nonce = self.resolve_nonce(nonce_hex, CryptoError::AuthenticationFailure)?;
        self.cipher.open(&nonce, &sealed)
    }

    // A per-call nonce of the wrong length is rejected the way the primitive
    // would reject it in that direction.
    fn resolve_nonce(&self, nonce_hex: Option<&str>, wrong_length: CryptoError) -> Result<Nonce> {
        match nonce_hex {
            Some(nonce_hex) => {
                let bytes = encoding::decode(Input::Nonce, nonce_hex)?;
                Nonce::from_slice(&bytes).map_err(|_| wrong_length)
            }
            None => self.default_nonce.ok_or(CryptoError::UninitializedNonce),
        }
    }
}

impl std::fmt::Debug for AuthenticatedCipherHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthenticatedCipherHandle").field("variant", &self.key_size()).field("default_nonce", &self.default_nonce).finish_non_exhaustive()
    }
}
