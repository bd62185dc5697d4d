//! aesgcm-hex - AES-GCM with a default nonce and hex-encoded ciphertext.
//!
//! A small handle around the RustCrypto `aes-gcm` primitive:
//! - AES-128-GCM or AES-256-GCM, picked by key length
//! - an optional default nonce, overridable on every call
//! - ciphertext and nonces exchanged as lowercase hex text
//!
//! ```
//! use aesgcm_hex::AuthenticatedCipherHandle;
//!
//! let handle = AuthenticatedCipherHandle::configure(b"0123456789ABCDEF", "001234567890001234567890")?;
//! let encrypted = handle.encrypt("Hello World!")?;
//! assert_eq!(handle.decrypt(&encrypted)?, "Hello World!");
//! # Ok::<(), aesgcm_hex::CryptoError>(())
//! ```

pub mod cipher;
pub mod config;
pub mod encoding;
pub mod error;
pub mod handle;
pub mod nonce;
pub mod secret;

pub use cipher::KeySize;
pub use error::{CryptoError, Input, Result, Stage};
pub use handle::AuthenticatedCipherHandle;
pub use nonce::Nonce;
pub use secret::SecretKey;
