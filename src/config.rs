//! Size constants for the AES-GCM primitive and the command-line front end.
//!
//! The values here mirror what `aes-gcm` accepts; the handle validates its
//! inputs against them before the primitive ever sees them.

/// Key length selecting AES-128-GCM.
pub const AES_128_KEY_SIZE: usize = 16;

/// Key length selecting AES-256-GCM.
pub const AES_256_KEY_SIZE: usize = 32;

/// Size of an AES-GCM nonce in bytes.
///
/// 96 bits is the only nonce length the standard `Aes128Gcm` / `Aes256Gcm`
/// instances accept. Both the default nonce and per-call nonces must decode
/// to exactly this many bytes.
pub const NONCE_SIZE: usize = 12;

/// Size of the authentication tag appended to every ciphertext.
pub const TAG_SIZE: usize = 16;

/// Environment variable the CLI reads the key from when `--key` is absent.
pub const KEY_ENV: &str = "AESGCM_KEY";
