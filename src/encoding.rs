//! Hex text encoding for ciphertexts and nonces.

use crate::error::{CryptoError, Input, Result};

/// Encodes bytes as lowercase hex.
#[inline]
pub fn encode(data: &[u8]) -> String {
    hex::encode(data)
}

/// Decodes hex text, tagging failures with the input they came from.
///
/// Both digit cases are accepted.
pub fn decode(input: Input, text: &str) -> Result<Vec<u8>> {
    hex::decode(text).map_err(|source| CryptoError::InvalidHexEncoding { input, source })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_lowercase() {
        assert_eq!(encode(&[0x00, 0xAB, 0xFF]), "00abff");
        assert_eq!(encode(&[]), "");
    }

    #[test]
    fn test_decode_mixed_case() {
        assert_eq!(decode(Input::Nonce, "00aBfF").unwrap(), vec![0x00, 0xAB, 0xFF]);
    }

    #[test]
    fn test_decode_rejects_invalid_character() {
        let err = decode(Input::Ciphertext, "xyz0").unwrap_err();
        assert!(matches!(err, CryptoError::InvalidHexEncoding { input: Input::Ciphertext, .. }));
    }

    #[test]
    fn test_decode_rejects_odd_length() {
        let err = decode(Input::Nonce, "abc").unwrap_err();
        assert!(matches!(err, CryptoError::InvalidHexEncoding { input: Input::Nonce, source: hex::FromHexError::OddLength }));
    }
}
