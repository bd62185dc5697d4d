use secrecy::{ExposeSecret, SecretBox};

/// Raw key material, zeroized on drop and redacted in `Debug` output.
pub struct SecretKey {
    inner: SecretBox<Vec<u8>>,
}

impl SecretKey {
    pub fn new(key: &[u8]) -> Self {
        Self { inner: SecretBox::new(Box::new(key.to_vec())) }
    }

    /// Takes ownership of key text typed or passed on the command line.
    pub fn from_string(key: String) -> Self {
        Self { inner: SecretBox::new(Box::new(key.into_bytes())) }
    }

    pub fn expose_secret(&self) -> &[u8] {
        self.inner.expose_secret()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.expose_secret().len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl std::fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SecretKey([... {} bytes ...])", self.len())
    }
}
