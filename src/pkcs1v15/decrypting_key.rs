use super::{public_decrypt, public_decrypt_block};
use crate::{traits::Decryptor, Result, RsaPublicKey};
use alloc::vec::Vec;

/// Public-key decryption of messages produced by an
/// [`EncryptingKey`](super::EncryptingKey).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecryptingKey {
    inner: RsaPublicKey,
}

impl DecryptingKey {
    /// Create a new decrypting key from an RSA public key.
    pub fn new(key: RsaPublicKey) -> Self {
        Self { inner: key }
    }

    /// Recover the chunk carried by a single modulus-sized block.
    pub fn decrypt_block(&self, block: &[u8]) -> Result<Vec<u8>> {
        public_decrypt_block(&self.inner, block)
    }

    /// Decode unpadded URL-safe base64 and decrypt the result.
    #[cfg(feature = "base64")]
    pub fn decrypt_base64(&self, text: &str) -> Result<Vec<u8>> {
        self.decrypt(&crate::base64url::decode(text)?)
    }
}

impl Decryptor for DecryptingKey {
    fn decrypt(&self, ciphertext: &[u8]) -> Result<Vec<u8>> {
        public_decrypt(&self.inner, ciphertext)
    }
}

impl AsRef<RsaPublicKey> for DecryptingKey {
    fn as_ref(&self) -> &RsaPublicKey {
        &self.inner
    }
}

impl From<RsaPublicKey> for DecryptingKey {
    fn from(key: RsaPublicKey) -> Self {
        Self::new(key)
    }
}
