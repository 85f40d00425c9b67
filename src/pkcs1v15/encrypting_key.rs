use super::{private_encrypt, private_encrypt_block, private_encrypt_with_rng, DecryptingKey};
use crate::{
    traits::{DecryptingKeypair, Encryptor, RandomizedEncryptor},
    Result, RsaPrivateKey,
};
use alloc::vec::Vec;
use rand_core::CryptoRngCore;
use zeroize::ZeroizeOnDrop;

#[cfg(feature = "base64")]
use alloc::string::String;

/// Private-key encryption with PKCS#1 v1.5 type 1 padding.
///
/// Messages encrypted with this key are recovered with the [`DecryptingKey`]
/// returned by [`DecryptingKeypair::decrypting_key`].
#[derive(Debug, Clone, PartialEq)]
pub struct EncryptingKey {
    inner: RsaPrivateKey,
}

impl EncryptingKey {
    /// Create a new encrypting key from an RSA private key.
    pub fn new(key: RsaPrivateKey) -> Self {
        Self { inner: key }
    }

    /// Encrypt a single chunk into one modulus-sized block.
    pub fn encrypt_block(&self, chunk: &[u8]) -> Result<Vec<u8>> {
        private_encrypt_block(&self.inner, chunk)
    }

    /// Encrypt `msg` and render the ciphertext as unpadded URL-safe base64.
    #[cfg(feature = "base64")]
    pub fn encrypt_to_base64(&self, msg: &[u8]) -> Result<String> {
        self.encrypt(msg).map(|ciphertext| crate::base64url::encode(&ciphertext))
    }
}

impl Encryptor for EncryptingKey {
    fn encrypt(&self, msg: &[u8]) -> Result<Vec<u8>> {
        private_encrypt(&self.inner, msg)
    }
}

impl RandomizedEncryptor for EncryptingKey {
    fn encrypt_with_rng<R: CryptoRngCore + ?Sized>(
        &self,
        rng: &mut R,
        msg: &[u8],
    ) -> Result<Vec<u8>> {
        private_encrypt_with_rng(rng, &self.inner, msg)
    }
}

impl DecryptingKeypair for EncryptingKey {
    type DecryptingKey = DecryptingKey;

    fn decrypting_key(&self) -> DecryptingKey {
        DecryptingKey::new(self.inner.to_public_key())
    }
}

impl AsRef<RsaPrivateKey> for EncryptingKey {
    fn as_ref(&self) -> &RsaPrivateKey {
        &self.inner
    }
}

impl From<RsaPrivateKey> for EncryptingKey {
    fn from(key: RsaPrivateKey) -> Self {
        Self::new(key)
    }
}

impl ZeroizeOnDrop for EncryptingKey {}
