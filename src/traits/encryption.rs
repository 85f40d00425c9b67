//! Encryption-related traits.

use alloc::vec::Vec;
use rand_core::CryptoRngCore;

use crate::errors::Result;

/// Encrypt the message with a private key.
pub trait Encryptor {
    /// Encrypt the given message.
    fn encrypt(&self, msg: &[u8]) -> Result<Vec<u8>>;
}

/// Encrypt the message with a private key, blinding the exponentiation with
/// the provided random source.
///
/// The ciphertext is identical to the one produced by [`Encryptor`].
pub trait RandomizedEncryptor {
    /// Encrypt the given message.
    fn encrypt_with_rng<R: CryptoRngCore + ?Sized>(&self, rng: &mut R, msg: &[u8])
        -> Result<Vec<u8>>;
}

/// Decrypt the given ciphertext with a public key.
pub trait Decryptor {
    /// Decrypt the given ciphertext.
    fn decrypt(&self, ciphertext: &[u8]) -> Result<Vec<u8>>;
}

/// Encryption keypair with an associated decryption key.
pub trait DecryptingKeypair {
    /// Decrypting key type for this keypair.
    type DecryptingKey: Clone;

    /// Get the decrypting key which recovers messages encrypted by the
    /// encryption key portion of this keypair.
    fn decrypting_key(&self) -> Self::DecryptingKey;
}
