//! Private-key encryption and public-key decryption with PKCS#1 v1.5
//! type 1 padding.
//!
//! Each block is laid out as `0x00 || 0x01 || PS || 0x00 || M`, where `PS`
//! is a run of `0xff` bytes at least eight long, and is then raised to the
//! private exponent. Anyone holding the public key can reverse the
//! operation, so this provides authenticity of origin, not confidentiality.
//!
//! The padding string is deterministic: encrypting the same message twice
//! yields the same ciphertext. Decryption only checks the `0x00 0x01`
//! prefix and the `0x00` separator, so blocks padded with random non-zero
//! bytes are accepted as well.
//!
//! # Usage
//!
//! ```
//! # fn main() -> rsa_reverse::Result<()> {
//! use rsa_reverse::{BigUint, RsaPrivateKey, RsaPublicKey};
//! use rsa_reverse::pkcs1v15::{private_encrypt, public_decrypt};
//! # let n = BigUint::parse_bytes(b"ce69b1bef3c9b78c12cfb06d72dec059", 16).unwrap();
//! # let d = BigUint::parse_bytes(b"7bb968fc8f7e82d0935182615b48fd01", 16).unwrap();
//! # let private_key = RsaPrivateKey::from_components(n, BigUint::from(65537u32), d)?;
//!
//! let public_key = RsaPublicKey::from(&private_key);
//!
//! let ciphertext = private_encrypt(&private_key, b"hello world")?;
//! assert_eq!(ciphertext.len() % 16, 0);
//!
//! let plaintext = public_decrypt(&public_key, &ciphertext)?;
//! assert_eq!(plaintext, b"hello world");
//! # Ok(())
//! # }
//! ```

mod decrypting_key;
mod encrypting_key;

pub use self::{decrypting_key::DecryptingKey, encrypting_key::EncryptingKey};

use alloc::vec::Vec;
use num_bigint::BigUint;
use rand_core::CryptoRngCore;
use zeroize::Zeroizing;

use crate::algorithms::pad::{uint_to_be_pad, uint_to_zeroizing_be_pad};
use crate::algorithms::pkcs1v15::{max_msg_len, pkcs1v15_private_pad, pkcs1v15_private_unpad};
use crate::algorithms::rsa::{rsa_decrypt_and_check, rsa_encrypt};
use crate::algorithms::segment;
use crate::dummy_rng::DummyRng;
use crate::errors::{Error, Result};
use crate::key;
use crate::traits::{PrivateKeyParts, PublicKeyParts};

/// Number of bytes of every block taken up by padding.
pub const PADDING_OVERHEAD: usize = crate::algorithms::pkcs1v15::PADDING_OVERHEAD;

/// Largest chunk of plaintext carried by a single block under `key`.
pub fn max_chunk_len(key: &impl PublicKeyParts) -> Result<usize> {
    max_msg_len(key.size())
}

/// Length of the ciphertext produced by encrypting a `msg_len`-byte message
/// under `key`: `ceil(max(msg_len, 1) / max_chunk_len) * size`.
pub fn ciphertext_len(key: &impl PublicKeyParts, msg_len: usize) -> Result<usize> {
    segment::ciphertext_len(msg_len, key.size())
}

/// Encrypts `msg` with the private exponent, splitting it across as many
/// blocks as needed. The output is a concatenation of blocks, each exactly
/// the size of the modulus.
#[inline]
pub fn private_encrypt(priv_key: &impl PrivateKeyParts, msg: &[u8]) -> Result<Vec<u8>> {
    encrypt::<DummyRng>(None, priv_key, msg)
}

/// Same as [`private_encrypt`], using RSA blinding with `rng` for every
/// block. The ciphertext is identical to the unblinded one.
#[inline]
pub fn private_encrypt_with_rng<R: CryptoRngCore + ?Sized>(
    rng: &mut R,
    priv_key: &impl PrivateKeyParts,
    msg: &[u8],
) -> Result<Vec<u8>> {
    encrypt(Some(rng), priv_key, msg)
}

/// Recovers the message from `ciphertext` with the public exponent.
///
/// The ciphertext length must be a positive multiple of the modulus size.
/// Errors for individual blocks report the zero-based block index.
#[inline]
pub fn public_decrypt(pub_key: &impl PublicKeyParts, ciphertext: &[u8]) -> Result<Vec<u8>> {
    key::check_public(pub_key)?;

    segment::decrypt_blocks(ciphertext, pub_key.size(), |block| {
        decrypt_block(pub_key, block)
    })
}

/// Encrypts a single chunk of at most [`max_chunk_len`] bytes into one
/// block.
#[inline]
pub fn private_encrypt_block(priv_key: &impl PrivateKeyParts, chunk: &[u8]) -> Result<Vec<u8>> {
    key::check_public(priv_key)?;
    encrypt_block::<DummyRng>(None, priv_key, chunk)
}

/// Recovers the chunk carried by a single block, which must be exactly the
/// size of the modulus.
#[inline]
pub fn public_decrypt_block(pub_key: &impl PublicKeyParts, block: &[u8]) -> Result<Vec<u8>> {
    key::check_public(pub_key)?;
    decrypt_block(pub_key, block)
}

#[inline]
fn encrypt<R: CryptoRngCore + ?Sized>(
    mut rng: Option<&mut R>,
    priv_key: &impl PrivateKeyParts,
    msg: &[u8],
) -> Result<Vec<u8>> {
    key::check_public(priv_key)?;

    segment::encrypt_chunks(msg, priv_key.size(), |chunk| {
        encrypt_block(rng.as_deref_mut(), priv_key, chunk)
    })
}

/// Pads `chunk` and raises it to the private exponent.
#[inline]
fn encrypt_block<R: CryptoRngCore + ?Sized>(
    rng: Option<&mut R>,
    priv_key: &impl PrivateKeyParts,
    chunk: &[u8],
) -> Result<Vec<u8>> {
    let k = priv_key.size();
    let em = pkcs1v15_private_pad(chunk, k)?;
    let m = Zeroizing::new(BigUint::from_bytes_be(&em));

    uint_to_be_pad(rsa_decrypt_and_check(priv_key, rng, &m)?, k)
}

/// Raises `block` to the public exponent and removes the padding.
#[inline]
fn decrypt_block(pub_key: &impl PublicKeyParts, block: &[u8]) -> Result<Vec<u8>> {
    let k = pub_key.size();
    max_msg_len(k)?;

    if block.len() != k {
        return Err(Error::MalformedPadding { block: 0 });
    }

    let c = BigUint::from_bytes_be(block);
    if &c >= pub_key.n() {
        return Err(Error::MalformedPadding { block: 0 });
    }

    let em = uint_to_zeroizing_be_pad(rsa_encrypt(pub_key, &c)?, k)?;
    pkcs1v15_private_unpad(&em, k)
}
