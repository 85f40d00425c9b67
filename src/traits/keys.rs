//! Traits related to the key components

use num_bigint::BigUint;

/// Components of an RSA public key.
pub trait PublicKeyParts {
    /// Returns the modulus of the key.
    fn n(&self) -> &BigUint;

    /// Returns the public exponent of the key.
    fn e(&self) -> &BigUint;

    /// Returns the modulus size in bytes. Every ciphertext block produced
    /// or consumed with this key has exactly this size.
    fn size(&self) -> usize {
        (self.n().bits() + 7) / 8
    }
}

/// Components of an RSA private key.
pub trait PrivateKeyParts: PublicKeyParts {
    /// Returns the private exponent of the key.
    fn d(&self) -> &BigUint;
}

impl<K: PublicKeyParts + ?Sized> PublicKeyParts for &K {
    fn n(&self) -> &BigUint {
        (**self).n()
    }

    fn e(&self) -> &BigUint {
        (**self).e()
    }
}

impl<K: PrivateKeyParts + ?Sized> PrivateKeyParts for &K {
    fn d(&self) -> &BigUint {
        (**self).d()
    }
}
