//! RSA-related trait definitions.

mod encryption;
pub(crate) mod keys;

pub use encryption::{DecryptingKeypair, Decryptor, Encryptor, RandomizedEncryptor};
pub use keys::{PrivateKeyParts, PublicKeyParts};
