//! Error types.

/// Alias for [`core::result::Result`] with the `rsa-reverse` crate's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;

/// Error types
#[derive(Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum Error {
    /// Modulus is too short to hold the 11 bytes of padding overhead.
    KeyTooSmall {
        /// Modulus size in bytes.
        size: usize,
    },

    /// Plaintext chunk does not fit in a single padded block.
    ChunkTooLarge {
        /// Length of the offending chunk.
        len: usize,
        /// Largest chunk the key can carry.
        max: usize,
    },

    /// Ciphertext length is not a positive multiple of the modulus size.
    MalformedCiphertextLength {
        /// Length of the ciphertext.
        len: usize,
        /// Modulus size in bytes.
        block_len: usize,
    },

    /// A ciphertext block did not decode to a valid type 1 padded block.
    MalformedPadding {
        /// Zero-based index of the failing block.
        block: usize,
    },

    /// Integer input to a raw RSA operation is not below the modulus.
    MessageOutOfRange,

    /// Invalid modulus.
    InvalidModulus,

    /// Invalid exponent.
    InvalidExponent,

    /// Public exponent too small.
    PublicExponentTooSmall,

    /// Public exponent too large.
    PublicExponentTooLarge,

    /// Modulus too large.
    ModulusTooLarge,

    /// Internal error.
    Internal,

    /// PKCS#1 error.
    Pkcs1(pkcs1::Error),

    /// PKCS#8 error.
    Pkcs8(pkcs8::Error),

    /// DER error while decoding a certificate.
    Der(pkcs8::der::Error),

    /// Base64 decoding error.
    #[cfg(feature = "base64")]
    Base64(base64ct::Error),
}

impl Error {
    /// Attach the index of the block being processed to block-level errors.
    pub(crate) fn at_block(self, index: usize) -> Self {
        match self {
            Error::MalformedPadding { .. } => Error::MalformedPadding { block: index },
            other => other,
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::KeyTooSmall { size } => {
                write!(f, "key too small: {size}-byte modulus, need at least 11")
            }
            Error::ChunkTooLarge { len, max } => {
                write!(f, "chunk too large: {len} bytes, at most {max} fit in a block")
            }
            Error::MalformedCiphertextLength { len, block_len } => write!(
                f,
                "malformed ciphertext length: {len} is not a positive multiple of {block_len}"
            ),
            Error::MalformedPadding { block } => write!(f, "malformed padding in block {block}"),
            Error::MessageOutOfRange => write!(f, "message representative out of range"),
            Error::InvalidModulus => write!(f, "invalid modulus"),
            Error::InvalidExponent => write!(f, "invalid exponent"),
            Error::PublicExponentTooSmall => write!(f, "public exponent too small"),
            Error::PublicExponentTooLarge => write!(f, "public exponent too large"),
            Error::ModulusTooLarge => write!(f, "modulus too large"),
            Error::Internal => write!(f, "internal error"),
            Error::Pkcs1(err) => write!(f, "{}", err),
            Error::Pkcs8(err) => write!(f, "{}", err),
            Error::Der(err) => write!(f, "{}", err),
            #[cfg(feature = "base64")]
            Error::Base64(err) => write!(f, "{}", err),
        }
    }
}

impl From<pkcs1::Error> for Error {
    fn from(err: pkcs1::Error) -> Error {
        Error::Pkcs1(err)
    }
}

impl From<pkcs8::Error> for Error {
    fn from(err: pkcs8::Error) -> Error {
        Error::Pkcs8(err)
    }
}

impl From<pkcs8::der::Error> for Error {
    fn from(err: pkcs8::der::Error) -> Error {
        Error::Der(err)
    }
}

#[cfg(feature = "base64")]
impl From<base64ct::Error> for Error {
    fn from(err: base64ct::Error) -> Error {
        Error::Base64(err)
    }
}
