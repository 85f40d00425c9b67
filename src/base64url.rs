//! Text transport for ciphertext as unpadded URL-safe base64 ([RFC4648 § 5]).
//!
//! [RFC4648 § 5]: https://datatracker.ietf.org/doc/html/rfc4648#section-5

use alloc::{string::String, vec::Vec};
use base64ct::{Base64UrlUnpadded, Encoding};

use crate::errors::Result;

/// Render `bytes` with the URL-safe alphabet and no `=` padding.
pub fn encode(bytes: &[u8]) -> String {
    Base64UrlUnpadded::encode_string(bytes)
}

/// Parse unpadded URL-safe base64. Padding characters and the standard
/// alphabet's `+` and `/` are rejected.
pub fn decode(text: &str) -> Result<Vec<u8>> {
    Ok(Base64UrlUnpadded::decode_vec(text)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::Error;
    use hex_literal::hex;

    #[test]
    fn test_encode() {
        assert_eq!(encode(b""), "");
        assert_eq!(
            encode(&hex!("bb566cec9bbf8170304880c153414d96")),
            "u1Zs7Ju_gXAwSIDBU0FNlg"
        );
        assert_eq!(encode(&[0xfb, 0xff]), "-_8");
    }

    #[test]
    fn test_decode() {
        assert_eq!(
            decode("u1Zs7Ju_gXAwSIDBU0FNlg").unwrap(),
            hex!("bb566cec9bbf8170304880c153414d96")
        );
        assert_eq!(decode("-_8").unwrap(), [0xfb, 0xff]);
    }

    #[test]
    fn test_decode_rejects_other_alphabets() {
        assert!(matches!(decode("+/8"), Err(Error::Base64(_))));
        assert!(matches!(decode("-_8="), Err(Error::Base64(_))));
        assert!(matches!(decode("u1Zs7Ju_g!"), Err(Error::Base64(_))));
    }
}
