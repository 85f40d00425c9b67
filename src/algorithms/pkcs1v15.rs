//! PKCS#1 v1.5 type 1 block formatting as described in [RFC8017 § 9.2],
//! applied to raw message bytes instead of a DigestInfo.
//!
//! [RFC8017 § 9.2]: https://datatracker.ietf.org/doc/html/rfc8017#section-9.2

use alloc::vec::Vec;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};
use zeroize::Zeroizing;

use crate::errors::{Error, Result};

/// Bytes of every block spent on formatting: the `0x00 0x01` prefix, at
/// least eight filler bytes and the `0x00` separator.
pub(crate) const PADDING_OVERHEAD: usize = 11;

/// Filler byte used for the padding string.
const FILLER: u8 = 0xff;

/// Largest message that fits in a block of `k` bytes.
#[inline]
pub(crate) fn max_msg_len(k: usize) -> Result<usize> {
    k.checked_sub(PADDING_OVERHEAD)
        .ok_or(Error::KeyTooSmall { size: k })
}

/// Applies the type 1 padding scheme. The message must be no longer than
/// the length of the modulus minus 11 bytes.
///
/// The padding string is a fixed run of `0xff` bytes, so the encoding is
/// deterministic: equal messages produce equal blocks.
#[inline]
pub(crate) fn pkcs1v15_private_pad(msg: &[u8], k: usize) -> Result<Zeroizing<Vec<u8>>> {
    let max = max_msg_len(k)?;
    if msg.len() > max {
        return Err(Error::ChunkTooLarge {
            len: msg.len(),
            max,
        });
    }

    // EM = 0x00 || 0x01 || PS || 0x00 || M
    let mut em = Zeroizing::new(vec![FILLER; k]);
    em[0] = 0;
    em[1] = 1;
    em[k - msg.len() - 1] = 0;
    em[k - msg.len()..].copy_from_slice(msg);
    Ok(em)
}

/// Removes the type 1 padding.
///
/// Only the `0x00 0x01` prefix and the presence of a `0x00` separator are
/// checked. The bytes in between are not inspected, so blocks whose padding
/// string was filled with arbitrary non-zero bytes decode as well.
#[inline]
pub(crate) fn pkcs1v15_private_unpad(em: &[u8], k: usize) -> Result<Vec<u8>> {
    if k < PADDING_OVERHEAD {
        return Err(Error::KeyTooSmall { size: k });
    }

    if em.len() != k {
        return Err(Error::MalformedPadding { block: 0 });
    }

    let (valid, index) = unpad_inner(em);
    if valid == 0 {
        return Err(Error::MalformedPadding { block: 0 });
    }

    Ok(em[index as usize..].to_vec())
}

/// Scans the block for the separator. Returns one in `valid` iff the block
/// carries the type 1 prefix and a separator; `index` is then the offset of
/// the first message byte.
#[inline]
fn unpad_inner(em: &[u8]) -> (u8, u32) {
    let first_byte_is_zero = em[0].ct_eq(&0u8);
    let second_byte_is_one = em[1].ct_eq(&1u8);

    //   looking_for_index: 1 iff we are still looking for the zero.
    //   index: the offset of the first zero byte.
    let mut looking_for_index = 1u8;
    let mut index = 0u32;

    for (i, el) in em.iter().enumerate().skip(2) {
        let equals0 = el.ct_eq(&0u8);
        index.conditional_assign(&(i as u32), Choice::from(looking_for_index) & equals0);
        looking_for_index.conditional_assign(&0u8, equals0);
    }

    let valid = first_byte_is_zero & second_byte_is_one & Choice::from(!looking_for_index & 1);
    index = u32::conditional_select(&0, &(index + 1), valid);

    (valid.unwrap_u8(), index)
}
