//! Splitting of arbitrary-length payloads into block-sized units.
//!
//! Messages are cut into chunks of at most `k - 11` bytes, each of which
//! becomes exactly one `k`-byte block. An empty message still produces one
//! block so that it round-trips. Ciphertext is cut at a fixed stride of `k`.

use alloc::vec::Vec;

use crate::algorithms::pkcs1v15::max_msg_len;
use crate::errors::{Error, Result};

/// Number of bytes produced by encrypting a `msg_len`-byte message with a
/// `k`-byte modulus.
pub(crate) fn ciphertext_len(msg_len: usize, k: usize) -> Result<usize> {
    let max = max_msg_len(k)?;
    if max == 0 && msg_len > 0 {
        return Err(Error::ChunkTooLarge { len: msg_len, max });
    }

    Ok(msg_len.max(1).div_ceil(max.max(1)) * k)
}

/// Runs `encrypt_block` over every chunk of `msg` and concatenates the
/// resulting blocks, each of which must be exactly `k` bytes.
pub(crate) fn encrypt_chunks<F>(msg: &[u8], k: usize, mut encrypt_block: F) -> Result<Vec<u8>>
where
    F: FnMut(&[u8]) -> Result<Vec<u8>>,
{
    let max = max_msg_len(k)?;
    let mut out = Vec::with_capacity(ciphertext_len(msg.len(), k)?);

    let mut push = |index: usize, chunk: &[u8]| -> Result<()> {
        if chunk.len() > max {
            return Err(Error::ChunkTooLarge {
                len: chunk.len(),
                max,
            });
        }

        let block = encrypt_block(chunk).map_err(|err| err.at_block(index))?;
        if block.len() != k {
            return Err(Error::Internal);
        }

        out.extend_from_slice(&block);
        Ok(())
    };

    if msg.is_empty() {
        push(0, &[])?;
    } else {
        for (index, chunk) in msg.chunks(max).enumerate() {
            push(index, chunk)?;
        }
    }

    Ok(out)
}

/// Runs `decrypt_block` over every `k`-byte block of `ciphertext` and
/// concatenates the recovered chunks.
pub(crate) fn decrypt_blocks<F>(ciphertext: &[u8], k: usize, mut decrypt_block: F) -> Result<Vec<u8>>
where
    F: FnMut(&[u8]) -> Result<Vec<u8>>,
{
    let max = max_msg_len(k)?;
    if ciphertext.is_empty() || ciphertext.len() % k != 0 {
        return Err(Error::MalformedCiphertextLength {
            len: ciphertext.len(),
            block_len: k,
        });
    }

    let mut out = Vec::with_capacity(ciphertext.len() / k * max);
    for (index, block) in ciphertext.chunks_exact(k).enumerate() {
        let chunk = decrypt_block(block).map_err(|err| err.at_block(index))?;
        out.extend_from_slice(&chunk);
    }

    Ok(out)
}
