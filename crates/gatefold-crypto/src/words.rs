//! Byte/word codec for the XXTEA cell format.
//!
//! Cells travel as sequences of 32-bit words, each packing 4 bytes
//! little-endian. Plaintext packs with one extra trailing word holding the
//! exact byte length, so a decode can check the claimed length against the
//! 0-3 bytes of padding slack a word boundary allows.

use crate::error::CipherError;

/// Pack bytes into little-endian u32 words.
///
/// Byte `i` is ORed into word `i >> 2` at bit offset `(i & 3) * 8`. With
/// `with_length`, one trailing word carries the exact byte count. Always
/// succeeds; empty input without a length tag yields an empty sequence.
pub fn pack(bytes: &[u8], with_length: bool) -> Vec<u32> {
    let n = bytes.len().div_ceil(4);
    let mut words = vec![0u32; if with_length { n + 1 } else { n }];
    if with_length {
        words[n] = bytes.len() as u32;
    }
    for (i, &b) in bytes.iter().enumerate() {
        words[i >> 2] |= u32::from(b) << ((i & 3) * 8);
    }
    words
}

/// Unpack words back into bytes.
///
/// With `with_length`, the trailing word is the claimed byte count `m`.
/// For `w` words, `m` must satisfy `4*(w-1) - 3 <= m <= 4*(w-1)`; anything
/// else means the cell was produced under a different key, corrupted, or
/// tampered with, and comes back as [`CipherError::IntegrityViolation`].
/// Without a tag, all `w * 4` bytes are emitted; trailing zero padding is
/// kept as real bytes (only key material takes this path, and keys are
/// never unpacked back to text).
pub fn unpack(words: &[u32], with_length: bool) -> Result<Vec<u8>, CipherError> {
    let count = if with_length {
        let Some((&tag, data)) = words.split_last() else {
            return Err(CipherError::IntegrityViolation);
        };
        let n4 = data.len() * 4;
        let m = tag as usize;
        if m > n4 || n4 - m > 3 {
            return Err(CipherError::IntegrityViolation);
        }
        m
    } else {
        words.len() * 4
    };

    let mut bytes = Vec::with_capacity(count);
    for i in 0..count {
        bytes.push((words[i >> 2] >> ((i & 3) * 8)) as u8);
    }
    Ok(bytes)
}
