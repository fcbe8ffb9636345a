//! Corrected Block TEA (XXTEA) over little-endian packed words.
//!
//! Wheeler and Needham's `btea` with a fixed `6 + 52/n` round schedule,
//! keyed by 128 bits. It keeps short spreadsheet cells from being read
//! casually; it is not a modern cipher and offers no authentication beyond
//! the length tag the codec embeds.

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::words::pack;

/// Golden-ratio round constant.
const DELTA: u32 = 0x9E37_79B9;

/// The 128-bit key schedule for the cell transform.
///
/// Built from arbitrary-length key material (a guest code, a nested event
/// key) by the same untagged byte/word packing as the data path, zero
/// filled up to 4 words. Longer material is accepted: the round function
/// only ever indexes words `(p & 3) ^ e`, all below 4, so everything past
/// the fourth word is inert. Deployed sheet data may lean on that laxity,
/// so it stays.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct CellKey([u32; 4]);

impl CellKey {
    pub fn new(material: &[u8]) -> Self {
        let mut words = pack(material, false);
        let mut k = [0u32; 4];
        for (slot, word) in k.iter_mut().zip(words.iter()) {
            *slot = *word;
        }
        words.zeroize();
        Self(k)
    }
}

#[inline]
fn mx(sum: u32, y: u32, z: u32, p: usize, e: usize, k: &[u32; 4]) -> u32 {
    ((z >> 5 ^ y << 2).wrapping_add(y >> 3 ^ z << 4))
        ^ ((sum ^ y).wrapping_add(k[(p & 3) ^ e] ^ z))
}

/// Encrypt a word sequence in place.
///
/// Each round sweeps positions `0..n-1`, every word absorbing a mix of its
/// neighbors, then wraps around at the last word. Sequences of fewer than
/// two words pass through unchanged, as in the original `btea`.
pub fn encrypt(v: &mut [u32], key: &CellKey) {
    let n = v.len();
    if n < 2 {
        return;
    }
    let k = &key.0;
    let rounds = 6 + 52 / n;
    let mut sum = 0u32;
    let mut z = v[n - 1];
    for _ in 0..rounds {
        sum = sum.wrapping_add(DELTA);
        let e = (sum >> 2 & 3) as usize;
        for p in 0..n - 1 {
            let y = v[p + 1];
            v[p] = v[p].wrapping_add(mx(sum, y, z, p, e, k));
            z = v[p];
        }
        let y = v[0];
        v[n - 1] = v[n - 1].wrapping_add(mx(sum, y, z, n - 1, e, k));
        z = v[n - 1];
    }
}

/// Decrypt a word sequence in place. Exact inverse of [`encrypt`]: the
/// same rounds in reverse, `sum` running from `rounds * DELTA` down
/// through zero, positions high to low, additions mirrored as
/// subtractions.
pub fn decrypt(v: &mut [u32], key: &CellKey) {
    let n = v.len();
    if n < 2 {
        return;
    }
    let k = &key.0;
    let rounds = 6 + 52 / n;
    let mut sum = (rounds as u32).wrapping_mul(DELTA);
    let mut y = v[0];
    while sum != 0 {
        let e = (sum >> 2 & 3) as usize;
        for p in (1..n).rev() {
            let z = v[p - 1];
            v[p] = v[p].wrapping_sub(mx(sum, y, z, p, e, k));
            y = v[p];
        }
        let z = v[n - 1];
        v[0] = v[0].wrapping_sub(mx(sum, y, z, 0, e, k));
        y = v[0];
        sum = sum.wrapping_sub(DELTA);
    }
}
