//! Encrypt/decrypt pipeline for sheet cells.
//!
//! Write: UTF-8 text → length-tagged words → XXTEA → word bytes → Base64.
//! Read: Base64 → words → XXTEA⁻¹ → length-checked bytes → UTF-8.
//!
//! Cells use the standard padded Base64 alphabet; an implementation that
//! deviates by a byte cannot read data the deployed sheets already hold.

use base64ct::{Base64, Encoding};

use crate::error::CipherError;
use crate::words::{pack, unpack};
use crate::xxtea::{decrypt, encrypt, CellKey};

/// Encrypt plaintext into a Base64 cell under `key`.
///
/// Deterministic: the same plaintext and key always produce the same cell
/// (no nonce). That is what lets a stored code cell double as the
/// authentication check for the code that encrypted it.
pub fn encrypt_cell(plaintext: &str, key: &str) -> String {
    encrypt_cell_bytes(plaintext.as_bytes(), key.as_bytes())
}

/// Byte-level form of [`encrypt_cell`].
pub fn encrypt_cell_bytes(plaintext: &[u8], key: &[u8]) -> String {
    let cell_key = CellKey::new(key);
    let mut v = pack(plaintext, true);
    encrypt(&mut v, &cell_key);
    // Untagged unpack has no failure path; the tag rides inside the words.
    let raw = unpack(&v, false).expect("untagged unpack is infallible");
    Base64::encode_string(&raw)
}

/// Decrypt a Base64 cell under `key`.
///
/// Malformed Base64, a length tag that fails the slack check, and
/// non-UTF-8 plaintext all come back as the same kind of ordinary `Err`:
/// wrong key or garbled cell. Callers must not try to tell them apart.
pub fn decrypt_cell(cell: &str, key: &str) -> Result<String, CipherError> {
    let bytes = decrypt_cell_bytes(cell, key.as_bytes())?;
    String::from_utf8(bytes).map_err(|_| CipherError::NotUtf8)
}

/// Byte-level form of [`decrypt_cell`].
pub fn decrypt_cell_bytes(cell: &str, key: &[u8]) -> Result<Vec<u8>, CipherError> {
    let raw = Base64::decode_vec(cell).map_err(|_| CipherError::MalformedBase64)?;
    let cell_key = CellKey::new(key);
    let mut v = pack(&raw, false);
    decrypt(&mut v, &cell_key);
    unpack(&v, true)
}
