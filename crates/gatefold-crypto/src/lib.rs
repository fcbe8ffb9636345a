//! XXTEA cell obfuscation for the gatefold guest sheet.
//!
//! A published spreadsheet is world-readable, so every sensitive cell is
//! stored as XXTEA-encrypted, Base64-encoded text. This crate implements
//! the cell codec: little-endian byte/word packing with a trailing length
//! tag, the fixed-round block transform, and the Base64 pipeline on top.
//!
//! This is light obfuscation for short cleartexts (names, dates, codes),
//! not cryptographic confidentiality. There is no nonce and no key
//! rotation. The scheme's value is that decrypting a cell with the wrong
//! key almost always trips the length-tag check, which the guest layer
//! uses as an implicit authentication test.

pub mod cell;
pub mod error;
pub mod words;
pub mod xxtea;

pub use cell::{decrypt_cell, decrypt_cell_bytes, encrypt_cell, encrypt_cell_bytes};
pub use error::CipherError;
pub use xxtea::CellKey;
