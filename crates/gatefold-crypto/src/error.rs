use thiserror::Error;

/// Failure decoding a cell.
///
/// Every variant means the same thing to a caller: wrong key or garbled
/// data. The matching layer treats them identically and must not leak
/// which one occurred.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CipherError {
    #[error("length tag inconsistent with word count")]
    IntegrityViolation,

    #[error("cell is not valid base64")]
    MalformedBase64,

    #[error("decrypted bytes are not valid UTF-8")]
    NotUtf8,
}
