//! Binary plist decoder error type.

use thiserror::Error;

/// Error type for binary plist decoding.
///
/// Encoding is infallible: the value model is a closed set and every
/// variant has a binary representation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BinaryError {
    #[error("binary plist too short: {0} bytes, need at least 40")]
    Truncated(usize),
    #[error("missing bplist00 magic header")]
    BadMagic,
    #[error("trailer declares invalid offset width {0}")]
    BadOffsetWidth(u8),
    #[error("trailer declares invalid reference width {0}")]
    BadReferenceWidth(u8),
    #[error("offset table does not fit inside the document")]
    BadOffsetTable,
    #[error("offset {0} points outside the object table")]
    BadOffset(usize),
    #[error("object reference {0} out of range")]
    BadReference(usize),
    #[error("unexpected end of object table")]
    UnexpectedEof,
    #[error("unsupported object marker 0x{0:02x}")]
    UnsupportedMarker(u8),
    #[error("integer value does not fit in 32 bits")]
    IntegerOutOfRange,
    #[error("invalid collection length")]
    BadLength,
    #[error("ascii string contains a non-ascii byte")]
    NonAsciiString,
    #[error("invalid utf-16 string payload")]
    BadUtf16,
    #[error("dictionary key is not a string")]
    NonStringKey,
    #[error("duplicate dictionary key `{0}`")]
    DuplicateKey(String),
    #[error("date timestamp out of representable range")]
    DateOutOfRange,
}
