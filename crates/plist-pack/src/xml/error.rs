//! XML plist error type.

use thiserror::Error;

/// Error type for XML plist encoding/decoding.
#[derive(Debug, Error)]
pub enum XmlError {
    #[error("xml markup error: {0}")]
    Markup(#[from] quick_xml::Error),
    #[error("invalid xml escape: {0}")]
    Escape(#[from] quick_xml::escape::EscapeError),
    #[error("xml write error: {0}")]
    Write(#[from] std::io::Error),
    #[error("document is not valid utf-8: {0}")]
    InvalidUtf8(#[from] std::str::Utf8Error),
    #[error("document root is `{0}`, expected `plist`")]
    UnexpectedRoot(String),
    #[error("plist element contains no value")]
    MissingValue,
    #[error("plist element `{0}` is not supported")]
    UnknownElement(String),
    #[error("dictionary elements must have an even number of child nodes")]
    OddChildCount,
    #[error("expected a key node, found `{0}`")]
    ExpectedKey(String),
    #[error("duplicate dictionary key `{0}`")]
    DuplicateKey(String),
    #[error("invalid integer value `{0}`")]
    InvalidInteger(String),
    #[error("invalid real value `{0}`")]
    InvalidReal(String),
    #[error("invalid date value `{0}`")]
    InvalidDate(String),
    #[error("invalid base64 data: {0}")]
    InvalidData(#[from] base64::DecodeError),
    #[error("unexpected end of document")]
    UnexpectedEof,
}
