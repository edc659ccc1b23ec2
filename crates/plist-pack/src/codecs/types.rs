//! Common codec traits and errors.

use crate::{binary::BinaryError, xml::XmlError, PlistFormat, PlistValue};

#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    #[error("binary plist error: {0}")]
    Binary(#[from] BinaryError),
    #[error("xml plist error: {0}")]
    Xml(#[from] XmlError),
    #[error("the `Auto` format selector is read-only, pick a concrete target format")]
    AmbiguousTarget,
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

/// Trait for codecs that encode/decode [`PlistValue`] documents.
pub trait PlistCodec {
    fn format(&self) -> PlistFormat;
    fn encode(&mut self, value: &PlistValue) -> Result<Vec<u8>, CodecError>;
    fn decode(&mut self, bytes: &[u8]) -> Result<PlistValue, CodecError>;
}
