//! Aggregate codec holder.

use crate::{sniff_format, PlistFormat, PlistValue};

use super::{BinaryPlistCodec, CodecError, XmlPlistCodec};

pub struct Codecs {
    pub binary: BinaryPlistCodec,
    pub xml: XmlPlistCodec,
}

impl Default for Codecs {
    fn default() -> Self {
        Self::new()
    }
}

impl Codecs {
    pub fn new() -> Self {
        Self {
            binary: BinaryPlistCodec::new(),
            xml: XmlPlistCodec::new(),
        }
    }

    /// Decodes a document with the format sniffed from its magic header.
    pub fn decode(&mut self, data: &[u8]) -> Result<PlistValue, CodecError> {
        match sniff_format(data) {
            PlistFormat::Binary => self.binary.decode(data),
            _ => self.xml.decode(data),
        }
    }
}
