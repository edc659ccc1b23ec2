//! XML codec wrapper.

use crate::{xml::XmlError, PlistFormat, PlistValue, XmlPlistDecoder, XmlPlistEncoder};

use super::types::{CodecError, PlistCodec};

pub struct XmlPlistCodec {
    pub encoder: XmlPlistEncoder,
    pub decoder: XmlPlistDecoder,
}

impl Default for XmlPlistCodec {
    fn default() -> Self {
        Self::new()
    }
}

impl XmlPlistCodec {
    pub fn new() -> Self {
        Self {
            encoder: XmlPlistEncoder::new(),
            decoder: XmlPlistDecoder::new(),
        }
    }

    pub fn format(&self) -> PlistFormat {
        PlistFormat::Xml
    }

    pub fn encode(&mut self, value: &PlistValue) -> Result<Vec<u8>, CodecError> {
        Ok(self.encoder.encode(value)?.into_bytes())
    }

    pub fn decode(&mut self, bytes: &[u8]) -> Result<PlistValue, CodecError> {
        let text = std::str::from_utf8(bytes).map_err(XmlError::from)?;
        Ok(self.decoder.decode(text)?)
    }
}

impl PlistCodec for XmlPlistCodec {
    fn format(&self) -> PlistFormat {
        self.format()
    }

    fn encode(&mut self, value: &PlistValue) -> Result<Vec<u8>, CodecError> {
        self.encode(value)
    }

    fn decode(&mut self, bytes: &[u8]) -> Result<PlistValue, CodecError> {
        self.decode(bytes)
    }
}
