//! Binary codec wrapper.

use crate::{BinaryPlistDecoder, BinaryPlistEncoder, PlistFormat, PlistValue};

use super::types::{CodecError, PlistCodec};

pub struct BinaryPlistCodec {
    pub encoder: BinaryPlistEncoder,
    pub decoder: BinaryPlistDecoder,
}

impl Default for BinaryPlistCodec {
    fn default() -> Self {
        Self::new()
    }
}

impl BinaryPlistCodec {
    pub fn new() -> Self {
        Self {
            encoder: BinaryPlistEncoder::new(),
            decoder: BinaryPlistDecoder::new(),
        }
    }

    pub fn format(&self) -> PlistFormat {
        PlistFormat::Binary
    }

    pub fn encode(&mut self, value: &PlistValue) -> Result<Vec<u8>, CodecError> {
        Ok(self.encoder.encode(value))
    }

    pub fn decode(&mut self, bytes: &[u8]) -> Result<PlistValue, CodecError> {
        Ok(self.decoder.decode(bytes)?)
    }
}

impl PlistCodec for BinaryPlistCodec {
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
