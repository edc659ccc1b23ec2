//! Shared convenience wrappers over the plist codecs.

use std::io::{Read, Write};

use crate::codecs::CodecError;
use crate::{
    sniff_format, BinaryPlistDecoder, BinaryPlistEncoder, PlistFormat, PlistValue,
    XmlPlistDecoder, XmlPlistEncoder,
};

/// Decode a plist document, sniffing the format from its magic header.
pub fn from_bytes(data: &[u8]) -> Result<PlistValue, CodecError> {
    from_bytes_with_format(data, PlistFormat::Auto)
}

/// Decode a plist document with an explicit format selector.
pub fn from_bytes_with_format(
    data: &[u8],
    format: PlistFormat,
) -> Result<PlistValue, CodecError> {
    let resolved = match format {
        PlistFormat::Auto => sniff_format(data),
        other => other,
    };
    match resolved {
        PlistFormat::Binary => Ok(BinaryPlistDecoder::new().decode(data)?),
        _ => {
            let text = std::str::from_utf8(data).map_err(crate::xml::XmlError::from)?;
            Ok(XmlPlistDecoder::new().decode(text)?)
        }
    }
}

/// Read a plist from a stream. The stream is drained fully before decoding.
pub fn from_reader(mut reader: impl Read) -> Result<PlistValue, CodecError> {
    let mut data = Vec::new();
    reader.read_to_end(&mut data)?;
    from_bytes(&data)
}

/// Decode an XML plist document from source text.
pub fn from_xml_str(text: &str) -> Result<PlistValue, CodecError> {
    Ok(XmlPlistDecoder::new().decode(text)?)
}

/// Encode to bytes in the given target format.
///
/// `Auto` only makes sense on read and fails with
/// [`CodecError::AmbiguousTarget`].
pub fn to_bytes(value: &PlistValue, format: PlistFormat) -> Result<Vec<u8>, CodecError> {
    match format {
        PlistFormat::Auto => Err(CodecError::AmbiguousTarget),
        PlistFormat::Binary => Ok(BinaryPlistEncoder::new().encode(value)),
        PlistFormat::Xml => Ok(XmlPlistEncoder::new().encode(value)?.into_bytes()),
    }
}

/// Encode to an XML plist document string.
pub fn to_xml_string(value: &PlistValue) -> Result<String, CodecError> {
    Ok(XmlPlistEncoder::new().encode(value)?)
}

/// Write a plist to a stream in the given target format.
pub fn to_writer(
    mut writer: impl Write,
    value: &PlistValue,
    format: PlistFormat,
) -> Result<(), CodecError> {
    let data = to_bytes(value, format)?;
    writer.write_all(&data)?;
    Ok(())
}
