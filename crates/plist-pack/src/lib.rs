//! Apple property-list (plist) encoding/decoding.
//!
//! Converts between an in-memory [`PlistValue`] tree and the two plist
//! serializations: the verbose XML form and the compact, offset-indexed
//! `bplist00` binary form. Format detection reads the eight-byte magic
//! header; everything that is not a binary plist is treated as XML.

mod constants;
mod shared;
mod value;

pub mod binary;
pub mod codecs;
pub mod epoch;
pub mod xml;

pub use constants::{sniff_format, PlistFormat};
pub use shared::{
    from_bytes, from_bytes_with_format, from_reader, from_xml_str, to_bytes, to_writer,
    to_xml_string,
};
pub use value::PlistValue;

pub use binary::{BinaryError, BinaryPlistDecoder, BinaryPlistEncoder};
pub use codecs::{BinaryPlistCodec, CodecError, Codecs, PlistCodec, XmlPlistCodec};
pub use xml::{XmlError, XmlPlistDecoder, XmlPlistEncoder};
