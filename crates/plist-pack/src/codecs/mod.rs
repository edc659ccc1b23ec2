//! Format-agnostic codec wrappers around the binary and XML paths.

mod binary;
mod registry;
mod types;
mod xml;

pub use binary::BinaryPlistCodec;
pub use registry::Codecs;
pub use types::{CodecError, PlistCodec};
pub use xml::XmlPlistCodec;
