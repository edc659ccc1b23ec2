//! XML property-list encoding/decoding.
//!
//! A thin mapping between [`PlistValue`](crate::PlistValue) and plist
//! markup; the markup itself is delegated to `quick-xml`.

mod decoder;
mod encoder;
mod error;

pub use decoder::XmlPlistDecoder;
pub use encoder::XmlPlistEncoder;
pub use error::XmlError;
