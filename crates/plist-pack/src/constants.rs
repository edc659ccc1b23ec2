//! Top-level constants for plist-pack.

use crate::binary::MAGIC;

/// Serialization format selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlistFormat {
    /// Sniff the format from the first eight bytes; read-only.
    Auto,
    Binary,
    Xml,
}

/// Detects the serialization format of a plist document.
///
/// A document starting with the exact `bplist00` magic is binary; anything
/// else, short input included, is treated as XML.
pub fn sniff_format(data: &[u8]) -> PlistFormat {
    if data.len() >= MAGIC.len() && &data[..MAGIC.len()] == MAGIC {
        PlistFormat::Binary
    } else {
        PlistFormat::Xml
    }
}
