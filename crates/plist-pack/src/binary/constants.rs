//! Marker bytes and fixed layout constants for the `bplist00` wire format.

/// File magic, the first eight bytes of every binary plist.
pub const MAGIC: &[u8; 8] = b"bplist00";

/// Trailer length in bytes.
pub const TRAILER_SIZE: usize = 32;

/// Smallest possible well-formed document: magic plus trailer.
pub const MIN_FILE_SIZE: usize = MAGIC.len() + TRAILER_SIZE;

/// Singleton object markers (full bytes).
pub const MARKER_NULL: u8 = 0x00;
pub const MARKER_FALSE: u8 = 0x08;
pub const MARKER_TRUE: u8 = 0x09;

/// High-nibble markers for sized objects.
pub const MARKER_INT: u8 = 0x10;
pub const MARKER_REAL: u8 = 0x20;
pub const MARKER_DATE: u8 = 0x33;
pub const MARKER_DATA: u8 = 0x40;
pub const MARKER_ASCII_STRING: u8 = 0x50;
pub const MARKER_UTF16_STRING: u8 = 0x60;
pub const MARKER_ARRAY: u8 = 0xA0;
pub const MARKER_DICT: u8 = 0xD0;

/// Low-nibble sentinel: the element count follows as an integer object.
pub const LENGTH_FOLLOWS: u8 = 0x0F;
