//! The property-list value model.

use chrono::{DateTime, Utc};

/// A property-list value.
///
/// This is the closed set of types both plist serializations can express.
/// Dictionaries are kept as ordered key/value pairs: insertion order is
/// significant, it determines binary encoding order and survives a decode
/// round trip. Keys are unique; both decoders reject duplicates.
#[derive(Debug, Clone, PartialEq)]
pub enum PlistValue {
    Null,
    Bool(bool),
    Integer(i32),
    Real(f64),
    /// A UTC instant. The binary form stores whole seconds relative to the
    /// Apple epoch, so sub-second precision is dropped on encode.
    Date(DateTime<Utc>),
    /// An immutable byte blob (`<data>` in the XML form).
    Bytes(Vec<u8>),
    String(String),
    /// An ordered sequence of values.
    Array(Vec<PlistValue>),
    /// A string-keyed map in insertion order.
    Dict(Vec<(String, PlistValue)>),
}
