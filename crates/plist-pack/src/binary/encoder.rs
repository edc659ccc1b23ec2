//! `bplist00` encoder.

use plist_buffers::Writer;

use super::constants::*;
use super::regulate::{min_byte_width, regulate};
use crate::epoch;
use crate::value::PlistValue;

/// Binary plist encoder.
///
/// Encoding runs in three passes: a sizing pass that counts objects and
/// fixes the reference width, an emission pass that appends objects to the
/// table in ascending reference order while recording their offsets, and a
/// finalization pass that picks the offset width and appends the offset
/// table and trailer. All state is reset at the start of every call, so one
/// encoder instance can be reused but never shares state across calls.
pub struct BinaryPlistEncoder {
    writer: Writer,
    offsets: Vec<usize>,
    ref_width: usize,
}

impl Default for BinaryPlistEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl BinaryPlistEncoder {
    pub fn new() -> Self {
        Self {
            writer: Writer::new(),
            offsets: Vec::new(),
            ref_width: 0,
        }
    }

    /// Encode a value tree into a complete `bplist00` document.
    pub fn encode(&mut self, root: &PlistValue) -> Vec<u8> {
        self.writer.reset();
        self.offsets.clear();

        let total = object_count(root);
        // The root is excluded from the reference baseline.
        self.ref_width = min_byte_width((total - 1) as u64);

        self.writer.buf(MAGIC);
        self.write_object(root, 0);
        let table_end = self.writer.len();

        let max_offset = self.offsets.last().copied().unwrap_or(0);
        let offset_width = min_byte_width(max_offset as u64).next_power_of_two();
        let offsets = std::mem::take(&mut self.offsets);
        for off in offsets {
            self.writer.be_uint(off as u64, offset_width);
        }

        self.writer.buf(&[0u8; 6]);
        self.writer.u8(offset_width as u8);
        self.writer.u8(self.ref_width as u8);
        self.writer.u64(total as u64);
        self.writer.u64(0);
        self.writer.u64(table_end as u64);
        self.writer.flush()
    }

    /// Emits one object, then its children, keeping emission order equal to
    /// ascending reference order. `obj_ref` is the reference the caller
    /// assigned to this object; children derive theirs from it.
    fn write_object(&mut self, value: &PlistValue, obj_ref: usize) {
        self.offsets.push(self.writer.len());
        match value {
            PlistValue::Null => self.writer.u8(MARKER_NULL),
            PlistValue::Bool(true) => self.writer.u8(MARKER_TRUE),
            PlistValue::Bool(false) => self.writer.u8(MARKER_FALSE),
            PlistValue::Integer(i) => write_int_object(&mut self.writer, i64::from(*i)),
            PlistValue::Real(f) => write_real_object(&mut self.writer, *f),
            PlistValue::Date(dt) => {
                self.writer.u8(MARKER_DATE);
                self.writer.f64(epoch::to_apple_seconds(dt));
            }
            PlistValue::Bytes(data) => {
                write_sized_marker(&mut self.writer, MARKER_DATA, data.len());
                self.writer.buf(data);
            }
            PlistValue::String(s) => self.write_string_payload(s),
            PlistValue::Array(items) => {
                write_sized_marker(&mut self.writer, MARKER_ARRAY, items.len());
                let mut child = obj_ref + 1;
                let mut refs = Vec::with_capacity(items.len());
                for item in items {
                    refs.push(child);
                    child += object_count(item);
                }
                for &r in &refs {
                    self.writer.be_uint(r as u64, self.ref_width);
                }
                for (item, &r) in items.iter().zip(&refs) {
                    self.write_object(item, r);
                }
            }
            PlistValue::Dict(entries) => {
                write_sized_marker(&mut self.writer, MARKER_DICT, entries.len());
                // Keys take the references right after the dictionary, then
                // each value claims the next free reference plus room for
                // its own subtree.
                let first_value_ref = obj_ref + 1 + entries.len();
                let mut child = first_value_ref;
                let mut value_refs = Vec::with_capacity(entries.len());
                for (_, v) in entries {
                    value_refs.push(child);
                    child += object_count(v);
                }
                for key_ref in obj_ref + 1..first_value_ref {
                    self.writer.be_uint(key_ref as u64, self.ref_width);
                }
                for &r in &value_refs {
                    self.writer.be_uint(r as u64, self.ref_width);
                }
                for (key, _) in entries {
                    self.offsets.push(self.writer.len());
                    self.write_string_payload(key);
                }
                for ((_, v), &r) in entries.iter().zip(&value_refs) {
                    self.write_object(v, r);
                }
            }
        }
    }

    fn write_string_payload(&mut self, s: &str) {
        if s.is_ascii() {
            write_sized_marker(&mut self.writer, MARKER_ASCII_STRING, s.len());
            self.writer.buf(s.as_bytes());
        } else {
            let units: Vec<u16> = s.encode_utf16().collect();
            write_sized_marker(&mut self.writer, MARKER_UTF16_STRING, units.len());
            for unit in units {
                self.writer.be_uint(u64::from(unit), 2);
            }
        }
    }
}

/// Number of object-table slots a value occupies, children included.
///
/// A dictionary contributes itself, one slot per key, and its values'
/// subtrees; an array contributes itself and its items' subtrees.
pub fn object_count(value: &PlistValue) -> usize {
    match value {
        PlistValue::Array(items) => 1 + items.iter().map(object_count).sum::<usize>(),
        PlistValue::Dict(entries) => {
            1 + entries.len() + entries.iter().map(|(_, v)| object_count(v)).sum::<usize>()
        }
        _ => 1,
    }
}

/// Payload width for an integer: the smallest power of two whose signed
/// range holds the value. Negative values always take the full eight bytes
/// so the decoder can rely on sign extension there alone.
fn int_width(val: i64) -> usize {
    if val < 0 {
        8
    } else if val < 0x80 {
        1
    } else if val < 0x8000 {
        2
    } else if val < 0x8000_0000 {
        4
    } else {
        8
    }
}

fn write_int_object(w: &mut Writer, val: i64) {
    let width = int_width(val);
    w.u8(MARKER_INT | width.trailing_zeros() as u8);
    let bytes = val.to_be_bytes();
    w.buf(&bytes[8 - width..]);
}

fn write_real_object(w: &mut Writer, val: f64) {
    let trimmed = regulate(&val.to_be_bytes(), 4);
    let width = trimmed.len().next_power_of_two();
    w.u8(MARKER_REAL | width.trailing_zeros() as u8);
    w.buf(&regulate(&trimmed, width));
}

/// Writes a container/blob marker: the count rides in the low nibble when
/// it fits, otherwise the nibble is saturated and the count follows as an
/// integer object.
fn write_sized_marker(w: &mut Writer, marker: u8, count: usize) {
    if count < LENGTH_FOLLOWS as usize {
        w.u8(marker | count as u8);
    } else {
        w.u8(marker | LENGTH_FOLLOWS);
        write_int_object(w, count as i64);
    }
}
