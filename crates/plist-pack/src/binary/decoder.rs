//! `bplist00` decoder.

use plist_buffers::Reader;

use super::constants::*;
use super::error::BinaryError;
use super::regulate::regulate;
use crate::epoch;
use crate::value::PlistValue;

/// Binary plist decoder.
///
/// The decoder value itself is stateless: every call builds its own
/// call-local context (offset table, widths, object-table view), so a
/// single decoder can be shared freely across calls and threads.
pub struct BinaryPlistDecoder;

impl Default for BinaryPlistDecoder {
    fn default() -> Self {
        Self::new()
    }
}

impl BinaryPlistDecoder {
    pub fn new() -> Self {
        Self
    }

    /// Decodes a complete `bplist00` document into a value tree.
    pub fn decode(&self, data: &[u8]) -> Result<PlistValue, BinaryError> {
        let ctx = DecodeCtx::prepare(data)?;
        ctx.parse_object(0)
    }
}

/// Per-call decoding state: the object-table view and the parsed tables.
struct DecodeCtx<'a> {
    /// Document bytes up to the offset table; offsets index into this.
    table: &'a [u8],
    offsets: Vec<usize>,
    ref_width: usize,
}

impl<'a> DecodeCtx<'a> {
    fn prepare(data: &'a [u8]) -> Result<Self, BinaryError> {
        if data.len() < MIN_FILE_SIZE {
            return Err(BinaryError::Truncated(data.len()));
        }
        if &data[..MAGIC.len()] != MAGIC {
            return Err(BinaryError::BadMagic);
        }

        let trailer = &data[data.len() - TRAILER_SIZE..];
        let offset_width = trailer[6] as usize;
        let ref_width = trailer[7] as usize;
        if offset_width == 0 || offset_width > 8 {
            return Err(BinaryError::BadOffsetWidth(trailer[6]));
        }
        if ref_width == 0 || ref_width > 8 {
            return Err(BinaryError::BadReferenceWidth(trailer[7]));
        }

        let mut tr = Reader::from_slice(trailer, 8, TRAILER_SIZE);
        let object_count = tr.try_be_uint(8).ok_or(BinaryError::UnexpectedEof)?;
        let _top_ref = tr.try_be_uint(8).ok_or(BinaryError::UnexpectedEof)?;
        let table_start = tr.try_be_uint(8).ok_or(BinaryError::UnexpectedEof)?;

        let count = usize::try_from(object_count).map_err(|_| BinaryError::BadOffsetTable)?;
        let table_start =
            usize::try_from(table_start).map_err(|_| BinaryError::BadOffsetTable)?;
        let table_bytes = count
            .checked_mul(offset_width)
            .ok_or(BinaryError::BadOffsetTable)?;
        let body_end = data.len() - TRAILER_SIZE;
        if table_start < MAGIC.len()
            || table_start
                .checked_add(table_bytes)
                .map_or(true, |end| end > body_end)
        {
            return Err(BinaryError::BadOffsetTable);
        }

        let mut offsets = Vec::with_capacity(count);
        let mut r = Reader::from_slice(data, table_start, table_start + table_bytes);
        for _ in 0..count {
            let off = r
                .try_be_uint(offset_width)
                .ok_or(BinaryError::UnexpectedEof)? as usize;
            if off < MAGIC.len() || off >= table_start {
                return Err(BinaryError::BadOffset(off));
            }
            offsets.push(off);
        }

        Ok(Self {
            table: &data[..table_start],
            offsets,
            ref_width,
        })
    }

    /// Resolves one object reference, recursing into container children.
    fn parse_object(&self, obj_ref: usize) -> Result<PlistValue, BinaryError> {
        let offset = *self
            .offsets
            .get(obj_ref)
            .ok_or(BinaryError::BadReference(obj_ref))?;
        let mut r = Reader::from_slice(self.table, offset, self.table.len());
        let marker = r.try_u8().ok_or(BinaryError::UnexpectedEof)?;

        match marker & 0xF0 {
            0x00 => match marker {
                MARKER_NULL => Ok(PlistValue::Null),
                MARKER_FALSE => Ok(PlistValue::Bool(false)),
                MARKER_TRUE => Ok(PlistValue::Bool(true)),
                _ => Err(BinaryError::UnsupportedMarker(marker)),
            },
            MARKER_INT => {
                let val = read_int_body(&mut r, marker)?;
                i32::try_from(val)
                    .map(PlistValue::Integer)
                    .map_err(|_| BinaryError::IntegerOutOfRange)
            }
            MARKER_REAL => {
                let width = 1usize << (marker & 0x0F);
                if width > 8 {
                    return Err(BinaryError::UnsupportedMarker(marker));
                }
                let payload = r.try_buf(width).ok_or(BinaryError::UnexpectedEof)?;
                let padded = regulate(payload, 8);
                let mut bytes = [0u8; 8];
                bytes.copy_from_slice(&padded);
                Ok(PlistValue::Real(f64::from_be_bytes(bytes)))
            }
            0x30 => {
                if marker != MARKER_DATE {
                    return Err(BinaryError::UnsupportedMarker(marker));
                }
                let seconds = r.try_f64().ok_or(BinaryError::UnexpectedEof)?;
                epoch::from_apple_seconds(seconds)
                    .map(PlistValue::Date)
                    .ok_or(BinaryError::DateOutOfRange)
            }
            MARKER_DATA => {
                let count = read_count(&mut r, marker)?;
                let payload = r.try_buf(count).ok_or(BinaryError::UnexpectedEof)?;
                Ok(PlistValue::Bytes(payload.to_vec()))
            }
            MARKER_ASCII_STRING => {
                let count = read_count(&mut r, marker)?;
                let payload = r.try_buf(count).ok_or(BinaryError::UnexpectedEof)?;
                if !payload.is_ascii() {
                    return Err(BinaryError::NonAsciiString);
                }
                Ok(PlistValue::String(
                    payload.iter().map(|&b| b as char).collect(),
                ))
            }
            MARKER_UTF16_STRING => {
                let count = read_count(&mut r, marker)?;
                let byte_len = count.checked_mul(2).ok_or(BinaryError::BadLength)?;
                let payload = r.try_buf(byte_len).ok_or(BinaryError::UnexpectedEof)?;
                let units: Vec<u16> = payload
                    .chunks_exact(2)
                    .map(|pair| u16::from_be_bytes([pair[0], pair[1]]))
                    .collect();
                String::from_utf16(&units)
                    .map(PlistValue::String)
                    .map_err(|_| BinaryError::BadUtf16)
            }
            MARKER_ARRAY => {
                let count = read_count(&mut r, marker)?;
                let refs = self.read_refs(&mut r, count)?;
                let mut items = Vec::with_capacity(count);
                for item_ref in refs {
                    items.push(self.parse_object(item_ref)?);
                }
                Ok(PlistValue::Array(items))
            }
            MARKER_DICT => {
                let count = read_count(&mut r, marker)?;
                let key_refs = self.read_refs(&mut r, count)?;
                let value_refs = self.read_refs(&mut r, count)?;
                let mut entries: Vec<(String, PlistValue)> = Vec::with_capacity(count);
                for (key_ref, value_ref) in key_refs.into_iter().zip(value_refs) {
                    let key = match self.parse_object(key_ref)? {
                        PlistValue::String(s) => s,
                        _ => return Err(BinaryError::NonStringKey),
                    };
                    if entries.iter().any(|(k, _)| *k == key) {
                        return Err(BinaryError::DuplicateKey(key));
                    }
                    let value = self.parse_object(value_ref)?;
                    entries.push((key, value));
                }
                Ok(PlistValue::Dict(entries))
            }
            _ => Err(BinaryError::UnsupportedMarker(marker)),
        }
    }

    fn read_refs(&self, r: &mut Reader, count: usize) -> Result<Vec<usize>, BinaryError> {
        let mut refs = Vec::with_capacity(count);
        for _ in 0..count {
            let obj_ref = r
                .try_be_uint(self.ref_width)
                .ok_or(BinaryError::UnexpectedEof)? as usize;
            refs.push(obj_ref);
        }
        Ok(refs)
    }
}

/// Reads a container/blob element count: the marker's low nibble, or a
/// following integer object when the nibble is saturated. The cursor ends
/// up past the count, at the element data.
fn read_count(r: &mut Reader, marker: u8) -> Result<usize, BinaryError> {
    let low = marker & 0x0F;
    if low < LENGTH_FOLLOWS {
        return Ok(low as usize);
    }
    let int_marker = r.try_u8().ok_or(BinaryError::UnexpectedEof)?;
    if int_marker & 0xF0 != MARKER_INT {
        return Err(BinaryError::BadLength);
    }
    let val = read_int_body(r, int_marker)?;
    usize::try_from(val).map_err(|_| BinaryError::BadLength)
}

/// Reads an integer object body. Payloads shorter than eight bytes are
/// zero-extended; the full eight-byte form carries the sign.
fn read_int_body(r: &mut Reader, marker: u8) -> Result<i64, BinaryError> {
    let nibble = marker & 0x0F;
    if nibble > 3 {
        return Err(BinaryError::UnsupportedMarker(marker));
    }
    let width = 1usize << nibble;
    let raw = r.try_be_uint(width).ok_or(BinaryError::UnexpectedEof)?;
    Ok(raw as i64)
}
