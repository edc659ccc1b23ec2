//! Binary buffer utilities for plist-pack.
//!
//! This crate provides the buffer plumbing the binary plist codec is built
//! on: a checked cursor reader over a byte slice and an auto-growing
//! big-endian writer.
//!
//! # Overview
//!
//! - [`Reader`] - Reads binary data from a byte slice with cursor tracking;
//!   every read is bounds checked and returns `None` on a short buffer
//! - [`Writer`] - Writes big-endian binary data to an auto-growing buffer
//!
//! # Example
//!
//! ```
//! use plist_buffers::{Reader, Writer};
//!
//! // Write some data
//! let mut writer = Writer::new();
//! writer.u8(0x01);
//! writer.be_uint(0x0203, 2);
//! writer.buf(b"hello");
//! let data = writer.flush();
//!
//! // Read it back
//! let mut reader = Reader::new(&data);
//! assert_eq!(reader.try_u8(), Some(0x01));
//! assert_eq!(reader.try_be_uint(2), Some(0x0203));
//! assert_eq!(reader.try_buf(5), Some(b"hello".as_slice()));
//! assert_eq!(reader.try_u8(), None);
//! ```

mod reader;
mod writer;

pub use reader::Reader;
pub use writer::Writer;
