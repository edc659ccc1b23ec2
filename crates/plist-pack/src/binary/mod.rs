//! Binary property-list (`bplist00`) encoding/decoding.
//!
//! The wire layout is: 8-byte magic, object table, offset table, 32-byte
//! trailer. Objects carry variable-width headers and refer to each other
//! through indices into the offset table.

mod constants;
mod decoder;
mod encoder;
mod error;
mod regulate;

pub use constants::MAGIC;
pub use decoder::BinaryPlistDecoder;
pub use encoder::{object_count, BinaryPlistEncoder};
pub use error::BinaryError;
pub use regulate::{min_byte_width, regulate};
