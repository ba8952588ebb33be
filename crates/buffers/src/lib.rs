//! Byte-level primitives for the json-binary wire format.
//!
//! [`Writer`] is a growable, append-only byte sink; [`Reader`] is a
//! bounds-checked, forward-only cursor over an immutable byte slice. All
//! multi-byte values are written and read little-endian, matching the wire
//! contract of the `json-binary` crate.

mod error;
mod reader;
mod writer;

pub use error::BufferError;
pub use reader::Reader;
pub use writer::Writer;
