//! Codec error type.

use json_binary_buffers::BufferError;
use thiserror::Error;

use crate::constants::WireTag;

/// Error type for json-binary encode/decode operations.
///
/// Every error aborts the whole call; there is no partial output and no
/// resynchronization.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum JsonBinaryError {
    /// Fewer bytes remain than a declared length or width requires.
    #[error("unexpected end of input")]
    TruncatedInput,
    /// A tag byte does not match any defined code.
    #[error("unknown wire tag: 0x{0:02x}")]
    UnknownTag(u8),
    /// An object entry's key position held a non-string value.
    #[error("object keys must be strings")]
    KeyMustBeString,
    /// Static-mode decode found a tag inconsistent with the requested type.
    #[error("expected tag {expected:?}, found {found:?}")]
    TagMismatch { expected: WireTag, found: WireTag },
    /// Container nesting exceeded the depth ceiling.
    #[error("container nesting deeper than 32 levels")]
    DepthExceeded,
    /// A value kind the wire format does not represent.
    #[error("value kind not representable in the wire format")]
    UnsupportedValue,
    /// A string payload is not valid UTF-8.
    #[error("invalid UTF-8 in string payload")]
    InvalidUtf8,
}

impl From<BufferError> for JsonBinaryError {
    fn from(err: BufferError) -> Self {
        match err {
            BufferError::EndOfBuffer => JsonBinaryError::TruncatedInput,
            BufferError::InvalidUtf8 => JsonBinaryError::InvalidUtf8,
        }
    }
}
