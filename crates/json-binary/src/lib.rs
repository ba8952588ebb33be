//! Compact tagged binary wire format for JSON-shaped values.
//!
//! Every encoded unit is one tag byte followed by a shape-determined
//! payload; all multi-byte values are little-endian. Two entry points share
//! the same wire format:
//!
//! - the dynamic path ([`JsonBinaryEncoder`] / [`JsonBinaryDecoder`])
//!   serializes self-describing [`DocValue`] trees, picking the narrowest
//!   integer tag that holds each runtime value;
//! - the typed path ([`encode`] / [`decode`] over the [`Codec`] trait)
//!   serializes native Rust values, picking the tag implied by the declared
//!   type so that decode can reject schema drift with a tag check.
//!
//! Container nesting is capped at 32 levels on both encode and decode.

mod codec;
mod constants;
mod decoder;
mod doc_value;
mod encoder;
mod error;
mod typed;

pub use codec::JsonBinaryCodec;
pub use constants::{WireTag, DEPTH_LIMIT};
pub use decoder::JsonBinaryDecoder;
pub use doc_value::DocValue;
pub use encoder::JsonBinaryEncoder;
pub use error::JsonBinaryError;
pub use typed::{decode, encode, Codec};
