//! Type-directed codec: one `encode`/`decode` entry point over every
//! supported native shape.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};
use std::hash::Hash;

use json_binary_buffers::Reader;

use crate::constants::{WireTag, DEPTH_LIMIT};
use crate::decoder::{read_any, read_key, read_str_payload, read_tag};
use crate::doc_value::DocValue;
use crate::encoder::JsonBinaryEncoder;
use crate::error::JsonBinaryError;

/// Wire codec for a native value shape.
///
/// Primitive implementations follow the exact-width policy: the tag is
/// chosen by the declared type, never by runtime magnitude, and static
/// decode requires the stored tag to match the requested type. Container
/// implementations are generic over their element codec, so any nesting of
/// supported shapes composes.
pub trait Codec: Sized {
    /// Writes `self` as one tag + payload unit.
    fn write(&self, encoder: &mut JsonBinaryEncoder, depth: usize) -> Result<(), JsonBinaryError>;
    /// Reads one unit, requiring the tag implied by `Self`.
    fn read(reader: &mut Reader<'_>, depth: usize) -> Result<Self, JsonBinaryError>;
}

/// Encodes a native value to wire bytes under the exact-width policy.
pub fn encode<T: Codec>(value: &T) -> Result<Vec<u8>, JsonBinaryError> {
    let mut encoder = JsonBinaryEncoder::new();
    value.write(&mut encoder, 0)?;
    Ok(encoder.finish())
}

/// Decodes a native value from the front of `input`.
///
/// Trailing bytes after a complete root value are ignored.
pub fn decode<T: Codec>(input: &[u8]) -> Result<T, JsonBinaryError> {
    let mut reader = Reader::new(input);
    T::read(&mut reader, 0)
}

fn expect_tag(reader: &mut Reader<'_>, expected: WireTag) -> Result<(), JsonBinaryError> {
    let found = read_tag(reader)?;
    if found == expected {
        Ok(())
    } else {
        Err(JsonBinaryError::TagMismatch { expected, found })
    }
}

fn read_arr_count(reader: &mut Reader<'_>, depth: usize) -> Result<usize, JsonBinaryError> {
    if depth >= DEPTH_LIMIT {
        return Err(JsonBinaryError::DepthExceeded);
    }
    match read_tag(reader)? {
        WireTag::Array8 => Ok(reader.u8()? as usize),
        WireTag::Array64 => Ok(reader.u64()? as usize),
        found => Err(JsonBinaryError::TagMismatch {
            expected: WireTag::Array8,
            found,
        }),
    }
}

fn read_obj_count(reader: &mut Reader<'_>, depth: usize) -> Result<usize, JsonBinaryError> {
    if depth >= DEPTH_LIMIT {
        return Err(JsonBinaryError::DepthExceeded);
    }
    match read_tag(reader)? {
        WireTag::Object8 => Ok(reader.u8()? as usize),
        WireTag::Object64 => Ok(reader.u64()? as usize),
        found => Err(JsonBinaryError::TagMismatch {
            expected: WireTag::Object8,
            found,
        }),
    }
}

macro_rules! fixed_codec {
    ($ty:ty, $tag:expr, $write:ident, $read:ident) => {
        impl Codec for $ty {
            fn write(
                &self,
                encoder: &mut JsonBinaryEncoder,
                _depth: usize,
            ) -> Result<(), JsonBinaryError> {
                encoder.$write(*self);
                Ok(())
            }

            fn read(reader: &mut Reader<'_>, _depth: usize) -> Result<Self, JsonBinaryError> {
                expect_tag(reader, $tag)?;
                Ok(reader.$read()?)
            }
        }
    };
}

fixed_codec!(u8, WireTag::Uint8, write_u8, u8);
fixed_codec!(u16, WireTag::Uint16, write_u16, u16);
fixed_codec!(u32, WireTag::Uint32, write_u32, u32);
fixed_codec!(u64, WireTag::Uint64, write_u64, u64);
fixed_codec!(i8, WireTag::Int8, write_i8, i8);
fixed_codec!(i16, WireTag::Int16, write_i16, i16);
fixed_codec!(i32, WireTag::Int32, write_i32, i32);
fixed_codec!(i64, WireTag::Int64, write_i64, i64);
fixed_codec!(f32, WireTag::Float32, write_f32, f32);
fixed_codec!(f64, WireTag::Float64, write_f64, f64);

impl Codec for bool {
    fn write(&self, encoder: &mut JsonBinaryEncoder, _depth: usize) -> Result<(), JsonBinaryError> {
        encoder.write_boolean(*self);
        Ok(())
    }

    fn read(reader: &mut Reader<'_>, _depth: usize) -> Result<Self, JsonBinaryError> {
        match read_tag(reader)? {
            WireTag::BoolTrue => Ok(true),
            WireTag::BoolFalse => Ok(false),
            found => Err(JsonBinaryError::TagMismatch {
                expected: WireTag::BoolTrue,
                found,
            }),
        }
    }
}

impl Codec for String {
    fn write(&self, encoder: &mut JsonBinaryEncoder, _depth: usize) -> Result<(), JsonBinaryError> {
        encoder.write_str(self);
        Ok(())
    }

    fn read(reader: &mut Reader<'_>, _depth: usize) -> Result<Self, JsonBinaryError> {
        match read_tag(reader)? {
            tag @ (WireTag::String8 | WireTag::String64) => read_str_payload(reader, tag),
            found => Err(JsonBinaryError::TagMismatch {
                expected: WireTag::String8,
                found,
            }),
        }
    }
}

impl<T: Codec> Codec for Vec<T> {
    fn write(&self, encoder: &mut JsonBinaryEncoder, depth: usize) -> Result<(), JsonBinaryError> {
        if depth >= DEPTH_LIMIT {
            return Err(JsonBinaryError::DepthExceeded);
        }
        encoder.write_arr_header(self.len());
        for item in self {
            item.write(encoder, depth + 1)?;
        }
        Ok(())
    }

    fn read(reader: &mut Reader<'_>, depth: usize) -> Result<Self, JsonBinaryError> {
        let count = read_arr_count(reader, depth)?;
        let mut out = Vec::new();
        for _ in 0..count {
            out.push(T::read(reader, depth + 1)?);
        }
        Ok(out)
    }
}

impl<T: Codec + Ord> Codec for BTreeSet<T> {
    fn write(&self, encoder: &mut JsonBinaryEncoder, depth: usize) -> Result<(), JsonBinaryError> {
        if depth >= DEPTH_LIMIT {
            return Err(JsonBinaryError::DepthExceeded);
        }
        encoder.write_arr_header(self.len());
        for item in self {
            item.write(encoder, depth + 1)?;
        }
        Ok(())
    }

    fn read(reader: &mut Reader<'_>, depth: usize) -> Result<Self, JsonBinaryError> {
        let count = read_arr_count(reader, depth)?;
        let mut out = BTreeSet::new();
        for _ in 0..count {
            // Duplicate entries collapse silently on insert.
            out.insert(T::read(reader, depth + 1)?);
        }
        Ok(out)
    }
}

impl<T: Codec + Eq + Hash> Codec for HashSet<T> {
    fn write(&self, encoder: &mut JsonBinaryEncoder, depth: usize) -> Result<(), JsonBinaryError> {
        if depth >= DEPTH_LIMIT {
            return Err(JsonBinaryError::DepthExceeded);
        }
        encoder.write_arr_header(self.len());
        for item in self {
            item.write(encoder, depth + 1)?;
        }
        Ok(())
    }

    fn read(reader: &mut Reader<'_>, depth: usize) -> Result<Self, JsonBinaryError> {
        let count = read_arr_count(reader, depth)?;
        let mut out = HashSet::new();
        for _ in 0..count {
            out.insert(T::read(reader, depth + 1)?);
        }
        Ok(out)
    }
}

impl<V: Codec> Codec for BTreeMap<String, V> {
    fn write(&self, encoder: &mut JsonBinaryEncoder, depth: usize) -> Result<(), JsonBinaryError> {
        if depth >= DEPTH_LIMIT {
            return Err(JsonBinaryError::DepthExceeded);
        }
        encoder.write_obj_header(self.len());
        for (key, val) in self {
            encoder.write_str(key);
            val.write(encoder, depth + 1)?;
        }
        Ok(())
    }

    fn read(reader: &mut Reader<'_>, depth: usize) -> Result<Self, JsonBinaryError> {
        let count = read_obj_count(reader, depth)?;
        let mut out = BTreeMap::new();
        for _ in 0..count {
            let key = read_key(reader)?;
            let val = V::read(reader, depth + 1)?;
            out.insert(key, val);
        }
        Ok(out)
    }
}

impl<V: Codec> Codec for HashMap<String, V> {
    fn write(&self, encoder: &mut JsonBinaryEncoder, depth: usize) -> Result<(), JsonBinaryError> {
        if depth >= DEPTH_LIMIT {
            return Err(JsonBinaryError::DepthExceeded);
        }
        encoder.write_obj_header(self.len());
        for (key, val) in self {
            encoder.write_str(key);
            val.write(encoder, depth + 1)?;
        }
        Ok(())
    }

    fn read(reader: &mut Reader<'_>, depth: usize) -> Result<Self, JsonBinaryError> {
        let count = read_obj_count(reader, depth)?;
        let mut out = HashMap::new();
        for _ in 0..count {
            let key = read_key(reader)?;
            let val = V::read(reader, depth + 1)?;
            out.insert(key, val);
        }
        Ok(out)
    }
}

impl<T: Codec> Codec for Option<T> {
    /// An absent value writes NULL with no wrapper, so `None` and a present
    /// inner value that itself encodes as NULL are indistinguishable on the
    /// wire; decoding always resolves NULL to `None`.
    fn write(&self, encoder: &mut JsonBinaryEncoder, depth: usize) -> Result<(), JsonBinaryError> {
        match self {
            Some(value) => value.write(encoder, depth),
            None => {
                encoder.write_null();
                Ok(())
            }
        }
    }

    fn read(reader: &mut Reader<'_>, depth: usize) -> Result<Self, JsonBinaryError> {
        let byte = reader.peek()?;
        if byte == WireTag::Null as u8 {
            reader.u8()?;
            return Ok(None);
        }
        Ok(Some(T::read(reader, depth)?))
    }
}

impl Codec for DocValue {
    /// Dynamic documents nest inside typed containers; numbers use the
    /// minimal-width policy and widen back to the canonical 64-bit forms.
    fn write(&self, encoder: &mut JsonBinaryEncoder, depth: usize) -> Result<(), JsonBinaryError> {
        encoder.write_any(self, depth)
    }

    fn read(reader: &mut Reader<'_>, depth: usize) -> Result<Self, JsonBinaryError> {
        read_any(reader, depth)
    }
}
