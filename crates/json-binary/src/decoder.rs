//! `JsonBinaryDecoder` — recursive-descent reader.

use json_binary_buffers::Reader;

use crate::constants::{WireTag, DEPTH_LIMIT};
use crate::doc_value::DocValue;
use crate::error::JsonBinaryError;

/// Stateless json-binary decoder for dynamic document trees.
///
/// Dynamic mode accepts any defined tag and widens numeric payloads into
/// the canonical 64-bit representations; it never requires size-minimality
/// from the producer.
#[derive(Default)]
pub struct JsonBinaryDecoder;

impl JsonBinaryDecoder {
    pub fn new() -> Self {
        Self
    }

    /// Decodes one document value from the front of `input`.
    ///
    /// Trailing bytes after a complete root value are ignored.
    pub fn decode(&self, input: &[u8]) -> Result<DocValue, JsonBinaryError> {
        let mut reader = Reader::new(input);
        read_any(&mut reader, 0)
    }

    /// Decodes into a `serde_json::Value` tree.
    pub fn decode_json(&self, input: &[u8]) -> Result<serde_json::Value, JsonBinaryError> {
        Ok(serde_json::Value::from(self.decode(input)?))
    }
}

/// Reads one tag byte, mapping undefined codes to
/// [`JsonBinaryError::UnknownTag`].
pub(crate) fn read_tag(reader: &mut Reader<'_>) -> Result<WireTag, JsonBinaryError> {
    let byte = reader.u8()?;
    WireTag::from_u8(byte).ok_or(JsonBinaryError::UnknownTag(byte))
}

/// Reads the payload of a string unit whose tag has already been consumed.
pub(crate) fn read_str_payload(
    reader: &mut Reader<'_>,
    tag: WireTag,
) -> Result<String, JsonBinaryError> {
    let length = match tag {
        WireTag::String8 => reader.u8()? as usize,
        WireTag::String64 => reader.u64()? as usize,
        found => {
            return Err(JsonBinaryError::TagMismatch {
                expected: WireTag::String8,
                found,
            })
        }
    };
    Ok(reader.utf8(length)?.to_owned())
}

/// Reads an object key, which must be a string unit.
pub(crate) fn read_key(reader: &mut Reader<'_>) -> Result<String, JsonBinaryError> {
    let tag = read_tag(reader)?;
    match tag {
        WireTag::String8 | WireTag::String64 => read_str_payload(reader, tag),
        _ => Err(JsonBinaryError::KeyMustBeString),
    }
}

/// Recursive dynamic-mode descent.
pub(crate) fn read_any(reader: &mut Reader<'_>, depth: usize) -> Result<DocValue, JsonBinaryError> {
    let tag = read_tag(reader)?;
    match tag {
        WireTag::Object8 => {
            let count = reader.u8()? as usize;
            read_obj(reader, count, depth)
        }
        WireTag::Object64 => {
            let count = reader.u64()? as usize;
            read_obj(reader, count, depth)
        }
        WireTag::Array8 => {
            let count = reader.u8()? as usize;
            read_arr(reader, count, depth)
        }
        WireTag::Array64 => {
            let count = reader.u64()? as usize;
            read_arr(reader, count, depth)
        }
        WireTag::String8 | WireTag::String64 => Ok(DocValue::Str(read_str_payload(reader, tag)?)),
        WireTag::Null => Ok(DocValue::Null),
        WireTag::BoolTrue => Ok(DocValue::Bool(true)),
        WireTag::BoolFalse => Ok(DocValue::Bool(false)),
        WireTag::Float32 => Ok(DocValue::Float(reader.f32()? as f64)),
        WireTag::Float64 => Ok(DocValue::Float(reader.f64()?)),
        WireTag::Int8 => Ok(DocValue::Integer(reader.i8()? as i64)),
        WireTag::Int16 => Ok(DocValue::Integer(reader.i16()? as i64)),
        WireTag::Int32 => Ok(DocValue::Integer(reader.i32()? as i64)),
        WireTag::Int64 => Ok(DocValue::Integer(reader.i64()?)),
        WireTag::Uint8 => Ok(DocValue::UInteger(reader.u8()? as u64)),
        WireTag::Uint16 => Ok(DocValue::UInteger(reader.u16()? as u64)),
        WireTag::Uint32 => Ok(DocValue::UInteger(reader.u32()? as u64)),
        WireTag::Uint64 => Ok(DocValue::UInteger(reader.u64()?)),
    }
}

fn read_arr(
    reader: &mut Reader<'_>,
    count: usize,
    depth: usize,
) -> Result<DocValue, JsonBinaryError> {
    if depth >= DEPTH_LIMIT {
        return Err(JsonBinaryError::DepthExceeded);
    }
    let mut arr = Vec::new();
    for _ in 0..count {
        arr.push(read_any(reader, depth + 1)?);
    }
    Ok(DocValue::Array(arr))
}

fn read_obj(
    reader: &mut Reader<'_>,
    count: usize,
    depth: usize,
) -> Result<DocValue, JsonBinaryError> {
    if depth >= DEPTH_LIMIT {
        return Err(JsonBinaryError::DepthExceeded);
    }
    let mut obj = Vec::new();
    for _ in 0..count {
        let key = read_key(reader)?;
        let val = read_any(reader, depth + 1)?;
        obj.push((key, val));
    }
    Ok(DocValue::Object(obj))
}
