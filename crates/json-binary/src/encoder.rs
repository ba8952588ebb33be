//! `JsonBinaryEncoder` — recursive tag + payload writer.

use json_binary_buffers::Writer;

use crate::constants::{WireTag, DEPTH_LIMIT};
use crate::doc_value::DocValue;
use crate::error::JsonBinaryError;

/// Recursive writer producing json-binary wire bytes.
///
/// Dynamic [`DocValue`] trees are encoded under the minimal-width policy:
/// integers take the narrowest tag that losslessly holds the runtime value
/// and floats are always FLOAT_64. The exact-width `write_*` primitives
/// serve the typed codec path, where the tag is chosen by the declared type
/// regardless of magnitude.
pub struct JsonBinaryEncoder {
    writer: Writer,
}

impl Default for JsonBinaryEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl JsonBinaryEncoder {
    pub fn new() -> Self {
        Self {
            writer: Writer::new(),
        }
    }

    /// Encodes a dynamic document tree under the minimal-width policy.
    ///
    /// Fails with [`JsonBinaryError::DepthExceeded`] when container nesting
    /// passes 32 levels; nothing of the offending subtree is emitted and no
    /// partial output is returned.
    pub fn encode(&mut self, value: &DocValue) -> Result<Vec<u8>, JsonBinaryError> {
        self.writer = Writer::new();
        self.write_any(value, 0)?;
        Ok(self.finish())
    }

    /// Encodes a `serde_json::Value` tree directly.
    pub fn encode_json(&mut self, value: &serde_json::Value) -> Result<Vec<u8>, JsonBinaryError> {
        self.writer = Writer::new();
        self.write_json(value, 0)?;
        Ok(self.finish())
    }

    /// Takes the accumulated wire bytes, leaving a fresh sink behind.
    pub(crate) fn finish(&mut self) -> Vec<u8> {
        std::mem::take(&mut self.writer).finish()
    }

    #[inline]
    fn tag(&mut self, tag: WireTag) {
        self.writer.u8(tag as u8);
    }

    /// Recursive dispatch over the document value kinds.
    pub fn write_any(&mut self, value: &DocValue, depth: usize) -> Result<(), JsonBinaryError> {
        match value {
            DocValue::Null => self.write_null(),
            DocValue::Bool(b) => self.write_boolean(*b),
            DocValue::Integer(i) => self.write_integer(*i),
            DocValue::UInteger(u) => self.write_u_integer(*u),
            DocValue::Float(f) => self.write_float(*f),
            DocValue::Str(s) => self.write_str(s),
            DocValue::Array(arr) => {
                if depth >= DEPTH_LIMIT {
                    return Err(JsonBinaryError::DepthExceeded);
                }
                self.write_arr_header(arr.len());
                for item in arr {
                    self.write_any(item, depth + 1)?;
                }
            }
            DocValue::Object(obj) => {
                if depth >= DEPTH_LIMIT {
                    return Err(JsonBinaryError::DepthExceeded);
                }
                self.write_obj_header(obj.len());
                for (key, val) in obj {
                    self.write_str(key);
                    self.write_any(val, depth + 1)?;
                }
            }
        }
        Ok(())
    }

    /// Same dispatch for `serde_json::Value` trees.
    pub fn write_json(&mut self, value: &serde_json::Value, depth: usize) -> Result<(), JsonBinaryError> {
        match value {
            serde_json::Value::Null => self.write_null(),
            serde_json::Value::Bool(b) => self.write_boolean(*b),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    self.write_integer(i);
                } else if let Some(u) = n.as_u64() {
                    self.write_u_integer(u);
                } else if let Some(f) = n.as_f64() {
                    self.write_float(f);
                } else {
                    return Err(JsonBinaryError::UnsupportedValue);
                }
            }
            serde_json::Value::String(s) => self.write_str(s),
            serde_json::Value::Array(arr) => {
                if depth >= DEPTH_LIMIT {
                    return Err(JsonBinaryError::DepthExceeded);
                }
                self.write_arr_header(arr.len());
                for item in arr {
                    self.write_json(item, depth + 1)?;
                }
            }
            serde_json::Value::Object(obj) => {
                if depth >= DEPTH_LIMIT {
                    return Err(JsonBinaryError::DepthExceeded);
                }
                self.write_obj_header(obj.len());
                for (key, val) in obj {
                    self.write_str(key);
                    self.write_json(val, depth + 1)?;
                }
            }
        }
        Ok(())
    }

    pub fn write_null(&mut self) {
        self.tag(WireTag::Null);
    }

    pub fn write_boolean(&mut self, b: bool) {
        self.tag(if b {
            WireTag::BoolTrue
        } else {
            WireTag::BoolFalse
        });
    }

    /// Minimal-width integer: sign class by value, width by magnitude.
    /// Non-negative values take the unsigned tags.
    pub fn write_integer(&mut self, int: i64) {
        if int >= 0 {
            self.write_u_integer(int as u64);
        } else if int >= -128 {
            self.tag(WireTag::Int8);
            self.writer.i8(int as i8);
        } else if int >= -32768 {
            self.tag(WireTag::Int16);
            self.writer.i16(int as i16);
        } else if int >= -2147483648 {
            self.tag(WireTag::Int32);
            self.writer.i32(int as i32);
        } else {
            self.tag(WireTag::Int64);
            self.writer.i64(int);
        }
    }

    /// Minimal-width unsigned integer.
    pub fn write_u_integer(&mut self, uint: u64) {
        if uint <= 0xff {
            self.tag(WireTag::Uint8);
            self.writer.u8(uint as u8);
        } else if uint <= 0xffff {
            self.tag(WireTag::Uint16);
            self.writer.u16(uint as u16);
        } else if uint <= 0xffff_ffff {
            self.tag(WireTag::Uint32);
            self.writer.u32(uint as u32);
        } else {
            self.tag(WireTag::Uint64);
            self.writer.u64(uint);
        }
    }

    /// Dynamic floats are always written as FLOAT_64.
    pub fn write_float(&mut self, float: f64) {
        self.write_f64(float);
    }

    /// String unit: length is measured in bytes, not code points.
    pub fn write_str(&mut self, s: &str) {
        let length = s.len();
        if length <= 0xff {
            self.tag(WireTag::String8);
            self.writer.u8(length as u8);
        } else {
            self.tag(WireTag::String64);
            self.writer.u64(length as u64);
        }
        self.writer.utf8(s);
    }

    /// Array header under the 8/64 count threshold rule.
    pub fn write_arr_header(&mut self, length: usize) {
        if length <= 0xff {
            self.tag(WireTag::Array8);
            self.writer.u8(length as u8);
        } else {
            self.tag(WireTag::Array64);
            self.writer.u64(length as u64);
        }
    }

    /// Object header under the 8/64 count threshold rule.
    pub fn write_obj_header(&mut self, length: usize) {
        if length <= 0xff {
            self.tag(WireTag::Object8);
            self.writer.u8(length as u8);
        } else {
            self.tag(WireTag::Object64);
            self.writer.u64(length as u64);
        }
    }

    // ---- Exact-width primitives (typed codec path) ----

    pub fn write_u8(&mut self, val: u8) {
        self.tag(WireTag::Uint8);
        self.writer.u8(val);
    }

    pub fn write_u16(&mut self, val: u16) {
        self.tag(WireTag::Uint16);
        self.writer.u16(val);
    }

    pub fn write_u32(&mut self, val: u32) {
        self.tag(WireTag::Uint32);
        self.writer.u32(val);
    }

    pub fn write_u64(&mut self, val: u64) {
        self.tag(WireTag::Uint64);
        self.writer.u64(val);
    }

    pub fn write_i8(&mut self, val: i8) {
        self.tag(WireTag::Int8);
        self.writer.i8(val);
    }

    pub fn write_i16(&mut self, val: i16) {
        self.tag(WireTag::Int16);
        self.writer.i16(val);
    }

    pub fn write_i32(&mut self, val: i32) {
        self.tag(WireTag::Int32);
        self.writer.i32(val);
    }

    pub fn write_i64(&mut self, val: i64) {
        self.tag(WireTag::Int64);
        self.writer.i64(val);
    }

    pub fn write_f32(&mut self, val: f32) {
        self.tag(WireTag::Float32);
        self.writer.f32(val);
    }

    pub fn write_f64(&mut self, val: f64) {
        self.tag(WireTag::Float64);
        self.writer.f64(val);
    }
}
