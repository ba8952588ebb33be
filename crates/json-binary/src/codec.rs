//! `JsonBinaryCodec` — combined encoder/decoder pair.

use crate::decoder::JsonBinaryDecoder;
use crate::doc_value::DocValue;
use crate::encoder::JsonBinaryEncoder;
use crate::error::JsonBinaryError;

/// Combined encoder/decoder pair for dynamic document trees, with
/// `serde_json::Value` boundary adapters.
#[derive(Default)]
pub struct JsonBinaryCodec {
    encoder: JsonBinaryEncoder,
    decoder: JsonBinaryDecoder,
}

impl JsonBinaryCodec {
    pub fn new() -> Self {
        Self {
            encoder: JsonBinaryEncoder::new(),
            decoder: JsonBinaryDecoder::new(),
        }
    }

    /// Encodes a dynamic document tree under the minimal-width policy.
    pub fn encode(&mut self, value: &DocValue) -> Result<Vec<u8>, JsonBinaryError> {
        self.encoder.encode(value)
    }

    /// Decodes one document value from `bytes`.
    pub fn decode(&self, bytes: &[u8]) -> Result<DocValue, JsonBinaryError> {
        self.decoder.decode(bytes)
    }

    /// Encodes a `serde_json::Value` tree directly.
    pub fn encode_json(&mut self, value: &serde_json::Value) -> Result<Vec<u8>, JsonBinaryError> {
        self.encoder.encode_json(value)
    }

    /// Decodes into a `serde_json::Value` tree.
    pub fn decode_json(&self, bytes: &[u8]) -> Result<serde_json::Value, JsonBinaryError> {
        self.decoder.decode_json(bytes)
    }
}
