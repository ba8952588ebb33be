//! [`DocValue`] — the dynamic, self-describing document tree.

/// Dynamic document value covering every kind the wire format represents.
///
/// A document is a rooted tree; object and array nodes own their children
/// exclusively, so there is no sharing and no cycles by construction.
/// Numbers are held in their canonical 64-bit forms: decoding widens any
/// narrower wire width into `Integer`, `UInteger` or `Float`.
#[derive(Debug, Clone, PartialEq)]
pub enum DocValue {
    /// JSON null.
    Null,
    /// Boolean value.
    Bool(bool),
    /// Signed integer.
    Integer(i64),
    /// Unsigned integer (used for values above `i64::MAX` and produced by
    /// decoding any non-negative integer width).
    UInteger(u64),
    /// Floating-point number.
    Float(f64),
    /// String.
    Str(String),
    /// Array of document values.
    Array(Vec<DocValue>),
    /// Object (ordered key-value pairs).
    Object(Vec<(String, DocValue)>),
}

impl From<serde_json::Value> for DocValue {
    fn from(v: serde_json::Value) -> Self {
        match v {
            serde_json::Value::Null => DocValue::Null,
            serde_json::Value::Bool(b) => DocValue::Bool(b),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    DocValue::Integer(i)
                } else if let Some(u) = n.as_u64() {
                    DocValue::UInteger(u)
                } else {
                    DocValue::Float(n.as_f64().unwrap_or(0.0))
                }
            }
            serde_json::Value::String(s) => DocValue::Str(s),
            serde_json::Value::Array(arr) => {
                DocValue::Array(arr.into_iter().map(DocValue::from).collect())
            }
            serde_json::Value::Object(obj) => DocValue::Object(
                obj.into_iter()
                    .map(|(k, v)| (k, DocValue::from(v)))
                    .collect(),
            ),
        }
    }
}

impl From<DocValue> for serde_json::Value {
    fn from(v: DocValue) -> Self {
        match v {
            DocValue::Null => serde_json::Value::Null,
            DocValue::Bool(b) => serde_json::Value::Bool(b),
            DocValue::Integer(i) => serde_json::json!(i),
            DocValue::UInteger(u) => serde_json::json!(u),
            // Non-finite floats have no JSON representation and map to null.
            DocValue::Float(f) => serde_json::Value::from(f),
            DocValue::Str(s) => serde_json::Value::String(s),
            DocValue::Array(arr) => {
                serde_json::Value::Array(arr.into_iter().map(serde_json::Value::from).collect())
            }
            DocValue::Object(obj) => serde_json::Value::Object(
                obj.into_iter()
                    .map(|(k, v)| (k, serde_json::Value::from(v)))
                    .collect(),
            ),
        }
    }
}
