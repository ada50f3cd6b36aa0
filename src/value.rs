//! In-memory value model
//!
//! The closed set of value types the wire protocol can carry. Anything a
//! caller wants on the wire must first be expressed as a [`Value`]; types
//! outside this set are a compile-time-visible gap rather than a runtime
//! lookup miss.

use serde::{Deserialize, Serialize};

/// Type marker identifying a [`Document`] as a generic JSON document.
///
/// Documents carrying any other marker are domain composites that this
/// layer refuses to encode.
pub const JSON_DOCUMENT_TYPE: &str = "__json_document__";

// =============================================================================
// Document
// =============================================================================

/// A structured composite value: a type marker plus a JSON-like field map.
///
/// The composite subsystem that builds documents is an external collaborator;
/// this layer only inspects the marker to decide whether the document is a
/// generic JSON payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    type_name: String,
    body: serde_json::Map<String, serde_json::Value>,
}

impl Document {
    /// Create a generic JSON document
    pub fn json(body: serde_json::Map<String, serde_json::Value>) -> Self {
        Self {
            type_name: JSON_DOCUMENT_TYPE.to_string(),
            body,
        }
    }

    /// Create a document with an explicit type marker
    pub fn with_type(
        type_name: impl Into<String>,
        body: serde_json::Map<String, serde_json::Value>,
    ) -> Self {
        Self {
            type_name: type_name.into(),
            body,
        }
    }

    /// The document's type marker
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// Whether this document carries the generic JSON marker
    pub fn is_json_document(&self) -> bool {
        self.type_name == JSON_DOCUMENT_TYPE
    }

    /// The document's field map
    pub fn body(&self) -> &serde_json::Map<String, serde_json::Value> {
        &self.body
    }
}

// =============================================================================
// Value
// =============================================================================

/// A value supported by the wire protocol
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Signed 32-bit integer
    Int(i32),

    /// Signed byte
    Byte(i8),

    /// Signed 64-bit integer
    Long(i64),

    /// Single-precision float
    Float(f32),

    /// Signed 16-bit integer
    Short(i16),

    /// Raw byte sequence
    Binary(Vec<u8>),

    /// Double-precision float
    Double(f64),

    /// UTF-8 text
    Str(String),

    /// Boolean
    Boolean(bool),

    /// Structured composite (see [`Document`])
    Document(Document),
}

impl Value {
    /// Human-readable name of this value's runtime type, for error reporting.
    ///
    /// Documents report their type marker.
    pub fn type_name(&self) -> &str {
        match self {
            Value::Int(_) => "i32",
            Value::Byte(_) => "i8",
            Value::Long(_) => "i64",
            Value::Float(_) => "f32",
            Value::Short(_) => "i16",
            Value::Binary(_) => "binary",
            Value::Double(_) => "f64",
            Value::Str(_) => "string",
            Value::Boolean(_) => "bool",
            Value::Document(doc) => doc.type_name(),
        }
    }
}

// =============================================================================
// Conversions
// =============================================================================

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int(v)
    }
}

impl From<i8> for Value {
    fn from(v: i8) -> Self {
        Value::Byte(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Long(v)
    }
}

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Value::Float(v)
    }
}

impl From<i16> for Value {
    fn from(v: i16) -> Self {
        Value::Short(v)
    }
}

impl From<Vec<u8>> for Value {
    fn from(v: Vec<u8>) -> Self {
        Value::Binary(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Double(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Str(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Str(v.to_string())
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Boolean(v)
    }
}

impl From<Document> for Value {
    fn from(v: Document) -> Self {
        Value::Document(v)
    }
}
