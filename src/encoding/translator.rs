//! Type translation
//!
//! Maps between in-memory value types, on-wire tags, and the internal
//! serialization kinds the decode path dispatches on. Every mapping is an
//! exhaustive match over a closed enum, so widening any of the three
//! representations without updating the others fails to compile instead of
//! falling back to a guess at runtime.

use crate::error::{Result, WireError};
use crate::value::Value;

// =============================================================================
// Wire Tags
// =============================================================================

/// Protocol-level type identifier, one byte on the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum WireTag {
    Int = 0x01,
    Byte = 0x02,
    Long = 0x03,
    Float = 0x04,
    Short = 0x05,
    Binary = 0x06,
    Double = 0x07,
    Str = 0x08,
    Boolean = 0x09,
    Json = 0x0A,
}

impl WireTag {
    /// Parse a tag byte read off the wire.
    ///
    /// Invalid bytes are rejected here, at the protocol boundary, before
    /// any translation is attempted.
    pub fn from_byte(byte: u8) -> Result<WireTag> {
        match byte {
            0x01 => Ok(WireTag::Int),
            0x02 => Ok(WireTag::Byte),
            0x03 => Ok(WireTag::Long),
            0x04 => Ok(WireTag::Float),
            0x05 => Ok(WireTag::Short),
            0x06 => Ok(WireTag::Binary),
            0x07 => Ok(WireTag::Double),
            0x08 => Ok(WireTag::Str),
            0x09 => Ok(WireTag::Boolean),
            0x0A => Ok(WireTag::Json),
            _ => Err(WireError::Protocol(format!(
                "Unknown wire tag: 0x{:02x}",
                byte
            ))),
        }
    }

    /// The tag's on-wire byte
    pub fn as_byte(self) -> u8 {
        self as u8
    }
}

// =============================================================================
// Serialization Kinds
// =============================================================================

/// Internal classification used to select a decoder/encoder implementation.
///
/// Mirrors [`WireTag`] one-to-one, except that `Json` resolves to the
/// distinct [`SerializationKind::JsonDocument`] composite kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SerializationKind {
    Int,
    Byte,
    Long,
    Float,
    Short,
    Binary,
    Double,
    Str,
    Boolean,
    JsonDocument,
}

// =============================================================================
// TypeTranslator
// =============================================================================

/// Stateless translator between the three type representations.
///
/// Holds no mutable state; construct one at startup and share it by
/// reference across any number of threads. Both operations are pure.
#[derive(Debug, Clone, Copy, Default)]
pub struct TypeTranslator;

impl TypeTranslator {
    /// Create a translator
    pub fn new() -> Self {
        TypeTranslator
    }

    /// Resolve the wire tag for an outbound value.
    ///
    /// Every primitive variant maps to exactly one tag. Documents resolve
    /// to [`WireTag::Json`] only when they carry the generic JSON marker;
    /// any other marker is an [`WireError::UnsupportedEncodingType`] — an
    /// unrecognized type is rejected, never silently miscategorized.
    pub fn wire_tag_for(&self, value: &Value) -> Result<WireTag> {
        match value {
            Value::Int(_) => Ok(WireTag::Int),
            Value::Byte(_) => Ok(WireTag::Byte),
            Value::Long(_) => Ok(WireTag::Long),
            Value::Float(_) => Ok(WireTag::Float),
            Value::Short(_) => Ok(WireTag::Short),
            Value::Binary(_) => Ok(WireTag::Binary),
            Value::Double(_) => Ok(WireTag::Double),
            Value::Str(_) => Ok(WireTag::Str),
            Value::Boolean(_) => Ok(WireTag::Boolean),
            Value::Document(doc) => {
                if doc.is_json_document() {
                    Ok(WireTag::Json)
                } else {
                    Err(WireError::UnsupportedEncodingType(format!(
                        "cannot translate document type `{}` into a wire encoding",
                        doc.type_name()
                    )))
                }
            }
        }
    }

    /// Resolve the serialization kind for an inbound wire tag.
    ///
    /// Total over the tag enumeration: the match has one arm per variant
    /// and no default, so an unhandled tag is a compile error.
    pub fn serialization_kind_for(&self, tag: WireTag) -> SerializationKind {
        match tag {
            WireTag::Int => SerializationKind::Int,
            WireTag::Byte => SerializationKind::Byte,
            WireTag::Long => SerializationKind::Long,
            WireTag::Float => SerializationKind::Float,
            WireTag::Short => SerializationKind::Short,
            WireTag::Binary => SerializationKind::Binary,
            WireTag::Double => SerializationKind::Double,
            WireTag::Str => SerializationKind::Str,
            WireTag::Boolean => SerializationKind::Boolean,
            WireTag::Json => SerializationKind::JsonDocument,
        }
    }
}
