//! Value codec
//!
//! Encoding and decoding of single typed values.
//!
//! ## Wire Format
//!
//! ```text
//! ┌──────────┬──────────┬─────────────────────────────┐
//! │ Tag (1)  │ Len (4)  │         Payload             │
//! └──────────┴──────────┴─────────────────────────────┘
//! ```
//!
//! The tag byte selects the payload layout (see the module docs in
//! [`crate::encoding`]). Decoding resolves the tag to a
//! [`SerializationKind`](crate::encoding::SerializationKind) and dispatches
//! to the matching deserializer.

use std::io::{Read, Write};

use crate::error::{Result, WireError};
use crate::value::{Document, Value};

use super::{SerializationKind, TypeTranslator, WireTag};

/// Header size: 1 byte tag + 4 bytes payload length
pub const VALUE_HEADER_SIZE: usize = 5;

/// Maximum value payload size (16 MB)
pub const MAX_VALUE_PAYLOAD_SIZE: u32 = 16 * 1024 * 1024;

// =============================================================================
// Encoding
// =============================================================================

/// Encode a value to bytes
///
/// Format: tag (1) + payload_len (4) + payload
pub fn encode_value(translator: &TypeTranslator, value: &Value) -> Result<Vec<u8>> {
    let tag = translator.wire_tag_for(value)?;

    let payload = match value {
        Value::Int(v) => v.to_be_bytes().to_vec(),
        Value::Byte(v) => v.to_be_bytes().to_vec(),
        Value::Long(v) => v.to_be_bytes().to_vec(),
        Value::Float(v) => v.to_be_bytes().to_vec(),
        Value::Short(v) => v.to_be_bytes().to_vec(),
        Value::Binary(bytes) => bytes.clone(),
        Value::Double(v) => v.to_be_bytes().to_vec(),
        Value::Str(s) => s.as_bytes().to_vec(),
        Value::Boolean(v) => vec![u8::from(*v)],
        Value::Document(doc) => serde_json::to_vec(doc.body())?,
    };

    if payload.len() > MAX_VALUE_PAYLOAD_SIZE as usize {
        return Err(WireError::Protocol(format!(
            "Value payload too large: {} bytes (max {})",
            payload.len(),
            MAX_VALUE_PAYLOAD_SIZE
        )));
    }

    let mut message = Vec::with_capacity(VALUE_HEADER_SIZE + payload.len());
    message.push(tag.as_byte());
    message.extend_from_slice(&(payload.len() as u32).to_be_bytes());
    message.extend_from_slice(&payload);

    Ok(message)
}

// =============================================================================
// Decoding
// =============================================================================

/// Decode a value from bytes
///
/// Returns the value and the number of bytes consumed. The tag byte is
/// validated before any translation; the resolved serialization kind then
/// selects the deserializer.
pub fn decode_value(translator: &TypeTranslator, bytes: &[u8]) -> Result<(Value, usize)> {
    if bytes.len() < VALUE_HEADER_SIZE {
        return Err(WireError::Protocol(format!(
            "Incomplete value header: expected {} bytes, got {}",
            VALUE_HEADER_SIZE,
            bytes.len()
        )));
    }

    let tag = WireTag::from_byte(bytes[0])?;
    let payload_len = u32::from_be_bytes([bytes[1], bytes[2], bytes[3], bytes[4]]) as usize;

    if payload_len > MAX_VALUE_PAYLOAD_SIZE as usize {
        return Err(WireError::Protocol(format!(
            "Value payload too large: {} bytes (max {})",
            payload_len, MAX_VALUE_PAYLOAD_SIZE
        )));
    }

    let total_len = VALUE_HEADER_SIZE + payload_len;
    if bytes.len() < total_len {
        return Err(WireError::Protocol(format!(
            "Incomplete value payload: expected {} bytes, got {}",
            total_len,
            bytes.len()
        )));
    }

    let payload = &bytes[VALUE_HEADER_SIZE..total_len];

    let value = match translator.serialization_kind_for(tag) {
        SerializationKind::Int => Value::Int(i32::from_be_bytes(fixed_payload(tag, payload)?)),
        SerializationKind::Byte => Value::Byte(i8::from_be_bytes(fixed_payload(tag, payload)?)),
        SerializationKind::Long => Value::Long(i64::from_be_bytes(fixed_payload(tag, payload)?)),
        SerializationKind::Float => Value::Float(f32::from_be_bytes(fixed_payload(tag, payload)?)),
        SerializationKind::Short => Value::Short(i16::from_be_bytes(fixed_payload(tag, payload)?)),
        SerializationKind::Binary => Value::Binary(payload.to_vec()),
        SerializationKind::Double => {
            Value::Double(f64::from_be_bytes(fixed_payload(tag, payload)?))
        }
        SerializationKind::Str => {
            let text = String::from_utf8(payload.to_vec()).map_err(|e| {
                WireError::Protocol(format!("STRING payload is not valid UTF-8: {}", e))
            })?;
            Value::Str(text)
        }
        SerializationKind::Boolean => match payload {
            [0x00] => Value::Boolean(false),
            [0x01] => Value::Boolean(true),
            _ => {
                return Err(WireError::Protocol(format!(
                    "Invalid BOOLEAN payload: {} bytes",
                    payload.len()
                )))
            }
        },
        SerializationKind::JsonDocument => {
            let body: serde_json::Map<String, serde_json::Value> =
                serde_json::from_slice(payload)?;
            Value::Document(Document::json(body))
        }
    };

    Ok((value, total_len))
}

/// Extract a fixed-width payload, rejecting length mismatches
fn fixed_payload<const N: usize>(tag: WireTag, payload: &[u8]) -> Result<[u8; N]> {
    payload.try_into().map_err(|_| {
        WireError::Protocol(format!(
            "Invalid payload for tag 0x{:02x}: expected {} bytes, got {}",
            tag.as_byte(),
            N,
            payload.len()
        ))
    })
}

// =============================================================================
// Stream-based I/O helpers
// =============================================================================

/// Read a complete value from a stream
///
/// Blocks until a complete value is received or an error occurs
pub fn read_value<R: Read>(translator: &TypeTranslator, reader: &mut R) -> Result<Value> {
    let mut header = [0u8; VALUE_HEADER_SIZE];
    reader.read_exact(&mut header)?;

    let payload_len = u32::from_be_bytes([header[1], header[2], header[3], header[4]]) as usize;

    if payload_len > MAX_VALUE_PAYLOAD_SIZE as usize {
        return Err(WireError::Protocol(format!(
            "Value payload too large: {} bytes (max {})",
            payload_len, MAX_VALUE_PAYLOAD_SIZE
        )));
    }

    let mut payload = vec![0u8; payload_len];
    if payload_len > 0 {
        reader.read_exact(&mut payload)?;
    }

    let mut full_message = Vec::with_capacity(VALUE_HEADER_SIZE + payload_len);
    full_message.extend_from_slice(&header);
    full_message.extend_from_slice(&payload);

    decode_value(translator, &full_message).map(|(value, _)| value)
}

/// Write a value to a stream
pub fn write_value<W: Write>(
    translator: &TypeTranslator,
    writer: &mut W,
    value: &Value,
) -> Result<()> {
    let bytes = encode_value(translator, value)?;
    writer.write_all(&bytes)?;
    writer.flush()?;
    Ok(())
}
