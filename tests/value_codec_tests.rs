//! Value Codec Tests
//!
//! Tests for encoding and decoding single typed values.

use std::io::Cursor;

use kvwire::encoding::{
    decode_value, encode_value, read_value, write_value, VALUE_HEADER_SIZE,
};
use kvwire::{Document, TypeTranslator, Value, WireError};

fn round_trip(value: Value) -> Value {
    let translator = TypeTranslator::new();
    let encoded = encode_value(&translator, &value).unwrap();
    let (decoded, consumed) = decode_value(&translator, &encoded).unwrap();
    assert_eq!(consumed, encoded.len());
    decoded
}

// =============================================================================
// Round-Trip Tests
// =============================================================================

#[test]
fn test_round_trip_numeric_values() {
    assert_eq!(round_trip(Value::Int(i32::MIN)), Value::Int(i32::MIN));
    assert_eq!(round_trip(Value::Byte(-1)), Value::Byte(-1));
    assert_eq!(round_trip(Value::Long(i64::MAX)), Value::Long(i64::MAX));
    assert_eq!(round_trip(Value::Short(-12345)), Value::Short(-12345));
    assert_eq!(round_trip(Value::Float(3.5)), Value::Float(3.5));
    assert_eq!(round_trip(Value::Double(-0.125)), Value::Double(-0.125));
}

#[test]
fn test_round_trip_string_and_binary() {
    assert_eq!(
        round_trip(Value::Str("héllo wörld".to_string())),
        Value::Str("héllo wörld".to_string())
    );

    let blob: Vec<u8> = (0..=255).collect();
    assert_eq!(round_trip(Value::Binary(blob.clone())), Value::Binary(blob));

    // Empty payloads are legal for variable-width kinds
    assert_eq!(round_trip(Value::Binary(vec![])), Value::Binary(vec![]));
    assert_eq!(
        round_trip(Value::Str(String::new())),
        Value::Str(String::new())
    );
}

#[test]
fn test_round_trip_boolean() {
    assert_eq!(round_trip(Value::Boolean(true)), Value::Boolean(true));
    assert_eq!(round_trip(Value::Boolean(false)), Value::Boolean(false));
}

#[test]
fn test_round_trip_json_document() {
    let mut body = serde_json::Map::new();
    body.insert("name".to_string(), serde_json::Value::from("alice"));
    body.insert("age".to_string(), serde_json::Value::from(30));
    let value = Value::Document(Document::json(body));

    assert_eq!(round_trip(value.clone()), value);
}

// =============================================================================
// Wire Format Tests
// =============================================================================

#[test]
fn test_wire_format_int() {
    let translator = TypeTranslator::new();
    let encoded = encode_value(&translator, &Value::Int(42)).unwrap();

    // Expected: [0x01][0x00 0x00 0x00 0x04][0x00 0x00 0x00 0x2A]
    //           tag   payload_len(4)       big-endian 42
    assert_eq!(encoded[0], 0x01);
    assert_eq!(&encoded[1..5], &[0x00, 0x00, 0x00, 0x04]);
    assert_eq!(&encoded[5..9], &[0x00, 0x00, 0x00, 0x2A]);
}

#[test]
fn test_wire_format_binary() {
    let translator = TypeTranslator::new();
    let encoded = encode_value(&translator, &Value::Binary(vec![0x01, 0x02])).unwrap();

    assert_eq!(encoded[0], 0x06); // BINARY tag
    assert_eq!(&encoded[1..5], &[0x00, 0x00, 0x00, 0x02]);
    assert_eq!(&encoded[5..7], &[0x01, 0x02]);
}

#[test]
fn test_wire_format_boolean() {
    let translator = TypeTranslator::new();

    let encoded = encode_value(&translator, &Value::Boolean(true)).unwrap();
    assert_eq!(encoded, vec![0x09, 0x00, 0x00, 0x00, 0x01, 0x01]);

    let encoded = encode_value(&translator, &Value::Boolean(false)).unwrap();
    assert_eq!(encoded, vec![0x09, 0x00, 0x00, 0x00, 0x01, 0x00]);
}

// =============================================================================
// Error Handling Tests
// =============================================================================

#[test]
fn test_encode_non_json_document_fails() {
    let translator = TypeTranslator::new();
    let doc = Document::with_type("com.example.Invoice", serde_json::Map::new());

    let err = encode_value(&translator, &Value::Document(doc)).unwrap_err();
    assert!(matches!(err, WireError::UnsupportedEncodingType(_)));
}

#[test]
fn test_decode_incomplete_header() {
    let translator = TypeTranslator::new();
    let result = decode_value(&translator, &[0x01, 0x00]);
    assert!(result
        .unwrap_err()
        .to_string()
        .contains("Incomplete value header"));
}

#[test]
fn test_decode_incomplete_payload() {
    let translator = TypeTranslator::new();
    // Header promises 4 bytes, only 2 present
    let bytes = [0x01, 0x00, 0x00, 0x00, 0x04, 0x00, 0x2A];
    let result = decode_value(&translator, &bytes);
    assert!(result
        .unwrap_err()
        .to_string()
        .contains("Incomplete value payload"));
}

#[test]
fn test_decode_oversize_payload_length() {
    let translator = TypeTranslator::new();
    // BINARY tag whose length field claims ~4 GB; rejected from the header
    // alone, no payload bytes needed
    let bytes = [0x06, 0xFF, 0xFF, 0xFF, 0xFF];
    let result = decode_value(&translator, &bytes);
    assert!(result
        .unwrap_err()
        .to_string()
        .contains("Value payload too large"));
}

#[test]
fn test_stream_read_oversize_payload_length() {
    let translator = TypeTranslator::new();
    let mut cursor = Cursor::new(vec![0x06, 0xFF, 0xFF, 0xFF, 0xFF]);
    let result = read_value(&translator, &mut cursor);
    assert!(result
        .unwrap_err()
        .to_string()
        .contains("Value payload too large"));
}

#[test]
fn test_decode_unknown_tag_byte() {
    let translator = TypeTranslator::new();
    let bytes = [0xFF, 0x00, 0x00, 0x00, 0x00];
    let result = decode_value(&translator, &bytes);
    assert!(result.unwrap_err().to_string().contains("Unknown wire tag"));
}

#[test]
fn test_decode_wrong_width_numeric_payload() {
    let translator = TypeTranslator::new();
    // INT tag with a 2-byte payload
    let bytes = [0x01, 0x00, 0x00, 0x00, 0x02, 0x00, 0x2A];
    let result = decode_value(&translator, &bytes);
    assert!(result.unwrap_err().to_string().contains("expected 4 bytes"));
}

#[test]
fn test_decode_invalid_boolean_payload() {
    let translator = TypeTranslator::new();
    // BOOLEAN tag with byte 0x02
    let bytes = [0x09, 0x00, 0x00, 0x00, 0x01, 0x02];
    let result = decode_value(&translator, &bytes);
    assert!(result.unwrap_err().to_string().contains("Invalid BOOLEAN"));
}

#[test]
fn test_decode_invalid_utf8_string() {
    let translator = TypeTranslator::new();
    let bytes = [0x08, 0x00, 0x00, 0x00, 0x02, 0xC3, 0x28];
    let result = decode_value(&translator, &bytes);
    assert!(result.unwrap_err().to_string().contains("UTF-8"));
}

#[test]
fn test_decode_malformed_json_payload() {
    let translator = TypeTranslator::new();
    let json = b"{broken";
    let mut bytes = vec![0x0A, 0x00, 0x00, 0x00, json.len() as u8];
    bytes.extend_from_slice(json);

    let err = decode_value(&translator, &bytes).unwrap_err();
    assert!(matches!(err, WireError::Serialization(_)));
}

// =============================================================================
// Stream I/O Tests
// =============================================================================

#[test]
fn test_stream_write_read_value() {
    let translator = TypeTranslator::new();
    let value = Value::Str("streamed".to_string());

    let mut buffer = Vec::new();
    write_value(&translator, &mut buffer, &value).unwrap();

    let mut cursor = Cursor::new(buffer);
    let decoded = read_value(&translator, &mut cursor).unwrap();
    assert_eq!(decoded, value);
}

#[test]
fn test_stream_multiple_values() {
    let translator = TypeTranslator::new();
    let values = vec![
        Value::Int(7),
        Value::Boolean(true),
        Value::Binary(vec![0xAA, 0xBB]),
        Value::Double(1.5),
    ];

    let mut buffer = Vec::new();
    for value in &values {
        write_value(&translator, &mut buffer, value).unwrap();
    }

    let mut cursor = Cursor::new(buffer);
    for expected in &values {
        let decoded = read_value(&translator, &mut cursor).unwrap();
        assert_eq!(&decoded, expected);
    }
}

#[test]
fn test_decode_reports_consumed_length() {
    let translator = TypeTranslator::new();
    let mut buffer = encode_value(&translator, &Value::Short(9)).unwrap();
    let first_len = buffer.len();
    buffer.extend_from_slice(&encode_value(&translator, &Value::Boolean(true)).unwrap());

    let (value, consumed) = decode_value(&translator, &buffer).unwrap();
    assert_eq!(value, Value::Short(9));
    assert_eq!(consumed, first_len);
    assert_eq!(consumed, VALUE_HEADER_SIZE + 2);
}
