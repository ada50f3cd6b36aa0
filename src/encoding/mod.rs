//! Encoding Module
//!
//! Resolves between the three representations of a value's type and
//! encodes/decodes value payloads.
//!
//! ## Wire Tags
//!
//! ```text
//! ┌──────┬─────────┬───────────────────────────┐
//! │ Byte │ Tag     │ Payload                   │
//! ├──────┼─────────┼───────────────────────────┤
//! │ 0x01 │ INT     │ 4 bytes, big-endian       │
//! │ 0x02 │ BYTE    │ 1 byte                    │
//! │ 0x03 │ LONG    │ 8 bytes, big-endian       │
//! │ 0x04 │ FLOAT   │ 4 bytes, IEEE 754 BE      │
//! │ 0x05 │ SHORT   │ 2 bytes, big-endian       │
//! │ 0x06 │ BINARY  │ raw bytes                 │
//! │ 0x07 │ DOUBLE  │ 8 bytes, IEEE 754 BE      │
//! │ 0x08 │ STRING  │ UTF-8 bytes               │
//! │ 0x09 │ BOOLEAN │ 1 byte (0x00 or 0x01)     │
//! │ 0x0A │ JSON    │ JSON object text          │
//! └──────┴─────────┴───────────────────────────┘
//! ```
//!
//! Tag bytes are fixed and versioned with the protocol; they are never
//! extended at runtime.

mod translator;
mod codec;

pub use translator::{SerializationKind, TypeTranslator, WireTag};
pub use codec::{
    decode_value, encode_value, read_value, write_value, MAX_VALUE_PAYLOAD_SIZE,
    VALUE_HEADER_SIZE,
};
