//! Protocol codec
//!
//! Encoding and decoding functions for the wire protocol. Typed values
//! inside PUT requests and OK responses are framed by the value codec in
//! [`crate::encoding`].
//!
//! ## Wire Format
//!
//! ### Request (Command) Format
//! ```text
//! ┌──────────┬──────────┬─────────────────────────────┐
//! │ Cmd (1)  │ Len (4)  │         Payload             │
//! └──────────┴──────────┴─────────────────────────────┘
//! ```
//!
//! ### Payload by Command Type
//! - GET:    key_len (4 bytes) + key
//! - PUT:    key_len (4 bytes) + key + encoded value
//! - DELETE: key_len (4 bytes) + key
//! - PING:   empty
//!
//! ### Response Format
//! ```text
//! ┌──────────┬──────────┬─────────────────────────────┐
//! │Status(1) │ Len (4)  │         Payload             │
//! └──────────┴──────────┴─────────────────────────────┘
//! ```

use std::io::{Read, Write};

use crate::encoding::{decode_value, encode_value, TypeTranslator};
use crate::error::{Result, WireError};

use super::{Command, Response, Status};

/// Header size: 1 byte command/status + 4 bytes length
pub const HEADER_SIZE: usize = 5;

/// Maximum payload size (16 MB)
pub const MAX_PAYLOAD_SIZE: u32 = 16 * 1024 * 1024;

// =============================================================================
// Command Encoding/Decoding
// =============================================================================

/// Encode a command to bytes
///
/// Format: cmd_type (1) + payload_len (4) + payload
pub fn encode_command(translator: &TypeTranslator, command: &Command) -> Result<Vec<u8>> {
    let cmd_type = command.command_type() as u8;

    // Build payload based on command type
    let payload = match command {
        Command::Get { key } | Command::Delete { key } => {
            let mut payload = Vec::with_capacity(4 + key.len());
            payload.extend_from_slice(&(key.len() as u32).to_be_bytes());
            payload.extend_from_slice(key);
            payload
        }
        Command::Put { key, value } => {
            let value_bytes = encode_value(translator, value)?;
            let mut payload = Vec::with_capacity(4 + key.len() + value_bytes.len());
            payload.extend_from_slice(&(key.len() as u32).to_be_bytes());
            payload.extend_from_slice(key);
            payload.extend_from_slice(&value_bytes);
            payload
        }
        Command::Ping => Vec::new(),
    };

    // Build full message: header + payload
    let mut message = Vec::with_capacity(HEADER_SIZE + payload.len());
    message.push(cmd_type);
    message.extend_from_slice(&(payload.len() as u32).to_be_bytes());
    message.extend_from_slice(&payload);

    Ok(message)
}

/// Decode a command from bytes
pub fn decode_command(translator: &TypeTranslator, bytes: &[u8]) -> Result<Command> {
    let payload = frame_payload(bytes, "command")?;
    let cmd_type = bytes[0];

    match cmd_type {
        0x01 => decode_keyed_command(payload, "GET", |key| Command::Get { key }),
        0x02 => decode_put_command(translator, payload),
        0x03 => decode_keyed_command(payload, "DELETE", |key| Command::Delete { key }),
        0x04 => decode_ping_command(payload),
        _ => {
            tracing::warn!("Rejected command with unknown type byte 0x{:02x}", cmd_type);
            Err(WireError::Protocol(format!(
                "Unknown command type: 0x{:02x}",
                cmd_type
            )))
        }
    }
}

/// Decode a key-only command payload (GET/DELETE)
fn decode_keyed_command(
    payload: &[u8],
    name: &str,
    build: impl FnOnce(Vec<u8>) -> Command,
) -> Result<Command> {
    let (key, rest) = split_key(payload, name)?;
    if !rest.is_empty() {
        return Err(WireError::Protocol(format!(
            "{} command: {} trailing bytes after key",
            name,
            rest.len()
        )));
    }
    Ok(build(key))
}

/// Decode PUT command payload: key + encoded value
fn decode_put_command(translator: &TypeTranslator, payload: &[u8]) -> Result<Command> {
    let (key, rest) = split_key(payload, "PUT")?;
    let (value, consumed) = decode_value(translator, rest)?;
    if consumed != rest.len() {
        return Err(WireError::Protocol(format!(
            "PUT command: {} trailing bytes after value",
            rest.len() - consumed
        )));
    }
    Ok(Command::Put { key, value })
}

/// Decode PING command payload
fn decode_ping_command(payload: &[u8]) -> Result<Command> {
    if !payload.is_empty() {
        return Err(WireError::Protocol(format!(
            "PING command: unexpected payload of {} bytes",
            payload.len()
        )));
    }
    Ok(Command::Ping)
}

// =============================================================================
// Response Encoding/Decoding
// =============================================================================

/// Encode a response to bytes
///
/// Format: status (1) + payload_len (4) + payload
pub fn encode_response(translator: &TypeTranslator, response: &Response) -> Result<Vec<u8>> {
    let payload = match response.status {
        Status::Ok => match &response.value {
            Some(value) => encode_value(translator, value)?,
            None => Vec::new(),
        },
        Status::NotFound => Vec::new(),
        Status::Error => response
            .message
            .as_deref()
            .unwrap_or("")
            .as_bytes()
            .to_vec(),
    };

    let mut message = Vec::with_capacity(HEADER_SIZE + payload.len());
    message.push(response.status as u8);
    message.extend_from_slice(&(payload.len() as u32).to_be_bytes());
    message.extend_from_slice(&payload);

    Ok(message)
}

/// Decode a response from bytes
pub fn decode_response(translator: &TypeTranslator, bytes: &[u8]) -> Result<Response> {
    let payload = frame_payload(bytes, "response")?;
    let status_byte = bytes[0];

    match status_byte {
        0x00 => {
            if payload.is_empty() {
                return Ok(Response::ok(None));
            }
            let (value, consumed) = decode_value(translator, payload)?;
            if consumed != payload.len() {
                return Err(WireError::Protocol(format!(
                    "OK response: {} trailing bytes after value",
                    payload.len() - consumed
                )));
            }
            Ok(Response::ok(Some(value)))
        }
        0x01 => {
            if !payload.is_empty() {
                return Err(WireError::Protocol(format!(
                    "NOT_FOUND response: unexpected payload of {} bytes",
                    payload.len()
                )));
            }
            Ok(Response::not_found())
        }
        0x02 => {
            let message = String::from_utf8(payload.to_vec()).map_err(|e| {
                WireError::Protocol(format!("ERROR message is not valid UTF-8: {}", e))
            })?;
            Ok(Response::error(&message))
        }
        _ => {
            tracing::warn!(
                "Rejected response with unknown status byte 0x{:02x}",
                status_byte
            );
            Err(WireError::Protocol(format!(
                "Unknown response status: 0x{:02x}",
                status_byte
            )))
        }
    }
}

// =============================================================================
// Frame parsing helpers
// =============================================================================

/// Validate a frame header and return its payload slice
fn frame_payload<'a>(bytes: &'a [u8], what: &str) -> Result<&'a [u8]> {
    if bytes.len() < HEADER_SIZE {
        return Err(WireError::Protocol(format!(
            "Incomplete {} header: expected {} bytes, got {}",
            what,
            HEADER_SIZE,
            bytes.len()
        )));
    }

    let payload_len = u32::from_be_bytes([bytes[1], bytes[2], bytes[3], bytes[4]]) as usize;

    if payload_len > MAX_PAYLOAD_SIZE as usize {
        return Err(WireError::Protocol(format!(
            "Payload too large: {} bytes (max {})",
            payload_len, MAX_PAYLOAD_SIZE
        )));
    }

    let total_len = HEADER_SIZE + payload_len;
    if bytes.len() < total_len {
        return Err(WireError::Protocol(format!(
            "Incomplete {} payload: expected {} bytes, got {}",
            what,
            total_len,
            bytes.len()
        )));
    }

    Ok(&bytes[HEADER_SIZE..total_len])
}

/// Split a length-prefixed key off the front of a payload
fn split_key<'a>(payload: &'a [u8], name: &str) -> Result<(Vec<u8>, &'a [u8])> {
    if payload.len() < 4 {
        return Err(WireError::Protocol(format!(
            "{} command: missing key length",
            name
        )));
    }

    let key_len = u32::from_be_bytes([payload[0], payload[1], payload[2], payload[3]]) as usize;

    if payload.len() < 4 + key_len {
        return Err(WireError::Protocol(format!(
            "{} command: incomplete key (expected {}, got {})",
            name,
            key_len,
            payload.len() - 4
        )));
    }

    Ok((payload[4..4 + key_len].to_vec(), &payload[4 + key_len..]))
}

// =============================================================================
// Stream-based I/O helpers
// =============================================================================

/// Read a complete frame (header + payload) from a stream
fn read_frame<R: Read>(reader: &mut R) -> Result<Vec<u8>> {
    let mut header = [0u8; HEADER_SIZE];
    reader.read_exact(&mut header)?;

    let payload_len = u32::from_be_bytes([header[1], header[2], header[3], header[4]]) as usize;

    if payload_len > MAX_PAYLOAD_SIZE as usize {
        return Err(WireError::Protocol(format!(
            "Payload too large: {} bytes (max {})",
            payload_len, MAX_PAYLOAD_SIZE
        )));
    }

    let mut full_message = Vec::with_capacity(HEADER_SIZE + payload_len);
    full_message.extend_from_slice(&header);
    full_message.resize(HEADER_SIZE + payload_len, 0);
    if payload_len > 0 {
        reader.read_exact(&mut full_message[HEADER_SIZE..])?;
    }

    Ok(full_message)
}

/// Read a complete command from a stream
///
/// Blocks until a complete command is received or an error occurs
pub fn read_command<R: Read>(translator: &TypeTranslator, reader: &mut R) -> Result<Command> {
    let frame = read_frame(reader)?;
    let command = decode_command(translator, &frame)?;
    tracing::trace!("Decoded command: {:?}", command.command_type());
    Ok(command)
}

/// Write a command to a stream
pub fn write_command<W: Write>(
    translator: &TypeTranslator,
    writer: &mut W,
    command: &Command,
) -> Result<()> {
    let bytes = encode_command(translator, command)?;
    writer.write_all(&bytes)?;
    writer.flush()?;
    Ok(())
}

/// Read a complete response from a stream
pub fn read_response<R: Read>(translator: &TypeTranslator, reader: &mut R) -> Result<Response> {
    let frame = read_frame(reader)?;
    decode_response(translator, &frame)
}

/// Write a response to a stream
pub fn write_response<W: Write>(
    translator: &TypeTranslator,
    writer: &mut W,
    response: &Response,
) -> Result<()> {
    let bytes = encode_response(translator, response)?;
    writer.write_all(&bytes)?;
    writer.flush()?;
    Ok(())
}
