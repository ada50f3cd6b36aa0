//! Response definitions
//!
//! Represents responses to clients.

use crate::value::Value;

/// Response status codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Status {
    Ok = 0x00,
    NotFound = 0x01,
    Error = 0x02,
}

/// A response to send to a client
///
/// Only the field matching the status goes on the wire: `value` for OK,
/// `message` for ERROR, neither for NOT_FOUND. Fields set for a different
/// status are ignored when encoding. The constructors below never build
/// such a state.
#[derive(Debug, Clone)]
pub struct Response {
    /// Status code
    pub status: Status,

    /// Typed value for OK responses (GET results); ignored for other statuses
    pub value: Option<Value>,

    /// Error message for ERROR responses; ignored for other statuses
    pub message: Option<String>,
}

impl Response {
    /// Create an OK response with an optional value
    pub fn ok(value: Option<Value>) -> Self {
        Self {
            status: Status::Ok,
            value,
            message: None,
        }
    }

    /// Create a NOT_FOUND response
    pub fn not_found() -> Self {
        Self {
            status: Status::NotFound,
            value: None,
            message: None,
        }
    }

    /// Create an ERROR response
    pub fn error(message: &str) -> Self {
        Self {
            status: Status::Error,
            value: None,
            message: Some(message.to_string()),
        }
    }
}
