//! Protocol Module
//!
//! Defines the wire protocol for client-server communication. Values in
//! PUT requests and OK responses travel as tagged typed values encoded by
//! [`crate::encoding`].
//!
//! ## Protocol Format (V1 - Simple Binary)
//!
//! ### Request Format
//! ```text
//! ┌──────────┬──────────┬─────────────────────────────┐
//! │ Cmd (1)  │ Len (4)  │         Payload             │
//! └──────────┴──────────┴─────────────────────────────┘
//! ```
//!
//! ### Commands
//! - 0x01: GET   - Payload: key_len (4) + key
//! - 0x02: PUT   - Payload: key_len (4) + key + encoded value
//! - 0x03: DEL   - Payload: key_len (4) + key
//! - 0x04: PING  - Payload: empty
//!
//! ### Response Format
//! ```text
//! ┌──────────┬──────────┬─────────────────────────────┐
//! │Status(1) │ Len (4)  │         Payload             │
//! └──────────┴──────────┴─────────────────────────────┘
//! ```
//!
//! ### Status Codes
//! - 0x00: OK        - Payload: encoded value (optional)
//! - 0x01: NOT_FOUND - Payload: empty
//! - 0x02: ERROR     - Payload: UTF-8 error message

mod command;
mod response;
mod codec;

pub use command::{Command, CommandType};
pub use response::{Response, Status};
pub use codec::{
    decode_command, decode_response, encode_command, encode_response, read_command,
    read_response, write_command, write_response,
};
