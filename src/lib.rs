//! # kvwire
//!
//! The typed value encoding layer of a binary key-value client/server
//! protocol:
//! - A closed set of supported in-memory value types
//! - A one-byte wire tag per supported type
//! - An internal serialization kind the decode path dispatches on
//! - Explicit rejection of anything unrecognized
//!
//! ## Architecture Overview
//!
//! ```text
//!  Encode path                          Decode path
//!
//! ┌─────────────┐                      ┌─────────────┐
//! │    Value    │                      │  Wire bytes │
//! │ (in-memory) │                      │ (tag + len) │
//! └──────┬──────┘                      └──────┬──────┘
//!        │ wire_tag_for                       │ WireTag::from_byte
//!        ▼                                    ▼
//! ┌─────────────┐                      ┌─────────────┐
//! │   WireTag   │                      │   WireTag   │
//! └──────┬──────┘                      └──────┬──────┘
//!        │                                    │ serialization_kind_for
//!        ▼                                    ▼
//! ┌─────────────┐                      ┌──────────────────┐
//! │  Wire bytes │                      │SerializationKind │
//! └─────────────┘                      │ (picks decoder)  │
//!                                      └──────────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;

pub mod value;
pub mod encoding;
pub mod protocol;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{Result, WireError};
pub use value::{Document, Value, JSON_DOCUMENT_TYPE};
pub use encoding::{SerializationKind, TypeTranslator, WireTag};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of kvwire
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
