//! Error types for pylons-item
//!
//! `DecodeError` is the only failure of the codec proper; `Error` wraps it
//! together with the failures of the JSON front door and the stream helpers.

use thiserror::Error;

/// Result type alias using Error
pub type Result<T> = std::result::Result<T, Error>;

/// Failure while decoding wire bytes
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    // -------------------------------------------------------------------------
    // Buffer Errors
    // -------------------------------------------------------------------------
    #[error("explicit length {length} exceeds buffer of {available} bytes")]
    LengthExceedsBuffer { length: usize, available: usize },

    // -------------------------------------------------------------------------
    // Wire Errors
    // -------------------------------------------------------------------------
    /// Malformed protobuf: truncation, bad varint, invalid key or wire type,
    /// invalid UTF-8, unbalanced group, or nesting past the recursion limit
    #[error(transparent)]
    Wire(#[from] prost::DecodeError),
}

/// Unified error type for pylons-item operations
#[derive(Debug, Error)]
pub enum Error {
    // -------------------------------------------------------------------------
    // Codec Errors
    // -------------------------------------------------------------------------
    #[error("Decode error: {0}")]
    Decode(#[from] DecodeError),

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    // -------------------------------------------------------------------------
    // Stream Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Frame too large: {size} bytes (max {max})")]
    FrameTooLarge { size: usize, max: usize },

    #[error("Stream ended inside a frame: {0}")]
    IncompleteFrame(String),
}
