//! Message trait
//!
//! The contract every record implements. The binary form comes from the
//! `prost::Message` derive; this trait adds the record name, the JSON form,
//! and byte-slice entry points that report [`DecodeError`].
//!
//! Generic code bounded by `M: Message` sees both traits, so it calls the
//! overlapping methods (`encode`, `decode`, `encoded_len`) through
//! `<M as Message>::` to pick this one.

use bytes::Bytes;
use serde::Serialize;
use serde_json::Value;

use crate::error::{DecodeError, Result};

/// A record with a tagged binary form and a JSON-compatible form
pub trait Message: prost::Message + Default + Clone + PartialEq + Serialize {
    /// Record name used in logs
    const NAME: &'static str;

    /// Build a record from an untyped JSON value
    ///
    /// Total: missing fields take the zero value and mismatched types are
    /// coerced (see [`crate::json`]).
    fn from_json(value: &Value) -> Self;

    /// Encode to a new byte vector
    fn encode(&self) -> Vec<u8> {
        prost::Message::encode_to_vec(self)
    }

    /// Encode to an immutable `Bytes` buffer
    fn encode_to_bytes(&self) -> Bytes {
        Bytes::from(prost::Message::encode_to_vec(self))
    }

    /// Exact number of bytes `encode` writes
    fn encoded_len(&self) -> usize {
        prost::Message::encoded_len(self)
    }

    /// Decode a record spanning the whole buffer
    fn decode(bytes: &[u8]) -> std::result::Result<Self, DecodeError> {
        Self::decode_length(bytes, bytes.len())
    }

    /// Decode a record from the first `length` bytes of the buffer
    fn decode_length(bytes: &[u8], length: usize) -> std::result::Result<Self, DecodeError> {
        let result = if length > bytes.len() {
            Err(DecodeError::LengthExceedsBuffer {
                length,
                available: bytes.len(),
            })
        } else {
            <Self as prost::Message>::decode(&bytes[..length]).map_err(DecodeError::from)
        };

        result.map_err(|e| {
            tracing::debug!(record = Self::NAME, length, error = %e, "decode failed");
            e
        })
    }

    /// Plain JSON object with every field present under its primary name
    fn to_json(&self) -> Value {
        // Records only hold strings, integers, booleans and nested records,
        // all of which map onto JSON without failure.
        serde_json::to_value(self).unwrap_or(Value::Null)
    }

    /// Parse JSON text, then build the record leniently
    ///
    /// Fails only when the text is not JSON at all.
    fn from_json_str(text: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(text)?;
        Ok(Self::from_json(&value))
    }
}
