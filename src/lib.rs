//! # pylons-item
//!
//! Binary and JSON codec for Pylons item records:
//! - Tagged, length-delimited wire format with zero-value omission
//! - Forward-compatible decoding (unknown fields are skipped)
//! - Lenient JSON parsing and full-field JSON output
//! - Partial builders for constructing and updating records
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │              Records (Item, *KeyValue, *Partial)            │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                    Message trait                            │
//! │      encode / decode / decode_length / from_json / to_json  │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!          ┌────────────┴────────────┐
//!          │                         │
//!          ▼                         ▼
//!   ┌─────────────┐          ┌─────────────┐
//!   │    Wire     │          │    JSON     │
//!   │ (prost,     │          │ (lenient    │
//!   │  delimited  │          │  coercion)  │
//!   │  framing)   │          └─────────────┘
//!   └─────────────┘
//! ```
//!
//! ## Example
//!
//! ```
//! use pylons_item::{Item, Message, StringKeyValue};
//!
//! let item = Item {
//!     id: "item-1".into(),
//!     cookbook_id: "cb-1".into(),
//!     strings: vec![StringKeyValue::new("color", "red")],
//!     tradeable: true,
//!     ..Default::default()
//! };
//!
//! let bytes = item.encode();
//! assert_eq!(Item::decode(&bytes).unwrap(), item);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod wire;
pub mod json;
pub mod message;
pub mod types;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{DecodeError, Error, Result};
pub use config::Config;
pub use message::Message;
pub use types::{
    DoubleKeyValue, DoubleKeyValuePartial, Item, ItemPartial, LongKeyValue, LongKeyValuePartial,
    StringKeyValue, StringKeyValuePartial,
};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of pylons-item
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
