//! Wire Module
//!
//! Records use the protobuf wire format (via `prost`); this module adds the
//! framing used to put several records in one stream or file.
//!
//! ## Field Layout
//! ```text
//! ┌──────────────────────────────┬─────────────────────────────┐
//! │ Key varint (number << 3 | wt)│ Value (shape set by wt)     │
//! └──────────────────────────────┴─────────────────────────────┘
//! ```
//!
//! ### Wire Types
//! - 0: VARINT           - int64 (two's complement), bool (0/1)
//! - 1: FIXED64          - skipped only
//! - 2: LENGTH_DELIMITED - len varint + bytes (text, nested records)
//! - 3: START_GROUP      - skipped only
//! - 4: END_GROUP        - skipped only
//! - 5: FIXED32          - skipped only
//!
//! ### Delimited Frame (stream helpers)
//! ```text
//! ┌──────────────┬─────────────────────────────┐
//! │ Len varint   │         Message             │
//! └──────────────┴─────────────────────────────┘
//! ```

pub mod stream;

pub use stream::{decode_delimited, encode_delimited, read_delimited, write_delimited};
