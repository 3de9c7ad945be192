//! Record Types
//!
//! The item message and its key/value attribute records.
//!
//! ## Field Numbers
//! ```text
//! DoubleKeyValue / LongKeyValue / StringKeyValue
//!   1 Key   2 Value
//!
//! Item
//!   1 creator        5 Doubles        9  ownerTradeID
//!   2 ID             6 Longs          10 tradeable
//!   3 cookbookID     7 Strings        11 lastUpdate
//!   4 nodeVersion    8 ownerRecipeID  12 transferFee
//! ```

mod key_value;
mod item;

pub use key_value::{
    DoubleKeyValue, DoubleKeyValuePartial, LongKeyValue, LongKeyValuePartial, StringKeyValue,
    StringKeyValuePartial,
};
pub use item::{Item, ItemPartial};
