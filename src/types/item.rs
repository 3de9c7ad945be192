//! Item record
//!
//! A cookbook-scoped item with typed attribute lists and ownership/trade
//! metadata.

use serde::Serialize;
use serde_json::Value;

use super::key_value::{
    DoubleKeyValue, DoubleKeyValuePartial, LongKeyValue, LongKeyValuePartial, StringKeyValue,
    StringKeyValuePartial,
};
use crate::json;
use crate::message::Message;

/// An item owned by `creator` inside cookbook `cookbook_id`
///
/// Attribute lists keep their order and may repeat keys; lookups return the
/// first match.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, ::prost::Message)]
pub struct Item {
    #[prost(string, tag = "1")]
    pub creator: String,

    #[prost(string, tag = "2")]
    #[serde(rename = "ID")]
    pub id: String,

    #[prost(string, tag = "3")]
    #[serde(rename = "cookbookID")]
    pub cookbook_id: String,

    #[prost(string, tag = "4")]
    #[serde(rename = "nodeVersion")]
    pub node_version: String,

    #[prost(message, repeated, tag = "5")]
    #[serde(rename = "Doubles")]
    pub doubles: Vec<DoubleKeyValue>,

    #[prost(message, repeated, tag = "6")]
    #[serde(rename = "Longs")]
    pub longs: Vec<LongKeyValue>,

    #[prost(message, repeated, tag = "7")]
    #[serde(rename = "Strings")]
    pub strings: Vec<StringKeyValue>,

    /// Recipe that produced the item, empty otherwise
    #[prost(string, tag = "8")]
    #[serde(rename = "ownerRecipeID")]
    pub owner_recipe_id: String,

    /// Trade the item is locked in, empty otherwise
    #[prost(string, tag = "9")]
    #[serde(rename = "ownerTradeID")]
    pub owner_trade_id: String,

    #[prost(bool, tag = "10")]
    pub tradeable: bool,

    /// Block height of the last change
    #[prost(int64, tag = "11")]
    #[serde(rename = "lastUpdate", serialize_with = "json::int64_as_string")]
    pub last_update: i64,

    #[prost(int64, tag = "12")]
    #[serde(rename = "transferFee", serialize_with = "json::int64_as_string")]
    pub transfer_fee: i64,
}

impl Item {
    // =========================================================================
    // Attribute Lookup
    // =========================================================================

    /// First `Doubles` value stored under `key`
    pub fn find_double(&self, key: &str) -> Option<&DoubleKeyValue> {
        self.doubles.iter().find(|kv| kv.key == key)
    }

    /// First `Longs` value stored under `key`
    pub fn find_long(&self, key: &str) -> Option<&LongKeyValue> {
        self.longs.iter().find(|kv| kv.key == key)
    }

    /// First `Strings` value stored under `key`
    pub fn find_string(&self, key: &str) -> Option<&StringKeyValue> {
        self.strings.iter().find(|kv| kv.key == key)
    }

    pub fn has_double(&self, key: &str) -> bool {
        self.find_double(key).is_some()
    }

    pub fn has_long(&self, key: &str) -> bool {
        self.find_long(key).is_some()
    }

    pub fn has_string(&self, key: &str) -> bool {
        self.find_string(key).is_some()
    }

    // =========================================================================
    // Ownership
    // =========================================================================

    /// Whether the item is currently locked in a trade
    pub fn is_locked(&self) -> bool {
        !self.owner_trade_id.is_empty()
    }

    /// Whether the item was produced by a recipe
    pub fn is_recipe_output(&self) -> bool {
        !self.owner_recipe_id.is_empty()
    }

    // =========================================================================
    // Partial Construction
    // =========================================================================

    pub fn from_partial(partial: ItemPartial) -> Self {
        Self::default().merge_partial(partial)
    }

    /// New item with the fields present in `partial` replacing this one's
    ///
    /// A present attribute list replaces the whole list; each of its
    /// elements is completed from the zero value.
    pub fn merge_partial(&self, partial: ItemPartial) -> Self {
        Self {
            creator: partial.creator.unwrap_or_else(|| self.creator.clone()),
            id: partial.id.unwrap_or_else(|| self.id.clone()),
            cookbook_id: partial.cookbook_id.unwrap_or_else(|| self.cookbook_id.clone()),
            node_version: partial.node_version.unwrap_or_else(|| self.node_version.clone()),
            doubles: match partial.doubles {
                Some(doubles) => doubles.into_iter().map(DoubleKeyValue::from_partial).collect(),
                None => self.doubles.clone(),
            },
            longs: match partial.longs {
                Some(longs) => longs.into_iter().map(LongKeyValue::from_partial).collect(),
                None => self.longs.clone(),
            },
            strings: match partial.strings {
                Some(strings) => strings.into_iter().map(StringKeyValue::from_partial).collect(),
                None => self.strings.clone(),
            },
            owner_recipe_id: partial
                .owner_recipe_id
                .unwrap_or_else(|| self.owner_recipe_id.clone()),
            owner_trade_id: partial
                .owner_trade_id
                .unwrap_or_else(|| self.owner_trade_id.clone()),
            tradeable: partial.tradeable.unwrap_or(self.tradeable),
            last_update: partial.last_update.unwrap_or(self.last_update),
            transfer_fee: partial.transfer_fee.unwrap_or(self.transfer_fee),
        }
    }
}

impl Message for Item {
    const NAME: &'static str = "Item";

    fn from_json(value: &Value) -> Self {
        let Some(object) = value.as_object() else {
            return Self::default();
        };

        Self {
            creator: json::text_field(object, &["creator", "Creator"]),
            id: json::text_field(object, &["ID", "id", "Id"]),
            cookbook_id: json::text_field(
                object,
                &["cookbookID", "cookbook_id", "cookbookId", "CookbookID"],
            ),
            node_version: json::text_field(object, &["nodeVersion", "node_version", "NodeVersion"]),
            doubles: json::repeated_field(object, &["Doubles", "doubles"]),
            longs: json::repeated_field(object, &["Longs", "longs"]),
            strings: json::repeated_field(object, &["Strings", "strings"]),
            owner_recipe_id: json::text_field(
                object,
                &["ownerRecipeID", "owner_recipe_id", "ownerRecipeId", "OwnerRecipeID"],
            ),
            owner_trade_id: json::text_field(
                object,
                &["ownerTradeID", "owner_trade_id", "ownerTradeId", "OwnerTradeID"],
            ),
            tradeable: json::bool_field(object, &["tradeable", "Tradeable"]),
            last_update: json::int64_field(object, &["lastUpdate", "last_update", "LastUpdate"]),
            transfer_fee: json::int64_field(
                object,
                &["transferFee", "transfer_fee", "TransferFee"],
            ),
        }
    }
}

/// Optional-field form of [`Item`]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemPartial {
    pub creator: Option<String>,
    pub id: Option<String>,
    pub cookbook_id: Option<String>,
    pub node_version: Option<String>,
    pub doubles: Option<Vec<DoubleKeyValuePartial>>,
    pub longs: Option<Vec<LongKeyValuePartial>>,
    pub strings: Option<Vec<StringKeyValuePartial>>,
    pub owner_recipe_id: Option<String>,
    pub owner_trade_id: Option<String>,
    pub tradeable: Option<bool>,
    pub last_update: Option<i64>,
    pub transfer_fee: Option<i64>,
}

impl ItemPartial {
    pub fn creator(mut self, creator: impl Into<String>) -> Self {
        self.creator = Some(creator.into());
        self
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn cookbook_id(mut self, cookbook_id: impl Into<String>) -> Self {
        self.cookbook_id = Some(cookbook_id.into());
        self
    }

    pub fn node_version(mut self, node_version: impl Into<String>) -> Self {
        self.node_version = Some(node_version.into());
        self
    }

    pub fn doubles(mut self, doubles: Vec<DoubleKeyValuePartial>) -> Self {
        self.doubles = Some(doubles);
        self
    }

    pub fn longs(mut self, longs: Vec<LongKeyValuePartial>) -> Self {
        self.longs = Some(longs);
        self
    }

    pub fn strings(mut self, strings: Vec<StringKeyValuePartial>) -> Self {
        self.strings = Some(strings);
        self
    }

    pub fn owner_recipe_id(mut self, owner_recipe_id: impl Into<String>) -> Self {
        self.owner_recipe_id = Some(owner_recipe_id.into());
        self
    }

    pub fn owner_trade_id(mut self, owner_trade_id: impl Into<String>) -> Self {
        self.owner_trade_id = Some(owner_trade_id.into());
        self
    }

    pub fn tradeable(mut self, tradeable: bool) -> Self {
        self.tradeable = Some(tradeable);
        self
    }

    pub fn last_update(mut self, last_update: i64) -> Self {
        self.last_update = Some(last_update);
        self
    }

    pub fn transfer_fee(mut self, transfer_fee: i64) -> Self {
        self.transfer_fee = Some(transfer_fee);
        self
    }
}

impl From<Item> for ItemPartial {
    fn from(full: Item) -> Self {
        Self {
            creator: Some(full.creator),
            id: Some(full.id),
            cookbook_id: Some(full.cookbook_id),
            node_version: Some(full.node_version),
            doubles: Some(full.doubles.into_iter().map(Into::into).collect()),
            longs: Some(full.longs.into_iter().map(Into::into).collect()),
            strings: Some(full.strings.into_iter().map(Into::into).collect()),
            owner_recipe_id: Some(full.owner_recipe_id),
            owner_trade_id: Some(full.owner_trade_id),
            tradeable: Some(full.tradeable),
            last_update: Some(full.last_update),
            transfer_fee: Some(full.transfer_fee),
        }
    }
}
