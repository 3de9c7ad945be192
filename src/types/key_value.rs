//! Key/value attribute records
//!
//! Three two-field records used as flexible item attributes. All share the
//! same layout: field 1 is the key, field 2 the value.

use serde::Serialize;
use serde_json::Value;

use crate::json;
use crate::message::Message;

const KEY_NAMES: &[&str] = &["Key", "key"];
const VALUE_NAMES: &[&str] = &["Value", "value"];

// =============================================================================
// DoubleKeyValue
// =============================================================================

/// Key with a decimal value carried as text
///
/// The value stays textual on the wire; use [`DoubleKeyValue::parse_value`]
/// for a numeric reading.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, ::prost::Message)]
pub struct DoubleKeyValue {
    #[prost(string, tag = "1")]
    #[serde(rename = "Key")]
    pub key: String,

    #[prost(string, tag = "2")]
    #[serde(rename = "Value")]
    pub value: String,
}

impl DoubleKeyValue {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Read the value as a float, `None` when it is not a number
    pub fn parse_value(&self) -> Option<f64> {
        self.value.trim().parse().ok()
    }

    pub fn from_partial(partial: DoubleKeyValuePartial) -> Self {
        Self::default().merge_partial(partial)
    }

    /// New value with the fields present in `partial` replacing this one's
    pub fn merge_partial(&self, partial: DoubleKeyValuePartial) -> Self {
        Self {
            key: partial.key.unwrap_or_else(|| self.key.clone()),
            value: partial.value.unwrap_or_else(|| self.value.clone()),
        }
    }
}

impl Message for DoubleKeyValue {
    const NAME: &'static str = "DoubleKeyValue";

    fn from_json(value: &Value) -> Self {
        let Some(object) = value.as_object() else {
            return Self::default();
        };
        Self {
            key: json::text_field(object, KEY_NAMES),
            value: json::text_field(object, VALUE_NAMES),
        }
    }
}

/// Optional-field form of [`DoubleKeyValue`]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DoubleKeyValuePartial {
    pub key: Option<String>,
    pub value: Option<String>,
}

impl DoubleKeyValuePartial {
    pub fn key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }
}

impl From<DoubleKeyValue> for DoubleKeyValuePartial {
    fn from(full: DoubleKeyValue) -> Self {
        Self {
            key: Some(full.key),
            value: Some(full.value),
        }
    }
}

// =============================================================================
// LongKeyValue
// =============================================================================

/// Key with a 64-bit integer value
#[derive(Clone, PartialEq, Eq, Hash, Serialize, ::prost::Message)]
pub struct LongKeyValue {
    #[prost(string, tag = "1")]
    #[serde(rename = "Key")]
    pub key: String,

    #[prost(int64, tag = "2")]
    #[serde(rename = "Value", serialize_with = "json::int64_as_string")]
    pub value: i64,
}

impl LongKeyValue {
    pub fn new(key: impl Into<String>, value: i64) -> Self {
        Self {
            key: key.into(),
            value,
        }
    }

    pub fn from_partial(partial: LongKeyValuePartial) -> Self {
        Self::default().merge_partial(partial)
    }

    /// New value with the fields present in `partial` replacing this one's
    pub fn merge_partial(&self, partial: LongKeyValuePartial) -> Self {
        Self {
            key: partial.key.unwrap_or_else(|| self.key.clone()),
            value: partial.value.unwrap_or(self.value),
        }
    }
}

impl Message for LongKeyValue {
    const NAME: &'static str = "LongKeyValue";

    fn from_json(value: &Value) -> Self {
        let Some(object) = value.as_object() else {
            return Self::default();
        };
        Self {
            key: json::text_field(object, KEY_NAMES),
            value: json::int64_field(object, VALUE_NAMES),
        }
    }
}

/// Optional-field form of [`LongKeyValue`]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LongKeyValuePartial {
    pub key: Option<String>,
    pub value: Option<i64>,
}

impl LongKeyValuePartial {
    pub fn key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    pub fn value(mut self, value: i64) -> Self {
        self.value = Some(value);
        self
    }
}

impl From<LongKeyValue> for LongKeyValuePartial {
    fn from(full: LongKeyValue) -> Self {
        Self {
            key: Some(full.key),
            value: Some(full.value),
        }
    }
}

// =============================================================================
// StringKeyValue
// =============================================================================

/// Key with a text value
#[derive(Clone, PartialEq, Eq, Hash, Serialize, ::prost::Message)]
pub struct StringKeyValue {
    #[prost(string, tag = "1")]
    #[serde(rename = "Key")]
    pub key: String,

    #[prost(string, tag = "2")]
    #[serde(rename = "Value")]
    pub value: String,
}

impl StringKeyValue {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    pub fn from_partial(partial: StringKeyValuePartial) -> Self {
        Self::default().merge_partial(partial)
    }

    /// New value with the fields present in `partial` replacing this one's
    pub fn merge_partial(&self, partial: StringKeyValuePartial) -> Self {
        Self {
            key: partial.key.unwrap_or_else(|| self.key.clone()),
            value: partial.value.unwrap_or_else(|| self.value.clone()),
        }
    }
}

impl Message for StringKeyValue {
    const NAME: &'static str = "StringKeyValue";

    fn from_json(value: &Value) -> Self {
        let Some(object) = value.as_object() else {
            return Self::default();
        };
        Self {
            key: json::text_field(object, KEY_NAMES),
            value: json::text_field(object, VALUE_NAMES),
        }
    }
}

/// Optional-field form of [`StringKeyValue`]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StringKeyValuePartial {
    pub key: Option<String>,
    pub value: Option<String>,
}

impl StringKeyValuePartial {
    pub fn key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }
}

impl From<StringKeyValue> for StringKeyValuePartial {
    fn from(full: StringKeyValue) -> Self {
        Self {
            key: Some(full.key),
            value: Some(full.value),
        }
    }
}
