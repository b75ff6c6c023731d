//! JSON interop
//!
//! - [`Value`] converts from [`serde_json::Value`] and implements
//!   [`Serialize`] / [`Deserialize`]
//! - [`ValidationError::to_json_value`] renders a reason tree for API
//!   responses
//!
//! JSON has no undefined, binary or date type: undefined becomes `null` (and
//! is dropped from objects), binary becomes an array of bytes and dates
//! become RFC 3339 strings.
//!
//! # Examples
//!
//! ```
//! use keel_validator::prelude::*;
//! use serde_json::json;
//!
//! let payload = Value::from(json!({"name": "ada", "tags": ["a", 7]}));
//! let validator = keys([
//!     ("name", string()),
//!     ("tags", items(string()).into()),
//! ]);
//!
//! let error = validator.validate(payload).unwrap_err().into_invalid().unwrap();
//! assert_eq!(
//!     error.to_json_value(),
//!     json!({
//!         "message": "invalid keys",
//!         "value": {"name": "ada", "tags": ["a", 7]},
//!         "reasons": {
//!             "tags": {
//!                 "message": "invalid items",
//!                 "value": ["a", 7],
//!                 "reasons": [null, {"message": "value is not a string", "value": 7}]
//!             }
//!         }
//!     })
//! );
//! ```

use crate::foundation::{Map, Reasons, ValidationError, Value};
use chrono::SecondsFormat;
use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::sync::Arc;

// ============================================================================
// CONVERSIONS
// ============================================================================

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Self::Null,
            serde_json::Value::Bool(flag) => Self::Bool(flag),
            serde_json::Value::Number(number) => {
                number.as_f64().map_or(Self::Null, Self::Number)
            }
            serde_json::Value::String(text) => Self::from(text),
            serde_json::Value::Array(elements) => {
                Self::Array(elements.into_iter().map(Self::from).collect::<Arc<[_]>>())
            }
            serde_json::Value::Object(entries) => Self::from(
                entries
                    .into_iter()
                    .map(|(key, value)| (key, Self::from(value)))
                    .collect::<Map>(),
            ),
        }
    }
}

/// Integral numbers render without a fractional part.
fn json_number(number: f64) -> serde_json::Value {
    if let Some(integer) = as_integer(number) {
        return serde_json::Value::from(integer);
    }
    serde_json::Number::from_f64(number).map_or(serde_json::Value::Null, serde_json::Value::Number)
}

fn as_integer(number: f64) -> Option<i64> {
    const LIMIT: f64 = 9_007_199_254_740_992.0; // 2^53
    (number.fract() == 0.0 && number.abs() <= LIMIT).then_some(number as i64)
}

impl Value {
    /// Converts into a [`serde_json::Value`].
    #[must_use]
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Self::Undefined | Self::Null => serde_json::Value::Null,
            Self::Bool(flag) => serde_json::Value::Bool(*flag),
            Self::Number(number) => json_number(*number),
            Self::String(text) => serde_json::Value::String(text.to_string()),
            Self::Binary(bytes) => bytes.iter().copied().collect(),
            Self::Date(date) => {
                serde_json::Value::String(date.to_rfc3339_opts(SecondsFormat::AutoSi, true))
            }
            Self::Array(elements) => elements.iter().map(Self::to_json).collect(),
            Self::Object(record) => serde_json::Value::Object(
                record
                    .iter()
                    .filter(|(_, value)| !value.is_undefined())
                    .map(|(key, value)| (key.clone(), value.to_json()))
                    .collect(),
            ),
        }
    }
}

// ============================================================================
// SERDE
// ============================================================================

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Undefined | Self::Null => serializer.serialize_none(),
            Self::Bool(flag) => serializer.serialize_bool(*flag),
            Self::Number(number) => match as_integer(*number) {
                Some(integer) => serializer.serialize_i64(integer),
                None => serializer.serialize_f64(*number),
            },
            Self::String(text) => serializer.serialize_str(text),
            Self::Binary(bytes) => serializer.serialize_bytes(bytes),
            Self::Date(date) => {
                serializer.collect_str(&date.to_rfc3339_opts(SecondsFormat::AutoSi, true))
            }
            Self::Array(elements) => {
                let mut seq = serializer.serialize_seq(Some(elements.len()))?;
                for element in elements.iter() {
                    seq.serialize_element(element)?;
                }
                seq.end()
            }
            Self::Object(record) => {
                let mut map = serializer.serialize_map(None)?;
                for (key, value) in record.iter().filter(|(_, value)| !value.is_undefined()) {
                    map.serialize_entry(key, value)?;
                }
                map.end()
            }
        }
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        serde_json::Value::deserialize(deserializer).map(Self::from)
    }
}

// ============================================================================
// ERROR RENDERING
// ============================================================================

impl ValidationError {
    /// Renders the reason tree as JSON: `{message, value, reasons?}`.
    ///
    /// Positional reasons become an array with `null` where the element
    /// passed; keyed reasons become an object.
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        let mut object = serde_json::Map::new();
        object.insert("message".to_owned(), self.message().into());
        object.insert("value".to_owned(), self.value().to_json());

        let reasons: Option<serde_json::Value> = match self.reasons() {
            Reasons::None => None,
            Reasons::Positional(slots) => Some(
                slots
                    .iter()
                    .map(|slot| slot.as_ref().map_or(serde_json::Value::Null, Self::to_json_value))
                    .collect(),
            ),
            Reasons::Keyed(entries) => Some(serde_json::Value::Object(
                entries
                    .iter()
                    .map(|(key, error)| (key.clone(), error.to_json_value()))
                    .collect(),
            )),
        };
        if let Some(reasons) = reasons {
            object.insert("reasons".to_owned(), reasons);
        }

        serde_json::Value::Object(object)
    }
}
