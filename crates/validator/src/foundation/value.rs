//! Dynamic value model
//!
//! Validators operate on [`Value`], an untyped value that keeps the two
//! "nothing" states apart ([`Value::Undefined`] for a value that was never
//! provided, [`Value::Null`] for an explicit null) and shares composite
//! payloads behind [`Arc`] so that reference identity is observable.
//!
//! Identity is what aggregators use to decide whether anything was
//! transformed. [`Value::same`] compares arrays, objects and binary buffers
//! by reference and everything else by value.

use bytes::Bytes;
use chrono::{DateTime, SecondsFormat, Utc};
use indexmap::IndexMap;
use std::fmt;
use std::sync::Arc;

/// Insertion-ordered record payload.
pub type Map = IndexMap<String, Value>;

/// An untyped input or output value.
///
/// Cloning is cheap: strings, arrays and objects are reference-counted.
///
/// # Examples
///
/// ```
/// use keel_validator::foundation::Value;
///
/// let tags = Value::array(["a", "b"]);
/// let copy = tags.clone();
/// assert!(tags.same(&copy));
///
/// let rebuilt = Value::array(["a", "b"]);
/// assert_eq!(tags, rebuilt);
/// assert!(!tags.same(&rebuilt));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Value {
    /// No value at all (a missing key, an omitted argument).
    #[default]
    Undefined,
    /// An explicit null.
    Null,
    Bool(bool),
    Number(f64),
    String(Arc<str>),
    Binary(Bytes),
    Date(DateTime<Utc>),
    Array(Arc<[Value]>),
    Object(Arc<Map>),
}

impl Value {
    /// Builds a string value.
    pub fn string(text: impl Into<Arc<str>>) -> Self {
        Self::String(text.into())
    }

    /// Builds an array value from anything convertible into values.
    pub fn array<I, T>(elements: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Value>,
    {
        Self::Array(elements.into_iter().map(Into::<Value>::into).collect())
    }

    /// Builds an object value, preserving the order of `entries`.
    pub fn object<I, K, T>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, T)>,
        K: Into<String>,
        T: Into<Value>,
    {
        Self::Object(Arc::new(
            entries
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        ))
    }

    /// Returns `true` for [`Value::Null`] and [`Value::Undefined`].
    #[inline]
    pub fn is_nullish(&self) -> bool {
        matches!(self, Self::Null | Self::Undefined)
    }

    #[inline]
    pub fn is_undefined(&self) -> bool {
        matches!(self, Self::Undefined)
    }

    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Short name of the variant, used in failure messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Undefined => "undefined",
            Self::Null => "null",
            Self::Bool(_) => "boolean",
            Self::Number(_) => "number",
            Self::String(_) => "string",
            Self::Binary(_) => "binary",
            Self::Date(_) => "date",
            Self::Array(_) => "array",
            Self::Object(_) => "object",
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(flag) => Some(*flag),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(number) => Some(*number),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_bytes(&self) -> Option<&Bytes> {
        match self {
            Self::Binary(bytes) => Some(bytes),
            _ => None,
        }
    }

    pub fn as_date(&self) -> Option<DateTime<Utc>> {
        match self {
            Self::Date(date) => Some(*date),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Self::Array(elements) => Some(elements),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&Map> {
        match self {
            Self::Object(record) => Some(record),
            _ => None,
        }
    }

    /// Looks up an own key of an object value.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.as_object().and_then(|record| record.get(key))
    }

    /// Identity comparison.
    ///
    /// Arrays, objects and binary buffers are the same only when they share
    /// storage; primitives are the same when they are equal. `NaN` is never
    /// the same as anything, itself included.
    pub fn same(&self, other: &Value) -> bool {
        match (self, other) {
            (Self::Undefined, Self::Undefined) | (Self::Null, Self::Null) => true,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Number(a), Self::Number(b)) => a == b,
            (Self::String(a), Self::String(b)) => a == b,
            (Self::Date(a), Self::Date(b)) => a == b,
            (Self::Binary(a), Self::Binary(b)) => {
                a.as_ptr() == b.as_ptr() && a.len() == b.len()
            }
            (Self::Array(a), Self::Array(b)) => Arc::ptr_eq(a, b),
            (Self::Object(a), Self::Object(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Undefined => f.write_str("undefined"),
            Self::Null => f.write_str("null"),
            Self::Bool(flag) => write!(f, "{flag}"),
            Self::Number(number) => write!(f, "{number}"),
            Self::String(text) => write!(f, "{text:?}"),
            Self::Binary(bytes) => write!(f, "<{} bytes>", bytes.len()),
            Self::Date(date) => f.write_str(&date.to_rfc3339_opts(SecondsFormat::AutoSi, true)),
            Self::Array(elements) => {
                f.write_str("[")?;
                for (index, element) in elements.iter().enumerate() {
                    if index > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{element}")?;
                }
                f.write_str("]")
            }
            Self::Object(record) => {
                f.write_str("{")?;
                for (index, (key, value)) in record.iter().enumerate() {
                    if index > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{key:?}: {value}")?;
                }
                f.write_str("}")
            }
        }
    }
}

// ============================================================================
// CONVERSIONS
// ============================================================================

impl From<bool> for Value {
    fn from(flag: bool) -> Self {
        Self::Bool(flag)
    }
}

impl From<f64> for Value {
    fn from(number: f64) -> Self {
        Self::Number(number)
    }
}

impl From<i32> for Value {
    fn from(number: i32) -> Self {
        Self::Number(f64::from(number))
    }
}

impl From<i64> for Value {
    fn from(number: i64) -> Self {
        Self::Number(number as f64)
    }
}

impl From<u32> for Value {
    fn from(number: u32) -> Self {
        Self::Number(f64::from(number))
    }
}

impl From<usize> for Value {
    fn from(number: usize) -> Self {
        Self::Number(number as f64)
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Self::String(text.into())
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Self::String(text.into())
    }
}

impl From<Arc<str>> for Value {
    fn from(text: Arc<str>) -> Self {
        Self::String(text)
    }
}

impl From<Bytes> for Value {
    fn from(bytes: Bytes) -> Self {
        Self::Binary(bytes)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(date: DateTime<Utc>) -> Self {
        Self::Date(date)
    }
}

impl From<Vec<Value>> for Value {
    fn from(elements: Vec<Value>) -> Self {
        Self::Array(elements.into())
    }
}

impl From<Map> for Value {
    fn from(record: Map) -> Self {
        Self::Object(Arc::new(record))
    }
}

/// `None` becomes [`Value::Null`].
impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nullish_covers_null_and_undefined() {
        assert!(Value::Null.is_nullish());
        assert!(Value::Undefined.is_nullish());
        assert!(!Value::Bool(false).is_nullish());
        assert!(!Value::from("").is_nullish());
    }

    #[test]
    fn composites_compare_by_reference() {
        let record = Value::object([("a", 1)]);
        assert!(record.same(&record.clone()));
        assert!(!record.same(&Value::object([("a", 1)])));
        assert_eq!(record, Value::object([("a", 1)]));
    }

    #[test]
    fn primitives_compare_by_value() {
        assert!(Value::from("x").same(&Value::from(String::from("x"))));
        assert!(Value::from(1).same(&Value::Number(1.0)));
        assert!(!Value::Number(f64::NAN).same(&Value::Number(f64::NAN)));
        assert!(!Value::Null.same(&Value::Undefined));
    }

    #[test]
    fn binary_compares_by_buffer() {
        let bytes = Bytes::from_static(b"abc");
        let a = Value::Binary(bytes.clone());
        assert!(a.same(&Value::Binary(bytes)));
        assert!(!a.same(&Value::Binary(Bytes::from(b"abc".to_vec()))));
    }

    #[test]
    fn display_renders_nested_values() {
        let value = Value::object([("name", Value::from("x")), ("tags", Value::array([1, 2]))]);
        assert_eq!(value.to_string(), r#"{"name": "x", "tags": [1, 2]}"#);
        assert_eq!(Value::Undefined.to_string(), "undefined");
    }

    #[test]
    fn option_none_is_null() {
        assert_eq!(Value::from(None::<i32>), Value::Null);
        assert_eq!(Value::from(Some(3)), Value::Number(3.0));
    }
}
