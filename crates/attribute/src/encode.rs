//! Attribute encoder

use crate::tag::Tag;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use chrono::SecondsFormat;
use keel_validator::combinators::{items, values};
use keel_validator::foundation::{
    Map, Validate, ValidationError, ValidationResult, Validator, Value, wrap,
};
use std::sync::LazyLock;

static ENCODER: LazyLock<Validator> = LazyLock::new(|| wrap("encode", encode));

/// Maps a plain value to its tagged form.
///
/// | value     | attribute                   |
/// |-----------|-----------------------------|
/// | `Null`    | `{NULL: true}`              |
/// | `Bool`    | `{BOOL: b}`                 |
/// | `Number`  | `{N: "<decimal text>"}`     |
/// | `String`  | `{S: s}`                    |
/// | `Binary`  | `{B: "<base64>"}`           |
/// | `Date`    | `{S: "<RFC 3339, UTC Z>"}`  |
/// | `Array`   | `{L: [...]}`                |
/// | `Object`  | `{M: {...}}`                |
///
/// Undefined entries of a record are dropped. A top-level `Undefined` and
/// non-finite numbers cannot be encoded; nested failures are reported with
/// positional or keyed reasons like any aggregator.
///
/// # Examples
///
/// ```
/// use keel_attribute::encode;
/// use keel_validator::prelude::*;
///
/// let encoded = encode(Value::object([("qty", 3)])).unwrap();
/// assert_eq!(
///     encoded,
///     Value::object([("M", Value::object([("qty", Value::object([("N", "3")]))]))])
/// );
/// ```
pub fn encode(value: Value) -> ValidationResult<Value> {
    let (tag, payload) = match value {
        Value::Undefined => {
            return Err(ValidationError::new("value is undefined", value).into());
        }
        Value::Null => (Tag::Null, Value::Bool(true)),
        Value::Bool(_) => (Tag::Bool, value),
        Value::Number(number) if number.is_finite() => {
            (Tag::Number, Value::from(number.to_string()))
        }
        Value::Number(_) => {
            return Err(ValidationError::new("value is not a finite number", value).into());
        }
        Value::String(_) => (Tag::String, value),
        Value::Binary(ref bytes) => (Tag::Binary, Value::from(STANDARD.encode(bytes))),
        Value::Date(date) => (
            Tag::String,
            Value::from(date.to_rfc3339_opts(SecondsFormat::AutoSi, true)),
        ),
        Value::Array(_) => (Tag::List, items(encoder()).validate(value)?),
        Value::Object(ref record) => {
            let defined: Map = record
                .iter()
                .filter(|(_, entry)| !entry.is_undefined())
                .map(|(key, entry)| (key.clone(), entry.clone()))
                .collect();
            (Tag::Map, values(encoder()).validate(Value::from(defined))?)
        }
    };
    Ok(Value::object([(tag.as_str(), payload)]))
}

/// [`encode`] as a validator, for chaining after other validators.
#[must_use]
pub fn encoder() -> Validator {
    ENCODER.clone()
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::Bytes;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn tagged(tag: &str, payload: impl Into<Value>) -> Value {
        Value::object([(tag, payload.into())])
    }

    #[rstest]
    #[case(Value::Null, tagged("NULL", true))]
    #[case(Value::from(false), tagged("BOOL", false))]
    #[case(Value::from(42), tagged("N", "42"))]
    #[case(Value::from(-0.5), tagged("N", "-0.5"))]
    #[case(Value::from("hi"), tagged("S", "hi"))]
    #[case(Value::from(Bytes::from_static(b"hi")), tagged("B", "aGk="))]
    fn encodes_scalars(#[case] value: Value, #[case] expected: Value) {
        assert_eq!(encode(value).unwrap(), expected);
    }

    #[test]
    fn encodes_dates_as_strings() {
        assert_eq!(encode(epoch()).unwrap(), tagged("S", "1970-01-01T00:00:00Z"));
        // Same text as the value's own rendering.
        assert_eq!(encode(epoch()).unwrap(), tagged("S", epoch().to_string()));
    }

    fn epoch() -> Value {
        keel_validator::validators::parse_date()
            .validate(Value::from("1970-01-01T00:00:00Z"))
            .unwrap()
    }

    #[test]
    fn encodes_nested_values() {
        let value = Value::object([
            ("tags", Value::array(["a"])),
            ("gone", Value::Undefined),
            ("note", Value::Null),
        ]);
        let expected = tagged(
            "M",
            Value::object([
                ("tags", tagged("L", Value::from(vec![tagged("S", "a")]))),
                ("note", tagged("NULL", true)),
            ]),
        );
        assert_eq!(encode(value).unwrap(), expected);
    }

    #[test]
    fn rejects_what_has_no_attribute_form() {
        let error = encode(Value::Undefined).unwrap_err().into_invalid().unwrap();
        assert_eq!(error.message(), "value is undefined");

        let value = Value::from(vec![Value::from(1), Value::from(f64::NAN)]);
        let error = encode(value).unwrap_err().into_invalid().unwrap();
        assert_eq!(error.message(), "invalid items");
        assert!(error.reasons().at(0).is_none());
        assert_eq!(
            error.reasons().at(1).unwrap().message(),
            "value is not a finite number"
        );
    }
}
