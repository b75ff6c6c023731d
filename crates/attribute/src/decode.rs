//! Attribute decoders
//!
//! Every decoder accepts the tagged form of one attribute type and returns
//! the plain value it carries. A decoder is a chain of four steps:
//!
//! 1. the input must be a record,
//! 2. holding exactly one key: its own tag or `NULL`,
//! 3. whose payload passes the tag's validator ([`Keys`] with both keys
//!    allowed to be missing),
//! 4. and the brand is dropped: `{NULL: true}` becomes `Null`, anything else
//!    becomes the payload.
//!
//! Like every leaf, decoders return null and undefined input unchanged.

use crate::tag::Tag;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use bytes::Bytes;
use keel_validator::combinators::{Keys, items, lazy, values};
use keel_validator::foundation::{
    Error, Validate, ValidationError, Validator, Value, allow, transform, wrap,
};
use keel_validator::validators::{plain_object, required};
use std::sync::LazyLock;

const NULL: &str = "NULL";

// ============================================================================
// PAYLOADS
// ============================================================================

fn text() -> Validator {
    keel_validator::validators::string()
}

/// Decimal text, kept as text. Surrounding whitespace is rejected.
fn numeric_text() -> Validator {
    text().and(wrap(
        "numeric_text",
        allow(
            |value: &Value| {
                value
                    .as_str()
                    .is_some_and(|text| text.parse::<f64>().is_ok_and(f64::is_finite))
            },
            "value is not a numeric string",
        ),
    ))
}

fn base64_bytes() -> Validator {
    text().and(wrap(
        "base64",
        transform(|value: Value| {
            let Some(encoded) = value.as_str() else {
                return Err(ValidationError::new("value is not a string", value).into());
            };
            match STANDARD.decode(encoded) {
                Ok(decoded) => Ok(Value::Binary(Bytes::from(decoded))),
                Err(_) => Err(ValidationError::new("value is not valid base64", value).into()),
            }
        }),
    ))
}

fn null_marker() -> Validator {
    wrap(
        "null_marker",
        allow(|value: &Value| matches!(value, Value::Bool(true)), "NULL marker must be true"),
    )
}

// ============================================================================
// BRANDING
// ============================================================================

/// The record holds a single non-null entry under `tag` or `NULL`.
fn single_tag(tag: Tag) -> Validator {
    wrap(
        format!("tagged({tag})"),
        allow(
            move |value: &Value| {
                value.as_object().is_some_and(|record| {
                    record.len() == 1
                        && record.iter().all(|(key, payload)| {
                            (key == tag.as_str() || key == NULL) && !payload.is_nullish()
                        })
                })
            },
            format!("value is not an attribute tagged {tag}"),
        ),
    )
}

fn unbrand(tag: Tag) -> Validator {
    wrap(
        "unbrand",
        transform(move |value: Value| {
            let Some(record) = value.as_object() else {
                return Err(Error::defect("attribute structure did not produce a record"));
            };
            // Absent keys come back as `Undefined`; only a true marker means null.
            if matches!(record.get(NULL), Some(Value::Bool(true))) {
                return Ok(Value::Null);
            }
            Ok(record.get(tag.as_str()).cloned().unwrap_or(Value::Undefined))
        }),
    )
}

fn branded(tag: Tag, payload: Validator) -> Validator {
    let brand = tag.as_str();
    let mut structure = Keys::new().key(brand, payload);
    if tag != Tag::Null {
        structure = structure.key(NULL, null_marker()).missing([brand, NULL]);
    }

    plain_object()
        .and(single_tag(tag))
        .and(structure)
        .and(unbrand(tag))
        .renamed(format!("attribute({tag})"))
}

// ============================================================================
// DECODERS
// ============================================================================

/// Decodes `{S: "text"}` into `"text"`.
#[must_use]
pub fn string() -> Validator {
    branded(Tag::String, text())
}

/// Decodes `{N: "12.5"}` into `"12.5"`.
///
/// The payload is checked to be decimal text but is returned as text; chain
/// [`parse_number`](keel_validator::validators::parse_number) to get a number.
///
/// ```
/// use keel_attribute::decode;
/// use keel_validator::prelude::*;
///
/// let quantity = decode::number().and(parse_number());
/// let wire = Value::object([("N", "12")]);
/// assert_eq!(quantity.validate(wire).ok(), Some(Value::from(12)));
/// ```
#[must_use]
pub fn number() -> Validator {
    branded(Tag::Number, numeric_text())
}

#[must_use]
pub fn boolean() -> Validator {
    branded(Tag::Bool, keel_validator::validators::boolean())
}

/// Accepts only `{NULL: true}`.
#[must_use]
pub fn null() -> Validator {
    branded(Tag::Null, null_marker())
}

/// Decodes `{B: "<base64>"}` into a binary value.
#[must_use]
pub fn binary() -> Validator {
    branded(Tag::Binary, base64_bytes())
}

#[must_use]
pub fn string_set() -> Validator {
    branded(Tag::StringSet, items(required().and(text())).into())
}

#[must_use]
pub fn number_set() -> Validator {
    branded(Tag::NumberSet, items(required().and(numeric_text())).into())
}

#[must_use]
pub fn binary_set() -> Validator {
    branded(Tag::BinarySet, items(required().and(base64_bytes())).into())
}

/// Decodes `{L: [...]}`, running `item` on every element.
///
/// Elements are attributes themselves, so `item` is usually another decoder
/// (or [`attribute`] for mixed lists).
#[must_use]
pub fn list(item: impl Into<Validator>) -> Validator {
    branded(Tag::List, items(required().and(item.into())).into())
}

/// Decodes `{M: {...}}` whose entries are described by `structure`.
///
/// ```
/// use keel_attribute::decode;
/// use keel_validator::prelude::*;
///
/// let address = decode::map(keys([("city", decode::string()), ("zip", decode::number())]));
/// let wire = Value::object([(
///     "M",
///     Value::object([
///         ("city", Value::object([("S", "Lyon")])),
///         ("zip", Value::object([("N", "69001")])),
///     ]),
/// )]);
/// assert_eq!(
///     address.validate(wire).ok(),
///     Some(Value::object([("city", "Lyon"), ("zip", "69001")]))
/// );
/// ```
#[must_use]
pub fn map(structure: Keys) -> Validator {
    branded(Tag::Map, structure.into())
}

// ============================================================================
// ANY ATTRIBUTE
// ============================================================================

fn generic(tag: Tag) -> Validator {
    match tag {
        Tag::String => string(),
        Tag::Number => number(),
        Tag::Bool => boolean(),
        Tag::Null => null(),
        Tag::Binary => binary(),
        Tag::StringSet => string_set(),
        Tag::NumberSet => number_set(),
        Tag::BinarySet => binary_set(),
        Tag::List => list(lazy(attribute)),
        Tag::Map => branded(Tag::Map, values(required().and(lazy(attribute))).into()),
    }
}

static DECODERS: LazyLock<[Validator; 10]> = LazyLock::new(|| Tag::ALL.map(generic));

static ATTRIBUTE: LazyLock<Validator> = LazyLock::new(|| wrap("attribute", transform(dispatch)));

fn dispatch(value: Value) -> Result<Value, Error> {
    let tag = match value.as_object() {
        Some(record) if record.len() == 1 => record.keys().next().and_then(|key| Tag::parse(key)),
        _ => None,
    };
    match tag {
        Some(tag) => {
            tracing::trace!(%tag, "decoding attribute");
            DECODERS[tag.index()].validate(value)
        }
        None => {
            tracing::trace!(kind = value.kind(), "value is not a tagged attribute");
            Err(ValidationError::new("value is not an attribute", value).into())
        }
    }
}

/// Decodes an attribute of any type, recursing into lists and maps.
///
/// Maps decode into records with the same keys; `N` payloads stay text.
///
/// ```
/// use keel_attribute::decode::attribute;
/// use keel_validator::prelude::*;
///
/// let wire = Value::object([(
///     "L",
///     Value::from(vec![
///         Value::object([("S", "a")]),
///         Value::object([("NULL", true)]),
///         Value::object([("M", Value::object([("n", Value::object([("N", "1")]))]))]),
///     ]),
/// )]);
/// let expected = Value::from(vec![
///     Value::from("a"),
///     Value::Null,
///     Value::object([("n", "1")]),
/// ]);
/// assert_eq!(attribute().validate(wire).ok(), Some(expected));
/// ```
#[must_use]
pub fn attribute() -> Validator {
    ATTRIBUTE.clone()
}

/// The generic decoder for one tag, as used by [`attribute`].
#[must_use]
pub fn decoder(tag: Tag) -> Validator {
    DECODERS[tag.index()].clone()
}

// ============================================================================
// ITEMS
// ============================================================================

/// Decodes a top-level item: an untagged record of attributes.
///
/// Same rules as [`Keys`]: declared keys are required unless listed as
/// missing, undeclared keys are dropped.
#[must_use]
pub fn record(structure: Keys) -> Validator {
    let name = format!("record({})", structure.name());
    Validator::from(structure).renamed(name)
}

/// Decodes a top-level item of unknown shape, every entry with [`attribute`].
#[must_use]
pub fn item() -> Validator {
    values(required().and(attribute())).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn tagged(tag: &str, payload: impl Into<Value>) -> Value {
        Value::object([(tag, payload.into())])
    }

    fn invalid(result: Result<Value, Error>) -> ValidationError {
        result.unwrap_err().into_invalid().unwrap()
    }

    #[test]
    fn string_unwraps_payload() {
        assert_eq!(string().validate(tagged("S", "hi")).unwrap(), Value::from("hi"));
    }

    #[test]
    fn number_keeps_text() {
        assert_eq!(number().validate(tagged("N", "123")).unwrap(), Value::from("123"));
    }

    #[rstest]
    #[case("abc")]
    #[case("")]
    #[case("NaN")]
    fn number_rejects_non_numeric_text(#[case] payload: &str) {
        let error = invalid(number().validate(tagged("N", payload)));
        assert_eq!(error.message(), "invalid keys");
        assert_eq!(
            error.reasons().get("N").unwrap().message(),
            "value is not a numeric string"
        );
    }

    #[rstest]
    #[case(" 12 ")]
    #[case("12\n")]
    #[case("\t1.5")]
    fn number_rejects_padded_text(#[case] payload: &str) {
        let error = invalid(number().validate(tagged("N", payload)));
        assert_eq!(
            error.reasons().get("N").unwrap().message(),
            "value is not a numeric string"
        );
    }

    #[rstest]
    #[case(string(), tagged("S", "hi"), Value::from("hi"))]
    #[case(number(), tagged("N", "0"), Value::from("0"))]
    #[case(boolean(), tagged("BOOL", false), Value::from(false))]
    fn payload_is_not_mistaken_for_null(
        #[case] decoder: Validator,
        #[case] wire: Value,
        #[case] expected: Value,
    ) {
        assert_eq!(decoder.validate(wire).unwrap(), expected);
    }

    #[test]
    fn binary_decodes_base64() {
        let output = binary().validate(tagged("B", "aGk=")).unwrap();
        assert_eq!(output, Value::from(Bytes::from_static(b"hi")));

        let error = invalid(binary().validate(tagged("B", "not base64!")));
        assert_eq!(
            error.reasons().get("B").unwrap().message(),
            "value is not valid base64"
        );
    }

    #[test]
    fn sets_decode_every_member() {
        let output = number_set()
            .validate(tagged("NS", Value::array(["1", "2.5"])))
            .unwrap();
        assert_eq!(output, Value::array(["1", "2.5"]));

        let mixed = Value::from(vec![Value::from("a"), Value::from(1)]);
        let error = invalid(string_set().validate(tagged("SS", mixed)));
        let members = error.reasons().get("SS").unwrap();
        assert_eq!(members.message(), "invalid items");
        assert!(members.reasons().at(0).is_none());
        assert_eq!(members.reasons().at(1).unwrap().message(), "value is not a string");
    }

    #[test]
    fn wrong_tag_is_rejected() {
        let error = invalid(string().validate(tagged("N", "1")));
        assert_eq!(error.message(), "value is not an attribute tagged S");
        assert!(error.is_leaf());
    }

    #[test]
    fn several_tags_are_rejected() {
        let wire = Value::object([("S", Value::from("a")), ("NULL", Value::from(true))]);
        let error = invalid(string().validate(wire));
        assert_eq!(error.message(), "value is not an attribute tagged S");
    }

    #[test]
    fn null_payload_is_rejected() {
        let error = invalid(string().validate(tagged("S", Value::Null)));
        assert_eq!(error.message(), "value is not an attribute tagged S");
    }

    #[test]
    fn false_null_marker_is_rejected() {
        let error = invalid(string().validate(tagged("NULL", false)));
        assert_eq!(error.message(), "invalid keys");
        assert_eq!(
            error.reasons().get("NULL").unwrap().message(),
            "NULL marker must be true"
        );
    }

    #[test]
    fn dispatch_rejects_unknown_tags() {
        let error = invalid(attribute().validate(tagged("X", "1")));
        assert_eq!(error.message(), "value is not an attribute");

        let error = invalid(attribute().validate(Value::from("plain")));
        assert_eq!(error.message(), "value is not an attribute");
    }

    #[test]
    fn decoder_matches_tag() {
        for tag in Tag::ALL {
            assert_eq!(decoder(tag).name(), format!("attribute({tag})"));
        }
    }

    #[test]
    fn nested_failures_carry_their_path() {
        let wire = tagged(
            "M",
            Value::object([("tags", tagged("L", Value::from(vec![tagged("S", 1)])))]),
        );
        let error = invalid(attribute().validate(wire));
        let paths: Vec<String> = error
            .flatten()
            .into_iter()
            .map(|(path, _)| path.to_string())
            .collect();
        assert_eq!(paths, vec!["M.tags.L[0].S"]);
    }
}
