//! Type validators
//!
//! One check per [`Value`] variant. They never convert: use
//! [`parse_number`](super::parse_number) or [`parse_date`](super::parse_date)
//! for that.

use crate::foundation::{Validator, Value, allow, wrap};

/// Accepts strings.
#[must_use]
pub fn string() -> Validator {
    wrap(
        "string",
        allow(|value: &Value| matches!(value, Value::String(_)), "value is not a string"),
    )
}

/// Accepts numbers, `NaN` and infinities included; see
/// [`finite`](super::finite).
#[must_use]
pub fn number() -> Validator {
    wrap(
        "number",
        allow(|value: &Value| matches!(value, Value::Number(_)), "value is not a number"),
    )
}

/// Accepts finite numbers without a fractional part.
#[must_use]
pub fn integer() -> Validator {
    wrap(
        "integer",
        allow(
            |value: &Value| {
                value
                    .as_f64()
                    .is_some_and(|number| number.is_finite() && number.fract() == 0.0)
            },
            "value is not an integer",
        ),
    )
}

#[must_use]
pub fn boolean() -> Validator {
    wrap(
        "boolean",
        allow(|value: &Value| matches!(value, Value::Bool(_)), "value is not a boolean"),
    )
}

#[must_use]
pub fn array() -> Validator {
    wrap(
        "array",
        allow(|value: &Value| matches!(value, Value::Array(_)), "value is not an array"),
    )
}

/// Accepts records. Arrays, dates and binary buffers are not records.
#[must_use]
pub fn plain_object() -> Validator {
    wrap(
        "plain_object",
        allow(|value: &Value| matches!(value, Value::Object(_)), "value is not an object"),
    )
}

#[must_use]
pub fn binary() -> Validator {
    wrap(
        "binary",
        allow(|value: &Value| matches!(value, Value::Binary(_)), "value is not binary"),
    )
}

#[must_use]
pub fn date() -> Validator {
    wrap(
        "date",
        allow(|value: &Value| matches!(value, Value::Date(_)), "value is not a date"),
    )
}
