//! Numeric validators
//!
//! Bounds are inclusive. Non-numbers fail every bound check; pair them with
//! [`number`](super::number) for a clearer message.

use crate::foundation::{ValidationError, Validator, Value, allow, transform, wrap};

// ============================================================================
// BOUNDS
// ============================================================================

#[must_use]
pub fn min(bound: f64) -> Validator {
    wrap(
        format!("min({bound})"),
        allow(
            move |value: &Value| value.as_f64().is_some_and(|number| number >= bound),
            format!("value must be at least {bound}"),
        ),
    )
}

#[must_use]
pub fn max(bound: f64) -> Validator {
    wrap(
        format!("max({bound})"),
        allow(
            move |value: &Value| value.as_f64().is_some_and(|number| number <= bound),
            format!("value must be at most {bound}"),
        ),
    )
}

/// Accepts numbers in `low..=high`.
///
/// # Examples
///
/// ```
/// use keel_validator::prelude::*;
///
/// let percent = in_range(0.0, 100.0);
/// assert!(percent.validate(Value::from(100)).is_ok());
/// assert!(percent.validate(Value::from(100.5)).is_err());
/// ```
#[must_use]
pub fn in_range(low: f64, high: f64) -> Validator {
    wrap(
        format!("in_range({low}, {high})"),
        allow(
            move |value: &Value| value.as_f64().is_some_and(|number| (low..=high).contains(&number)),
            format!("value must be between {low} and {high}"),
        ),
    )
}

/// Rejects `NaN` and infinities.
#[must_use]
pub fn finite() -> Validator {
    wrap(
        "finite",
        allow(
            |value: &Value| value.as_f64().is_some_and(f64::is_finite),
            "value must be a finite number",
        ),
    )
}

// ============================================================================
// PARSING
// ============================================================================

/// Converts numeric strings into numbers.
///
/// Numbers pass unchanged. Strings are trimmed and parsed; empty, non-numeric
/// and non-finite text (`"inf"`, `"NaN"`) is rejected.
///
/// # Examples
///
/// ```
/// use keel_validator::prelude::*;
///
/// assert_eq!(parse_number().validate(Value::from(" 12.5")).ok(), Some(Value::from(12.5)));
/// assert!(parse_number().validate(Value::from("12px")).is_err());
/// ```
#[must_use]
pub fn parse_number() -> Validator {
    wrap(
        "parse_number",
        transform(|value: Value| {
            if let Value::Number(_) = value {
                return Ok(value);
            }
            let parsed = match value.as_str() {
                Some(text) => text.trim().parse::<f64>().ok().filter(|number| number.is_finite()),
                None => return Err(ValidationError::new("value is not a number", value).into()),
            };
            match parsed {
                Some(number) => Ok(Value::Number(number)),
                None => Err(ValidationError::new("value is not a numeric string", value).into()),
            }
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::Validate;
    use rstest::rstest;

    #[rstest]
    #[case("123", 123.0)]
    #[case("-0.5", -0.5)]
    #[case(" 1e3 ", 1000.0)]
    fn parse_number_accepts(#[case] text: &str, #[case] expected: f64) {
        assert_eq!(parse_number().validate(Value::from(text)).ok(), Some(Value::from(expected)));
    }

    #[rstest]
    #[case("")]
    #[case("abc")]
    #[case("inf")]
    #[case("NaN")]
    fn parse_number_rejects(#[case] text: &str) {
        let error = parse_number().validate(Value::from(text)).unwrap_err().into_invalid().unwrap();
        assert_eq!(error.message(), "value is not a numeric string");
    }

    #[test]
    fn parse_number_rejects_other_types() {
        assert!(parse_number().validate(Value::from(true)).is_err());
        assert_eq!(parse_number().validate(Value::from(4)).ok(), Some(Value::from(4)));
    }

    #[test]
    fn bounds_are_inclusive() {
        assert!(min(1.0).validate(Value::from(1)).is_ok());
        assert!(min(1.0).validate(Value::from(0.5)).is_err());
        assert!(max(1.0).validate(Value::from(1)).is_ok());
        assert!(max(1.0).validate(Value::from(2)).is_err());
        assert!(in_range(0.0, 1.0).validate(Value::from("0.5")).is_err());
    }

    #[test]
    fn finite_rejects_nan() {
        assert!(finite().validate(Value::from(f64::NAN)).is_err());
        assert!(finite().validate(Value::from(1)).is_ok());
    }

    #[test]
    fn bound_messages_format_integers_plainly() {
        let error = min(18.0).validate(Value::from(3)).unwrap_err();
        assert_eq!(error.to_string(), "value must be at least 18 (got 3)");
    }
}
