//! String validators
//!
//! Length checks also apply to arrays, records and binary buffers; the
//! transforms ([`trim`], [`lowercase`], [`replace`]) only accept strings.

use crate::foundation::{Error, ValidationError, Validator, Value, allow, transform, wrap};
#[cfg(feature = "regex")]
use regex::Regex;

// ============================================================================
// LENGTH
// ============================================================================

/// Length of a string (in characters), array, record or binary buffer.
fn length(value: &Value) -> Option<usize> {
    match value {
        Value::String(text) => Some(text.chars().count()),
        Value::Binary(bytes) => Some(bytes.len()),
        Value::Array(elements) => Some(elements.len()),
        Value::Object(record) => Some(record.len()),
        _ => None,
    }
}

/// Rejects empty strings, arrays, records and buffers.
#[must_use]
pub fn not_empty() -> Validator {
    wrap(
        "not_empty",
        allow(|value: &Value| length(value).is_some_and(|len| len > 0), "value must not be empty"),
    )
}

#[must_use]
pub fn min_length(min: usize) -> Validator {
    wrap(
        format!("min_length({min})"),
        allow(
            move |value: &Value| length(value).is_some_and(|len| len >= min),
            format!("value must have a length of at least {min}"),
        ),
    )
}

#[must_use]
pub fn max_length(max: usize) -> Validator {
    wrap(
        format!("max_length({max})"),
        allow(
            move |value: &Value| length(value).is_some_and(|len| len <= max),
            format!("value must have a length of at most {max}"),
        ),
    )
}

// ============================================================================
// TRANSFORMS
// ============================================================================

fn not_a_string(value: Value) -> Error {
    ValidationError::new("value is not a string", value).into()
}

/// Strips leading and trailing whitespace.
///
/// A string with nothing to strip is returned as is.
#[must_use]
pub fn trim() -> Validator {
    wrap(
        "trim",
        transform(|value: Value| {
            let Some(text) = value.as_str() else {
                return Err(not_a_string(value));
            };
            let trimmed = text.trim();
            if trimmed.len() == text.len() {
                Ok(value)
            } else {
                Ok(Value::from(trimmed))
            }
        }),
    )
}

#[must_use]
pub fn lowercase() -> Validator {
    wrap(
        "lowercase",
        transform(|value: Value| {
            let Some(text) = value.as_str() else {
                return Err(not_a_string(value));
            };
            if text.chars().any(char::is_uppercase) {
                Ok(Value::from(text.to_lowercase()))
            } else {
                Ok(value)
            }
        }),
    )
}

// ============================================================================
// PATTERNS
// ============================================================================

/// Accepts strings matching `regex`.
///
/// # Examples
///
/// ```
/// use keel_validator::prelude::*;
/// use regex::Regex;
///
/// let slug = pattern(Regex::new(r"^[a-z0-9-]+$").unwrap());
/// assert!(slug.validate(Value::from("hello-world")).is_ok());
/// assert!(slug.validate(Value::from("Hello World")).is_err());
/// ```
#[cfg(feature = "regex")]
#[must_use]
pub fn pattern(regex: Regex) -> Validator {
    let message = format!("value must match {}", regex.as_str());
    wrap(
        format!("pattern({})", regex.as_str()),
        allow(
            move |value: &Value| value.as_str().is_some_and(|text| regex.is_match(text)),
            message,
        ),
    )
}

/// Replaces every match of `regex` with `replacement` (which may use `$1`
/// style group references).
///
/// Fails when the string does not match at all.
#[cfg(feature = "regex")]
#[must_use]
pub fn replace(regex: Regex, replacement: impl Into<String>) -> Validator {
    let replacement = replacement.into();
    let name = format!("replace({})", regex.as_str());
    wrap(
        name,
        transform(move |value: Value| {
            let Some(text) = value.as_str() else {
                return Err(not_a_string(value));
            };
            if !regex.is_match(text) {
                let message = format!("value does not match {}", regex.as_str());
                return Err(ValidationError::new(message, value).into());
            }
            let replaced = regex.replace_all(text, replacement.as_str()).into_owned();
            Ok(Value::from(replaced))
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::Validate;
    use rstest::rstest;

    #[rstest]
    #[case(Value::from("abc"), true)]
    #[case(Value::from("ab"), false)]
    #[case(Value::from("héé"), true)]
    #[case(Value::array([1, 2, 3]), true)]
    #[case(Value::from(123), false)]
    fn min_length_counts_characters(#[case] input: Value, #[case] accepted: bool) {
        assert_eq!(min_length(3).validate(input).is_ok(), accepted);
    }

    #[test]
    fn max_length_message_names_bound() {
        let error = max_length(2).validate(Value::from("abc")).unwrap_err();
        assert_eq!(
            error.as_invalid().map(ValidationError::message),
            Some("value must have a length of at most 2")
        );
    }

    #[test]
    fn not_empty_rejects_empty_containers() {
        assert!(not_empty().validate(Value::from("")).is_err());
        assert!(not_empty().validate(Value::array(Vec::<Value>::new())).is_err());
        assert!(not_empty().validate(Value::from(" ")).is_ok());
    }

    #[test]
    fn trim_keeps_clean_strings() {
        assert_eq!(trim().validate(Value::from("  a b ")).ok(), Some(Value::from("a b")));
        let clean = Value::from("ab");
        assert_eq!(trim().validate(clean.clone()).ok(), Some(clean));
        assert!(trim().validate(Value::from(1)).is_err());
    }

    #[test]
    fn lowercase_converts() {
        assert_eq!(lowercase().validate(Value::from("AbC")).ok(), Some(Value::from("abc")));
        assert_eq!(lowercase().validate(Value::Null).ok(), Some(Value::Null));
    }

    #[cfg(feature = "regex")]
    #[test]
    fn replace_requires_a_match() {
        let dashes = replace(Regex::new(r"\s+").unwrap(), "-");
        assert_eq!(dashes.validate(Value::from("a b  c")).ok(), Some(Value::from("a-b-c")));

        let error = dashes.validate(Value::from("abc")).unwrap_err().into_invalid().unwrap();
        assert_eq!(error.message(), r"value does not match \s+");
    }

    #[cfg(feature = "regex")]
    #[test]
    fn pattern_rejects_non_strings() {
        let digits = pattern(Regex::new(r"^\d+$").unwrap());
        assert!(digits.validate(Value::from("123")).is_ok());
        assert!(digits.validate(Value::from(123)).is_err());
    }
}
