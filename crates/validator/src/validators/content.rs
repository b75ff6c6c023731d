//! Content validators
//!
//! Compare by value ([`PartialEq`] on [`Value`]), not by identity.

use crate::foundation::{Validator, Value, allow, wrap};

/// Accepts values equal to one of `options`.
///
/// # Examples
///
/// ```
/// use keel_validator::prelude::*;
///
/// let status = one_of(["draft", "published"]);
/// assert!(status.validate(Value::from("draft")).is_ok());
/// assert!(status.validate(Value::from("archived")).is_err());
/// ```
#[must_use]
pub fn one_of<I, T>(options: I) -> Validator
where
    I: IntoIterator<Item = T>,
    T: Into<Value>,
{
    let options: Vec<Value> = options.into_iter().map(Into::into).collect();
    let listed = options
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    wrap(
        format!("one_of({listed})"),
        allow(
            move |value: &Value| options.contains(value),
            format!("value must be one of {listed}"),
        ),
    )
}

/// Accepts values equal to `expected`.
#[must_use]
pub fn equals(expected: impl Into<Value>) -> Validator {
    let expected = expected.into();
    let message = format!("value must equal {expected}");
    wrap(
        format!("equals({expected})"),
        allow(move |value: &Value| *value == expected, message),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::{Validate, ValidationError};

    #[test]
    fn one_of_lists_options() {
        let error = one_of([1, 2]).validate(Value::from(3)).unwrap_err();
        assert_eq!(
            error.as_invalid().map(ValidationError::message),
            Some("value must be one of 1, 2")
        );
    }

    #[test]
    fn equals_compares_structurally() {
        let validator = equals(Value::array([1, 2]));
        assert!(validator.validate(Value::array([1, 2])).is_ok());
        assert!(validator.validate(Value::array([2, 1])).is_err());
        assert!(validator.validate(Value::Undefined).is_ok());
    }
}
