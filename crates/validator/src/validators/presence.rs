//! Presence validators
//!
//! Every other leaf lets null and undefined through. These three are the
//! only ones that look at nullish input, and only [`required`] and
//! [`defined`] ever reject it.

use crate::foundation::{Error, ValidationError, Validator, Value, wrap};

/// Rejects [`Value::Null`] and [`Value::Undefined`].
///
/// # Examples
///
/// ```
/// use keel_validator::prelude::*;
///
/// assert!(required().validate(Value::from(0)).is_ok());
/// assert!(required().validate(Value::Null).is_err());
/// assert!(required().validate(Value::Undefined).is_err());
/// ```
#[must_use]
pub fn required() -> Validator {
    wrap("required", |value: Value| -> Result<Value, Error> {
        if value.is_nullish() {
            Err(ValidationError::new("value is required", value).into())
        } else {
            Ok(value)
        }
    })
}

/// Identity. Documents that a value may be absent.
#[must_use]
pub fn optional() -> Validator {
    wrap("optional", |value: Value| -> Result<Value, Error> { Ok(value) })
}

/// Rejects [`Value::Undefined`] only; an explicit null passes.
#[must_use]
pub fn defined() -> Validator {
    wrap("defined", |value: Value| -> Result<Value, Error> {
        if value.is_undefined() {
            Err(ValidationError::new("value must be defined", value).into())
        } else {
            Ok(value)
        }
    })
}
