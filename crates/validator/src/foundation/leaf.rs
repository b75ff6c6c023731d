//! Leaf constructors
//!
//! [`allow`] and [`transform`] are where the nullability pass-through is
//! implemented, once: a null or undefined input is returned unchanged and
//! the wrapped predicate / transform never sees it. Every leaf validator in
//! the crate goes through one of them.

use crate::foundation::error::{Error, ValidationError};
use crate::foundation::traits::Nullable;
use crate::foundation::value::Value;
use std::borrow::Cow;

/// Builds a checking function from a predicate.
///
/// - nullish input: returned unchanged, `predicate` is not called;
/// - `predicate` holds: the input is returned unchanged;
/// - otherwise: fails with `message` and the rejected input.
///
/// The result is meant to be passed to [`wrap`](crate::foundation::wrap).
pub fn allow<I, P>(
    predicate: P,
    message: impl Into<Cow<'static, str>>,
) -> impl Fn(I) -> Result<I, Error> + Send + Sync + 'static
where
    I: Nullable + Into<Value> + 'static,
    P: Fn(&I) -> bool + Send + Sync + 'static,
{
    let message = message.into();
    move |input: I| {
        if input.is_nullish() || predicate(&input) {
            Ok(input)
        } else {
            Err(ValidationError::new(message.clone(), input.into()).into())
        }
    }
}

/// Builds a converting function from a mapping.
///
/// Nullish input is returned unchanged (converted into `O`). Everything else
/// goes through `convert`, which may itself fail: with
/// [`Error::Invalid`] when the input only proves invalid during conversion,
/// or with [`Error::Defect`]. Neither is altered on the way out.
///
/// # Examples
///
/// ```
/// use keel_validator::foundation::{Validate, Value, transform, wrap};
///
/// let shout = wrap(
///     "shout",
///     transform(|value: Value| Ok(Value::from(value.to_string().to_uppercase()))),
/// );
/// assert_eq!(shout.validate(Value::from(true)).ok(), Some(Value::from("TRUE")));
/// assert_eq!(shout.validate(Value::Null).ok(), Some(Value::Null));
/// ```
pub fn transform<I, O, F>(convert: F) -> impl Fn(I) -> Result<O, Error> + Send + Sync + 'static
where
    I: Nullable + 'static,
    O: From<I> + 'static,
    F: Fn(I) -> Result<O, Error> + Send + Sync + 'static,
{
    move |input: I| {
        if input.is_nullish() {
            Ok(O::from(input))
        } else {
            convert(input)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::{Validate, wrap};
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Debug, thiserror::Error)]
    #[error("conversion table is corrupt")]
    struct CorruptTable;

    #[test]
    fn allow_skips_predicate_for_nullish() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let check = wrap(
            "counted",
            allow(
                move |_: &Value| {
                    counter.fetch_add(1, Ordering::SeqCst);
                    false
                },
                "never valid",
            ),
        );

        assert_eq!(check.validate(Value::Null).ok(), Some(Value::Null));
        assert_eq!(check.validate(Value::Undefined).ok(), Some(Value::Undefined));
        assert_eq!(calls.load(Ordering::SeqCst), 0);

        let error = check.validate(Value::from(1)).unwrap_err().into_invalid().unwrap();
        assert_eq!(error.message(), "never valid");
        assert_eq!(error.value(), &Value::from(1));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn allow_returns_input_unchanged() {
        let input = Value::array([1, 2]);
        let check = wrap("any", allow(|_: &Value| true, "unused"));
        assert!(check.validate(input.clone()).unwrap().same(&input));
    }

    #[test]
    fn allow_works_on_options() {
        let short = wrap(
            "short",
            allow(|s: &Option<String>| s.as_ref().is_some_and(|s| s.len() < 4), "too long"),
        );
        assert_eq!(short.validate(None).ok(), Some(None));
        assert!(short.validate(Some("abc".into())).is_ok());
        assert!(short.validate(Some("abcdef".into())).is_err());
    }

    #[test]
    fn transform_passes_nullish_through() {
        let negate = wrap(
            "negate",
            transform(|value: Value| Ok(Value::Number(-value.as_f64().unwrap_or_default()))),
        );
        assert_eq!(negate.validate(Value::from(2)).ok(), Some(Value::from(-2)));
        assert_eq!(negate.validate(Value::Null).ok(), Some(Value::Null));
        assert_eq!(negate.validate(Value::Undefined).ok(), Some(Value::Undefined));
    }

    #[test]
    fn transform_does_not_convert_defects() {
        let broken = wrap(
            "broken",
            transform(|_: Value| -> Result<Value, Error> { Err(Error::defect(CorruptTable)) }),
        );
        let error = broken.validate(Value::from("x")).unwrap_err();
        assert!(error.downcast_defect::<CorruptTable>().is_some());
    }
}
