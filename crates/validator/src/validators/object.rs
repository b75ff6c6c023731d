//! Record shape validators

use crate::foundation::{Reasons, ValidationError, Validator, Value, transform, wrap};
use indexmap::IndexSet;

/// Rejects records carrying keys outside `allowed`.
///
/// [`Keys`](crate::combinators::Keys) ignores undeclared keys; chaining this
/// in front of it gives the strict policy. Every unexpected key is reported
/// under its own name.
///
/// # Examples
///
/// ```
/// use keel_validator::prelude::*;
///
/// let point = keys([("x", number()), ("y", number())]);
/// let strict = only_keys(point.declared()).and(point);
///
/// let error = strict.validate(Value::object([("x", 1), ("y", 2), ("z", 3)])).unwrap_err();
/// let error = error.as_invalid().unwrap();
/// assert_eq!(error.message(), "unexpected keys");
/// assert!(error.reasons().get("z").is_some());
/// ```
#[must_use]
pub fn only_keys<I, K>(allowed: I) -> Validator
where
    I: IntoIterator<Item = K>,
    K: Into<String>,
{
    let allowed: IndexSet<String> = allowed.into_iter().map(Into::into).collect();
    wrap(
        "only_keys",
        transform(move |value: Value| {
            let Some(record) = value.as_object() else {
                return Err(ValidationError::new("value is not an object", value).into());
            };
            let unexpected = record
                .iter()
                .filter(|(key, _)| !allowed.contains(key.as_str()))
                .map(|(key, field)| {
                    (key.clone(), ValidationError::new("key is not allowed", field.clone()))
                })
                .collect::<Vec<_>>();
            if unexpected.is_empty() {
                Ok(value)
            } else {
                Err(ValidationError::new("unexpected keys", value)
                    .with_reasons(Reasons::keyed(unexpected))
                    .into())
            }
        }),
    )
}
