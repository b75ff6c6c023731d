//! Type-erased, named validator
//!
//! [`Validator`] wraps any `Fn(I) -> Result<O, Error>` behind an [`Arc`], so
//! it can be cloned for free, stored in heterogeneous collections (the
//! per-key structure of [`Keys`](crate::combinators::Keys)) and shared across
//! threads. Every leaf validator in this crate is a `Validator`.

use crate::combinators::and::And;
use crate::foundation::error::Error;
use crate::foundation::traits::Validate;
use crate::foundation::value::Value;
use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

type Run<I, O> = dyn Fn(I) -> Result<O, Error> + Send + Sync;

/// A named, immutable, shareable validator from `I` to `O`.
///
/// Both parameters default to [`Value`], the common case.
///
/// # Examples
///
/// ```
/// use keel_validator::prelude::*;
///
/// let trimmed_name = string().and(trim()).and(not_empty());
///
/// assert_eq!(trimmed_name.validate(Value::from("  ada ")).ok(), Some(Value::from("ada")));
/// assert!(trimmed_name.validate(Value::from("   ")).is_err());
/// assert_eq!(trimmed_name.validate(Value::Null).ok(), Some(Value::Null));
/// ```
pub struct Validator<I = Value, O = Value> {
    name: Cow<'static, str>,
    run: Arc<Run<I, O>>,
}

impl<I, O> Validator<I, O>
where
    I: 'static,
    O: 'static,
{
    /// Creates a validator from a function. Prefer [`wrap`].
    pub fn new<F>(name: impl Into<Cow<'static, str>>, run: F) -> Self
    where
        F: Fn(I) -> Result<O, Error> + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            run: Arc::new(run),
        }
    }

    /// Sequential composition: `self.and(next)` runs `next` on the output of
    /// `self`. The result is again a [`Validator`].
    pub fn and<V>(self, next: V) -> Validator<I, V::Output>
    where
        V: Validate<Input = O> + Send + Sync + 'static,
        V::Output: 'static,
    {
        And::new(self, next).into()
    }

    /// Returns a copy carrying a different debug name.
    #[must_use]
    pub fn renamed(&self, name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            name: name.into(),
            run: Arc::clone(&self.run),
        }
    }
}

impl<I, O> Validator<I, O> {
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl<I, O> Validate for Validator<I, O> {
    type Input = I;
    type Output = O;

    #[inline]
    fn validate(&self, input: I) -> Result<O, Error> {
        (self.run)(input)
    }

    fn name(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.name)
    }
}

// Manual impls: `I` and `O` need not be `Clone` or `Debug`.
impl<I, O> Clone for Validator<I, O> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            run: Arc::clone(&self.run),
        }
    }
}

impl<I, O> fmt::Debug for Validator<I, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Validator")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

impl<L, R> From<And<L, R>> for Validator<L::Input, R::Output>
where
    L: Validate + Send + Sync + 'static,
    R: Validate<Input = L::Output> + Send + Sync + 'static,
    L::Input: 'static,
    R::Output: 'static,
{
    fn from(chain: And<L, R>) -> Self {
        let name = chain.name().into_owned();
        Validator::new(name, move |input| chain.validate(input))
    }
}

/// Turns a function into a named [`Validator`].
///
/// `wrap` performs no null filtering of its own: pair it with
/// [`allow`](crate::foundation::allow) or
/// [`transform`](crate::foundation::transform) to get the standard
/// nullability pass-through.
///
/// # Examples
///
/// ```
/// use keel_validator::foundation::{Validate, Value, allow, wrap};
///
/// let even = wrap(
///     "even",
///     allow(|value: &Value| value.as_f64().is_some_and(|n| n % 2.0 == 0.0), "value must be even"),
/// );
/// assert!(even.validate(Value::from(4)).is_ok());
/// assert!(even.validate(Value::from(3)).is_err());
/// assert!(even.validate(Value::Undefined).is_ok());
/// ```
pub fn wrap<I, O, F>(name: impl Into<Cow<'static, str>>, run: F) -> Validator<I, O>
where
    I: 'static,
    O: 'static,
    F: Fn(I) -> Result<O, Error> + Send + Sync + 'static,
{
    Validator::new(name, run)
}
