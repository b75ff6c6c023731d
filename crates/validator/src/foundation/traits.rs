//! Core traits for the validation system
//!
//! [`Validate`] is the single call operation every validator implements.
//! [`ValidateExt`] layers composition on top of it and is implemented for
//! every validator automatically.

use crate::combinators::and::And;
use crate::foundation::error::ValidationResult;
use crate::foundation::validator::Validator;
use crate::foundation::value::Value;
use std::borrow::Cow;

// ============================================================================
// CORE VALIDATOR TRAIT
// ============================================================================

/// A reusable validation / transformation rule.
///
/// Implementations must be free of observable side effects: the same input
/// always produces the same output or the same failure.
///
/// # Examples
///
/// ```
/// use keel_validator::foundation::{Error, Validate, ValidationError, Value};
///
/// struct Positive;
///
/// impl Validate for Positive {
///     type Input = Value;
///     type Output = Value;
///
///     fn validate(&self, input: Value) -> Result<Value, Error> {
///         match input.as_f64() {
///             Some(number) if number > 0.0 => Ok(input),
///             _ => Err(ValidationError::new("value must be positive", input).into()),
///         }
///     }
/// }
///
/// assert!(Positive.validate(Value::from(3)).is_ok());
/// assert!(Positive.validate(Value::from(-3)).is_err());
/// ```
pub trait Validate {
    /// What the validator accepts.
    type Input;

    /// What the validator produces on success.
    type Output;

    /// Runs the rule.
    fn validate(&self, input: Self::Input) -> ValidationResult<Self::Output>;

    /// Debug name. Purely informational.
    fn name(&self) -> Cow<'_, str> {
        Cow::Borrowed(std::any::type_name::<Self>())
    }
}

// ============================================================================
// VALIDATOR EXTENSION TRAIT
// ============================================================================

/// Extension trait providing composition methods for validators.
///
/// Automatically implemented for every [`Validate`] type.
pub trait ValidateExt: Validate + Sized {
    /// Feeds this validator's output into `next`.
    ///
    /// If `self` fails, `next` is never invoked and the failure propagates
    /// unchanged.
    fn and<V>(self, next: V) -> And<Self, V>
    where
        V: Validate<Input = Self::Output>,
    {
        And::new(self, next)
    }

    /// Erases the concrete type into a shareable [`Validator`].
    fn boxed(self) -> Validator<Self::Input, Self::Output>
    where
        Self: Send + Sync + 'static,
        Self::Input: 'static,
        Self::Output: 'static,
    {
        let name = self.name().into_owned();
        Validator::new(name, move |input| self.validate(input))
    }

    /// Erases the concrete type and replaces the debug name.
    fn named(self, name: impl Into<Cow<'static, str>>) -> Validator<Self::Input, Self::Output>
    where
        Self: Send + Sync + 'static,
        Self::Input: 'static,
        Self::Output: 'static,
    {
        Validator::new(name, move |input| self.validate(input))
    }
}

impl<T: Validate> ValidateExt for T {}

// ============================================================================
// NULLABILITY
// ============================================================================

/// Values that have a null/undefined state.
///
/// Leaf constructors return nullish inputs unchanged without calling the
/// wrapped predicate or transform.
pub trait Nullable {
    fn is_nullish(&self) -> bool;
}

impl Nullable for Value {
    #[inline]
    fn is_nullish(&self) -> bool {
        Value::is_nullish(self)
    }
}

impl<T> Nullable for Option<T> {
    #[inline]
    fn is_nullish(&self) -> bool {
        self.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::{Error, ValidationError};

    struct Double;

    impl Validate for Double {
        type Input = f64;
        type Output = f64;

        fn validate(&self, input: f64) -> Result<f64, Error> {
            Ok(input * 2.0)
        }
    }

    struct NonZero;

    impl Validate for NonZero {
        type Input = f64;
        type Output = f64;

        fn validate(&self, input: f64) -> Result<f64, Error> {
            if input == 0.0 {
                Err(ValidationError::new("value must not be zero", Value::Number(input)).into())
            } else {
                Ok(input)
            }
        }
    }

    #[test]
    fn default_name_is_type_name() {
        assert!(Double.name().ends_with("Double"));
    }

    #[test]
    fn boxed_keeps_behavior() {
        let boxed = NonZero.and(Double).boxed();
        assert_eq!(boxed.validate(2.0).ok(), Some(4.0));
        assert!(boxed.validate(0.0).is_err());
    }

    #[test]
    fn named_replaces_name() {
        let named = Double.named("double");
        assert_eq!(named.name(), "double");
    }

    #[test]
    fn option_nullability() {
        assert!(None::<u8>.is_nullish());
        assert!(!Some(0u8).is_nullish());
    }
}
