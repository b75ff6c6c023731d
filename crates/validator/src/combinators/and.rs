//! AND combinator - sequential composition of validators
//!
//! This module provides the [`And`] combinator which feeds the output of one
//! validator into the next. The first failure wins and the remaining
//! validators are never invoked.
//!
//! # Examples
//!
//! ```
//! use keel_validator::combinators::And;
//! use keel_validator::prelude::*;
//!
//! let validator = And::new(string(), trim());
//! assert_eq!(validator.validate(Value::from(" x ")).ok(), Some(Value::from("x")));
//! assert!(validator.validate(Value::from(1)).is_err());
//! ```

use crate::foundation::{Error, Validate};
use std::borrow::Cow;

/// Runs `left`, then `right` on its output.
///
/// # Type Parameters
///
/// * `L` - The first validator
/// * `R` - The second validator; its input is the output of `L`
///
/// A failure of `left` is returned as is: no recovery, no retry. Composition
/// is associative, so `a.and(b).and(c)` and `a.and(b.and(c))` accept the same
/// inputs, produce the same outputs and fail with the same errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct And<L, R> {
    pub(crate) left: L,
    pub(crate) right: R,
}

impl<L, R> And<L, R> {
    /// Creates a new `And` combinator.
    pub fn new(left: L, right: R) -> Self {
        Self { left, right }
    }

    /// Returns a reference to the first validator.
    pub fn left(&self) -> &L {
        &self.left
    }

    /// Returns a reference to the second validator.
    pub fn right(&self) -> &R {
        &self.right
    }

    /// Extracts both validators.
    pub fn into_parts(self) -> (L, R) {
        (self.left, self.right)
    }
}

impl<L, R> Validate for And<L, R>
where
    L: Validate,
    R: Validate<Input = L::Output>,
{
    type Input = L::Input;
    type Output = R::Output;

    #[inline]
    fn validate(&self, input: Self::Input) -> Result<Self::Output, Error> {
        let intermediate = self.left.validate(input)?;
        self.right.validate(intermediate)
    }

    fn name(&self) -> Cow<'_, str> {
        Cow::Owned(format!("{} & {}", self.left.name(), self.right.name()))
    }
}

/// Creates an `And` combinator from two validators.
///
/// Used by the [`chain!`](crate::chain) macro.
pub fn and<L, R>(left: L, right: R) -> And<L, R>
where
    L: Validate,
    R: Validate<Input = L::Output>,
{
    And::new(left, right)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::{ValidateExt, ValidationError, Value};

    struct Parse;

    impl Validate for Parse {
        type Input = String;
        type Output = i64;

        fn validate(&self, input: String) -> Result<i64, Error> {
            input
                .trim()
                .parse()
                .map_err(|_| ValidationError::new("value is not an integer", Value::from(input)).into())
        }
    }

    struct Positive;

    impl Validate for Positive {
        type Input = i64;
        type Output = u64;

        fn validate(&self, input: i64) -> Result<u64, Error> {
            u64::try_from(input)
                .map_err(|_| ValidationError::new("value must be positive", Value::from(input)).into())
        }
    }

    #[test]
    fn test_and_changes_types_along_the_chain() {
        let validator = And::new(Parse, Positive);
        assert_eq!(validator.validate(" 42 ".to_owned()).ok(), Some(42));
    }

    #[test]
    fn test_and_left_failure_is_returned() {
        let error = Parse.and(Positive).validate("x".to_owned()).unwrap_err();
        assert_eq!(error.as_invalid().map(ValidationError::message), Some("value is not an integer"));
    }

    #[test]
    fn test_and_right_failure_is_returned() {
        let error = and(Parse, Positive).validate("-3".to_owned()).unwrap_err();
        let error = error.into_invalid().unwrap();
        assert_eq!(error.message(), "value must be positive");
        assert_eq!(error.value(), &Value::from(-3));
    }

    #[test]
    fn test_and_name_joins_parts() {
        let name = Parse.and(Positive).name().into_owned();
        assert!(name.contains("Parse & "));
        assert!(name.ends_with("Positive"));
    }

    #[test]
    fn test_into_parts() {
        let (left, right) = And::new(1, 2).into_parts();
        assert_eq!((left, right), (1, 2));
    }
}
