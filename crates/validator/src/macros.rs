//! Macros for composing validators with minimal boilerplate.
//!
//! # Available Macros
//!
//! - [`chain!`] - AND-chain multiple validators
//! - [`keys!`] - declare a record structure whose validators have different types
//!
//! # Examples
//!
//! ```
//! use keel_validator::prelude::*;
//! use keel_validator::{chain, keys};
//!
//! let address = keys! {
//!     "street" => chain!(required(), string(), trim(), not_empty()),
//!     "zip" => chain!(required(), parse_number(), integer()),
//!     "tags" => items(string());
//!     missing ["tags"]
//! };
//!
//! let output = address
//!     .validate(Value::object([("street", " Main St "), ("zip", "90210")]))
//!     .unwrap();
//! assert_eq!(output.get("street"), Some(&Value::from("Main St")));
//! assert_eq!(output.get("zip"), Some(&Value::from(90210)));
//! ```

// ============================================================================
// CHAIN MACRO
// ============================================================================

/// Composes multiple validators using AND logic.
///
/// `chain!(a, b, c)` is `a.and(b).and(c)`: each validator runs on the output
/// of the previous one.
#[macro_export]
macro_rules! chain {
    ($first:expr $(,)?) => {
        $first
    };
    ($first:expr, $second:expr $(, $rest:expr)* $(,)?) => {
        $crate::chain!($crate::combinators::and($first, $second) $(, $rest)*)
    };
}

// ============================================================================
// KEYS MACRO
// ============================================================================

/// Builds a [`Keys`](crate::combinators::Keys) record validator.
///
/// Each value only needs to convert into a
/// [`Validator`](crate::foundation::Validator); use `.boxed()` for custom
/// [`Validate`](crate::foundation::Validate) types. A trailing
/// `missing [..]` clause lists keys that may be absent.
///
/// ```
/// use keel_validator::keys;
/// use keel_validator::prelude::*;
///
/// let profile = keys! {
///     "name" => required().and(string()),
///     "bio" => string();
///     missing ["bio"]
/// };
/// assert!(profile.validate(Value::object([("name", "ada")])).is_ok());
/// ```
#[macro_export]
macro_rules! keys {
    ($($name:expr => $validator:expr),* $(,)?) => {
        $crate::combinators::Keys::new()
            $(.key($name, $validator))*
    };
    ($($name:expr => $validator:expr),+ ; missing [$($missing:expr),* $(,)?]) => {
        $crate::keys!($($name => $validator),+).missing([$($missing),*])
    };
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use crate::foundation::{Validate, ValidateExt, Value};
    use crate::validators::{number, required, string, trim};

    #[test]
    fn test_chain_single() {
        let validator = chain!(string());
        assert!(validator.validate(Value::from("x")).is_ok());
    }

    #[test]
    fn test_chain_runs_in_order() {
        let validator = chain!(required(), string(), trim());
        assert_eq!(validator.validate(Value::from(" x ")).ok(), Some(Value::from("x")));
        assert!(validator.validate(Value::Null).is_err());
        assert_eq!(validator.name(), "required & string & trim");
    }

    #[test]
    fn test_keys_macro_mixes_validator_types() {
        let validator = keys! {
            "a" => chain!(required(), number()).boxed(),
            "b" => crate::combinators::items(string()),
            "c" => required();
            missing ["b"]
        };
        assert_eq!(validator.len(), 3);
        assert!(validator.allows_missing("b"));
        assert!(validator.validate(Value::object([("a", 1), ("c", 2)])).is_ok());
    }

    #[test]
    fn test_keys_macro_empty() {
        let validator = keys! {};
        assert!(validator.is_empty());
    }
}
