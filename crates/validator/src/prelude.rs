//! Prelude module for convenient imports.
//!
//! Provides a single `use keel_validator::prelude::*;` import that brings
//! in all commonly needed traits, types, validators, and combinators.
//!
//! # Examples
//!
//! ```
//! use keel_validator::prelude::*;
//!
//! let username = required().and(string()).and(trim()).and(min_length(3));
//! let tags = items(string().and(lowercase()));
//! let user = keys([("username", username), ("tags", tags.into())]).missing(["tags"]);
//!
//! assert!(user.validate(Value::object([("username", " ada ")])).is_ok());
//! ```

// ============================================================================
// FOUNDATION: Core traits, errors, values
// ============================================================================

pub use crate::foundation::{
    Error, Map, Nullable, Path, PathSegment, Reasons, Validate, ValidateExt, ValidationError,
    ValidationResult, Validator, Value, allow, transform, wrap,
};

// ============================================================================
// VALIDATORS: All built-in validators
// ============================================================================

pub use crate::validators::{
    array, binary, boolean, date, defined, equals, finite, in_range, integer, lowercase, max,
    max_length, min, min_length, not_after, not_before, not_empty, number, one_of, only_keys,
    optional, parse_date, parse_number, plain_object, required, string, trim,
};

#[cfg(feature = "regex")]
pub use crate::validators::{pattern, replace};

// ============================================================================
// COMBINATORS: Composition functions and types
// ============================================================================

pub use crate::combinators::{And, Items, Keys, Lazy, Values, and, items, keys, lazy, values};
