//! # keel-validator
//!
//! Composable validation and transformation of untyped values, with
//! structured, traversable failure reasons.
//!
//! ## Quick Start
//!
//! ```
//! use keel_validator::prelude::*;
//!
//! let order = keys([
//!     ("id", required().and(string()).and(not_empty())),
//!     ("quantity", required().and(parse_number()).and(integer()).and(min(1.0))),
//!     ("notes", string().and(trim())),
//! ])
//! .missing(["notes"]);
//!
//! let output = order
//!     .validate(Value::object([("id", "A-1"), ("quantity", "2")]))
//!     .unwrap();
//! assert_eq!(output.get("quantity"), Some(&Value::from(2)));
//!
//! let error = order.validate(Value::object([("quantity", "0")])).unwrap_err();
//! let error = error.as_invalid().unwrap();
//! for (path, leaf) in error.flatten() {
//!     println!("{path}: {}", leaf.message());
//! }
//! assert_eq!(error.total_error_count(), 3);
//! ```
//!
//! ## Model
//!
//! - A validator takes a value and returns a value, possibly the same one,
//!   or fails. [`Validator`](foundation::Validator) is the shareable,
//!   type-erased form; every built-in validator is one.
//! - [`and`](foundation::Validator::and) chains validators: the output of
//!   one is the input of the next.
//! - Null and undefined pass through every leaf except
//!   [`required`](validators::required) and [`defined`](validators::defined),
//!   so optionality is decided once, by the caller.
//! - [`items`](combinators::items) and [`keys`](combinators::keys) check
//!   every element or key and report all failures at once as a reason tree
//!   ([`Reasons`](foundation::Reasons)).
//! - Failures are either a rejection of the input
//!   ([`Error::Invalid`](foundation::Error::Invalid)) or a bug in a predicate
//!   ([`Error::Defect`](foundation::Error::Defect)). Only rejections are
//!   aggregated.
//!
//! ## Features
//!
//! - `serde` (default): JSON interop and error rendering, see [`json`]
//! - `regex` (default): [`pattern`](validators::string::pattern) and
//!   [`replace`](validators::string::replace)

// Aggregators hand `Error` back unboxed; a reason tree is only built on failure.
#![allow(clippy::result_large_err)]
// Nested chains (And<And<...>, ...>) produce long types by construction.
#![allow(clippy::type_complexity)]

mod macros;

pub mod combinators;
pub mod foundation;
#[cfg(feature = "serde")]
pub mod json;
pub mod prelude;
pub mod validators;
