//! Core validation types and traits
//!
//! This module contains the fundamental building blocks of the engine:
//!
//! - **Values**: [`Value`], the untyped input every built-in validator accepts
//! - **Traits**: [`Validate`], [`ValidateExt`], [`Nullable`]
//! - **Errors**: [`ValidationError`], [`Reasons`], [`Error`]
//! - **Validators**: [`Validator`] and the leaf constructors [`wrap`],
//!   [`allow`] and [`transform`]
//!
//! # Architecture
//!
//! ## 1. One call operation
//!
//! A validator is anything implementing [`Validate`]: it takes its input by
//! value and returns either an output (possibly the very same value) or an
//! [`Error`].
//!
//! ## 2. Nullability is decided once
//!
//! [`allow`] and [`transform`] return null and undefined inputs unchanged.
//! Leaves built from them never need their own null handling, which is what
//! lets any validator be chained with any other.
//!
//! ```
//! use keel_validator::prelude::*;
//!
//! let age = number().and(integer()).and(in_range(0.0, 150.0));
//! assert_eq!(age.validate(Value::Null).ok(), Some(Value::Null));
//!
//! let age = required().and(age);
//! assert!(age.validate(Value::Null).is_err());
//! ```
//!
//! ## 3. Rejections aggregate, defects abort
//!
//! [`Error::Invalid`] is collected by aggregators into a reason tree;
//! [`Error::Defect`] passes through every layer unchanged.

pub mod error;
pub mod leaf;
pub mod traits;
pub mod validator;
pub mod value;

pub use error::{Defect, Error, Path, PathSegment, Reasons, ValidationError, ValidationResult};
pub use leaf::{allow, transform};
pub use traits::{Nullable, Validate, ValidateExt};
pub use validator::{Validator, wrap};
pub use value::{Map, Value};
