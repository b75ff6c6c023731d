//! Built-in validators
//!
//! Every validator here is a [`Validator`](crate::foundation::Validator)
//! over [`Value`](crate::foundation::Value), built with
//! [`wrap`](crate::foundation::wrap) and [`allow`](crate::foundation::allow)
//! or [`transform`](crate::foundation::transform). Null and undefined pass
//! through all of them except [`required`] and [`defined`].
//!
//! # Categories
//!
//! - **Presence**: [`required`], [`optional`], [`defined`]
//! - **Types**: [`string`], [`number`], [`integer`], [`boolean`], [`array`],
//!   [`plain_object`], [`binary`], [`date`]
//! - **String**: [`not_empty`], [`min_length`], [`max_length`], [`trim`],
//!   [`lowercase`], `pattern`, `replace`
//! - **Numeric**: [`min`], [`max`], [`in_range`], [`finite`], [`parse_number`]
//! - **Temporal**: [`parse_date`], [`not_before`], [`not_after`]
//! - **Content**: [`one_of`], [`equals`]
//! - **Record shape**: [`only_keys`]
//!
//! # Examples
//!
//! ```
//! use keel_validator::prelude::*;
//!
//! let quantity = required().and(parse_number()).and(integer()).and(min(1.0));
//!
//! assert_eq!(quantity.validate(Value::from("3")).ok(), Some(Value::from(3)));
//! assert!(quantity.validate(Value::from("0")).is_err());
//! assert!(quantity.validate(Value::Undefined).is_err());
//! ```

pub mod content;
pub mod numeric;
pub mod object;
pub mod presence;
pub mod string;
pub mod temporal;
pub mod types;

pub use content::{equals, one_of};
pub use numeric::{finite, in_range, max, min, parse_number};
pub use object::only_keys;
pub use presence::{defined, optional, required};
#[cfg(feature = "regex")]
pub use string::{pattern, replace};
pub use string::{lowercase, max_length, min_length, not_empty, trim};
pub use temporal::{not_after, not_before, parse_date};
pub use types::{array, binary, boolean, date, integer, number, plain_object, string};
