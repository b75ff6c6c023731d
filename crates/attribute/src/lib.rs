//! # keel-attribute
//!
//! Decoders and an encoder for the tagged attribute format used by
//! key-value stores on the wire: every value is a record with a single
//! type tag, such as `{"S": "text"}`, `{"N": "12"}` or `{"L": [...]}`.
//!
//! Decoders are ordinary [`Validator`](keel_validator::foundation::Validator)s
//! built from `keel-validator` combinators, so they chain with any other
//! validator and report failures as the same reason trees.
//!
//! ```
//! use keel_attribute::decode;
//! use keel_validator::prelude::*;
//!
//! let order = decode::record(keys([
//!     ("id", decode::string()),
//!     ("qty", decode::number().and(parse_number()).and(integer())),
//!     ("note", decode::string()),
//! ]));
//!
//! let wire = Value::object([
//!     ("id", Value::object([("S", "A-1")])),
//!     ("qty", Value::object([("N", "2")])),
//!     ("note", Value::object([("NULL", true)])),
//! ]);
//! assert_eq!(
//!     order.validate(wire).ok(),
//!     Some(Value::object([
//!         ("id", Value::from("A-1")),
//!         ("qty", Value::from(2)),
//!         ("note", Value::Null),
//!     ]))
//! );
//! ```

#![allow(clippy::result_large_err)]

pub mod decode;
mod encode;
mod tag;

pub use encode::{encode, encoder};
pub use tag::{Tag, UnknownTag};
