//! Validator combinators
//!
//! - [`And`]: sequential composition, the output of one validator feeds the next
//! - [`Items`]: one validator over every element of an array
//! - [`Keys`]: one validator per declared key of a record
//! - [`Values`]: one validator over every value of an open record
//! - [`Lazy`]: deferred construction, for recursive structures
//!
//! The aggregators ([`Items`], [`Keys`], [`Values`]) visit every child and
//! collect rejections into the [`Reasons`](crate::foundation::Reasons) of a
//! single error. Defects are never collected: the first one aborts the whole
//! validation.

pub mod and;
pub mod items;
pub mod keys;
pub mod lazy;
pub mod values;

pub use and::{And, and};
pub use items::{Items, items};
pub use keys::{Keys, keys};
pub use lazy::{Lazy, lazy};
pub use values::{Values, values};
