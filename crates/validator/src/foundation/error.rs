//! Error types for validation failures
//!
//! Two classes of failure flow through every validator:
//!
//! - [`ValidationError`]: the input was rejected. Carries a message, the value
//!   that failed and, when an aggregator built it, the [`Reasons`] of the
//!   children that failed. Callers are expected to handle these.
//! - A defect: caller-supplied logic broke. It travels as
//!   [`Error::Defect`] and is never folded into a reason tree.
//!
//! Messages use `Cow<'static, str>` so static messages never allocate.

use crate::foundation::value::Value;
use indexmap::IndexMap;
use smallvec::SmallVec;
use std::borrow::Cow;
use std::fmt;

// ============================================================================
// VALIDATION ERROR
// ============================================================================

/// One validation failure.
///
/// Constructed at the point of failure and never mutated afterwards; the
/// builder methods consume `self` and are only meant to be chained before
/// the error is returned.
///
/// # Examples
///
/// ```
/// use keel_validator::foundation::{Reasons, ValidationError, Value};
///
/// let leaf = ValidationError::new("value is not a number", Value::from("x"));
/// assert!(leaf.is_leaf());
///
/// let record = Value::object([("age", "x")]);
/// let error = ValidationError::new("invalid keys", record)
///     .with_reasons(Reasons::keyed([("age", leaf)]));
/// assert_eq!(error.total_error_count(), 2);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ValidationError {
    message: Cow<'static, str>,
    value: Value,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Reasons::is_none"))]
    reasons: Reasons,
}

impl ValidationError {
    /// Creates a leaf failure (no reasons).
    pub fn new(message: impl Into<Cow<'static, str>>, value: Value) -> Self {
        Self {
            message: message.into(),
            value,
            reasons: Reasons::None,
        }
    }

    /// Attaches the reasons of failed children.
    ///
    /// The shape is the caller's choice; aggregators pick
    /// [`Reasons::Positional`] or [`Reasons::Keyed`].
    #[must_use = "builder methods must be chained or built"]
    pub fn with_reasons(mut self, reasons: Reasons) -> Self {
        self.reasons = reasons;
        self
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// The value that failed, as it was handed to the failing validator.
    pub fn value(&self) -> &Value {
        &self.value
    }

    pub fn reasons(&self) -> &Reasons {
        &self.reasons
    }

    /// Returns `true` when this failure came from a predicate rather than an
    /// aggregator.
    pub fn is_leaf(&self) -> bool {
        self.reasons.is_none()
    }

    /// Counts this error and every error reachable through its reasons.
    #[must_use]
    pub fn total_error_count(&self) -> usize {
        1 + self
            .reasons
            .iter()
            .map(|(_, child)| child.total_error_count())
            .sum::<usize>()
    }

    /// Collects every leaf failure of the reason tree together with its path
    /// from this error (depth-first, in index/declaration order).
    ///
    /// A leaf error flattens to itself at the root path.
    #[must_use]
    pub fn flatten(&self) -> Vec<(Path, &ValidationError)> {
        let mut leaves = Vec::new();
        self.collect_leaves(&mut Path::root(), &mut leaves);
        leaves
    }

    fn collect_leaves<'a>(&'a self, path: &mut Path, leaves: &mut Vec<(Path, &'a ValidationError)>) {
        if self.is_leaf() {
            leaves.push((path.clone(), self));
            return;
        }
        for (segment, child) in self.reasons.iter() {
            path.push(segment);
            child.collect_leaves(path, leaves);
            path.pop();
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)?;

        if self.is_leaf() {
            return write!(f, " (got {})", self.value);
        }

        for (path, leaf) in self.flatten() {
            write!(f, "\n  {path}: {} (got {})", leaf.message, leaf.value)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}

// ============================================================================
// REASONS
// ============================================================================

/// Failures of the children of an aggregated value.
///
/// The variant is fixed by the aggregator that produced the error:
/// sequences produce [`Reasons::Positional`], records produce
/// [`Reasons::Keyed`].
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Reasons {
    /// Leaf failure, nothing nested.
    #[default]
    None,
    /// One slot per input element; `None` where the element passed.
    Positional(Vec<Option<ValidationError>>),
    /// One entry per failed key.
    Keyed(IndexMap<String, ValidationError>),
}

impl Reasons {
    /// Builds keyed reasons from `(key, error)` pairs.
    pub fn keyed<I, K>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, ValidationError)>,
        K: Into<String>,
    {
        Self::Keyed(
            entries
                .into_iter()
                .map(|(key, error)| (key.into(), error))
                .collect(),
        )
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    pub fn as_positional(&self) -> Option<&[Option<ValidationError>]> {
        match self {
            Self::Positional(slots) => Some(slots),
            _ => None,
        }
    }

    pub fn as_keyed(&self) -> Option<&IndexMap<String, ValidationError>> {
        match self {
            Self::Keyed(entries) => Some(entries),
            _ => None,
        }
    }

    /// The failure recorded at `index`, if any.
    pub fn at(&self, index: usize) -> Option<&ValidationError> {
        self.as_positional()
            .and_then(|slots| slots.get(index))
            .and_then(Option::as_ref)
    }

    /// The failure recorded for `key`, if any.
    pub fn get(&self, key: &str) -> Option<&ValidationError> {
        self.as_keyed().and_then(|entries| entries.get(key))
    }

    /// Number of failed children.
    pub fn failed(&self) -> usize {
        self.iter().count()
    }

    /// Iterates over failed children with their path segment.
    pub fn iter(&self) -> impl Iterator<Item = (PathSegment, &ValidationError)> + '_ {
        let positional = self
            .as_positional()
            .into_iter()
            .flatten()
            .enumerate()
            .filter_map(|(index, slot)| slot.as_ref().map(|error| (PathSegment::Index(index), error)));
        let keyed = self
            .as_keyed()
            .into_iter()
            .flatten()
            .map(|(key, error)| (PathSegment::Key(key.clone()), error));
        positional.chain(keyed)
    }
}

// ============================================================================
// PATHS
// ============================================================================

/// One step from a failed aggregate into one of its children.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathSegment {
    Index(usize),
    Key(String),
}

/// Location of a failure inside the reason tree, e.g. `users[2].email`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Path(SmallVec<[PathSegment; 4]>);

impl Path {
    /// The empty path (the failing value itself).
    #[must_use]
    pub fn root() -> Self {
        Self(SmallVec::new())
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    pub fn segments(&self) -> &[PathSegment] {
        &self.0
    }

    pub fn push(&mut self, segment: PathSegment) {
        self.0.push(segment);
    }

    pub fn pop(&mut self) -> Option<PathSegment> {
        self.0.pop()
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_root() {
            return f.write_str("$");
        }
        for (position, segment) in self.0.iter().enumerate() {
            match segment {
                PathSegment::Index(index) => write!(f, "[{index}]")?,
                PathSegment::Key(key) if position == 0 => f.write_str(key)?,
                PathSegment::Key(key) => write!(f, ".{key}")?,
            }
        }
        Ok(())
    }
}

impl<const N: usize> From<[PathSegment; N]> for Path {
    fn from(segments: [PathSegment; N]) -> Self {
        Self(segments.into_iter().collect())
    }
}

// ============================================================================
// ERROR
// ============================================================================

/// Boxed error raised by caller-supplied logic.
pub type Defect = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Failure returned by every validator.
///
/// Aggregators capture [`Error::Invalid`] into their reason trees and let
/// [`Error::Defect`] through untouched, aborting at the first one.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The input was rejected.
    #[error(transparent)]
    Invalid(#[from] ValidationError),

    /// A predicate or transform failed for a reason unrelated to the input's
    /// validity.
    #[error("validator defect: {0}")]
    Defect(#[source] Defect),
}

impl Error {
    /// Wraps a defect raised by caller-supplied logic.
    pub fn defect(error: impl Into<Defect>) -> Self {
        Self::Defect(error.into())
    }

    pub fn is_invalid(&self) -> bool {
        matches!(self, Self::Invalid(_))
    }

    pub fn is_defect(&self) -> bool {
        matches!(self, Self::Defect(_))
    }

    pub fn as_invalid(&self) -> Option<&ValidationError> {
        match self {
            Self::Invalid(error) => Some(error),
            Self::Defect(_) => None,
        }
    }

    pub fn into_invalid(self) -> Option<ValidationError> {
        match self {
            Self::Invalid(error) => Some(error),
            Self::Defect(_) => None,
        }
    }

    /// Returns the defect as its concrete type.
    pub fn downcast_defect<E>(&self) -> Option<&E>
    where
        E: std::error::Error + 'static,
    {
        match self {
            Self::Defect(defect) => defect.downcast_ref::<E>(),
            Self::Invalid(_) => None,
        }
    }
}

/// Result of running a validator.
pub type ValidationResult<T> = Result<T, Error>;

// ============================================================================
// TESTS
// ============================================================================
