//! ITEMS combinator - validates every element of a sequence

use crate::foundation::{Error, Reasons, Validate, ValidateExt, ValidationError, Validator, Value};
use std::borrow::Cow;
use std::sync::Arc;

// ============================================================================
// ITEMS COMBINATOR
// ============================================================================

/// Applies one validator to every element of an array.
///
/// Every element is visited, in index order, even after a failure. Rejected
/// elements are reported as [`Reasons::Positional`] with one slot per input
/// element; a defect aborts at once and nothing collected so far survives.
///
/// When no element was transformed (every output is [`same`](Value::same) as
/// its input) the input array itself is returned, not a copy.
///
/// # Examples
///
/// ```
/// use keel_validator::prelude::*;
///
/// let validator = items(string().and(trim()));
///
/// let output = validator.validate(Value::array([" a", "b "])).unwrap();
/// assert_eq!(output, Value::array(["a", "b"]));
///
/// let mixed = Value::from(vec![Value::from("a"), Value::from(1)]);
/// let error = validator.validate(mixed).unwrap_err();
/// let error = error.as_invalid().unwrap();
/// assert!(error.reasons().at(0).is_none());
/// assert!(error.reasons().at(1).is_some());
/// ```
#[derive(Debug, Clone)]
pub struct Items<V> {
    inner: V,
}

impl<V> Items<V> {
    pub fn new(inner: V) -> Self {
        Self { inner }
    }

    /// Returns a reference to the element validator.
    pub fn inner(&self) -> &V {
        &self.inner
    }

    /// Extracts the element validator.
    pub fn into_inner(self) -> V {
        self.inner
    }
}

impl<V> Validate for Items<V>
where
    V: Validate<Input = Value, Output = Value>,
{
    type Input = Value;
    type Output = Value;

    fn validate(&self, input: Value) -> Result<Value, Error> {
        if input.is_nullish() {
            return Ok(input);
        }
        let elements: Arc<[Value]> = match &input {
            Value::Array(elements) => Arc::clone(elements),
            _ => return Err(ValidationError::new("value is not an array", input).into()),
        };

        let mut output: Option<Vec<Value>> = None;
        let mut reasons: Option<Vec<Option<ValidationError>>> = None;

        for (index, element) in elements.iter().enumerate() {
            match self.inner.validate(element.clone()) {
                // Once anything failed the output is never returned.
                Ok(_) if reasons.is_some() => {}
                Ok(result) => {
                    if let Some(transformed) = output.as_mut() {
                        transformed.push(result);
                    } else if !result.same(element) {
                        let mut transformed = Vec::with_capacity(elements.len());
                        transformed.extend_from_slice(&elements[..index]);
                        transformed.push(result);
                        output = Some(transformed);
                    }
                }
                Err(Error::Invalid(error)) => {
                    reasons.get_or_insert_with(|| vec![None; elements.len()])[index] = Some(error);
                }
                Err(defect) => {
                    tracing::debug!(index, len = elements.len(), "items aborted by defect");
                    return Err(defect);
                }
            }
        }

        if let Some(reasons) = reasons {
            tracing::trace!(
                failed = reasons.iter().flatten().count(),
                len = elements.len(),
                "items rejected"
            );
            return Err(ValidationError::new("invalid items", input)
                .with_reasons(Reasons::Positional(reasons))
                .into());
        }

        Ok(output.map_or(input, Value::from))
    }

    fn name(&self) -> Cow<'_, str> {
        Cow::Owned(format!("items({})", self.inner.name()))
    }
}

impl<V> From<Items<V>> for Validator
where
    V: Validate<Input = Value, Output = Value> + Send + Sync + 'static,
{
    fn from(items: Items<V>) -> Self {
        items.boxed()
    }
}

/// Creates an ITEMS combinator.
pub fn items<V>(validator: V) -> Items<V>
where
    V: Validate<Input = Value, Output = Value>,
{
    Items::new(validator)
}

// ============================================================================
// TESTS
// ============================================================================
