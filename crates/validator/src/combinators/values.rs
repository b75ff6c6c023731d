//! VALUES combinator - validates every value of an open record

use crate::foundation::{Error, Map, Reasons, Validate, ValidateExt, ValidationError, Validator, Value};
use indexmap::IndexMap;
use std::borrow::Cow;
use std::sync::Arc;

/// Applies one validator to every value of a record whose key set is not
/// known in advance.
///
/// Failures are reported as [`Reasons::Keyed`] under the key they were
/// found at. Like [`Keys`](super::Keys), the output is always a fresh record.
#[derive(Debug, Clone)]
pub struct Values<V> {
    inner: V,
}

impl<V> Values<V> {
    pub fn new(inner: V) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &V {
        &self.inner
    }
}

impl<V> Validate for Values<V>
where
    V: Validate<Input = Value, Output = Value>,
{
    type Input = Value;
    type Output = Value;

    fn validate(&self, input: Value) -> Result<Value, Error> {
        if input.is_nullish() {
            return Ok(input);
        }
        let record: Arc<Map> = match &input {
            Value::Object(record) => Arc::clone(record),
            _ => return Err(ValidationError::new("value is not an object", input).into()),
        };

        let mut output = Map::with_capacity(record.len());
        let mut reasons: Option<IndexMap<String, ValidationError>> = None;

        for (key, value) in record.iter() {
            match self.inner.validate(value.clone()) {
                Ok(result) => {
                    output.insert(key.clone(), result);
                }
                Err(Error::Invalid(error)) => {
                    reasons
                        .get_or_insert_with(IndexMap::new)
                        .insert(key.clone(), error);
                }
                Err(defect) => {
                    tracing::debug!(key = %key, "values aborted by defect");
                    return Err(defect);
                }
            }
        }

        if let Some(reasons) = reasons {
            tracing::trace!(failed = reasons.len(), len = record.len(), "values rejected");
            return Err(ValidationError::new("invalid values", input)
                .with_reasons(Reasons::Keyed(reasons))
                .into());
        }

        Ok(Value::from(output))
    }

    fn name(&self) -> Cow<'_, str> {
        Cow::Owned(format!("values({})", self.inner.name()))
    }
}

impl<V> From<Values<V>> for Validator
where
    V: Validate<Input = Value, Output = Value> + Send + Sync + 'static,
{
    fn from(values: Values<V>) -> Self {
        values.boxed()
    }
}

/// Creates a VALUES combinator.
pub fn values<V>(validator: V) -> Values<V>
where
    V: Validate<Input = Value, Output = Value>,
{
    Values::new(validator)
}
