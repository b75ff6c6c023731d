//! KEYS combinator - validates the declared keys of a record

use crate::foundation::{Error, Map, Reasons, Validate, ValidationError, Validator, Value};
use indexmap::{IndexMap, IndexSet};
use std::borrow::Cow;
use std::sync::Arc;

// ============================================================================
// KEYS COMBINATOR
// ============================================================================

/// Validates a record against a per-key structure.
///
/// Every declared key is visited in declaration order and gets its own
/// validator. A key is present when the record has it as an own key, even
/// if its value is [`Value::Undefined`].
///
/// | key        | allowed missing | result                                   |
/// |------------|-----------------|------------------------------------------|
/// | present    | -               | validator runs on the key's value        |
/// | absent     | yes             | validator runs on [`Value::Undefined`]   |
/// | absent     | no              | `"key is missing"`, validator not called |
///
/// The output is always a freshly built record holding every declared key
/// that passed, including allowed-missing keys whose validator returned
/// [`Value::Undefined`].
/// Keys the structure does not declare are ignored: neither copied nor
/// reported. Compose with [`only_keys`](crate::validators::only_keys) to
/// reject them.
///
/// # Examples
///
/// ```
/// use keel_validator::prelude::*;
///
/// let user = keys([
///     ("name", required().and(string())),
///     ("age", required().and(number())),
/// ]);
///
/// let error = user.validate(Value::object([("name", "ada")])).unwrap_err();
/// let error = error.as_invalid().unwrap();
/// assert!(error.reasons().get("name").is_none());
/// assert_eq!(error.reasons().get("age").unwrap().message(), "key is missing");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Keys {
    structure: IndexMap<String, Validator>,
    missing: IndexSet<String>,
}

impl Keys {
    /// Creates a record validator with no declared keys.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares `name` with its validator. Redeclaring a key replaces its
    /// validator and keeps its position.
    #[must_use = "builder methods must be chained or built"]
    pub fn key(mut self, name: impl Into<String>, validator: impl Into<Validator>) -> Self {
        self.structure.insert(name.into(), validator.into());
        self
    }

    /// Allows the given keys to be absent from the input.
    ///
    /// Their validators then run on [`Value::Undefined`] instead of the key
    /// being reported missing, so presence-enforcing validators still fail.
    #[must_use = "builder methods must be chained or built"]
    pub fn missing<I, K>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        self.missing.extend(names.into_iter().map(Into::into));
        self
    }

    /// Declared key names, in declaration order.
    pub fn declared(&self) -> impl Iterator<Item = &str> + '_ {
        self.structure.keys().map(String::as_str)
    }

    /// Returns `true` if `name` may be absent from the input.
    pub fn allows_missing(&self, name: &str) -> bool {
        self.missing.contains(name)
    }

    pub fn len(&self) -> usize {
        self.structure.len()
    }

    pub fn is_empty(&self) -> bool {
        self.structure.is_empty()
    }
}

impl Validate for Keys {
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

        let mut output = Map::with_capacity(self.structure.len());
        let mut reasons: Option<IndexMap<String, ValidationError>> = None;

        for (key, validator) in &self.structure {
            let result = match record.get(key) {
                Some(value) => validator.validate(value.clone()),
                None if self.missing.contains(key) => validator.validate(Value::Undefined),
                None => Err(ValidationError::new("key is missing", Value::Undefined).into()),
            };

            match result {
                Ok(value) => {
                    output.insert(key.clone(), value);
                }
                Err(Error::Invalid(error)) => {
                    reasons
                        .get_or_insert_with(IndexMap::new)
                        .insert(key.clone(), error);
                }
                Err(defect) => {
                    tracing::debug!(key = %key, "keys aborted by defect");
                    return Err(defect);
                }
            }
        }

        if let Some(reasons) = reasons {
            tracing::trace!(
                failed = reasons.len(),
                declared = self.structure.len(),
                "keys rejected"
            );
            return Err(ValidationError::new("invalid keys", input)
                .with_reasons(Reasons::Keyed(reasons))
                .into());
        }

        Ok(Value::from(output))
    }

    fn name(&self) -> Cow<'_, str> {
        let declared: Vec<&str> = self.declared().collect();
        Cow::Owned(format!("keys{{{}}}", declared.join(", ")))
    }
}

impl From<Keys> for Validator {
    fn from(structure: Keys) -> Self {
        let name = structure.name().into_owned();
        Validator::new(name, move |input| structure.validate(input))
    }
}

/// Creates a KEYS combinator from `(name, validator)` pairs.
///
/// Use [`Keys::missing`] to allow absent keys, or the [`keys!`](crate::keys)
/// macro when the validators have different types.
pub fn keys<I, K, V>(structure: I) -> Keys
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<Validator>,
{
    structure
        .into_iter()
        .fold(Keys::new(), |keys, (name, validator)| keys.key(name, validator))
}

// ============================================================================
// TESTS
// ============================================================================
