//! LAZY combinator - validators built on first use

use crate::foundation::{Error, Validate, ValidateExt, Validator};
use std::borrow::Cow;
use std::fmt;
use std::sync::OnceLock;

// ============================================================================
// LAZY COMBINATOR
// ============================================================================

/// Builds its validator the first time it runs, then reuses it.
///
/// A validator stored in a `static` can mention itself through `lazy`, which
/// is how recursive shapes (trees, nested attributes) are described. The
/// builder runs at most once even when several threads race on first use.
///
/// # Examples
///
/// ```
/// use keel_validator::prelude::*;
/// use std::sync::LazyLock;
///
/// // A tree node: a record whose `children` are nodes again.
/// static NODE: LazyLock<Validator> = LazyLock::new(|| {
///     keys([
///         ("id", required().and(string())),
///         ("children", items(lazy(|| NODE.clone())).into()),
///     ])
///     .missing(["children"])
///     .into()
/// });
///
/// let tree = Value::object([
///     ("id", Value::from("root")),
///     ("children", Value::array([Value::object([("id", 7)])])),
/// ]);
/// let error = NODE.validate(tree).unwrap_err();
/// assert_eq!(error.as_invalid().unwrap().flatten()[0].0.to_string(), "children[0].id");
/// ```
pub struct Lazy<V, F> {
    build: F,
    built: OnceLock<V>,
}

impl<V, F> Lazy<V, F>
where
    F: Fn() -> V,
{
    pub fn new(build: F) -> Self {
        Self {
            build,
            built: OnceLock::new(),
        }
    }

    /// The validator, once something has forced it.
    pub fn get(&self) -> Option<&V> {
        self.built.get()
    }

    pub fn is_initialized(&self) -> bool {
        self.get().is_some()
    }

    /// Builds the validator if needed.
    pub fn force(&self) -> &V {
        self.built.get_or_init(|| (self.build)())
    }
}

impl<V, F> Validate for Lazy<V, F>
where
    V: Validate,
    F: Fn() -> V,
{
    type Input = V::Input;
    type Output = V::Output;

    fn validate(&self, input: Self::Input) -> Result<Self::Output, Error> {
        self.force().validate(input)
    }

    fn name(&self) -> Cow<'_, str> {
        match self.get() {
            Some(validator) => validator.name(),
            None => Cow::Borrowed("lazy"),
        }
    }
}

impl<V: fmt::Debug, F> fmt::Debug for Lazy<V, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.built.get() {
            Some(validator) => f.debug_tuple("Lazy").field(validator).finish(),
            None => f.write_str("Lazy(<unbuilt>)"),
        }
    }
}

impl<V, F> From<Lazy<V, F>> for Validator<V::Input, V::Output>
where
    V: Validate + Send + Sync + 'static,
    F: Fn() -> V + Send + Sync + 'static,
    V::Input: 'static,
    V::Output: 'static,
{
    fn from(lazy: Lazy<V, F>) -> Self {
        lazy.named("lazy")
    }
}

/// Creates a LAZY combinator.
pub fn lazy<V, F>(build: F) -> Lazy<V, F>
where
    F: Fn() -> V,
{
    Lazy::new(build)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::{Value, allow, wrap};
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn short() -> Validator {
        wrap(
            "short",
            allow(
                |value: &Value| value.as_str().is_some_and(|text| text.len() < 5),
                "value is too long",
            ),
        )
    }

    fn counted(builds: &Arc<AtomicUsize>) -> Lazy<Validator, impl Fn() -> Validator> {
        let builds = Arc::clone(builds);
        lazy(move || {
            builds.fetch_add(1, Ordering::SeqCst);
            short()
        })
    }

    #[test]
    fn nothing_is_built_before_first_use() {
        let builds = Arc::new(AtomicUsize::new(0));
        let deferred = counted(&builds);

        assert!(!deferred.is_initialized());
        assert_eq!(builds.load(Ordering::SeqCst), 0);
        assert_eq!(deferred.name(), "lazy");
        assert_eq!(format!("{deferred:?}"), "Lazy(<unbuilt>)");
    }

    #[test]
    fn builds_once_and_reports_inner_name() {
        let builds = Arc::new(AtomicUsize::new(0));
        let deferred = counted(&builds);

        assert!(deferred.validate(Value::from("a")).is_ok());
        assert!(deferred.validate(Value::from("b")).is_ok());
        assert!(deferred.validate(Value::from("abcdef")).is_err());

        assert_eq!(builds.load(Ordering::SeqCst), 1);
        assert_eq!(deferred.name(), "short");
    }

    #[test]
    fn force_builds_without_validating() {
        let deferred = lazy(short);
        assert!(deferred.get().is_none());
        assert_eq!(deferred.force().name(), "short");
        assert!(deferred.is_initialized());
    }

    #[test]
    fn concurrent_first_use_builds_once() {
        let builds = Arc::new(AtomicUsize::new(0));
        let deferred = counted(&builds);

        std::thread::scope(|scope| {
            for _ in 0..8 {
                scope.spawn(|| deferred.validate(Value::from("ok")));
            }
        });
        assert_eq!(builds.load(Ordering::SeqCst), 1);
    }
}
