//! Core type definitions: criteria and the function seams they compile into.

use crate::config::GlobConfig;
use crate::error::{PredicateError, Result};
use regex::Regex;
use std::fmt;
use std::sync::Arc;

/// Leading character that turns a string criterion into an exclusion.
pub const NEGATION_MARKER: char = '!';

/// Predicate criterion signature.
///
/// Receives the candidate arguments: the whole tuple for tuple candidates, or a
/// one-element slice holding the normalized path for path candidates. Errors are handed
/// back to the caller untouched.
///
/// # Example
/// ```rust,ignore
/// let same: PredicateFn = Arc::new(|args| Ok(args.len() == 2 && args[0] == args[1]));
/// ```
pub type PredicateFn =
    Arc<dyn Fn(&[&str]) -> std::result::Result<bool, PredicateError> + Send + Sync>;

/// Compiled glob predicate over a normalized path.
pub type GlobFn = Arc<dyn Fn(&str) -> bool + Send + Sync>;

/// Glob compiler seam: turns a pattern into a [`GlobFn`].
///
/// The default implementation is [`crate::matcher::glob::compile_glob`].
///
/// # Example
/// ```rust,ignore
/// // Prefix matching instead of glob syntax
/// let prefix: GlobCompilerFn = Arc::new(|pattern, _config| {
///     let pattern = pattern.to_string();
///     Ok(Arc::new(move |path: &str| path.starts_with(&pattern)) as GlobFn)
/// });
/// ```
pub type GlobCompilerFn = Arc<dyn Fn(&str, &GlobConfig) -> Result<GlobFn> + Send + Sync>;

/// One match rule.
#[derive(Clone)]
pub enum Criterion {
    /// Literal or glob string. A leading [`NEGATION_MARKER`] makes it an exclusion.
    Glob(String),

    /// Regular expression tested against the normalized path.
    Regex(Regex),

    /// Arbitrary predicate over the candidate arguments.
    Predicate(PredicateFn),

    /// Unrecognized rule from dynamic input; never matches.
    Never,
}

impl Criterion {
    /// Literal or glob string criterion.
    pub fn glob(pattern: impl Into<String>) -> Self {
        Criterion::Glob(pattern.into())
    }

    /// Regular expression criterion.
    pub fn regex(regex: Regex) -> Self {
        Criterion::Regex(regex)
    }

    /// Infallible predicate criterion.
    pub fn predicate<F>(func: F) -> Self
    where
        F: Fn(&[&str]) -> bool + Send + Sync + 'static,
    {
        Criterion::Predicate(Arc::new(
            move |args: &[&str]| -> std::result::Result<bool, PredicateError> { Ok(func(args)) },
        ))
    }

    /// Fallible predicate criterion. An `Err` aborts evaluation and reaches the caller as
    /// [`crate::AnymatchError::Predicate`].
    pub fn try_predicate<F>(func: F) -> Self
    where
        F: Fn(&[&str]) -> std::result::Result<bool, PredicateError> + Send + Sync + 'static,
    {
        Criterion::Predicate(Arc::new(func))
    }

    /// Whether this is a string criterion carrying the negation marker.
    pub fn is_negated(&self) -> bool {
        matches!(self, Criterion::Glob(pattern) if pattern.starts_with(NEGATION_MARKER))
    }
}

impl fmt::Debug for Criterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Criterion::Glob(pattern) => f.debug_tuple("Glob").field(pattern).finish(),
            Criterion::Regex(regex) => f.debug_tuple("Regex").field(&regex.as_str()).finish(),
            Criterion::Predicate(_) => f.write_str("Predicate(<fn>)"),
            Criterion::Never => f.write_str("Never"),
        }
    }
}

impl From<&str> for Criterion {
    fn from(pattern: &str) -> Self {
        Criterion::Glob(pattern.to_string())
    }
}

impl From<String> for Criterion {
    fn from(pattern: String) -> Self {
        Criterion::Glob(pattern)
    }
}

impl From<&String> for Criterion {
    fn from(pattern: &String) -> Self {
        Criterion::Glob(pattern.clone())
    }
}

impl From<Regex> for Criterion {
    fn from(regex: Regex) -> Self {
        Criterion::Regex(regex)
    }
}

impl From<PredicateFn> for Criterion {
    fn from(func: PredicateFn) -> Self {
        Criterion::Predicate(func)
    }
}

/// Ordered list of criteria. Position determines the reported match index.
///
/// A single criterion converts into a one-element list:
///
/// ```rust
/// use anymatch::Criteria;
///
/// assert_eq!(Criteria::from("*.rs").len(), 1);
/// assert_eq!(Criteria::from(["*.rs", "!target/**"]).len(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Criteria(Vec<Criterion>);

impl Criteria {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Append a criterion, returning the list for chaining.
    pub fn with(mut self, criterion: impl Into<Criterion>) -> Self {
        self.0.push(criterion.into());
        self
    }

    pub fn push(&mut self, criterion: impl Into<Criterion>) {
        self.0.push(criterion.into());
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Criterion> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[Criterion] {
        &self.0
    }
}

impl From<Criterion> for Criteria {
    fn from(criterion: Criterion) -> Self {
        Self(vec![criterion])
    }
}

impl From<&str> for Criteria {
    fn from(pattern: &str) -> Self {
        Self(vec![pattern.into()])
    }
}

impl From<String> for Criteria {
    fn from(pattern: String) -> Self {
        Self(vec![pattern.into()])
    }
}

impl From<Regex> for Criteria {
    fn from(regex: Regex) -> Self {
        Self(vec![regex.into()])
    }
}

impl<T: Into<Criterion>> From<Vec<T>> for Criteria {
    fn from(items: Vec<T>) -> Self {
        items.into_iter().collect()
    }
}

impl<T: Into<Criterion>, const N: usize> From<[T; N]> for Criteria {
    fn from(items: [T; N]) -> Self {
        items.into_iter().collect()
    }
}

impl<T: Into<Criterion>> FromIterator<T> for Criteria {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl IntoIterator for Criteria {
    type Item = Criterion;
    type IntoIter = std::vec::IntoIter<Criterion>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Criteria {
    type Item = &'a Criterion;
    type IntoIter = std::slice::Iter<'a, Criterion>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
