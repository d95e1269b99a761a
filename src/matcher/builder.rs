//! Builder that compiles criteria into a reusable [`Matcher`].

use crate::config::MatcherConfig;
use crate::error::Result;
use crate::matcher::compiled::CompiledPredicate;
use crate::matcher::evaluator::Matcher;
use crate::matcher::glob::default_glob_compiler;
use crate::matcher::types::{Criteria, Criterion, GlobCompilerFn, GlobFn, NEGATION_MARKER};
use crate::path::normalize_path;
use std::borrow::Cow;
use std::sync::Arc;
use tracing::{debug, trace};

/// Builder for compiling criteria into a [`Matcher`].
///
/// Holds the configuration and the glob compiler seam. Compilation runs once, eagerly;
/// the resulting matcher reuses the compiled predicates for every test.
///
/// # Example
/// ```rust,ignore
/// use anymatch::{MatcherBuilder, MatcherConfig};
///
/// let matcher = MatcherBuilder::with_config(MatcherConfig::path_aware())
///     .compile(["src/**/*.rs", "!**/generated/**"])?;
/// assert!(matcher.is_match("src/lib.rs")?);
/// ```
#[derive(Clone)]
pub struct MatcherBuilder {
    config: MatcherConfig,
    glob_compiler: GlobCompilerFn,
}

impl MatcherBuilder {
    /// Create a builder with the default configuration and the `globset` compiler.
    pub fn new() -> Self {
        Self::with_config(MatcherConfig::default())
    }

    pub fn with_config(config: MatcherConfig) -> Self {
        Self {
            config,
            glob_compiler: default_glob_compiler(),
        }
    }

    /// Replace the glob compiler used for every string criterion.
    ///
    /// # Example
    /// ```rust,ignore
    /// let builder = MatcherBuilder::new().with_glob_compiler(|pattern, _config| {
    ///     let prefix = pattern.trim_end_matches('*').to_string();
    ///     Ok(Arc::new(move |path: &str| path.starts_with(&prefix)) as GlobFn)
    /// });
    /// ```
    pub fn with_glob_compiler<F>(mut self, compiler: F) -> Self
    where
        F: Fn(&str, &crate::config::GlobConfig) -> Result<GlobFn> + Send + Sync + 'static,
    {
        self.glob_compiler = Arc::new(compiler);
        self
    }

    pub fn config(&self) -> &MatcherConfig {
        &self.config
    }

    /// Compile criteria into a reusable matcher.
    ///
    /// String criteria starting with `!` land in the negated set with the marker stripped;
    /// everything else lands in the positive set in declaration order. Each compiled
    /// predicate remembers its position in `criteria`.
    ///
    /// A pattern the glob compiler rejects still matches its own literal text, whether
    /// negated or not.
    ///
    /// # Errors
    /// * `InvalidGlob` - only with `strict_globs`, for a pattern the glob compiler rejects
    pub fn compile(&self, criteria: impl Into<Criteria>) -> Result<Matcher> {
        let criteria = criteria.into();
        let mut negated = Vec::new();
        let mut positive = Vec::with_capacity(criteria.len());

        for (index, criterion) in criteria.iter().enumerate() {
            match criterion {
                Criterion::Glob(pattern) => {
                    if let Some(stripped) = pattern.strip_prefix(NEGATION_MARKER) {
                        trace!(index, pattern = %stripped, "compiling negated glob");
                        let glob = self.compile_glob(stripped)?;
                        let literal = self.normalize_literal(stripped);
                        negated.push(CompiledPredicate::negated(index, &literal, glob));
                    } else {
                        trace!(index, pattern = %pattern, "compiling literal or glob");
                        let glob = self.compile_glob(pattern)?;
                        let literal = self.normalize_literal(pattern);
                        positive.push(CompiledPredicate::literal_or_glob(index, &literal, glob));
                    }
                }
                Criterion::Regex(regex) => {
                    trace!(index, regex = %regex.as_str(), "compiling regex");
                    positive.push(CompiledPredicate::regex(index, regex.clone()));
                }
                Criterion::Predicate(func) => {
                    trace!(index, "compiling predicate function");
                    positive.push(CompiledPredicate::function(index, func.clone()));
                }
                Criterion::Never => {
                    trace!(index, "compiling unsupported criterion as never-match");
                    positive.push(CompiledPredicate::never(index));
                }
            }
        }

        let fast_path = match criteria.as_slice() {
            [Criterion::Glob(pattern)] => !pattern.starts_with(NEGATION_MARKER),
            _ => false,
        };

        debug!(
            criteria = criteria.len(),
            negated = negated.len(),
            positive = positive.len(),
            fast_path,
            "compiled criteria"
        );

        Ok(Matcher::from_parts(
            criteria.len(),
            negated,
            positive,
            fast_path,
            self.config.clone(),
        ))
    }

    /// Candidates are normalized before testing, so literal text must be too.
    fn normalize_literal<'p>(&self, pattern: &'p str) -> Cow<'p, str> {
        normalize_path(pattern, self.config.path.strip_trailing_separator)
    }

    /// Run the glob compiler, degrading invalid patterns unless strict mode is on.
    ///
    /// `Ok(None)` means the pattern was invalid and has no glob predicate.
    fn compile_glob(&self, pattern: &str) -> Result<Option<GlobFn>> {
        match (self.glob_compiler)(pattern, &self.config.glob) {
            Ok(glob) => Ok(Some(glob)),
            Err(err) if !self.config.strict_globs => {
                debug!(pattern, error = %err, "invalid glob, matching literally");
                Ok(None)
            }
            Err(err) => Err(err),
        }
    }
}

impl Default for MatcherBuilder {
    fn default() -> Self {
        Self::new()
    }
}
