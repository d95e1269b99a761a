//! Two-phase match evaluation over compiled criteria.

use crate::config::MatcherConfig;
use crate::error::Result;
use crate::matcher::candidate::Candidate;
use crate::matcher::compiled::CompiledPredicate;
use crate::path::normalize_path;
use rayon::prelude::*;
use std::ops::Range;
use std::sync::Arc;

/// Options for [`Matcher::test`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TestOptions {
    /// Report the index of the first matching criterion instead of a boolean.
    pub return_index: bool,
}

impl TestOptions {
    pub fn boolean() -> Self {
        Self {
            return_index: false,
        }
    }

    pub fn index() -> Self {
        Self { return_index: true }
    }
}

/// Result of [`Matcher::test`], shaped by [`TestOptions`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchResult {
    Matched(bool),
    /// Index of the first matching criterion in the original list.
    Index(Option<usize>),
}

impl MatchResult {
    pub fn is_match(&self) -> bool {
        match self {
            MatchResult::Matched(matched) => *matched,
            MatchResult::Index(index) => index.is_some(),
        }
    }

    /// Matching criterion position, or `None` for a miss or a boolean result.
    pub fn index(&self) -> Option<usize> {
        match self {
            MatchResult::Index(index) => *index,
            MatchResult::Matched(_) => None,
        }
    }

    /// Signed index with `-1` for no match.
    ///
    /// A boolean result has no position: `Matched(true)` maps to `0` only so that the
    /// sign still reports the outcome. Use [`MatchResult::index`] when the position
    /// matters.
    pub fn signed_index(&self) -> i64 {
        match self {
            MatchResult::Matched(true) => 0,
            MatchResult::Index(Some(index)) => *index as i64,
            MatchResult::Matched(false) | MatchResult::Index(None) => -1,
        }
    }
}

#[derive(Debug)]
struct CompiledCriteria {
    len: usize,
    negated: Vec<CompiledPredicate>,
    /// Sorted by original index.
    positive: Vec<CompiledPredicate>,
    fast_path: bool,
}

/// Reusable matcher over compiled criteria.
///
/// Cheap to clone and safe to share across threads; compiled predicates are read-only.
///
/// # Evaluation order
///
/// 1. The candidate head is normalized.
/// 2. Any negated criterion matching it vetoes the whole evaluation.
/// 3. Positive criteria are tried in declaration order; the first match wins.
///
/// # Example
/// ```rust
/// use anymatch::matcher;
///
/// let m = matcher(["*.js", "!**/test/*.js"]).unwrap();
/// assert!(m.is_match("src/a.js").unwrap());
/// assert!(!m.is_match("test/a.js").unwrap());
/// ```
#[derive(Debug, Clone)]
pub struct Matcher {
    compiled: Arc<CompiledCriteria>,
    config: MatcherConfig,
}

impl Matcher {
    pub(crate) fn from_parts(
        len: usize,
        negated: Vec<CompiledPredicate>,
        positive: Vec<CompiledPredicate>,
        fast_path: bool,
        config: MatcherConfig,
    ) -> Self {
        Self {
            compiled: Arc::new(CompiledCriteria {
                len,
                negated,
                positive,
                fast_path,
            }),
            config,
        }
    }

    /// Whether the candidate matches any positive criterion and no negated one.
    pub fn is_match<'a>(&self, candidate: impl Into<Candidate<'a>>) -> Result<bool> {
        Ok(self.match_index(candidate)?.is_some())
    }

    /// Index of the first matching criterion in the original list, or `None`.
    pub fn match_index<'a>(&self, candidate: impl Into<Candidate<'a>>) -> Result<Option<usize>> {
        self.evaluate(&candidate.into(), 0..self.compiled.len)
    }

    /// Test with the calling convention selected by `options`.
    pub fn test<'a>(
        &self,
        candidate: impl Into<Candidate<'a>>,
        options: TestOptions,
    ) -> Result<MatchResult> {
        let index = self.match_index(candidate)?;
        Ok(if options.return_index {
            MatchResult::Index(index)
        } else {
            MatchResult::Matched(index.is_some())
        })
    }

    /// Evaluate only the criteria whose original position lies in `range`.
    ///
    /// Criteria outside the range are skipped entirely, negated ones included. Bounds
    /// are clamped to the criteria list, so an empty or out-of-bounds range never matches.
    /// The returned index is still a position in the original list.
    pub fn test_range<'a>(
        &self,
        candidate: impl Into<Candidate<'a>>,
        range: Range<usize>,
    ) -> Result<Option<usize>> {
        let end = range.end.min(self.compiled.len);
        let start = range.start.min(end);
        self.evaluate(&candidate.into(), start..end)
    }

    /// Keep the paths that match, in input order.
    pub fn select<'p, I>(&self, paths: I) -> Result<Vec<&'p str>>
    where
        I: IntoIterator<Item = &'p str>,
    {
        let mut selected = Vec::new();
        for path in paths {
            if self.is_match(path)? {
                selected.push(path);
            }
        }
        Ok(selected)
    }

    /// Like [`Matcher::select`], spread across the rayon pool for large batches.
    ///
    /// Batches smaller than `ParallelConfig::min_batch_for_parallelism` run on the calling
    /// thread. Input order is preserved.
    pub fn par_select<'p>(&self, paths: &[&'p str]) -> Result<Vec<&'p str>> {
        if paths.len() < self.config.parallel.min_batch_for_parallelism {
            return self.select(paths.iter().copied());
        }

        let flags = paths
            .par_iter()
            .map(|path| self.is_match(*path))
            .collect::<Result<Vec<bool>>>()?;

        Ok(paths
            .iter()
            .zip(flags)
            .filter_map(|(path, matched)| matched.then_some(*path))
            .collect())
    }

    /// Number of criteria the matcher was compiled from.
    pub fn len(&self) -> usize {
        self.compiled.len
    }

    pub fn is_empty(&self) -> bool {
        self.compiled.len == 0
    }

    pub fn negated_count(&self) -> usize {
        self.compiled.negated.len()
    }

    pub fn positive_count(&self) -> usize {
        self.compiled.positive.len()
    }

    pub fn negated(&self) -> &[CompiledPredicate] {
        &self.compiled.negated
    }

    pub fn positive(&self) -> &[CompiledPredicate] {
        &self.compiled.positive
    }

    /// Whether evaluation skips the veto phase for a single positive string criterion.
    pub fn uses_fast_path(&self) -> bool {
        self.compiled.fast_path
    }

    pub fn config(&self) -> &MatcherConfig {
        &self.config
    }

    fn evaluate(&self, candidate: &Candidate<'_>, window: Range<usize>) -> Result<Option<usize>> {
        let head = candidate.head()?;
        let path = normalize_path(head, self.config.path.strip_trailing_separator);
        let single = [&*path];
        let args: &[&str] = match candidate {
            Candidate::Path(_) => &single,
            Candidate::Tuple(args) => args,
        };

        let compiled = &*self.compiled;
        if window.is_empty() {
            return Ok(None);
        }

        if compiled.fast_path {
            let predicate = &compiled.positive[0];
            return Ok(predicate.matches(&path, args)?.then_some(predicate.index()));
        }

        for predicate in &compiled.negated {
            if window.contains(&predicate.index()) && predicate.matches(&path, args)? {
                return Ok(None);
            }
        }

        let from = compiled
            .positive
            .partition_point(|p| p.index() < window.start);
        for predicate in &compiled.positive[from..] {
            if predicate.index() >= window.end {
                break;
            }
            if predicate.matches(&path, args)? {
                return Ok(Some(predicate.index()));
            }
        }

        Ok(None)
    }
}
