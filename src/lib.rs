//! # anymatch
//!
//! Compose literal strings, glob patterns, regular expressions and predicate functions into
//! a single matcher, for file-watching and file-selection tools that need to ask "does this
//! path satisfy any of these include/exclude rules?"
//!
//! ## Quick Start
//!
//! ### Immediate Test
//!
//! ```rust
//! use anymatch::{anymatch, anymatch_index};
//!
//! assert!(anymatch(["*.js", "!**/test/*.js"], "src/a.js")?);
//! assert!(!anymatch(["*.js", "!**/test/*.js"], "test/a.js")?);
//! assert_eq!(anymatch_index(["a.txt", "b.txt"], "b.txt")?, Some(1));
//! # Ok::<(), anymatch::AnymatchError>(())
//! ```
//!
//! ### Reusable Matcher
//!
//! ```rust
//! use anymatch::{matcher, TestOptions};
//!
//! let watch = matcher(["src/**", "!**/*.tmp"])?;
//! for path in ["src/lib.rs", "src\\main.rs", "src/cache.tmp"] {
//!     println!("{path}: {}", watch.is_match(path)?);
//! }
//! assert_eq!(watch.test("src/lib.rs", TestOptions::index())?.signed_index(), 0);
//! # Ok::<(), anymatch::AnymatchError>(())
//! ```
//!
//! ### Predicate Criteria
//!
//! ```rust
//! use anymatch::{anymatch, Criterion};
//!
//! let same = Criterion::predicate(|args| args.len() == 2 && args[0] == args[1]);
//! assert!(anymatch(same, ["foo", "foo"])?);
//! # Ok::<(), anymatch::AnymatchError>(())
//! ```
//!
//! ### Criteria Files
//!
//! ```rust,ignore
//! use anymatch::CriteriaFile;
//!
//! let matcher = CriteriaFile::from_path("watch.yaml")?.into_matcher()?;
//! let selected = matcher.par_select(&paths)?;
//! ```

pub mod config;
pub mod error;
pub mod loader;
pub mod matcher;
pub mod path;

pub use config::{GlobConfig, MatcherConfig, ParallelConfig, PathConfig};
pub use error::{AnymatchError, PredicateError, Result};
pub use loader::{CriteriaFile, CriteriaSpec, CriterionSpec};
pub use matcher::{
    Candidate, CompiledPredicate, Criteria, Criterion, GlobCompilerFn, GlobFn, MatchResult,
    Matcher, MatcherBuilder, PredicateFn, PredicateKind, TestOptions, NEGATION_MARKER,
};
pub use path::normalize_path;

/// Compile `criteria` with the default configuration and test one candidate.
pub fn anymatch<'a>(
    criteria: impl Into<Criteria>,
    candidate: impl Into<Candidate<'a>>,
) -> Result<bool> {
    matcher(criteria)?.is_match(candidate)
}

/// Like [`anymatch`], returning the index of the first matching criterion.
pub fn anymatch_index<'a>(
    criteria: impl Into<Criteria>,
    candidate: impl Into<Candidate<'a>>,
) -> Result<Option<usize>> {
    matcher(criteria)?.match_index(candidate)
}

/// Compile `criteria` once into a reusable [`Matcher`].
pub fn matcher(criteria: impl Into<Criteria>) -> Result<Matcher> {
    MatcherBuilder::new().compile(criteria)
}
