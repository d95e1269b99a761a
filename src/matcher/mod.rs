//! Criteria compilation and match evaluation.
//!
//! The matcher system separates compilation from evaluation:
//! - **Compilation Phase**: each criterion becomes a [`CompiledPredicate`]; negated string
//!   criteria (`!pattern`) are split from positive ones
//! - **Evaluation Phase**: negated predicates veto first, then positive predicates are
//!   scanned in declaration order and the first match wins
//!
//! ## Core Components
//!
//! - [`Criterion`] / [`Criteria`] - literal/glob strings, regexes, predicate functions
//! - [`MatcherBuilder`] - configuration plus the glob compiler seam
//! - [`Matcher`] - reusable, thread-safe evaluator
//! - [`Candidate`] - a path, or a tuple of arguments for predicate criteria
//!
//! ## Example Usage
//!
//! ```rust
//! use anymatch::{Criteria, Criterion, MatcherBuilder};
//! use regex::Regex;
//!
//! let criteria = Criteria::new()
//!     .with("src/**/*.rs")
//!     .with("!**/generated/**")
//!     .with(Regex::new(r"\.md$").unwrap())
//!     .with(Criterion::predicate(|args| args.len() == 2 && args[1] == "create"));
//!
//! let matcher = MatcherBuilder::new().compile(criteria).unwrap();
//! assert_eq!(matcher.match_index("src/lib.rs").unwrap(), Some(0));
//! assert_eq!(matcher.match_index("src/generated/api.rs").unwrap(), None);
//! assert_eq!(matcher.match_index(["notes.txt", "create"]).unwrap(), Some(3));
//! ```

pub mod builder;
pub mod candidate;
pub mod compiled;
pub mod evaluator;
pub mod glob;
pub mod types;

pub use builder::MatcherBuilder;
pub use candidate::Candidate;
pub use compiled::{CompiledPredicate, PredicateKind};
pub use evaluator::{MatchResult, Matcher, TestOptions};
pub use glob::{compile_glob, default_glob_compiler};
pub use types::{Criteria, Criterion, GlobCompilerFn, GlobFn, PredicateFn, NEGATION_MARKER};
