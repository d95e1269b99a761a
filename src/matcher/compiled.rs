//! Compiled criteria ready for evaluation.

use crate::error::{AnymatchError, Result};
use crate::matcher::types::{GlobFn, PredicateFn};
use regex::Regex;
use std::fmt;
use std::sync::Arc;

/// Kind of criterion a compiled predicate came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PredicateKind {
    /// String criterion matched literally or as a glob
    LiteralOrGlob,
    /// Negated string criterion: the glob, or its literal text when the glob is invalid
    NegatedGlob,
    Regex,
    Function,
    Never,
}

#[derive(Clone)]
enum Test {
    /// Exact literal equality, or the glob when the pattern compiled.
    LiteralOrGlob {
        literal: Arc<str>,
        glob: Option<GlobFn>,
    },
    Glob(GlobFn),
    Literal(Arc<str>),
    Regex(Regex),
    Function(PredicateFn),
    Never,
}

/// A criterion compiled into a pure test.
///
/// Carries the criterion's position in the original list so that match indices always
/// refer to the caller's input, not to the negated or positive subset.
#[derive(Clone)]
pub struct CompiledPredicate {
    index: usize,
    test: Test,
}

impl CompiledPredicate {
    pub(crate) fn literal_or_glob(index: usize, literal: &str, glob: Option<GlobFn>) -> Self {
        Self {
            index,
            test: Test::LiteralOrGlob {
                literal: Arc::from(literal),
                glob,
            },
        }
    }

    /// Negated criterion testing only the glob, or only the literal when there is none.
    pub(crate) fn negated(index: usize, literal: &str, glob: Option<GlobFn>) -> Self {
        let test = match glob {
            Some(glob) => Test::Glob(glob),
            None => Test::Literal(Arc::from(literal)),
        };
        Self { index, test }
    }

    pub(crate) fn regex(index: usize, regex: Regex) -> Self {
        Self {
            index,
            test: Test::Regex(regex),
        }
    }

    pub(crate) fn function(index: usize, func: PredicateFn) -> Self {
        Self {
            index,
            test: Test::Function(func),
        }
    }

    pub(crate) fn never(index: usize) -> Self {
        Self {
            index,
            test: Test::Never,
        }
    }

    /// Position of the source criterion in the original criteria list.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn kind(&self) -> PredicateKind {
        match self.test {
            Test::LiteralOrGlob { .. } => PredicateKind::LiteralOrGlob,
            Test::Glob(_) | Test::Literal(_) => PredicateKind::NegatedGlob,
            Test::Regex(_) => PredicateKind::Regex,
            Test::Function(_) => PredicateKind::Function,
            Test::Never => PredicateKind::Never,
        }
    }

    /// Test a candidate.
    ///
    /// `path` is the normalized head of the candidate; `args` are the arguments handed to
    /// predicate functions.
    pub fn matches(&self, path: &str, args: &[&str]) -> Result<bool> {
        match &self.test {
            Test::LiteralOrGlob { literal, glob } => {
                Ok(**literal == *path || glob.as_ref().is_some_and(|glob| glob(path)))
            }
            Test::Glob(glob) => Ok(glob(path)),
            Test::Literal(literal) => Ok(**literal == *path),
            Test::Regex(regex) => Ok(regex.is_match(path)),
            Test::Function(func) => func(args).map_err(AnymatchError::Predicate),
            Test::Never => Ok(false),
        }
    }
}

impl fmt::Debug for CompiledPredicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut debug = f.debug_struct("CompiledPredicate");
        debug.field("index", &self.index).field("kind", &self.kind());
        match &self.test {
            Test::LiteralOrGlob { literal, glob } => {
                debug.field("literal", literal).field("glob", &glob.is_some());
            }
            Test::Literal(literal) => {
                debug.field("literal", literal);
            }
            Test::Regex(regex) => {
                debug.field("regex", &regex.as_str());
            }
            _ => {}
        }
        debug.finish()
    }
}
