//! Configuration for criteria compilation and evaluation.
//!
//! All structs are plain data with sensible defaults, `with_*` builder methods, and serde
//! support so a configuration can travel inside a criteria file next to the criteria it
//! applies to.

use serde::{Deserialize, Serialize};

/// Options handed to the glob compiler for every string criterion.
///
/// The defaults let `*` cross path separators, so `*.js` matches `src/a.js`. Use
/// [`MatcherConfig::path_aware`] when `*` must stay within a single path segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GlobConfig {
    /// When true, `*` and `?` never match `/`; only `**` crosses directories.
    ///
    /// **Default**: false
    pub literal_separator: bool,

    /// Match glob patterns case-insensitively.
    ///
    /// **Default**: false
    pub case_insensitive: bool,

    /// Treat `\` as an escape character inside glob patterns.
    ///
    /// Candidates are normalized to `/` separators before matching, so escaping is the
    /// only meaning a backslash can usefully have in a pattern.
    ///
    /// **Default**: true
    pub backslash_escape: bool,

    /// Allow empty alternatives in brace expansion, e.g. `{,.rs}`.
    ///
    /// **Default**: false
    pub empty_alternates: bool,
}

impl Default for GlobConfig {
    fn default() -> Self {
        Self {
            literal_separator: false,
            case_insensitive: false,
            backslash_escape: true,
            empty_alternates: false,
        }
    }
}

/// Options for candidate path normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PathConfig {
    /// Drop a trailing separator, so `src/` is tested as `src`.
    ///
    /// **Default**: true
    pub strip_trailing_separator: bool,
}

impl Default for PathConfig {
    fn default() -> Self {
        Self {
            strip_trailing_separator: true,
        }
    }
}

/// Configuration for batch selection across many candidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParallelConfig {
    /// Smallest batch that `par_select` hands to the rayon pool. Smaller batches are
    /// evaluated on the calling thread.
    ///
    /// **Default**: 256
    pub min_batch_for_parallelism: usize,
}

impl Default for ParallelConfig {
    fn default() -> Self {
        Self {
            min_batch_for_parallelism: 256,
        }
    }
}

/// Complete matcher configuration.
///
/// # Examples
///
/// ```rust
/// use anymatch::MatcherConfig;
///
/// // Default behaviour: `*` crosses directories, invalid globs fall back to literals
/// let config = MatcherConfig::default();
/// assert!(!config.strict_globs);
///
/// // Segment-aware globs for gitignore-like rules
/// let config = MatcherConfig::path_aware().with_case_insensitive(true);
/// assert!(config.glob.literal_separator);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatcherConfig {
    /// Glob compilation options
    pub glob: GlobConfig,

    /// Candidate normalization options
    pub path: PathConfig,

    /// Batch selection options
    pub parallel: ParallelConfig,

    /// Reject criteria with invalid glob syntax instead of degrading them.
    ///
    /// When false, a criterion with invalid glob syntax, negated or not, still matches its
    /// exact literal text.
    ///
    /// **Default**: false
    pub strict_globs: bool,
}

impl MatcherConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configuration that fails compilation on invalid glob syntax.
    pub fn strict() -> Self {
        Self {
            strict_globs: true,
            ..Self::default()
        }
    }

    /// Configuration where `*` and `?` stay inside one path segment.
    pub fn path_aware() -> Self {
        Self {
            glob: GlobConfig {
                literal_separator: true,
                ..GlobConfig::default()
            },
            ..Self::default()
        }
    }

    // Builder methods for glob configuration

    /// Set whether `*` and `?` may match `/`.
    pub fn with_literal_separator(mut self, enable: bool) -> Self {
        self.glob.literal_separator = enable;
        self
    }

    /// Enable or disable case-insensitive glob matching.
    pub fn with_case_insensitive(mut self, enable: bool) -> Self {
        self.glob.case_insensitive = enable;
        self
    }

    /// Enable or disable backslash escapes inside globs.
    pub fn with_backslash_escape(mut self, enable: bool) -> Self {
        self.glob.backslash_escape = enable;
        self
    }

    /// Enable or disable empty brace alternatives.
    pub fn with_empty_alternates(mut self, enable: bool) -> Self {
        self.glob.empty_alternates = enable;
        self
    }

    // Builder methods for path configuration

    /// Enable or disable stripping of a trailing separator.
    pub fn with_strip_trailing_separator(mut self, enable: bool) -> Self {
        self.path.strip_trailing_separator = enable;
        self
    }

    // Builder methods for parallel configuration

    /// Set the minimum batch size evaluated on the rayon pool.
    pub fn with_min_batch_for_parallelism(mut self, size: usize) -> Self {
        self.parallel.min_batch_for_parallelism = size;
        self
    }

    /// Enable or disable strict glob compilation.
    pub fn with_strict_globs(mut self, enable: bool) -> Self {
        self.strict_globs = enable;
        self
    }
}
