//! Default glob compiler backed by `globset`.

use crate::config::GlobConfig;
use crate::error::{AnymatchError, Result};
use crate::matcher::types::{GlobCompilerFn, GlobFn};
use globset::GlobBuilder;
use std::sync::Arc;

/// Compile a glob pattern into a predicate over normalized paths.
///
/// # Example
/// ```rust,ignore
/// let is_js = compile_glob("**/*.js", &GlobConfig::default())?;
/// assert!(is_js("src/index.js"));
/// ```
pub fn compile_glob(pattern: &str, config: &GlobConfig) -> Result<GlobFn> {
    let glob = GlobBuilder::new(pattern)
        .literal_separator(config.literal_separator)
        .case_insensitive(config.case_insensitive)
        .backslash_escape(config.backslash_escape)
        .empty_alternates(config.empty_alternates)
        .build()
        .map_err(|e| AnymatchError::InvalidGlob {
            pattern: pattern.to_string(),
            message: e.kind().to_string(),
        })?;

    let matcher = glob.compile_matcher();
    Ok(Arc::new(move |path: &str| matcher.is_match(path)))
}

/// The default glob compiler as a registrable seam.
pub fn default_glob_compiler() -> GlobCompilerFn {
    Arc::new(compile_glob)
}
