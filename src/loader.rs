//! Criteria files: criteria and their configuration loaded from YAML or JSON.
//!
//! ```yaml
//! criteria:
//!   - "src/**/*.rs"
//!   - "!**/generated/**"
//!   - regex: "\\.md$"
//!     case_insensitive: true
//! config:
//!   glob:
//!     literal_separator: true
//! ```
//!
//! Entries are either a string (literal or glob, `!` negates) or a map with a `regex` key.
//! Any other entry loads as a criterion that never matches. `criteria` may also be a
//! single entry instead of a list.

use crate::config::MatcherConfig;
use crate::error::{AnymatchError, Result};
use crate::matcher::{Criteria, Criterion, Matcher, MatcherBuilder};
use regex::RegexBuilder;
use serde::de::IgnoredAny;
use serde::Deserialize;
use serde_json::Value;
use std::path::Path;
use tracing::debug;

/// One criterion as written in a criteria file.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum CriterionSpec {
    Pattern(String),
    Regex {
        regex: String,
        #[serde(default)]
        case_insensitive: bool,
    },
    Unsupported(IgnoredAny),
}

impl CriterionSpec {
    /// Build the criterion this entry describes.
    ///
    /// # Errors
    /// * `InvalidRegex` - the `regex` entry does not compile
    pub fn to_criterion(&self) -> Result<Criterion> {
        match self {
            CriterionSpec::Pattern(pattern) => Ok(Criterion::Glob(pattern.clone())),
            CriterionSpec::Regex {
                regex,
                case_insensitive,
            } => RegexBuilder::new(regex)
                .case_insensitive(*case_insensitive)
                .build()
                .map(Criterion::Regex)
                .map_err(|e| AnymatchError::InvalidRegex {
                    pattern: regex.clone(),
                    message: e.to_string(),
                }),
            CriterionSpec::Unsupported(_) => Ok(Criterion::Never),
        }
    }
}

/// A single entry or a list of entries.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum CriteriaSpec {
    Many(Vec<CriterionSpec>),
    One(CriterionSpec),
}

impl CriteriaSpec {
    pub fn to_criteria(&self) -> Result<Criteria> {
        match self {
            CriteriaSpec::Many(specs) => specs.iter().map(CriterionSpec::to_criterion).collect(),
            CriteriaSpec::One(spec) => Ok(Criteria::from(spec.to_criterion()?)),
        }
    }
}

/// Deserialized criteria file.
#[derive(Debug, Clone, Deserialize)]
pub struct CriteriaFile {
    #[serde(default)]
    pub criteria: Option<CriteriaSpec>,

    #[serde(default)]
    pub config: MatcherConfig,
}

impl CriteriaFile {
    pub fn from_yaml_str(source: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(source)?)
    }

    pub fn from_json_str(source: &str) -> Result<Self> {
        Ok(serde_json::from_str(source)?)
    }

    /// Load a criteria file. A `.json` extension selects JSON; anything else is read as
    /// YAML.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path)?;
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        debug!(path = %path.display(), json = is_json, "loading criteria file");
        if is_json {
            Self::from_json_str(&source)
        } else {
            Self::from_yaml_str(&source)
        }
    }

    /// The criteria this file declares.
    ///
    /// # Errors
    /// * `InvalidArgument` - the file has no `criteria` entry, or it is null
    /// * `InvalidRegex` - a regex entry does not compile
    pub fn criteria(&self) -> Result<Criteria> {
        self.criteria
            .as_ref()
            .ok_or_else(missing_criteria)?
            .to_criteria()
    }

    /// Compile the criteria with the file's own configuration.
    pub fn into_matcher(self) -> Result<Matcher> {
        let criteria = self.criteria()?;
        MatcherBuilder::with_config(self.config).compile(criteria)
    }
}

impl Criteria {
    /// Convert dynamic input into criteria, using the criteria-file entry rules.
    ///
    /// # Errors
    /// * `InvalidArgument` - `value` is null
    /// * `InvalidRegex` - a regex entry does not compile
    pub fn from_json(value: &Value) -> Result<Self> {
        if value.is_null() {
            return Err(missing_criteria());
        }
        CriteriaSpec::deserialize(value)?.to_criteria()
    }
}

fn missing_criteria() -> AnymatchError {
    AnymatchError::InvalidArgument("specify criteria".to_string())
}
