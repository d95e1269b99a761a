//! Error types for the anymatch crate.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, AnymatchError>;

/// Error raised by a user-supplied predicate function.
pub type PredicateError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Debug, Error)]
pub enum AnymatchError {
    /// The criteria argument was missing.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The candidate was neither a string nor an array of strings.
    #[error("Type mismatch: expected a string or an array of strings, got {0}")]
    TypeMismatch(String),

    #[error("Invalid glob pattern `{pattern}`: {message}")]
    InvalidGlob { pattern: String, message: String },

    #[error("Invalid regex pattern `{pattern}`: {message}")]
    InvalidRegex { pattern: String, message: String },

    #[error("Criteria parsing error: {0}")]
    Parse(String),

    #[error("IO error: {0}")]
    Io(String),

    /// A predicate criterion failed; the original error is passed through untouched.
    #[error(transparent)]
    Predicate(PredicateError),
}

impl AnymatchError {
    /// Wrap an arbitrary error raised inside a predicate criterion.
    pub fn predicate<E>(err: E) -> Self
    where
        E: Into<PredicateError>,
    {
        AnymatchError::Predicate(err.into())
    }
}

impl From<std::io::Error> for AnymatchError {
    fn from(err: std::io::Error) -> Self {
        AnymatchError::Io(err.to_string())
    }
}

impl From<serde_yaml::Error> for AnymatchError {
    fn from(err: serde_yaml::Error) -> Self {
        AnymatchError::Parse(err.to_string())
    }
}

impl From<serde_json::Error> for AnymatchError {
    fn from(err: serde_json::Error) -> Self {
        AnymatchError::Parse(err.to_string())
    }
}
