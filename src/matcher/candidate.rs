//! Candidate values tested against compiled criteria.

use crate::error::{AnymatchError, Result};
use serde_json::Value;

/// Value under test: a single path, or a tuple of arguments for predicate criteria.
///
/// For a tuple, the first element is the path that string and regex criteria see (after
/// normalization); predicate criteria receive the whole tuple untouched.
///
/// ```rust
/// use anymatch::Candidate;
///
/// let path = Candidate::from("src/lib.rs");
/// assert_eq!(path.head().unwrap(), "src/lib.rs");
///
/// let tuple = Candidate::from(["src/lib.rs", "modify"]);
/// assert_eq!(tuple.head().unwrap(), "src/lib.rs");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Candidate<'a> {
    Path(&'a str),
    Tuple(Vec<&'a str>),
}

impl<'a> Candidate<'a> {
    /// The value string and regex criteria are tested against, before normalization.
    ///
    /// Fails with [`AnymatchError::TypeMismatch`] for an empty tuple.
    pub fn head(&self) -> Result<&'a str> {
        match self {
            Candidate::Path(path) => Ok(*path),
            Candidate::Tuple(args) => args
                .first()
                .copied()
                .ok_or_else(|| AnymatchError::TypeMismatch("an empty array".to_string())),
        }
    }

    pub fn is_tuple(&self) -> bool {
        matches!(self, Candidate::Tuple(_))
    }

    /// Convert dynamic input into a candidate.
    ///
    /// Strings become paths and arrays of strings become tuples. Anything else, including
    /// arrays holding non-string values, fails with [`AnymatchError::TypeMismatch`].
    pub fn from_json(value: &'a Value) -> Result<Self> {
        match value {
            Value::String(path) => Ok(Candidate::Path(path)),
            Value::Array(items) => {
                let args = items
                    .iter()
                    .map(|item| {
                        item.as_str().ok_or_else(|| {
                            AnymatchError::TypeMismatch(format!(
                                "an array containing {}",
                                json_type_name(item)
                            ))
                        })
                    })
                    .collect::<Result<Vec<_>>>()?;
                if args.is_empty() {
                    return Err(AnymatchError::TypeMismatch("an empty array".to_string()));
                }
                Ok(Candidate::Tuple(args))
            }
            other => Err(AnymatchError::TypeMismatch(json_type_name(other).to_string())),
        }
    }
}

pub(crate) fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

impl<'a> From<&'a str> for Candidate<'a> {
    fn from(path: &'a str) -> Self {
        Candidate::Path(path)
    }
}

impl<'a> From<&'a String> for Candidate<'a> {
    fn from(path: &'a String) -> Self {
        Candidate::Path(path.as_str())
    }
}

impl<'a> From<&'a [&'a str]> for Candidate<'a> {
    fn from(args: &'a [&'a str]) -> Self {
        Candidate::Tuple(args.to_vec())
    }
}

impl<'a> From<Vec<&'a str>> for Candidate<'a> {
    fn from(args: Vec<&'a str>) -> Self {
        Candidate::Tuple(args)
    }
}

impl<'a, const N: usize> From<[&'a str; N]> for Candidate<'a> {
    fn from(args: [&'a str; N]) -> Self {
        Candidate::Tuple(args.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_path_head() {
        let candidate = Candidate::from("a/b.txt");
        assert_eq!(candidate.head().unwrap(), "a/b.txt");
        assert!(!candidate.is_tuple());
    }

    #[test]
    fn test_tuple_head() {
        let candidate = Candidate::from(vec!["first", "second"]);
        assert_eq!(candidate.head().unwrap(), "first");
        assert!(candidate.is_tuple());
    }

    #[test]
    fn test_empty_tuple_is_type_mismatch() {
        let candidate = Candidate::Tuple(Vec::new());
        assert!(matches!(
            candidate.head(),
            Err(AnymatchError::TypeMismatch(_))
        ));
    }

    #[test]
    fn test_from_json_string_and_array() {
        let path = json!("src/a.js");
        assert_eq!(
            Candidate::from_json(&path).unwrap(),
            Candidate::Path("src/a.js")
        );

        let tuple = json!(["foo", "bar"]);
        assert_eq!(
            Candidate::from_json(&tuple).unwrap(),
            Candidate::Tuple(vec!["foo", "bar"])
        );
    }

    #[test]
    fn test_from_json_rejects_other_types() {
        for value in [json!(42), json!(null), json!(true), json!({"path": "a"})] {
            match Candidate::from_json(&value) {
                Err(AnymatchError::TypeMismatch(got)) => {
                    assert_eq!(got, json_type_name(&value))
                }
                other => panic!("Expected TypeMismatch, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_from_json_rejects_non_string_elements() {
        let value = json!(["a", 1]);
        match Candidate::from_json(&value) {
            Err(AnymatchError::TypeMismatch(got)) => assert!(got.contains("number")),
            other => panic!("Expected TypeMismatch, got {other:?}"),
        }

        let empty = json!([]);
        assert!(matches!(
            Candidate::from_json(&empty),
            Err(AnymatchError::TypeMismatch(_))
        ));
    }
}
