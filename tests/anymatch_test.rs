//! Matching behaviour through the public API.

use anymatch::{
    anymatch, anymatch_index, matcher, AnymatchError, Candidate, Criteria, Criterion,
    MatchResult, MatcherBuilder, MatcherConfig, TestOptions,
};
use regex::Regex;
use serde_json::json;
use std::fmt;

#[derive(Debug)]
struct PermissionDenied(String);

impl fmt::Display for PermissionDenied {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "permission denied: {}", self.0)
    }
}

impl std::error::Error for PermissionDenied {}

#[test]
fn test_glob_with_negation() {
    let criteria = ["*.js", "!**/test/*.js"];
    assert!(anymatch(criteria, "src/a.js").unwrap());
    assert!(!anymatch(criteria, "test/a.js").unwrap());
}

#[test]
fn test_regex_criterion() {
    let md = Regex::new(r"\.md$").unwrap();
    assert!(anymatch(md.clone(), "readme.md").unwrap());
    assert!(!anymatch(md, "readme.txt").unwrap());
}

#[test]
fn test_index_mode() {
    assert_eq!(anymatch_index(["a.txt", "b.txt"], "b.txt").unwrap(), Some(1));
    assert_eq!(anymatch_index(["a.txt", "b.txt"], "c.txt").unwrap(), None);
}

#[test]
fn test_predicate_over_tuple() {
    let same = Criterion::predicate(|args| args.len() == 2 && args[0] == args[1]);
    assert!(anymatch(same.clone(), ["foo", "foo"]).unwrap());
    assert!(!anymatch(same, ["foo", "bar"]).unwrap());
}

#[test]
fn test_exact_literal_matches_itself() {
    // Characters with glob meaning still match their literal text
    for literal in [
        "plain.txt",
        "*.js",
        "a?b",
        "{x,y}",
        "[abc",
        "dir/**",
        "dir\\file.txt",
        "build/",
        "a//b",
        "src\\gen\\",
    ] {
        assert!(anymatch(literal, literal).unwrap(), "{literal} should match itself");
        assert!(
            anymatch(["unrelated", literal], literal).unwrap(),
            "{literal} should match itself in a list"
        );
    }
}

#[test]
fn test_negation_always_wins() {
    let criteria = Criteria::new()
        .with("**")
        .with(Regex::new(".*").unwrap())
        .with(Criterion::predicate(|_| true))
        .with("!secret/**");

    let matcher = MatcherBuilder::new().compile(criteria).unwrap();
    assert!(matcher.is_match("public/a").unwrap());
    assert!(!matcher.is_match("secret/key.pem").unwrap());
    assert_eq!(matcher.match_index("secret/key.pem").unwrap(), None);
}

#[test]
fn test_leftmost_match_wins() {
    let matcher = matcher(["docs/**", "*.md", "readme.md"]).unwrap();
    assert_eq!(matcher.match_index("readme.md").unwrap(), Some(1));
    assert_eq!(matcher.match_index("docs/readme.md").unwrap(), Some(0));
}

#[test]
fn test_empty_criteria() {
    let empty: Vec<&str> = Vec::new();
    assert!(!anymatch(empty.clone(), "a").unwrap());
    assert_eq!(anymatch_index(empty, "").unwrap(), None);
}

#[test]
fn test_unparsable_exclusion_still_excludes() {
    let watch = matcher(["*", "![abc"]).unwrap();
    assert!(!watch.is_match("[abc").unwrap());
    assert!(watch.is_match("abc").unwrap());

    let selected = watch.select(["[abc", "a", "b"]).unwrap();
    assert_eq!(selected, ["a", "b"]);
}

#[test]
fn test_only_negations_never_match() {
    let matcher = matcher(["!*.tmp", "!*.bak"]).unwrap();
    assert!(!matcher.is_match("a.rs").unwrap());
    assert!(!matcher.is_match("a.tmp").unwrap());
}

#[test]
fn test_reusable_matcher() {
    let watch = matcher(["src/**/*.rs", "!**/target/**", "Cargo.toml"]).unwrap();

    let results: Vec<Option<usize>> = [
        "src/lib.rs",
        "src/matcher/mod.rs",
        "target/debug/build.rs",
        "Cargo.toml",
        "README.md",
    ]
    .iter()
    .map(|path| watch.match_index(*path).unwrap())
    .collect();

    assert_eq!(results, [Some(0), Some(0), None, Some(2), None]);
}

#[test]
fn test_options_shape_result() {
    let watch = matcher(["a.txt", "b.txt"]).unwrap();
    assert_eq!(
        watch.test("b.txt", TestOptions::index()).unwrap(),
        MatchResult::Index(Some(1))
    );
    assert_eq!(
        watch.test("x.txt", TestOptions::index()).unwrap().signed_index(),
        -1
    );
    assert_eq!(
        watch.test("a.txt", TestOptions::default()).unwrap(),
        MatchResult::Matched(true)
    );
}

#[test]
fn test_windows_separators() {
    let watch = matcher(["src/**/*.rs", "!src/gen/**"]).unwrap();
    assert!(watch.is_match("src\\lib.rs").unwrap());
    assert!(!watch.is_match("src\\gen\\out.rs").unwrap());
}

#[test]
fn test_path_aware_config() {
    let default = matcher("*.rs").unwrap();
    let path_aware = MatcherBuilder::with_config(MatcherConfig::path_aware())
        .compile("*.rs")
        .unwrap();

    assert!(default.is_match("src/lib.rs").unwrap());
    assert!(!path_aware.is_match("src/lib.rs").unwrap());
    assert!(path_aware.is_match("lib.rs").unwrap());
}

#[test]
fn test_predicate_error_identity_is_preserved() {
    let criteria = Criterion::try_predicate(|args| {
        Err(Box::new(PermissionDenied(args[0].to_string())) as anymatch::PredicateError)
    });

    let err = anymatch(criteria, "etc/shadow").unwrap_err();
    assert_eq!(err.to_string(), "permission denied: etc/shadow");
    match err {
        AnymatchError::Predicate(inner) => {
            let original = inner.downcast_ref::<PermissionDenied>().unwrap();
            assert_eq!(original.0, "etc/shadow");
        }
        other => panic!("Expected Predicate error, got {other:?}"),
    }
}

#[test]
fn test_dynamic_input() {
    let criteria = Criteria::from_json(&json!(["*.js", "!**/test/*.js"])).unwrap();
    let watch = MatcherBuilder::new().compile(criteria).unwrap();

    let candidate = json!("src/a.js");
    assert!(watch
        .is_match(Candidate::from_json(&candidate).unwrap())
        .unwrap());

    let bad = json!(42);
    assert!(matches!(
        Candidate::from_json(&bad),
        Err(AnymatchError::TypeMismatch(_))
    ));

    assert!(matches!(
        Criteria::from_json(&json!(null)),
        Err(AnymatchError::InvalidArgument(_))
    ));
}

#[test]
fn test_range_restricted_matching() {
    let watch = matcher(["*.md", "!docs/**", "docs/**", "**"]).unwrap();

    // Full evaluation: the negation vetoes docs/
    assert_eq!(watch.match_index("docs/guide.md").unwrap(), None);
    // Window skipping the negation
    assert_eq!(watch.test_range("docs/guide.md", 2..4).unwrap(), Some(2));
    // Window skipping the first criterion, reported index stays absolute
    assert_eq!(watch.test_range("notes.md", 2..4).unwrap(), Some(3));
}

#[test]
fn test_compilation_is_idempotent() {
    let criteria = Criteria::new()
        .with("*.js")
        .with("!**/test/*.js")
        .with(Regex::new(r"^lib/").unwrap());

    let first = MatcherBuilder::new().compile(criteria.clone()).unwrap();
    let second = MatcherBuilder::new().compile(criteria).unwrap();

    for path in ["src/a.js", "test/a.js", "lib/x", "other"] {
        assert_eq!(
            first.match_index(path).unwrap(),
            second.match_index(path).unwrap()
        );
    }
}
