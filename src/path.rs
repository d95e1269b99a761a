//! Separator normalization for candidate paths.

use std::borrow::Cow;

const SEPARATORS: [char; 2] = ['/', '\\'];

/// Canonicalize path separators to `/`.
///
/// Runs of `/` and `\` collapse into one `/`. A trailing separator is dropped when
/// `strip_trailing` is set. The leading `\\` of Windows verbatim and device paths
/// (`\\?\`, `\\.\`) becomes `//`. A lone separator always normalizes to `/`.
///
/// Returns the input unchanged, without allocating, when nothing needs rewriting.
///
/// ```rust
/// use anymatch::normalize_path;
///
/// assert_eq!(normalize_path("src\\lib\\", true), "src/lib");
/// assert_eq!(normalize_path("a//b", true), "a/b");
/// assert_eq!(normalize_path("\\\\?\\C:\\dir", true), "//?/C:/dir");
/// ```
pub fn normalize_path(path: &str, strip_trailing: bool) -> Cow<'_, str> {
    if path == "/" || path == "\\" {
        return Cow::Borrowed("/");
    }
    if path.len() <= 1 {
        return Cow::Borrowed(path);
    }

    let bytes = path.as_bytes();
    let mut prefix = "";
    let mut rest = path;
    if bytes.len() > 4
        && bytes[3] == b'\\'
        && (bytes[2] == b'?' || bytes[2] == b'.')
        && path.starts_with("\\\\")
    {
        prefix = "//";
        rest = &path[2..];
    }

    if prefix.is_empty() && is_canonical(rest, strip_trailing) {
        return Cow::Borrowed(path);
    }

    let mut normalized = String::with_capacity(prefix.len() + rest.len());
    normalized.push_str(prefix);

    // The first segment is always kept; an empty last one is the trailing separator.
    let mut segments = rest.split(&SEPARATORS[..]).peekable();
    if let Some(first) = segments.next() {
        normalized.push_str(first);
    }
    while let Some(segment) = segments.next() {
        let is_last = segments.peek().is_none();
        if segment.is_empty() && (!is_last || strip_trailing) {
            continue;
        }
        normalized.push('/');
        normalized.push_str(segment);
    }
    Cow::Owned(normalized)
}

fn is_canonical(path: &str, strip_trailing: bool) -> bool {
    !path.contains('\\')
        && !path.contains("//")
        && !(strip_trailing && path.ends_with('/'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unchanged_paths_are_borrowed() {
        assert!(matches!(normalize_path("src/a.js", true), Cow::Borrowed(_)));
        assert!(matches!(normalize_path("a", true), Cow::Borrowed(_)));
        assert!(matches!(normalize_path("", true), Cow::Borrowed(_)));
    }

    #[test]
    fn test_backslashes_become_slashes() {
        assert_eq!(normalize_path("src\\lib\\mod.rs", true), "src/lib/mod.rs");
        assert_eq!(normalize_path("C:\\Users\\me", true), "C:/Users/me");
    }

    #[test]
    fn test_separator_runs_collapse() {
        assert_eq!(normalize_path("a//b///c", true), "a/b/c");
        assert_eq!(normalize_path("a\\/\\b", true), "a/b");
        assert_eq!(normalize_path("//a", true), "/a");
    }

    #[test]
    fn test_trailing_separator() {
        assert_eq!(normalize_path("src/", true), "src");
        assert_eq!(normalize_path("src\\\\", true), "src");
        assert_eq!(normalize_path("src/", false), "src/");
        assert_eq!(normalize_path("src//", false), "src/");
    }

    #[test]
    fn test_lone_separators() {
        assert_eq!(normalize_path("/", true), "/");
        assert_eq!(normalize_path("\\", true), "/");
        assert_eq!(normalize_path("//", true), "");
        assert_eq!(normalize_path("//", false), "/");
    }

    #[test]
    fn test_leading_separator_kept() {
        assert_eq!(normalize_path("/usr/local/", true), "/usr/local");
        assert_eq!(normalize_path("\\usr", true), "/usr");
    }

    #[test]
    fn test_windows_namespace_prefixes() {
        assert_eq!(normalize_path("\\\\?\\C:\\dir\\file", true), "//?/C:/dir/file");
        assert_eq!(normalize_path("\\\\.\\pipe\\name", true), "//./pipe/name");
        // A plain UNC share is not a namespace prefix.
        assert_eq!(normalize_path("\\\\server\\share", true), "/server/share");
    }
}
