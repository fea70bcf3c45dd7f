// crates/path_text_utils/src/lib.rs

//! Lexical path and text helpers shared by the context-gathering crates.
//!
//! Nothing in here touches the filesystem: paths are treated as plain
//! strings split into segments, so symlinks and `..` are never resolved.

/// Which separator and case rules apply when comparing path segments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathStyle {
    /// `/` only, case-sensitive segments.
    Posix,
    /// `/` or `\`, case-insensitive segments.
    Windows,
}

impl PathStyle {
    /// The style of the platform we were compiled for.
    pub fn native() -> Self {
        if cfg!(windows) {
            PathStyle::Windows
        } else {
            PathStyle::Posix
        }
    }

    fn is_separator(self, c: char) -> bool {
        match self {
            PathStyle::Posix => c == '/',
            PathStyle::Windows => c == '/' || c == '\\',
        }
    }

    fn segments_equal(self, a: &str, b: &str) -> bool {
        match self {
            PathStyle::Posix => a == b,
            PathStyle::Windows => a.to_lowercase() == b.to_lowercase(),
        }
    }
}

/// Converts backslashes to forward slashes and strips a `\\?\` or `\\.\`
/// verbatim prefix.
pub fn normalize_separators(path: &str) -> String {
    let stripped = path
        .strip_prefix(r"\\?\")
        .or_else(|| path.strip_prefix(r"\\.\"))
        .unwrap_or(path);
    stripped.replace('\\', "/")
}

/// Splits a path into segments, dropping the empty segments left behind by
/// trailing separators.
fn segments(path: &str, style: PathStyle) -> Vec<&str> {
    let mut pieces: Vec<&str> = path.split(|c| style.is_separator(c)).collect();
    while pieces.len() > 1 && pieces.last().map_or(false, |s| s.is_empty()) {
        pieces.pop();
    }
    pieces
}

/// Returns `true` if `candidate` is lexically inside `directory` (or is the
/// directory itself), using the host platform's path rules.
///
/// An empty argument always yields `true`. Do not use this for access
/// control.
pub fn is_in_directory(directory: &str, candidate: &str) -> bool {
    is_in_directory_with_style(directory, candidate, PathStyle::native())
}

/// [`is_in_directory`] with an explicit [`PathStyle`].
pub fn is_in_directory_with_style(directory: &str, candidate: &str, style: PathStyle) -> bool {
    if directory.is_empty() || candidate.is_empty() {
        return true;
    }

    let dir_pieces = segments(directory, style);
    let candidate_pieces = segments(candidate, style);
    if dir_pieces.len() > candidate_pieces.len() {
        return false;
    }

    dir_pieces
        .iter()
        .zip(candidate_pieces.iter())
        .all(|(d, c)| style.segments_equal(d, c))
}

/// Number of directory hops from the directory of `path_a` up to the nearest
/// common ancestor and back down to the directory of `path_b`.
///
/// Files in the same directory are at distance 0.
pub fn get_file_distance(path_a: &str, path_b: &str) -> usize {
    let a = normalize_separators(path_a);
    let b = normalize_separators(path_b);
    let dirs_a = directory_segments(&a);
    let dirs_b = directory_segments(&b);

    let common = dirs_a
        .iter()
        .zip(dirs_b.iter())
        .take_while(|(x, y)| x == y)
        .count();

    (dirs_a.len() - common) + (dirs_b.len() - common)
}

fn directory_segments(path: &str) -> Vec<&str> {
    let mut pieces: Vec<&str> = path.split('/').collect();
    // Last piece is the file name.
    pieces.pop();
    pieces
}

/// Longest string that is both a suffix of `a` and a prefix of `b`, or an
/// empty string when they do not overlap.
///
/// Lengths are counted in `char`s, so a multi-byte character is never split.
pub fn get_prefix_suffix_overlap(a: &str, b: &str) -> String {
    let a_len = a.chars().count();
    let max = a_len.min(b.chars().count());

    for len in (1..=max).rev() {
        let start = a
            .char_indices()
            .nth(a_len - len)
            .map(|(idx, _)| idx)
            .unwrap_or(0);
        let suffix = &a[start..];
        if b.starts_with(suffix) {
            return suffix.to_string();
        }
    }
    String::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_in_directory_nested_child() {
        assert!(is_in_directory_with_style("a/b", "a/b/c", PathStyle::Posix));
    }

    #[test]
    fn test_is_in_directory_trailing_separator_ignored() {
        assert!(is_in_directory_with_style("a/b/", "a/b", PathStyle::Posix));
        assert!(is_in_directory_with_style("a/b", "a/b/", PathStyle::Posix));
    }

    #[test]
    fn test_is_in_directory_sibling_prefix_is_not_contained() {
        assert!(!is_in_directory_with_style("a/bc", "a/b", PathStyle::Posix));
        assert!(!is_in_directory_with_style("a/b", "a/bc/d", PathStyle::Posix));
    }

    #[test]
    fn test_is_in_directory_parent_is_not_inside_child() {
        assert!(!is_in_directory_with_style("a/b/c", "a/b", PathStyle::Posix));
    }

    #[test]
    fn test_is_in_directory_absolute_paths() {
        assert!(is_in_directory_with_style("/home/user", "/home/user/src/x.rs", PathStyle::Posix));
        assert!(!is_in_directory_with_style("/home/user", "home/user/src", PathStyle::Posix));
    }

    #[test]
    fn test_is_in_directory_case_rules_depend_on_style() {
        assert!(!is_in_directory_with_style("/Foo/Bar", "/foo/bar/baz", PathStyle::Posix));
        assert!(is_in_directory_with_style(r"C:\Foo\Bar", r"c:\foo\bar\baz.txt", PathStyle::Windows));
        assert!(is_in_directory_with_style("C:/Foo", r"c:\foo\x", PathStyle::Windows));
    }

    // Empty arguments are accepted unconditionally. That looks like a
    // permissive shortcut, not a safe boundary; the test pins it so any
    // change is deliberate.
    #[test]
    fn test_is_in_directory_empty_arguments_are_permissive() {
        assert!(is_in_directory("", ""));
        assert!(is_in_directory("", "/etc/passwd"));
        assert!(is_in_directory("/srv/data", ""));
    }

    #[test]
    fn test_file_distance_same_directory() {
        assert_eq!(get_file_distance("A/B/C.java", "A/B/D.java"), 0);
    }

    #[test]
    fn test_file_distance_parent_directory() {
        assert_eq!(get_file_distance("A/B/C.java", "A/D.java"), 1);
        assert_eq!(get_file_distance("A/D.java", "A/B/C.java"), 1);
    }

    #[test]
    fn test_file_distance_across_branches() {
        assert_eq!(get_file_distance("src/main/x/Foo.java", "src/test/y/z/FooTest.java"), 5);
    }

    #[test]
    fn test_file_distance_mixed_separators() {
        assert_eq!(get_file_distance(r"A\B\C.java", "A/B/E.java"), 0);
    }

    #[test]
    fn test_prefix_suffix_overlap_basic() {
        assert_eq!(get_prefix_suffix_overlap("adwg31", "31ggrs"), "31");
    }

    #[test]
    fn test_prefix_suffix_overlap_none() {
        assert_eq!(get_prefix_suffix_overlap("abc", "xyz"), "");
        assert_eq!(get_prefix_suffix_overlap("", "xyz"), "");
    }

    #[test]
    fn test_prefix_suffix_overlap_identical_strings() {
        assert_eq!(get_prefix_suffix_overlap("hello", "hello"), "hello");
    }

    #[test]
    fn test_prefix_suffix_overlap_prefers_longest() {
        assert_eq!(get_prefix_suffix_overlap("aaa", "aaab"), "aaa");
        assert_eq!(get_prefix_suffix_overlap("xabab", "ababy"), "abab");
    }

    #[test]
    fn test_prefix_suffix_overlap_multibyte() {
        assert_eq!(get_prefix_suffix_overlap("caf\u{e9}", "\u{e9}t\u{e9}"), "\u{e9}");
    }

    #[test]
    fn test_normalize_separators() {
        assert_eq!(normalize_separators(r"\\?\C:\src\lib.rs"), "C:/src/lib.rs");
        assert_eq!(normalize_separators("a/b/c"), "a/b/c");
    }
}
