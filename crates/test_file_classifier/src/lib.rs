// crates/test_file_classifier/src/lib.rs

//! Decides whether a source file is a unit-test file.
//!
//! Two heuristics, either of which is enough:
//!   1. a directory in the path is named `tests`, `test` or `tst`;
//!   2. the file name matches one of the language's test-filename patterns
//!      from `lang_support`.
//!
//! Nothing here touches the filesystem, and the answer never depends on the
//! file's content.

use lang_support::language_config;
use path_text_utils::normalize_separators;

/// Directory names that mark everything below them as test code.
const TEST_DIRECTORIES: &[&str] = &["tests", "test", "tst"];

/// What the classifier knows about the file besides its path.
#[derive(Debug, Clone, Copy, Default)]
pub struct TestFileQuery<'a> {
    pub language_id: &'a str,
    /// Accepted for callers that already hold the text; not consulted.
    pub file_content: Option<&'a str>,
}

impl<'a> TestFileQuery<'a> {
    pub fn new(language_id: &'a str) -> Self {
        Self {
            language_id,
            file_content: None,
        }
    }

    pub fn with_content(mut self, content: &'a str) -> Self {
        self.file_content = Some(content);
        self
    }
}

/// Returns `true` if `file_path` looks like a test file.
pub fn is_test_file(file_path: &str, query: &TestFileQuery<'_>) -> bool {
    let normalized = normalize_separators(file_path);
    if has_test_directory(&normalized) {
        return true;
    }

    let basename = normalized.rsplit('/').next().unwrap_or(&normalized);
    is_test_file_by_name(basename, query.language_id)
}

/// Name heuristic alone: `basename` matches a test-filename pattern of
/// `language_id`. Unknown languages never match.
pub fn is_test_file_by_name(basename: &str, language_id: &str) -> bool {
    match language_config(language_id) {
        Some(config) => config
            .test_filename_patterns
            .iter()
            .any(|re| re.is_match(basename)),
        None => false,
    }
}

fn has_test_directory(normalized: &str) -> bool {
    let mut segments: Vec<&str> = normalized.split('/').collect();
    // The file name itself never counts.
    segments.pop();
    segments.iter().any(|s| TEST_DIRECTORIES.contains(s))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_heuristic_without_name_match() {
        assert!(is_test_file("src/tests/Widget.java", &TestFileQuery::new("java")));
        assert!(is_test_file("pkg/test/widget.py", &TestFileQuery::new("python")));
        assert!(is_test_file("service/tst/Handler.java", &TestFileQuery::new("java")));
    }

    #[test]
    fn test_path_heuristic_ignores_language() {
        assert!(is_test_file("src/tests/widget.go", &TestFileQuery::new("go")));
    }

    #[test]
    fn test_leading_test_directory_counts() {
        assert!(is_test_file("tests/helpers.py", &TestFileQuery::new("python")));
    }

    #[test]
    fn test_windows_separators() {
        assert!(is_test_file(r"C:\repo\src\test\Widget.java", &TestFileQuery::new("java")));
    }

    #[test]
    fn test_lookalike_directories_do_not_count() {
        let q = TestFileQuery::new("java");
        assert!(!is_test_file("src/testing/Widget.java", &q));
        assert!(!is_test_file("src/latest/Widget.java", &q));
        assert!(!is_test_file("src/contests/Widget.java", &q));
    }

    #[test]
    fn test_file_named_like_directory_does_not_count() {
        assert!(!is_test_file("src/test", &TestFileQuery::new("go")));
    }

    #[test]
    fn test_name_heuristic() {
        assert!(is_test_file("src/WidgetTest.java", &TestFileQuery::new("java")));
        assert!(is_test_file("src/widget.test.ts", &TestFileQuery::new("typescript")));
        assert!(is_test_file("src/App.spec.jsx", &TestFileQuery::new("javascriptreact")));
        assert!(!is_test_file("src/Widget.java", &TestFileQuery::new("java")));
    }

    #[test]
    fn test_unconfigured_language_is_false() {
        assert!(!is_test_file("src/widget.go", &TestFileQuery::new("go")));
        assert!(!is_test_file("src/widget_test.go", &TestFileQuery::new("go")));
    }

    #[test]
    fn test_name_patterns_are_per_language() {
        // A Python-style name is not a Java test.
        assert!(!is_test_file_by_name("test_widget.java", "java"));
        assert!(is_test_file_by_name("test_widget.py", "python"));
    }

    #[test]
    fn test_content_does_not_change_the_answer() {
        let path = "src/Widget.java";
        let plain = TestFileQuery::new("java");
        let with_junit = plain.with_content("import org.junit.Test;\n@Test public void x() {}");
        assert_eq!(is_test_file(path, &plain), is_test_file(path, &with_junit));
    }
}
