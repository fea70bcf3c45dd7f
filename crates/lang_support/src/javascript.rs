//! JavaScript (`.js`) and JSX (`.jsx`) share one set of test-file rules.
//!
//! No extraction patterns yet: the function/class regexes we have only hold
//! up for Java and Python, so JavaScript files are classified but not mined.

use super::{pattern, LanguageConfig};

pub(super) fn config(extension: &'static str) -> LanguageConfig {
    LanguageConfig {
        extension,
        test_filename_patterns: vec![
            pattern(r"^(.+)\.test(\.js|\.jsx)$"),
            pattern(r"^(.+)\.spec(\.js|\.jsx)$"),
        ],
        function_extraction_pattern: None,
        class_extraction_pattern: None,
        import_statement_pattern: None,
    }
}
