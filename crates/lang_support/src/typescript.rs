// crates/lang_support/src/typescript.rs

use super::{pattern, LanguageConfig};

pub(super) fn config(extension: &'static str) -> LanguageConfig {
    LanguageConfig {
        extension,
        test_filename_patterns: vec![
            pattern(r"^(.+)\.test(\.ts|\.tsx)$"),
            pattern(r"^(.+)\.spec(\.ts|\.tsx)$"),
        ],
        function_extraction_pattern: None,
        class_extraction_pattern: None,
        import_statement_pattern: None,
    }
}
