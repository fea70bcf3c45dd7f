// crates/lang_support/src/python.rs

//! pytest-style names (`test_foo.py`, `foo_test.py`), `def name(` for
//! functions, top-level `class Name:` for classes and the module of a
//! `from x import y` line.

use super::{pattern, LanguageConfig};

pub(super) fn config() -> LanguageConfig {
    LanguageConfig {
        extension: ".py",
        test_filename_patterns: vec![
            pattern(r"^test_(.+)(\.py)$"),
            pattern(r"^(.+)_test(\.py)$"),
        ],
        function_extraction_pattern: Some(pattern(r"def\s+([a-zA-Z_][a-zA-Z0-9_]*)\s*\(")),
        class_extraction_pattern: Some(pattern(r"(?m)^class\s+(\w+)\s*:")),
        import_statement_pattern: Some(pattern(r"from (.*) import.*")),
    }
}
