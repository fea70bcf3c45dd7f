// crates/lang_support/src/java.rs

//! Java: JUnit-style test names and a few modifier-driven patterns.
//!
//! * test files: `FooTest.java`, `FooTests.java`, `TestFoo.java`
//! * functions: a visibility modifier, optional `static`, optional return
//!   type, then `name(...)`
//! * classes: `public class Name` at the start of a line
//! * imports: last dotted component of `import a.b.Name;`

use super::{pattern, LanguageConfig};

pub(super) fn config() -> LanguageConfig {
    LanguageConfig {
        extension: ".java",
        test_filename_patterns: vec![
            pattern(r"^(.+)Test(\.java)$"),
            pattern(r"(.+)Tests(\.java)$"),
            pattern(r"Test(.+)(\.java)$"),
        ],
        function_extraction_pattern: Some(pattern(
            r"(?:(?:public|private|protected)\s+)(?:static\s+)?(?:[\w<>]+\s+)?(\w+)\s*\([^)]*\)",
        )),
        class_extraction_pattern: Some(pattern(r"(?m)^\s*public\s+class\s+(\w+)")),
        import_statement_pattern: Some(pattern(r"import .*\.([a-zA-Z0-9]+);")),
    }
}
