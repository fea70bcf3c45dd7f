// crates/extract_symbols/src/lib.rs

//! Regex-based extraction of function, class and import names.
//!
//! This is deliberately not a parser. Each extractor runs one pattern over
//! the raw text and keeps capture group 1 of every non-overlapping match, in
//! the order the matches appear. Duplicates are kept. Patterns come from the
//! `lang_support` table and are trusted as-is; the `regex` engine runs in
//! linear time, so a pattern cannot blow up on hostile input.

use lang_support::language_config;
use regex::Regex;

/// Function and class names pulled from one file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Symbols {
    pub functions: Vec<String>,
    pub classes: Vec<String>,
}

impl Symbols {
    /// Functions first, then classes.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.functions
            .iter()
            .chain(self.classes.iter())
            .map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.functions.is_empty() && self.classes.is_empty()
    }
}

fn capture_all(content: &str, pattern: Option<&Regex>) -> Vec<String> {
    let re = match pattern {
        Some(re) => re,
        None => return Vec::new(),
    };
    re.captures_iter(content)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Function names in order of appearance. Empty without a pattern.
pub fn extract_functions(content: &str, pattern: Option<&Regex>) -> Vec<String> {
    capture_all(content, pattern)
}

/// Class names in order of appearance. Empty without a pattern.
pub fn extract_classes(content: &str, pattern: Option<&Regex>) -> Vec<String> {
    capture_all(content, pattern)
}

/// Imported names in order of appearance. Empty without a pattern.
pub fn extract_imports(content: &str, pattern: Option<&Regex>) -> Vec<String> {
    capture_all(content, pattern)
}

/// Runs the function and class patterns configured for `language_id`.
///
/// Unknown languages, and languages without patterns, yield empty lists.
pub fn extract_symbols_for_language(content: &str, language_id: &str) -> Symbols {
    match language_config(language_id) {
        Some(config) => Symbols {
            functions: extract_functions(content, config.function_extraction_pattern.as_ref()),
            classes: extract_classes(content, config.class_extraction_pattern.as_ref()),
        },
        None => Symbols::default(),
    }
}

/// Runs the import pattern configured for `language_id`.
pub fn extract_imports_for_language(content: &str, language_id: &str) -> Vec<String> {
    language_config(language_id)
        .map(|config| extract_imports(content, config.import_statement_pattern.as_ref()))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn python_functions() -> &'static Regex {
        language_config("python")
            .and_then(|c| c.function_extraction_pattern.as_ref())
            .unwrap()
    }

    #[test]
    fn test_no_pattern_is_empty() {
        assert!(extract_functions("def foo():\n", None).is_empty());
        assert!(extract_classes("class Foo:\n", None).is_empty());
    }

    #[test]
    fn test_python_functions_in_order() {
        let found = extract_functions("def foo():\n def bar():", Some(python_functions()));
        assert_eq!(found, vec!["foo", "bar"]);
    }

    #[test]
    fn test_duplicates_are_kept() {
        let src = "def foo():\n    pass\ndef foo():\n    pass\n";
        let found = extract_functions(src, Some(python_functions()));
        assert_eq!(found, vec!["foo", "foo"]);
    }

    #[test]
    fn test_match_without_group_is_skipped() {
        let re = Regex::new(r"(x)?y").unwrap();
        assert_eq!(extract_functions("y xy", Some(&re)), vec!["x"]);
    }

    #[test]
    fn test_unknown_language_yields_nothing() {
        let symbols = extract_symbols_for_language("func main() {}", "go");
        assert!(symbols.is_empty());
        assert!(extract_imports_for_language("import \"fmt\"", "go").is_empty());
    }

    #[test]
    fn test_language_without_patterns_yields_nothing() {
        let symbols = extract_symbols_for_language("function foo() {}\nclass Bar {}", "javascript");
        assert_eq!(symbols, Symbols::default());
    }
}
