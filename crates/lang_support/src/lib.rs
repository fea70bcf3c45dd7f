//! `lang_support`: per‑language heuristics for supplemental‑context
//! gathering, kept in one static table so the rest of the workspace is free
//! of giant `match language { … }` chains.
//!
//!  * **Zero business‑logic deps**: the crate only knows about language
//!    identifiers, file extensions and `regex`.
//!  * **One record per language**: [`LanguageConfig`] holds the file
//!    extension, the test‑filename patterns and the optional function /
//!    class / import extraction patterns.  Adding a language means adding
//!    one entry (and, for a new family, one file) in this crate.
//!  * **Read‑only**: the table is built once on first use and never
//!    mutated afterwards.
//!
//! Everything here is heuristic: the patterns are regular expressions, not
//! grammars, and will miss or misread unusual code.

use once_cell::sync::Lazy;
use regex::Regex;

/// Heuristic configuration for one language.
#[derive(Debug)]
pub struct LanguageConfig {
    /// File extension including the leading dot, e.g. `".java"`.
    pub extension: &'static str,
    /// Matched against a file's base name; any hit marks a test file.
    pub test_filename_patterns: Vec<Regex>,
    /// Capture group 1 is a function name.
    pub function_extraction_pattern: Option<Regex>,
    /// Capture group 1 is a class name.
    pub class_extraction_pattern: Option<Regex>,
    /// Capture group 1 is the imported module or type.
    pub import_statement_pattern: Option<Regex>,
}

/// Compiles one of the table's built-in patterns.
fn pattern(source: &str) -> Regex {
    Regex::new(source).unwrap()
}

// Declaration order matters for `language_for_extension`.
static LANGUAGE_CONFIGS: Lazy<Vec<(&'static str, LanguageConfig)>> = Lazy::new(|| {
    vec![
        ("java", java::config()),
        ("python", python::config()),
        ("typescript", typescript::config(".ts")),
        ("javascript", javascript::config(".js")),
        ("typescriptreact", typescript::config(".tsx")),
        ("javascriptreact", javascript::config(".jsx")),
    ]
});

/// Looks up the configuration for a language identifier such as `"java"`.
///
/// The match is exact and case‑sensitive.  `None` means "no heuristics for
/// this language" and callers should fall back to *false* / empty results.
pub fn language_config(language_id: &str) -> Option<&'static LanguageConfig> {
    LANGUAGE_CONFIGS
        .iter()
        .find(|(id, _)| *id == language_id)
        .map(|(_, config)| config)
}

/// All configured language identifiers, in table order.
pub fn supported_language_ids() -> impl Iterator<Item = &'static str> {
    LANGUAGE_CONFIGS.iter().map(|(id, _)| *id)
}

/// Returns the first language whose extension matches `ext` (with or
/// without the leading dot).  Extensions are matched case‑insensitively.
pub fn language_for_extension(ext: &str) -> Option<&'static str> {
    let ext = ext.trim_start_matches('.');
    if ext.is_empty() {
        return None;
    }
    LANGUAGE_CONFIGS
        .iter()
        .find(|(_, config)| config.extension[1..].eq_ignore_ascii_case(ext))
        .map(|(id, _)| *id)
}

// ---------------------------------------------------------------------------
//  Sub‑modules (one per language family)
// ---------------------------------------------------------------------------

mod java;
mod javascript;
mod python;
mod typescript;
