// crates/supplemental_context/src/lib.rs

//! Picks the files most worth showing next to a focal file.
//!
//! The focal file's language decides which files are candidates and which
//! patterns pull symbol names out of them. Candidates are ranked with
//! `context_ranking` and the best few are returned.

use anyhow::{anyhow, Context, Result};
use context_ranking::{rank_candidates, Candidate, RankedCandidate};
use extract_symbols::extract_symbols_for_language;
use fs_probe::{FileSystem, LocalFileSystem};
use lang_support::{language_config, language_for_extension};
use path_text_utils::normalize_separators;
use std::path::{Path, PathBuf};
use test_file_classifier::{is_test_file, TestFileQuery};
use walkdir::{DirEntry, WalkDir};

/// Number of results printed when `--limit` is not given.
pub const DEFAULT_LIMIT: usize = 5;

/// Directories never searched for candidates.
const SKIPPED_DIRECTORIES: &[&str] = &["node_modules", "target", "build", "dist", "__pycache__"];

#[derive(Debug, Clone)]
pub struct ContextRequest {
    pub focal_file: PathBuf,
    pub root: Option<PathBuf>,
    pub language: Option<String>,
    pub limit: usize,
    pub include_tests: bool,
}

impl ContextRequest {
    pub fn new(focal_file: impl Into<PathBuf>) -> Self {
        Self {
            focal_file: focal_file.into(),
            root: None,
            language: None,
            limit: DEFAULT_LIMIT,
            include_tests: false,
        }
    }
}

/// Picks the language id for the request: the explicit one if given,
/// otherwise the one registered for the focal file's extension.
pub fn resolve_language(request: &ContextRequest) -> Result<String> {
    if let Some(id) = &request.language {
        if language_config(id).is_none() {
            return Err(anyhow!("unsupported language: {}", id));
        }
        return Ok(id.clone());
    }

    let ext = request
        .focal_file
        .extension()
        .and_then(|e| e.to_str())
        .ok_or_else(|| {
            anyhow!(
                "unsupported language: {} has no extension",
                request.focal_file.display()
            )
        })?;
    language_for_extension(ext)
        .map(str::to_string)
        .ok_or_else(|| anyhow!("unsupported language for extension .{}", ext))
}

fn is_skipped_directory(entry: &DirEntry) -> bool {
    if entry.depth() == 0 || !entry.file_type().is_dir() {
        return false;
    }
    let name = entry.file_name().to_string_lossy();
    name.starts_with('.') || SKIPPED_DIRECTORIES.contains(&&*name)
}

/// Case-insensitive match against an extension written with its dot.
fn has_extension(path: &Path, extension: &str) -> bool {
    let wanted = extension.trim_start_matches('.');
    path.extension()
        .and_then(|e| e.to_str())
        .map_or(false, |e| e.eq_ignore_ascii_case(wanted))
}

/// `path` relative to `root`, with `/` separators.
fn display_path(path: &Path, root: &Path) -> String {
    let relative = path.strip_prefix(root).unwrap_or(path);
    normalize_separators(&relative.to_string_lossy())
}

/// Walks the search root and ranks every candidate against the focal file.
///
/// Returns at most `request.limit` entries, best first.
pub fn gather_supplemental_context(request: &ContextRequest) -> Result<Vec<RankedCandidate>> {
    gather_with(&LocalFileSystem, request)
}

/// Same as [`gather_supplemental_context`] with file reads going through `fs`.
pub fn gather_with<F: FileSystem>(fs: &F, request: &ContextRequest) -> Result<Vec<RankedCandidate>> {
    let language_id = resolve_language(request)?;
    let config = language_config(&language_id)
        .ok_or_else(|| anyhow!("unsupported language: {}", language_id))?;

    let focal = request
        .focal_file
        .canonicalize()
        .with_context(|| format!("Failed to resolve focal file {}", request.focal_file.display()))?;
    let focal_content = fs
        .read_text_file(&focal)
        .with_context(|| format!("Failed to read focal file {}", focal.display()))?;

    let root = match &request.root {
        Some(root) => root.clone(),
        None => focal.parent().map(Path::to_path_buf).unwrap_or_else(|| PathBuf::from(".")),
    };
    let root = root
        .canonicalize()
        .with_context(|| format!("Failed to resolve search root {}", root.display()))?;
    if !focal.starts_with(&root) {
        return Err(anyhow!(
            "focal file {} is not inside search root {}",
            focal.display(),
            root.display()
        ));
    }

    let focal_symbols = extract_symbols_for_language(&focal_content, &language_id);
    let focal_names: Vec<&str> = focal_symbols.names().collect();
    log::debug!(
        "Focal file {} ({}) has {} symbol(s)",
        focal.display(),
        language_id,
        focal_names.len()
    );

    let query = TestFileQuery::new(&language_id);
    let mut candidates = Vec::new();
    for entry in WalkDir::new(&root)
        .into_iter()
        .filter_entry(|e| !is_skipped_directory(e))
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
    {
        let path = entry.path();
        if path == focal {
            continue;
        }
        if !has_extension(path, config.extension) {
            continue;
        }
        let relative = display_path(path, &root);
        if !request.include_tests && is_test_file(&relative, &query) {
            log::debug!("Skipping test file {}", relative);
            continue;
        }

        let content = match fs.read_text_file(path) {
            Ok(content) => content,
            Err(err) => {
                log::debug!("Skipping unreadable candidate {}: {}", relative, err);
                continue;
            }
        };
        let symbols = extract_symbols_for_language(&content, &language_id);
        candidates.push(Candidate {
            path: relative,
            symbols: symbols.names().map(str::to_string).collect(),
        });
    }
    log::debug!("Ranking {} candidate(s)", candidates.len());

    let focal_relative = display_path(&focal, &root);
    let mut ranked = rank_candidates(&focal_relative, focal_names.as_slice(), &candidates);
    ranked.truncate(request.limit);
    Ok(ranked)
}

/// One output line: `score<TAB>distance<TAB>path`.
pub fn format_ranked(candidate: &RankedCandidate) -> String {
    format!("{}\t{}\t{}", candidate.score, candidate.distance, candidate.path)
}
