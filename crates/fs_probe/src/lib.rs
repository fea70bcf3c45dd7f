// crates/fs_probe/src/lib.rs

//! `fs_probe`: best-effort filesystem helpers for the context gatherer.
//!
//! Most probes here never return an error: a failure is handed to a
//! [`ProbeObserver`] and the probe answers with a safe default wrapped in
//! [`Outcome::Defaulted`]. The exceptions are [`make_unique_temporary_folder`]
//! and [`get_nonexistent_filename`], which reject bad input with
//! [`FsProbeError`].
//!
//! The free functions below run against the local disk with the
//! [`LogObserver`]; build an [`FsProbe`] to swap either out.

mod config;
mod error;
mod filesystem;
mod outcome;
mod probe;

pub use config::{ProbeConfig, DIR_SIZE_BUDGET_ENV, TEMP_ROOT_ENV};
pub use error::FsProbeError;
pub use filesystem::{DirEntry, DirEntryKind, FileStat, FileSystem, LocalFileSystem};
pub use outcome::{LogObserver, Outcome, ProbeObserver};
pub use probe::{FsProbe, DEFAULT_MAX_ATTEMPTS};

use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

/// See [`FsProbe::dir_size`].
pub fn dir_size(dir: &Path, start: Instant, budget: Duration) -> Outcome<u64> {
    FsProbe::local().dir_size(dir, start, budget)
}

/// See [`FsProbe::dir_size_default`].
pub fn dir_size_default(dir: &Path) -> Outcome<u64> {
    FsProbe::local().dir_size_default(dir)
}

/// See [`FsProbe::try_remove_folder`].
pub fn try_remove_folder(path: Option<&Path>) -> Outcome<bool> {
    FsProbe::local().try_remove_folder(path)
}

/// See [`FsProbe::make_unique_temporary_folder`].
pub fn make_unique_temporary_folder(name_parts: &[&str]) -> Result<PathBuf, FsProbeError> {
    FsProbe::local().make_unique_temporary_folder(name_parts)
}

/// See [`FsProbe::get_nonexistent_filename`].
pub fn get_nonexistent_filename(
    dir: &Path,
    base: &str,
    suffix: &str,
    max_attempts: usize,
) -> Result<String, FsProbeError> {
    FsProbe::local().get_nonexistent_filename(dir, base, suffix, max_attempts)
}

/// See [`FsProbe::has_file_with_suffix`].
pub fn has_file_with_suffix(dir: &Path, suffix: &str, exclude: Option<&str>) -> Outcome<bool> {
    FsProbe::local().has_file_with_suffix(dir, suffix, exclude)
}
