// crates/fs_probe/src/probe.rs

use crate::config::ProbeConfig;
use crate::error::FsProbeError;
use crate::filesystem::{DirEntryKind, FileSystem, LocalFileSystem};
use crate::outcome::{LogObserver, Outcome, ProbeObserver};
use rand::Rng;
use rayon::prelude::*;
use std::path::{Component, Path, PathBuf};
use std::time::{Duration, Instant};

/// Default number of numbered candidates `get_nonexistent_filename` tries
/// before switching to random tokens.
pub const DEFAULT_MAX_ATTEMPTS: usize = 99;

/// Extra probes allowed once numbered candidates run out.
const RANDOM_NAME_ATTEMPTS: usize = 99;

/// Eight lowercase hex characters from the thread-local CSPRNG.
pub(crate) fn random_hex_token() -> String {
    format!("{:08x}", rand::thread_rng().gen::<u32>())
}

/// Only plain names (and `.`) may be joined below the temp root.
fn stays_below_root(part: &str) -> bool {
    !part.is_empty()
        && Path::new(part)
            .components()
            .all(|c| matches!(c, Component::Normal(_) | Component::CurDir))
}

/// Partial directory-size sum, plus the first failure seen while computing it.
#[derive(Default)]
struct SizeTally {
    bytes: u64,
    failure: Option<String>,
}

impl SizeTally {
    fn bytes(bytes: u64) -> Self {
        Self { bytes, failure: None }
    }

    fn failed(reason: String) -> Self {
        Self {
            bytes: 0,
            failure: Some(reason),
        }
    }

    fn merge(self, other: Self) -> Self {
        Self {
            bytes: self.bytes + other.bytes,
            failure: self.failure.or(other.failure),
        }
    }
}

/// Filesystem probes bound to a filesystem, an observer for swallowed
/// failures, and a configuration.
pub struct FsProbe<F = LocalFileSystem, O = LogObserver> {
    fs: F,
    observer: O,
    config: ProbeConfig,
}

impl FsProbe<LocalFileSystem, LogObserver> {
    /// Local disk, `log` warnings, configuration from the environment.
    pub fn local() -> Self {
        Self::new(LocalFileSystem, LogObserver, ProbeConfig::from_env())
    }
}

impl<F: FileSystem, O: ProbeObserver> FsProbe<F, O> {
    pub fn new(fs: F, observer: O, config: ProbeConfig) -> Self {
        Self { fs, observer, config }
    }

    pub fn config(&self) -> &ProbeConfig {
        &self.config
    }

    pub fn filesystem(&self) -> &F {
        &self.fs
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    fn swallow(&self, operation: &str, detail: String) -> String {
        self.observer.probe_failed(operation, &detail);
        detail
    }

    /// Recursively sums file sizes under `dir`.
    ///
    /// Once more than `budget` has elapsed since `start`, directories that
    /// have not been entered yet count as 0 and the outcome is defaulted
    /// with the partial sum. Symbolic links count as 0 and are not followed.
    /// The entries of each directory are sized in parallel.
    pub fn dir_size(&self, dir: &Path, start: Instant, budget: Duration) -> Outcome<u64> {
        let tally = self.tally_dir(dir, start, budget);
        match tally.failure {
            None => Outcome::Completed(tally.bytes),
            Some(reason) => Outcome::defaulted(tally.bytes, reason),
        }
    }

    /// [`dir_size`](Self::dir_size) starting now, with the configured budget.
    pub fn dir_size_default(&self, dir: &Path) -> Outcome<u64> {
        self.dir_size(dir, Instant::now(), self.config.dir_size_budget)
    }

    fn tally_dir(&self, dir: &Path, start: Instant, budget: Duration) -> SizeTally {
        if start.elapsed() > budget {
            return SizeTally::failed(self.swallow(
                "dir_size",
                format!(
                    "time budget of {}ms exceeded, skipping {}",
                    budget.as_millis(),
                    dir.display()
                ),
            ));
        }

        let entries = match self.fs.read_dir_entries(dir) {
            Ok(entries) => entries,
            Err(err) => {
                return SizeTally::failed(
                    self.swallow("dir_size", format!("cannot read {}: {}", dir.display(), err)),
                )
            }
        };

        entries
            .par_iter()
            .map(|entry| {
                let path = dir.join(&entry.name);
                match entry.kind {
                    DirEntryKind::Directory => self.tally_dir(&path, start, budget),
                    DirEntryKind::File => match self.fs.stat(&path) {
                        Ok(stat) => SizeTally::bytes(stat.size),
                        Err(err) => SizeTally::failed(self.swallow(
                            "dir_size",
                            format!("cannot stat {}: {}", path.display(), err),
                        )),
                    },
                    DirEntryKind::SymbolicLink | DirEntryKind::Other => SizeTally::default(),
                }
            })
            .reduce(SizeTally::default, SizeTally::merge)
    }

    /// Force-deletes `path` and everything below it.
    ///
    /// Returns `Completed(true)` on success. A missing or empty path, or any
    /// deletion error, yields `Defaulted(false)`.
    pub fn try_remove_folder(&self, path: Option<&Path>) -> Outcome<bool> {
        let path = match path {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => {
                let reason = self.swallow("try_remove_folder", "no folder given".to_string());
                return Outcome::defaulted(false, reason);
            }
        };

        match self.fs.delete_recursive(path) {
            Ok(()) => Outcome::Completed(true),
            Err(err) => {
                let reason = self.swallow(
                    "try_remove_folder",
                    format!("failed to remove {}: {}", path.display(), err),
                );
                Outcome::defaulted(false, reason)
            }
        }
    }

    /// Creates a fresh folder under the configured temp root.
    ///
    /// `name_parts` are joined below the root; the last one gets a `-`
    /// and 8 random hex characters appended. With no parts the configured
    /// default leaf name is used. Missing parents are created. Absolute
    /// parts and `..` are rejected, so the folder is always below the root.
    pub fn make_unique_temporary_folder(&self, name_parts: &[&str]) -> Result<PathBuf, FsProbeError> {
        let (leaf, parents) = match name_parts.split_last() {
            Some((leaf, parents)) => (*leaf, parents),
            None => (self.config.default_leaf.as_str(), &[][..]),
        };

        for part in parents.iter().chain(std::iter::once(&leaf)) {
            if !stays_below_root(part) {
                return Err(FsProbeError::InvalidNamePart {
                    part: part.to_string(),
                });
            }
        }

        let mut path = self.config.temp_root.clone();
        for part in parents {
            path.push(part);
        }
        path.push(format!("{}-{}", leaf, random_hex_token()));

        self.fs.create_directory_recursive(&path)?;
        log::debug!("created temporary folder {}", path.display());
        Ok(path)
    }

    /// Picks a file name inside `dir` that does not exist yet.
    ///
    /// Tries `base+suffix`, then `base-1+suffix` up to `base-(max_attempts-1)`,
    /// then `base-<8 hex>+suffix`. After `max_attempts + 99` probes the last
    /// candidate is returned whether or not it is free.
    pub fn get_nonexistent_filename(
        &self,
        dir: &Path,
        base: &str,
        suffix: &str,
        max_attempts: usize,
    ) -> Result<String, FsProbeError> {
        if base.is_empty() {
            return Err(FsProbeError::EmptyName);
        }
        if !self.fs.exists_as_directory(dir)? {
            return Err(FsProbeError::DirectoryNotFound {
                path: dir.to_path_buf(),
            });
        }

        let mut attempt = 0usize;
        loop {
            let filename = if attempt == 0 {
                format!("{}{}", base, suffix)
            } else if attempt < max_attempts {
                format!("{}-{}{}", base, attempt, suffix)
            } else {
                format!("{}-{}{}", base, random_hex_token(), suffix)
            };

            let taken = match self.fs.exists(&dir.join(&filename)) {
                Ok(exists) => exists,
                Err(err) => {
                    self.swallow(
                        "get_nonexistent_filename",
                        format!("cannot check {}: {}", filename, err),
                    );
                    true
                }
            };

            if !taken || attempt >= max_attempts + RANDOM_NAME_ATTEMPTS {
                return Ok(filename);
            }
            attempt += 1;
        }
    }

    /// Whether any file below `dir` ends with `suffix`, ignoring paths that
    /// match the `exclude` glob. The search stops at the first hit.
    pub fn has_file_with_suffix(&self, dir: &Path, suffix: &str, exclude: Option<&str>) -> Outcome<bool> {
        let pattern = format!("**/*{}", suffix);
        match self.fs.find_files(dir, &pattern, exclude, 1) {
            Ok(found) => Outcome::Completed(!found.is_empty()),
            Err(err) => {
                let reason = self.swallow(
                    "has_file_with_suffix",
                    format!("search for {} under {} failed: {}", pattern, dir.display(), err),
                );
                Outcome::defaulted(false, reason)
            }
        }
    }
}
