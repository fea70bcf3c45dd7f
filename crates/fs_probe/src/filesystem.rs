// crates/fs_probe/src/filesystem.rs

//! The filesystem capability the probes run against.
//!
//! Keeping this behind a trait lets the probes run over a host-provided
//! filesystem (or a failing test double) instead of `std::fs` directly.

use globset::{Glob, GlobMatcher};
use path_text_utils::normalize_separators;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// What kind of thing a directory entry is. Symbolic links are reported as
/// links, never as their target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirEntryKind {
    File,
    Directory,
    SymbolicLink,
    Other,
}

/// One entry returned by [`FileSystem::read_dir_entries`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    pub name: String,
    pub kind: DirEntryKind,
}

/// Subset of file metadata the probes need.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileStat {
    pub size: u64,
}

/// Minimum set of filesystem operations used by the probes.
///
/// Every method is fallible; callers decide whether a failure propagates or
/// is swallowed.
pub trait FileSystem: Send + Sync {
    fn read_dir_entries(&self, dir: &Path) -> io::Result<Vec<DirEntry>>;

    fn stat(&self, path: &Path) -> io::Result<FileStat>;

    fn exists(&self, path: &Path) -> io::Result<bool>;

    fn exists_as_directory(&self, path: &Path) -> io::Result<bool>;

    /// Deletes a file or a whole tree. A missing path is not an error.
    fn delete_recursive(&self, path: &Path) -> io::Result<()>;

    fn create_directory_recursive(&self, path: &Path) -> io::Result<()>;

    fn read_text_file(&self, path: &Path) -> io::Result<String>;

    /// Files under `root` whose root-relative path matches the glob
    /// `pattern` and not the glob `exclude`. At most `limit` paths are
    /// returned; the walk stops as soon as the limit is reached.
    ///
    /// Fails if `root` cannot be read, or if nothing matched and part of the
    /// tree could not be read.
    fn find_files(
        &self,
        root: &Path,
        pattern: &str,
        exclude: Option<&str>,
        limit: usize,
    ) -> io::Result<Vec<PathBuf>>;
}

/// [`FileSystem`] backed by the local disk.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalFileSystem;

fn compile_glob(pattern: &str) -> io::Result<GlobMatcher> {
    Glob::new(pattern)
        .map(|glob| glob.compile_matcher())
        .map_err(|err| io::Error::new(io::ErrorKind::InvalidInput, err))
}

impl FileSystem for LocalFileSystem {
    fn read_dir_entries(&self, dir: &Path) -> io::Result<Vec<DirEntry>> {
        let mut entries = Vec::new();
        for entry in fs::read_dir(dir)? {
            let entry = entry?;
            // `DirEntry::file_type` does not follow symlinks.
            let file_type = entry.file_type()?;
            let kind = if file_type.is_symlink() {
                DirEntryKind::SymbolicLink
            } else if file_type.is_dir() {
                DirEntryKind::Directory
            } else if file_type.is_file() {
                DirEntryKind::File
            } else {
                DirEntryKind::Other
            };
            entries.push(DirEntry {
                name: entry.file_name().to_string_lossy().into_owned(),
                kind,
            });
        }
        Ok(entries)
    }

    fn stat(&self, path: &Path) -> io::Result<FileStat> {
        let metadata = fs::metadata(path)?;
        Ok(FileStat { size: metadata.len() })
    }

    fn exists(&self, path: &Path) -> io::Result<bool> {
        path.try_exists()
    }

    fn exists_as_directory(&self, path: &Path) -> io::Result<bool> {
        match fs::metadata(path) {
            Ok(metadata) => Ok(metadata.is_dir()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(err) => Err(err),
        }
    }

    fn delete_recursive(&self, path: &Path) -> io::Result<()> {
        let metadata = match fs::symlink_metadata(path) {
            Ok(metadata) => metadata,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(()),
            Err(err) => return Err(err),
        };
        if metadata.is_dir() {
            fs::remove_dir_all(path)
        } else {
            fs::remove_file(path)
        }
    }

    fn create_directory_recursive(&self, path: &Path) -> io::Result<()> {
        fs::create_dir_all(path)
    }

    fn read_text_file(&self, path: &Path) -> io::Result<String> {
        fs::read_to_string(path)
    }

    fn find_files(
        &self,
        root: &Path,
        pattern: &str,
        exclude: Option<&str>,
        limit: usize,
    ) -> io::Result<Vec<PathBuf>> {
        let include = compile_glob(pattern)?;
        let exclude = exclude.map(compile_glob).transpose()?;

        let mut found = Vec::new();
        if limit == 0 {
            return Ok(found);
        }

        let mut skipped: Option<walkdir::Error> = None;
        for entry in WalkDir::new(root).follow_links(false) {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) if err.depth() == 0 => return Err(err.into()),
                Err(err) => {
                    log::debug!("find_files: skipping unreadable entry: {}", err);
                    skipped.get_or_insert(err);
                    continue;
                }
            };
            if !entry.file_type().is_file() {
                continue;
            }
            let relative = match entry.path().strip_prefix(root) {
                Ok(rel) => normalize_separators(&rel.to_string_lossy()),
                Err(_) => continue,
            };
            if !include.is_match(&relative) {
                continue;
            }
            if exclude.as_ref().map_or(false, |ex| ex.is_match(&relative)) {
                continue;
            }
            found.push(entry.into_path());
            if found.len() >= limit {
                break;
            }
        }

        // A miss is only trustworthy if the whole tree was read.
        match skipped {
            Some(err) if found.is_empty() => Err(err.into()),
            _ => Ok(found),
        }
    }
}
