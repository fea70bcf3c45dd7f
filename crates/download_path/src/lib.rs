// crates/download_path/src/lib.rs

//! Remembers where the user last saved a download.
//!
//! The value lives in a single slot of a host-owned [`KeyValueStore`]. Reads
//! fall back to the home directory; writes are best-effort.

mod store;

pub use store::{JsonFileStore, KeyValueStore, MemoryStore, StoreError};

use fs_probe::{FileSystem, FsProbe, Outcome, ProbeObserver};
use serde_json::Value;
use std::path::{Path, PathBuf};

/// Store key holding the last used download directory.
pub const DOWNLOAD_PATH_KEY: &str = "downloadPath";

/// Directory to offer for the next download.
///
/// Uses the stored value when it is a non-empty string. Anything else is
/// ignored (a non-string value is logged) and the home directory, or `.`
/// when there is none, is returned instead.
pub fn get_default_download_path(store: &dyn KeyValueStore) -> PathBuf {
    match store.get(DOWNLOAD_PATH_KEY) {
        Some(Value::String(stored)) if !stored.is_empty() => return PathBuf::from(stored),
        Some(Value::String(_)) | Some(Value::Null) | None => {}
        Some(other) => log::error!(
            "expected {:?} to be a string, got {}",
            DOWNLOAD_PATH_KEY,
            other
        ),
    }
    dirs::home_dir().unwrap_or_else(|| PathBuf::from("."))
}

/// Records `download_path` for next time.
///
/// A directory is stored as-is; for anything else (typically the file that
/// was just written) its parent directory is stored. Failures are reported to
/// the probe's observer and swallowed.
pub fn set_default_download_path<F: FileSystem, O: ProbeObserver>(
    store: &dyn KeyValueStore,
    probe: &FsProbe<F, O>,
    download_path: &Path,
) -> Outcome<()> {
    let is_dir = match probe.filesystem().exists_as_directory(download_path) {
        Ok(is_dir) => is_dir,
        Err(err) => {
            let reason = format!("cannot inspect {}: {}", download_path.display(), err);
            probe.observer().probe_failed("set_default_download_path", &reason);
            return Outcome::defaulted((), reason);
        }
    };

    let directory = if is_dir {
        download_path.to_path_buf()
    } else {
        match download_path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        }
    };

    let value = Value::String(directory.to_string_lossy().into_owned());
    match store.set(DOWNLOAD_PATH_KEY, value) {
        Ok(()) => Outcome::Completed(()),
        Err(err) => {
            let reason = format!("cannot store {:?}: {}", DOWNLOAD_PATH_KEY, err);
            probe.observer().probe_failed("set_default_download_path", &reason);
            Outcome::defaulted((), reason)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fs_probe::{LocalFileSystem, LogObserver, ProbeConfig};
    use serde_json::json;
    use std::fs;
    use tempfile::tempdir;

    fn probe() -> FsProbe<LocalFileSystem, LogObserver> {
        FsProbe::new(LocalFileSystem, LogObserver, ProbeConfig::default())
    }

    /// Store whose writes always fail.
    struct ReadOnlyStore;

    impl KeyValueStore for ReadOnlyStore {
        fn get(&self, _key: &str) -> Option<Value> {
            None
        }

        fn set(&self, _key: &str, _value: Value) -> Result<(), StoreError> {
            Err(StoreError::Io(std::io::Error::new(
                std::io::ErrorKind::PermissionDenied,
                "read-only",
            )))
        }
    }

    #[test]
    fn test_directory_is_stored_as_is() {
        let dir = tempdir().unwrap();
        let store = MemoryStore::new();

        let result = set_default_download_path(&store, &probe(), dir.path());
        assert_eq!(result, Outcome::Completed(()));
        assert_eq!(get_default_download_path(&store), dir.path());
    }

    #[test]
    fn test_file_stores_parent_directory() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("artifact.zip");
        fs::write(&file, "zip").unwrap();
        let store = MemoryStore::new();

        set_default_download_path(&store, &probe(), &file);
        assert_eq!(get_default_download_path(&store), dir.path());
    }

    #[test]
    fn test_not_yet_written_file_stores_parent() {
        let dir = tempdir().unwrap();
        let store = MemoryStore::new();

        set_default_download_path(&store, &probe(), &dir.path().join("pending.zip"));
        assert_eq!(get_default_download_path(&store), dir.path());
    }

    #[test]
    fn test_non_string_value_falls_back() {
        let store = MemoryStore::new();
        store.set(DOWNLOAD_PATH_KEY, json!(42)).unwrap();

        let fallback = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        assert_eq!(get_default_download_path(&store), fallback);
    }

    #[test]
    fn test_unset_value_falls_back() {
        let store = MemoryStore::new();
        let fallback = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        assert_eq!(get_default_download_path(&store), fallback);
    }

    #[test]
    fn test_store_failure_is_swallowed() {
        let dir = tempdir().unwrap();
        let result = set_default_download_path(&ReadOnlyStore, &probe(), dir.path());
        assert!(result.is_defaulted());
        assert!(result.reason().unwrap().contains("read-only"));
    }
}
