// crates/download_path/src/store.rs

use serde_json::{Map, Value};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tempfile::NamedTempFile;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Persisted key/value settings owned by the host.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Option<Value>;

    fn set(&self, key: &str, value: Value) -> Result<(), StoreError>;
}

/// Settings kept in memory only.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: Mutex<Map<String, Value>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<Value> {
        let values = self.values.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        values.get(key).cloned()
    }

    fn set(&self, key: &str, value: Value) -> Result<(), StoreError> {
        let mut values = self.values.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        values.insert(key.to_string(), value);
        Ok(())
    }
}

/// Settings stored as one flat JSON object in a file.
///
/// Every `get` re-reads the file. `set` rewrites it through a temporary file
/// in the same directory followed by a rename, so readers never see a
/// half-written object.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<Map<String, Value>, StoreError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Map::new()),
            Err(err) => return Err(err.into()),
        };
        if content.trim().is_empty() {
            return Ok(Map::new());
        }
        match serde_json::from_str::<Value>(&content)? {
            Value::Object(map) => Ok(map),
            _ => Err(StoreError::Io(io::Error::new(
                io::ErrorKind::InvalidData,
                format!("{} does not hold a JSON object", self.path.display()),
            ))),
        }
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Option<Value> {
        match self.load() {
            Ok(mut map) => map.remove(key),
            Err(err) => {
                log::warn!("cannot read settings from {}: {}", self.path.display(), err);
                None
            }
        }
    }

    fn set(&self, key: &str, value: Value) -> Result<(), StoreError> {
        let mut map = self.load()?;
        map.insert(key.to_string(), value);

        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        fs::create_dir_all(&dir)?;

        let mut tmp = NamedTempFile::new_in(&dir)?;
        serde_json::to_writer_pretty(&mut tmp, &Value::Object(map))?;
        tmp.write_all(b"\n")?;
        tmp.persist(&self.path).map_err(|err| err.error)?;
        Ok(())
    }
}
