//! Key-value storage boundary.
//!
//! The store persists everything through this interface: string keys, JSON
//! text values, synchronous get/set. Implementations decide where the bytes
//! live; the rest of the system never touches storage directly.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use thiserror::Error;

/// Storage access failure.
#[derive(Debug, Error)]
pub enum AdapterError {
    #[error("storage I/O failed: {0}")]
    Io(#[from] io::Error),

    #[error("storage backend unavailable: {0}")]
    Unavailable(String),
}

/// Boundary interface to durable client-local key-value storage.
pub trait PersistenceAdapter {
    /// Returns the stored value for `key`, or `None` if absent.
    fn get(&self, key: &str) -> Result<Option<String>, AdapterError>;

    /// Writes `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<(), AdapterError>;
}

/// In-memory adapter; the substitutable fake for tests and ephemeral runs.
#[derive(Debug, Default)]
pub struct MemoryAdapter {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryAdapter {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PersistenceAdapter for MemoryAdapter {
    fn get(&self, key: &str) -> Result<Option<String>, AdapterError> {
        let entries = self
            .entries
            .lock()
            .map_err(|_| AdapterError::Unavailable("storage lock poisoned".to_string()))?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), AdapterError> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|_| AdapterError::Unavailable("storage lock poisoned".to_string()))?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// File-backed adapter: one `<key>.json` file per key under a data directory.
#[derive(Debug, Clone)]
pub struct JsonFileAdapter {
    data_dir: PathBuf,
}

impl JsonFileAdapter {
    /// Opens the adapter, creating the data directory if needed.
    pub fn open(data_dir: impl AsRef<Path>) -> Result<Self, AdapterError> {
        let data_dir = data_dir.as_ref().to_path_buf();
        fs::create_dir_all(&data_dir)?;
        Ok(Self { data_dir })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.data_dir.join(format!("{key}.json"))
    }
}

impl PersistenceAdapter for JsonFileAdapter {
    fn get(&self, key: &str) -> Result<Option<String>, AdapterError> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(value) => Ok(Some(value)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), AdapterError> {
        // Write-then-rename so a crash mid-write cannot truncate the stored
        // value.
        let path = self.path_for(key);
        let tmp = self.data_dir.join(format!("{key}.json.tmp"));
        fs::write(&tmp, value)?;
        fs::rename(&tmp, &path)?;
        Ok(())
    }
}
