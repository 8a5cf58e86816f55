//! File-backed key-value store.
//!
//! Stand-in for the browser localStorage the original deployment used: a flat
//! string-to-string map persisted as JSON, loaded once at startup and flushed
//! on every mutation. Only the session layer writes to it.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::error::{AppError, AppResult};

#[derive(Clone)]
pub struct KvStore {
    path: PathBuf,
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl KvStore {
    /// Open the store at `path`, creating parent directories as needed.
    /// A missing or empty file yields an empty store.
    pub fn open(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref().to_path_buf();

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .map_err(|e| AppError::Storage(format!("create {}: {}", parent.display(), e)))?;
            }
        }

        let entries = match fs::read_to_string(&path) {
            Ok(contents) if !contents.trim().is_empty() => serde_json::from_str(&contents)
                .map_err(|e| AppError::Storage(format!("parse {}: {}", path.display(), e)))?,
            Ok(_) => HashMap::new(),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => HashMap::new(),
            Err(e) => return Err(AppError::Storage(format!("read {}: {}", path.display(), e))),
        };

        Ok(Self {
            path,
            entries: Arc::new(Mutex::new(entries)),
        })
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().expect("kv store lock poisoned").get(key).cloned()
    }

    pub fn set(&self, key: &str, value: &str) -> AppResult<()> {
        let mut entries = self.entries.lock().expect("kv store lock poisoned");
        entries.insert(key.to_string(), value.to_string());
        self.flush(&entries)
    }

    pub fn remove(&self, key: &str) -> AppResult<()> {
        let mut entries = self.entries.lock().expect("kv store lock poisoned");
        entries.remove(key);
        self.flush(&entries)
    }

    fn flush(&self, entries: &HashMap<String, String>) -> AppResult<()> {
        let json = serde_json::to_string_pretty(entries)
            .map_err(|e| AppError::Storage(format!("serialize store: {}", e)))?;
        fs::write(&self.path, json)
            .map_err(|e| AppError::Storage(format!("write {}: {}", self.path.display(), e)))
    }
}
