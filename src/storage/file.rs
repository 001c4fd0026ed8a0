//! JSON-file session storage

use crate::core::error::SessionError;
use crate::core::session::SessionStorage;
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Session storage persisted as a flat JSON object on disk
///
/// A missing file reads as empty. Every write rewrites the whole file.
pub struct FileSessionStorage {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl FileSessionStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<Map<String, Value>, SessionError> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Map::new()),
            Err(e) => return Err(e.into()),
        };
        if content.trim().is_empty() {
            return Ok(Map::new());
        }
        match serde_json::from_str::<Value>(&content)? {
            Value::Object(map) => Ok(map),
            _ => Err(SessionError::Storage {
                message: format!("{} does not hold a JSON object", self.path.display()),
            }),
        }
    }

    fn save(&self, entries: &Map<String, Value>) -> Result<(), SessionError> {
        let content = serde_json::to_string_pretty(entries)?;
        std::fs::write(&self.path, content)?;
        Ok(())
    }

    fn modify(&self, f: impl FnOnce(&mut Map<String, Value>)) -> Result<(), SessionError> {
        let _guard = self.write_lock.lock().map_err(|e| SessionError::Storage {
            message: format!("Failed to acquire lock: {}", e),
        })?;
        let mut entries = self.load()?;
        f(&mut entries);
        self.save(&entries)
    }
}

impl SessionStorage for FileSessionStorage {
    fn get(&self, key: &str) -> Result<Option<String>, SessionError> {
        Ok(self.load()?.get(key).map(|value| match value {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        }))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), SessionError> {
        self.modify(|entries| {
            entries.insert(key.to_string(), Value::String(value.to_string()));
        })
    }

    fn remove(&self, key: &str) -> Result<(), SessionError> {
        self.modify(|entries| {
            entries.remove(key);
        })
    }
}
