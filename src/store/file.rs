use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde_json::Value;

use super::{KeyValueStore, StorageError};

pub const STORE_FILE: &str = "storage.json";

/// A single JSON object on disk, mirrored in memory and rewritten on every `set`.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FileStore {
    /// Opens the store at `path`. A missing file starts empty; a corrupt one is
    /// logged and treated as empty so the next write replaces it.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = match read_entries(&path) {
            Ok(entries) => entries,
            Err(error) => {
                log::warn!("ignoring unreadable store: {error}");
                BTreeMap::new()
            }
        };
        log::debug!("opened store {} with {} entries", path.display(), entries.len());

        Self { path, entries }
    }

    pub fn in_dir(dir: &Path) -> Self {
        Self::open(dir.join(STORE_FILE))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|source| StorageError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let raw = serde_json::to_string_pretty(&self.entries)?;
        fs::write(&self.path, raw).map_err(|source| StorageError::Io {
            path: self.path.clone(),
            source,
        })
    }
}

fn read_entries(path: &Path) -> Result<BTreeMap<String, String>, StorageError> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(error) if error.kind() == ErrorKind::NotFound => return Ok(BTreeMap::new()),
        Err(source) => {
            return Err(StorageError::Io {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    let parsed: Value = serde_json::from_str(&raw)?;
    let Value::Object(object) = parsed else {
        return Err(StorageError::NotAnObject(path.to_path_buf()));
    };

    Ok(object
        .into_iter()
        .map(|(key, value)| match value {
            Value::String(text) => (key, text),
            other => (key, other.to_string()),
        })
        .collect())
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_owned(), value.to_owned());
        self.persist()
    }
}
