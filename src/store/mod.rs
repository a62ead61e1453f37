mod file;
mod memory;
mod visited;

use std::path::PathBuf;

pub use file::FileStore;
pub use memory::MemoryStore;
pub use visited::VisitedSet;

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("failed to access store file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("store contents are not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("store file {} does not hold a JSON object", .0.display())]
    NotAnObject(PathBuf),
}

/// Best-effort string key-value storage. Reads never fail; a missing or
/// unreadable entry is simply absent.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}
