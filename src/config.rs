use std::path::PathBuf;

use directories::ProjectDirs;

use crate::store::{FileStore, KeyValueStore, MemoryStore};
use crate::theme::Theme;

#[derive(Clone, Debug)]
pub struct GalleryConfig {
    /// Directory the artwork `src` paths are relative to.
    pub asset_root: PathBuf,
    /// Overrides the platform data directory for the persisted store.
    pub data_dir: Option<PathBuf>,
    /// Session theme that wins over the stored preference until toggled.
    pub theme_override: Option<Theme>,
}

impl GalleryConfig {
    pub fn resolve_asset(&self, src: &str) -> PathBuf {
        self.asset_root.join(src)
    }

    fn data_dir(&self) -> Option<PathBuf> {
        if let Some(dir) = &self.data_dir {
            return Some(dir.clone());
        }

        ProjectDirs::from("", "", "galaxy-gallery").map(|dirs| dirs.data_dir().to_path_buf())
    }

    /// Opens the persisted store, falling back to a session-only one when no
    /// data directory can be determined.
    pub fn open_store(&self) -> Box<dyn KeyValueStore> {
        match self.data_dir() {
            Some(dir) => {
                let store = FileStore::in_dir(&dir);
                log::info!("persisting gallery state to {}", store.path().display());
                Box::new(store)
            }
            None => {
                log::warn!("no data directory available; visits will not persist");
                Box::new(MemoryStore::default())
            }
        }
    }
}
