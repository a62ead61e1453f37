use serde::{Deserialize, Serialize};

use super::{KeyValueStore, StorageError};

pub const VISITED_KEY: &str = "visitedNodes";

/// Artwork ids the user has opened at least once, in first-visit order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VisitedSet {
    ids: Vec<String>,
}

impl VisitedSet {
    /// Reads the persisted list. Anything missing or malformed reads as "nothing visited".
    pub fn load(store: &dyn KeyValueStore) -> Self {
        let Some(raw) = store.get(VISITED_KEY) else {
            return Self::default();
        };

        match serde_json::from_str::<Self>(&raw) {
            Ok(parsed) => {
                let mut set = Self::default();
                for id in &parsed.ids {
                    set.insert(id);
                }
                set
            }
            Err(error) => {
                log::debug!("discarding malformed visited list: {error}");
                Self::default()
            }
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|known| known == id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn insert(&mut self, id: &str) -> bool {
        if self.contains(id) {
            return false;
        }
        self.ids.push(id.to_owned());
        true
    }

    /// Appends `id` to the persisted list unless it is already there.
    /// Returns whether the store was written.
    pub fn record(store: &mut dyn KeyValueStore, id: &str) -> Result<bool, StorageError> {
        let mut set = Self::load(store);
        if !set.insert(id) {
            return Ok(false);
        }

        let raw = serde_json::to_string(&set)?;
        store.set(VISITED_KEY, &raw)?;
        Ok(true)
    }
}
