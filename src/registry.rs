//! Per-entity store instantiation.
//!
//! The registry is the seam a routing layer dispatches through: it resolves
//! configuration and the builtin catalog into one independent [`RecordStore`]
//! per collection. Stores share nothing beyond the data directory; there is
//! no cross-entity coordination or referential integrity.

use crate::catalog;
use crate::config::StoreConfig;
use crate::data_paths;
use crate::store::RecordStore;
use anyhow::Result;
use std::collections::HashMap;

/// One record store per configured collection.
#[derive(Debug)]
pub struct Registry {
    stores: HashMap<String, RecordStore>,
}

impl Registry {
    /// Builds stores for every builtin collection plus any configured
    /// overrides or additions.
    ///
    /// # Errors
    ///
    /// Returns an error if the data directory cannot be resolved or created.
    pub fn open(config: &StoreConfig) -> Result<Self> {
        let data_dir = data_paths::resolve_data_dir(config.data_dir.as_deref())?;
        let mut stores = HashMap::new();

        for def in catalog::ENTITIES {
            let path = data_paths::collection_file(&data_dir, def.file_name);
            let required = def.required.iter().map(|f| f.to_string()).collect();
            let store =
                RecordStore::new(def.name, path, required).with_lock_mode(config.lock_mode);
            stores.insert(def.collection.to_string(), store);
        }

        for entity in &config.entities {
            let path = data_paths::collection_file(&data_dir, &entity.backing_file());
            let store = RecordStore::new(&entity.entity_name(), path, entity.required_fields())
                .with_lock_mode(config.lock_mode);
            stores.insert(entity.collection.clone(), store);
        }

        Ok(Self { stores })
    }

    /// Returns the store for a collection, if configured.
    pub fn store(&self, collection: &str) -> Option<&RecordStore> {
        self.stores.get(collection)
    }

    /// Returns the configured collection keys, sorted.
    pub fn collections(&self) -> Vec<&str> {
        let mut collections: Vec<&str> = self.stores.keys().map(String::as_str).collect();
        collections.sort_unstable();
        collections
    }
}
