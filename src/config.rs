//! Store configuration.
//!
//! Configuration is optional: with no file at all, the registry serves the
//! builtin catalog out of the default data directory with locking disabled.
//! A config file can relocate the data directory, opt into per-collection
//! locking, and override or add entity definitions.

use crate::catalog;
use crate::store::LockMode;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Top-level configuration for a store registry.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct StoreConfig {
    /// Directory holding one JSON snapshot per collection.
    /// Defaults to `FLATSTORE_DATA_DIR` or `~/.flatstore/data/`.
    #[serde(default)]
    pub data_dir: Option<PathBuf>,
    /// Write-serialization policy applied to every store.
    #[serde(default)]
    pub lock_mode: LockMode,
    /// Entity overrides; collections absent here use the builtin catalog.
    #[serde(default)]
    pub entities: Vec<EntityConfig>,
}

/// Per-entity configuration, overriding or extending the builtin catalog.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EntityConfig {
    /// Singular label used in error messages. Defaults to the collection key.
    #[serde(default)]
    pub name: Option<String>,
    /// Collection key used for dispatch, e.g. "students".
    pub collection: String,
    /// Backing file name inside the data directory.
    /// Defaults to `<collection>.json`.
    #[serde(default)]
    pub file_name: Option<String>,
    /// Fields that must be present and truthy at create/replace time.
    /// An empty list falls back to the builtin catalog's set, if any.
    #[serde(default)]
    pub required: Vec<String>,
}

impl EntityConfig {
    /// The error-message label: explicit name, builtin name, or the
    /// collection key itself.
    pub fn entity_name(&self) -> String {
        if let Some(name) = &self.name {
            return name.clone();
        }
        match catalog::by_collection(&self.collection) {
            Some(def) => def.name.to_string(),
            None => self.collection.clone(),
        }
    }

    /// The backing file name for this collection.
    pub fn backing_file(&self) -> String {
        match &self.file_name {
            Some(file_name) => file_name.clone(),
            None => format!("{}.json", self.collection),
        }
    }

    /// The effective required-field list, falling back to the builtin
    /// catalog when the config leaves it empty.
    pub fn required_fields(&self) -> Vec<String> {
        if !self.required.is_empty() {
            return self.required.clone();
        }
        match catalog::by_collection(&self.collection) {
            Some(def) => def.required.iter().map(|f| f.to_string()).collect(),
            None => Vec::new(),
        }
    }
}

impl StoreConfig {
    /// Loads configuration from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: Self = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        Ok(config)
    }

    /// Loads configuration from a file when given one, defaults otherwise.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_yields_defaults() {
        let config: StoreConfig = serde_json::from_str("{}").unwrap();
        assert!(config.data_dir.is_none());
        assert_eq!(config.lock_mode, LockMode::None);
        assert!(config.entities.is_empty());
    }

    #[test]
    fn full_config_parses() {
        let config: StoreConfig = serde_json::from_str(
            r#"{
                "data_dir": "/var/lib/flatstore",
                "lock_mode": "collection",
                "entities": [
                    {"collection": "students", "required": ["name"]},
                    {"collection": "rooms", "file_name": "salas.json"}
                ]
            }"#,
        )
        .unwrap();
        assert_eq!(config.data_dir.as_deref(), Some(Path::new("/var/lib/flatstore")));
        assert_eq!(config.lock_mode, LockMode::Collection);
        assert_eq!(config.entities.len(), 2);
    }

    #[test]
    fn entity_config_falls_back_to_catalog() {
        let entity: EntityConfig =
            serde_json::from_str(r#"{"collection": "teachers"}"#).unwrap();
        assert_eq!(entity.entity_name(), "teacher");
        assert_eq!(entity.backing_file(), "teachers.json");
        assert!(entity
            .required_fields()
            .contains(&"school_disciplines".to_string()));
    }

    #[test]
    fn unknown_collection_defaults_to_its_own_key() {
        let entity: EntityConfig = serde_json::from_str(r#"{"collection": "rooms"}"#).unwrap();
        assert_eq!(entity.entity_name(), "rooms");
        assert_eq!(entity.backing_file(), "rooms.json");
        assert!(entity.required_fields().is_empty());
    }

    #[test]
    fn explicit_fields_win_over_catalog() {
        let entity: EntityConfig = serde_json::from_str(
            r#"{"collection": "students", "name": "aluno", "required": ["name"]}"#,
        )
        .unwrap();
        assert_eq!(entity.entity_name(), "aluno");
        assert_eq!(entity.required_fields(), vec!["name".to_string()]);
    }

    #[test]
    fn load_reports_unreadable_and_invalid_files() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.json");
        assert!(StoreConfig::load(&missing).is_err());

        let invalid = dir.path().join("invalid.json");
        std::fs::write(&invalid, "not json").unwrap();
        assert!(StoreConfig::load(&invalid).is_err());
    }
}
