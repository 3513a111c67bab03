//! Flat-file record store.
//!
//! One `RecordStore` owns the load/query/mutate/persist lifecycle for one
//! collection. Every operation, reads included, reloads the backing file,
//! so a store never trusts an in-memory copy across requests. Every mutation
//! rewrites the whole snapshot through a temp file + rename.
//!
//! A missing or unreadable backing file degrades to an empty collection on
//! the read path; failures on the write path surface as
//! [`StoreError::Persistence`].

mod lock;

pub use lock::LockMode;

use crate::error::StoreError;
use crate::record::Record;
use crate::validate::validate_required;
use lock::{CollectionLock, LockGuard};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// Record store for a single entity collection.
#[derive(Debug, Clone)]
pub struct RecordStore {
    /// Singular entity label used in error messages, e.g. "student".
    entity: String,
    /// Backing JSON file holding the whole collection.
    path: PathBuf,
    /// Fields that must be present and truthy at create/replace time.
    required: Vec<String>,
    lock_mode: LockMode,
    lock: CollectionLock,
}

impl RecordStore {
    /// Creates a store over `path` with `LockMode::None`.
    pub fn new(entity: &str, path: PathBuf, required: Vec<String>) -> Self {
        let lock = CollectionLock::for_file(&path);
        Self {
            entity: entity.to_string(),
            path,
            required,
            lock_mode: LockMode::None,
            lock,
        }
    }

    /// Sets the write-serialization policy for this store.
    pub fn with_lock_mode(mut self, lock_mode: LockMode) -> Self {
        self.lock_mode = lock_mode;
        self
    }

    /// The entity label used in error messages.
    pub fn entity(&self) -> &str {
        &self.entity
    }

    /// The backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the full collection, freshly reloaded from storage.
    ///
    /// A missing backing file is an empty collection, not an error.
    pub fn list(&self) -> Result<Vec<Record>, StoreError> {
        let _guard = self.read_guard()?;
        Ok(self.load())
    }

    /// Returns the first record whose `id` equals the argument.
    pub fn get_by_id(&self, id: &str) -> Result<Record, StoreError> {
        let _guard = self.read_guard()?;
        self.load()
            .into_iter()
            .find(|record| record.id() == Some(id))
            .ok_or_else(|| StoreError::not_found(&self.entity, id))
    }

    /// Returns every record whose `field` equals `value` exactly
    /// (case-sensitive).
    ///
    /// An empty result is `NotFound`: callers treat "no match" as a lookup
    /// failure, not an empty page.
    pub fn find_by_field(&self, field: &str, value: &str) -> Result<Vec<Record>, StoreError> {
        let _guard = self.read_guard()?;
        let hits: Vec<Record> = self
            .load()
            .into_iter()
            .filter(|record| record.matches(field, value))
            .collect();
        if hits.is_empty() {
            return Err(StoreError::not_found(
                &self.entity,
                format!("{}={}", field, value),
            ));
        }
        Ok(hits)
    }

    /// Returns every record whose string `field` contains `term`,
    /// case-insensitively.
    pub fn search_by_field(&self, field: &str, term: &str) -> Result<Vec<Record>, StoreError> {
        let _guard = self.read_guard()?;
        let hits: Vec<Record> = self
            .load()
            .into_iter()
            .filter(|record| record.matches_term(field, term))
            .collect();
        if hits.is_empty() {
            return Err(StoreError::not_found(
                &self.entity,
                format!("{}~{}", field, term),
            ));
        }
        Ok(hits)
    }

    /// Creates a record from the payload and persists the collection.
    ///
    /// The store owns identity: a freshly generated id replaces whatever `id`
    /// the payload carried. On a validation failure nothing is written.
    pub fn create(&self, payload: Record) -> Result<Record, StoreError> {
        let _guard = self.write_guard()?;
        let mut record = payload;
        record.set_id(&Uuid::new_v4().to_string());
        self.check_required(&record)?;

        let mut records = self.load();
        records.push(record.clone());
        self.persist(&records)?;
        tracing::debug!(entity = %self.entity, id = record.id(), "created record");
        Ok(record)
    }

    /// Wholesale-replaces the record at `id` with the payload fields.
    ///
    /// The stored id always wins over the payload's.
    pub fn replace(&self, id: &str, payload: Record) -> Result<Record, StoreError> {
        let _guard = self.write_guard()?;
        let mut records = self.load();
        let index = records
            .iter()
            .position(|record| record.id() == Some(id))
            .ok_or_else(|| StoreError::not_found(&self.entity, id))?;

        let mut record = payload;
        record.set_id(id);
        self.check_required(&record)?;

        records[index] = record.clone();
        self.persist(&records)?;
        tracing::debug!(entity = %self.entity, id, "replaced record");
        Ok(record)
    }

    /// Removes the record at `id`, persists the collection, and returns the
    /// removed record.
    pub fn delete(&self, id: &str) -> Result<Record, StoreError> {
        let _guard = self.write_guard()?;
        let mut records = self.load();
        let index = records
            .iter()
            .position(|record| record.id() == Some(id))
            .ok_or_else(|| StoreError::not_found(&self.entity, id))?;

        let removed = records.remove(index);
        self.persist(&records)?;
        tracing::debug!(entity = %self.entity, id, "deleted record");
        Ok(removed)
    }

    fn check_required(&self, record: &Record) -> Result<(), StoreError> {
        if let Some(violation) = validate_required(record, &self.required).first() {
            return Err(StoreError::Validation {
                entity: self.entity.clone(),
                field: violation.field.clone(),
            });
        }
        Ok(())
    }

    /// Loads the current snapshot, degrading to an empty collection when the
    /// file is missing or unreadable.
    fn load(&self) -> Vec<Record> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Vec::new(),
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "failed to read snapshot, treating collection as empty");
                return Vec::new();
            }
        };
        match serde_json::from_str(&content) {
            Ok(records) => records,
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "failed to parse snapshot, treating collection as empty");
                Vec::new()
            }
        }
    }

    /// Rewrites the whole snapshot atomically via temp file + rename.
    fn persist(&self, records: &[Record]) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| StoreError::persistence(&self.path, e))?;
        }
        let content = serde_json::to_string_pretty(records)
            .map_err(|e| StoreError::persistence(&self.path, e))?;

        let temp_path = self.path.with_extension("json.tmp");
        fs::write(&temp_path, &content).map_err(|e| StoreError::persistence(&temp_path, e))?;
        fs::rename(&temp_path, &self.path).map_err(|e| StoreError::persistence(&self.path, e))?;
        Ok(())
    }

    fn read_guard(&self) -> Result<Option<LockGuard>, StoreError> {
        match self.lock_mode {
            LockMode::None => Ok(None),
            LockMode::Collection => self.lock.shared().map(Some),
        }
    }

    fn write_guard(&self) -> Result<Option<LockGuard>, StoreError> {
        match self.lock_mode {
            LockMode::None => Ok(None),
            LockMode::Collection => self.lock.exclusive().map(Some),
        }
    }
}

#[cfg(test)]
#[path = "tests/store_tests.rs"]
mod store_tests;

#[cfg(test)]
#[path = "tests/lock_tests.rs"]
mod lock_tests;
