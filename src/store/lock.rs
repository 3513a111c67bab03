//! Per-collection advisory locking.
//!
//! By default a store is unsynchronized: concurrent writers race, and the
//! last whole-file write-back wins. `LockMode::Collection` opts a store into
//! serializing its read-mutate-write window with an fs2 advisory lock scoped
//! to that one collection. The public contract of every operation is
//! identical in both modes.

use crate::error::StoreError;
use fs2::FileExt;
use serde::{Deserialize, Serialize};
use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};

/// Write-serialization policy for a collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LockMode {
    /// No locking; concurrent writers can lose updates.
    #[default]
    None,
    /// Advisory file lock around each operation, scoped to the collection.
    Collection,
}

/// Advisory lock for one collection's backing file.
///
/// The lock lives on a sidecar `<file>.lock` rather than the backing file
/// itself: the snapshot is replaced by rename on every write, which would
/// leave a lock attached to a dead inode.
#[derive(Debug, Clone)]
pub(crate) struct CollectionLock {
    path: PathBuf,
}

impl CollectionLock {
    pub(crate) fn for_file(backing: &Path) -> Self {
        let mut path = backing.as_os_str().to_owned();
        path.push(".lock");
        Self {
            path: PathBuf::from(path),
        }
    }

    /// Shared lock for read operations.
    pub(crate) fn shared(&self) -> Result<LockGuard, StoreError> {
        self.acquire(false)
    }

    /// Exclusive lock spanning a read-mutate-write window.
    pub(crate) fn exclusive(&self) -> Result<LockGuard, StoreError> {
        self.acquire(true)
    }

    fn acquire(&self, exclusive: bool) -> Result<LockGuard, StoreError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| StoreError::persistence(&self.path, e))?;
        }
        let file = OpenOptions::new()
            .create(true)
            .read(true)
            .write(true)
            .truncate(false)
            .open(&self.path)
            .map_err(|e| StoreError::persistence(&self.path, e))?;
        if exclusive {
            file.lock_exclusive()
        } else {
            file.lock_shared()
        }
        .map_err(|e| StoreError::persistence(&self.path, e))?;
        Ok(LockGuard { file })
    }
}

/// A held advisory lock; released on drop.
pub(crate) struct LockGuard {
    file: File,
}

impl Drop for LockGuard {
    fn drop(&mut self) {
        let _ = FileExt::unlock(&self.file);
    }
}
