//! Error types for the record store.

use std::fmt::{Display, Formatter};
use std::path::PathBuf;

/// Errors that can occur during a store operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// No record matched the lookup key.
    NotFound { entity: String, key: String },
    /// A required field was missing or empty at create/replace time.
    Validation { entity: String, field: String },
    /// The backing file could not be written (or locked).
    Persistence { path: PathBuf, message: String },
}

impl StoreError {
    pub(crate) fn not_found(entity: &str, key: impl Into<String>) -> Self {
        Self::NotFound {
            entity: entity.to_string(),
            key: key.into(),
        }
    }

    pub(crate) fn persistence(path: &std::path::Path, err: impl Display) -> Self {
        Self::Persistence {
            path: path.to_path_buf(),
            message: err.to_string(),
        }
    }
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound { entity, key } => write!(f, "no {} found for '{}'", entity, key),
            Self::Validation { entity, field } => {
                write!(f, "{} is missing required field '{}'", entity, field)
            }
            Self::Persistence { path, message } => {
                write!(f, "failed to persist {}: {}", path.display(), message)
            }
        }
    }
}

impl std::error::Error for StoreError {}
