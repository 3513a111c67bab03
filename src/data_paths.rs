//! Storage locations for collection snapshots.
//!
//! All collections live under a single data directory, resolved in order:
//! - an explicit directory (config file or CLI flag)
//! - the `FLATSTORE_DATA_DIR` environment variable
//! - `~/.flatstore/data/`
//!
//! Each collection owns one file in that directory, e.g.
//! `~/.flatstore/data/students.json`.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Environment override for the data directory.
pub const DATA_DIR_ENV: &str = "FLATSTORE_DATA_DIR";

/// The name of the flatstore home directory.
const FLATSTORE_DIR: &str = ".flatstore";

/// Resolves the data directory, creating it if needed.
///
/// # Errors
///
/// Returns an error if:
/// - No explicit or environment directory is given and the home directory
///   cannot be determined
/// - Directory creation fails
pub fn resolve_data_dir(explicit: Option<&Path>) -> Result<PathBuf> {
    if let Some(dir) = explicit {
        return ensure_dir(dir.to_path_buf());
    }
    if let Ok(dir) = std::env::var(DATA_DIR_ENV) {
        if !dir.is_empty() {
            return ensure_dir(PathBuf::from(dir));
        }
    }
    default_data_dir()
}

/// Returns the default data directory: `~/.flatstore/data/`
///
/// Creates the directory if it doesn't exist.
pub fn default_data_dir() -> Result<PathBuf> {
    let home = dirs::home_dir().context("Could not determine home directory for record storage")?;
    ensure_dir(home.join(FLATSTORE_DIR).join("data"))
}

/// Returns the backing file path for a collection inside a data directory.
pub fn collection_file(data_dir: &Path, file_name: &str) -> PathBuf {
    data_dir.join(file_name)
}

fn ensure_dir(dir: PathBuf) -> Result<PathBuf> {
    fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create data directory: {}", dir.display()))?;
    Ok(dir)
}
