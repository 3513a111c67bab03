//! Flat-file JSON record store.
//!
//! Each entity collection (students, teachers, professionals, events,
//! appointments, users) is a single JSON array-of-objects document on disk.
//! A [`store::RecordStore`] owns one collection's load/query/mutate/persist
//! lifecycle; the [`registry::Registry`] instantiates one store per
//! configured collection.

pub mod catalog;
pub mod config;
pub mod data_paths;
pub mod error;
pub mod record;
pub mod registry;
pub mod store;
pub mod validate;

pub use error::StoreError;
pub use record::Record;
pub use registry::Registry;
pub use store::{LockMode, RecordStore};
