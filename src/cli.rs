use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "flatstore")]
#[command(about = "Flat-file JSON record store for the school management collections")]
#[command(version)]
pub struct Cli {
    /// Path to a JSON config file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Directory holding the collection snapshots
    #[arg(long)]
    pub data_dir: Option<PathBuf>,

    /// Serialize writes per collection with an advisory file lock
    #[arg(long)]
    pub locked: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// List the configured collections
    Collections,

    /// Print every record in a collection
    List { collection: String },

    /// Look up one record by id
    Get { collection: String, id: String },

    /// Find records whose field equals a value exactly
    Find {
        collection: String,
        field: String,
        value: String,
    },

    /// Find records whose field contains a term, case-insensitively
    Search {
        collection: String,
        field: String,
        term: String,
    },

    /// Create a record from a JSON object
    Create {
        collection: String,
        /// Record fields as a JSON object, e.g. '{"name": "Ana", "age": "10"}'
        json: String,
    },

    /// Replace a record's fields wholesale, keeping its id
    Replace {
        collection: String,
        id: String,
        /// Record fields as a JSON object
        json: String,
    },

    /// Delete a record by id
    Delete { collection: String, id: String },
}
