mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use flatstore::config::StoreConfig;
use flatstore::record::Record;
use flatstore::registry::Registry;
use flatstore::store::{LockMode, RecordStore};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = StoreConfig::load_or_default(cli.config.as_deref())?;
    if let Some(data_dir) = cli.data_dir {
        config.data_dir = Some(data_dir);
    }
    if cli.locked {
        config.lock_mode = LockMode::Collection;
    }

    let registry = Registry::open(&config)?;

    match cli.command {
        Command::Collections => {
            for collection in registry.collections() {
                println!("{}", collection);
            }
        }
        Command::List { collection } => {
            let records = lookup(&registry, &collection)?.list()?;
            print_json(&records)?;
        }
        Command::Get { collection, id } => {
            let record = lookup(&registry, &collection)?.get_by_id(&id)?;
            print_json(&record)?;
        }
        Command::Find {
            collection,
            field,
            value,
        } => {
            let records = lookup(&registry, &collection)?.find_by_field(&field, &value)?;
            print_json(&records)?;
        }
        Command::Search {
            collection,
            field,
            term,
        } => {
            let records = lookup(&registry, &collection)?.search_by_field(&field, &term)?;
            print_json(&records)?;
        }
        Command::Create { collection, json } => {
            let record = lookup(&registry, &collection)?.create(parse_payload(&json)?)?;
            print_json(&record)?;
        }
        Command::Replace {
            collection,
            id,
            json,
        } => {
            let record = lookup(&registry, &collection)?.replace(&id, parse_payload(&json)?)?;
            print_json(&record)?;
        }
        Command::Delete { collection, id } => {
            let record = lookup(&registry, &collection)?.delete(&id)?;
            print_json(&record)?;
        }
    }

    Ok(())
}

fn lookup<'a>(registry: &'a Registry, collection: &str) -> Result<&'a RecordStore> {
    registry
        .store(collection)
        .with_context(|| format!("unknown collection '{}'", collection))
}

fn parse_payload(json: &str) -> Result<Record> {
    serde_json::from_str(json).context("payload must be a JSON object")
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    let rendered = serde_json::to_string_pretty(value).context("Failed to serialize result")?;
    println!("{}", rendered);
    Ok(())
}
