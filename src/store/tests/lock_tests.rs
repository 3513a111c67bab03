use super::*;
use serde_json::json;
use std::path::Path;
use tempfile::tempdir;

fn locked_store(dir: &Path) -> RecordStore {
    RecordStore::new(
        "student",
        dir.join("students.json"),
        vec!["name".to_string()],
    )
    .with_lock_mode(LockMode::Collection)
}

fn record(value: serde_json::Value) -> Record {
    serde_json::from_value(value).expect("record from object")
}

#[test]
fn test_locked_operations_keep_the_public_contract() {
    let dir = tempdir().unwrap();
    let store = locked_store(dir.path());

    let created = store.create(record(json!({"name": "Ana"}))).unwrap();
    let id = created.id().unwrap().to_string();

    assert_eq!(store.get_by_id(&id).unwrap(), created);
    assert_eq!(store.list().unwrap().len(), 1);
    assert_eq!(store.delete(&id).unwrap(), created);
    assert!(store.list().unwrap().is_empty());
}

#[test]
fn test_lock_file_is_a_sidecar_of_the_snapshot() {
    let dir = tempdir().unwrap();
    let store = locked_store(dir.path());
    store.create(record(json!({"name": "Ana"}))).unwrap();

    assert!(dir.path().join("students.json.lock").exists());
    // The lock file must not corrupt the snapshot itself.
    let records: Vec<Record> =
        serde_json::from_str(&std::fs::read_to_string(store.path()).unwrap()).unwrap();
    assert_eq!(records.len(), 1);
}

#[test]
fn test_concurrent_creates_are_serialized_per_collection() {
    let dir = tempdir().unwrap();
    let store = locked_store(dir.path());

    // Without the lock these writers race read-mutate-write and the last
    // write-back would drop earlier creates.
    std::thread::scope(|scope| {
        for n in 0..8 {
            let store = store.clone();
            scope.spawn(move || {
                store
                    .create(record(json!({"name": format!("Student {}", n)})))
                    .unwrap();
            });
        }
    });

    assert_eq!(store.list().unwrap().len(), 8);
}
