use std::fs;

use cardfill_store::{
    demo_snapshot, ensure_dir, save_snapshot, write_atomically, Database, Snapshot, StoreError,
};
use tempfile::TempDir;

#[test]
fn creates_missing_directory() {
    let temp = TempDir::new().unwrap();
    let new_dir = temp.path().join("data");
    assert!(!new_dir.exists());
    ensure_dir(&new_dir).unwrap();
    assert!(new_dir.is_dir());
}

#[test]
fn atomic_write_replaces_existing_file() {
    let temp = TempDir::new().unwrap();
    let target = temp.path().join("db.json");

    write_atomically(&target, "first").unwrap();
    assert_eq!(fs::read_to_string(&target).unwrap(), "first");

    write_atomically(&target, "second").unwrap();
    assert_eq!(fs::read_to_string(&target).unwrap(), "second");
}

#[test]
fn no_partial_file_when_parent_is_a_file() {
    let temp = TempDir::new().unwrap();
    let blocker = temp.path().join("not_a_dir");
    fs::write(&blocker, "x").unwrap();

    let result = write_atomically(&blocker.join("db.json"), "data");
    assert!(result.is_err());
    assert_eq!(fs::read_to_string(&blocker).unwrap(), "x");
}

#[test]
fn file_backed_database_sees_external_changes() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("db.json");
    save_snapshot(&path, &demo_snapshot()).unwrap();

    let db = Database::open(&path).unwrap();
    assert_eq!(db.path(), Some(path.as_path()));
    assert_eq!(db.users("", None).unwrap().len(), 40);

    let mut smaller = demo_snapshot();
    smaller.users.truncate(3);
    save_snapshot(&path, &smaller).unwrap();
    assert_eq!(db.users("", None).unwrap().len(), 3);
}

#[test]
fn missing_or_corrupt_file_is_a_query_error() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("db.json");
    save_snapshot(&path, &Snapshot::default()).unwrap();
    let db = Database::open(&path).unwrap();
    assert!(db.notices("", None).unwrap().is_empty());

    fs::write(&path, "{ not json").unwrap();
    assert!(matches!(
        db.notices("", None),
        Err(StoreError::Corrupt { .. })
    ));

    fs::remove_file(&path).unwrap();
    assert!(matches!(
        db.links("", None),
        Err(StoreError::Unavailable { .. })
    ));
}

#[test]
fn export_round_trips_through_open() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("nested").join("export.json");
    Database::in_memory(demo_snapshot()).export(&path).unwrap();

    let reopened = Database::open(&path).unwrap();
    assert_eq!(reopened.snapshot().unwrap().into_owned(), demo_snapshot());
}

#[test]
fn opening_a_missing_file_fails_fast() {
    let temp = TempDir::new().unwrap();
    assert!(matches!(
        Database::open(temp.path().join("absent.json")),
        Err(StoreError::Unavailable { .. })
    ));
}
