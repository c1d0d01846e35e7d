use super::*;
use crate::error::NoticeError;

#[test]
fn memory_store_round_trip_and_overwrite() {
    let store = MemoryStore::new();
    assert_eq!(store.get("k").unwrap(), None);
    store.set("k", "1").unwrap();
    store.set("k", "2").unwrap();
    assert_eq!(store.get("k").unwrap().as_deref(), Some("2"));
    store.remove("k").unwrap();
    assert_eq!(store.get("k").unwrap(), None);
}

#[test]
fn file_store_missing_file_reads_as_empty() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::new(dir.path().join("nested").join("store.json"));
    assert_eq!(store.get("anything").unwrap(), None);
}

#[test]
fn file_store_persists_across_instances() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("store.json");

    FileStore::new(&path).set("aegisPath", "/opt/aegis").unwrap();
    FileStore::new(&path)
        .set("aegis_version_dismissed", "2.8.0")
        .unwrap();

    let reopened = FileStore::new(&path);
    assert_eq!(reopened.get("aegisPath").unwrap().as_deref(), Some("/opt/aegis"));
    assert_eq!(
        reopened.get("aegis_version_dismissed").unwrap().as_deref(),
        Some("2.8.0")
    );

    reopened.remove("aegisPath").unwrap();
    assert_eq!(FileStore::new(&path).get("aegisPath").unwrap(), None);
    assert!(!path.with_extension("tmp").exists());
}

#[test]
fn file_store_reports_corruption_on_read_and_recovers_on_write() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("store.json");
    std::fs::write(&path, "[not a map").unwrap();

    let store = FileStore::new(&path);
    assert!(matches!(store.get("k"), Err(NoticeError::StorageError(_))));

    store.set("k", "v").unwrap();
    assert_eq!(store.get("k").unwrap().as_deref(), Some("v"));
}
