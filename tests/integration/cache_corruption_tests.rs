use filedelta::app::{check, CheckOutcome};
use filedelta::cache::{derive_key, FingerprintStore, StoreError};
use filedelta::digest::Hasher;
use filedelta::tracked::TrackedFile;
use std::fs;
use tempfile::tempdir;

fn setup() -> (tempfile::TempDir, tempfile::TempDir, TrackedFile, FingerprintStore) {
    let dir = tempdir().unwrap();
    let cache = tempdir().unwrap();
    let file = dir.path().join("watched.txt");
    fs::write(&file, "watched").unwrap();
    let tracked = TrackedFile::resolve(&file).unwrap();
    let store = FingerprintStore::open(cache.path());
    (dir, cache, tracked, store)
}

#[test]
fn test_truncated_entry_is_corrupted() {
    let (_dir, _cache, tracked, store) = setup();
    let key = derive_key(tracked.canonical_path());
    let fp = Hasher::new().hash_file(tracked.canonical_path()).unwrap();

    fs::write(store.entry_path(&key), &fp.as_str()[..40]).unwrap();

    assert!(matches!(store.get(&key), Err(StoreError::Corrupted { .. })));
    assert_eq!(check(&store, &tracked, &fp).unwrap(), CheckOutcome::NoBaseline);
}

#[test]
fn test_empty_entry_is_corrupted() {
    let (_dir, _cache, tracked, store) = setup();
    let key = derive_key(tracked.canonical_path());

    fs::write(store.entry_path(&key), "").unwrap();
    assert!(matches!(store.get(&key), Err(StoreError::Corrupted { .. })));
}

#[test]
fn test_uppercase_entry_still_matches() {
    let (_dir, _cache, tracked, store) = setup();
    let key = derive_key(tracked.canonical_path());
    let fp = Hasher::new().hash_file(tracked.canonical_path()).unwrap();

    fs::write(store.entry_path(&key), fp.as_str().to_uppercase()).unwrap();
    assert_eq!(check(&store, &tracked, &fp).unwrap(), CheckOutcome::Matched);
}

#[test]
fn test_store_repairs_corrupted_entry() {
    let (_dir, _cache, tracked, store) = setup();
    let key = derive_key(tracked.canonical_path());
    let fp = Hasher::new().hash_file(tracked.canonical_path()).unwrap();

    fs::write(store.entry_path(&key), "\u{0}\u{1}binary junk").unwrap();
    store.store_file(&tracked, &fp).unwrap();

    assert_eq!(store.get(&key).unwrap(), Some(fp));
}

#[test]
fn test_directory_in_place_of_entry_is_read_error() {
    let (_dir, _cache, tracked, store) = setup();
    let key = derive_key(tracked.canonical_path());
    fs::create_dir(store.entry_path(&key)).unwrap();

    let fp = Hasher::new().hash_file(tracked.canonical_path()).unwrap();
    assert!(matches!(store.get(&key), Err(StoreError::Read { .. })));
    assert!(check(&store, &tracked, &fp).is_err());
}

#[test]
fn test_non_utf8_entry_is_no_baseline() {
    let (_dir, _cache, tracked, store) = setup();
    let key = derive_key(tracked.canonical_path());
    let fp = Hasher::new().hash_file(tracked.canonical_path()).unwrap();

    fs::write(store.entry_path(&key), [0xffu8; 64]).unwrap();

    assert!(matches!(store.get(&key), Err(StoreError::Corrupted { .. })));
    assert_eq!(check(&store, &tracked, &fp).unwrap(), CheckOutcome::NoBaseline);

    store.store_file(&tracked, &fp).unwrap();
    assert_eq!(check(&store, &tracked, &fp).unwrap(), CheckOutcome::Matched);
}
