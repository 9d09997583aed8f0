use filedelta::app::{execute, Operation, RunConfig};
use filedelta::cache::{derive_key, FingerprintStore};
use filedelta::digest::Hasher;
use filedelta::error::ExitCode;
use filedelta::tracked::TrackedFile;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn run(op: Operation, file: &Path, cache: &Path) -> ExitCode {
    let config = RunConfig {
        operation: op,
        file: file.to_path_buf(),
        cache_dir: cache.to_path_buf(),
        buffer_size: 8192,
    };
    execute(&config, &mut Vec::new()).unwrap()
}

#[test]
fn test_identical_content_distinct_keys() {
    let dir = tempdir().unwrap();
    let cache = tempdir().unwrap();
    let a = dir.path().join("a.txt");
    let b = dir.path().join("b.txt");
    fs::write(&a, "same content").unwrap();
    fs::write(&b, "same content").unwrap();

    let hasher = Hasher::new();
    assert_eq!(hasher.hash_file(&a).unwrap(), hasher.hash_file(&b).unwrap());

    let key_a = derive_key(TrackedFile::resolve(&a).unwrap().canonical_path());
    let key_b = derive_key(TrackedFile::resolve(&b).unwrap().canonical_path());
    assert_ne!(key_a, key_b);

    run(Operation::Store, &a, cache.path());
    assert_eq!(run(Operation::Check, &b, cache.path()), ExitCode::CacheMissed);
    assert_eq!(run(Operation::Check, &a, cache.path()), ExitCode::Success);
}

#[test]
fn test_relative_and_absolute_paths_share_key() {
    let cwd = std::env::current_dir().unwrap();
    let dir = tempfile::tempdir_in(&cwd).unwrap();
    let cache = tempdir().unwrap();
    let absolute = dir.path().join("rel.txt");
    fs::write(&absolute, "relative").unwrap();
    let relative = absolute.strip_prefix(&cwd).unwrap();
    assert!(relative.is_relative());

    run(Operation::Store, relative, cache.path());
    assert_eq!(run(Operation::Check, &absolute, cache.path()), ExitCode::Success);
}

#[test]
fn test_dot_segments_share_key() {
    let dir = tempdir().unwrap();
    let cache = tempdir().unwrap();
    fs::create_dir(dir.path().join("nested")).unwrap();
    let file = dir.path().join("target.txt");
    fs::write(&file, "dots").unwrap();

    let winding = dir.path().join("nested").join("..").join(".").join("target.txt");
    run(Operation::Store, &winding, cache.path());
    assert_eq!(run(Operation::Check, &file, cache.path()), ExitCode::Success);
}

#[cfg(unix)]
#[test]
fn test_symlink_shares_key_with_target() {
    let dir = tempdir().unwrap();
    let cache = tempdir().unwrap();
    let target = dir.path().join("real.txt");
    let link = dir.path().join("alias.txt");
    fs::write(&target, "linked").unwrap();
    std::os::unix::fs::symlink(&target, &link).unwrap();

    run(Operation::Store, &link, cache.path());
    assert_eq!(run(Operation::Check, &target, cache.path()), ExitCode::Success);

    let store = FingerprintStore::open(cache.path());
    assert_eq!(fs::read_dir(store.root()).unwrap().count(), 1);
}

#[cfg(unix)]
#[test]
fn test_symlinked_directory_shares_key() {
    let dir = tempdir().unwrap();
    let cache = tempdir().unwrap();
    let real_dir = dir.path().join("real");
    fs::create_dir(&real_dir).unwrap();
    fs::write(real_dir.join("f.txt"), "dir link").unwrap();
    let linked_dir = dir.path().join("linked");
    std::os::unix::fs::symlink(&real_dir, &linked_dir).unwrap();

    run(Operation::Store, &linked_dir.join("f.txt"), cache.path());
    assert_eq!(
        run(Operation::Check, &real_dir.join("f.txt"), cache.path()),
        ExitCode::Success
    );
}

#[test]
fn test_entry_named_by_key() {
    let dir = tempdir().unwrap();
    let cache = tempdir().unwrap();
    let file = dir.path().join("named.txt");
    fs::write(&file, "named").unwrap();

    run(Operation::Store, &file, cache.path());

    let tracked = TrackedFile::resolve(&file).unwrap();
    let key = derive_key(tracked.canonical_path());
    let entry = cache.path().join(key.as_str());
    assert!(entry.is_file());
    assert_eq!(
        fs::read_to_string(entry).unwrap(),
        Hasher::new().hash_file(&file).unwrap().as_str()
    );
}

fn entry_count(cache: &Path) -> usize {
    fs::read_dir(cache).unwrap().count()
}

#[cfg(unix)]
#[test]
fn test_invalid_utf8_siblings_keep_separate_baselines() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let dir = tempdir().unwrap();
    let cache = tempdir().unwrap();
    let a = dir.path().join(OsStr::from_bytes(&[0xff]));
    let b = dir.path().join(OsStr::from_bytes(&[0xfe]));
    if fs::write(&a, "first").is_err() {
        // Filesystem rejects non-UTF-8 names.
        return;
    }
    fs::write(&b, "second").unwrap();

    let key_a = derive_key(TrackedFile::resolve(&a).unwrap().canonical_path());
    let key_b = derive_key(TrackedFile::resolve(&b).unwrap().canonical_path());
    assert_ne!(key_a, key_b);

    run(Operation::Store, &a, cache.path());
    run(Operation::Store, &b, cache.path());
    assert_eq!(run(Operation::Check, &a, cache.path()), ExitCode::Success);
    assert_eq!(run(Operation::Check, &b, cache.path()), ExitCode::Success);
    assert_eq!(entry_count(cache.path()), 2);
}

#[test]
fn test_unicode_form_siblings_keep_separate_baselines() {
    let dir = tempdir().unwrap();
    let cache = tempdir().unwrap();
    let nfc = dir.path().join("caf\u{e9}.txt");
    let nfd = dir.path().join("cafe\u{0301}.txt");
    fs::write(&nfc, "composed").unwrap();
    fs::write(&nfd, "decomposed").unwrap();

    // Normalizing filesystems store both spellings as one file.
    if fs::read(&nfc).unwrap() != b"composed" {
        return;
    }

    run(Operation::Store, &nfc, cache.path());
    run(Operation::Store, &nfd, cache.path());
    assert_eq!(run(Operation::Check, &nfc, cache.path()), ExitCode::Success);
    assert_eq!(run(Operation::Check, &nfd, cache.path()), ExitCode::Success);
    assert_eq!(entry_count(cache.path()), 2);
}
