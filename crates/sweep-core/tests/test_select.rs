//! Tests for content-filter file selection.

use std::fs;

use tempfile::TempDir;

use sweep_core::select_files;
use sweep_io::{FsStore, ProjectStore};

#[test]
fn selects_files_containing_the_filter_substring() {
    let dir = TempDir::new().expect("Create temp dir");
    fs::write(dir.path().join("match.txt"), "alpha beta gamma").expect("Write match.txt");
    fs::write(dir.path().join("other.txt"), "delta epsilon").expect("Write other.txt");

    let store = FsStore::new(dir.path());
    let candidates = store.list_files().expect("List files");
    let selected = select_files(&store, &candidates, "beta");

    assert_eq!(selected.len(), 1);
    assert!(selected[0].ends_with("match.txt"));
}

#[test]
fn filter_is_literal_not_a_pattern() {
    let dir = TempDir::new().expect("Create temp dir");
    fs::write(dir.path().join("regexish.txt"), "abc").expect("Write regexish.txt");
    fs::write(dir.path().join("literal.txt"), "a.c").expect("Write literal.txt");

    let store = FsStore::new(dir.path());
    let candidates = store.list_files().expect("List files");

    // "a.c" must only match the file that literally contains "a.c".
    let selected = select_files(&store, &candidates, "a.c");
    assert_eq!(selected.len(), 1);
    assert!(selected[0].ends_with("literal.txt"));
}

#[test]
fn binary_files_are_excluded() {
    let dir = TempDir::new().expect("Create temp dir");
    fs::write(dir.path().join("text.txt"), "hello there").expect("Write text.txt");
    fs::write(dir.path().join("blob.bin"), b"hello\x00\x01\x02").expect("Write blob.bin");

    let store = FsStore::new(dir.path());
    let candidates = store.list_files().expect("List files");
    let selected = select_files(&store, &candidates, "hello");

    assert_eq!(selected.len(), 1, "Binary file must be skipped: {selected:?}");
    assert!(selected[0].ends_with("text.txt"));
}

#[test]
fn preserves_candidate_order() {
    let dir = TempDir::new().expect("Create temp dir");
    for name in ["c.txt", "a.txt", "b.txt"] {
        fs::write(dir.path().join(name), "needle").expect("Write file");
    }

    let store = FsStore::new(dir.path());
    let candidates = store.list_files().expect("List files");
    let selected = select_files(&store, &candidates, "needle");

    assert_eq!(selected, candidates);
}

#[test]
fn no_match_yields_empty_not_error() {
    let dir = TempDir::new().expect("Create temp dir");
    fs::write(dir.path().join("a.txt"), "content").expect("Write a.txt");

    let store = FsStore::new(dir.path());
    let candidates = store.list_files().expect("List files");

    assert!(select_files(&store, &candidates, "absent").is_empty());
}

#[test]
fn missing_candidate_is_excluded_not_fatal() {
    let dir = TempDir::new().expect("Create temp dir");
    fs::write(dir.path().join("present.txt"), "needle").expect("Write present.txt");

    let store = FsStore::new(dir.path());
    let mut candidates = store.list_files().expect("List files");
    candidates.push(dir.path().join("ghost.txt"));

    let selected = select_files(&store, &candidates, "needle");
    assert_eq!(selected.len(), 1);
    assert!(selected[0].ends_with("present.txt"));
}
