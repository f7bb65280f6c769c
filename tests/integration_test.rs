//! Integration tests for xtag
//!
//! These tests verify end-to-end engine behavior over real temporary
//! directory trees. Tag persistence goes through an in-memory backend so
//! the suite runs on filesystems without extended-attribute support.

use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use xtag::entry::{Entry, EntryKind};
use xtag::query::{self, TagQuery};
use xtag::store::{MetadataBackend, StoreError, TagStore};
use xtag::walk;

/// Map-backed metadata store shared between the test and the TagStore
#[derive(Clone, Default)]
struct MapBackend {
    tags: Arc<Mutex<HashMap<PathBuf, Vec<String>>>>,
}

impl MetadataBackend for MapBackend {
    fn read_tags(&self, path: &Path) -> io::Result<Option<Vec<String>>> {
        Ok(self.tags.lock().unwrap().get(path).cloned())
    }

    fn write_tags(&self, path: &Path, tags: &[String]) -> io::Result<()> {
        let mut map = self.tags.lock().unwrap();
        if tags.is_empty() {
            map.remove(path);
        } else {
            map.insert(path.to_path_buf(), tags.to_vec());
        }
        Ok(())
    }
}

fn setup_store() -> (TagStore, MapBackend) {
    let backend = MapBackend::default();
    (TagStore::new(Box::new(backend.clone())), backend)
}

fn tags(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| (*v).to_string()).collect()
}

#[test]
fn tag_and_list_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let (store, _backend) = setup_store();

    let file = dir.path().join("report.pdf");
    std::fs::write(&file, b"content").unwrap();

    let entry = Entry::resolve(&file).unwrap();
    store.set_tags(&entry, &tags(&["work", "urgent"]), false).unwrap();

    assert_eq!(store.tags_of(&entry).unwrap(), tags(&["work", "urgent"]));
}

#[test]
fn repeated_add_does_not_duplicate() {
    let dir = tempfile::tempdir().unwrap();
    let (store, _backend) = setup_store();

    let file = dir.path().join("notes.txt");
    std::fs::write(&file, b"content").unwrap();
    let entry = Entry::resolve(&file).unwrap();

    store.set_tags(&entry, &tags(&["a", "b"]), false).unwrap();
    store.set_tags(&entry, &tags(&["a", "b"]), false).unwrap();

    assert_eq!(store.tags_of(&entry).unwrap(), tags(&["a", "b"]));
}

#[test]
fn replace_then_union_preserves_existing() {
    let dir = tempfile::tempdir().unwrap();
    let (store, _backend) = setup_store();

    let file = dir.path().join("photo.jpg");
    std::fs::write(&file, b"content").unwrap();
    let entry = Entry::resolve(&file).unwrap();

    store.set_tags(&entry, &tags(&["x"]), true).unwrap();
    store.set_tags(&entry, &tags(&["y"]), false).unwrap();

    assert_eq!(store.tags_of(&entry).unwrap(), tags(&["x", "y"]));
}

#[test]
fn remove_then_clear_empties_the_set() {
    let dir = tempfile::tempdir().unwrap();
    let (store, backend) = setup_store();

    let file = dir.path().join("old.log");
    std::fs::write(&file, b"content").unwrap();
    let entry = Entry::resolve(&file).unwrap();

    store.set_tags(&entry, &tags(&["a", "b", "c"]), false).unwrap();
    store.remove_tag(&entry, "b").unwrap();
    assert_eq!(store.tags_of(&entry).unwrap(), tags(&["a", "c"]));

    // Absent tag removal is a no-op
    store.remove_tag(&entry, "missing").unwrap();
    assert_eq!(store.tags_of(&entry).unwrap(), tags(&["a", "c"]));

    store.clear_tags(&entry).unwrap();
    assert!(store.tags_of(&entry).unwrap().is_empty());
    // Fully cleared entries drop out of the backing store entirely
    assert!(backend.tags.lock().unwrap().get(&file).is_none());
}

#[test]
fn enumerate_aggregates_a_whole_tree() {
    let dir = tempfile::tempdir().unwrap();
    let (store, _backend) = setup_store();

    let top = dir.path().join("top.txt");
    let nested_dir = dir.path().join("sub/deeper");
    let nested = nested_dir.join("leaf.txt");
    std::fs::write(&top, b"content").unwrap();
    std::fs::create_dir_all(&nested_dir).unwrap();
    std::fs::write(&nested, b"content").unwrap();

    store
        .set_tags(&Entry::resolve(&top).unwrap(), &tags(&["beta"]), true)
        .unwrap();
    store
        .set_tags(&Entry::resolve(&nested_dir).unwrap(), &tags(&["alpha"]), true)
        .unwrap();
    store
        .set_tags(&Entry::resolve(&nested).unwrap(), &tags(&["beta", "gamma"]), true)
        .unwrap();

    let found = walk::enumerate_tags(&store, &[dir.path().to_path_buf()]).unwrap();
    assert_eq!(found, tags(&["alpha", "beta", "gamma"]));
}

#[test]
fn enumerate_fails_on_unresolvable_root() {
    let dir = tempfile::tempdir().unwrap();
    let (store, _backend) = setup_store();

    let missing = dir.path().join("nope");
    let err = walk::enumerate_tags(&store, &[missing]).unwrap_err();
    assert!(matches!(err, StoreError::InvalidPath(_)));
}

#[test]
fn match_finds_descendants_by_subset() {
    let dir = tempfile::tempdir().unwrap();
    let (store, _backend) = setup_store();

    let full = dir.path().join("full.txt");
    let partial = dir.path().join("partial.txt");
    std::fs::write(&full, b"content").unwrap();
    std::fs::write(&partial, b"content").unwrap();

    store
        .set_tags(&Entry::resolve(&full).unwrap(), &tags(&["a", "b"]), true)
        .unwrap();
    store
        .set_tags(&Entry::resolve(&partial).unwrap(), &tags(&["a"]), true)
        .unwrap();

    let query = TagQuery::All(tags(&["a", "b"]));
    let found =
        query::match_entries(&store, &query, &[dir.path().to_path_buf()], true).unwrap();
    let found: Vec<PathBuf> = found.iter().map(|e| e.path().to_path_buf()).collect();
    assert_eq!(found, vec![full]);
}

#[test]
fn wildcard_matches_every_tagged_entry() {
    let dir = tempfile::tempdir().unwrap();
    let (store, _backend) = setup_store();

    let tagged = dir.path().join("tagged.txt");
    let plain = dir.path().join("plain.txt");
    std::fs::write(&tagged, b"content").unwrap();
    std::fs::write(&plain, b"content").unwrap();

    store
        .set_tags(&Entry::resolve(&tagged).unwrap(), &tags(&["anything"]), true)
        .unwrap();

    let found =
        query::match_entries(&store, &TagQuery::Any, &[dir.path().to_path_buf()], true)
            .unwrap();
    let found: Vec<PathBuf> = found.iter().map(|e| e.path().to_path_buf()).collect();
    assert_eq!(found, vec![tagged]);
}

#[test]
fn matched_entries_carry_their_classification() {
    let dir = tempfile::tempdir().unwrap();
    let (store, _backend) = setup_store();

    let sub = dir.path().join("tagged-dir");
    std::fs::create_dir(&sub).unwrap();
    let inner = sub.join("keep.txt");
    std::fs::write(&inner, b"content").unwrap();

    store
        .set_tags(&Entry::resolve(&sub).unwrap(), &tags(&["projects"]), true)
        .unwrap();

    let query = TagQuery::All(tags(&["projects"]));
    let found =
        query::match_entries(&store, &query, &[dir.path().to_path_buf()], true).unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].kind(), EntryKind::Directory);
}

#[test]
fn resolving_a_missing_path_never_succeeds() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("ghost.txt");

    assert!(matches!(
        Entry::resolve(&missing),
        Err(StoreError::InvalidPath(_))
    ));
}
