//! End-to-end persistence: ListStore over the real file-backed store.

use std::collections::HashMap;

use jot::io::kv::FileKvStore;
use jot::model::list::{LIST_KEY, ListStore};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

fn open(path: &std::path::Path) -> ListStore {
    ListStore::load(Box::new(FileKvStore::new(path)))
}

fn add(store: &mut ListStore, text: &str) {
    let index = store.insert_blank_at_head();
    store.apply_edit(index, text).unwrap();
}

#[test]
fn entries_survive_reload() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("entries.json");

    let mut store = open(&path);
    add(&mut store, "last");
    add(&mut store, "middle — ünïcødé 縦書き");
    add(&mut store, "first line\nsecond line\n\nfourth");
    drop(store);

    let store = open(&path);
    assert_eq!(
        store.entries(),
        [
            "first line\nsecond line\n\nfourth",
            "middle — ünïcødé 縦書き",
            "last",
        ]
    );
}

#[test]
fn reorder_survives_reload() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("entries.json");

    let mut store = open(&path);
    for text in ["d", "c", "b", "a"] {
        add(&mut store, text);
    }
    store.apply_reorder(0, 3).unwrap();
    drop(store);

    let store = open(&path);
    assert_eq!(store.entries(), ["b", "c", "a", "d"]);
}

#[test]
fn abandoned_blank_never_reaches_disk() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("entries.json");

    let mut store = open(&path);
    add(&mut store, "keep");
    let index = store.insert_blank_at_head();
    store.remove_at(index).unwrap();
    drop(store);

    let store = open(&path);
    assert_eq!(store.entries(), ["keep"]);
}

#[test]
fn data_file_is_a_json_object_keyed_by_entries() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("entries.json");

    let mut store = open(&path);
    add(&mut store, "only");
    drop(store);

    let raw = std::fs::read_to_string(&path).unwrap();
    let map: HashMap<String, String> = serde_json::from_str(&raw).unwrap();
    let list: Vec<String> = serde_json::from_str(&map[LIST_KEY]).unwrap();
    assert_eq!(list, ["only"]);
}
