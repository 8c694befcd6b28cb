use tracing::warn;

use crate::io::kv::KvStore;
use crate::ops::reorder::{self, ReorderError};

/// Fixed key the whole list is stored under.
pub const LIST_KEY: &str = "entries";

/// Error type for list-store operations. Out-of-range indices are caller
/// defects; there is no recoverable path.
#[derive(Debug, thiserror::Error)]
pub enum ListError {
    #[error("index {index} out of range for list of {len}")]
    OutOfRange { index: usize, len: usize },
    #[error(transparent)]
    Reorder(#[from] ReorderError),
}

/// Owner of the canonical ordered entry list.
///
/// All mutations go through this type. After every mutating call the
/// in-memory list is pruned of empty entries — `insert_blank_at_head` is
/// the one exception, since its blank is about to become the active edit
/// target — and the filtered snapshot is pushed to the key-value store.
/// A mutation is complete once applied in memory; a failed persist is
/// logged and swallowed, never surfaced to the caller.
pub struct ListStore {
    entries: Vec<String>,
    kv: Box<dyn KvStore>,
}

impl ListStore {
    /// Load the persisted list, degrading to an empty list (with a log
    /// line) when the snapshot is absent or unreadable.
    pub fn load(kv: Box<dyn KvStore>) -> Self {
        let entries = read_entries(kv.as_ref());
        ListStore { entries, kv }
    }

    /// Re-read the persisted snapshot, replacing the in-memory list. Used
    /// when the data file changes under us while browsing.
    pub fn reload(&mut self) {
        self.entries = read_entries(self.kv.as_ref());
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.entries.get(index).map(String::as_str)
    }

    /// Prepend a blank entry and return its index (always 0). The caller
    /// pairs this with opening a dirty edit session on the new entry.
    pub fn insert_blank_at_head(&mut self) -> usize {
        self.entries.insert(0, String::new());
        self.sync();
        0
    }

    /// Replace the entry at `index`.
    pub fn apply_edit(&mut self, index: usize, text: impl Into<String>) -> Result<(), ListError> {
        self.check_index(index)?;
        self.entries[index] = text.into();
        self.prune_and_sync();
        Ok(())
    }

    /// Delete the entry at `index`. Indices of all later entries shift down
    /// by one; stale indices held by callers must not be reused.
    pub fn remove_at(&mut self, index: usize) -> Result<(), ListError> {
        self.check_index(index)?;
        self.entries.remove(index);
        self.prune_and_sync();
        Ok(())
    }

    /// Reorder via the gap-based engine and replace the stored list.
    pub fn apply_reorder(&mut self, source: usize, target: usize) -> Result<(), ListError> {
        self.entries = reorder::reorder(&self.entries, source, target)?;
        self.prune_and_sync();
        Ok(())
    }

    /// The persisted view: every non-empty entry, in order.
    pub fn snapshot(&self) -> Vec<&str> {
        self.entries
            .iter()
            .filter(|e| !e.is_empty())
            .map(String::as_str)
            .collect()
    }

    fn check_index(&self, index: usize) -> Result<(), ListError> {
        if index < self.entries.len() {
            Ok(())
        } else {
            Err(ListError::OutOfRange {
                index,
                len: self.entries.len(),
            })
        }
    }

    fn prune_and_sync(&mut self) {
        self.entries.retain(|e| !e.is_empty());
        self.sync();
    }

    fn sync(&mut self) {
        let encoded = match serde_json::to_string(&self.snapshot()) {
            Ok(s) => s,
            Err(e) => {
                warn!("could not encode list snapshot: {e}");
                return;
            }
        };
        if let Err(e) = self.kv.set(LIST_KEY, &encoded) {
            warn!("could not persist list snapshot: {e}");
        }
    }
}

fn read_entries(kv: &dyn KvStore) -> Vec<String> {
    let value = match kv.get(LIST_KEY) {
        Ok(Some(v)) => v,
        Ok(None) => return Vec::new(),
        Err(e) => {
            warn!("could not read persisted list, starting empty: {e}");
            return Vec::new();
        }
    };
    match serde_json::from_str(&value) {
        Ok(entries) => entries,
        Err(e) => {
            warn!("persisted list is malformed, starting empty: {e}");
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::kv::MemoryKvStore;
    use pretty_assertions::assert_eq;

    fn store_with(entries: &[&str]) -> (ListStore, MemoryKvStore) {
        let kv = MemoryKvStore::new();
        let mut store = ListStore::load(Box::new(kv.clone()));
        for e in entries.iter().rev() {
            store.insert_blank_at_head();
            store.apply_edit(0, *e).unwrap();
        }
        (store, kv)
    }

    fn persisted(kv: &MemoryKvStore) -> Option<Vec<String>> {
        let raw = kv.get(LIST_KEY).unwrap()?;
        Some(serde_json::from_str(&raw).unwrap())
    }

    #[test]
    fn load_from_empty_store_is_empty() {
        let store = ListStore::load(Box::new(MemoryKvStore::new()));
        assert!(store.is_empty());
    }

    #[test]
    fn load_malformed_snapshot_degrades_to_empty() {
        let mut kv = MemoryKvStore::new();
        kv.set(LIST_KEY, "not json").unwrap();
        let store = ListStore::load(Box::new(kv));
        assert!(store.is_empty());
    }

    #[test]
    fn load_uses_persisted_order_verbatim() {
        let mut kv = MemoryKvStore::new();
        kv.set(LIST_KEY, r#"["one","two","three"]"#).unwrap();
        let store = ListStore::load(Box::new(kv));
        assert_eq!(store.entries(), ["one", "two", "three"]);
    }

    #[test]
    fn insert_blank_at_head_returns_zero_and_keeps_blank_in_memory() {
        let (mut store, kv) = store_with(&["a"]);
        assert_eq!(store.insert_blank_at_head(), 0);
        assert_eq!(store.entries(), ["", "a"]);
        // The blank never reaches persistence.
        assert_eq!(persisted(&kv).unwrap(), ["a"]);
    }

    #[test]
    fn blank_head_then_remove_leaves_persistence_untouched() {
        let (mut store, kv) = store_with(&["a", "b"]);
        let before = persisted(&kv);
        let idx = store.insert_blank_at_head();
        store.remove_at(idx).unwrap();
        assert_eq!(persisted(&kv), before);
        assert_eq!(store.entries(), ["a", "b"]);
    }

    #[test]
    fn apply_edit_persists_new_text() {
        let (mut store, kv) = store_with(&["a", "b"]);
        store.apply_edit(1, "b2").unwrap();
        assert_eq!(store.entries(), ["a", "b2"]);
        assert_eq!(persisted(&kv).unwrap(), ["a", "b2"]);
    }

    #[test]
    fn editing_to_empty_prunes_the_entry() {
        let (mut store, kv) = store_with(&["a", "b"]);
        store.apply_edit(0, "").unwrap();
        assert_eq!(store.entries(), ["b"]);
        assert_eq!(persisted(&kv).unwrap(), ["b"]);
    }

    #[test]
    fn remove_shifts_later_entries() {
        let (mut store, _) = store_with(&["a", "b", "c"]);
        store.remove_at(1).unwrap();
        assert_eq!(store.entries(), ["a", "c"]);
    }

    #[test]
    fn reorder_replaces_stored_list_and_persists() {
        let (mut store, kv) = store_with(&["a", "b", "c", "d"]);
        store.apply_reorder(0, 3).unwrap();
        assert_eq!(store.entries(), ["b", "c", "a", "d"]);
        assert_eq!(persisted(&kv).unwrap(), ["b", "c", "a", "d"]);
    }

    #[test]
    fn persisted_snapshot_never_contains_empty_entries() {
        let (mut store, kv) = store_with(&["a"]);
        store.insert_blank_at_head();
        store.apply_reorder(1, 0).unwrap();
        let snap = persisted(&kv).unwrap();
        assert!(snap.iter().all(|e| !e.is_empty()), "snapshot: {snap:?}");
    }

    #[test]
    fn out_of_range_indices_are_rejected() {
        let (mut store, _) = store_with(&["a"]);
        assert!(matches!(
            store.apply_edit(1, "x"),
            Err(ListError::OutOfRange { index: 1, len: 1 })
        ));
        assert!(matches!(
            store.remove_at(5),
            Err(ListError::OutOfRange { .. })
        ));
        assert!(matches!(
            store.apply_reorder(3, 0),
            Err(ListError::Reorder(_))
        ));
    }

    #[test]
    fn reload_picks_up_external_changes() {
        let (mut store, mut kv) = store_with(&["a"]);
        kv.set(LIST_KEY, r#"["x","y"]"#).unwrap();
        store.reload();
        assert_eq!(store.entries(), ["x", "y"]);
    }
}
