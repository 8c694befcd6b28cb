use std::cell::RefCell;
use std::collections::HashMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::rc::Rc;

/// Error type for key-value store operations.
#[derive(Debug, thiserror::Error)]
pub enum KvError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("could not encode store file: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("could not replace store file: {0}")]
    Persist(#[from] tempfile::PersistError),
}

/// The persistence collaborator: a string-keyed store of string values.
/// Writes are full-snapshot and last-write-wins; callers never queue diffs.
pub trait KvStore {
    fn get(&self, key: &str) -> Result<Option<String>, KvError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), KvError>;
}

/// File-backed store: one JSON object per file, written atomically via a
/// temp file in the same directory followed by a rename, so an interrupted
/// write can never leave a half-written snapshot behind.
#[derive(Debug)]
pub struct FileKvStore {
    path: PathBuf,
}

impl FileKvStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileKvStore { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_map(&self) -> HashMap<String, String> {
        // Absent or unreadable file degrades to an empty store.
        let Ok(content) = fs::read_to_string(&self.path) else {
            return HashMap::new();
        };
        serde_json::from_str(&content).unwrap_or_default()
    }
}

impl KvStore for FileKvStore {
    fn get(&self, key: &str) -> Result<Option<String>, KvError> {
        Ok(self.read_map().remove(key))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), KvError> {
        let mut map = self.read_map();
        map.insert(key.to_string(), value.to_string());
        let content = serde_json::to_string_pretty(&map)?;

        let dir = self.path.parent().unwrap_or(Path::new("."));
        fs::create_dir_all(dir)?;
        let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
        tmp.write_all(content.as_bytes())?;
        tmp.persist(&self.path)?;
        Ok(())
    }
}

/// In-memory store for tests. The backing map is shared, so a test can keep
/// a handle and inspect what the code under test persisted.
#[derive(Debug, Clone, Default)]
pub struct MemoryKvStore {
    map: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryKvStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KvStore for MemoryKvStore {
    fn get(&self, key: &str) -> Result<Option<String>, KvError> {
        Ok(self.map.borrow().get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), KvError> {
        self.map
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn file_store_round_trips_values() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("store.json");
        let mut store = FileKvStore::new(&path);

        store.set("entries", "[\"a\",\"b\"]").unwrap();
        assert_eq!(
            store.get("entries").unwrap().as_deref(),
            Some("[\"a\",\"b\"]")
        );
    }

    #[test]
    fn absent_key_is_none() {
        let dir = TempDir::new().unwrap();
        let store = FileKvStore::new(dir.path().join("store.json"));
        assert_eq!(store.get("entries").unwrap(), None);
    }

    #[test]
    fn set_overwrites_previous_value() {
        let dir = TempDir::new().unwrap();
        let mut store = FileKvStore::new(dir.path().join("store.json"));
        store.set("k", "one").unwrap();
        store.set("k", "two").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("two"));
    }

    #[test]
    fn set_preserves_other_keys() {
        let dir = TempDir::new().unwrap();
        let mut store = FileKvStore::new(dir.path().join("store.json"));
        store.set("a", "1").unwrap();
        store.set("b", "2").unwrap();
        assert_eq!(store.get("a").unwrap().as_deref(), Some("1"));
        assert_eq!(store.get("b").unwrap().as_deref(), Some("2"));
    }

    #[test]
    fn values_keep_newlines_and_unicode() {
        let dir = TempDir::new().unwrap();
        let mut store = FileKvStore::new(dir.path().join("store.json"));
        let value = "first line\nsecond — ünïcødé 縦書き\n\ntrailing";
        store.set("k", value).unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some(value));
    }

    #[test]
    fn malformed_store_file_degrades_to_empty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("store.json");
        fs::write(&path, "not json {{{").unwrap();
        let mut store = FileKvStore::new(&path);
        assert_eq!(store.get("k").unwrap(), None);
        // A write replaces the corrupt file with a valid one.
        store.set("k", "v").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("v"));
    }

    #[test]
    fn set_creates_parent_directories() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested/deeper/store.json");
        let mut store = FileKvStore::new(&path);
        store.set("k", "v").unwrap();
        assert!(path.exists());
    }

    #[test]
    fn memory_store_shares_backing_map() {
        let store = MemoryKvStore::new();
        let mut writer = store.clone();
        writer.set("k", "v").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("v"));
    }
}
