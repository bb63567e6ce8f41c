//! File-backed document store: one JSON file per document.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde_json::Value as JsonValue;

use super::{DocumentKey, DocumentStore, StoreError};
use crate::config::StoreConfig;

/// A [`DocumentStore`] keeping each document as `<key>.json` under a data
/// directory.
///
/// Documents are written pretty-printed by default so a shop's state can be
/// inspected and edited by hand. A document that has never been written
/// simply has no file; reads return `Ok(None)` for it.
#[derive(Debug)]
pub struct FileStore {
    root: PathBuf,
    pretty: bool,
}

impl FileStore {
    /// Open a store rooted at `root`, creating the directory if needed.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the directory cannot be created.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        Ok(Self { root, pretty: true })
    }

    /// Open a store described by a [`StoreConfig`].
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the data directory cannot be created.
    pub fn open_with(config: &StoreConfig) -> Result<Self, StoreError> {
        let mut store = Self::open(config.data_dir.clone())?;
        store.pretty = config.pretty_json;
        Ok(store)
    }

    /// The directory documents are stored under.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn document_path(&self, key: DocumentKey) -> PathBuf {
        self.root.join(format!("{}.json", key.as_str()))
    }
}

impl DocumentStore for FileStore {
    fn read(&self, key: DocumentKey) -> Result<Option<JsonValue>, StoreError> {
        let bytes = match fs::read(self.document_path(key)) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };
        let value = serde_json::from_slice(&bytes)?;
        Ok(Some(value))
    }

    fn write(&mut self, key: DocumentKey, value: &JsonValue) -> Result<(), StoreError> {
        let bytes = if self.pretty {
            serde_json::to_vec_pretty(value)?
        } else {
            serde_json::to_vec(value)?
        };
        fs::write(self.document_path(key), bytes)?;
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_missing_document_reads_as_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::open(dir.path()).unwrap();
        assert!(store.read(DocumentKey::Reviews).unwrap().is_none());
    }

    #[test]
    fn test_write_then_read_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::open(dir.path()).unwrap();

        let doc = json!([{"id": 1, "rating": 5}]);
        store.write(DocumentKey::Reviews, &doc).unwrap();

        assert_eq!(store.read(DocumentKey::Reviews).unwrap().unwrap(), doc);
        assert!(dir.path().join("reviews.json").exists());
    }

    #[test]
    fn test_documents_survive_reopening() {
        let dir = tempfile::tempdir().unwrap();
        {
            let mut store = FileStore::open(dir.path()).unwrap();
            store.write(DocumentKey::Wishlist, &json!([7])).unwrap();
        }

        let reopened = FileStore::open(dir.path()).unwrap();
        assert_eq!(
            reopened.read(DocumentKey::Wishlist).unwrap().unwrap(),
            json!([7])
        );
    }

    #[test]
    fn test_corrupt_document_is_a_serialization_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::open(dir.path()).unwrap();
        fs::write(dir.path().join("wishlist.json"), b"not json {{").unwrap();

        let err = store.read(DocumentKey::Wishlist).unwrap_err();
        assert!(matches!(err, StoreError::Serialization(_)));
    }

    #[test]
    fn test_open_creates_nested_data_dir() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("shops").join("main");
        let _store = FileStore::open(&nested).unwrap();
        assert!(nested.is_dir());
    }

    #[test]
    fn test_pretty_and_compact_output() {
        let dir = tempfile::tempdir().unwrap();

        let compact_config = StoreConfig {
            data_dir: dir.path().join("compact"),
            pretty_json: false,
        };
        let mut compact = FileStore::open_with(&compact_config).unwrap();
        compact
            .write(DocumentKey::Wishlist, &json!([1, 2]))
            .unwrap();
        let raw = fs::read_to_string(compact_config.data_dir.join("wishlist.json")).unwrap();
        assert_eq!(raw, "[1,2]");

        let mut pretty = FileStore::open(dir.path().join("pretty")).unwrap();
        pretty.write(DocumentKey::Wishlist, &json!([1, 2])).unwrap();
        let raw = fs::read_to_string(dir.path().join("pretty").join("wishlist.json")).unwrap();
        assert!(raw.contains('\n'));
    }
}
