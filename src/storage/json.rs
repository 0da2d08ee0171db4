//! JSON file-based storage backend.
//!
//! Keeps the whole dataset in memory and rewrites a single human-readable JSON
//! file after every mutation. Writes go to a temporary sibling file that is then
//! renamed over the target, so a crash never leaves a half-written document.
//!
//! # Performance Characteristics
//!
//! - **Read**: served from memory, file parsed once on open
//! - **Write**: O(n), serializes the entire dataset
//! - **Best for**: personal list collections (hundreds of lists, thousands of items)

use crate::domain::error::{ListkeeperError, Result};
use crate::domain::{Item, List, ListId};
use crate::storage::backend::ListStorage;
use crate::storage::models::ListRecord;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Current on-disk format version.
const FORMAT_VERSION: u32 = 1;

/// Top-level document serialized to disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StorageData {
    version: u32,

    /// RFC 3339 timestamp of the last successful save.
    #[serde(default)]
    updated_at: Option<String>,

    #[serde(default)]
    lists: Vec<ListRecord>,

    /// Items per list, keyed by list id.
    #[serde(default)]
    items: BTreeMap<ListId, Vec<Item>>,
}

impl Default for StorageData {
    fn default() -> Self {
        Self {
            version: FORMAT_VERSION,
            updated_at: None,
            lists: Vec::new(),
            items: BTreeMap::new(),
        }
    }
}

/// JSON file storage backend.
///
/// # Thread Safety
///
/// `Send` but not `Sync`. Writes take `&mut self`, so saves issued through one
/// instance are applied one at a time in call order.
///
/// # File Format
///
/// ```json
/// {
///   "version": 1,
///   "updatedAt": "2024-05-01T09:30:00+00:00",
///   "lists": [
///     {
///       "id": "6f1c0d1e9b0b4e5fa1c2d3e4f5a6b7c8",
///       "name": "Groceries",
///       "listType": "Shopping",
///       "defaultNewItemPosition": "bottom",
///       "isSelected": false,
///       "isLocked": false
///     }
///   ],
///   "items": {
///     "6f1c0d1e9b0b4e5fa1c2d3e4f5a6b7c8": [
///       { "name": "Milk", "notes": "", "quantity": 1, "isComplete": false, "isSelected": false, "isLocked": false }
///     ]
///   }
/// }
/// ```
#[derive(Debug)]
pub struct JsonStorage {
    file_path: PathBuf,
    data: StorageData,
}

impl JsonStorage {
    /// Creates or opens a JSON storage file.
    ///
    /// Loads the file if it exists, otherwise starts empty without touching disk
    /// until the first save. Parent directories are created.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Parent directory creation fails
    /// - The file exists but cannot be read
    /// - The file contains invalid JSON
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use listkeeper::storage::JsonStorage;
    /// use std::path::PathBuf;
    ///
    /// let storage = JsonStorage::new(PathBuf::from("/tmp/lists.json"))?;
    /// # Ok::<(), listkeeper::ListkeeperError>(())
    /// ```
    pub fn new(file_path: PathBuf) -> Result<Self> {
        tracing::debug!(path = ?file_path, "initializing JSON storage");

        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let data = if file_path.exists() {
            Self::load_from_file(&file_path)?
        } else {
            tracing::debug!("no storage file yet, starting empty");
            StorageData::default()
        };

        tracing::debug!(
            list_count = data.lists.len(),
            item_collections = data.items.len(),
            "storage initialized"
        );

        Ok(Self { file_path, data })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.file_path
    }

    fn load_from_file(path: &Path) -> Result<StorageData> {
        let contents = std::fs::read_to_string(path)?;
        let data: StorageData = serde_json::from_str(&contents)
            .map_err(|e| ListkeeperError::Storage(format!("failed to parse JSON: {e}")))?;

        if data.version > FORMAT_VERSION {
            tracing::warn!(
                version = data.version,
                supported = FORMAT_VERSION,
                "storage file written by a newer version"
            );
        }

        Ok(data)
    }

    /// Writes the dataset to disk, undoing `restore`'s mutation if the write fails.
    ///
    /// Callers change `self.data` first and pass a closure that puts the previous
    /// value back, so memory never runs ahead of the file.
    fn persist_or_restore(&mut self, restore: impl FnOnce(&mut StorageData)) -> Result<()> {
        let previous_stamp = self.data.updated_at.replace(chrono::Utc::now().to_rfc3339());

        let result = self.write_file();
        if let Err(e) = &result {
            tracing::warn!(error = %e, path = ?self.file_path, "save failed, keeping previous data");
            self.data.updated_at = previous_stamp;
            restore(&mut self.data);
        }
        result
    }

    /// Writes the dataset to disk via temp file and rename.
    fn write_file(&self) -> Result<()> {
        let json = serde_json::to_string_pretty(&self.data)
            .map_err(|e| ListkeeperError::Storage(format!("failed to serialize JSON: {e}")))?;

        let tmp_path = self.file_path.with_extension("tmp");
        tracing::trace!(tmp_path = ?tmp_path, "writing temporary file");
        std::fs::write(&tmp_path, json)?;
        std::fs::rename(&tmp_path, &self.file_path)?;

        tracing::debug!(path = ?self.file_path, "storage saved");
        Ok(())
    }
}

impl ListStorage for JsonStorage {
    fn load_lists(&self) -> Result<Vec<List>> {
        let _span = tracing::debug_span!("json_load_lists").entered();

        let lists: Vec<List> = self.data.lists.iter().cloned().map(List::from).collect();
        tracing::debug!(count = lists.len(), "lists loaded");
        Ok(lists)
    }

    fn save_lists(&mut self, lists: &[List]) -> Result<()> {
        let _span = tracing::debug_span!("json_save_lists", count = lists.len()).entered();

        let records = lists.iter().map(ListRecord::from).collect();
        let previous = std::mem::replace(&mut self.data.lists, records);
        self.persist_or_restore(|data| data.lists = previous)
    }

    fn load_items(&self, list_id: &ListId) -> Result<Vec<Item>> {
        let _span = tracing::debug_span!("json_load_items", list_id = %list_id).entered();

        let items = self
            .data
            .items
            .get(list_id)
            .cloned()
            .ok_or_else(|| ListkeeperError::NotFound(list_id.to_string()))?;

        tracing::debug!(count = items.len(), "items loaded");
        Ok(items)
    }

    fn save_items(&mut self, list_id: &ListId, items: &[Item]) -> Result<()> {
        let _span = tracing::debug_span!("json_save_items", list_id = %list_id, count = items.len()).entered();

        let previous = self.data.items.insert(list_id.clone(), items.to_vec());
        self.persist_or_restore(|data| match previous {
            Some(previous) => {
                data.items.insert(list_id.clone(), previous);
            }
            None => {
                data.items.remove(list_id);
            }
        })
    }

    fn delete_items(&mut self, list_id: &ListId) -> Result<()> {
        let _span = tracing::debug_span!("json_delete_items", list_id = %list_id).entered();

        let Some(previous) = self.data.items.remove(list_id) else {
            tracing::debug!("no items stored for list");
            return Ok(());
        };
        self.persist_or_restore(|data| {
            data.items.insert(list_id.clone(), previous);
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ListType, NewItemPosition};
    use tempfile::TempDir;

    fn storage_in(dir: &TempDir) -> JsonStorage {
        JsonStorage::new(dir.path().join("nested").join("lists.json")).unwrap()
    }

    #[test]
    fn missing_file_starts_empty() {
        let dir = TempDir::new().unwrap();
        let storage = storage_in(&dir);

        assert!(storage.load_lists().unwrap().is_empty());
        assert!(!storage.path().exists());
    }

    #[test]
    fn data_survives_reopen() {
        let dir = TempDir::new().unwrap();
        let list = List::new("Groceries", ListType::Shopping, NewItemPosition::Top);
        let items = vec![Item::new("Milk", "", 2, false), Item::new("Eggs", "", 12, true)];

        {
            let mut storage = storage_in(&dir);
            storage.save_lists(&[list.clone()]).unwrap();
            storage.save_items(&list.id, &items).unwrap();
        }

        let reopened = storage_in(&dir);
        let lists = reopened.load_lists().unwrap();
        assert_eq!(lists.len(), 1);
        assert_eq!(lists[0].id, list.id);
        assert_eq!(lists[0].list_type, ListType::Shopping);
        assert_eq!(reopened.load_items(&list.id).unwrap(), items);
    }

    #[test]
    fn unknown_list_is_not_found() {
        let dir = TempDir::new().unwrap();
        let err = storage_in(&dir).load_items(&ListId::from("nope")).unwrap_err();
        assert!(matches!(err, ListkeeperError::NotFound(id) if id == "nope"));
    }

    #[test]
    fn delete_items_removes_the_collection() {
        let dir = TempDir::new().unwrap();
        let mut storage = storage_in(&dir);
        let id = ListId::from("a");

        storage.save_items(&id, &[Item::new("x", "", 1, false)]).unwrap();
        storage.delete_items(&id).unwrap();
        storage.delete_items(&id).unwrap();

        assert!(storage.load_items(&id).is_err());
    }

    #[test]
    fn corrupt_file_is_a_storage_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("lists.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = JsonStorage::new(path).unwrap_err();
        assert!(matches!(err, ListkeeperError::Storage(_)));
    }

    #[test]
    fn failed_writes_keep_the_previous_data() {
        let dir = TempDir::new().unwrap();
        let mut storage = storage_in(&dir);
        let list = List::new("Groceries", ListType::Shopping, NewItemPosition::Top);
        let kept = ListId::from("kept");
        let items = vec![Item::new("Milk", "", 1, false)];
        storage.save_lists(&[list.clone()]).unwrap();
        storage.save_items(&kept, &items).unwrap();

        let nested = dir.path().join("nested");
        std::fs::remove_dir_all(&nested).unwrap();
        std::fs::write(&nested, "not a directory").unwrap();

        let other = List::new("Hardware", ListType::List, NewItemPosition::Bottom);
        assert!(storage.save_lists(&[list.clone(), other]).is_err());
        assert!(storage.save_items(&kept, &[]).is_err());
        assert!(storage.save_items(&ListId::from("fresh"), &items).is_err());
        assert!(storage.delete_items(&kept).is_err());

        let lists = storage.load_lists().unwrap();
        assert_eq!(lists.len(), 1);
        assert_eq!(lists[0].id, list.id);
        assert_eq!(storage.load_items(&kept).unwrap(), items);
        assert!(matches!(
            storage.load_items(&ListId::from("fresh")),
            Err(ListkeeperError::NotFound(_))
        ));
    }

    #[test]
    fn no_temporary_file_is_left_behind() {
        let dir = TempDir::new().unwrap();
        let mut storage = storage_in(&dir);
        storage.save_lists(&[]).unwrap();

        assert!(storage.path().exists());
        assert!(!storage.path().with_extension("tmp").exists());
    }
}
