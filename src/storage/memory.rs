//! In-memory storage backend.

use crate::domain::error::{ListkeeperError, Result};
use crate::domain::{Item, List, ListId};
use crate::storage::backend::ListStorage;
use crate::storage::models::ListRecord;
use std::collections::BTreeMap;

/// Storage held entirely in process memory.
///
/// Behaves like [`JsonStorage`](crate::storage::JsonStorage) minus the file: lists
/// are stored without their items, and unknown ids are `NotFound`.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    lists: Vec<ListRecord>,
    items: BTreeMap<ListId, Vec<Item>>,
}

impl MemoryStorage {
    /// Number of lists whose items are currently stored.
    #[must_use]
    pub fn item_collection_count(&self) -> usize {
        self.items.len()
    }
}

impl ListStorage for MemoryStorage {
    fn load_lists(&self) -> Result<Vec<List>> {
        Ok(self.lists.iter().cloned().map(List::from).collect())
    }

    fn save_lists(&mut self, lists: &[List]) -> Result<()> {
        tracing::trace!(count = lists.len(), "memory save lists");
        self.lists = lists.iter().map(ListRecord::from).collect();
        Ok(())
    }

    fn load_items(&self, list_id: &ListId) -> Result<Vec<Item>> {
        self.items
            .get(list_id)
            .cloned()
            .ok_or_else(|| ListkeeperError::NotFound(list_id.to_string()))
    }

    fn save_items(&mut self, list_id: &ListId, items: &[Item]) -> Result<()> {
        tracing::trace!(list_id = %list_id, count = items.len(), "memory save items");
        self.items.insert(list_id.clone(), items.to_vec());
        Ok(())
    }

    fn delete_items(&mut self, list_id: &ListId) -> Result<()> {
        self.items.remove(list_id);
        Ok(())
    }
}
