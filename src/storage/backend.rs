//! Persistence gateway abstraction.
//!
//! This module defines the [`ListStorage`] trait through which the session loads
//! and saves lists and items. The lists root and each list's items are stored
//! separately: a list's items are keyed by its [`ListId`] and are only fetched
//! when a flow needs them.
//!
//! Every write is a full overwrite of the stored collection, so repeating a save
//! with the same data is harmless.

use crate::domain::error::Result;
use crate::domain::{Item, List, ListId};

/// Abstraction over persistent storage backends.
///
/// # Implementations
///
/// - [`JsonStorage`](crate::storage::JsonStorage): single JSON file with atomic writes (default)
/// - [`MemoryStorage`](crate::storage::MemoryStorage): in-process maps, for embedding and tests
///
/// # Examples
///
/// ```
/// use listkeeper::storage::{ListStorage, MemoryStorage};
/// use listkeeper::{Item, List, ListType, NewItemPosition};
///
/// let mut storage = MemoryStorage::default();
/// let list = List::new("Groceries", ListType::Shopping, NewItemPosition::Bottom);
/// storage.save_lists(&[list.clone()])?;
/// storage.save_items(&list.id, &[Item::new("Milk", "", 1, false)])?;
///
/// assert_eq!(storage.load_items(&list.id)?.len(), 1);
/// # Ok::<(), listkeeper::ListkeeperError>(())
/// ```
pub trait ListStorage: Send {
    /// Loads the lists root in stored order.
    ///
    /// Returned lists carry no items; use [`load_items`](Self::load_items).
    ///
    /// # Errors
    ///
    /// Returns an error if the read operation fails.
    fn load_lists(&self) -> Result<Vec<List>>;

    /// Replaces the stored lists root. Only list metadata is written.
    ///
    /// # Errors
    ///
    /// Returns an error if the write operation fails.
    fn save_lists(&mut self, lists: &[List]) -> Result<()>;

    /// Loads the items stored for a list.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if nothing is stored under `list_id`, or another error
    /// if the read fails.
    fn load_items(&self, list_id: &ListId) -> Result<Vec<Item>>;

    /// Replaces the items stored for a list.
    ///
    /// # Errors
    ///
    /// Returns an error if the write operation fails.
    fn save_items(&mut self, list_id: &ListId, items: &[Item]) -> Result<()>;

    /// Drops the items stored for a list. Deleting an unknown id is not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the write operation fails.
    fn delete_items(&mut self, list_id: &ListId) -> Result<()>;
}
