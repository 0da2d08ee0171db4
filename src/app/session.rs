//! Session: the state and dispatcher object handed to a view layer.
//!
//! A [`Session`] owns the state of every screen and modal plus the storage
//! backend. Pure reducers compute the next state; the session then performs the
//! side effects that follow from it:
//!
//! - saving the lists root or the open list's items when they changed
//! - deleting the item collections of lists that disappeared
//! - loading items when a list is opened or used in a transfer
//!
//! Workflows that validate user input (`submit_*`, [`Session::execute_transfer`])
//! write failures into the modal's `error` field and touch no storage.
//!
//! # Example
//!
//! ```
//! use listkeeper::app::{ListModalAction, ListDefaults, Route, Session};
//! use listkeeper::storage::MemoryStorage;
//!
//! let mut session = Session::open(MemoryStorage::default(), ListDefaults::default())?;
//! session.open_list_modal(None)?;
//! session.dispatch_list_modal(ListModalAction::UpdateName("Groceries".into()));
//!
//! let route = session.submit_list_modal(false)?;
//! assert_eq!(route, Some(Route::Items { list_index: 0 }));
//! # Ok::<(), listkeeper::ListkeeperError>(())
//! ```

use crate::app::{
    follower_index, ItemModalAction, ItemModalState, ItemsPageAction, ItemsPageState, ListDefaults, ListModalAction, ListModalState,
    ListsPageAction, ListsPageState, MoveItemsAction, MoveItemsState, Route,
};
use crate::collection::{transfer, Transfer};
use crate::domain::error::{ListkeeperError, Result};
use crate::domain::{resolve_index, Item, List, ListId, NewItemPosition, Position};
use crate::interchange;
use crate::storage::ListStorage;

/// Modal error for a list submitted without a name.
pub const LIST_NAME_REQUIRED: &str = "List name cannot be empty";

/// Modal error for an item submitted without a name.
pub const ITEM_NAME_REQUIRED: &str = "Item name cannot be empty";

/// Screen state plus the storage it is persisted to.
///
/// All methods take `&mut self`, so actions are applied one at a time in call
/// order and every save completes before the next action starts.
#[derive(Debug)]
pub struct Session<S: ListStorage> {
    storage: S,
    defaults: ListDefaults,
    lists_page: ListsPageState,
    list_modal: ListModalState,
    items_page: Option<ItemsPageState>,
    item_modal: ItemModalState,
    move_items: MoveItemsState,
}

impl<S: ListStorage> Session<S> {
    /// Opens a session over `storage`, loading the lists root.
    ///
    /// # Errors
    ///
    /// Returns an error if the lists cannot be loaded.
    pub fn open(storage: S, defaults: ListDefaults) -> Result<Self> {
        let _span = tracing::debug_span!("session_open").entered();

        let lists = storage.load_lists()?;
        tracing::debug!(list_count = lists.len(), "session opened");

        Ok(Self {
            storage,
            defaults,
            lists_page: ListsPageState::new(lists),
            list_modal: ListModalState::for_new(defaults),
            items_page: None,
            item_modal: ItemModalState::default(),
            move_items: MoveItemsState::default(),
        })
    }

    /// Lists screen state.
    #[must_use]
    pub const fn lists_page(&self) -> &ListsPageState {
        &self.lists_page
    }

    /// Add/update list modal fields. Meaningful while
    /// [`ListsPageState::is_list_modal_visible`] is set.
    #[must_use]
    pub const fn list_modal(&self) -> &ListModalState {
        &self.list_modal
    }

    /// Items screen of the open list, if any.
    #[must_use]
    pub const fn items_page(&self) -> Option<&ItemsPageState> {
        self.items_page.as_ref()
    }

    /// Add/update item modal fields for the open list.
    #[must_use]
    pub const fn item_modal(&self) -> &ItemModalState {
        &self.item_modal
    }

    /// Copy/move modal choices and its validation error, if any.
    #[must_use]
    pub const fn move_items(&self) -> &MoveItemsState {
        &self.move_items
    }

    /// Storage backend, for reads outside the session's workflows.
    ///
    /// Writes go through the session so that state and storage stay in step.
    #[must_use]
    pub const fn storage(&self) -> &S {
        &self.storage
    }

    /// Consumes the session and returns the storage backend.
    #[must_use]
    pub fn into_storage(self) -> S {
        self.storage
    }

    /// Runs the lists reducer, then saves the lists root if it changed.
    ///
    /// Lists that are no longer present have their items deleted from storage. If
    /// the open list is among them, it is closed.
    ///
    /// # Errors
    ///
    /// Returns reducer contract violations or storage failures. The in-memory
    /// state is updated before storage is written.
    pub fn dispatch_lists(&mut self, action: ListsPageAction) -> Result<()> {
        let _span = tracing::debug_span!("dispatch_lists", action = action.name()).entered();

        let next = self.lists_page.clone().reduce(action)?;
        let changed = next.lists != self.lists_page.lists;
        let removed: Vec<ListId> = self
            .lists_page
            .lists
            .iter()
            .filter(|old| !next.lists.iter().any(|new| new.id == old.id))
            .map(|old| old.id.clone())
            .collect();
        self.lists_page = next;

        if changed {
            self.storage.save_lists(&self.lists_page.lists)?;
        }

        for list_id in &removed {
            tracing::debug!(list_id = %list_id, "deleting items of removed list");
            self.storage.delete_items(list_id)?;
            if self.items_page.as_ref().is_some_and(|page| page.list_id == *list_id) {
                self.items_page = None;
            }
        }
        Ok(())
    }

    /// Runs the items reducer for the open list, then saves its items if they changed.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no list is open, plus reducer contract violations
    /// and storage failures.
    pub fn dispatch_items(&mut self, action: ItemsPageAction) -> Result<()> {
        let page = self.items_page.as_ref().ok_or_else(no_open_list)?;
        let _span = tracing::debug_span!("dispatch_items", list_id = %page.list_id).entered();

        let next = page.clone().reduce(action)?;
        let changed = next.items != page.items;
        self.items_page = Some(next);

        if changed {
            if let Some(page) = &self.items_page {
                self.storage.save_items(&page.list_id, &page.items)?;
            }
        }
        Ok(())
    }

    /// Runs the list modal reducer.
    ///
    /// Modal edits are form state only and never touch storage; the list is
    /// saved by [`submit_list_modal`](Self::submit_list_modal).
    ///
    /// # Parameters
    ///
    /// * `action` - Field update, error, or whole-state replacement
    pub fn dispatch_list_modal(&mut self, action: ListModalAction) {
        self.list_modal = std::mem::take(&mut self.list_modal).reduce(action);
    }

    /// Runs the item modal reducer. Like
    /// [`dispatch_list_modal`](Self::dispatch_list_modal), nothing is saved.
    pub fn dispatch_item_modal(&mut self, action: ItemModalAction) {
        self.item_modal = std::mem::take(&mut self.item_modal).reduce(action);
    }

    /// Runs the move-items reducer. Choices are checked only when
    /// [`execute_transfer`](Self::execute_transfer) runs.
    pub fn dispatch_move_items(&mut self, action: MoveItemsAction) {
        self.move_items = std::mem::take(&mut self.move_items).reduce(action);
    }

    /// Opens the list modal, blank for `None` or pre-filled from the list at `index`.
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfRange` if `index` is not a list.
    pub fn open_list_modal(&mut self, index: Option<usize>) -> Result<()> {
        let modal = match index {
            None => ListModalState::for_new(self.defaults),
            Some(index) => ListModalState::for_existing(index, self.list_at(index)?),
        };
        self.dispatch_list_modal(ListModalAction::Replace(Box::new(modal)));
        self.dispatch_lists(ListsPageAction::UpdateListModalVisible {
            is_visible: true,
            current_list_index: index,
        })
    }

    /// Closes the list modal without saving.
    ///
    /// # Errors
    ///
    /// Never fails in practice; returns `Result` like every lists dispatch.
    pub fn close_list_modal(&mut self) -> Result<()> {
        self.dispatch_lists(ListsPageAction::UpdateListModalVisible {
            is_visible: false,
            current_list_index: None,
        })
    }

    /// Submits the list modal.
    ///
    /// A blank name sets the modal error and nothing is saved. Otherwise the list
    /// is added or updated at the chosen position and the lists root is saved.
    ///
    /// With `alt` ("save and next") the modal stays open for another new list, or
    /// moves on to the list that followed the edited one before it was
    /// repositioned, and `None` is returned. A plain
    /// submit closes the modal; for a new list it also opens that list and returns
    /// the route to its items screen.
    ///
    /// # Errors
    ///
    /// Returns position or index contract violations and storage failures.
    pub fn submit_list_modal(&mut self, alt: bool) -> Result<Option<Route>> {
        let _span = tracing::debug_span!("submit_list_modal", alt).entered();

        let modal = self.list_modal.clone();
        let name = modal.name.trim();
        if name.is_empty() {
            tracing::debug!("list name missing");
            self.dispatch_list_modal(ListModalAction::UpdateError(LIST_NAME_REQUIRED.to_string()));
            return Ok(None);
        }

        let len = self.lists_page.lists.len();
        let (added_at, follower) = match modal.current_index {
            None => {
                let index = resolve_index(modal.position, 0, len, true)?;
                let list = List::new(name, modal.list_type, modal.default_new_item_position);
                self.dispatch_lists(ListsPageAction::AddList {
                    list,
                    position: modal.position,
                })?;
                (Some(index), None)
            }
            Some(index) => {
                let list = self
                    .list_at(index)?
                    .clone()
                    .with_name(name)
                    .with_list_type(modal.list_type)
                    .with_default_new_item_position(modal.default_new_item_position);
                let new_index = resolve_index(modal.position, index, len, false)?;
                self.dispatch_lists(ListsPageAction::UpdateList {
                    index,
                    list,
                    position: modal.position,
                })?;
                (None, follower_index(index, new_index, len))
            }
        };

        if alt {
            if modal.current_index.is_some() {
                self.dispatch_lists(ListsPageAction::UpdateListModalVisible {
                    is_visible: follower.is_some(),
                    current_list_index: follower,
                })?;
            } else {
                self.dispatch_lists(ListsPageAction::ListModalAltAction)?;
            }
            if self.lists_page.is_list_modal_visible {
                let next = match self.lists_page.current_list_index {
                    None => ListModalState::for_new(self.defaults),
                    Some(index) => ListModalState::for_existing(index, self.list_at(index)?),
                };
                self.dispatch_list_modal(ListModalAction::Replace(Box::new(next)));
            }
            return Ok(None);
        }

        self.close_list_modal()?;
        match added_at {
            Some(index) => self.open_list(index).map(Some),
            None => Ok(None),
        }
    }

    /// Deletes the selected lists, or all of them if none is selected, and closes
    /// the confirmation modal.
    ///
    /// # Errors
    ///
    /// Returns storage failures.
    pub fn delete_lists(&mut self) -> Result<()> {
        self.dispatch_lists(ListsPageAction::DeleteLists)?;
        self.dispatch_lists(ListsPageAction::UpdateDeleteAllModalVisible(false))
    }

    /// Opens the list at `index`, loading its items.
    ///
    /// A list with no stored items opens empty.
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfRange` for a bad index, or a storage failure.
    pub fn open_list(&mut self, index: usize) -> Result<Route> {
        let list_id = self.list_at(index)?.id.clone();
        let _span = tracing::debug_span!("open_list", list_id = %list_id).entered();

        let items = self.load_items_or_empty(&list_id)?;
        tracing::debug!(item_count = items.len(), "list opened");

        self.items_page = Some(ItemsPageState::new(list_id, items));
        self.item_modal = ItemModalState::default();
        self.move_items = MoveItemsState::default();
        Ok(Route::Items { list_index: index })
    }

    /// Closes the open list.
    pub fn close_list(&mut self) -> Route {
        self.items_page = None;
        Route::Lists
    }

    /// Opens the item modal, blank for `None` or pre-filled from the item at `index`.
    ///
    /// A new item is placed according to the list's default new item position.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no list is open or `IndexOutOfRange` for a bad index.
    pub fn open_item_modal(&mut self, index: Option<usize>) -> Result<()> {
        let page = self.items_page.as_ref().ok_or_else(no_open_list)?;
        let modal = match index {
            None => ItemModalState::for_new(self.new_item_position(&page.list_id)),
            Some(index) => {
                let item = page.items.get(index).ok_or(ListkeeperError::IndexOutOfRange {
                    index,
                    len: page.items.len(),
                })?;
                ItemModalState::for_existing(index, item)
            }
        };
        self.dispatch_item_modal(ItemModalAction::Replace(Box::new(modal)));
        self.dispatch_items(ItemsPageAction::UpdateItemModalVisible {
            is_visible: true,
            current_item_index: index,
        })
    }

    /// Closes the item modal without saving.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no list is open.
    pub fn close_item_modal(&mut self) -> Result<()> {
        self.dispatch_items(ItemsPageAction::UpdateItemModalVisible {
            is_visible: false,
            current_item_index: None,
        })
    }

    /// Submits the item modal for the open list.
    ///
    /// Same flow as [`submit_list_modal`](Self::submit_list_modal) at item level.
    /// Item submits never navigate.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no list is open, position or index contract
    /// violations, and storage failures.
    pub fn submit_item_modal(&mut self, alt: bool) -> Result<()> {
        let _span = tracing::debug_span!("submit_item_modal", alt).entered();

        let modal = self.item_modal.clone();
        let name = modal.name.trim();
        if name.is_empty() {
            tracing::debug!("item name missing");
            self.dispatch_item_modal(ItemModalAction::UpdateError(ITEM_NAME_REQUIRED.to_string()));
            return Ok(());
        }

        let page = self.items_page.as_ref().ok_or_else(no_open_list)?;
        let len = page.items.len();
        let (action, follower) = match modal.current_index {
            None => (
                ItemsPageAction::AddItem {
                    item: Item::new(name, modal.notes.as_str(), modal.quantity, modal.is_locked),
                    position: modal.position,
                },
                None,
            ),
            Some(index) => {
                let existing = page
                    .items
                    .get(index)
                    .cloned()
                    .ok_or(ListkeeperError::IndexOutOfRange { index, len })?;
                let new_index = resolve_index(modal.position, index, len, false)?;
                let action = ItemsPageAction::UpdateItem {
                    index,
                    item: existing
                        .with_name(name)
                        .with_notes(modal.notes.as_str())
                        .with_quantity(modal.quantity)
                        .with_locked(modal.is_locked),
                    position: modal.position,
                };
                (action, follower_index(index, new_index, len))
            }
        };
        self.dispatch_items(action)?;

        if !alt {
            return self.close_item_modal();
        }

        if modal.current_index.is_some() {
            self.dispatch_items(ItemsPageAction::UpdateItemModalVisible {
                is_visible: follower.is_some(),
                current_item_index: follower,
            })?;
        } else {
            self.dispatch_items(ItemsPageAction::ItemModalAltAction)?;
        }
        let next = self.items_page.as_ref().and_then(|page| {
            if !page.is_item_modal_visible {
                return None;
            }
            match page.current_item_index {
                None => Some(ItemModalState::for_new(self.new_item_position(&page.list_id))),
                Some(index) => page.items.get(index).map(|item| ItemModalState::for_existing(index, item)),
            }
        });
        if let Some(next) = next {
            self.dispatch_item_modal(ItemModalAction::Replace(Box::new(next)));
        }
        Ok(())
    }

    /// Deletes the selected items of the open list, or all of them if none is
    /// selected, and closes the confirmation modal.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no list is open, or a storage failure.
    pub fn delete_items(&mut self) -> Result<()> {
        self.dispatch_items(ItemsPageAction::DeleteItems)?;
        self.dispatch_items(ItemsPageAction::UpdateDeleteAllModalVisible(false))
    }

    /// Opens the copy/move modal with the open list as source.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no list is open.
    pub fn open_move_items_modal(&mut self) -> Result<()> {
        let page = self.items_page.as_ref().ok_or_else(no_open_list)?;
        self.move_items = MoveItemsState::from_list(page.list_id.clone());
        self.dispatch_items(ItemsPageAction::UpdateCopyMoveModalVisible(true))
    }

    /// Closes the copy/move modal without transferring anything.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no list is open.
    pub fn close_move_items_modal(&mut self) -> Result<()> {
        self.move_items = MoveItemsState::default();
        self.dispatch_items(ItemsPageAction::UpdateCopyMoveModalVisible(false))
    }

    /// Copies or moves items between the chosen lists.
    ///
    /// Returns `false` and sets the modal error if the choice is incomplete.
    /// Otherwise both collections are saved, destination first, the open list is
    /// refreshed, the modal is closed and `true` is returned. A failed source save
    /// leaves the items duplicated rather than lost.
    ///
    /// # Errors
    ///
    /// Returns storage failures.
    pub fn execute_transfer(&mut self) -> Result<bool> {
        let _span = tracing::debug_span!("execute_transfer").entered();

        let plan = match self.move_items.validate() {
            Ok(plan) => plan,
            Err(message) => {
                tracing::debug!(%message, "transfer rejected");
                self.dispatch_move_items(MoveItemsAction::UpdateError(message));
                return Ok(false);
            }
        };

        let source_items = self.load_items_or_empty(&plan.source)?;
        let destination_items = self.load_items_or_empty(&plan.destination)?;
        let Transfer { source, destination } = transfer(plan.action, &source_items, &destination_items);

        tracing::debug!(
            action = %plan.action,
            source = %plan.source,
            destination = %plan.destination,
            transferred = destination.len() - destination_items.len(),
            "transferring items"
        );

        self.storage.save_items(&plan.destination, &destination)?;
        self.storage.save_items(&plan.source, &source)?;
        self.refresh_open_items(&plan.source, source)?;
        self.refresh_open_items(&plan.destination, destination)?;

        self.move_items = MoveItemsState::default();
        if self.items_page.is_some() {
            self.dispatch_items(ItemsPageAction::UpdateCopyMoveModalVisible(false))?;
        }
        Ok(true)
    }

    /// Exports every list with its items as interchange text.
    ///
    /// # Errors
    ///
    /// Returns storage failures while loading items.
    pub fn export_lists(&self) -> Result<String> {
        let lists = self
            .lists_page
            .lists
            .iter()
            .map(|list| -> Result<List> { Ok(list.clone().with_items(self.load_items_or_empty(&list.id)?)) })
            .collect::<Result<Vec<List>>>()?;
        interchange::export_lists(&lists)
    }

    /// Imports lists from interchange text, appending them after the existing ones.
    ///
    /// Returns the number of lists imported. The lists root is saved before any
    /// item collection, so a failed root save writes no items.
    ///
    /// # Errors
    ///
    /// Returns `Import` errors for empty or unparsable text, in which case nothing
    /// is saved, and storage failures.
    pub fn import_lists(&mut self, text: &str) -> Result<usize> {
        let _span = tracing::debug_span!("session_import_lists").entered();

        let imported = interchange::import_lists(text)?;
        let count = imported.len();

        let mut lists = self.lists_page.lists.clone();
        lists.extend(imported.iter().map(|list| list.clone().with_items(Vec::new())));
        self.dispatch_lists(ListsPageAction::ReplaceLists(lists))?;

        for list in &imported {
            self.storage.save_items(&list.id, &list.items)?;
        }

        tracing::debug!(count, "lists imported into session");
        Ok(count)
    }

    fn list_at(&self, index: usize) -> Result<&List> {
        self.lists_page.lists.get(index).ok_or(ListkeeperError::IndexOutOfRange {
            index,
            len: self.lists_page.lists.len(),
        })
    }

    fn new_item_position(&self, list_id: &ListId) -> Position {
        self.lists_page
            .lists
            .iter()
            .find(|list| list.id == *list_id)
            .map_or_else(NewItemPosition::default, |list| list.default_new_item_position)
            .into()
    }

    /// Items of `list_id`: resident if it is the open list, else from storage.
    fn load_items_or_empty(&self, list_id: &ListId) -> Result<Vec<Item>> {
        if let Some(page) = self.items_page.as_ref().filter(|page| page.list_id == *list_id) {
            return Ok(page.items.clone());
        }
        match self.storage.load_items(list_id) {
            Ok(items) => Ok(items),
            Err(ListkeeperError::NotFound(_)) => {
                tracing::debug!(list_id = %list_id, "no stored items, treating as empty");
                Ok(Vec::new())
            }
            Err(e) => Err(e),
        }
    }

    fn refresh_open_items(&mut self, list_id: &ListId, items: Vec<Item>) -> Result<()> {
        if let Some(page) = self.items_page.as_ref().filter(|page| page.list_id == *list_id) {
            self.items_page = Some(page.clone().reduce(ItemsPageAction::ReplaceItems(items))?);
        }
        Ok(())
    }
}

fn no_open_list() -> ListkeeperError {
    ListkeeperError::NotFound("no list is open".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collection::TransferAction;
    use crate::domain::ListType;
    use crate::storage::MemoryStorage;

    /// Memory storage that counts writes and can be told to fail them.
    #[derive(Debug, Default)]
    struct CountingStorage {
        inner: MemoryStorage,
        writes: usize,
        fail_lists: bool,
        fail_items_for: Option<ListId>,
    }

    fn disk_full() -> ListkeeperError {
        ListkeeperError::Storage("disk full".to_string())
    }

    impl ListStorage for CountingStorage {
        fn load_lists(&self) -> Result<Vec<List>> {
            self.inner.load_lists()
        }

        fn save_lists(&mut self, lists: &[List]) -> Result<()> {
            if self.fail_lists {
                return Err(disk_full());
            }
            self.writes += 1;
            self.inner.save_lists(lists)
        }

        fn load_items(&self, list_id: &ListId) -> Result<Vec<Item>> {
            self.inner.load_items(list_id)
        }

        fn save_items(&mut self, list_id: &ListId, items: &[Item]) -> Result<()> {
            if self.fail_items_for.as_ref() == Some(list_id) {
                return Err(disk_full());
            }
            self.writes += 1;
            self.inner.save_items(list_id, items)
        }

        fn delete_items(&mut self, list_id: &ListId) -> Result<()> {
            self.writes += 1;
            self.inner.delete_items(list_id)
        }
    }

    fn session() -> Session<CountingStorage> {
        Session::open(CountingStorage::default(), ListDefaults::default()).unwrap()
    }

    fn add_list(session: &mut Session<CountingStorage>, name: &str) {
        session.open_list_modal(None).unwrap();
        session.dispatch_list_modal(ListModalAction::UpdateName(name.to_string()));
        session.submit_list_modal(true).unwrap();
    }

    #[test]
    fn blank_list_name_sets_error_without_saving() {
        let mut session = session();
        session.open_list_modal(None).unwrap();
        session.dispatch_list_modal(ListModalAction::UpdateName("   ".into()));

        assert_eq!(session.submit_list_modal(false).unwrap(), None);
        assert_eq!(session.list_modal().error.as_deref(), Some(LIST_NAME_REQUIRED));
        assert!(session.lists_page().is_list_modal_visible);
        assert_eq!(session.storage().writes, 0);
    }

    #[test]
    fn new_list_submit_navigates_to_its_items() {
        let mut session = session();
        add_list(&mut session, "First");
        session.open_list_modal(None).unwrap();
        session.dispatch_list_modal(ListModalAction::UpdateName("  Second ".into()));
        session.dispatch_list_modal(ListModalAction::UpdatePosition(Position::Top));

        let route = session.submit_list_modal(false).unwrap();

        assert_eq!(route, Some(Route::Items { list_index: 0 }));
        assert_eq!(session.lists_page().lists[0].name, "Second");
        assert!(!session.lists_page().is_list_modal_visible);
        let page = session.items_page().unwrap();
        assert_eq!(page.list_id, session.lists_page().lists[0].id);
        assert!(page.items.is_empty());
    }

    #[test]
    fn alt_submit_of_new_list_reopens_blank_modal() {
        let mut session = session();
        add_list(&mut session, "Groceries");

        assert!(session.lists_page().is_list_modal_visible);
        assert_eq!(session.lists_page().current_list_index, None);
        assert!(session.list_modal().name.is_empty());
        assert_eq!(session.lists_page().lists.len(), 1);
    }

    #[test]
    fn alt_submit_while_editing_walks_the_lists() {
        let mut session = session();
        add_list(&mut session, "A");
        add_list(&mut session, "B");
        session.close_list_modal().unwrap();

        session.open_list_modal(Some(0)).unwrap();
        session.dispatch_list_modal(ListModalAction::UpdateListType(ListType::ToDo));
        assert_eq!(session.submit_list_modal(true).unwrap(), None);

        assert_eq!(session.lists_page().lists[0].list_type, ListType::ToDo);
        assert_eq!(session.lists_page().current_list_index, Some(1));
        assert_eq!(session.list_modal().name, "B");

        session.submit_list_modal(true).unwrap();
        assert!(!session.lists_page().is_list_modal_visible);
        assert_eq!(session.lists_page().current_list_index, None);
    }

    #[test]
    fn alt_submit_after_moving_a_list_down_edits_its_old_follower() {
        let mut session = session();
        for name in ["A", "B", "C"] {
            add_list(&mut session, name);
        }
        session.close_list_modal().unwrap();

        session.open_list_modal(Some(0)).unwrap();
        session.dispatch_list_modal(ListModalAction::UpdatePosition(Position::Bottom));
        session.submit_list_modal(true).unwrap();

        let names: Vec<_> = session.lists_page().lists.iter().map(|l| l.name.as_str()).collect();
        assert_eq!(names, ["B", "C", "A"]);
        assert!(session.lists_page().is_list_modal_visible);
        assert_eq!(session.lists_page().current_list_index, Some(0));
        assert_eq!(session.list_modal().name, "B");
        assert_eq!(session.list_modal().current_index, Some(0));

        session.submit_list_modal(true).unwrap();
        assert_eq!(session.list_modal().name, "C");
    }

    #[test]
    fn alt_submit_after_moving_the_last_list_up_closes_the_modal() {
        let mut session = session();
        add_list(&mut session, "A");
        add_list(&mut session, "B");
        session.close_list_modal().unwrap();

        session.open_list_modal(Some(1)).unwrap();
        session.dispatch_list_modal(ListModalAction::UpdatePosition(Position::Top));
        session.submit_list_modal(true).unwrap();

        assert_eq!(session.lists_page().lists[0].name, "B");
        assert!(!session.lists_page().is_list_modal_visible);
        assert_eq!(session.lists_page().current_list_index, None);
    }

    #[test]
    fn editing_an_existing_list_stays_on_lists_screen() {
        let mut session = session();
        add_list(&mut session, "Old");
        session.open_list_modal(Some(0)).unwrap();
        session.dispatch_list_modal(ListModalAction::UpdateName("New".into()));

        assert_eq!(session.submit_list_modal(false).unwrap(), None);
        assert_eq!(session.lists_page().lists[0].name, "New");
        assert!(session.items_page().is_none());
    }

    #[test]
    fn new_item_uses_list_default_position() {
        let mut session = session();
        session.open_list_modal(None).unwrap();
        session.dispatch_list_modal(ListModalAction::UpdateName("Stack".into()));
        session.dispatch_list_modal(ListModalAction::UpdateDefaultNewItemPosition(NewItemPosition::Top));
        session.submit_list_modal(false).unwrap();

        for name in ["first", "second"] {
            session.open_item_modal(None).unwrap();
            assert_eq!(session.item_modal().position, Position::Top);
            session.dispatch_item_modal(ItemModalAction::UpdateName(name.into()));
            session.submit_item_modal(false).unwrap();
        }

        let names: Vec<_> = session.items_page().unwrap().items.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, ["second", "first"]);
        assert!(!session.items_page().unwrap().is_item_modal_visible);
    }

    #[test]
    fn blank_item_name_sets_error_without_saving() {
        let mut session = session();
        add_list(&mut session, "L");
        session.open_list(0).unwrap();
        let writes = session.storage().writes;

        session.open_item_modal(None).unwrap();
        session.submit_item_modal(false).unwrap();

        assert_eq!(session.item_modal().error.as_deref(), Some(ITEM_NAME_REQUIRED));
        assert_eq!(session.storage().writes, writes);
    }

    #[test]
    fn deleting_a_list_drops_its_items_and_closes_it() {
        let mut session = session();
        add_list(&mut session, "Doomed");
        session.open_list(0).unwrap();
        session.open_item_modal(None).unwrap();
        session.dispatch_item_modal(ItemModalAction::UpdateName("x".into()));
        session.submit_item_modal(false).unwrap();
        let list_id = session.lists_page().lists[0].id.clone();

        session.delete_lists().unwrap();

        assert!(session.lists_page().lists.is_empty());
        assert!(session.items_page().is_none());
        assert!(session.storage().inner.load_items(&list_id).is_err());
    }

    #[test]
    fn transfer_without_destination_reports_error() {
        let mut session = session();
        add_list(&mut session, "A");
        session.open_list(0).unwrap();
        session.open_move_items_modal().unwrap();
        let writes = session.storage().writes;

        assert!(!session.execute_transfer().unwrap());
        assert_eq!(
            session.move_items().error.as_deref(),
            Some("Select a list to copy items to")
        );
        assert_eq!(session.storage().writes, writes);
    }

    #[test]
    fn move_transfer_updates_open_list_and_storage() {
        let mut session = session();
        add_list(&mut session, "From");
        add_list(&mut session, "To");
        session.open_list(0).unwrap();
        for name in ["a", "b"] {
            session.open_item_modal(None).unwrap();
            session.dispatch_item_modal(ItemModalAction::UpdateName(name.into()));
            session.submit_item_modal(false).unwrap();
        }
        session.dispatch_items(ItemsPageAction::SelectItem { index: 1, is_selected: true }).unwrap();

        let to = session.lists_page().lists[1].id.clone();
        session.open_move_items_modal().unwrap();
        session.dispatch_move_items(MoveItemsAction::UpdateAction(TransferAction::Move));
        session.dispatch_move_items(MoveItemsAction::UpdateDestination(Some(to.clone())));

        assert!(session.execute_transfer().unwrap());

        let page = session.items_page().unwrap();
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.items[0].name, "a");
        assert!(!page.is_copy_move_modal_visible);
        let moved = session.storage().inner.load_items(&to).unwrap();
        assert_eq!(moved, vec![Item::new("b", "", 1, false)]);
    }

    #[test]
    fn failed_destination_save_leaves_source_items_in_storage() {
        let mut session = session();
        add_list(&mut session, "From");
        add_list(&mut session, "To");
        session.close_list_modal().unwrap();
        let from = session.lists_page().lists[0].id.clone();
        let to = session.lists_page().lists[1].id.clone();
        session
            .storage
            .inner
            .save_items(&from, &[Item::new("a", "", 1, false), Item::new("b", "", 1, false)])
            .unwrap();

        session.open_list(1).unwrap();
        session.open_move_items_modal().unwrap();
        session.dispatch_move_items(MoveItemsAction::UpdateAction(TransferAction::Move));
        session.dispatch_move_items(MoveItemsAction::UpdateSource(Some(from.clone())));
        session.dispatch_move_items(MoveItemsAction::UpdateDestination(Some(to.clone())));
        session.storage.fail_items_for = Some(to);

        let err = session.execute_transfer().unwrap_err();

        assert!(matches!(err, ListkeeperError::Storage(_)));
        assert_eq!(session.storage().inner.load_items(&from).unwrap().len(), 2);
        assert!(session.items_page().unwrap().items.is_empty());
    }

    #[test]
    fn failed_root_save_during_import_writes_no_items() {
        let mut session = session();
        add_list(&mut session, "Groceries");
        session.close_list_modal().unwrap();
        let text = crate::interchange::export_lists(&[
            List::new("Trip", ListType::ToDo, NewItemPosition::Bottom).with_items(vec![Item::new("tent", "", 1, false)]),
        ])
        .unwrap();
        let collections = session.storage().inner.item_collection_count();
        session.storage.fail_lists = true;

        let err = session.import_lists(&text).unwrap_err();

        assert!(matches!(err, ListkeeperError::Storage(_)));
        assert_eq!(session.storage().inner.item_collection_count(), collections);
    }

    #[test]
    fn dispatch_items_without_open_list_is_not_found() {
        let mut session = session();
        let err = session.dispatch_items(ItemsPageAction::DeleteItems).unwrap_err();
        assert!(matches!(err, ListkeeperError::NotFound(_)));
    }
}
