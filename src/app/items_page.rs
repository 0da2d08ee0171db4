//! Items screen state machine.
//!
//! The item-granularity twin of the lists screen: the same positional insert,
//! selection and delete rules over one list's items, plus completion toggles and
//! the visibility of the copy/move modal.

use super::chain_next;
use crate::collection::{delete_selected_or_all, insert_at, move_and_replace, set_all_selected, set_selected};
use crate::domain::error::{ListkeeperError, Result};
use crate::domain::{resolve_index, Item, ListId, Position};

/// State of the items screen for one list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemsPageState {
    pub list_id: ListId,
    pub items: Vec<Item>,
    pub is_delete_all_modal_visible: bool,
    pub is_item_modal_visible: bool,
    pub is_copy_move_modal_visible: bool,
    /// Item being edited in the modal, `None` when adding.
    pub current_item_index: Option<usize>,
}

/// Actions accepted by [`ItemsPageState::reduce`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemsPageAction {
    ReplaceItems(Vec<Item>),
    AddItem {
        item: Item,
        position: Position,
    },
    UpdateItem {
        index: usize,
        item: Item,
        position: Position,
    },
    DeleteItems,
    SelectItem {
        index: usize,
        is_selected: bool,
    },
    SelectAllItems(bool),
    CompleteItem {
        index: usize,
        is_complete: bool,
    },
    UpdateDeleteAllModalVisible(bool),
    UpdateItemModalVisible {
        is_visible: bool,
        current_item_index: Option<usize>,
    },
    UpdateCopyMoveModalVisible(bool),
    ItemModalAltAction,
}

impl ItemsPageState {
    #[must_use]
    pub const fn new(list_id: ListId, items: Vec<Item>) -> Self {
        Self {
            list_id,
            items,
            is_delete_all_modal_visible: false,
            is_item_modal_visible: false,
            is_copy_move_modal_visible: false,
            current_item_index: None,
        }
    }

    /// Applies one action and returns the next state.
    ///
    /// # Errors
    ///
    /// Propagates `InvalidPosition` and `IndexOutOfRange` for bad positions or
    /// indices passed by the caller.
    pub fn reduce(self, action: ItemsPageAction) -> Result<Self> {
        let _span = tracing::debug_span!("items_page_reduce", list_id = %self.list_id).entered();
        tracing::trace!(action = ?action, "items page action");

        let next = match action {
            ItemsPageAction::ReplaceItems(items) => Self { items, ..self },
            ItemsPageAction::AddItem { item, position } => {
                if item.name.trim().is_empty() {
                    tracing::debug!("ignoring item with blank name");
                    return Ok(Self { is_item_modal_visible: false, ..self });
                }
                let index = resolve_index(position, 0, self.items.len(), true)?;
                Self {
                    items: insert_at(item, &self.items, index)?,
                    is_item_modal_visible: false,
                    ..self
                }
            }
            ItemsPageAction::UpdateItem { index, item, position } => {
                if item.name.trim().is_empty() {
                    tracing::debug!(index, "ignoring item update with blank name");
                    return Ok(Self { is_item_modal_visible: false, ..self });
                }
                let new_index = resolve_index(position, index, self.items.len(), false)?;
                Self {
                    items: move_and_replace(item, &self.items, index, new_index)?,
                    is_item_modal_visible: false,
                    ..self
                }
            }
            ItemsPageAction::DeleteItems => Self {
                items: delete_selected_or_all(&self.items),
                ..self
            },
            ItemsPageAction::SelectItem { index, is_selected } => Self {
                items: set_selected(&self.items, index, is_selected)?,
                ..self
            },
            ItemsPageAction::SelectAllItems(is_selected) => Self {
                items: set_all_selected(&self.items, is_selected),
                ..self
            },
            ItemsPageAction::CompleteItem { index, is_complete } => {
                let Some(item) = self.items.get(index).cloned() else {
                    return Err(ListkeeperError::IndexOutOfRange {
                        index,
                        len: self.items.len(),
                    });
                };
                Self {
                    items: move_and_replace(item.with_complete(is_complete), &self.items, index, index)?,
                    ..self
                }
            }
            ItemsPageAction::UpdateDeleteAllModalVisible(is_visible) => Self {
                is_delete_all_modal_visible: is_visible,
                ..self
            },
            ItemsPageAction::UpdateItemModalVisible {
                is_visible,
                current_item_index,
            } => Self {
                is_item_modal_visible: is_visible,
                current_item_index,
                ..self
            },
            ItemsPageAction::UpdateCopyMoveModalVisible(is_visible) => Self {
                is_copy_move_modal_visible: is_visible,
                ..self
            },
            ItemsPageAction::ItemModalAltAction => {
                let (is_visible, current_item_index) = chain_next(self.current_item_index, self.items.len());
                Self {
                    is_item_modal_visible: is_visible,
                    current_item_index,
                    ..self
                }
            }
        };

        tracing::debug!(item_count = next.items.len(), "items page updated");
        Ok(next)
    }
}
