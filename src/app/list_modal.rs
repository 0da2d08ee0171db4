//! State of the add/update list modal.
//!
//! Same error policy as the item modal: edits clear `error`, an explicit
//! [`ListModalAction::UpdateError`] sets it, and [`ListModalAction::Replace`] swaps
//! the whole state when chaining to the next list.

use crate::domain::{List, ListType, NewItemPosition, Position};

/// Fields of the add/update list modal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListModalState {
    pub name: String,
    pub list_type: ListType,
    pub default_new_item_position: NewItemPosition,
    pub position: Position,
    pub error: Option<String>,
    /// Index of the list being edited, `None` when adding.
    pub current_index: Option<usize>,
}

/// Values pre-filled into the modal when adding a list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ListDefaults {
    pub list_type: ListType,
    pub default_new_item_position: NewItemPosition,
}

impl ListModalState {
    /// Blank modal for a new list; new lists go to the bottom unless changed.
    #[must_use]
    pub fn for_new(defaults: ListDefaults) -> Self {
        Self {
            name: String::new(),
            list_type: defaults.list_type,
            default_new_item_position: defaults.default_new_item_position,
            position: Position::Bottom,
            error: None,
            current_index: None,
        }
    }

    #[must_use]
    pub fn for_existing(index: usize, list: &List) -> Self {
        Self {
            name: list.name.clone(),
            list_type: list.list_type,
            default_new_item_position: list.default_new_item_position,
            position: Position::Current,
            error: None,
            current_index: Some(index),
        }
    }

    #[must_use]
    pub const fn is_adding(&self) -> bool {
        self.current_index.is_none()
    }

    /// Applies one action and returns the next state.
    #[must_use]
    pub fn reduce(self, action: ListModalAction) -> Self {
        tracing::trace!(action = ?action, "list modal action");

        match action {
            ListModalAction::UpdateName(name) => Self { name, error: None, ..self },
            ListModalAction::UpdateListType(list_type) => Self { list_type, error: None, ..self },
            ListModalAction::UpdateDefaultNewItemPosition(default_new_item_position) => Self {
                default_new_item_position,
                error: None,
                ..self
            },
            ListModalAction::UpdatePosition(position) => Self { position, error: None, ..self },
            ListModalAction::UpdateError(error) => Self { error: Some(error), ..self },
            ListModalAction::Replace(state) => *state,
        }
    }
}

impl Default for ListModalState {
    fn default() -> Self {
        Self::for_new(ListDefaults::default())
    }
}

/// Actions accepted by [`ListModalState::reduce`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListModalAction {
    UpdateName(String),
    UpdateListType(ListType),
    UpdateDefaultNewItemPosition(NewItemPosition),
    UpdatePosition(Position),
    UpdateError(String),
    Replace(Box<ListModalState>),
}
