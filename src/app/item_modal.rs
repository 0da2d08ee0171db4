//! State of the add/update item modal.
//!
//! Holds the fields being edited and a validation error. Every field edit clears
//! the error; only [`ItemModalAction::UpdateError`] sets it. [`ItemModalAction::Replace`]
//! swaps the whole state when the modal chains to the next item.

use crate::domain::{Item, Position};

/// Quantity pre-filled for a new item.
pub const DEFAULT_QUANTITY: u32 = 1;

/// Fields of the add/update item modal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemModalState {
    pub name: String,
    pub notes: String,
    pub quantity: u32,
    pub position: Position,
    pub is_locked: bool,
    pub error: Option<String>,
    /// Index of the item being edited, `None` when adding.
    pub current_index: Option<usize>,
}

impl ItemModalState {
    /// Blank modal for a new item placed at `position`.
    #[must_use]
    pub fn for_new(position: Position) -> Self {
        Self {
            name: String::new(),
            notes: String::new(),
            quantity: DEFAULT_QUANTITY,
            position,
            is_locked: false,
            error: None,
            current_index: None,
        }
    }

    /// Modal pre-filled from an existing item, kept at its current slot by default.
    #[must_use]
    pub fn for_existing(index: usize, item: &Item) -> Self {
        Self {
            name: item.name.clone(),
            notes: item.notes.clone(),
            quantity: item.quantity,
            position: Position::Current,
            is_locked: item.is_locked,
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
    pub fn reduce(self, action: ItemModalAction) -> Self {
        tracing::trace!(action = ?action, "item modal action");

        match action {
            ItemModalAction::UpdateName(name) => Self { name, error: None, ..self },
            ItemModalAction::UpdateNotes(notes) => Self { notes, error: None, ..self },
            ItemModalAction::UpdateQuantity(quantity) => Self { quantity, error: None, ..self },
            ItemModalAction::UpdatePosition(position) => Self { position, error: None, ..self },
            ItemModalAction::UpdateIsLocked(is_locked) => Self { is_locked, error: None, ..self },
            ItemModalAction::UpdateError(error) => Self { error: Some(error), ..self },
            ItemModalAction::Replace(state) => *state,
        }
    }
}

impl Default for ItemModalState {
    fn default() -> Self {
        Self::for_new(Position::Bottom)
    }
}

/// Actions accepted by [`ItemModalState::reduce`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemModalAction {
    UpdateName(String),
    UpdateNotes(String),
    UpdateQuantity(u32),
    UpdatePosition(Position),
    UpdateIsLocked(bool),
    UpdateError(String),
    Replace(Box<ItemModalState>),
}
