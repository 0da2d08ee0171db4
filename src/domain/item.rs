//! Item domain model.
//!
//! An [`Item`] is one entry of a list: a grocery, a task, a step. Items are plain
//! values owned by the enclosing list's item collection. Every change produces a new
//! value through one of the `with_*` transformations; nothing edits an item in place.

use serde::{Deserialize, Serialize};

/// A single entry in a list.
///
/// The serialized field names match the interchange format exactly
/// (`name`, `notes`, `quantity`, `isComplete`, `isSelected`, `isLocked`).
///
/// An empty `name` is allowed on the value itself; callers that persist items are
/// responsible for rejecting blank names.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub name: String,
    pub notes: String,
    pub quantity: u32,
    pub is_complete: bool,
    pub is_selected: bool,
    pub is_locked: bool,
}

impl Item {
    /// Creates an item as the add-item flow does: not complete, not selected.
    ///
    /// # Examples
    ///
    /// ```
    /// use listkeeper::Item;
    ///
    /// let item = Item::new("Milk", "2%", 2, false);
    /// assert_eq!(item.name, "Milk");
    /// assert!(!item.is_complete);
    /// assert!(!item.is_selected);
    /// ```
    #[must_use]
    pub fn new(name: impl Into<String>, notes: impl Into<String>, quantity: u32, is_locked: bool) -> Self {
        Self {
            name: name.into(),
            notes: notes.into(),
            quantity,
            is_complete: false,
            is_selected: false,
            is_locked,
        }
    }

    /// Returns the item renamed to `name`, every other field unchanged.
    ///
    /// The `with_*` methods consume the item and are meant to be chained:
    ///
    /// ```
    /// use listkeeper::Item;
    ///
    /// let edited = Item::new("Milk", "", 1, false).with_name("Oat milk").with_quantity(2);
    /// assert_eq!(edited.name, "Oat milk");
    /// assert_eq!(edited.quantity, 2);
    /// ```
    #[must_use]
    pub fn with_name(self, name: impl Into<String>) -> Self {
        Self { name: name.into(), ..self }
    }

    /// Returns the item with `notes` replacing its notes.
    #[must_use]
    pub fn with_notes(self, notes: impl Into<String>) -> Self {
        Self { notes: notes.into(), ..self }
    }

    /// Returns the item with a new quantity. Zero is allowed.
    #[must_use]
    pub fn with_quantity(self, quantity: u32) -> Self {
        Self { quantity, ..self }
    }

    /// Marks the item complete or not complete.
    ///
    /// # Parameters
    ///
    /// * `is_complete` - New completion flag; applied even when the item is locked
    #[must_use]
    pub fn with_complete(self, is_complete: bool) -> Self {
        Self { is_complete, ..self }
    }

    /// Sets the bulk-selection flag.
    #[must_use]
    pub fn with_selected(self, is_selected: bool) -> Self {
        Self { is_selected, ..self }
    }

    /// Sets the locked flag.
    #[must_use]
    pub fn with_locked(self, is_locked: bool) -> Self {
        Self { is_locked, ..self }
    }
}
