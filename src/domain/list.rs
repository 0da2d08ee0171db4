//! List domain model.
//!
//! A [`List`] groups an ordered collection of [`Item`]s under a name and a
//! [`ListType`]. Its identifier is assigned once at creation and is the key under
//! which the list's items are persisted; the items themselves are only resident
//! when a flow has loaded them.

use super::item::Item;
use super::position::NewItemPosition;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque, stable identifier of a list.
///
/// Generated from a random v4 UUID when the list is created and never changed
/// afterwards, including across edits and reorders.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ListId(String);

impl ListId {
    /// Creates a fresh random identifier.
    #[must_use]
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().simple().to_string())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for ListId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for ListId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl fmt::Display for ListId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Kind of list, which decides how the items screen presents completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ListType {
    #[default]
    #[serde(rename = "List")]
    List,
    #[serde(rename = "Shopping")]
    Shopping,
    #[serde(rename = "To-Do")]
    ToDo,
    #[serde(rename = "Ordered To-Do")]
    OrderedToDo,
}

impl ListType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::List => "List",
            Self::Shopping => "Shopping",
            Self::ToDo => "To-Do",
            Self::OrderedToDo => "Ordered To-Do",
        }
    }
}

impl fmt::Display for ListType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A named, ordered collection of items.
///
/// `items` is in display order, which is also the persisted order. It is empty
/// whenever the list was loaded from the lists root without fetching its items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct List {
    pub id: ListId,
    pub name: String,
    pub list_type: ListType,
    pub default_new_item_position: NewItemPosition,
    pub is_selected: bool,
    pub is_locked: bool,
    pub items: Vec<Item>,
}

impl List {
    /// Creates an empty, unselected, unlocked list with a freshly generated id.
    ///
    /// # Examples
    ///
    /// ```
    /// use listkeeper::{List, ListType, NewItemPosition};
    ///
    /// let list = List::new("Groceries", ListType::Shopping, NewItemPosition::Top);
    /// assert_eq!(list.name, "Groceries");
    /// assert!(list.items.is_empty());
    /// ```
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        list_type: ListType,
        default_new_item_position: NewItemPosition,
    ) -> Self {
        Self {
            id: ListId::generate(),
            name: name.into(),
            list_type,
            default_new_item_position,
            is_selected: false,
            is_locked: false,
            items: Vec::new(),
        }
    }

    /// Returns the list renamed to `name`. The id is kept.
    #[must_use]
    pub fn with_name(self, name: impl Into<String>) -> Self {
        Self { name: name.into(), ..self }
    }

    /// Returns the list with a different [`ListType`].
    #[must_use]
    pub fn with_list_type(self, list_type: ListType) -> Self {
        Self { list_type, ..self }
    }

    /// Changes where the add-item modal places new items by default.
    ///
    /// # Parameters
    ///
    /// * `default_new_item_position` - `top` or `bottom`; `current` has no
    ///   meaning when inserting and is not representable here
    #[must_use]
    pub fn with_default_new_item_position(self, default_new_item_position: NewItemPosition) -> Self {
        Self { default_new_item_position, ..self }
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

    /// Replaces the resident items.
    ///
    /// Items are stored apart from the lists root, so lists loaded from storage
    /// carry an empty `items` until they are attached here, as export does.
    #[must_use]
    pub fn with_items(self, items: Vec<Item>) -> Self {
        Self { items, ..self }
    }
}
