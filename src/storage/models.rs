//! Storage record models for the persistence layer.
//!
//! A stored list is its metadata only; items live in a separate collection keyed
//! by list id. Keeping the record apart from the domain [`List`] means the items
//! field can never be written into the lists root by accident.

use crate::domain::{List, ListId, ListType, NewItemPosition};
use serde::{Deserialize, Serialize};

/// A list as written to the lists root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListRecord {
    pub id: ListId,
    pub name: String,
    pub list_type: ListType,
    pub default_new_item_position: NewItemPosition,
    #[serde(default)]
    pub is_selected: bool,
    #[serde(default)]
    pub is_locked: bool,
}

impl From<&List> for ListRecord {
    fn from(list: &List) -> Self {
        Self {
            id: list.id.clone(),
            name: list.name.clone(),
            list_type: list.list_type,
            default_new_item_position: list.default_new_item_position,
            is_selected: list.is_selected,
            is_locked: list.is_locked,
        }
    }
}

impl From<ListRecord> for List {
    fn from(record: ListRecord) -> Self {
        Self {
            id: record.id,
            name: record.name,
            list_type: record.list_type,
            default_new_item_position: record.default_new_item_position,
            is_selected: record.is_selected,
            is_locked: record.is_locked,
            items: Vec::new(),
        }
    }
}
