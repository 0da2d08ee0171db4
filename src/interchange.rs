//! Import/export interchange format.
//!
//! Lists are exchanged as text: a JSON array of list objects, each carrying its
//! items, encoded with standard base64.
//!
//! ```json
//! [
//!   {
//!     "name": "Groceries",
//!     "listType": "Shopping",
//!     "defaultNewItemPosition": "bottom",
//!     "isSelected": false,
//!     "isLocked": false,
//!     "items": [
//!       { "name": "Milk", "notes": "", "quantity": 1, "isComplete": false, "isSelected": false, "isLocked": false }
//!     ]
//!   }
//! ]
//! ```
//!
//! Ids are not part of the format. Imported lists get fresh ids and arrive with
//! every selection flag cleared.

use crate::domain::error::{ImportError, ListkeeperError, Result};
use crate::domain::{Item, List, ListType, NewItemPosition};
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use serde::{Deserialize, Serialize};

/// One list as it appears in interchange text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListJson {
    pub name: String,
    pub list_type: ListType,
    pub default_new_item_position: NewItemPosition,
    #[serde(default)]
    pub is_selected: bool,
    #[serde(default)]
    pub is_locked: bool,
    #[serde(default)]
    pub items: Vec<Item>,
}

impl From<&List> for ListJson {
    fn from(list: &List) -> Self {
        Self {
            name: list.name.clone(),
            list_type: list.list_type,
            default_new_item_position: list.default_new_item_position,
            is_selected: list.is_selected,
            is_locked: list.is_locked,
            items: list.items.clone(),
        }
    }
}

impl From<ListJson> for List {
    fn from(json: ListJson) -> Self {
        let items = json.items.into_iter().map(|item| item.with_selected(false)).collect();
        Self::new(json.name, json.list_type, json.default_new_item_position)
            .with_locked(json.is_locked)
            .with_items(items)
    }
}

/// Encodes lists, with their resident items, as interchange text.
///
/// # Errors
///
/// Returns a `Storage` error if serialization fails.
///
/// # Examples
///
/// ```
/// use listkeeper::interchange::{export_lists, import_lists};
/// use listkeeper::{Item, List, ListType, NewItemPosition};
///
/// let list = List::new("Groceries", ListType::Shopping, NewItemPosition::Bottom)
///     .with_items(vec![Item::new("Milk", "", 1, false)]);
///
/// let text = export_lists(&[list])?;
/// let imported = import_lists(&text)?;
/// assert_eq!(imported[0].items[0].name, "Milk");
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn export_lists(lists: &[List]) -> Result<String> {
    let _span = tracing::debug_span!("export_lists", count = lists.len()).entered();

    let payload: Vec<ListJson> = lists.iter().map(ListJson::from).collect();
    let json = serde_json::to_vec(&payload)
        .map_err(|e| ListkeeperError::Storage(format!("failed to serialize lists: {e}")))?;

    Ok(STANDARD.encode(json))
}

/// Decodes interchange text into new lists.
///
/// Surrounding whitespace is ignored.
///
/// # Errors
///
/// - [`ImportError::NoData`] if the text is empty
/// - [`ImportError::InvalidBase64`] if it is not base64
/// - [`ImportError::InvalidJson`] if the decoded bytes are not a list array
pub fn import_lists(text: &str) -> std::result::Result<Vec<List>, ImportError> {
    let _span = tracing::debug_span!("import_lists", len = text.len()).entered();

    let text = text.trim();
    if text.is_empty() {
        return Err(ImportError::NoData);
    }

    let bytes = STANDARD.decode(text).map_err(|e| {
        tracing::debug!(error = %e, "import text is not base64");
        ImportError::InvalidBase64(e)
    })?;
    let payload: Vec<ListJson> = serde_json::from_slice(&bytes).map_err(|e| {
        tracing::debug!(error = %e, "import payload is not a list array");
        ImportError::InvalidJson(e)
    })?;

    tracing::debug!(count = payload.len(), "lists imported");
    Ok(payload.into_iter().map(List::from).collect())
}
