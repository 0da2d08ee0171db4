//! Ordered-collection operations shared by lists-of-lists and lists-of-items.
//!
//! Every function here takes a borrowed slice and returns a new `Vec`; inputs are
//! never mutated. The same operations serve the lists screen (over [`List`]) and
//! the items screen (over [`Item`]) through the [`Selectable`] trait.
//!
//! # Modules
//!
//! - [`transfer`]: Copy/move of items between two collections

pub mod transfer;

pub use transfer::{transfer, Transfer, TransferAction};

use crate::domain::error::{ListkeeperError, Result};
use crate::domain::{Item, List};

/// An element that carries a per-collection selection flag.
pub trait Selectable: Clone {
    fn is_selected(&self) -> bool;

    /// Returns a copy with the selection flag replaced.
    #[must_use]
    fn with_selected(self, is_selected: bool) -> Self;
}

impl Selectable for Item {
    fn is_selected(&self) -> bool {
        self.is_selected
    }

    fn with_selected(self, is_selected: bool) -> Self {
        Item::with_selected(self, is_selected)
    }
}

impl Selectable for List {
    fn is_selected(&self) -> bool {
        self.is_selected
    }

    fn with_selected(self, is_selected: bool) -> Self {
        List::with_selected(self, is_selected)
    }
}

/// Returns `true` if at least one element is selected.
#[must_use]
pub fn any_selected<T: Selectable>(collection: &[T]) -> bool {
    collection.iter().any(Selectable::is_selected)
}

/// Returns a new collection with `element` spliced in at `index`.
///
/// # Errors
///
/// Returns `IndexOutOfRange` if `index` is greater than the collection length.
///
/// # Example
///
/// ```
/// use listkeeper::collection::insert_at;
///
/// let out = insert_at("b", &["a", "c"], 1)?;
/// assert_eq!(out, vec!["a", "b", "c"]);
/// # Ok::<(), listkeeper::ListkeeperError>(())
/// ```
pub fn insert_at<T: Clone>(element: T, collection: &[T], index: usize) -> Result<Vec<T>> {
    if index > collection.len() {
        return Err(ListkeeperError::IndexOutOfRange {
            index,
            len: collection.len(),
        });
    }

    let mut out = Vec::with_capacity(collection.len() + 1);
    out.extend_from_slice(&collection[..index]);
    out.push(element);
    out.extend_from_slice(&collection[index..]);
    Ok(out)
}

/// Removes the element at `old_index`, then inserts `element` at `new_index`.
///
/// `new_index` is interpreted against the collection *after* removal, which is
/// how [`resolve_index`](crate::domain::resolve_index) computes `Bottom` for a
/// replacement. Moving the last element to the bottom is therefore a plain
/// in-place replacement.
///
/// # Errors
///
/// Returns `IndexOutOfRange` if `old_index` does not name an element, or if
/// `new_index` exceeds the post-removal length.
pub fn move_and_replace<T: Clone>(
    element: T,
    collection: &[T],
    old_index: usize,
    new_index: usize,
) -> Result<Vec<T>> {
    if old_index >= collection.len() {
        return Err(ListkeeperError::IndexOutOfRange {
            index: old_index,
            len: collection.len(),
        });
    }

    let mut remaining = collection.to_vec();
    remaining.remove(old_index);
    insert_at(element, &remaining, new_index)
}

/// Deletes the selected elements, or every element when none is selected.
///
/// The "nothing selected means everything" rule is specific to deletion and
/// transfer; the screens only offer a blanket delete after confirmation.
#[must_use]
pub fn delete_selected_or_all<T: Selectable>(collection: &[T]) -> Vec<T> {
    if !any_selected(collection) {
        tracing::debug!(count = collection.len(), "nothing selected, deleting all");
        return Vec::new();
    }

    let kept: Vec<T> = collection
        .iter()
        .filter(|element| !element.is_selected())
        .cloned()
        .collect();

    tracing::debug!(
        deleted = collection.len() - kept.len(),
        kept = kept.len(),
        "deleted selected elements"
    );
    kept
}

/// Returns a new collection with only the element at `index` (de)selected.
///
/// # Errors
///
/// Returns `IndexOutOfRange` if `index` does not name an element.
pub fn set_selected<T: Selectable>(collection: &[T], index: usize, is_selected: bool) -> Result<Vec<T>> {
    if index >= collection.len() {
        return Err(ListkeeperError::IndexOutOfRange {
            index,
            len: collection.len(),
        });
    }

    Ok(collection
        .iter()
        .enumerate()
        .map(|(i, element)| {
            if i == index {
                element.clone().with_selected(is_selected)
            } else {
                element.clone()
            }
        })
        .collect())
}

/// Returns a new collection with every element's selection set to `is_selected`.
#[must_use]
pub fn set_all_selected<T: Selectable>(collection: &[T], is_selected: bool) -> Vec<T> {
    collection
        .iter()
        .map(|element| element.clone().with_selected(is_selected))
        .collect()
}
