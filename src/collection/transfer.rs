//! Copy and move of elements between two collections.
//!
//! The engine works on a source and a destination at once and returns both new
//! collections together, so the two sides can never disagree about what was
//! transferred. It has no notion of which side is the list currently on screen;
//! callers assign the roles before invoking it.

use super::{any_selected, Selectable};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Whether transferred elements stay in the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TransferAction {
    #[default]
    Copy,
    Move,
}

impl fmt::Display for TransferAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Copy => f.write_str("copy"),
            Self::Move => f.write_str("move"),
        }
    }
}

/// Both sides of a finished transfer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transfer<T> {
    pub source: Vec<T>,
    pub destination: Vec<T>,
}

/// Copies or moves elements from `source` to the end of `destination`.
///
/// # Algorithm
///
/// 1. The transfer set is the selected elements of `source`, or all of `source`
///    when nothing is selected.
/// 2. Each transferred element is deselected and appended to `destination` in its
///    original relative order. Existing destination elements are untouched.
/// 3. `Move` drops the transfer set from the source; survivors keep their order and
///    selection. `Copy` keeps the source intact but deselects the transferred
///    elements in place.
///
/// An empty source yields both inputs unchanged.
///
/// # Example
///
/// ```
/// use listkeeper::collection::{transfer, TransferAction};
/// use listkeeper::Item;
///
/// let source = vec![Item::new("A", "", 1, false), Item::new("B", "", 1, false).with_selected(true)];
/// let destination = vec![Item::new("X", "", 1, false)];
///
/// let out = transfer(TransferAction::Move, &source, &destination);
/// assert_eq!(out.source.len(), 1);
/// assert_eq!(out.destination[1].name, "B");
/// assert!(!out.destination[1].is_selected);
/// ```
#[must_use]
pub fn transfer<T: Selectable>(action: TransferAction, source: &[T], destination: &[T]) -> Transfer<T> {
    let whole_source = !any_selected(source);
    let in_transfer_set = |element: &T| whole_source || element.is_selected();

    let mut new_destination = destination.to_vec();
    new_destination.extend(
        source
            .iter()
            .filter(|&element| in_transfer_set(element))
            .map(|element| element.clone().with_selected(false)),
    );

    let new_source: Vec<T> = match action {
        TransferAction::Move => source
            .iter()
            .filter(|&element| !in_transfer_set(element))
            .cloned()
            .collect(),
        TransferAction::Copy => source
            .iter()
            .map(|element| element.clone().with_selected(false))
            .collect(),
    };

    tracing::debug!(
        %action,
        whole_source,
        transferred = new_destination.len() - destination.len(),
        source_remaining = new_source.len(),
        "transfer computed"
    );

    Transfer {
        source: new_source,
        destination: new_destination,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Item;

    fn item(name: &str) -> Item {
        Item::new(name, "", 1, false)
    }

    fn selected(name: &str) -> Item {
        item(name).with_selected(true)
    }

    fn names(items: &[Item]) -> Vec<&str> {
        items.iter().map(|i| i.name.as_str()).collect()
    }

    fn mixed_source() -> Vec<Item> {
        vec![item("A"), selected("B"), item("C"), selected("D"), selected("E")]
    }

    #[test]
    fn copy_appends_selection_and_clears_it_on_both_sides() {
        let out = transfer(TransferAction::Copy, &mixed_source(), &[item("X")]);

        assert_eq!(names(&out.destination), ["X", "B", "D", "E"]);
        assert!(out.destination.iter().all(|i| !i.is_selected));

        assert_eq!(names(&out.source), ["A", "B", "C", "D", "E"]);
        assert!(out.source.iter().all(|i| !i.is_selected));
    }

    #[test]
    fn move_removes_selection_from_source() {
        let out = transfer(TransferAction::Move, &mixed_source(), &[item("X")]);

        assert_eq!(names(&out.source), ["A", "C"]);
        assert_eq!(names(&out.destination), ["X", "B", "D", "E"]);
        assert!(out.destination.iter().all(|i| !i.is_selected));
    }

    #[test]
    fn empty_selection_copies_everything() {
        let source = vec![item("A"), item("B")];
        let out = transfer(TransferAction::Copy, &source, &[item("C")]);

        assert_eq!(names(&out.destination), ["C", "A", "B"]);
        assert_eq!(out.source, source);
    }

    #[test]
    fn empty_selection_moves_everything() {
        let source = vec![item("A"), item("B")];
        let out = transfer(TransferAction::Move, &source, &[item("C")]);

        assert!(out.source.is_empty());
        assert_eq!(names(&out.destination), ["C", "A", "B"]);
    }

    #[test]
    fn destination_selection_is_preserved() {
        let out = transfer(TransferAction::Copy, &[selected("A")], &[selected("X")]);
        assert!(out.destination[0].is_selected);
        assert!(!out.destination[1].is_selected);
    }

    #[test]
    fn empty_source_changes_nothing() {
        let destination = vec![item("X"), selected("Y")];
        for action in [TransferAction::Copy, TransferAction::Move] {
            let out = transfer::<Item>(action, &[], &destination);
            assert!(out.source.is_empty());
            assert_eq!(out.destination, destination);
        }
    }

    #[test]
    fn other_item_fields_survive_the_trip() {
        let source = vec![Item::new("Flour", "bread", 3, true).with_complete(true).with_selected(true)];
        let out = transfer(TransferAction::Move, &source, &[]);

        let moved = &out.destination[0];
        assert_eq!(moved.notes, "bread");
        assert_eq!(moved.quantity, 3);
        assert!(moved.is_locked);
        assert!(moved.is_complete);
    }
}
