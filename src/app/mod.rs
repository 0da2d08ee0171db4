//! Application layer: screen state machines and the session that drives them.
//!
//! Every screen and modal is a pure reducer, `state.reduce(action) -> state`, over
//! a closed action enum. Reducers never touch storage. [`Session`] owns one
//! instance of each state together with a [`ListStorage`](crate::storage::ListStorage)
//! and performs persistence after a reducer has produced its next state.
//!
//! # Architecture
//!
//! ```text
//! View layer → Session::dispatch_* / submit_* → reducer → next state
//!                                                   ↓
//!                                   ListStorage::save_* (when changed)
//!                                                   ↓
//!                                   Option<Route> back to the view layer
//! ```
//!
//! # Modules
//!
//! - [`lists_page`]: Lists screen (add, edit, delete, select, chaining)
//! - [`items_page`]: Items screen for one list
//! - [`list_modal`]: Add/update list modal fields
//! - [`item_modal`]: Add/update item modal fields
//! - [`move_items`]: Copy/move modal choices and validation
//! - [`navigation`]: Navigation effects emitted to the routing layer
//! - [`session`]: State and dispatcher with persistence side effects

pub mod item_modal;
pub mod items_page;
pub mod list_modal;
pub mod lists_page;
pub mod move_items;
pub mod navigation;
pub mod session;

pub use item_modal::{ItemModalAction, ItemModalState};
pub use items_page::{ItemsPageAction, ItemsPageState};
pub use list_modal::{ListDefaults, ListModalAction, ListModalState};
pub use lists_page::{ListsPageAction, ListsPageState};
pub use move_items::{MoveItemsAction, MoveItemsState, TransferPlan};
pub use navigation::Route;
pub use session::Session;

/// Next modal state after a "save and next" submit.
///
/// Adding (`None`) keeps the modal open for another new element. Editing advances
/// to the following index, or closes the modal after the last element.
pub(crate) const fn chain_next(current: Option<usize>, len: usize) -> (bool, Option<usize>) {
    match current {
        None => (true, None),
        Some(index) if index + 1 < len => (true, Some(index + 1)),
        Some(_) => (false, None),
    }
}

/// Index, after an edit moved `old_index` to `new_index`, of the element that
/// followed the edited one before the move.
///
/// `None` when the edited element was the last of `len_before`.
pub(crate) const fn follower_index(old_index: usize, new_index: usize, len_before: usize) -> Option<usize> {
    if old_index + 1 >= len_before {
        return None;
    }
    if new_index > old_index {
        Some(old_index)
    } else {
        Some(old_index + 1)
    }
}
