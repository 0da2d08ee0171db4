//! Lists screen state machine.
//!
//! [`ListsPageState::reduce`] is a pure transition over the collection of lists and
//! the visibility of the screen's two modals. Persistence happens afterwards, in
//! [`Session`](crate::app::Session).

use super::chain_next;
use crate::collection::{delete_selected_or_all, insert_at, move_and_replace, set_all_selected, set_selected};
use crate::domain::error::Result;
use crate::domain::{resolve_index, List, Position};

/// State of the lists screen.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ListsPageState {
    pub lists: Vec<List>,
    pub is_delete_all_modal_visible: bool,
    pub is_list_modal_visible: bool,
    /// List being edited in the modal, `None` when adding a new one.
    pub current_list_index: Option<usize>,
}

/// Actions accepted by [`ListsPageState::reduce`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListsPageAction {
    ReplaceLists(Vec<List>),
    AddList {
        list: List,
        position: Position,
    },
    UpdateList {
        index: usize,
        list: List,
        position: Position,
    },
    DeleteLists,
    SelectList {
        index: usize,
        is_selected: bool,
    },
    SelectAllLists(bool),
    UpdateDeleteAllModalVisible(bool),
    UpdateListModalVisible {
        is_visible: bool,
        current_list_index: Option<usize>,
    },
    /// "Save and next": reopen for another new list, or advance to the next one.
    ListModalAltAction,
}

impl ListsPageState {
    #[must_use]
    pub fn new(lists: Vec<List>) -> Self {
        Self {
            lists,
            ..Self::default()
        }
    }

    /// Applies one action and returns the next state.
    ///
    /// `AddList` and `UpdateList` close the list modal. A blank (after trimming)
    /// name is swallowed: the modal closes and the lists are left alone.
    ///
    /// # Errors
    ///
    /// Propagates `InvalidPosition` and `IndexOutOfRange` from position resolution
    /// and the collection mutator; these indicate a caller bug.
    pub fn reduce(self, action: ListsPageAction) -> Result<Self> {
        let _span = tracing::debug_span!("lists_page_reduce", action = action.name()).entered();

        let next = match action {
            ListsPageAction::ReplaceLists(lists) => Self { lists, ..self },
            ListsPageAction::AddList { list, position } => {
                if list.name.trim().is_empty() {
                    tracing::debug!("ignoring list with blank name");
                    return Ok(Self { is_list_modal_visible: false, ..self });
                }
                let index = resolve_index(position, 0, self.lists.len(), true)?;
                let lists = insert_at(list, &self.lists, index)?;
                Self {
                    lists,
                    is_list_modal_visible: false,
                    ..self
                }
            }
            ListsPageAction::UpdateList { index, list, position } => {
                if list.name.trim().is_empty() {
                    tracing::debug!(index, "ignoring update with blank name");
                    return Ok(Self { is_list_modal_visible: false, ..self });
                }
                let new_index = resolve_index(position, index, self.lists.len(), false)?;
                let lists = move_and_replace(list, &self.lists, index, new_index)?;
                Self {
                    lists,
                    is_list_modal_visible: false,
                    ..self
                }
            }
            ListsPageAction::DeleteLists => Self {
                lists: delete_selected_or_all(&self.lists),
                ..self
            },
            ListsPageAction::SelectList { index, is_selected } => Self {
                lists: set_selected(&self.lists, index, is_selected)?,
                ..self
            },
            ListsPageAction::SelectAllLists(is_selected) => Self {
                lists: set_all_selected(&self.lists, is_selected),
                ..self
            },
            ListsPageAction::UpdateDeleteAllModalVisible(is_visible) => Self {
                is_delete_all_modal_visible: is_visible,
                ..self
            },
            ListsPageAction::UpdateListModalVisible {
                is_visible,
                current_list_index,
            } => Self {
                is_list_modal_visible: is_visible,
                current_list_index,
                ..self
            },
            ListsPageAction::ListModalAltAction => {
                let (is_visible, current_list_index) = chain_next(self.current_list_index, self.lists.len());
                Self {
                    is_list_modal_visible: is_visible,
                    current_list_index,
                    ..self
                }
            }
        };

        tracing::debug!(
            list_count = next.lists.len(),
            modal_visible = next.is_list_modal_visible,
            current_list_index = ?next.current_list_index,
            "lists page updated"
        );
        Ok(next)
    }
}

impl ListsPageAction {
    /// Variant name for logging.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::ReplaceLists(_) => "ReplaceLists",
            Self::AddList { .. } => "AddList",
            Self::UpdateList { .. } => "UpdateList",
            Self::DeleteLists => "DeleteLists",
            Self::SelectList { .. } => "SelectList",
            Self::SelectAllLists(_) => "SelectAllLists",
            Self::UpdateDeleteAllModalVisible(_) => "UpdateDeleteAllModalVisible",
            Self::UpdateListModalVisible { .. } => "UpdateListModalVisible",
            Self::ListModalAltAction => "ListModalAltAction",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ListType, NewItemPosition};

    fn list(name: &str) -> List {
        List::new(name, ListType::List, NewItemPosition::Bottom)
    }

    fn page(names: &[&str]) -> ListsPageState {
        ListsPageState::new(names.iter().map(|n| list(n)).collect())
    }

    fn names(state: &ListsPageState) -> Vec<&str> {
        state.lists.iter().map(|l| l.name.as_str()).collect()
    }

    #[test]
    fn add_at_top_and_bottom() {
        let state = page(&["a", "b"])
            .reduce(ListsPageAction::AddList { list: list("top"), position: Position::Top })
            .unwrap()
            .reduce(ListsPageAction::AddList { list: list("end"), position: Position::Bottom })
            .unwrap();

        assert_eq!(names(&state), ["top", "a", "b", "end"]);
    }

    #[test]
    fn add_closes_the_modal() {
        let state = page(&[])
            .reduce(ListsPageAction::UpdateListModalVisible { is_visible: true, current_list_index: None })
            .unwrap()
            .reduce(ListsPageAction::AddList { list: list("new"), position: Position::Bottom })
            .unwrap();

        assert!(!state.is_list_modal_visible);
        assert_eq!(names(&state), ["new"]);
    }

    #[test]
    fn blank_name_is_swallowed() {
        let open = page(&["a"])
            .reduce(ListsPageAction::UpdateListModalVisible { is_visible: true, current_list_index: None })
            .unwrap();

        let added = open
            .clone()
            .reduce(ListsPageAction::AddList { list: list("   "), position: Position::Top })
            .unwrap();
        assert_eq!(names(&added), ["a"]);
        assert!(!added.is_list_modal_visible);

        let updated = open
            .reduce(ListsPageAction::UpdateList { index: 0, list: list(""), position: Position::Current })
            .unwrap();
        assert_eq!(names(&updated), ["a"]);
        assert!(!updated.is_list_modal_visible);
    }

    #[test]
    fn update_moves_and_replaces() {
        let state = page(&["a", "b", "c"]);
        let renamed = state.lists[0].clone().with_name("A");
        let id = renamed.id.clone();

        let state = state
            .reduce(ListsPageAction::UpdateList { index: 0, list: renamed, position: Position::Bottom })
            .unwrap();

        assert_eq!(names(&state), ["b", "c", "A"]);
        assert_eq!(state.lists[2].id, id);
    }

    #[test]
    fn update_in_place_with_current() {
        let state = page(&["a", "b", "c"]);
        let renamed = state.lists[1].clone().with_name("B");
        let state = state
            .reduce(ListsPageAction::UpdateList { index: 1, list: renamed, position: Position::Current })
            .unwrap();

        assert_eq!(names(&state), ["a", "B", "c"]);
    }

    #[test]
    fn delete_uses_selection_or_everything() {
        let state = page(&["a", "b", "c"])
            .reduce(ListsPageAction::SelectList { index: 1, is_selected: true })
            .unwrap()
            .reduce(ListsPageAction::DeleteLists)
            .unwrap();
        assert_eq!(names(&state), ["a", "c"]);

        let state = state.reduce(ListsPageAction::DeleteLists).unwrap();
        assert!(state.lists.is_empty());
    }

    #[test]
    fn select_all_and_none() {
        let state = page(&["a", "b"]).reduce(ListsPageAction::SelectAllLists(true)).unwrap();
        assert!(state.lists.iter().all(|l| l.is_selected));

        let state = state.reduce(ListsPageAction::SelectAllLists(false)).unwrap();
        assert!(state.lists.iter().all(|l| !l.is_selected));
    }

    #[test]
    fn alt_action_while_adding_reopens_for_another_new_list() {
        let state = page(&["a"])
            .reduce(ListsPageAction::UpdateListModalVisible { is_visible: true, current_list_index: None })
            .unwrap()
            .reduce(ListsPageAction::AddList { list: list("b"), position: Position::Bottom })
            .unwrap()
            .reduce(ListsPageAction::ListModalAltAction)
            .unwrap();

        assert!(state.is_list_modal_visible);
        assert_eq!(state.current_list_index, None);
    }

    #[test]
    fn alt_action_while_editing_advances_then_closes_on_last() {
        let state = page(&["a", "b"])
            .reduce(ListsPageAction::UpdateListModalVisible { is_visible: true, current_list_index: Some(0) })
            .unwrap()
            .reduce(ListsPageAction::ListModalAltAction)
            .unwrap();
        assert!(state.is_list_modal_visible);
        assert_eq!(state.current_list_index, Some(1));

        let state = state.reduce(ListsPageAction::ListModalAltAction).unwrap();
        assert!(!state.is_list_modal_visible);
        assert_eq!(state.current_list_index, None);
    }

    #[test]
    fn contract_violations_surface_as_errors() {
        assert!(page(&["a"]).reduce(ListsPageAction::SelectList { index: 5, is_selected: true }).is_err());
        assert!(page(&["a"])
            .reduce(ListsPageAction::AddList { list: list("x"), position: Position::Current })
            .is_err());
        assert!(page(&["a"])
            .reduce(ListsPageAction::UpdateList { index: 3, list: list("x"), position: Position::Top })
            .is_err());
    }

    #[test]
    fn delete_all_modal_visibility() {
        let state = page(&[]).reduce(ListsPageAction::UpdateDeleteAllModalVisible(true)).unwrap();
        assert!(state.is_delete_all_modal_visible);
    }
}
