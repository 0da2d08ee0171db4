//! State of the copy/move items modal.
//!
//! The reducer only records the user's choices. Whether a transfer can run is
//! decided by [`MoveItemsState::validate`] at execution time, outside the reducer.

use crate::collection::TransferAction;
use crate::domain::ListId;

/// Choices made in the copy/move modal.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MoveItemsState {
    pub action: TransferAction,
    pub source: Option<ListId>,
    pub destination: Option<ListId>,
    pub error: Option<String>,
}

/// Source and destination of a transfer that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferPlan {
    pub action: TransferAction,
    pub source: ListId,
    pub destination: ListId,
}

impl MoveItemsState {
    /// Modal opened from a list's screen: that list is the default source.
    #[must_use]
    pub fn from_list(list_id: ListId) -> Self {
        Self {
            source: Some(list_id),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn reduce(self, action: MoveItemsAction) -> Self {
        tracing::trace!(action = ?action, "move items action");

        match action {
            MoveItemsAction::UpdateAction(action) => Self { action, error: None, ..self },
            MoveItemsAction::UpdateSource(source) => Self { source, error: None, ..self },
            MoveItemsAction::UpdateDestination(destination) => Self {
                destination,
                error: None,
                ..self
            },
            MoveItemsAction::UpdateError(error) => Self { error: Some(error), ..self },
        }
    }

    /// Checks that both sides are chosen and differ.
    ///
    /// # Errors
    ///
    /// Returns the message to show in the modal when the choice is incomplete.
    pub fn validate(&self) -> std::result::Result<TransferPlan, String> {
        let Some(source) = self.source.clone() else {
            return Err(format!("Select a list to {} items from", self.action));
        };
        let Some(destination) = self.destination.clone() else {
            return Err(format!("Select a list to {} items to", self.action));
        };
        if source == destination {
            return Err("Source and destination must be different lists".to_string());
        }

        Ok(TransferPlan {
            action: self.action,
            source,
            destination,
        })
    }
}

/// Actions accepted by [`MoveItemsState::reduce`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveItemsAction {
    UpdateAction(TransferAction),
    UpdateSource(Option<ListId>),
    UpdateDestination(Option<ListId>),
    UpdateError(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn changing_any_choice_clears_the_error() {
        let errored = MoveItemsState::default().reduce(MoveItemsAction::UpdateError("no".into()));

        for action in [
            MoveItemsAction::UpdateAction(TransferAction::Move),
            MoveItemsAction::UpdateSource(Some(ListId::from("a"))),
            MoveItemsAction::UpdateDestination(None),
        ] {
            assert_eq!(errored.clone().reduce(action).error, None);
        }
    }

    #[test]
    fn validation_requires_a_source() {
        let state = MoveItemsState::default()
            .reduce(MoveItemsAction::UpdateDestination(Some(ListId::from("b"))));
        assert_eq!(state.validate().unwrap_err(), "Select a list to copy items from");
    }

    #[test]
    fn validation_requires_a_destination() {
        let state = MoveItemsState::from_list(ListId::from("a"))
            .reduce(MoveItemsAction::UpdateAction(TransferAction::Move));
        assert_eq!(state.validate().unwrap_err(), "Select a list to move items to");
    }

    #[test]
    fn validation_rejects_same_list() {
        let state = MoveItemsState::from_list(ListId::from("a"))
            .reduce(MoveItemsAction::UpdateDestination(Some(ListId::from("a"))));
        assert!(state.validate().is_err());
    }

    #[test]
    fn valid_choice_produces_a_plan() {
        let plan = MoveItemsState::from_list(ListId::from("a"))
            .reduce(MoveItemsAction::UpdateDestination(Some(ListId::from("b"))))
            .validate()
            .unwrap();

        assert_eq!(plan.action, TransferAction::Copy);
        assert_eq!(plan.source, ListId::from("a"));
        assert_eq!(plan.destination, ListId::from("b"));
    }
}
