//! Symbolic positions and their resolution to concrete indices.
//!
//! Both the lists screen and the items screen place elements by a symbolic
//! [`Position`] rather than a raw index. [`resolve_index`] turns a position plus the
//! surrounding context into the index the collection mutator works with.

use crate::domain::error::{ListkeeperError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Where an added or edited element should land in its collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Position {
    /// First slot of the collection.
    Top,
    /// The element's existing slot. Only meaningful when replacing.
    Current,
    /// After the last element.
    Bottom,
}

impl Position {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Current => "current",
            Self::Bottom => "bottom",
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Position {
    type Err = ListkeeperError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "top" => Ok(Self::Top),
            "current" => Ok(Self::Current),
            "bottom" => Ok(Self::Bottom),
            other => Err(ListkeeperError::InvalidPosition(other.to_string())),
        }
    }
}

/// Placement used for items added to a list that has no explicit position.
///
/// A list only ever defaults new items to one of its ends, so this is a narrower
/// type than [`Position`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NewItemPosition {
    Top,
    #[default]
    Bottom,
}

impl From<NewItemPosition> for Position {
    fn from(value: NewItemPosition) -> Self {
        match value {
            NewItemPosition::Top => Self::Top,
            NewItemPosition::Bottom => Self::Bottom,
        }
    }
}

/// Resolves a symbolic position to a concrete index.
///
/// # Parameters
///
/// * `position` - Requested placement
/// * `current_index` - Existing index of the element; ignored unless `position` is `Current`
/// * `len` - Length of the collection as it is now
/// * `is_inserting` - `true` when adding a new element, `false` when replacing one
///
/// # Resolution
///
/// - `Top` → `0`
/// - `Current` → `current_index` (replacing only)
/// - `Bottom` → `len` when inserting, `len - 1` when replacing, because the element
///   being replaced still occupies one of the `len` slots
///
/// # Errors
///
/// - `InvalidPosition` for `Current` while inserting
/// - `IndexOutOfRange` for `Bottom` while replacing in an empty collection
///
/// # Example
///
/// ```
/// use listkeeper::domain::{resolve_index, Position};
///
/// assert_eq!(resolve_index(Position::Bottom, 0, 3, true)?, 3);
/// assert_eq!(resolve_index(Position::Bottom, 0, 3, false)?, 2);
/// assert_eq!(resolve_index(Position::Top, 2, 3, false)?, 0);
/// # Ok::<(), listkeeper::ListkeeperError>(())
/// ```
pub fn resolve_index(
    position: Position,
    current_index: usize,
    len: usize,
    is_inserting: bool,
) -> Result<usize> {
    let index = match (position, is_inserting) {
        (Position::Top, _) => 0,
        (Position::Current, false) => current_index,
        (Position::Current, true) => {
            return Err(ListkeeperError::InvalidPosition(
                "current cannot be used when inserting".to_string(),
            ));
        }
        (Position::Bottom, true) => len,
        (Position::Bottom, false) => len
            .checked_sub(1)
            .ok_or(ListkeeperError::IndexOutOfRange { index: 0, len })?,
    };

    tracing::trace!(%position, current_index, len, is_inserting, index, "position resolved");
    Ok(index)
}
