//! Domain layer: entities, positions, and errors.
//!
//! Nothing here touches storage or tracing subscribers; these are the value types
//! every other layer passes around.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`item`]: The `Item` value type
//! - [`list`]: `List`, `ListId`, and `ListType`
//! - [`position`]: Symbolic positions and index resolution
//!
//! # Examples
//!
//! ```
//! use listkeeper::domain::{Item, List, ListType, NewItemPosition};
//!
//! let list = List::new("Groceries", ListType::Shopping, NewItemPosition::Bottom)
//!     .with_items(vec![Item::new("Milk", "", 1, false)]);
//! assert_eq!(list.items.len(), 1);
//! ```

pub mod error;
pub mod item;
pub mod list;
pub mod position;

pub use error::{ImportError, ListkeeperError, Result};
pub use item::Item;
pub use list::{List, ListId, ListType};
pub use position::{resolve_index, NewItemPosition, Position};
