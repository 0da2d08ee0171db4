//! Listkeeper: state machines for ordered shopping and to-do lists.
//!
//! Listkeeper is the mutation core of a list-management application:
//! - Ordered lists of items with symbolic `top`/`current`/`bottom` placement
//! - Bulk selection with the "nothing selected means everything" delete rule
//! - Copying and moving items between lists
//! - Pure reducers for every screen and modal, driven by a [`Session`]
//! - Persistence through a pluggable [`ListStorage`](storage::ListStorage) backend
//! - Base64 JSON import and export

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  View layer (not part of this crate)                │  ← Rendering, routing
//! └─────────────────────────────────────────────────────┘
//!                        │  actions ↓   ↑ state, Route
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │
//! │  - Session: dispatch + persistence side effects     │
//! │  - Pure reducers: lists, items, modals, move-items  │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ Collection    │   │ Storage Layer │   │ Interchange   │
//! │ (collection/) │   │ (storage/)    │   │ (interchange) │
//! │ - Insert/move │   │ - JSON file   │   │ - base64 JSON │
//! │ - Select/del  │   │ - In-memory   │   │ - Import/exp. │
//! │ - Transfer    │   │ - Backend API │   │               │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!         │                    │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure & Domain Layers                     │
//! │  - Data directory (infrastructure/)                 │
//! │  - Error types (domain/error)                       │
//! │  - Item, List, Position (domain/)                   │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │  ← Optional
//! │  - OpenTelemetry tracing                            │
//! │  - File-based OTLP export                           │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Configuration
//!
//! Configuration is a small TOML file; every key is optional:
//!
//! ```toml
//! data_dir = "~/.local/share/listkeeper"
//! storage_file = "lists.json"
//! trace_level = "debug"
//! default_list_type = "Shopping"
//! default_new_item_position = "top"
//! trace_max_bytes = 10485760
//! trace_backups = 3
//! ```
//!
//! # Examples
//!
//! ```no_run
//! use listkeeper::{initialize, Config, ItemModalAction, ListModalAction};
//!
//! let config = Config::load("listkeeper.toml")?;
//! let mut session = initialize(&config)?;
//!
//! session.open_list_modal(None)?;
//! session.dispatch_list_modal(ListModalAction::UpdateName("Groceries".into()));
//! let route = session.submit_list_modal(false)?;
//!
//! session.open_item_modal(None)?;
//! session.dispatch_item_modal(ItemModalAction::UpdateName("Milk".into()));
//! session.submit_item_modal(false)?;
//! # let _ = route;
//! # Ok::<(), listkeeper::ListkeeperError>(())
//! ```
//!
//! # Key Design Decisions
//!
//! ## Pure Reducers
//!
//! Every screen is a `reduce(self, action)` over a closed action enum. Reducers
//! return new values and never perform I/O; [`Session`] applies persistence
//! after the fact.
//!
//! ## Separate Item Storage
//!
//! The lists root stores list metadata only. Each list's items are stored under
//! its id and loaded when the list is opened.
//!
//! ## Validation in State
//!
//! A rejected submit writes its message into the modal's `error` field. Only
//! contract violations and I/O failures are returned as errors.

pub mod app;
pub mod collection;
pub mod domain;
pub mod infrastructure;
pub mod interchange;
pub mod observability;
pub mod storage;

pub use app::{
    ItemModalAction, ItemModalState, ItemsPageAction, ItemsPageState, ListDefaults, ListModalAction, ListModalState,
    ListsPageAction, ListsPageState, MoveItemsAction, MoveItemsState, Route, Session,
};
pub use collection::{Transfer, TransferAction};
pub use domain::{
    ImportError, Item, List, ListId, ListType, ListkeeperError, NewItemPosition, Position, Result,
};

use observability::rotation::{RotationPolicy, DEFAULT_BACKUPS, DEFAULT_MAX_BYTES};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use storage::JsonStorage;

/// Default name of the storage file inside the data directory.
pub const DEFAULT_STORAGE_FILE: &str = "lists.json";

/// Application configuration, usually read from a TOML file.
///
/// # Example
///
/// ```
/// use listkeeper::{Config, ListType};
///
/// let config = Config::from_toml_str("default_list_type = \"To-Do\"")?;
/// assert_eq!(config.default_list_type, ListType::ToDo);
/// assert_eq!(config.storage_file, "lists.json");
/// # Ok::<(), listkeeper::ListkeeperError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Directory holding the storage and trace files.
    ///
    /// A leading `~` is expanded. Default: see [`infrastructure::data_dir`].
    pub data_dir: Option<String>,

    /// Storage file name, relative to `data_dir` unless absolute. Default: `"lists.json"`
    pub storage_file: String,

    /// Tracing filter directive.
    ///
    /// Options: `trace`, `debug`, `info`, `warn`, `error`, or any `EnvFilter`
    /// directive. Default: `"info"`
    pub trace_level: Option<String>,

    /// List type pre-filled when adding a list.
    pub default_list_type: ListType,

    /// New item position pre-filled when adding a list.
    pub default_new_item_position: NewItemPosition,

    /// Trace file size that triggers rotation.
    pub trace_max_bytes: u64,

    /// Rotated trace files kept.
    pub trace_backups: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: None,
            storage_file: DEFAULT_STORAGE_FILE.to_string(),
            trace_level: None,
            default_list_type: ListType::default(),
            default_new_item_position: NewItemPosition::default(),
            trace_max_bytes: DEFAULT_MAX_BYTES,
            trace_backups: DEFAULT_BACKUPS,
        }
    }
}

impl Config {
    /// Parses configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns `Config` if the text is not valid TOML, has unknown keys, or has
    /// values of the wrong type.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| ListkeeperError::Config(e.to_string()))
    }

    /// Reads and parses a TOML configuration file.
    ///
    /// # Errors
    ///
    /// Returns `Config` if the file cannot be read or parsed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!(path = ?path, "loading configuration");

        let text = std::fs::read_to_string(path)
            .map_err(|e| ListkeeperError::Config(format!("cannot read {}: {e}", path.display())))?;
        Self::from_toml_str(&text)
    }

    /// Data directory after defaults and `~` expansion.
    #[must_use]
    pub fn resolved_data_dir(&self) -> PathBuf {
        self.data_dir
            .as_deref()
            .map_or_else(infrastructure::data_dir, infrastructure::expand_tilde)
    }

    /// Full path of the JSON storage file.
    #[must_use]
    pub fn storage_path(&self) -> PathBuf {
        self.resolved_data_dir().join(infrastructure::expand_tilde(&self.storage_file))
    }

    #[must_use]
    pub const fn list_defaults(&self) -> ListDefaults {
        ListDefaults {
            list_type: self.default_list_type,
            default_new_item_position: self.default_new_item_position,
        }
    }

    #[must_use]
    pub const fn rotation_policy(&self) -> RotationPolicy {
        RotationPolicy {
            max_bytes: self.trace_max_bytes,
            backups: self.trace_backups,
        }
    }
}

/// Initializes tracing and opens a session over the configured JSON file.
///
/// # Errors
///
/// Returns an error if the storage file cannot be opened or parsed.
///
/// # Example
///
/// ```no_run
/// use listkeeper::{initialize, Config};
///
/// let session = initialize(&Config::default())?;
/// println!("{} lists", session.lists_page().lists.len());
/// # Ok::<(), listkeeper::ListkeeperError>(())
/// ```
pub fn initialize(config: &Config) -> Result<Session<JsonStorage>> {
    observability::init_tracing(config);

    let path = config.storage_path();
    tracing::debug!(path = ?path, "initializing listkeeper");

    let storage = JsonStorage::new(path)?;
    Session::open(storage, config.list_defaults())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_uses_defaults() {
        assert_eq!(Config::from_toml_str("").unwrap(), Config::default());
    }

    #[test]
    fn full_config_parses() {
        let config = Config::from_toml_str(
            r#"
            data_dir = "/srv/lists"
            storage_file = "mine.json"
            trace_level = "debug"
            default_list_type = "Ordered To-Do"
            default_new_item_position = "top"
            trace_max_bytes = 1024
            trace_backups = 5
            "#,
        )
        .unwrap();

        assert_eq!(config.storage_path(), PathBuf::from("/srv/lists/mine.json"));
        assert_eq!(config.trace_level.as_deref(), Some("debug"));
        assert_eq!(
            config.list_defaults(),
            ListDefaults {
                list_type: ListType::OrderedToDo,
                default_new_item_position: NewItemPosition::Top,
            }
        );
        assert_eq!(config.rotation_policy(), RotationPolicy { max_bytes: 1024, backups: 5 });
    }

    #[test]
    fn bad_config_is_a_config_error() {
        let unknown = Config::from_toml_str("scan_depth = 4").unwrap_err();
        assert!(matches!(unknown, ListkeeperError::Config(_)));

        let wrong_type = Config::from_toml_str("default_new_item_position = \"current\"").unwrap_err();
        assert!(matches!(wrong_type, ListkeeperError::Config(_)));
    }

    #[test]
    fn missing_config_file_is_a_config_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let err = Config::load(dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, ListkeeperError::Config(msg) if msg.contains("absent.toml")));
    }
}
