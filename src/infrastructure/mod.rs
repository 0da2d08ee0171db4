//! Infrastructure layer for filesystem and environment interactions.
//!
//! Locates the data directory and expands user-supplied paths.

pub mod paths;

pub use paths::{data_dir, expand_tilde, expand_tilde_with, resolve_data_dir, DATA_DIR_ENV};
