//! Storage layer for persistent lists and items.
//!
//! This module provides the persistence gateway used by the session: the lists
//! root and each list's items are loaded and saved as whole collections.
//!
//! # Modules
//!
//! - `backend`: `ListStorage` trait abstraction for backend implementations
//! - `json`: JSON file-based storage implementation
//! - `memory`: In-memory storage implementation
//! - `models`: Storage record types separate from domain models

pub mod backend;
pub mod json;
pub mod memory;
pub mod models;

pub use backend::ListStorage;
pub use json::JsonStorage;
pub use memory::MemoryStorage;
pub use models::ListRecord;
