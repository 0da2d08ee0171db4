//! Error types for list and item operations.
//!
//! This module defines the centralized error type [`ListkeeperError`] and a type alias
//! [`Result`] used throughout the crate. Import failures have their own enum,
//! [`ImportError`], because the caller renders them to the user rather than treating
//! them as programming faults.

use thiserror::Error;

/// The main error type for listkeeper operations.
///
/// Two families of variants live here. `InvalidPosition` and `IndexOutOfRange` are
/// contract violations raised by the position resolver and the collection mutator;
/// correct callers never see them. The remaining variants describe failures of the
/// surrounding environment (storage, configuration, import input).
///
/// # Examples
///
/// ```
/// use listkeeper::ListkeeperError;
///
/// let err = ListkeeperError::IndexOutOfRange { index: 4, len: 2 };
/// assert_eq!(err.to_string(), "index 4 out of range for collection of length 2");
/// ```
#[derive(Debug, Error)]
pub enum ListkeeperError {
    /// A symbolic position could not be resolved.
    ///
    /// Raised for unrecognized position names and for `current` used while
    /// inserting a new element, which has no existing index.
    #[error("invalid position: {0}")]
    InvalidPosition(String),

    /// An index fell outside the valid range of a collection.
    #[error("index {index} out of range for collection of length {len}")]
    IndexOutOfRange {
        /// The offending index.
        index: usize,
        /// Length of the collection at the time of the call.
        len: usize,
    },

    /// The persistence gateway holds no item collection for a list id.
    #[error("list not found: {0}")]
    NotFound(String),

    /// Storage operation failed.
    ///
    /// Occurs when a backend cannot parse or serialize its data. The string
    /// describes what went wrong.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration is unreadable or malformed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Imported text could not be turned into lists.
    #[error(transparent)]
    Import(#[from] ImportError),
}

/// Failures when importing lists from interchange text.
///
/// `NoData` and the two parse failures map to the two messages shown by the
/// import screen. The parse failures keep their source error for logging.
#[derive(Debug, Error)]
pub enum ImportError {
    /// The input was empty or only whitespace.
    #[error("no data provided")]
    NoData,

    /// The input was not valid base64.
    #[error("unable to parse provided data")]
    InvalidBase64(#[source] base64::DecodeError),

    /// The decoded bytes were not a valid list array.
    #[error("unable to parse provided data")]
    InvalidJson(#[source] serde_json::Error),
}

/// A specialized `Result` type for listkeeper operations.
pub type Result<T> = std::result::Result<T, ListkeeperError>;
