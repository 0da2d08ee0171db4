//! Path utilities for locating listkeeper data on disk.
//!
//! The data directory holds the JSON storage file and the trace file. It is
//! resolved from the environment, first match wins:
//!
//! 1. `$LISTKEEPER_DATA_DIR`
//! 2. `$XDG_DATA_HOME/listkeeper`
//! 3. `$HOME/.local/share/listkeeper`
//! 4. `./.listkeeper`
//!
//! Empty variables are ignored.

use std::path::PathBuf;

/// Environment variable overriding the data directory.
pub const DATA_DIR_ENV: &str = "LISTKEEPER_DATA_DIR";

const APP_DIR: &str = "listkeeper";

/// Returns the data directory for the current process environment.
///
/// # Examples
///
/// ```
/// use listkeeper::infrastructure::data_dir;
///
/// let dir = data_dir();
/// assert!(dir.ends_with("listkeeper") || dir.ends_with(".listkeeper"));
/// ```
#[must_use]
pub fn data_dir() -> PathBuf {
    resolve_data_dir(|key| std::env::var(key).ok())
}

/// Resolves the data directory using `lookup` to read environment variables.
#[must_use]
pub fn resolve_data_dir<F>(lookup: F) -> PathBuf
where
    F: Fn(&str) -> Option<String>,
{
    let var = |key: &str| lookup(key).filter(|value| !value.is_empty());

    if let Some(dir) = var(DATA_DIR_ENV) {
        return expand_tilde_with(&dir, var("HOME").as_deref());
    }
    if let Some(xdg) = var("XDG_DATA_HOME") {
        return PathBuf::from(xdg).join(APP_DIR);
    }
    if let Some(home) = var("HOME") {
        return PathBuf::from(home).join(".local").join("share").join(APP_DIR);
    }
    PathBuf::from(".").join(format!(".{APP_DIR}"))
}

/// Expands a leading `~` to the current user's home directory.
///
/// # Examples
///
/// ```
/// use listkeeper::infrastructure::expand_tilde;
/// use std::path::PathBuf;
///
/// assert_eq!(expand_tilde("/absolute/path"), PathBuf::from("/absolute/path"));
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> PathBuf {
    expand_tilde_with(path, std::env::var("HOME").ok().as_deref())
}

/// Expands a leading `~` against an explicit home directory.
///
/// Without a home directory the path is returned unchanged.
#[must_use]
pub fn expand_tilde_with(path: &str, home: Option<&str>) -> PathBuf {
    match (path, home) {
        ("~", Some(home)) => PathBuf::from(home),
        (_, Some(home)) if path.starts_with("~/") => PathBuf::from(home).join(&path[2..]),
        _ => PathBuf::from(path),
    }
}
