//! Path manipulation utilities for the Zellij sandbox environment.
//!
//! This module provides functions for working with filesystem paths in the
//! Zellij plugin sandbox, where the host filesystem is mounted under `/host`.
//! It handles tilde expansion and storage location management for the
//! catalog, palette, and log files.

use std::path::PathBuf;

/// Returns the data directory for Zibrary storage.
///
/// The directory is located at `/host/.local/share/zellij/zibrary` in the
/// Zellij sandbox. In Zellij's plugin environment, `/host` points to the cwd
/// of the last focused terminal, or the folder where Zellij was started if
/// that's not available.
///
/// This typically resolves to the user's home directory when Zellij is
/// started from a home directory terminal, making the actual path
/// `~/.local/share/zellij/zibrary`. The rotating log file lives within this
/// directory.
///
/// # Examples
///
/// ```
/// use zibrary::infrastructure::get_data_dir;
///
/// let data_dir = get_data_dir();
/// assert_eq!(data_dir.to_str().unwrap(), "/host/.local/share/zellij/zibrary");
/// ```
#[must_use]
pub fn get_data_dir() -> PathBuf {
    PathBuf::from("/host/.local/share/zellij").join("zibrary")
}

/// Expands tilde paths to use the `/host` prefix for the Zellij sandbox.
///
/// In the sandbox environment, the host's home directory (`~`) maps to
/// `/host`. This function converts tilde-prefixed paths to their sandbox
/// equivalents, so configured catalog and palette locations work the way
/// users write them.
///
/// # Examples
///
/// ```
/// use zibrary::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("~/books.json"), "/host/books.json");
/// assert_eq!(expand_tilde("~"), "/host");
/// assert_eq!(expand_tilde("/absolute/path"), "/absolute/path");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    if path.starts_with("~/") {
        path.replacen('~', "/host", 1)
    } else if path == "~" {
        "/host".to_string()
    } else {
        path.to_string()
    }
}
