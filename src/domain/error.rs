//! Error types for the Zibrary plugin.
//!
//! This module defines the centralized error type [`ZibraryError`] and a type alias
//! [`Result`] for convenient error handling throughout the plugin. All errors are
//! implemented using the `thiserror` crate for automatic `Error` trait implementation.

use thiserror::Error;

/// The main error type for Zibrary plugin operations.
///
/// This enum consolidates all error conditions that can occur during plugin execution,
/// from catalog loading to I/O failures and configuration issues. Most variants
/// wrap underlying errors from external crates using `#[from]` for automatic conversion.
///
/// # Examples
///
/// ```
/// use zibrary::domain::ZibraryError;
///
/// fn load_palette() -> Result<(), ZibraryError> {
///     Err(ZibraryError::Theme("missing [colors] table".to_string()))
/// }
///
/// assert!(load_palette().is_err());
/// ```
#[derive(Debug, Error)]
pub enum ZibraryError {
    /// Catalog loading or parsing failed.
    ///
    /// Occurs when the configured catalog file cannot be decoded into the
    /// expected document shape. The string contains a description of what
    /// went wrong.
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// Filesystem or I/O operation failed.
    ///
    /// Wraps errors from standard library I/O operations. Automatically converts
    /// from `std::io::Error` using the `#[from]` attribute.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Theme parsing or application failed.
    ///
    /// Occurs when a palette file cannot be parsed into a theme.
    /// The string contains a description of what went wrong.
    #[error("Theme error: {0}")]
    Theme(String),
}

/// A specialized `Result` type for Zibrary operations.
///
/// This is a type alias for `std::result::Result<T, ZibraryError>` that simplifies
/// function signatures throughout the codebase.
pub type Result<T> = std::result::Result<T, ZibraryError>;
