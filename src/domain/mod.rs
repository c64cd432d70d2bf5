//! Domain layer for the Zibrary plugin.
//!
//! This module contains the core domain types for the plugin, independent of
//! Zellij-specific APIs or infrastructure concerns. The catalog is the single
//! source of truth for book data; everything downstream of it works on clones
//! and ids so the records themselves stay immutable.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`book`]: The book record as stored in the catalog document
//! - [`catalog`]: The loaded dataset plus author/genre name tables
//!
//! # Examples
//!
//! ```
//! use zibrary::domain::Catalog;
//!
//! let catalog = Catalog::builtin();
//! assert!(catalog.find_book("the-hobbit").is_some());
//! ```

pub mod book;
pub mod catalog;
pub mod error;

pub use book::Book;
pub use catalog::Catalog;
pub use error::{Result, ZibraryError};
