//! Book records as they appear in the catalog document.
//!
//! These types mirror the on-disk JSON shape directly. Author and genre fields
//! hold opaque ids; the display names for both live in the catalog's lookup
//! tables, keeping the records small and the name tables deduplicated.

use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};

/// A single book entry in the catalog.
///
/// Books are immutable once loaded. Identity is the `id` field, which preview
/// selection events carry back into the core, so ids must be unique within a
/// catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    /// Unique identifier within the catalog.
    pub id: String,

    /// Display title.
    pub title: String,

    /// Author id, resolved to a display name via the catalog's author table.
    pub author: String,

    /// Genre ids this book belongs to, in document order.
    #[serde(default)]
    pub genres: Vec<String>,

    /// Cover image URL.
    #[serde(default)]
    pub image: String,

    /// Long-form description shown in the detail overlay.
    #[serde(default)]
    pub description: String,

    /// Publication date; only the year is surfaced in the UI.
    pub published: DateTime<Utc>,
}

impl Book {
    /// Returns the publication year for the detail subtitle.
    #[must_use]
    pub fn year(&self) -> i32 {
        self.published.year()
    }
}
