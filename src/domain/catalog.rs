//! The read-only book catalog and its lookup tables.
//!
//! A catalog is loaded exactly once, before the first event is handled, either
//! from a JSON file named in the plugin configuration or from the built-in
//! sample embedded in the binary. After that it is never mutated; filtering
//! and pagination work on clones and indices, never on the catalog itself.
//!
//! # Document Format
//!
//! ```json
//! {
//!   "page_size": 20,
//!   "books": [
//!     {
//!       "id": "the-hobbit",
//!       "title": "The Hobbit",
//!       "author": "tolkien",
//!       "genres": ["fantasy"],
//!       "image": "https://covers.example/the-hobbit.jpg",
//!       "description": "A reluctant homebody is swept into a quest.",
//!       "published": "1937-09-21T00:00:00.000Z"
//!     }
//!   ],
//!   "authors": { "tolkien": "J.R.R. Tolkien" },
//!   "genres": { "fantasy": "Fantasy" }
//! }
//! ```

use crate::domain::book::Book;
use crate::domain::error::{Result, ZibraryError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Catalog JSON embedded at compile time; doubles as the load-failure fallback.
const SAMPLE_CATALOG: &str = include_str!("../../data/catalog.json");

/// Page size used when the catalog document does not specify one.
pub const DEFAULT_PAGE_SIZE: usize = 20;

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

/// The full book dataset plus the id-to-name tables for authors and genres.
///
/// Ids in `Book` records are resolved through `authors` and `genres` at render
/// time. Missing table entries are tolerated: author ids fall back to a
/// placeholder name and genre ids fall back to the id itself, so a partially
/// edited catalog file still renders.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catalog {
    /// All book entries, in document order. Filtering preserves this order.
    pub books: Vec<Book>,

    /// Author id to display name.
    #[serde(default)]
    pub authors: BTreeMap<String, String>,

    /// Genre id to display name.
    #[serde(default)]
    pub genres: BTreeMap<String, String>,

    /// Entries revealed per page-full.
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

impl Catalog {
    /// Returns the built-in sample catalog.
    ///
    /// Used when no `catalog_file` is configured and as the fallback when the
    /// configured file fails to load.
    #[must_use]
    pub fn builtin() -> Self {
        serde_json::from_str(SAMPLE_CATALOG).expect("Built-in catalog should always parse")
    }

    /// Loads a catalog from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or does not parse into the
    /// catalog document shape.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!(path = ?path, "loading catalog");

        let contents = std::fs::read_to_string(path)?;
        let catalog: Self = serde_json::from_str(&contents)
            .map_err(|e| ZibraryError::Catalog(format!("failed to parse catalog JSON: {e}")))?;

        tracing::debug!(
            book_count = catalog.books.len(),
            author_count = catalog.authors.len(),
            genre_count = catalog.genres.len(),
            page_size = catalog.page_size,
            "catalog loaded"
        );

        Ok(catalog)
    }

    /// Looks up a book by id across the full dataset.
    ///
    /// Deliberately not limited to the current filtered result: a preview
    /// rendered before a filter change still carries a resolvable id.
    #[must_use]
    pub fn find_book(&self, id: &str) -> Option<&Book> {
        self.books.iter().find(|book| book.id == id)
    }

    /// Resolves an author id to its display name.
    ///
    /// Unknown ids resolve to `"Unknown author"` rather than failing; a stale
    /// or hand-edited catalog should still render.
    #[must_use]
    pub fn author_name(&self, id: &str) -> &str {
        self.authors.get(id).map_or("Unknown author", String::as_str)
    }

    /// Resolves a genre id to its display name, falling back to the id itself.
    #[must_use]
    pub fn genre_name<'a>(&'a self, id: &'a str) -> &'a str {
        self.genres.get(id).map_or(id, String::as_str)
    }

    /// Returns `(id, display name)` pairs for the genre select, in id order.
    #[must_use]
    pub fn genre_options(&self) -> Vec<(String, String)> {
        self.genres
            .iter()
            .map(|(id, name)| (id.clone(), name.clone()))
            .collect()
    }

    /// Returns `(id, display name)` pairs for the author select, in id order.
    #[must_use]
    pub fn author_options(&self) -> Vec<(String, String)> {
        self.authors
            .iter()
            .map(|(id, name)| (id.clone(), name.clone()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;
    use std::io::Write;

    #[test]
    fn builtin_catalog_parses_with_default_page_size() {
        let catalog = Catalog::builtin();

        assert_eq!(catalog.page_size, DEFAULT_PAGE_SIZE);
        assert_eq!(catalog.books.len(), 25);
        assert!(!catalog.authors.is_empty());
        assert!(!catalog.genres.is_empty());
    }

    #[test]
    fn builtin_catalog_ids_are_unique_and_resolvable() {
        let catalog = Catalog::builtin();

        let ids: BTreeSet<&str> = catalog.books.iter().map(|b| b.id.as_str()).collect();
        assert_eq!(ids.len(), catalog.books.len());

        for book in &catalog.books {
            assert!(
                catalog.authors.contains_key(&book.author),
                "author id {} missing from table",
                book.author
            );
            for genre in &book.genres {
                assert!(
                    catalog.genres.contains_key(genre),
                    "genre id {genre} missing from table"
                );
            }
        }
    }

    #[test]
    fn from_file_loads_a_catalog_document() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{
                "page_size": 5,
                "books": [{{
                    "id": "b1",
                    "title": "First",
                    "author": "a1",
                    "genres": ["g1"],
                    "published": "1999-01-01T00:00:00.000Z"
                }}],
                "authors": {{ "a1": "Author One" }},
                "genres": {{ "g1": "Genre One" }}
            }}"#
        )
        .unwrap();

        let catalog = Catalog::from_file(file.path()).unwrap();

        assert_eq!(catalog.page_size, 5);
        assert_eq!(catalog.books.len(), 1);
        assert_eq!(catalog.books[0].year(), 1999);
        assert_eq!(catalog.author_name("a1"), "Author One");
    }

    #[test]
    fn from_file_rejects_malformed_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ not json").unwrap();

        let err = Catalog::from_file(file.path()).unwrap_err();
        assert!(matches!(err, ZibraryError::Catalog(_)));
    }

    #[test]
    fn from_file_reports_missing_file_as_io_error() {
        let err = Catalog::from_file("/nonexistent/catalog.json").unwrap_err();
        assert!(matches!(err, ZibraryError::Io(_)));
    }

    #[test]
    fn find_book_scans_the_full_dataset() {
        let catalog = Catalog::builtin();
        let last = catalog.books.last().unwrap().id.clone();

        assert!(catalog.find_book(&last).is_some());
        assert!(catalog.find_book("no-such-id").is_none());
    }

    #[test]
    fn unknown_ids_resolve_to_placeholders() {
        let catalog = Catalog::builtin();

        assert_eq!(catalog.author_name("ghost"), "Unknown author");
        assert_eq!(catalog.genre_name("ghost"), "ghost");
    }
}
