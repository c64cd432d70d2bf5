//! Display-ready payloads carried by render commands.
//!
//! These types are computed from application state by the view layer and
//! consumed by the screen model. They contain no business logic, only
//! pre-resolved display data: author ids are already names, the title-match
//! range is already computed, the detail subtitle is already formatted.
//!
//! # Example
//!
//! ```rust
//! use zibrary::ui::viewmodel::Preview;
//!
//! let row = Preview {
//!     id: "the-hobbit".to_string(),
//!     title: "The Hobbit".to_string(),
//!     author: "J.R.R. Tolkien".to_string(),
//!     image: String::new(),
//!     title_match: Some((4, 10)),
//! };
//! assert_eq!(row.id, "the-hobbit");
//! ```

/// One row of the book list as the screen displays it.
///
/// Carries the book id so a selection on this row can be reported back to the
/// core without the screen knowing anything else about the dataset. A row
/// rendered before a filter change keeps its id, and selecting it still
/// resolves against the full catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preview {
    /// Id of the underlying book, echoed back in selection events.
    pub id: String,

    /// Display title.
    pub title: String,

    /// Author display name, already resolved from the id.
    pub author: String,

    /// Cover image URL.
    pub image: String,

    /// Char range of the active title-filter match, for highlighting.
    ///
    /// `None` when no title filter is active or this title matched through
    /// another constraint only.
    pub title_match: Option<(usize, usize)>,
}

/// Content of the detail overlay for one selected book.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailContent {
    /// Book title.
    pub title: String,

    /// `"<Author> (<Year>)"`, pre-formatted.
    pub subtitle: String,

    /// Full description; the renderer wraps it to the overlay width.
    pub description: String,

    /// Cover image URL, shown as a dim reference line.
    pub image: String,

    /// Genre display names in document order.
    pub genres: Vec<String>,
}
