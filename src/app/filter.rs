//! Filter criteria parsing and the pure matching pass.
//!
//! Raw form values stop here: [`FilterCriteria::from_form`] is the typed
//! parse step with permissive defaults, and everything downstream works with
//! the parsed struct. Matching is a single pass over the dataset with no
//! ranking, so the result is always an order-preserving subsequence.

use crate::domain::Book;

/// Parsed search-form constraints.
///
/// Transient by design: rebuilt on every submission, never edited in place.
/// `None` in `genre` or `author` means no constraint. The default value
/// constrains nothing and matches every book.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterCriteria {
    /// Title substring, already trimmed and lowercased. Empty matches all.
    pub title: String,

    /// Genre id the book must carry, or `None` for any genre.
    pub genre: Option<String>,

    /// Author id the book must have, or `None` for any author.
    pub author: Option<String>,
}

impl FilterCriteria {
    /// Parses raw form values into criteria.
    ///
    /// Permissive throughout: a missing title becomes the empty string, and a
    /// missing, empty, or `"any"` select value becomes no constraint. A
    /// malformed form therefore falls back toward matching more, never fails.
    #[must_use]
    pub fn from_form(title: Option<&str>, genre: Option<&str>, author: Option<&str>) -> Self {
        Self {
            title: title.unwrap_or("").trim().to_lowercase(),
            genre: selection(genre),
            author: selection(author),
        }
    }

    /// Returns `true` when the criteria constrain nothing.
    #[must_use]
    pub fn is_unconstrained(&self) -> bool {
        self.title.is_empty() && self.genre.is_none() && self.author.is_none()
    }

    /// Tests one book against all three constraints.
    ///
    /// Title matching is case-insensitive substring, genre is membership in
    /// the book's genre list, author is id equality. Absent constraints hold
    /// vacuously; the three combine with logical AND.
    #[must_use]
    pub fn matches(&self, book: &Book) -> bool {
        let title_ok = self.title.is_empty() || book.title.to_lowercase().contains(&self.title);
        let genre_ok = self
            .genre
            .as_ref()
            .map_or(true, |genre| book.genres.contains(genre));
        let author_ok = self
            .author
            .as_ref()
            .map_or(true, |author| &book.author == author);

        title_ok && genre_ok && author_ok
    }

    /// Returns the char range of the first title match, for list highlighting.
    ///
    /// `None` when no title constraint is active or the title does not match.
    /// The range is in characters over the original title; the renderer clamps
    /// it, so the rare case where lowercasing changes the char count degrades
    /// to a slightly offset highlight rather than an error.
    #[must_use]
    pub fn title_match(&self, title: &str) -> Option<(usize, usize)> {
        if self.title.is_empty() {
            return None;
        }

        let haystack: Vec<char> = title.to_lowercase().chars().collect();
        let needle: Vec<char> = self.title.chars().collect();

        haystack
            .windows(needle.len())
            .position(|window| window == needle.as_slice())
            .map(|start| (start, start + needle.len()))
    }
}

/// Runs the criteria over the dataset in one pass.
///
/// The result is a fresh vector replacing any previous one wholesale; partial
/// updates of an existing result are never attempted. Dataset order is
/// preserved and pagination later only slices.
#[must_use]
pub fn apply(books: &[Book], criteria: &FilterCriteria) -> Vec<Book> {
    books
        .iter()
        .filter(|book| criteria.matches(book))
        .cloned()
        .collect()
}

/// Normalizes a select-field value: missing, empty, or `"any"` means no constraint.
fn selection(value: Option<&str>) -> Option<String> {
    match value {
        None | Some("") | Some("any") => None,
        Some(id) => Some(id.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn book(id: &str, title: &str, author: &str, genres: &[&str]) -> Book {
        Book {
            id: id.to_string(),
            title: title.to_string(),
            author: author.to_string(),
            genres: genres.iter().map(|g| (*g).to_string()).collect(),
            image: String::new(),
            description: String::new(),
            published: Utc.with_ymd_and_hms(1960, 1, 1, 0, 0, 0).unwrap(),
        }
    }

    fn shelf() -> Vec<Book> {
        vec![
            book("b1", "The Hobbit", "tolkien", &["fantasy", "classic"]),
            book("b2", "Dune", "herbert", &["scifi"]),
            book("b3", "The Left Hand of Darkness", "leguin", &["scifi"]),
            book("b4", "Emma", "austen", &["romance", "classic"]),
        ]
    }

    #[test]
    fn missing_form_fields_become_permissive_defaults() {
        let criteria = FilterCriteria::from_form(None, None, None);

        assert!(criteria.is_unconstrained());
        assert_eq!(apply(&shelf(), &criteria).len(), 4);
    }

    #[test]
    fn any_and_empty_select_values_mean_no_constraint() {
        let criteria = FilterCriteria::from_form(Some(""), Some("any"), Some(""));
        assert!(criteria.is_unconstrained());
    }

    #[test]
    fn title_is_trimmed_and_lowercased_at_parse_time() {
        let criteria = FilterCriteria::from_form(Some("  The HOBBIT "), None, None);
        assert_eq!(criteria.title, "the hobbit");
    }

    #[test]
    fn title_matching_is_case_insensitive_substring() {
        let criteria = FilterCriteria::from_form(Some("the"), None, None);
        let matches = apply(&shelf(), &criteria);

        let titles: Vec<&str> = matches.iter().map(|b| b.title.as_str()).collect();
        assert_eq!(titles, vec!["The Hobbit", "The Left Hand of Darkness"]);
    }

    #[test]
    fn genre_constraint_requires_membership() {
        let criteria = FilterCriteria::from_form(None, Some("scifi"), None);
        let matches = apply(&shelf(), &criteria);

        assert_eq!(matches.len(), 2);
        assert!(matches.iter().all(|b| b.genres.contains(&"scifi".to_string())));
    }

    #[test]
    fn author_constraint_requires_exact_id() {
        let criteria = FilterCriteria::from_form(None, None, Some("austen"));
        let matches = apply(&shelf(), &criteria);

        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].id, "b4");
    }

    #[test]
    fn constraints_combine_with_logical_and() {
        let criteria = FilterCriteria::from_form(Some("the"), Some("fantasy"), Some("tolkien"));
        let matches = apply(&shelf(), &criteria);

        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].id, "b1");

        let conflicting = FilterCriteria::from_form(Some("the"), Some("fantasy"), Some("herbert"));
        assert!(apply(&shelf(), &conflicting).is_empty());
    }

    #[test]
    fn result_is_an_order_preserving_subsequence() {
        let books = shelf();
        let criteria = FilterCriteria::from_form(Some("e"), None, None);
        let matches = apply(&books, &criteria);

        let mut source = books.iter();
        for matched in &matches {
            assert!(
                source.any(|b| b.id == matched.id),
                "match {} out of dataset order",
                matched.id
            );
        }
    }

    #[test]
    fn applying_identical_criteria_twice_is_idempotent() {
        let books = shelf();
        let criteria = FilterCriteria::from_form(Some("the"), None, None);

        assert_eq!(apply(&books, &criteria), apply(&books, &criteria));
    }

    #[test]
    fn title_match_reports_the_first_matching_range() {
        let criteria = FilterCriteria::from_form(Some("hobbit"), None, None);
        assert_eq!(criteria.title_match("The Hobbit"), Some((4, 10)));

        let no_constraint = FilterCriteria::default();
        assert_eq!(no_constraint.title_match("The Hobbit"), None);

        let no_match = FilterCriteria::from_form(Some("dragon"), None, None);
        assert_eq!(no_match.title_match("The Hobbit"), None);
    }
}
