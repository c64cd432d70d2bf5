//! The page cursor tracking how much of the filtered result is revealed.
//!
//! The cursor owns no data, only a count of revealed page-fulls; every method
//! takes the `(page_size, total)` pair it is measured against. That keeps the
//! arithmetic trivially testable and makes it impossible for the cursor to
//! drift out of sync with a result it never sees.

use std::ops::Range;

/// Number of page-fulls of the filtered result currently revealed.
///
/// Starts at one (the first page is always shown), advances by one per
/// show-more activation, and snaps back to one whenever the filtered result
/// is recomputed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageCursor {
    pages: usize,
}

impl PageCursor {
    /// Creates a cursor at the first page.
    #[must_use]
    pub const fn new() -> Self {
        Self { pages: 1 }
    }

    /// Page-fulls currently revealed.
    #[must_use]
    pub const fn pages(self) -> usize {
        self.pages
    }

    /// Returns to the first page.
    ///
    /// Runs on every fresh filter application so a new result always starts
    /// from the top.
    pub fn reset(&mut self) {
        self.pages = 1;
    }

    /// Reveals one more page-full.
    ///
    /// Callers guard this with [`PageCursor::is_exhausted`]; advancing past
    /// the end would only produce empty slices, but the guard keeps the
    /// revealed count meaningful.
    pub fn advance(&mut self) {
        self.pages += 1;
    }

    /// The slice of the filtered result currently visible, clipped to `total`.
    #[must_use]
    pub fn visible_range(self, page_size: usize, total: usize) -> Range<usize> {
        0..(self.pages * page_size).min(total)
    }

    /// Entries matched but not yet revealed.
    ///
    /// Saturating: once the cursor covers the whole result this stays at
    /// zero, it never goes negative.
    #[must_use]
    pub fn remaining(self, page_size: usize, total: usize) -> usize {
        total.saturating_sub(self.pages * page_size)
    }

    /// `true` when every matched entry is already visible.
    #[must_use]
    pub fn is_exhausted(self, page_size: usize, total: usize) -> bool {
        self.remaining(page_size, total) == 0
    }
}

impl Default for PageCursor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_cursor_reveals_exactly_one_page() {
        let cursor = PageCursor::new();

        assert_eq!(cursor.pages(), 1);
        assert_eq!(cursor.visible_range(20, 25), 0..20);
        assert_eq!(cursor.remaining(20, 25), 5);
        assert!(!cursor.is_exhausted(20, 25));
    }

    #[test]
    fn advancing_reveals_the_clipped_next_page() {
        let mut cursor = PageCursor::new();
        cursor.advance();

        assert_eq!(cursor.visible_range(20, 25), 0..25);
        assert_eq!(cursor.remaining(20, 25), 0);
        assert!(cursor.is_exhausted(20, 25));
    }

    #[test]
    fn reset_returns_to_the_first_page() {
        let mut cursor = PageCursor::new();
        cursor.advance();
        cursor.advance();
        cursor.reset();

        assert_eq!(cursor, PageCursor::new());
    }

    #[test]
    fn remaining_saturates_instead_of_going_negative() {
        let mut cursor = PageCursor::new();
        cursor.advance();
        cursor.advance();

        assert_eq!(cursor.remaining(20, 5), 0);
        assert_eq!(cursor.visible_range(20, 5), 0..5);
    }

    #[test]
    fn empty_results_are_exhausted_immediately() {
        let cursor = PageCursor::new();

        assert_eq!(cursor.visible_range(20, 0), 0..0);
        assert_eq!(cursor.remaining(20, 0), 0);
        assert!(cursor.is_exhausted(20, 0));
    }

    #[test]
    fn exhaustion_coincides_with_zero_remaining() {
        let mut cursor = PageCursor::new();

        for total in [0usize, 1, 19, 20, 21, 39, 40, 41] {
            cursor.reset();
            while !cursor.is_exhausted(20, total) {
                assert!(cursor.remaining(20, total) > 0);
                cursor.advance();
            }
            assert_eq!(cursor.remaining(20, total), 0);
            assert_eq!(cursor.visible_range(20, total), 0..total);
        }
    }
}
