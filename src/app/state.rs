//! Application state management.
//!
//! This module defines [`AppState`], the single owned state container for the
//! plugin. It serves as the one source of truth the event handler mutates;
//! nothing else in the core holds state, and the screen model only ever
//! learns about changes through render commands.
//!
//! # State Components
//!
//! - **Catalog**: the loaded dataset, read-only after construction
//! - **Matches**: the filtered result, recomputed wholesale per submission
//! - **Criteria**: the constraints currently in force
//! - **Cursor**: page-fulls of the result revealed so far
//! - **Overlay**: which modal panel is open, if any
//! - **Theme**: the day palette plus the active day/night choice
//!
//! # Example
//!
//! ```rust
//! use zibrary::app::AppState;
//! use zibrary::domain::Catalog;
//! use zibrary::ui::theme::{Theme, ThemeChoice};
//!
//! let state = AppState::new(Catalog::builtin(), Theme::default(), ThemeChoice::Day);
//! assert_eq!(state.matches.len(), state.catalog.books.len());
//! ```

use crate::app::filter::{self, FilterCriteria};
use crate::app::modes::Overlay;
use crate::app::paging::PageCursor;
use crate::domain::{Book, Catalog};
use crate::ui::theme::{Theme, ThemeChoice};
use std::ops::Range;

/// Central application state container.
///
/// Mutated only by the event handler; every observable consequence of a
/// mutation is described by the render commands the handler returns alongside
/// it. Construction starts with every book matching, the cursor on the first
/// page, and no overlay open.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The loaded dataset. Never mutated after initialization.
    pub catalog: Catalog,

    /// Books matching the active criteria, in dataset order.
    ///
    /// Recomputed wholesale by [`AppState::apply_filter`] on every search
    /// submission; never patched incrementally, so stale entries cannot
    /// survive a filter change.
    pub matches: Vec<Book>,

    /// Criteria currently in force. Replaced, never edited, on submission.
    pub criteria: FilterCriteria,

    /// Page-fulls of `matches` revealed so far.
    pub cursor: PageCursor,

    /// The open modal panel, if any.
    pub overlay: Option<Overlay>,

    /// Day palette, the base the night variant is derived from.
    ///
    /// Loaded from the built-in asset or a configured palette file on plugin
    /// initialization.
    pub day_theme: Theme,

    /// Active day/night selection.
    pub theme_choice: ThemeChoice,
}

impl AppState {
    /// Creates state over a loaded catalog.
    ///
    /// The initial filtered result is the whole dataset (empty criteria match
    /// everything), matching what the first render shows.
    #[must_use]
    pub fn new(catalog: Catalog, day_theme: Theme, theme_choice: ThemeChoice) -> Self {
        let matches = catalog.books.clone();
        Self {
            catalog,
            matches,
            criteria: FilterCriteria::default(),
            cursor: PageCursor::new(),
            overlay: None,
            day_theme,
            theme_choice,
        }
    }

    /// Entries revealed per page-full.
    #[must_use]
    pub fn page_size(&self) -> usize {
        self.catalog.page_size
    }

    /// Replaces the active criteria and recomputes the filtered result.
    ///
    /// The cursor snaps back to the first page so the projection starts over;
    /// a resubmission of identical criteria goes through the same recompute
    /// and lands in the same state.
    pub fn apply_filter(&mut self, criteria: FilterCriteria) {
        let _span = tracing::debug_span!(
            "apply_filter",
            total_books = self.catalog.books.len(),
            title_len = criteria.title.len(),
            genre = ?criteria.genre,
            author = ?criteria.author
        )
        .entered();

        self.matches = filter::apply(&self.catalog.books, &criteria);
        self.criteria = criteria;
        self.cursor.reset();

        tracing::debug!(match_count = self.matches.len(), "filter applied");
    }

    /// The slice of `matches` currently visible.
    #[must_use]
    pub fn visible_range(&self) -> Range<usize> {
        self.cursor.visible_range(self.page_size(), self.matches.len())
    }

    /// Matched entries not yet revealed. Never negative.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.cursor.remaining(self.page_size(), self.matches.len())
    }

    /// `true` when every matched entry is already visible.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.cursor.is_exhausted(self.page_size(), self.matches.len())
    }

    /// The palette currently in force: day as loaded, night as its swap.
    #[must_use]
    pub fn active_theme(&self) -> Theme {
        match self.theme_choice {
            ThemeChoice::Day => self.day_theme.clone(),
            ThemeChoice::Night => self.day_theme.swapped(),
        }
    }
}
