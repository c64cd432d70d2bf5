//! Event handling and state transition logic.
//!
//! This module implements the single dispatch entry point that processes
//! every inbound interaction, translating it into state changes and render
//! commands. It is the primary control flow coordinator for the plugin.
//!
//! # Architecture
//!
//! The handler follows a unidirectional data flow pattern:
//! 1. Interactions arrive from the shim as [`Event`] values
//! 2. [`handle_event`] pattern-matches the event type
//! 3. State mutations occur via `AppState` methods
//! 4. Render commands are collected and returned for the screen model
//!
//! Handling is synchronous and deterministic: the same state and event always
//! produce the same commands, which is what the scenario tests lean on.
//!
//! # Example
//!
//! ```rust
//! use zibrary::app::{handle_event, AppState, Event};
//! use zibrary::domain::Catalog;
//! use zibrary::ui::theme::{Theme, ThemeChoice};
//!
//! let mut state = AppState::new(Catalog::builtin(), Theme::default(), ThemeChoice::Day);
//! let commands = handle_event(&mut state, &Event::ShowMore);
//! assert!(!commands.is_empty());
//! ```

use crate::app::commands::Command;
use crate::app::filter::FilterCriteria;
use crate::app::modes::Overlay;
use crate::app::state::AppState;
use crate::app::view;
use crate::ui::theme::ThemeChoice;

/// Interactions the core reacts to.
///
/// This is the complete inbound vocabulary; the shim maps raw key presses
/// onto these and nothing else crosses the boundary. Form-carrying variants
/// hold raw optional values because parsing with permissive defaults is the
/// core's job, not the screen's.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// The search form was submitted with its raw field values.
    ///
    /// `None` fields are treated as absent and fall back to permissive
    /// defaults during parsing.
    SubmitSearch {
        /// Raw title field text.
        title: Option<String>,
        /// Selected genre id, or `"any"`.
        genre: Option<String>,
        /// Selected author id, or `"any"`.
        author: Option<String>,
    },

    /// The show-more control was activated.
    ShowMore,

    /// A preview row was selected; carries the id rendered on that row.
    SelectPreview {
        /// Book id from the rendered preview.
        id: String,
    },

    /// The search overlay's open control was activated.
    OpenSearch,

    /// The settings overlay's open control was activated.
    OpenSettings,

    /// The search overlay was dismissed without submitting.
    CancelSearch,

    /// The settings overlay was dismissed without submitting.
    CancelSettings,

    /// The settings form was submitted with its raw theme value.
    SubmitSettings {
        /// Selected palette value, expected `"day"` or `"night"`.
        theme: Option<String>,
    },

    /// The detail overlay's close control was activated.
    CloseDetail,
}

/// Processes an event, mutates application state, and returns render commands.
///
/// This is the only dispatch entry point. It pattern-matches the event,
/// applies the transition to `state`, and collects the commands describing
/// every observable consequence. An event that changes nothing observable
/// (an exhausted show-more, an unknown preview id) returns an empty batch.
///
/// # Tracing
///
/// Each call creates a debug-level span with the event type.
///
/// # Example
///
/// ```rust
/// use zibrary::app::{handle_event, AppState, Event};
/// use zibrary::domain::Catalog;
/// use zibrary::ui::theme::{Theme, ThemeChoice};
///
/// let mut state = AppState::new(Catalog::builtin(), Theme::default(), ThemeChoice::Day);
/// let commands = handle_event(
///     &mut state,
///     &Event::SelectPreview { id: "no-such-book".to_string() },
/// );
/// assert!(commands.is_empty());
/// ```
pub fn handle_event(state: &mut AppState, event: &Event) -> Vec<Command> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::SubmitSearch { title, genre, author } => {
            let criteria =
                FilterCriteria::from_form(title.as_deref(), genre.as_deref(), author.as_deref());
            tracing::debug!(
                title = %criteria.title,
                genre = ?criteria.genre,
                author = ?criteria.author,
                "search submitted"
            );

            state.apply_filter(criteria);
            state.overlay = None;

            let mut commands = view::refresh(state);
            commands.push(Command::CloseOverlay(Overlay::Search));
            commands.push(Command::ScrollTop);
            commands
        }
        Event::ShowMore => {
            if state.is_exhausted() {
                tracing::debug!("show more ignored, nothing left to reveal");
                return vec![];
            }

            let old_end = state.visible_range().end;
            state.cursor.advance();
            let new_end = state.visible_range().end;

            tracing::debug!(revealed = new_end - old_end, pages = state.cursor.pages(), "page revealed");
            view::reveal_more(state, old_end..new_end)
        }
        Event::SelectPreview { id } => {
            let Some(book) = state.catalog.find_book(id) else {
                tracing::debug!(id = %id, "selected preview not in catalog, ignoring");
                return vec![];
            };

            tracing::debug!(id = %id, title = %book.title, "preview selected");
            let content = view::detail_content(&state.catalog, book);

            state.overlay = Some(Overlay::Detail);
            vec![
                Command::SetDetail(content),
                Command::OpenOverlay(Overlay::Detail),
            ]
        }
        Event::OpenSearch => {
            state.overlay = Some(Overlay::Search);
            vec![Command::OpenOverlay(Overlay::Search)]
        }
        Event::OpenSettings => {
            state.overlay = Some(Overlay::Settings);
            vec![Command::OpenOverlay(Overlay::Settings)]
        }
        Event::CancelSearch => {
            state.overlay = None;
            vec![Command::CloseOverlay(Overlay::Search)]
        }
        Event::CancelSettings => {
            state.overlay = None;
            vec![Command::CloseOverlay(Overlay::Settings)]
        }
        Event::SubmitSettings { theme } => {
            let choice = ThemeChoice::from_form_value(theme.as_deref());
            tracing::debug!(choice = choice.as_str(), "theme submitted");

            state.theme_choice = choice;
            state.overlay = None;

            vec![
                view::theme_colors(state),
                Command::CloseOverlay(Overlay::Settings),
            ]
        }
        Event::CloseDetail => {
            state.overlay = None;
            vec![Command::CloseOverlay(Overlay::Detail)]
        }
    }
}
