//! Render commands emitted by the event handler.
//!
//! This module defines the [`Command`] type, the full vocabulary of screen
//! updates the core can request. Commands bridge pure state transitions and
//! the retained screen model: the handler never draws, it only describes what
//! changed, and the shim replays the batch against [`crate::ui::Screen`].
//!
//! # Architecture
//!
//! The event handler returns a `Vec<Command>` after processing each event,
//! allowing several screen updates to be applied atomically. An empty batch
//! means the event changed nothing observable.
//!
//! The two list commands are deliberately distinct. [`Command::ReplaceList`]
//! is the only command allowed to discard displayed rows and is emitted on
//! every fresh filter application, even when the new result overlaps the old
//! one. [`Command::AppendList`] carries only the newly revealed slice when
//! another page-full is shown, so rows already displayed are never rebuilt.

use crate::app::modes::Overlay;
use crate::ui::viewmodel::{DetailContent, Preview};

/// A single screen update requested by the core.
///
/// Commands are produced by the event handler and applied in order by the
/// screen model. They represent the boundary between pure state
/// transformations and everything the pane actually shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Discards every displayed preview and shows these instead.
    ///
    /// Emitted on startup and after each search submission.
    ReplaceList(Vec<Preview>),

    /// Appends previews after those already displayed, which stay untouched.
    ///
    /// Emitted when the show-more control reveals another page-full.
    AppendList(Vec<Preview>),

    /// Updates the count shown in the "Show more (N)" label.
    SetRemaining(usize),

    /// Enables or disables the show-more control.
    ///
    /// Disabled exactly when nothing is left to reveal.
    SetShowMoreDisabled(bool),

    /// Shows or hides the no-results message.
    SetNoResults(bool),

    /// Opens a modal overlay.
    OpenOverlay(Overlay),

    /// Closes a modal overlay.
    CloseOverlay(Overlay),

    /// Replaces the detail overlay content with a newly selected book.
    SetDetail(DetailContent),

    /// Applies a palette to the whole screen.
    ///
    /// Carries the resolved color pair rather than the day/night choice so
    /// the screen never needs to know how palettes are derived.
    SetThemeColors {
        /// Ink color: text, borders, selection background.
        dark: String,
        /// Surface color: pane background, selected-row text.
        light: String,
    },

    /// Scrolls the list back to the first row.
    ScrollTop,
}
