//! Projection of application state into render-command batches.
//!
//! This is the only place list content is decided. Two paths exist and they
//! are never mixed: [`refresh`] rebuilds the visible window from scratch for
//! a fresh filtered result, and [`reveal_more`] ships only the newly revealed
//! slice when the cursor advances. Both end with the same pair of show-more
//! commands so the control can never disagree with the list beside it.

use crate::app::commands::Command;
use crate::app::state::AppState;
use crate::domain::{Book, Catalog};
use crate::ui::viewmodel::{DetailContent, Preview};
use std::ops::Range;

/// Builds the full-replace projection of the current state.
///
/// Emitted at startup and after every search submission. The replace command
/// discards displayed rows unconditionally, even when the new result overlaps
/// the old one; correctness here beats micro-reuse of rows.
#[must_use]
pub fn refresh(state: &AppState) -> Vec<Command> {
    let range = state.visible_range();
    tracing::debug!(visible = range.end, matches = state.matches.len(), "list refresh");

    let mut commands = vec![Command::ReplaceList(previews(state, range))];
    commands.extend(show_more_state(state));
    commands.push(Command::SetNoResults(state.matches.is_empty()));
    commands
}

/// Builds the append-only projection after the cursor advanced.
///
/// Rows already on screen are not rebuilt; only `appended` travels, followed
/// by the refreshed show-more pair. Emptiness cannot change on this path, so
/// no no-results command is included.
#[must_use]
pub fn reveal_more(state: &AppState, appended: Range<usize>) -> Vec<Command> {
    tracing::debug!(from = appended.start, to = appended.end, "list append");

    let mut commands = vec![Command::AppendList(previews(state, appended))];
    commands.extend(show_more_state(state));
    commands
}

/// Builds the detail overlay payload for one book.
///
/// The subtitle is formatted here so the screen never touches dates or the
/// author table: `"<Author> (<Year>)"`.
#[must_use]
pub fn detail_content(catalog: &Catalog, book: &Book) -> DetailContent {
    DetailContent {
        title: book.title.clone(),
        subtitle: format!("{} ({})", catalog.author_name(&book.author), book.year()),
        description: book.description.clone(),
        image: book.image.clone(),
        genres: book
            .genres
            .iter()
            .map(|id| catalog.genre_name(id).to_string())
            .collect(),
    }
}

/// Builds the palette command for the active theme.
#[must_use]
pub fn theme_colors(state: &AppState) -> Command {
    let theme = state.active_theme();
    Command::SetThemeColors {
        dark: theme.colors.dark,
        light: theme.colors.light,
    }
}

/// The command pair keeping the show-more control consistent with the list.
///
/// Disabled exactly when the remaining count is zero; the two are computed
/// from the same numbers in the same place so they cannot diverge.
fn show_more_state(state: &AppState) -> [Command; 2] {
    let remaining = state.remaining();
    [
        Command::SetRemaining(remaining),
        Command::SetShowMoreDisabled(remaining == 0),
    ]
}

fn previews(state: &AppState, range: Range<usize>) -> Vec<Preview> {
    state.matches[range]
        .iter()
        .map(|book| preview(state, book))
        .collect()
}

fn preview(state: &AppState, book: &Book) -> Preview {
    Preview {
        id: book.id.clone(),
        title: book.title.clone(),
        author: state.catalog.author_name(&book.author).to_string(),
        image: book.image.clone(),
        title_match: state.criteria.title_match(&book.title),
    }
}
