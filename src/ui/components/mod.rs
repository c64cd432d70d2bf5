//! Composable UI component renderers.
//!
//! Each component renders one part of the interface and returns the next
//! free row, so layouts read as a straight run of calls.
//!
//! # Components
//!
//! - [`header`]: Title bar with the shown-book count
//! - [`footer`]: Keybinding hints for the open panel
//! - [`list`]: Preview table (TITLE, AUTHOR) with the show-more control
//! - [`search`]: Three-field search form box
//! - [`settings`]: Day/night theme selector box
//! - [`detail`]: Full book view with scrollable description
//! - [`empty`]: No-results message
//!
//! # Layout Modes
//!
//! One high-level layout function per screen mode:
//!
//! - [`render_browse_mode`]: Header + Table + Show more + Footer
//! - [`render_search_mode`]: Header + Form box + Table + Footer
//! - [`render_settings_mode`]: Header + Selector box + Table + Footer
//! - [`render_detail_mode`]: Header + Book view + Footer
//!
//! # Example
//!
//! ```rust
//! use zibrary::domain::Catalog;
//! use zibrary::ui::components::render_browse_mode;
//! use zibrary::ui::{Screen, ThemeChoice};
//!
//! let screen = Screen::new(&Catalog::builtin(), ThemeChoice::Day);
//! render_browse_mode(&screen, 80, 24);
//! ```

mod header;
mod footer;
mod search;
mod settings;
mod list;
mod detail;
mod empty;

use crate::app::modes::Overlay;
use crate::ui::helpers::position_cursor;
use crate::ui::screen::Screen;
use crate::ui::theme::{Theme, ThemeColors};

use detail::render_detail;
use empty::render_empty_state;
use footer::render_footer;
use header::render_header;
use list::{render_list_headers, render_list_rows, render_show_more};
use search::render_search_form;
use settings::render_settings_form;

/// Chrome rows around the list in browse mode: blank line, header, two
/// borders, column headers, show-more line, footer.
const BROWSE_CHROME_ROWS: usize = 7;

/// Chrome rows in search mode; the form box adds five more than browse
/// mode keeps for the show-more line.
const SEARCH_CHROME_ROWS: usize = 11;

/// Chrome rows in settings mode.
const SETTINGS_CHROME_ROWS: usize = 9;

/// Paints the whole pane in the surface color.
///
/// Runs before any mode layout so the day or night surface covers every
/// cell, including rows no component touches.
pub fn fill_background(rows: usize, cols: usize, colors: &ThemeColors) {
    for row in 1..=rows {
        position_cursor(row, 1);
        print!("{}", Theme::bg(&colors.light));
        print!("{}", " ".repeat(cols));
    }
    print!("{}", Theme::reset());
}

/// Renders a horizontal border line at the specified row.
///
/// Used to separate UI sections (header/table, table/footer).
///
/// # Returns
///
/// The next available row position (row + 1)
fn render_border(row: usize, colors: &ThemeColors, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::fg(&colors.dark));
    print!("{}", Theme::bg(&colors.light));
    print!("{}", "─".repeat(cols));
    print!("{}", Theme::reset());
    row + 1
}

/// Renders the browse layout (no overlay open).
///
/// Layout structure:
/// ```text
/// [blank line]
/// [Header]
/// [Border]
/// [Table Headers]
/// [Table Rows]
/// [Show more (N)]
/// [No-results message, when shown]
/// [Blank padding to fill screen]
/// [Border]
/// [Footer]
/// ```
pub fn render_browse_mode(screen: &Screen, cols: usize, rows: usize) {
    let colors = screen.colors();
    let capacity = rows.saturating_sub(BROWSE_CHROME_ROWS);
    let mut current_row = 2;

    current_row = render_header(current_row, &header_title(screen), colors, cols);
    current_row = render_border(current_row, colors, cols);
    current_row = render_list_headers(current_row, colors, cols);
    current_row = render_list_rows(current_row, screen, capacity, cols);
    current_row = render_show_more(current_row, screen, cols);
    if screen.no_results() {
        render_empty_state(current_row, colors, cols);
    }

    render_bottom_chrome(screen, cols, rows);
}

/// Renders the search layout: the form box above the current results.
///
/// Layout structure:
/// ```text
/// [blank line]
/// [Header]
/// [Border]
/// [Search Form - 5 lines]
/// [Table Headers]
/// [Table Rows]
/// [Blank padding to fill screen]
/// [Border]
/// [Footer]
/// ```
pub fn render_search_mode(screen: &Screen, cols: usize, rows: usize) {
    let colors = screen.colors();
    let capacity = rows.saturating_sub(SEARCH_CHROME_ROWS);
    let mut current_row = 2;

    current_row = render_header(current_row, &header_title(screen), colors, cols);
    current_row = render_border(current_row, colors, cols);
    current_row = render_search_form(current_row, &screen.search_form, colors, cols);
    current_row = render_list_headers(current_row, colors, cols);
    current_row = render_list_rows(current_row, screen, capacity, cols);
    if screen.no_results() {
        render_empty_state(current_row, colors, cols);
    }

    render_bottom_chrome(screen, cols, rows);
}

/// Renders the settings layout: the theme selector above the current results.
pub fn render_settings_mode(screen: &Screen, cols: usize, rows: usize) {
    let colors = screen.colors();
    let capacity = rows.saturating_sub(SETTINGS_CHROME_ROWS);
    let mut current_row = 2;

    current_row = render_header(current_row, &header_title(screen), colors, cols);
    current_row = render_border(current_row, colors, cols);
    current_row = render_settings_form(current_row, &screen.settings_form, colors, cols);
    current_row = render_list_headers(current_row, colors, cols);
    render_list_rows(current_row, screen, capacity, cols);

    render_bottom_chrome(screen, cols, rows);
}

/// Renders the detail layout: the full book view in place of the table.
pub fn render_detail_mode(screen: &Screen, cols: usize, rows: usize) {
    let colors = screen.colors();
    let mut current_row = 2;

    current_row = render_header(current_row, &header_title(screen), colors, cols);
    current_row = render_border(current_row, colors, cols);

    let detail_end = rows.saturating_sub(3);
    if detail_end >= current_row {
        render_detail(current_row, detail_end, screen, cols);
    }

    render_bottom_chrome(screen, cols, rows);
}

/// Renders the bottom border and the footer hints for the open panel.
fn render_bottom_chrome(screen: &Screen, cols: usize, rows: usize) {
    let footer_start = rows.saturating_sub(1);
    let border_row = footer_start.saturating_sub(1);

    render_border(border_row, screen.colors(), cols);
    render_footer(footer_start, footer_text(screen.overlay()), screen.colors(), cols);
}

/// Title bar text: the plugin name and how many previews are on screen.
fn header_title(screen: &Screen) -> String {
    format!(" Zibrary ({}) ", screen.shown().len())
}

/// Keybinding hints for the open panel.
const fn footer_text(overlay: Option<Overlay>) -> &'static str {
    match overlay {
        None => "j/k: navigate  Enter: open  m: show more  /: search  s: settings  q: quit",
        Some(Overlay::Search) => "Tab: next field  Left/Right: choose  Enter: search  ESC: cancel",
        Some(Overlay::Settings) => "Left/Right: choose  Enter: save  ESC: cancel",
        Some(Overlay::Detail) => "j/k: scroll  ESC: close",
    }
}
