//! Top-level rendering coordinator.
//!
//! The main rendering entry point: paints the themed surface, then picks a
//! layout from whichever overlay the screen has open.
//!
//! # Architecture
//!
//! Rendering is a pure function of the [`Screen`]: the core updated it
//! through commands earlier in the event cycle, and this module only reads.
//! Mode selection mirrors the overlay state, so a batch that opened the
//! detail overlay paints the detail layout on the very next frame.

use crate::app::modes::Overlay;
use crate::ui::components;
use crate::ui::screen::Screen;

/// Renders the plugin UI to stdout.
///
/// Fills the pane with the active surface color and delegates to the layout
/// for the open overlay, falling back to the browse layout when none is
/// open. Prints ANSI-styled output using `print!`; does not clear the
/// screen or manage cursor visibility.
///
/// # Example
///
/// ```rust
/// use zibrary::domain::Catalog;
/// use zibrary::ui::{render, Screen, ThemeChoice};
///
/// let screen = Screen::new(&Catalog::builtin(), ThemeChoice::Day);
/// render(&screen, 24, 80);
/// ```
pub fn render(screen: &Screen, rows: usize, cols: usize) {
    components::fill_background(rows, cols, screen.colors());

    match screen.overlay() {
        None => components::render_browse_mode(screen, cols, rows),
        Some(Overlay::Search) => components::render_search_mode(screen, cols, rows),
        Some(Overlay::Settings) => components::render_settings_mode(screen, cols, rows),
        Some(Overlay::Detail) => components::render_detail_mode(screen, cols, rows),
    }
}
