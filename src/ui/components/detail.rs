//! Detail overlay component renderer.
//!
//! Renders the full book view: title, author line with publication year,
//! genres, cover location, and the scrollable description.

use crate::ui::helpers::{position_cursor, wrap_text};
use crate::ui::screen::Screen;
use crate::ui::theme::{Theme, ThemeColors};

/// Left margin for the detail text block.
const DETAIL_MARGIN: usize = 3;

/// Line emphasis within the detail block.
#[derive(Clone, Copy)]
enum Emphasis {
    Normal,
    Bold,
    Dim,
}

/// Renders the detail panel between `start_row` and `end_row` inclusive.
///
/// The description wraps to the pane width and scrolls by whole lines; the
/// scroll offset is clamped so the last page stays full. Rows render
/// top-down in a fixed order:
///
/// ```text
/// [blank line]
/// TITLE
/// author line
/// genres
/// cover location
/// [blank line]
/// description...
/// ```
pub fn render_detail(start_row: usize, end_row: usize, screen: &Screen, cols: usize) {
    let Some(detail) = screen.detail() else {
        return;
    };
    let colors = screen.colors();

    let mut row = start_row + 1;
    row = render_detail_line(row, &detail.title, Emphasis::Bold, colors, cols);
    row = render_detail_line(row, &detail.subtitle, Emphasis::Dim, colors, cols);
    if !detail.genres.is_empty() {
        row = render_detail_line(row, &detail.genres.join(", "), Emphasis::Normal, colors, cols);
    }
    if !detail.image.is_empty() {
        let cover = format!("cover: {}", detail.image);
        row = render_detail_line(row, &cover, Emphasis::Dim, colors, cols);
    }
    row += 1;

    if row > end_row {
        return;
    }

    let body_width = cols.saturating_sub(DETAIL_MARGIN * 2);
    let wrapped = wrap_text(&detail.description, body_width);
    let available = end_row - row + 1;

    let max_offset = wrapped.len().saturating_sub(available);
    let offset = screen.detail_scroll().min(max_offset);
    let visible_end = (offset + available).min(wrapped.len());

    for line in &wrapped[offset..visible_end] {
        row = render_detail_line(row, line, Emphasis::Normal, colors, cols);
    }
}

/// Renders one left-margined line of the detail block.
///
/// # Returns
///
/// The next available row position (row + 1)
fn render_detail_line(
    row: usize,
    text: &str,
    emphasis: Emphasis,
    colors: &ThemeColors,
    cols: usize,
) -> usize {
    let clipped: String = text.chars().take(cols.saturating_sub(DETAIL_MARGIN)).collect();
    let text_len = clipped.chars().count();

    position_cursor(row, 1);
    match emphasis {
        Emphasis::Normal => {}
        Emphasis::Bold => print!("{}", Theme::bold()),
        Emphasis::Dim => print!("{}", Theme::dim()),
    }
    print!("{}", Theme::fg(&colors.dark));
    print!("{}", Theme::bg(&colors.light));
    print!("{}", " ".repeat(DETAIL_MARGIN));
    print!("{clipped}");
    print!("{}", " ".repeat(cols.saturating_sub(DETAIL_MARGIN + text_len)));
    print!("{}", Theme::reset());
    row + 1
}
