//! Book list component renderer.
//!
//! Renders the preview rows as a two-column table with TITLE and AUTHOR
//! columns, a selection bar, title-match highlighting, and the show-more
//! control underneath.

use crate::ui::helpers::{self, position_cursor};
use crate::ui::screen::Screen;
use crate::ui::theme::{Theme, ThemeColors};
use crate::ui::viewmodel::Preview;

/// Fixed width of the TITLE column, separator included.
const TITLE_COLUMN_WIDTH: usize = 41;

/// Gap kept between a clipped title and the AUTHOR column.
const SAFETY_MARGIN: usize = 2;

/// Renders the table column headers at the specified row.
///
/// # Returns
///
/// The next available row position (row + 1)
pub fn render_list_headers(row: usize, colors: &ThemeColors, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&colors.dark));
    print!("{}", Theme::bg(&colors.light));
    let line = format!("{:<width$} {:<}", "TITLE", "AUTHOR", width = TITLE_COLUMN_WIDTH);
    let line_len = line.chars().count();
    print!("{line}");
    print!("{}", " ".repeat(cols.saturating_sub(line_len)));
    print!("{}", Theme::reset());
    row + 1
}

/// Renders the visible window of preview rows starting at the specified row.
///
/// The window is centered on the cursor: the selected row sits at the
/// midpoint, shifted only when the window would run past either end of the
/// list. Rows outside the window are not drawn at all, so a long result
/// scrolls under a fixed chrome.
///
/// # Returns
///
/// The next available row position (row + number of visible rows)
pub fn render_list_rows(row: usize, screen: &Screen, capacity: usize, cols: usize) -> usize {
    let shown = screen.shown();
    let (start, end) = visible_window(shown.len(), screen.cursor(), capacity);

    let mut current_row = row;
    for (relative_idx, preview) in shown[start..end].iter().enumerate() {
        let is_selected = start + relative_idx == screen.cursor();
        current_row = render_list_row(current_row, preview, is_selected, screen.colors(), cols);
    }
    current_row
}

/// Renders the show-more control at the specified row.
///
/// The label always carries the remaining count. An enabled control draws
/// bold; a disabled one draws dim, signalling that every match is already
/// on screen.
///
/// # Returns
///
/// The next available row position (row + 1)
pub fn render_show_more(row: usize, screen: &Screen, cols: usize) -> usize {
    let colors = screen.colors();
    let label = screen.show_more_label();
    let label_len = label.chars().count() + 2;

    position_cursor(row, 1);
    if screen.show_more_disabled() {
        print!("{}", Theme::dim());
    } else {
        print!("{}", Theme::bold());
    }
    print!("{}", Theme::fg(&colors.dark));
    print!("{}", Theme::bg(&colors.light));
    print!("  {label}");
    print!("{}", " ".repeat(cols.saturating_sub(label_len)));
    print!("{}", Theme::reset());
    row + 1
}

/// Renders a single preview row.
///
/// # Layout
///
/// ```text
/// TITLE (clipped to the column) [gap] AUTHOR [padding to fill line]
/// ```
///
/// The selected row swaps the palette colors for the full line, which is why
/// every row pads to the terminal width. Title-match highlighting applies
/// only to unselected rows.
fn render_list_row(
    row: usize,
    preview: &Preview,
    is_selected: bool,
    colors: &ThemeColors,
    cols: usize,
) -> usize {
    position_cursor(row, 1);

    if is_selected {
        print!("{}", Theme::fg(&colors.light));
        print!("{}", Theme::bg(&colors.dark));
    } else {
        print!("{}", Theme::fg(&colors.dark));
        print!("{}", Theme::bg(&colors.light));
    }

    let title = clip(&preview.title, TITLE_COLUMN_WIDTH - SAFETY_MARGIN);
    helpers::render_highlighted_text(&title, preview.title_match, colors, is_selected);

    let title_len = title.chars().count();
    print!("{}", " ".repeat(TITLE_COLUMN_WIDTH.saturating_sub(title_len)));

    let author = clip(&preview.author, cols.saturating_sub(TITLE_COLUMN_WIDTH + SAFETY_MARGIN));
    print!("{author}");

    let line_len = TITLE_COLUMN_WIDTH + author.chars().count();
    print!("{}", " ".repeat(cols.saturating_sub(line_len)));

    print!("{}", Theme::reset());
    row + 1
}

/// Clips text to a maximum character width, appending "..." when cut.
fn clip(text: &str, max_width: usize) -> String {
    if text.chars().count() <= max_width {
        return text.to_string();
    }
    let keep = max_width.saturating_sub(3);
    let head: String = text.chars().take(keep).collect();
    format!("{head}...")
}

/// Computes the visible window over `len` rows, centered on `selected`.
///
/// The selected index sits at the window midpoint; near either end the
/// window shifts so it still shows `capacity` rows whenever the list has
/// that many.
fn visible_window(len: usize, selected: usize, capacity: usize) -> (usize, usize) {
    let mut start = selected.saturating_sub(capacity / 2);
    let end = (start + capacity).min(len);

    if end - start < capacity && len >= capacity {
        start = end.saturating_sub(capacity);
    }
    (start, end)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_shows_everything_when_the_list_fits() {
        assert_eq!(visible_window(5, 2, 10), (0, 5));
    }

    #[test]
    fn window_centers_on_the_selection_in_the_middle_of_a_long_list() {
        assert_eq!(visible_window(100, 50, 11), (45, 56));
    }

    #[test]
    fn window_clamps_at_both_ends() {
        assert_eq!(visible_window(100, 1, 10), (0, 10));
        assert_eq!(visible_window(100, 99, 10), (90, 100));
    }

    #[test]
    fn window_of_an_empty_list_is_empty() {
        assert_eq!(visible_window(0, 0, 10), (0, 0));
    }

    #[test]
    fn clip_keeps_short_text_and_marks_cut_text() {
        assert_eq!(clip("Dune", 10), "Dune");
        assert_eq!(clip("The Hitchhiker's Guide to the Galaxy", 12), "The Hitch...");
    }
}
