//! Header component renderer.
//!
//! Renders the plugin title bar with centered text and the active palette.

use crate::ui::theme::{Theme, ThemeColors};
use crate::ui::helpers::position_cursor;

/// Renders the header title bar at the specified row.
///
/// Displays the title centered horizontally with bold styling and pads the
/// line to fill the entire terminal width so the surface color is unbroken.
///
/// # Layout
///
/// ```text
/// [left padding] TITLE [right padding]
/// ```
///
/// Padding is split evenly on both sides. If the terminal width cannot
/// evenly divide, right padding is slightly larger.
///
/// # Returns
///
/// The next available row position (row + 1)
pub fn render_header(row: usize, title: &str, colors: &ThemeColors, cols: usize) -> usize {
    let title_len = title.chars().count();
    let padding = (cols.saturating_sub(title_len)) / 2;

    position_cursor(row, 1);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&colors.dark));
    print!("{}", Theme::bg(&colors.light));

    print!("{}", " ".repeat(padding));
    print!("{title}");
    print!("{}", " ".repeat(cols.saturating_sub(padding + title_len)));

    print!("{}", Theme::reset());
    row + 1
}
