//! Footer component renderer.
//!
//! Renders the footer help bar with centered keybinding hints.

use crate::ui::theme::{Theme, ThemeColors};
use crate::ui::helpers::position_cursor;

/// Renders the footer help bar at the specified row.
///
/// Displays keybinding hints centered horizontally with dimmed styling. Pads
/// the line to fill the entire terminal width. If the hint text exceeds the
/// terminal width it is truncated to fit, which keeps narrow panes from
/// wrapping the footer onto a second line.
///
/// # Returns
///
/// The next available row position (row + 1)
pub fn render_footer(row: usize, keybindings: &str, colors: &ThemeColors, cols: usize) -> usize {
    let help_text: String = keybindings.chars().take(cols).collect();

    let text_len = help_text.chars().count();
    let padding = (cols.saturating_sub(text_len)) / 2;

    position_cursor(row, 1);
    print!("{}", Theme::dim());
    print!("{}", Theme::fg(&colors.dark));
    print!("{}", Theme::bg(&colors.light));
    print!("{}", " ".repeat(padding));
    print!("{help_text}");
    print!("{}", " ".repeat(cols.saturating_sub(padding + text_len)));
    print!("{}", Theme::reset());
    row + 1
}
