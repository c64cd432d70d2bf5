//! Settings form component renderer.
//!
//! Renders the theme selector inside a bordered frame, matching the search
//! form box style.

use crate::ui::helpers::position_cursor;
use crate::ui::screen::SettingsForm;
use crate::ui::theme::{Theme, ThemeChoice, ThemeColors};

/// Horizontal margin for the form box (spaces on left and right).
const SETTINGS_BOX_MARGIN: usize = 5;

/// Renders the settings form box at the specified row.
///
/// Displays a 3-line bordered box with the day/night selector. The drafted
/// choice shows between angle brackets; the alternative is listed dim after
/// it so both options stay visible.
///
/// # Layout
///
/// ```text
/// [margin] ┌───────────────────────┐ [margin]
/// [margin] │ Theme: < Day >  Night │ [margin]
/// [margin] └───────────────────────┘ [margin]
/// ```
///
/// # Returns
///
/// The next available row position (row + 3)
pub fn render_settings_form(row: usize, form: &SettingsForm, colors: &ThemeColors, cols: usize) -> usize {
    let box_width = cols.saturating_sub(SETTINGS_BOX_MARGIN * 2);
    let inner_width = box_width.saturating_sub(2);

    position_cursor(row, 1);
    print!("{}", " ".repeat(SETTINGS_BOX_MARGIN));
    print!("{}", Theme::fg(&colors.dark));
    print!("{}", Theme::bg(&colors.light));
    print!("┌{}┐", "─".repeat(inner_width));
    print!("{}", Theme::reset());

    let (chosen, other) = match form.choice() {
        ThemeChoice::Day => ("Day", "Night"),
        ThemeChoice::Night => ("Night", "Day"),
    };
    let text = format!(" Theme: < {chosen} >");
    let text_len = text.chars().count();
    let other_len = other.chars().count() + 2;
    let padding = inner_width.saturating_sub(text_len + other_len);

    position_cursor(row + 1, 1);
    print!("{}", " ".repeat(SETTINGS_BOX_MARGIN));
    print!("{}", Theme::fg(&colors.dark));
    print!("{}", Theme::bg(&colors.light));
    print!("│");
    print!("{}", Theme::bold());
    print!("{text}");
    print!("{}", Theme::reset());
    print!("{}", Theme::dim());
    print!("{}", Theme::fg(&colors.dark));
    print!("{}", Theme::bg(&colors.light));
    print!("  {other}");
    print!("{}", Theme::reset());
    print!("{}", Theme::fg(&colors.dark));
    print!("{}", Theme::bg(&colors.light));
    print!("{}", " ".repeat(padding));
    print!("│");
    print!("{}", Theme::reset());

    position_cursor(row + 2, 1);
    print!("{}", " ".repeat(SETTINGS_BOX_MARGIN));
    print!("{}", Theme::fg(&colors.dark));
    print!("{}", Theme::bg(&colors.light));
    print!("└{}┘", "─".repeat(inner_width));
    print!("{}", Theme::reset());

    row + 3
}
