//! Empty state component renderer.
//!
//! Renders the message shown when a submitted filter matches nothing.

use crate::ui::theme::{Theme, ThemeColors};
use crate::ui::helpers::position_cursor;

/// First line of the no-results message.
const EMPTY_MESSAGE: &str = "No results found.";

/// Second line of the no-results message.
const EMPTY_SUBTITLE: &str = "Your filters might be too narrow.";

/// Renders the no-results message inside the list area.
///
/// Displays a centered two-line message starting one row below `start_row`,
/// leaving a blank line above so the message sits visibly apart from the
/// column headers.
///
/// # Layout
///
/// ```text
/// [blank line]
/// [left padding] No results found. [right padding]
/// [left padding] Your filters might be too narrow. [right padding]
/// ```
pub fn render_empty_state(start_row: usize, colors: &ThemeColors, cols: usize) {
    let msg_len = EMPTY_MESSAGE.chars().count();
    let msg_padding = (cols.saturating_sub(msg_len)) / 2;

    position_cursor(start_row + 1, 1);
    print!("{}", Theme::fg(&colors.dark));
    print!("{}", Theme::bg(&colors.light));
    print!("{}", " ".repeat(msg_padding));
    print!("{EMPTY_MESSAGE}");
    print!("{}", " ".repeat(cols.saturating_sub(msg_padding + msg_len)));
    print!("{}", Theme::reset());

    let sub_len = EMPTY_SUBTITLE.chars().count();
    let sub_padding = (cols.saturating_sub(sub_len)) / 2;

    position_cursor(start_row + 2, 1);
    print!("{}", Theme::dim());
    print!("{}", Theme::fg(&colors.dark));
    print!("{}", Theme::bg(&colors.light));
    print!("{}", " ".repeat(sub_padding));
    print!("{EMPTY_SUBTITLE}");
    print!("{}", " ".repeat(cols.saturating_sub(sub_padding + sub_len)));
    print!("{}", Theme::reset());
}
