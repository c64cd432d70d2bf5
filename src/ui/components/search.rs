//! Search form component renderer.
//!
//! Renders the three-field search form inside a bordered frame: the title
//! text input and the genre and author selects.

use crate::ui::helpers::position_cursor;
use crate::ui::screen::{SearchField, SearchForm};
use crate::ui::theme::{Theme, ThemeColors};

/// Horizontal margin for the form box (spaces on left and right).
const SEARCH_BOX_MARGIN: usize = 5;

/// Renders the search form box at the specified row.
///
/// Displays a 5-line bordered box with one line per field. The focused field
/// carries a `>` marker and bold text; selects show their current option
/// between angle brackets.
///
/// # Layout
///
/// ```text
/// [margin] ┌──────────────────────────┐ [margin]
/// [margin] │ > Title: dune            │ [margin]
/// [margin] │   Genre: < All Genres >  │ [margin]
/// [margin] │   Author: < All Authors >│ [margin]
/// [margin] └──────────────────────────┘ [margin]
/// ```
///
/// The box width is `cols - (2 * SEARCH_BOX_MARGIN)`; the inner content
/// width subtracts the two border columns.
///
/// # Returns
///
/// The next available row position (row + 5)
pub fn render_search_form(row: usize, form: &SearchForm, colors: &ThemeColors, cols: usize) -> usize {
    let box_width = cols.saturating_sub(SEARCH_BOX_MARGIN * 2);
    let inner_width = box_width.saturating_sub(2);

    render_box_edge(row, '┌', '┐', inner_width, colors);

    let title_text = format!("Title: {}", form.title);
    render_box_line(row + 1, &title_text, form.focus == SearchField::Title, inner_width, colors);

    let genre_text = format!("Genre: < {} >", form.genre_label());
    render_box_line(row + 2, &genre_text, form.focus == SearchField::Genre, inner_width, colors);

    let author_text = format!("Author: < {} >", form.author_label());
    render_box_line(row + 3, &author_text, form.focus == SearchField::Author, inner_width, colors);

    render_box_edge(row + 4, '└', '┘', inner_width, colors);

    row + 5
}

/// Renders the top or bottom border of the form box.
fn render_box_edge(row: usize, left: char, right: char, inner_width: usize, colors: &ThemeColors) {
    position_cursor(row, 1);
    print!("{}", " ".repeat(SEARCH_BOX_MARGIN));
    print!("{}", Theme::fg(&colors.dark));
    print!("{}", Theme::bg(&colors.light));
    print!("{left}{}{right}", "─".repeat(inner_width));
    print!("{}", Theme::reset());
}

/// Renders one field line of the form box, focus marker included.
fn render_box_line(row: usize, text: &str, focused: bool, inner_width: usize, colors: &ThemeColors) {
    let marker = if focused { " > " } else { "   " };
    let content = format!("{marker}{text}");
    let content_len = content.chars().count().min(inner_width);
    let clipped: String = content.chars().take(inner_width).collect();
    let padding = inner_width.saturating_sub(content_len);

    position_cursor(row, 1);
    print!("{}", " ".repeat(SEARCH_BOX_MARGIN));
    print!("{}", Theme::fg(&colors.dark));
    print!("{}", Theme::bg(&colors.light));
    print!("│");
    if focused {
        print!("{}", Theme::bold());
    }
    print!("{clipped}");
    print!("{}", " ".repeat(padding));
    print!("{}", Theme::reset());
    print!("{}", Theme::fg(&colors.dark));
    print!("{}", Theme::bg(&colors.light));
    print!("│");
    print!("{}", Theme::reset());
}
