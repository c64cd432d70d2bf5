//! Shared rendering utilities.
//!
//! Low-level helpers used across the UI components: cursor positioning,
//! title-match highlighting with proper ANSI sequence management, and the
//! word wrap used by the detail overlay.

use crate::ui::theme::{Theme, ThemeColors};

/// Positions the cursor at a specific row and column.
///
/// Uses ANSI escape sequence `\u{1b}[{row};{col}H`. Coordinates are
/// 1-indexed (row 1 = first row, col 1 = first column).
///
/// # Example
///
/// ```rust
/// use zibrary::ui::helpers::position_cursor;
///
/// position_cursor(5, 1); // Move to start of row 5
/// print!("Content at row 5");
/// ```
pub fn position_cursor(row: usize, col: usize) {
    print!("\u{1b}[{row};{col}H");
}

/// Renders a title with its matched range in inverse video.
///
/// The range uses character indices, not byte indices, so multi-byte titles
/// highlight correctly. The palette has exactly two colors, so the highlight
/// swaps them: matched characters draw light-on-dark against the base
/// dark-on-light line. Selected rows are already inverted and skip the
/// highlight entirely.
///
/// The base colors are re-applied after the match instead of resetting, so a
/// line that paints its background stays painted to the end.
///
/// # Example
///
/// ```rust
/// use zibrary::ui::helpers::render_highlighted_text;
/// use zibrary::ui::Theme;
///
/// let theme = Theme::default();
/// render_highlighted_text("The Hobbit", Some((0, 3)), &theme.colors, false);
/// // Prints "The Hobbit" with "The" inverted
/// ```
pub fn render_highlighted_text(
    text: &str,
    title_match: Option<(usize, usize)>,
    colors: &ThemeColors,
    is_selected: bool,
) {
    let Some((start, end)) = title_match else {
        print!("{text}");
        return;
    };
    if is_selected || start >= end {
        print!("{text}");
        return;
    }

    let chars: Vec<char> = text.chars().collect();
    let start = start.min(chars.len());
    let end = end.min(chars.len());

    let before: String = chars[..start].iter().collect();
    let matched: String = chars[start..end].iter().collect();
    let after: String = chars[end..].iter().collect();

    print!("{before}");
    print!("{}{}", Theme::fg(&colors.light), Theme::bg(&colors.dark));
    print!("{matched}");
    print!("{}{}", Theme::fg(&colors.dark), Theme::bg(&colors.light));
    print!("{after}");
}

/// Wraps text to a column width, breaking on spaces.
///
/// Words wider than the line are hard-broken. Width is measured in
/// characters. A zero width yields no lines.
///
/// # Example
///
/// ```rust
/// use zibrary::ui::helpers::wrap_text;
///
/// let lines = wrap_text("a quiet tale of unexpected journeys", 12);
/// assert_eq!(lines[0], "a quiet tale");
/// ```
#[must_use]
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return Vec::new();
    }

    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for word in text.split_whitespace() {
        let mut word = word.to_string();
        let mut word_len = word.chars().count();

        while word_len > width {
            if current_len > 0 {
                lines.push(std::mem::take(&mut current));
                current_len = 0;
            }
            let head: String = word.chars().take(width).collect();
            word = word.chars().skip(width).collect();
            word_len -= width;
            lines.push(head);
        }
        if word_len == 0 {
            continue;
        }

        if current_len == 0 {
            current = word;
            current_len = word_len;
        } else if current_len + 1 + word_len <= width {
            current.push(' ');
            current.push_str(&word);
            current_len += 1 + word_len;
        } else {
            lines.push(std::mem::take(&mut current));
            current = word;
            current_len = word_len;
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }

    lines
}
