//! Theme management and ANSI escape sequence generation.
//!
//! The palette model is deliberately tiny: two hex colors, `dark` and `light`.
//! Day renders dark text on a light surface; night is the same pair swapped.
//! Every built-in and custom palette follows that rule, which is what lets a
//! single `set-theme-colors` command restyle the whole screen.
//!
//! # TOML Format
//!
//! ```toml
//! name = "day"
//!
//! [colors]
//! dark = "#0a0a14"
//! light = "#ffffff"
//! ```
//!
//! # Example
//!
//! ```rust
//! use zibrary::ui::Theme;
//!
//! let theme = Theme::from_name("day").unwrap();
//! print!("{}", Theme::fg(&theme.colors.dark));
//! print!("{}Bold Text{}", Theme::bold(), Theme::reset());
//! ```

use crate::domain::error::{Result, ZibraryError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Day/night selection, the only theme state the core tracks.
///
/// Parsed from the settings form and from the plugin configuration with the
/// same permissive rule: `"night"` selects night, anything else is day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeChoice {
    /// Dark text on a light surface.
    #[default]
    Day,
    /// The day palette swapped.
    Night,
}

impl ThemeChoice {
    /// Parses a settings-form value.
    ///
    /// Missing or unrecognized values fall back to [`ThemeChoice::Day`]; a
    /// malformed form never fails the submission.
    #[must_use]
    pub fn from_form_value(value: Option<&str>) -> Self {
        match value {
            Some("night") => Self::Night,
            _ => Self::Day,
        }
    }

    /// Returns the form value this choice round-trips through.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Day => "day",
            Self::Night => "night",
        }
    }
}

/// Color scheme configuration for UI rendering.
///
/// Contains theme metadata and the color pair. Can be loaded from the built-in
/// palettes or a custom TOML file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Theme {
    /// Human-readable palette name.
    pub name: String,
    /// The color pair all UI elements derive from.
    pub colors: ThemeColors,
}

/// The two-color palette.
///
/// Text, borders, and selection backgrounds use `dark`; surfaces and selected
/// text use `light`. Both are hex strings (e.g. `"#0a0a14"`).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ThemeColors {
    /// Ink color: text, borders, selection background.
    pub dark: String,
    /// Surface color: pane background, selected-row text.
    pub light: String,
}

impl Theme {
    /// Loads a built-in palette by name.
    ///
    /// Supported names: `day`, `night`.
    ///
    /// # Returns
    ///
    /// - `Some(Theme)` if the palette name is recognized
    /// - `None` if the palette name is unknown
    ///
    /// # Example
    ///
    /// ```rust
    /// use zibrary::ui::Theme;
    ///
    /// let theme = Theme::from_name("night").unwrap();
    /// assert_eq!(theme.name, "night");
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let toml_str = match name {
            "day" => include_str!("../../themes/day.toml"),
            "night" => include_str!("../../themes/night.toml"),
            _ => return None,
        };

        toml::from_str(toml_str).ok()
    }

    /// Loads a palette from a TOML file.
    ///
    /// Custom palette files describe the day variant; the night variant is
    /// always derived with [`Theme::swapped`].
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or the TOML content does
    /// not parse into a palette.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;

        toml::from_str(&contents)
            .map_err(|e| ZibraryError::Theme(format!("failed to parse theme TOML: {e}")))
    }

    /// Returns the palette with `dark` and `light` exchanged.
    ///
    /// The built-in night palette is exactly the swapped day palette, and a
    /// custom palette gets its night variant the same way.
    #[must_use]
    pub fn swapped(&self) -> Self {
        Self {
            name: self.name.clone(),
            colors: ThemeColors {
                dark: self.colors.light.clone(),
                light: self.colors.dark.clone(),
            },
        }
    }

    /// Converts a hex color to an RGB tuple.
    ///
    /// Strips a `#` prefix if present, validates length, and parses hex digits.
    /// Returns `(255, 255, 255)` (white) on parse errors.
    fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
        let hex = hex.trim_start_matches('#').trim();

        if hex.len() != 6 {
            return (255, 255, 255);
        }

        let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(255);
        let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(255);
        let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(255);

        (r, g, b)
    }

    /// Generates an ANSI 24-bit foreground color escape sequence.
    ///
    /// Converts a hex color to RGB and formats as `\x1b[38;2;r;g;bm`.
    #[must_use]
    pub fn fg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[38;2;{r};{g};{b}m")
    }

    /// Generates an ANSI 24-bit background color escape sequence.
    ///
    /// Converts a hex color to RGB and formats as `\x1b[48;2;r;g;bm`.
    #[must_use]
    pub fn bg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[48;2;{r};{g};{b}m")
    }

    /// Returns the ANSI bold escape sequence (`\x1b[1m`).
    #[must_use]
    pub const fn bold() -> &'static str {
        "\u{001b}[1m"
    }

    /// Returns the ANSI dim escape sequence (`\x1b[2m`).
    #[must_use]
    pub const fn dim() -> &'static str {
        "\u{001b}[2m"
    }

    /// Returns the ANSI reset escape sequence (`\x1b[0m`).
    ///
    /// Clears all styling (colors, bold, dim, etc.).
    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{001b}[0m"
    }
}

impl Default for Theme {
    /// Returns the default palette (day).
    ///
    /// # Panics
    ///
    /// Panics if the built-in palette fails to parse (should never occur).
    fn default() -> Self {
        Self::from_name("day").expect("Built-in day palette should always parse")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn night_palette_is_the_swapped_day_palette() {
        let day = Theme::from_name("day").unwrap();
        let night = Theme::from_name("night").unwrap();

        assert_eq!(night.colors, day.swapped().colors);
        assert_eq!(day.colors, night.swapped().colors);
    }

    #[test]
    fn unknown_palette_name_is_rejected() {
        assert!(Theme::from_name("sepia").is_none());
    }

    #[test]
    fn from_file_loads_a_custom_day_palette() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            "name = \"paper\"\n\n[colors]\ndark = \"#222233\"\nlight = \"#f4f1ea\"\n"
        )
        .unwrap();

        let theme = Theme::from_file(file.path()).unwrap();

        assert_eq!(theme.name, "paper");
        assert_eq!(theme.colors.dark, "#222233");
        assert_eq!(theme.swapped().colors.dark, "#f4f1ea");
    }

    #[test]
    fn from_file_rejects_invalid_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not a palette").unwrap();

        let err = Theme::from_file(file.path()).unwrap_err();
        assert!(matches!(err, ZibraryError::Theme(_)));
    }

    #[test]
    fn form_value_parsing_defaults_to_day() {
        assert_eq!(ThemeChoice::from_form_value(Some("night")), ThemeChoice::Night);
        assert_eq!(ThemeChoice::from_form_value(Some("day")), ThemeChoice::Day);
        assert_eq!(ThemeChoice::from_form_value(Some("mauve")), ThemeChoice::Day);
        assert_eq!(ThemeChoice::from_form_value(None), ThemeChoice::Day);
    }

    #[test]
    fn malformed_hex_renders_as_white() {
        assert_eq!(Theme::fg("oops"), "\u{001b}[38;2;255;255;255m");
        assert_eq!(Theme::bg("#0a0a14"), "\u{001b}[48;2;10;10;20m");
    }
}
