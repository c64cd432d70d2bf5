//! The retained screen model driven by render commands.
//!
//! [`Screen`] is the plugin's stand-in for a document: it remembers exactly
//! what is displayed (the preview rows, the show-more control, the no-results
//! flag, the open overlay, the detail content, the palette) and is mutated
//! only through [`Screen::apply`]. The core never draws and the renderer
//! never computes; both meet here.
//!
//! Widget-local state lives here too, not in the core: the selection cursor,
//! the detail scroll offset, and the form drafts ([`SearchForm`],
//! [`SettingsForm`]) belong to the screen the way input fields belong to a
//! form. The core only ever sees their submitted values.

use crate::app::commands::Command;
use crate::app::modes::Overlay;
use crate::ui::theme::{Theme, ThemeChoice, ThemeColors};
use crate::ui::viewmodel::{DetailContent, Preview};
use crate::domain::Catalog;

/// Select label for the unconstrained option, mirrored by the core's parser.
const ANY_GENRE_LABEL: &str = "All Genres";
const ANY_AUTHOR_LABEL: &str = "All Authors";

/// Fields of the search form, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchField {
    /// Free-text title input.
    Title,
    /// Genre select.
    Genre,
    /// Author select.
    Author,
}

/// Draft state of the search form.
///
/// Values persist across open/cancel/submit exactly like form controls do;
/// nothing here resets unless the user edits it.
#[derive(Debug, Clone)]
pub struct SearchForm {
    /// Current title text.
    pub title: String,
    /// Focused field.
    pub focus: SearchField,
    genre_options: Vec<(String, String)>,
    genre_index: usize,
    author_options: Vec<(String, String)>,
    author_index: usize,
}

impl SearchForm {
    /// Builds the form with option lists drawn from the catalog tables,
    /// the unconstrained option first and selected.
    #[must_use]
    pub fn new(catalog: &Catalog) -> Self {
        let mut genre_options = vec![("any".to_string(), ANY_GENRE_LABEL.to_string())];
        genre_options.extend(catalog.genre_options());

        let mut author_options = vec![("any".to_string(), ANY_AUTHOR_LABEL.to_string())];
        author_options.extend(catalog.author_options());

        Self {
            title: String::new(),
            focus: SearchField::Title,
            genre_options,
            genre_index: 0,
            author_options,
            author_index: 0,
        }
    }

    /// Moves focus to the next field, wrapping after the author select.
    pub fn focus_next(&mut self) {
        self.focus = match self.focus {
            SearchField::Title => SearchField::Genre,
            SearchField::Genre => SearchField::Author,
            SearchField::Author => SearchField::Title,
        };
    }

    /// Moves focus to the previous field, wrapping before the title input.
    pub fn focus_prev(&mut self) {
        self.focus = match self.focus {
            SearchField::Title => SearchField::Author,
            SearchField::Genre => SearchField::Title,
            SearchField::Author => SearchField::Genre,
        };
    }

    /// Appends a character to the title when it has focus.
    pub fn insert_char(&mut self, c: char) {
        if self.focus == SearchField::Title {
            self.title.push(c);
        }
    }

    /// Removes the last title character when it has focus.
    pub fn backspace(&mut self) {
        if self.focus == SearchField::Title {
            self.title.pop();
        }
    }

    /// Cycles the focused select one option forward.
    pub fn cycle_next(&mut self) {
        match self.focus {
            SearchField::Genre => {
                self.genre_index = (self.genre_index + 1) % self.genre_options.len();
            }
            SearchField::Author => {
                self.author_index = (self.author_index + 1) % self.author_options.len();
            }
            SearchField::Title => {}
        }
    }

    /// Cycles the focused select one option back.
    pub fn cycle_prev(&mut self) {
        match self.focus {
            SearchField::Genre => {
                self.genre_index = self.genre_index.checked_sub(1).unwrap_or(self.genre_options.len() - 1);
            }
            SearchField::Author => {
                self.author_index = self.author_index.checked_sub(1).unwrap_or(self.author_options.len() - 1);
            }
            SearchField::Title => {}
        }
    }

    /// Display label of the selected genre option.
    #[must_use]
    pub fn genre_label(&self) -> &str {
        &self.genre_options[self.genre_index].1
    }

    /// Display label of the selected author option.
    #[must_use]
    pub fn author_label(&self) -> &str {
        &self.author_options[self.author_index].1
    }

    /// The raw values a submission carries: title text, genre id, author id.
    ///
    /// The unconstrained option submits as `"any"`, which the core's parse
    /// step turns into no constraint.
    #[must_use]
    pub fn values(&self) -> (String, String, String) {
        (
            self.title.clone(),
            self.genre_options[self.genre_index].0.clone(),
            self.author_options[self.author_index].0.clone(),
        )
    }
}

/// Draft state of the settings form: the day/night selector.
#[derive(Debug, Clone, Copy)]
pub struct SettingsForm {
    choice: ThemeChoice,
}

impl SettingsForm {
    /// Builds the form preselecting the ambient choice.
    #[must_use]
    pub const fn new(choice: ThemeChoice) -> Self {
        Self { choice }
    }

    /// Flips between day and night.
    pub fn toggle(&mut self) {
        self.choice = match self.choice {
            ThemeChoice::Day => ThemeChoice::Night,
            ThemeChoice::Night => ThemeChoice::Day,
        };
    }

    /// The drafted choice.
    #[must_use]
    pub const fn choice(self) -> ThemeChoice {
        self.choice
    }

    /// The raw value a submission carries.
    #[must_use]
    pub const fn value(self) -> &'static str {
        self.choice.as_str()
    }
}

/// Everything currently displayed, as mutated by render commands.
#[derive(Debug, Clone)]
pub struct Screen {
    shown: Vec<Preview>,
    remaining: usize,
    show_more_disabled: bool,
    no_results: bool,
    overlay: Option<Overlay>,
    detail: Option<DetailContent>,
    detail_scroll: usize,
    cursor: usize,
    colors: ThemeColors,

    /// Search form draft, owned by the screen like any widget state.
    pub search_form: SearchForm,
    /// Settings form draft.
    pub settings_form: SettingsForm,
}

impl Screen {
    /// Creates an empty screen with forms built from the catalog.
    ///
    /// Starts with the day palette; the real palette arrives with the first
    /// `SetThemeColors` command out of initialization.
    #[must_use]
    pub fn new(catalog: &Catalog, choice: ThemeChoice) -> Self {
        Self {
            shown: Vec::new(),
            remaining: 0,
            show_more_disabled: true,
            no_results: false,
            overlay: None,
            detail: None,
            detail_scroll: 0,
            cursor: 0,
            colors: Theme::default().colors,
            search_form: SearchForm::new(catalog),
            settings_form: SettingsForm::new(choice),
        }
    }

    /// Applies one render command.
    ///
    /// This is the only mutation path from the core. Commands are designed to
    /// be applied in batch order; each one is cheap and total, so a batch can
    /// never leave the screen half-updated.
    pub fn apply(&mut self, command: &Command) {
        match command {
            Command::ReplaceList(previews) => {
                self.shown = previews.clone();
                self.cursor = 0;
            }
            Command::AppendList(previews) => {
                self.shown.extend(previews.iter().cloned());
            }
            Command::SetRemaining(count) => {
                self.remaining = *count;
            }
            Command::SetShowMoreDisabled(disabled) => {
                self.show_more_disabled = *disabled;
            }
            Command::SetNoResults(visible) => {
                self.no_results = *visible;
            }
            Command::OpenOverlay(overlay) => {
                self.overlay = Some(*overlay);
            }
            Command::CloseOverlay(overlay) => {
                if self.overlay == Some(*overlay) {
                    self.overlay = None;
                }
            }
            Command::SetDetail(content) => {
                self.detail = Some(content.clone());
                self.detail_scroll = 0;
            }
            Command::SetThemeColors { dark, light } => {
                self.colors = ThemeColors {
                    dark: dark.clone(),
                    light: light.clone(),
                };
            }
            Command::ScrollTop => {
                self.cursor = 0;
            }
        }
    }

    /// Preview rows in display order.
    #[must_use]
    pub fn shown(&self) -> &[Preview] {
        &self.shown
    }

    /// The show-more label, count included.
    #[must_use]
    pub fn show_more_label(&self) -> String {
        format!("Show more ({})", self.remaining)
    }

    /// Whether the show-more control is disabled.
    #[must_use]
    pub const fn show_more_disabled(&self) -> bool {
        self.show_more_disabled
    }

    /// Whether the no-results message is visible.
    #[must_use]
    pub const fn no_results(&self) -> bool {
        self.no_results
    }

    /// The open overlay, if any.
    #[must_use]
    pub const fn overlay(&self) -> Option<Overlay> {
        self.overlay
    }

    /// Current detail overlay content.
    #[must_use]
    pub const fn detail(&self) -> Option<&DetailContent> {
        self.detail.as_ref()
    }

    /// Scroll offset inside the detail description, in wrapped lines.
    #[must_use]
    pub const fn detail_scroll(&self) -> usize {
        self.detail_scroll
    }

    /// Active palette colors.
    #[must_use]
    pub const fn colors(&self) -> &ThemeColors {
        &self.colors
    }

    /// Selection cursor position within [`Screen::shown`].
    #[must_use]
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    /// Id of the preview under the cursor, if any row is displayed.
    #[must_use]
    pub fn selected_id(&self) -> Option<&str> {
        self.shown.get(self.cursor).map(|preview| preview.id.as_str())
    }

    /// Moves the cursor down one row, wrapping to the top.
    pub fn cursor_down(&mut self) {
        if self.shown.is_empty() {
            return;
        }
        self.cursor = (self.cursor + 1) % self.shown.len();
    }

    /// Moves the cursor up one row, wrapping to the bottom.
    pub fn cursor_up(&mut self) {
        if self.shown.is_empty() {
            return;
        }
        if self.cursor == 0 {
            self.cursor = self.shown.len() - 1;
        } else {
            self.cursor -= 1;
        }
    }

    /// Scrolls the detail description down one wrapped line.
    pub fn scroll_detail_down(&mut self) {
        self.detail_scroll = self.detail_scroll.saturating_add(1);
    }

    /// Scrolls the detail description up one wrapped line.
    pub fn scroll_detail_up(&mut self) {
        self.detail_scroll = self.detail_scroll.saturating_sub(1);
    }
}
