//! Zibrary: A Zellij plugin for browsing a book catalog.
//!
//! Zibrary is a terminal multiplexer plugin that provides:
//! - A paginated book list revealed one page-full at a time
//! - Title, genre, and author filtering with permissive defaults
//! - A full detail view for any listed book
//! - A day/night theme built from a two-color palette
//! - A built-in sample catalog, replaceable by a JSON file on the host
//!
//! # Architecture
//!
//! The crate follows a layered architecture pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling                                   │  ← Business logic
//! │  - Filtering and paging                             │
//! │  - Render command emission                          │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  UI Layer (ui/)                                     │
//! │  - Retained screen model (commands applied here)    │
//! │  - Rendering components and theming                 │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure & Domain Layers                     │
//! │  - Platform paths (infrastructure/)                 │
//! │  - Book and catalog models (domain/)                │
//! │  - Error types (domain/error)                       │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │  ← Optional
//! │  - tracing subscriber setup                         │
//! │  - Rotating file output                             │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Application state machine with event/command model
//! - [`domain`]: Core domain types (Book, Catalog, errors)
//! - [`infrastructure`]: Platform-specific utilities (paths)
//! - [`ui`]: Screen model and terminal rendering with theme support
//! - [`observability`]: File-based structured logging
//!
//! # Configuration
//!
//! The plugin is configured via Zellij's plugin configuration:
//!
//! ```kdl
//! // ~/.config/zellij/layouts/default.kdl
//! pane {
//!     plugin location="file:/path/to/zibrary.wasm" {
//!         catalog_file "~/books.json"
//!         page_size "10"
//!         theme "night"
//!         trace_level "info"
//!     }
//! }
//! ```
//!
//! Every key is optional; a bare plugin block serves the built-in sample
//! catalog with the day palette.
//!
//! # Initialization Flow
//!
//! 1. **Plugin Load** (`main.rs`):
//!    - Parse configuration from Zellij
//!    - Initialize tracing (optional)
//!    - Call [`initialize`] for the starting state and first command batch
//!    - Subscribe to Zellij key events
//!
//! 2. **Event Cycle**:
//!    - A key press maps to an [`Event`]
//!    - [`handle_event`] mutates state and returns render commands
//!    - The screen model applies each command in order
//!
//! 3. **UI Rendering**:
//!    - The renderer paints the screen model to the pane
//!    - Layout follows whichever overlay is open
//!
//! # Examples
//!
//! ## Basic Usage (Library)
//!
//! ```rust
//! use zibrary::{handle_event, initialize, Config, Event};
//!
//! // Initialize application
//! let config = Config::default();
//! let (mut state, initial_commands) = initialize(&config);
//! assert!(!initial_commands.is_empty());
//!
//! // Handle events
//! let commands = handle_event(&mut state, &Event::SubmitSearch {
//!     title: Some("dune".to_string()),
//!     genre: None,
//!     author: None,
//! });
//! // Apply commands to a Screen and render...
//! ```
//!
//! # Key Design Decisions
//!
//! ## Command-Driven Rendering
//!
//! The core never draws; it emits render commands:
//! - Full-replace and append-only list updates are distinct commands, so
//!   the screen never re-renders rows it already has
//! - Every observable change is explicit, which makes handler behavior
//!   testable without a terminal
//!
//! ## Permissive Filtering
//!
//! Absent form fields mean no constraint, never an error:
//! - A missing title filters as the empty string (matches everything)
//! - A missing or `"any"` select imposes no constraint
//! - Constraints combine with logical AND over the full dataset
//!
//! ## Derived Night Palette
//!
//! Only the day palette is ever loaded; night swaps its two colors. A
//! custom palette file therefore describes day once and gets a consistent
//! night variant for free.
//!
//! # Platform Support
//!
//! - **Target**: `wasm32-wasip1` (Zellij WASM runtime)
//! - **Terminal**: Any ANSI-capable terminal emulator

#![allow(clippy::multiple_crate_versions)]

pub mod app;
pub mod domain;
pub mod infrastructure;

pub mod ui;

pub mod observability;

pub use app::{handle_event, AppState, Command, Event, FilterCriteria, Overlay, PageCursor};
pub use domain::{Book, Catalog, Result, ZibraryError};
pub use ui::{render, Screen, Theme, ThemeChoice};

use std::collections::BTreeMap;

/// Plugin configuration parsed from Zellij's configuration system.
///
/// Configuration values are provided via Zellij's KDL layout configuration
/// and passed to the plugin during initialization.
///
/// # Example
///
/// ```kdl
/// plugin location="file:/path/to/zibrary.wasm" {
///     catalog_file "~/books.json"
///     page_size "10"
///     theme "night"
///     theme_file "/path/to/palette.toml"
///     trace_level "debug"
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Path to a JSON catalog file on the host.
    ///
    /// Tilde paths resolve under the sandbox `/host` mount. When unset or
    /// unreadable, the built-in sample catalog is served instead.
    pub catalog_file: Option<String>,

    /// Entries revealed per page-full.
    ///
    /// Overrides the catalog's own page size. When unset, the catalog value
    /// applies (the built-in sample uses 20).
    pub page_size: Option<usize>,

    /// Starting theme: `"day"` or `"night"`.
    ///
    /// Anything other than `"night"` selects day, matching the settings
    /// form's own parse.
    pub theme: Option<String>,

    /// Path to a custom TOML palette file describing the day variant.
    ///
    /// The night variant is always derived by swapping the two colors. See
    /// [`ui::theme`] for the format.
    pub theme_file: Option<String>,

    /// Level filter for the log file.
    ///
    /// Options: `trace`, `debug`, `info`, `warn`, `error`. Default: `"info"`
    pub trace_level: Option<String>,
}

impl Config {
    /// Parses configuration from Zellij's configuration map.
    ///
    /// Zellij provides configuration as a `BTreeMap<String, String>` during
    /// plugin initialization. This function extracts and parses typed values
    /// with fallback defaults; a malformed value never fails the plugin, it
    /// falls back like an absent one.
    ///
    /// # Parsing Rules
    ///
    /// - `catalog_file`: String → `Option<String>`
    /// - `page_size`: String → `Option<usize>` (non-numeric and zero values
    ///   are ignored)
    /// - `theme`: String → `Option<String>`
    /// - `theme_file`: String → `Option<String>`
    /// - `trace_level`: String → `Option<String>`
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use zibrary::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("page_size".to_string(), "10".to_string());
    /// map.insert("theme".to_string(), "night".to_string());
    ///
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.page_size, Some(10));
    /// assert_eq!(config.theme.as_deref(), Some("night"));
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let page_size = config
            .get("page_size")
            .and_then(|s| s.parse::<usize>().ok())
            .filter(|&n| n > 0);

        Self {
            catalog_file: config.get("catalog_file").cloned(),
            page_size,
            theme: config.get("theme").cloned(),
            theme_file: config.get("theme_file").cloned(),
            trace_level: config.get("trace_level").cloned(),
        }
    }
}

/// Initializes the plugin with configuration.
///
/// Builds the starting [`AppState`] and the first render command batch. The
/// batch reveals the first page-full of the unfiltered catalog and carries
/// the starting palette, so applying it to a fresh screen yields exactly
/// what a user sees on load.
///
/// Startup never fails: a missing or malformed catalog file falls back to
/// the built-in sample, a bad palette file falls back to the built-in day
/// palette, and each fallback is logged.
///
/// # Example
///
/// ```rust
/// use zibrary::{initialize, Config};
///
/// let (state, commands) = initialize(&Config::default());
/// assert_eq!(state.matches.len(), 25);
/// assert!(!commands.is_empty());
/// ```
#[must_use]
pub fn initialize(config: &Config) -> (AppState, Vec<Command>) {
    tracing::debug!("initializing zibrary plugin");

    let mut catalog = config.catalog_file.as_ref().map_or_else(Catalog::builtin, |path| {
        let path = infrastructure::expand_tilde(path);
        Catalog::from_file(&path).unwrap_or_else(|e| {
            tracing::warn!(catalog_file = %path, error = %e, "failed to load catalog, using built-in sample");
            Catalog::builtin()
        })
    });

    if let Some(page_size) = config.page_size {
        catalog.page_size = page_size;
    }

    let day_theme = config.theme_file.as_ref().map_or_else(Theme::default, |theme_file| {
        let path = infrastructure::expand_tilde(theme_file);
        Theme::from_file(&path).unwrap_or_else(|e| {
            tracing::warn!(theme_file = %path, error = %e, "failed to load palette, using built-in day");
            Theme::default()
        })
    });

    let theme_choice = ThemeChoice::from_form_value(config.theme.as_deref());

    let state = AppState::new(catalog, day_theme, theme_choice);

    let mut commands = app::view::refresh(&state);
    commands.push(app::view::theme_colors(&state));

    tracing::debug!(
        books = state.catalog.books.len(),
        page_size = state.page_size(),
        theme = theme_choice.as_str(),
        "plugin initialized"
    );

    (state, commands)
}
