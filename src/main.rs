//! Zellij plugin wrapper and entry point.
//!
//! This module provides the thin integration layer between the Zibrary
//! library and the Zellij plugin system. It implements the `ZellijPlugin`
//! trait to handle Zellij events and lifecycle.
//!
//! # Architecture
//!
//! The shim owns two things and nothing else:
//!
//! ```text
//! ┌─────────────────────────────┐
//! │   Zellij Main Thread        │
//! │  ┌──────────────────────┐   │
//! │  │  AppState (library)  │   │  ← catalog, filter, paging
//! │  └──────────────────────┘   │
//! │          │ commands         │
//! │          ▼                  │
//! │  ┌──────────────────────┐   │
//! │  │  Screen (library)    │   │  ← what the pane displays
//! │  └──────────────────────┘   │
//! └─────────────────────────────┘
//! ```
//!
//! Key presses map to library events; the library returns render commands;
//! the shim applies them to the screen and asks Zellij to re-render.
//!
//! # Plugin Lifecycle
//!
//! 1. **Load**: Parse config, initialize tracing, build state and screen
//! 2. **Subscribe**: Register for `Key` and `PermissionRequestResult` events
//! 3. **Permissions**: Re-load configured files once host access is granted
//! 4. **Update**: Map keys to events, delegate to the library layer
//! 5. **Render**: Call the library render function
//!
//! # Keybindings
//!
//! Browsing:
//! - `j`/`Down`: Move down
//! - `k`/`Up`: Move up
//! - `Enter`: Open the selected book
//! - `m`: Show more results
//! - `/`: Open the search form
//! - `s`: Open the settings form
//! - `q`: Hide the plugin pane
//!
//! In the search form:
//! - `Tab`/`Down` and `Shift+Tab`/`Up`: Move between fields
//! - `Left`/`Right`: Cycle the focused select
//! - Printable keys: Type into the title field
//! - `Enter`: Submit the filters
//! - `Esc`: Cancel
//!
//! In the settings form:
//! - `Left`/`Right`: Choose day or night
//! - `Enter`: Save
//! - `Esc`: Cancel
//!
//! In the detail view:
//! - `j`/`k`: Scroll the description
//! - `Esc`: Close

#![allow(clippy::multiple_crate_versions)]

use std::collections::BTreeMap;
use zellij_tile::prelude::*;

use zibrary::{handle_event, Config, Event, Overlay, Screen};

// Register plugin with Zellij
register_plugin!(State);

/// Plugin state wrapper.
///
/// Wraps the library's `AppState` and `Screen` with Zellij-specific
/// concerns: key mapping and the permission handshake.
struct State {
    /// Core application state from the library layer.
    app: zibrary::app::AppState,

    /// Retained screen model the render commands drive.
    screen: Screen,

    /// Parsed plugin configuration, kept for the post-permission reload.
    config: Config,
}

impl Default for State {
    fn default() -> Self {
        let config = Config::default();
        let (app, commands) = zibrary::initialize(&config);
        let mut screen = Screen::new(&app.catalog, app.theme_choice);
        for command in &commands {
            screen.apply(command);
        }
        Self {
            app,
            screen,
            config,
        }
    }
}

impl ZellijPlugin for State {
    /// Initializes the plugin on load.
    ///
    /// Called once during plugin startup. Parses configuration, initializes
    /// tracing, builds the starting state and screen, requests permissions,
    /// and subscribes to events.
    ///
    /// # Permissions
    ///
    /// Requests:
    /// - `ChangeApplicationState`: Hide the plugin pane on `q`
    /// - `FullHdAccess`: Read configured catalog and palette files, write
    ///   the log file
    ///
    /// Configured files under `/host` may not be readable until the grant
    /// arrives, so initialization runs again on `PermissionRequestResult`.
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        let config = Config::from_zellij(&configuration);
        zibrary::observability::init_tracing(&config);

        let span = tracing::debug_span!("plugin_load");
        let _guard = span.entered();

        tracing::debug!("plugin loading started");
        self.config = config;
        self.reload();
        tracing::debug!("app state initialized");

        tracing::debug!("requesting permissions");
        request_permission(&[
            PermissionType::ChangeApplicationState,
            PermissionType::FullHdAccess,
        ]);

        tracing::debug!("subscribing to events");
        subscribe(&[EventType::Key, EventType::PermissionRequestResult]);

        tracing::debug!("plugin load complete");
    }

    /// Handles incoming Zellij events.
    ///
    /// Maps key presses to library events based on which overlay is open,
    /// delegates to `handle_event`, and applies the returned render commands
    /// to the screen. Returns `true` if the UI should re-render.
    fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
        let event_name = Self::get_event_name(&event);
        let span = tracing::debug_span!("plugin_update", event_type = %event_name);
        let _guard = span.entered();

        match event {
            zellij_tile::prelude::Event::Key(ref key) => self.handle_key(key),
            zellij_tile::prelude::Event::PermissionRequestResult(status) => {
                self.handle_permission_result(status)
            }
            _ => false,
        }
    }

    /// Renders the plugin UI.
    ///
    /// Delegates to the library's rendering layer.
    fn render(&mut self, rows: usize, cols: usize) {
        zibrary::ui::render(&self.screen, rows, cols);
    }
}

impl State {
    /// Rebuilds state and screen from the stored configuration.
    ///
    /// Used at load and again once permissions are granted, when configured
    /// files under `/host` become readable.
    fn reload(&mut self) {
        let (app, commands) = zibrary::initialize(&self.config);
        self.app = app;
        self.screen = Screen::new(&self.app.catalog, self.app.theme_choice);
        for command in &commands {
            self.screen.apply(command);
        }
    }

    /// Gets a string name for a Zellij event for logging purposes.
    fn get_event_name(event: &zellij_tile::prelude::Event) -> String {
        match event {
            zellij_tile::prelude::Event::Key(key) => format!("Key({:?})", key.bare_key),
            zellij_tile::prelude::Event::PermissionRequestResult(..) => {
                "PermissionRequestResult".to_string()
            }
            _ => "Other".to_string(),
        }
    }

    /// Handles permission request results.
    fn handle_permission_result(&mut self, permissions: PermissionStatus) -> bool {
        match permissions {
            PermissionStatus::Granted => {
                tracing::debug!("permissions granted - loading configured files");
                self.reload();
                true
            }
            PermissionStatus::Denied => {
                tracing::warn!("permissions denied - serving the built-in catalog");
                false
            }
        }
    }

    /// Routes a key press to the handler for the open overlay.
    fn handle_key(&mut self, key: &KeyWithModifier) -> bool {
        tracing::debug!(bare_key = ?key.bare_key, "key event");

        match self.app.overlay {
            None => self.handle_browse_key(key),
            Some(Overlay::Search) => self.handle_search_key(key),
            Some(Overlay::Settings) => self.handle_settings_key(key),
            Some(Overlay::Detail) => self.handle_detail_key(key),
        }
    }

    /// Key handling while browsing the list.
    fn handle_browse_key(&mut self, key: &KeyWithModifier) -> bool {
        match key.bare_key {
            BareKey::Down | BareKey::Char('j') => {
                self.screen.cursor_down();
                true
            }
            BareKey::Up | BareKey::Char('k') => {
                self.screen.cursor_up();
                true
            }
            BareKey::Enter => {
                let Some(id) = self.screen.selected_id().map(str::to_string) else {
                    return false;
                };
                self.dispatch(&Event::SelectPreview { id })
            }
            BareKey::Char('m') => self.dispatch(&Event::ShowMore),
            BareKey::Char('/') => self.dispatch(&Event::OpenSearch),
            BareKey::Char('s') => self.dispatch(&Event::OpenSettings),
            BareKey::Char('q') => {
                tracing::debug!("hiding plugin pane");
                hide_self();
                false
            }
            _ => false,
        }
    }

    /// Key handling while the search form is open.
    ///
    /// Form edits stay inside the screen model; only submit and cancel reach
    /// the core.
    fn handle_search_key(&mut self, key: &KeyWithModifier) -> bool {
        match key.bare_key {
            BareKey::Esc => self.dispatch(&Event::CancelSearch),
            BareKey::Enter => {
                let (title, genre, author) = self.screen.search_form.values();
                self.dispatch(&Event::SubmitSearch {
                    title: Some(title),
                    genre: Some(genre),
                    author: Some(author),
                })
            }
            BareKey::Tab if key.has_modifiers(&[KeyModifier::Shift]) => {
                self.screen.search_form.focus_prev();
                true
            }
            BareKey::Tab | BareKey::Down => {
                self.screen.search_form.focus_next();
                true
            }
            BareKey::Up => {
                self.screen.search_form.focus_prev();
                true
            }
            BareKey::Left => {
                self.screen.search_form.cycle_prev();
                true
            }
            BareKey::Right => {
                self.screen.search_form.cycle_next();
                true
            }
            BareKey::Backspace => {
                self.screen.search_form.backspace();
                true
            }
            BareKey::Char(c) => {
                self.screen.search_form.insert_char(c);
                true
            }
            _ => false,
        }
    }

    /// Key handling while the settings form is open.
    fn handle_settings_key(&mut self, key: &KeyWithModifier) -> bool {
        match key.bare_key {
            BareKey::Esc => self.dispatch(&Event::CancelSettings),
            BareKey::Enter => {
                let theme = self.screen.settings_form.value().to_string();
                self.dispatch(&Event::SubmitSettings { theme: Some(theme) })
            }
            BareKey::Left | BareKey::Right => {
                self.screen.settings_form.toggle();
                true
            }
            _ => false,
        }
    }

    /// Key handling while the detail view is open.
    fn handle_detail_key(&mut self, key: &KeyWithModifier) -> bool {
        match key.bare_key {
            BareKey::Esc => self.dispatch(&Event::CloseDetail),
            BareKey::Down | BareKey::Char('j') => {
                self.screen.scroll_detail_down();
                true
            }
            BareKey::Up | BareKey::Char('k') => {
                self.screen.scroll_detail_up();
                true
            }
            _ => false,
        }
    }

    /// Runs one event through the core and applies the returned commands.
    ///
    /// An empty command batch means the event was ignored; nothing changed,
    /// so no re-render is requested.
    fn dispatch(&mut self, event: &Event) -> bool {
        let commands = handle_event(&mut self.app, event);
        let should_render = !commands.is_empty();

        for command in &commands {
            self.screen.apply(command);
        }

        should_render
    }
}
