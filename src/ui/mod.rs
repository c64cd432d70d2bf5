//! User interface layer with component-based rendering.
//!
//! This module owns everything the user sees: the retained [`Screen`] model
//! the core drives through commands, the color palette, and the renderers
//! that turn the screen into ANSI-styled output.
//!
//! # Architecture
//!
//! The UI layer sits on the far side of the command stream:
//!
//! ```text
//! Command batch → Screen::apply → Screen → render → ANSI Output
//! ```
//!
//! # Modules
//!
//! - [`screen`]: Retained screen model and form drafts
//! - [`viewmodel`]: Content types carried by render commands
//! - [`renderer`]: Top-level rendering coordinator
//! - [`components`]: Composable UI component renderers
//! - [`helpers`]: Shared rendering utilities (highlighting, wrapping)
//! - [`theme`]: Palette definitions and ANSI escape sequence generation
//!
//! # Example
//!
//! ```rust
//! use zibrary::domain::Catalog;
//! use zibrary::ui::{render, Screen, ThemeChoice};
//!
//! let screen = Screen::new(&Catalog::builtin(), ThemeChoice::Day);
//! render(&screen, 24, 80); // Renders to stdout
//! ```

pub mod screen;
pub mod viewmodel;
pub mod renderer;
pub mod components;
pub mod helpers;
pub mod theme;

pub use screen::{Screen, SearchField, SearchForm, SettingsForm};
pub use viewmodel::{DetailContent, Preview};
pub use renderer::render;
pub use theme::{Theme, ThemeChoice, ThemeColors};
