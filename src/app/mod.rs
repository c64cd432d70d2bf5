//! Application layer coordinating state, events, and render commands.
//!
//! This module defines the core application logic layer, sitting between the
//! plugin runtime (main.rs) and the domain layer. It implements the
//! event-driven architecture that powers the interactive UI.
//!
//! # Architecture
//!
//! The application layer follows a unidirectional data flow pattern:
//!
//! ```text
//! Key Press → Event → Event Handler → State Mutation → Commands → Screen Model
//! ```
//!
//! The handler never draws. It mutates the single [`AppState`] and returns
//! [`Command`] batches describing what the screen must change; the shim
//! applies those to the retained screen model and repaints.
//!
//! # Modules
//!
//! - [`commands`]: Render commands emitted by the event handler
//! - [`filter`]: Criteria parsing and the pure matching pass
//! - [`handler`]: Event processing and state transition coordinator
//! - [`modes`]: Overlay state machine types
//! - [`paging`]: The page cursor over the filtered result
//! - [`state`]: Central application state container
//! - [`view`]: State-to-command projection (full replace vs append-only)
//!
//! # Example
//!
//! ```rust
//! use zibrary::app::{handle_event, AppState, Event};
//! use zibrary::domain::Catalog;
//! use zibrary::ui::theme::{Theme, ThemeChoice};
//!
//! let mut state = AppState::new(Catalog::builtin(), Theme::default(), ThemeChoice::Day);
//! let commands = handle_event(&mut state, &Event::OpenSearch);
//! assert_eq!(commands.len(), 1);
//! ```

pub mod commands;
pub mod filter;
pub mod handler;
pub mod modes;
pub mod paging;
pub mod state;
pub mod view;

pub use commands::Command;
pub use filter::FilterCriteria;
pub use handler::{handle_event, Event};
pub use modes::Overlay;
pub use paging::PageCursor;
pub use state::AppState;

#[cfg(test)]
mod tests;
