//! Overlay state machine types.
//!
//! The browser has exactly one base screen (the paginated list) and three
//! modal overlays on top of it. The core tracks which overlay is open as an
//! `Option<Overlay>`; the open/close render commands name the overlay
//! explicitly so the screen model can mirror each panel independently.

/// The modal panels that can cover the book list.
///
/// At most one overlay is open at a time. Keybinding interpretation in the
/// shim follows the open overlay, the same way the list's own bindings only
/// apply when no overlay is up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    /// The filter form: a title text field plus genre and author selects.
    Search,
    /// The settings form: the day/night palette selector.
    Settings,
    /// The expanded view of a single selected book.
    Detail,
}
