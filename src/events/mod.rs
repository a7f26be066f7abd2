//! Event handling for the terminal host.
//!
//! Terminal input is polled from crossterm and turned into [`Event`]s; keys
//! are further classified into [`KeyRole`]s by the widget.

mod handler;
mod keys;

use crossterm::event::{KeyEvent, MouseEvent};

pub use handler::EventHandler;
pub use keys::KeyRole;

/// Events delivered to the application loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// A key was pressed (or released, on terminals that report releases).
    Key(KeyEvent),
    /// Mouse movement or a button event.
    Mouse(MouseEvent),
    /// The terminal window gained focus.
    FocusGained,
    /// The terminal window lost focus.
    FocusLost,
    /// Text pasted with bracketed paste enabled.
    Paste(String),
    /// The terminal was resized.
    Resize(u16, u16),
    /// No input within the tick rate.
    Tick,
}
