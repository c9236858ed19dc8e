//! Terminal User Interface for the triage board.
//!
//! Provides a three-column board with:
//! - Header showing the feed, read-only flag and last refresh
//! - One column per stage with report cards
//! - Status line describing the drag in flight or the last result
//! - Footer with keybindings
//!
//! Mouse press, drag and release drive the board's gesture; the keyboard
//! offers the same gesture through grab, retarget and drop keys.

mod app;
mod events;
mod ui;

pub use app::{App, HitRegion, HitTarget, StatusMessage};
pub use events::{handle_key, handle_mouse, run};
