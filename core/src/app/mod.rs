//! Application layer
//!
//! The list store, edit controller and formatter, the pure transition
//! function tying them together, and the session that drives it against the
//! ports.

pub mod editor;
pub mod formatter;
pub mod list_store;
pub mod session;
pub mod state;

pub use editor::{EditController, EditMode};
pub use formatter::{format_export, format_line, EXPORT_TIMESTAMP_FORMAT};
pub use list_store::ListStore;
pub use session::{Outcome, Session};
pub use state::{transition, Command, Effect, ListState, Transition};
