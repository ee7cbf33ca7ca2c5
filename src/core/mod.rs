//! Screen model
//!
//! Platform-independent terminal state. This module contains:
//! - Screen buffer (visible grid plus scrollback history)
//! - Cell representation with attributes
//! - Cursor state and positioning
//! - Deterministic snapshot generation for the render boundary
//!
//! The model is completely deterministic: given the same sequence of
//! operations it always produces the same state. It performs no I/O.

mod cell;
mod cursor;
mod history;
mod screen;
mod snapshot;

pub use cell::{Attrs, Cell, Color};
pub use cursor::{Cursor, SavedCursor};
pub use history::{History, Row};
pub use screen::ScreenBuffer;
pub use snapshot::{CursorSnapshot, Snapshot};
