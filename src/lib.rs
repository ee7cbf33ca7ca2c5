//! Hawser Terminal Core
//!
//! The terminal emulation and live-session I/O core of a remote shell client.
//! Given the byte stream of a connected pseudo-terminal channel, it maintains
//! a faithful in-memory screen and carries keystrokes and resizes back the
//! other way:
//!
//! - `core`: screen buffer, cells, cursor, scrollback history, snapshots
//! - `parser`: VT/xterm escape sequence state machine
//! - `terminal`: binds parser output to screen mutations
//! - `input`: key event to byte-sequence encoding
//! - `session`: channel boundary, ingest thread, pending-input queue,
//!   resize debouncing, and the `Session` type that ties them together
//!
//! The transport itself (SSH or otherwise) is an external collaborator
//! reached through [`session::SessionChannel`]; a local PTY implementation is
//! provided for exercising the full path against a real shell.

pub mod core;
pub mod input;
pub mod parser;
pub mod session;
pub mod terminal;

pub use crate::core::{Attrs, Cell, Color, Cursor, History, Row, ScreenBuffer, Snapshot};
pub use crate::input::{BackspaceMode, EncoderOptions, Key, Modifiers};
pub use crate::session::{
    FontMetrics, Session, SessionChannel, SessionOptions, TransportError, TransportResult,
};
pub use crate::terminal::Terminal;
