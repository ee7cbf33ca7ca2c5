//! Terminal escape sequence parser
//!
//! A stateful byte parser that converts the channel stream into semantic
//! terminal actions. Modeled on the VT500-series parser
//! (<https://vt100.net/emu/dec_ansi_parser>), trimmed to the sequences this
//! emulator interprets; everything else is consumed and discarded without
//! ever corrupting subsequent parsing.

mod actions;
mod state;

pub use actions::{Action, ControlCode, CsiAction, EscAction};
pub use state::Parser;
