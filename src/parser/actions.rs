//! Parser actions
//!
//! Semantic operations produced by the parser, to be applied to the screen.

use serde::{Deserialize, Serialize};

/// A terminal action produced by the parser.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    /// Print a character at the cursor
    Print(char),

    /// Execute a C0 control character
    Control(ControlCode),

    /// Execute a CSI (Control Sequence Introducer) command
    Csi(CsiAction),

    /// Execute a non-CSI escape sequence
    Esc(EscAction),
}

/// C0 control codes the emulator acts on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ControlCode {
    /// BEL - audible/visual bell, no buffer mutation
    Bell,
    /// BS - move cursor left, clamped at column 0
    Backspace,
    /// HT - advance to the next tab stop
    Tab,
    /// LF - line feed
    LineFeed,
    /// VT - vertical tab (treated as LF)
    VerticalTab,
    /// FF - form feed (treated as LF)
    FormFeed,
    /// CR - carriage return
    CarriageReturn,
}

/// A complete CSI sequence: `ESC [ [private] [params] [intermediates] final`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CsiAction {
    /// The final character selecting the command
    pub final_char: char,
    /// Semicolon-separated numeric parameters; empty parameters read as 0
    pub params: Vec<u16>,
    /// Intermediate characters (0x20-0x2F)
    pub intermediates: Vec<char>,
    /// Private marker (`?`, `>`, `<`, `=`) if present
    pub private_marker: Option<char>,
}

impl CsiAction {
    /// Parameter at `index`, or `default` when absent.
    pub fn param(&self, index: usize, default: u16) -> u16 {
        self.params.get(index).copied().unwrap_or(default)
    }

    /// Parameter at `index`, treating 0 and absent as `default` (the ANSI
    /// convention for count-style parameters).
    pub fn param_or_default(&self, index: usize, default: u16) -> u16 {
        match self.params.get(index) {
            Some(&0) | None => default,
            Some(&v) => v,
        }
    }
}

/// Non-CSI escape sequences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EscAction {
    /// ESC 7 - save cursor (DECSC)
    SaveCursor,
    /// ESC 8 - restore cursor (DECRC)
    RestoreCursor,
    /// ESC D - index (IND)
    Index,
    /// ESC M - reverse index (RI)
    ReverseIndex,
    /// ESC E - next line (NEL)
    NextLine,
    /// ESC H - set tab stop (HTS)
    TabSet,
    /// ESC c - full reset (RIS)
    FullReset,
    /// Anything else: reported for logging, otherwise a no-op
    Unknown(char),
}
