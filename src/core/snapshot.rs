//! Screen snapshots
//!
//! A snapshot is the render boundary: an immutable, serializable copy of the
//! visible grid, the cursor, and the scrollback history, taken while the
//! screen is not being mutated. Given the same byte stream, the emulator
//! must produce identical snapshots.

use serde::{Deserialize, Serialize};

use super::history::Row;
use super::screen::ScreenBuffer;

/// Cursor position and visibility as seen by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CursorSnapshot {
    pub col: usize,
    pub row: usize,
    pub visible: bool,
}

/// A point-in-time copy of the screen for painting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    /// Screen dimensions
    pub cols: usize,
    pub rows: usize,
    /// Visible grid, row-major
    pub grid: Vec<Row>,
    /// Scrollback lines, oldest first
    pub history: Vec<Row>,
    /// Cursor state
    pub cursor: CursorSnapshot,
}

impl Snapshot {
    /// Capture the current screen state.
    pub fn from_screen(screen: &ScreenBuffer) -> Self {
        let grid = (0..screen.rows())
            .filter_map(|r| screen.row(r).cloned())
            .collect();
        let history = screen.history().iter().cloned().collect();

        Snapshot {
            cols: screen.cols(),
            rows: screen.rows(),
            grid,
            history,
            cursor: CursorSnapshot {
                col: screen.cursor().col,
                row: screen.cursor().row,
                visible: screen.cursor().visible,
            },
        }
    }

    /// Serialize to pretty JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Parse a snapshot back from JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Plain-text rendering of the visible grid, trailing blanks trimmed.
    pub fn text(&self) -> String {
        let mut out = String::new();
        for row in &self.grid {
            out.push_str(&row.text());
            out.push('\n');
        }
        while out.ends_with("\n\n") {
            out.pop();
        }
        out
    }

    /// Plain-text rendering of the scrollback, oldest line first.
    pub fn history_text(&self) -> String {
        let mut out = String::new();
        for row in &self.history {
            out.push_str(&row.text());
            out.push('\n');
        }
        out
    }
}
