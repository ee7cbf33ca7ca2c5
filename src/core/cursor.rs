//! Cursor state
//!
//! The cursor tracks position, visibility, and the attributes applied to the
//! next written cell. It supports save/restore (DECSC/DECRC and CSI s/u).

use serde::{Deserialize, Serialize};

use super::{Attrs, Color};

/// Cursor state: position plus the attributes for the next write.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cursor {
    /// Column position (0-indexed)
    pub col: usize,
    /// Row position (0-indexed)
    pub row: usize,
    /// Whether the cursor is visible (DECTCEM)
    pub visible: bool,
    /// Attributes applied to newly written cells
    pub attrs: Attrs,
    /// Foreground color for newly written cells
    pub fg: Color,
    /// Background color for newly written cells
    pub bg: Color,
    /// Autowrap mode (DECAWM)
    pub autowrap: bool,
    /// Cursor sits at the right margin, the next printable wraps first
    pub pending_wrap: bool,
}

impl Default for Cursor {
    fn default() -> Self {
        Self {
            col: 0,
            row: 0,
            visible: true,
            attrs: Attrs::default(),
            fg: Color::Default,
            bg: Color::Default,
            autowrap: true,
            pending_wrap: false,
        }
    }
}

/// Saved cursor state for DECSC/DECRC.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedCursor {
    pub col: usize,
    pub row: usize,
    pub attrs: Attrs,
    pub fg: Color,
    pub bg: Color,
}

impl Cursor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Move to an absolute position, clamping to bounds.
    pub fn move_to(&mut self, col: usize, row: usize, cols: usize, rows: usize) {
        self.col = col.min(cols.saturating_sub(1));
        self.row = row.min(rows.saturating_sub(1));
        self.pending_wrap = false;
    }

    /// Move up by n rows, stopping at the top.
    pub fn move_up(&mut self, n: usize) {
        self.row = self.row.saturating_sub(n);
        self.pending_wrap = false;
    }

    /// Move down by n rows, stopping at the bottom.
    pub fn move_down(&mut self, n: usize, rows: usize) {
        self.row = (self.row + n).min(rows.saturating_sub(1));
        self.pending_wrap = false;
    }

    /// Move left by n columns, stopping at column 0.
    pub fn move_left(&mut self, n: usize) {
        self.col = self.col.saturating_sub(n);
        self.pending_wrap = false;
    }

    /// Move right by n columns, stopping at the right margin.
    pub fn move_right(&mut self, n: usize, cols: usize) {
        self.col = (self.col + n).min(cols.saturating_sub(1));
        self.pending_wrap = false;
    }

    /// Move to a column (0-indexed), clamped.
    pub fn set_col(&mut self, col: usize, cols: usize) {
        self.col = col.min(cols.saturating_sub(1));
        self.pending_wrap = false;
    }

    /// Move to a row (0-indexed), clamped.
    pub fn set_row(&mut self, row: usize, rows: usize) {
        self.row = row.min(rows.saturating_sub(1));
        self.pending_wrap = false;
    }

    /// Carriage return: back to column 0.
    pub fn carriage_return(&mut self) {
        self.col = 0;
        self.pending_wrap = false;
    }

    /// Capture state for DECSC.
    pub fn save(&self) -> SavedCursor {
        SavedCursor {
            col: self.col,
            row: self.row,
            attrs: self.attrs,
            fg: self.fg,
            bg: self.bg,
        }
    }

    /// Restore state from DECRC, clamping the position.
    pub fn restore(&mut self, saved: &SavedCursor, cols: usize, rows: usize) {
        self.col = saved.col.min(cols.saturating_sub(1));
        self.row = saved.row.min(rows.saturating_sub(1));
        self.attrs = saved.attrs;
        self.fg = saved.fg;
        self.bg = saved.bg;
        self.pending_wrap = false;
    }

    /// Reset to the initial state.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Reset only the write attributes (SGR 0).
    pub fn reset_attributes(&mut self) {
        self.attrs = Attrs::default();
        self.fg = Color::Default;
        self.bg = Color::Default;
    }
}
