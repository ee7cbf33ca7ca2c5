//! Rows and scrollback history
//!
//! Lines pushed off the top of the visible grid are retained in a bounded
//! ring, oldest evicted first. Every row here has exactly the screen's
//! current column count; a column resize rewrites history as well as the
//! grid.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use super::Cell;

/// A line of cells plus line-level metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Row {
    /// The cells in this row
    pub cells: Vec<Cell>,
    /// Whether this row was soft-wrapped from the previous one
    pub wrapped: bool,
}

impl Row {
    /// Create a blank row with the given number of columns.
    pub fn new(cols: usize) -> Self {
        Self {
            cells: vec![Cell::default(); cols],
            wrapped: false,
        }
    }

    /// Truncate or right-pad with default cells to the new column count.
    pub fn resize(&mut self, cols: usize) {
        if cols > self.cells.len() {
            self.cells.resize(cols, Cell::default());
        } else {
            self.cells.truncate(cols);
        }
    }

    /// Clear every cell.
    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            cell.clear();
        }
        self.wrapped = false;
    }

    pub fn get(&self, col: usize) -> Option<&Cell> {
        self.cells.get(col)
    }

    pub fn get_mut(&mut self, col: usize) -> Option<&mut Cell> {
        self.cells.get_mut(col)
    }

    /// Check if every cell is blank.
    pub fn is_blank(&self) -> bool {
        self.cells.iter().all(|c| c.is_blank())
    }

    /// Extract the text content, skipping wide-char continuations and
    /// trimming trailing blanks.
    pub fn text(&self) -> String {
        let mut s = String::new();
        for cell in &self.cells {
            if cell.is_continuation() {
                continue;
            }
            if cell.is_blank() {
                s.push(' ');
            } else {
                s.push_str(&cell.content);
            }
        }
        s.trim_end().to_string()
    }
}

/// Bounded scrollback ring, oldest line evicted first.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct History {
    lines: VecDeque<Row>,
    capacity: usize,
}

impl History {
    /// Create a history with the given line capacity.
    pub fn new(capacity: usize) -> Self {
        Self {
            lines: VecDeque::new(),
            capacity,
        }
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Push a row, evicting the oldest when at capacity.
    pub fn push(&mut self, row: Row) {
        if self.capacity == 0 {
            return;
        }
        if self.lines.len() == self.capacity {
            self.lines.pop_front();
        }
        self.lines.push_back(row);
    }

    /// Take back the most recently pushed row (used when the screen grows).
    pub fn pop_newest(&mut self) -> Option<Row> {
        self.lines.pop_back()
    }

    /// Get a row by index, 0 = oldest.
    pub fn get(&self, index: usize) -> Option<&Row> {
        self.lines.get(index)
    }

    /// Iterate rows from oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = &Row> {
        self.lines.iter()
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Rewrite every stored row to the new column count.
    pub fn resize_rows(&mut self, cols: usize) {
        for row in &mut self.lines {
            row.resize(cols);
        }
    }
}
