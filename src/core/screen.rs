//! Screen buffer
//!
//! The visible grid plus scrollback history, scroll region, and tab stops.
//! Mutation happens only through the operations here; the parser layer
//! decides which operation a byte sequence means, this type decides what it
//! does to the grid.
//!
//! Invariants:
//! - every row in the grid and in history has exactly `cols` cells
//! - the cursor is always inside the grid; operations clamp or scroll

use super::cursor::{Cursor, SavedCursor};
use super::history::{History, Row};
use super::Cell;

/// The in-memory emulated screen.
#[derive(Debug, Clone)]
pub struct ScreenBuffer {
    /// Number of columns
    cols: usize,
    /// Number of rows
    rows: usize,
    /// The visible grid
    grid: Vec<Row>,
    /// Lines scrolled off the top
    history: History,
    /// Cursor plus current write attributes
    cursor: Cursor,
    /// Saved cursor for DECSC/DECRC
    saved_cursor: SavedCursor,
    /// Scroll region top (0-indexed, inclusive)
    scroll_top: usize,
    /// Scroll region bottom (0-indexed, inclusive)
    scroll_bottom: usize,
    /// Tab stop columns
    tab_stops: Vec<bool>,
}

fn default_tab_stops(cols: usize) -> Vec<bool> {
    let mut stops = vec![false; cols];
    for i in (8..cols).step_by(8) {
        stops[i] = true;
    }
    stops
}

impl ScreenBuffer {
    /// Create a screen with the given dimensions and history capacity.
    /// Dimensions are clamped to at least 1x1.
    pub fn new(cols: usize, rows: usize, history_limit: usize) -> Self {
        let cols = cols.max(1);
        let rows = rows.max(1);
        Self {
            cols,
            rows,
            grid: (0..rows).map(|_| Row::new(cols)).collect(),
            history: History::new(history_limit),
            cursor: Cursor::new(),
            saved_cursor: SavedCursor::default(),
            scroll_top: 0,
            scroll_bottom: rows - 1,
            tab_stops: default_tab_stops(cols),
        }
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cursor(&self) -> &Cursor {
        &self.cursor
    }

    pub fn cursor_mut(&mut self) -> &mut Cursor {
        &mut self.cursor
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn scroll_top(&self) -> usize {
        self.scroll_top
    }

    pub fn scroll_bottom(&self) -> usize {
        self.scroll_bottom
    }

    /// Get a cell at the given position.
    pub fn cell(&self, col: usize, row: usize) -> Option<&Cell> {
        self.grid.get(row).and_then(|r| r.get(col))
    }

    fn cell_mut(&mut self, col: usize, row: usize) -> Option<&mut Cell> {
        self.grid.get_mut(row).and_then(|r| r.get_mut(col))
    }

    /// Get a row of the visible grid.
    pub fn row(&self, row: usize) -> Option<&Row> {
        self.grid.get(row)
    }

    /// Write a printable character at the cursor and advance it, wrapping and
    /// scrolling as needed.
    pub fn print(&mut self, c: char) {
        let width = unicode_width::UnicodeWidthChar::width(c).unwrap_or(0);

        // Zero-width characters attach to the previous cell.
        if width == 0 {
            let (col, row) = (self.cursor.col, self.cursor.row);
            if col > 0 {
                if let Some(cell) = self.cell_mut(col - 1, row) {
                    cell.append_combining(c);
                }
            }
            return;
        }

        if self.cursor.pending_wrap {
            self.wrap_cursor();
        }

        // A wide character that doesn't fit in the last column wraps first,
        // leaving the stranded cell blank.
        if width == 2 && self.cursor.col == self.cols - 1 {
            let (col, row) = (self.cursor.col, self.cursor.row);
            if let Some(cell) = self.cell_mut(col, row) {
                cell.clear();
            }
            self.wrap_cursor();
        }

        let (col, row) = (self.cursor.col, self.cursor.row);
        let (fg, bg, attrs) = (self.cursor.fg, self.cursor.bg, self.cursor.attrs);

        if let Some(cell) = self.cell_mut(col, row) {
            cell.content.clear();
            cell.content.push(c);
            cell.fg = fg;
            cell.bg = bg;
            cell.attrs = attrs;
            cell.width = width as u8;
        }

        // Mark the trailing half of a wide character.
        if width == 2 && col + 1 < self.cols {
            if let Some(cell) = self.cell_mut(col + 1, row) {
                cell.content.clear();
                cell.fg = fg;
                cell.bg = bg;
                cell.attrs = attrs;
                cell.width = 0;
            }
        }

        let new_col = col + width;
        if new_col >= self.cols {
            self.cursor.col = self.cols - 1;
            if self.cursor.autowrap {
                self.cursor.pending_wrap = true;
            }
        } else {
            self.cursor.col = new_col;
        }
    }

    /// Wrap to the start of the next line, scrolling at the region bottom.
    fn wrap_cursor(&mut self) {
        let row = self.cursor.row;
        self.cursor.pending_wrap = false;
        self.cursor.col = 0;

        if let Some(line) = self.grid.get_mut(row) {
            line.wrapped = true;
        }

        if row == self.scroll_bottom {
            self.scroll_up(1);
        } else if row < self.rows - 1 {
            self.cursor.row += 1;
        }
    }

    /// Line feed: move down one row, scrolling at the region bottom.
    pub fn linefeed(&mut self) {
        self.cursor.pending_wrap = false;
        let row = self.cursor.row;

        if row == self.scroll_bottom {
            self.scroll_up(1);
        } else if row < self.rows - 1 {
            self.cursor.row += 1;
        }
    }

    /// Carriage return: column 0.
    pub fn carriage_return(&mut self) {
        self.cursor.carriage_return();
    }

    /// Backspace: one column left, clamped at 0.
    pub fn backspace(&mut self) {
        self.cursor.pending_wrap = false;
        if self.cursor.col > 0 {
            self.cursor.col -= 1;
        }
    }

    /// Horizontal tab: advance to the next tab stop, or the last column.
    pub fn tab(&mut self) {
        self.cursor.pending_wrap = false;
        for i in (self.cursor.col + 1)..self.cols {
            if self.tab_stops.get(i).copied().unwrap_or(false) {
                self.cursor.col = i;
                return;
            }
        }
        self.cursor.col = self.cols - 1;
    }

    /// Index: same as line feed.
    pub fn index(&mut self) {
        self.linefeed();
    }

    /// Reverse index: move up one row, scrolling down at the region top.
    pub fn reverse_index(&mut self) {
        self.cursor.pending_wrap = false;
        let row = self.cursor.row;

        if row == self.scroll_top {
            self.scroll_down(1);
        } else if row > 0 {
            self.cursor.row -= 1;
        }
    }

    /// Next line: line feed plus carriage return.
    pub fn next_line(&mut self) {
        self.linefeed();
        self.cursor.col = 0;
    }

    /// Scroll the region up by n lines. Lines leaving a region that starts at
    /// the top of the screen are pushed into history.
    pub fn scroll_up(&mut self, n: usize) {
        if n == 0 {
            return;
        }
        let top = self.scroll_top;
        let bottom = self.scroll_bottom;
        let n = n.min(bottom - top + 1);

        if top == 0 {
            for i in 0..n {
                self.history.push(self.grid[top + i].clone());
            }
        }

        for i in top..=bottom {
            if i + n <= bottom {
                self.grid[i] = self.grid[i + n].clone();
            } else {
                self.grid[i] = Row::new(self.cols);
            }
        }
    }

    /// Scroll the region down by n lines; new blank lines appear at the top.
    pub fn scroll_down(&mut self, n: usize) {
        if n == 0 {
            return;
        }
        let top = self.scroll_top;
        let bottom = self.scroll_bottom;
        let n = n.min(bottom - top + 1);

        for i in (top..=bottom).rev() {
            if i >= top + n {
                self.grid[i] = self.grid[i - n].clone();
            } else {
                self.grid[i] = Row::new(self.cols);
            }
        }
    }

    /// Set the scroll region (DECSTBM); an invalid region resets to the full
    /// screen. The cursor moves home either way.
    pub fn set_scroll_region(&mut self, top: usize, bottom: usize) {
        let top = top.min(self.rows - 1);
        let bottom = bottom.min(self.rows - 1);

        if top < bottom {
            self.scroll_top = top;
            self.scroll_bottom = bottom;
        } else {
            self.scroll_top = 0;
            self.scroll_bottom = self.rows - 1;
        }
        self.cursor.move_to(0, 0, self.cols, self.rows);
    }

    /// Reset the scroll region to the full screen.
    pub fn reset_scroll_region(&mut self) {
        self.scroll_top = 0;
        self.scroll_bottom = self.rows - 1;
    }

    /// Set a tab stop at the cursor column (HTS).
    pub fn set_tab_stop(&mut self) {
        let col = self.cursor.col;
        if col < self.tab_stops.len() {
            self.tab_stops[col] = true;
        }
    }

    /// Clear the tab stop at the cursor column (TBC 0).
    pub fn clear_tab_stop(&mut self) {
        let col = self.cursor.col;
        if col < self.tab_stops.len() {
            self.tab_stops[col] = false;
        }
    }

    /// Clear every tab stop (TBC 3).
    pub fn clear_all_tab_stops(&mut self) {
        for stop in &mut self.tab_stops {
            *stop = false;
        }
    }

    /// Erase in display (ED). Modes: 0 = cursor to end, 1 = start to cursor,
    /// 2 = whole screen, 3 = whole screen plus scrollback.
    pub fn erase_in_display(&mut self, mode: u16) {
        let bg = self.cursor.bg;
        let (col, row) = (self.cursor.col, self.cursor.row);

        match mode {
            0 => {
                if let Some(line) = self.grid.get_mut(row) {
                    for cell in &mut line.cells[col..] {
                        cell.erase(bg);
                    }
                }
                for line in self.grid.iter_mut().skip(row + 1) {
                    for cell in &mut line.cells {
                        cell.erase(bg);
                    }
                }
            }
            1 => {
                for line in self.grid.iter_mut().take(row) {
                    for cell in &mut line.cells {
                        cell.erase(bg);
                    }
                }
                if let Some(line) = self.grid.get_mut(row) {
                    for cell in &mut line.cells[..=col.min(self.cols - 1)] {
                        cell.erase(bg);
                    }
                }
            }
            2 | 3 => {
                for line in &mut self.grid {
                    for cell in &mut line.cells {
                        cell.erase(bg);
                    }
                }
                if mode == 3 {
                    self.history.clear();
                }
            }
            _ => {}
        }
    }

    /// Erase in line (EL). Modes: 0 = cursor to end, 1 = start to cursor,
    /// 2 = whole line.
    pub fn erase_in_line(&mut self, mode: u16) {
        let bg = self.cursor.bg;
        let (col, row) = (self.cursor.col, self.cursor.row);
        let cols = self.cols;

        if let Some(line) = self.grid.get_mut(row) {
            match mode {
                0 => {
                    for cell in &mut line.cells[col..] {
                        cell.erase(bg);
                    }
                }
                1 => {
                    for cell in &mut line.cells[..=col.min(cols - 1)] {
                        cell.erase(bg);
                    }
                }
                2 => {
                    for cell in &mut line.cells {
                        cell.erase(bg);
                    }
                }
                _ => {}
            }
        }
    }

    /// Erase n characters from the cursor (ECH), without shifting.
    pub fn erase_chars(&mut self, n: usize) {
        let bg = self.cursor.bg;
        let (col, row) = (self.cursor.col, self.cursor.row);
        let end = (col + n).min(self.cols);

        if let Some(line) = self.grid.get_mut(row) {
            for cell in &mut line.cells[col..end] {
                cell.erase(bg);
            }
        }
    }

    /// Insert n blank lines at the cursor row (IL), within the scroll region.
    pub fn insert_lines(&mut self, n: usize) {
        let row = self.cursor.row;
        if n == 0 || row < self.scroll_top || row > self.scroll_bottom {
            return;
        }
        let bottom = self.scroll_bottom;

        for i in (row..=bottom).rev() {
            if i >= row + n {
                self.grid[i] = self.grid[i - n].clone();
            } else {
                self.grid[i] = Row::new(self.cols);
            }
        }
    }

    /// Delete n lines at the cursor row (DL), within the scroll region.
    pub fn delete_lines(&mut self, n: usize) {
        let row = self.cursor.row;
        if n == 0 || row < self.scroll_top || row > self.scroll_bottom {
            return;
        }
        let bottom = self.scroll_bottom;

        for i in row..=bottom {
            if i + n <= bottom {
                self.grid[i] = self.grid[i + n].clone();
            } else {
                self.grid[i] = Row::new(self.cols);
            }
        }
    }

    /// Insert n blank cells at the cursor (ICH), shifting the rest right.
    pub fn insert_chars(&mut self, n: usize) {
        if n == 0 {
            return;
        }
        let (col, row) = (self.cursor.col, self.cursor.row);
        let cols = self.cols;

        if let Some(line) = self.grid.get_mut(row) {
            for i in ((col + n)..cols).rev() {
                line.cells[i] = line.cells[i - n].clone();
            }
            for i in col..(col + n).min(cols) {
                line.cells[i].clear();
            }
        }
    }

    /// Delete n cells at the cursor (DCH), shifting the rest left.
    pub fn delete_chars(&mut self, n: usize) {
        if n == 0 {
            return;
        }
        let (col, row) = (self.cursor.col, self.cursor.row);
        let cols = self.cols;

        if let Some(line) = self.grid.get_mut(row) {
            for i in col..cols {
                if i + n < cols {
                    line.cells[i] = line.cells[i + n].clone();
                } else {
                    line.cells[i].clear();
                }
            }
        }
    }

    /// Move the cursor to an absolute position (CUP/HVP), clamped.
    pub fn move_cursor_to(&mut self, row: usize, col: usize) {
        self.cursor.move_to(col, row, self.cols, self.rows);
    }

    pub fn move_cursor_up(&mut self, n: usize) {
        self.cursor.move_up(n);
    }

    pub fn move_cursor_down(&mut self, n: usize) {
        self.cursor.move_down(n, self.rows);
    }

    pub fn move_cursor_forward(&mut self, n: usize) {
        self.cursor.move_right(n, self.cols);
    }

    pub fn move_cursor_backward(&mut self, n: usize) {
        self.cursor.move_left(n);
    }

    pub fn move_cursor_to_col(&mut self, col: usize) {
        self.cursor.set_col(col, self.cols);
    }

    pub fn move_cursor_to_row(&mut self, row: usize) {
        self.cursor.set_row(row, self.rows);
    }

    /// Save cursor state (DECSC).
    pub fn save_cursor(&mut self) {
        self.saved_cursor = self.cursor.save();
    }

    /// Restore cursor state (DECRC).
    pub fn restore_cursor(&mut self) {
        let saved = self.saved_cursor.clone();
        self.cursor.restore(&saved, self.cols, self.rows);
    }

    /// Full reset (RIS): blank grid, home cursor, default everything,
    /// cleared history.
    pub fn reset(&mut self) {
        for line in &mut self.grid {
            line.clear();
        }
        self.cursor.reset();
        self.saved_cursor = SavedCursor::default();
        self.scroll_top = 0;
        self.scroll_bottom = self.rows - 1;
        self.tab_stops = default_tab_stops(self.cols);
        self.history.clear();
    }

    /// Resize the screen, preserving as much content as possible.
    ///
    /// Columns: every grid and history row is truncated or padded.
    /// Shrinking rows pushes excess top rows into history; growing rows pulls
    /// the most recent history back on screen first, then pads with blanks at
    /// the bottom. The cursor follows the content and ends in bounds. Parser
    /// state is not touched by resize; this is safe mid-stream.
    pub fn resize(&mut self, new_cols: usize, new_rows: usize) {
        let new_cols = new_cols.max(1);
        let new_rows = new_rows.max(1);
        if new_cols == self.cols && new_rows == self.rows {
            return;
        }

        if new_cols != self.cols {
            for row in &mut self.grid {
                row.resize(new_cols);
            }
            self.history.resize_rows(new_cols);
        }

        if new_rows < self.rows {
            let excess = self.rows - new_rows;
            for _ in 0..excess {
                let row = self.grid.remove(0);
                self.history.push(row);
            }
            self.cursor.row = self.cursor.row.saturating_sub(excess);
        } else if new_rows > self.rows {
            let mut grow = new_rows - self.rows;
            while grow > 0 {
                match self.history.pop_newest() {
                    Some(row) => {
                        self.grid.insert(0, row);
                        self.cursor.row += 1;
                        grow -= 1;
                    }
                    None => break,
                }
            }
            for _ in 0..grow {
                self.grid.push(Row::new(new_cols));
            }
        }

        self.cols = new_cols;
        self.rows = new_rows;
        self.scroll_top = 0;
        self.scroll_bottom = new_rows - 1;
        self.tab_stops = default_tab_stops(new_cols);
        self.cursor.col = self.cursor.col.min(new_cols - 1);
        self.cursor.row = self.cursor.row.min(new_rows - 1);
        self.cursor.pending_wrap = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fill_row(screen: &mut ScreenBuffer, text: &str) {
        for c in text.chars() {
            screen.print(c);
        }
    }

    #[test]
    fn print_advances_cursor() {
        let mut screen = ScreenBuffer::new(80, 24, 100);
        fill_row(&mut screen, "Hi");

        assert_eq!(screen.cell(0, 0).unwrap().display_char(), 'H');
        assert_eq!(screen.cell(1, 0).unwrap().display_char(), 'i');
        assert_eq!(screen.cursor().col, 2);
    }

    #[test]
    fn autowrap_continues_on_next_row() {
        let mut screen = ScreenBuffer::new(5, 3, 100);
        fill_row(&mut screen, "Hello World");

        assert_eq!(screen.row(0).unwrap().text(), "Hello");
        assert_eq!(screen.row(1).unwrap().text(), " Worl");
        assert_eq!(screen.row(2).unwrap().text(), "d");
        assert!(screen.row(0).unwrap().wrapped);
    }

    #[test]
    fn scroll_pushes_top_row_into_history() {
        let mut screen = ScreenBuffer::new(80, 3, 100);

        fill_row(&mut screen, "1");
        screen.linefeed();
        screen.carriage_return();
        fill_row(&mut screen, "2");
        screen.linefeed();
        screen.carriage_return();
        fill_row(&mut screen, "3");
        screen.linefeed();
        screen.carriage_return();
        fill_row(&mut screen, "4");

        assert_eq!(screen.row(0).unwrap().text(), "2");
        assert_eq!(screen.row(2).unwrap().text(), "4");
        assert_eq!(screen.history().len(), 1);
        assert_eq!(screen.history().get(0).unwrap().text(), "1");
    }

    #[test]
    fn overflow_by_one_char_lands_in_history() {
        let mut screen = ScreenBuffer::new(80, 24, 100);
        for _ in 0..(80 * 24 + 1) {
            screen.print('x');
        }

        assert_eq!(screen.cursor().col, 1);
        assert_eq!(screen.cursor().row, 23);
        assert_eq!(screen.history().len(), 1);
        assert_eq!(screen.cell(0, 23).unwrap().display_char(), 'x');
    }

    #[test]
    fn erase_to_end_of_line_from_column() {
        let mut screen = ScreenBuffer::new(10, 1, 100);
        fill_row(&mut screen, "AAAAAAAAAA");

        screen.move_cursor_to(0, 5);
        screen.erase_in_line(0);

        assert_eq!(screen.row(0).unwrap().text(), "AAAAA");
        for col in 5..10 {
            assert!(screen.cell(col, 0).unwrap().is_blank());
        }
    }

    #[test]
    fn erase_in_display_from_cursor() {
        let mut screen = ScreenBuffer::new(10, 3, 100);
        for _ in 0..3 {
            fill_row(&mut screen, "XXXXXXXXXX");
        }

        screen.move_cursor_to(1, 5);
        screen.erase_in_display(0);

        assert_eq!(screen.row(0).unwrap().text(), "XXXXXXXXXX");
        assert_eq!(screen.row(1).unwrap().text(), "XXXXX");
        assert_eq!(screen.row(2).unwrap().text(), "");
    }

    #[test]
    fn erase_display_mode_three_clears_history() {
        let mut screen = ScreenBuffer::new(80, 2, 100);
        fill_row(&mut screen, "a");
        screen.linefeed();
        screen.linefeed();
        assert_eq!(screen.history().len(), 1);

        screen.erase_in_display(3);
        assert!(screen.history().is_empty());
        assert_eq!(screen.row(0).unwrap().text(), "");
    }

    #[test]
    fn tab_stops_default_every_eight() {
        let mut screen = ScreenBuffer::new(80, 24, 100);
        screen.tab();
        assert_eq!(screen.cursor().col, 8);
        screen.tab();
        assert_eq!(screen.cursor().col, 16);

        screen.clear_all_tab_stops();
        screen.move_cursor_to(0, 5);
        screen.set_tab_stop();
        screen.move_cursor_to(0, 0);
        screen.tab();
        assert_eq!(screen.cursor().col, 5);
    }

    #[test]
    fn scroll_region_confines_scrolling() {
        let mut screen = ScreenBuffer::new(10, 5, 100);
        for i in 0..5 {
            screen.move_cursor_to(i, 0);
            screen.print(char::from_digit(i as u32, 10).unwrap());
        }

        screen.set_scroll_region(1, 3);
        screen.move_cursor_to(3, 0);
        screen.linefeed();

        // Row 0 and row 4 are outside the region and stay put.
        assert_eq!(screen.row(0).unwrap().text(), "0");
        assert_eq!(screen.row(1).unwrap().text(), "2");
        assert_eq!(screen.row(2).unwrap().text(), "3");
        assert_eq!(screen.row(3).unwrap().text(), "");
        assert_eq!(screen.row(4).unwrap().text(), "4");
        // A partial region does not feed history.
        assert!(screen.history().is_empty());
    }

    #[test]
    fn insert_and_delete_lines() {
        let mut screen = ScreenBuffer::new(10, 5, 100);
        for i in 0..5 {
            screen.move_cursor_to(i, 0);
            screen.print(char::from_digit(i as u32, 10).unwrap());
        }

        screen.move_cursor_to(2, 0);
        screen.insert_lines(2);

        assert_eq!(screen.row(1).unwrap().text(), "1");
        assert_eq!(screen.row(2).unwrap().text(), "");
        assert_eq!(screen.row(3).unwrap().text(), "");
        assert_eq!(screen.row(4).unwrap().text(), "2");

        screen.delete_lines(2);
        assert_eq!(screen.row(2).unwrap().text(), "2");
    }

    #[test]
    fn insert_and_delete_chars() {
        let mut screen = ScreenBuffer::new(10, 1, 100);
        fill_row(&mut screen, "ABCDEFGHIJ");

        screen.move_cursor_to(0, 3);
        screen.insert_chars(2);
        assert_eq!(screen.row(0).unwrap().text(), "ABC  DEFGH");

        screen.delete_chars(2);
        assert_eq!(screen.row(0).unwrap().text(), "ABCDEFGH");
    }

    #[test]
    fn wide_char_occupies_two_cells() {
        let mut screen = ScreenBuffer::new(10, 2, 100);
        screen.print('中');

        assert_eq!(screen.cell(0, 0).unwrap().width, 2);
        assert!(screen.cell(1, 0).unwrap().is_continuation());
        assert_eq!(screen.cursor().col, 2);
    }

    #[test]
    fn wide_char_at_last_column_wraps() {
        let mut screen = ScreenBuffer::new(4, 2, 100);
        fill_row(&mut screen, "abc");
        screen.print('中');

        assert!(screen.cell(3, 0).unwrap().is_blank());
        assert_eq!(screen.cell(0, 1).unwrap().display_char(), '中');
    }

    #[test]
    fn resize_shrink_rows_pushes_top_into_history() {
        let mut screen = ScreenBuffer::new(10, 4, 100);
        for i in 0..4 {
            screen.move_cursor_to(i, 0);
            screen.print(char::from_digit(i as u32, 10).unwrap());
        }
        screen.move_cursor_to(3, 0);

        screen.resize(10, 2);

        assert_eq!(screen.rows(), 2);
        assert_eq!(screen.history().len(), 2);
        assert_eq!(screen.history().get(0).unwrap().text(), "0");
        assert_eq!(screen.history().get(1).unwrap().text(), "1");
        assert_eq!(screen.row(0).unwrap().text(), "2");
        assert_eq!(screen.cursor().row, 1);
    }

    #[test]
    fn resize_grow_rows_pulls_history_back() {
        let mut screen = ScreenBuffer::new(10, 2, 100);
        fill_row(&mut screen, "a");
        screen.linefeed();
        screen.carriage_return();
        fill_row(&mut screen, "b");
        screen.linefeed();
        screen.carriage_return();
        fill_row(&mut screen, "c");
        assert_eq!(screen.history().len(), 1);

        screen.resize(10, 4);

        assert_eq!(screen.history().len(), 0);
        assert_eq!(screen.row(0).unwrap().text(), "a");
        assert_eq!(screen.row(1).unwrap().text(), "b");
        assert_eq!(screen.row(2).unwrap().text(), "c");
        assert_eq!(screen.row(3).unwrap().text(), "");
    }

    #[test]
    fn resize_rewrites_history_width() {
        let mut screen = ScreenBuffer::new(10, 2, 100);
        fill_row(&mut screen, "0123456789");
        screen.linefeed();
        screen.linefeed();
        assert_eq!(screen.history().len(), 1);

        screen.resize(4, 2);

        assert!(screen.history().iter().all(|r| r.cells.len() == 4));
        assert_eq!(screen.history().get(0).unwrap().text(), "0123");
    }

    #[test]
    fn resize_clamps_cursor() {
        let mut screen = ScreenBuffer::new(80, 24, 100);
        screen.move_cursor_to(23, 79);

        screen.resize(40, 12);

        assert!(screen.cursor().col < 40);
        assert!(screen.cursor().row < 12);
    }

    #[test]
    fn reset_clears_everything() {
        let mut screen = ScreenBuffer::new(10, 3, 100);
        fill_row(&mut screen, "hello");
        screen.cursor_mut().attrs.bold = true;
        screen.linefeed();
        screen.linefeed();
        screen.linefeed();

        screen.reset();

        assert_eq!(screen.row(0).unwrap().text(), "");
        assert_eq!(screen.cursor().col, 0);
        assert_eq!(screen.cursor().row, 0);
        assert!(!screen.cursor().attrs.bold);
        assert!(screen.history().is_empty());
    }
}
