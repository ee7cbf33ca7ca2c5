//! Terminal executor
//!
//! Ties the parser to the screen buffer: bytes go in, parsed actions are
//! applied, and the screen reflects the result. This is the single place
//! that decides what each escape sequence means; sequences it does not
//! recognize are logged at debug level and dropped, never fatal.

use tracing::debug;

use crate::core::{Color, ScreenBuffer, Snapshot};
use crate::parser::{Action, ControlCode, CsiAction, EscAction, Parser};

/// A complete emulated terminal: parser plus screen.
pub struct Terminal {
    screen: ScreenBuffer,
    parser: Parser,
    /// Bells seen since the last `take_bells` call
    bells: u32,
}

impl Terminal {
    /// Create a terminal with the given dimensions and history capacity.
    pub fn new(cols: usize, rows: usize, history_limit: usize) -> Self {
        Self {
            screen: ScreenBuffer::new(cols, rows, history_limit),
            parser: Parser::new(),
            bells: 0,
        }
    }

    pub fn screen(&self) -> &ScreenBuffer {
        &self.screen
    }

    pub fn screen_mut(&mut self) -> &mut ScreenBuffer {
        &mut self.screen
    }

    pub fn cols(&self) -> usize {
        self.screen.cols()
    }

    pub fn rows(&self) -> usize {
        self.screen.rows()
    }

    /// Feed raw channel bytes through the parser into the screen.
    pub fn feed(&mut self, data: &[u8]) {
        for action in self.parser.feed(data) {
            self.apply(action);
        }
    }

    /// Resize the screen. Parser state is deliberately untouched so a resize
    /// can land between any two chunks without corrupting a split sequence.
    pub fn resize(&mut self, cols: usize, rows: usize) {
        self.screen.resize(cols, rows);
    }

    /// Capture the current state for rendering.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::from_screen(&self.screen)
    }

    /// Number of bell events since the last call; resets the counter.
    pub fn take_bells(&mut self) -> u32 {
        std::mem::take(&mut self.bells)
    }

    fn apply(&mut self, action: Action) {
        match action {
            Action::Print(c) => self.screen.print(c),
            Action::Control(code) => self.execute_control(code),
            Action::Csi(csi) => self.execute_csi(csi),
            Action::Esc(esc) => self.execute_esc(esc),
        }
    }

    fn execute_control(&mut self, code: ControlCode) {
        match code {
            ControlCode::Bell => {
                self.bells = self.bells.saturating_add(1);
            }
            ControlCode::Backspace => self.screen.backspace(),
            ControlCode::Tab => self.screen.tab(),
            ControlCode::LineFeed | ControlCode::VerticalTab | ControlCode::FormFeed => {
                self.screen.linefeed();
            }
            ControlCode::CarriageReturn => self.screen.carriage_return(),
        }
    }

    fn execute_csi(&mut self, csi: CsiAction) {
        if csi.private_marker.is_some() {
            self.execute_csi_private(&csi);
            return;
        }

        let count = csi.param_or_default(0, 1) as usize;

        match csi.final_char {
            // Cursor movement
            'A' => self.screen.move_cursor_up(count),
            'B' => self.screen.move_cursor_down(count),
            'C' => self.screen.move_cursor_forward(count),
            'D' => self.screen.move_cursor_backward(count),
            'E' => {
                self.screen.move_cursor_down(count);
                self.screen.move_cursor_to_col(0);
            }
            'F' => {
                self.screen.move_cursor_up(count);
                self.screen.move_cursor_to_col(0);
            }
            'G' => {
                let col = csi.param_or_default(0, 1).saturating_sub(1) as usize;
                self.screen.move_cursor_to_col(col);
            }
            'd' => {
                let row = csi.param_or_default(0, 1).saturating_sub(1) as usize;
                self.screen.move_cursor_to_row(row);
            }
            'H' | 'f' => {
                let row = csi.param_or_default(0, 1).saturating_sub(1) as usize;
                let col = csi.param_or_default(1, 1).saturating_sub(1) as usize;
                self.screen.move_cursor_to(row, col);
            }

            // Erase
            'J' => self.screen.erase_in_display(csi.param(0, 0)),
            'K' => self.screen.erase_in_line(csi.param(0, 0)),
            'X' => self.screen.erase_chars(count),

            // Insert/delete
            'L' => self.screen.insert_lines(count),
            'M' => self.screen.delete_lines(count),
            '@' => self.screen.insert_chars(count),
            'P' => self.screen.delete_chars(count),

            // Scrolling
            'S' => self.screen.scroll_up(count),
            'T' => self.screen.scroll_down(count),
            'r' => {
                let top = csi.param_or_default(0, 1).saturating_sub(1) as usize;
                let bottom = csi
                    .param_or_default(1, self.screen.rows() as u16)
                    .saturating_sub(1) as usize;
                self.screen.set_scroll_region(top, bottom);
            }

            // Attributes
            'm' => self.apply_sgr(&csi.params),

            // Tab stops
            'g' => match csi.param(0, 0) {
                0 => self.screen.clear_tab_stop(),
                3 => self.screen.clear_all_tab_stops(),
                _ => {}
            },

            // Cursor save/restore
            's' => self.screen.save_cursor(),
            'u' => self.screen.restore_cursor(),

            // Device status report: accepted and ignored, no reply channel
            // is wired at this layer.
            'n' => debug!(param = csi.param(0, 0), "device status report ignored"),

            _ => debug!(
                final_char = %csi.final_char,
                params = ?csi.params,
                "unhandled CSI sequence"
            ),
        }
    }

    fn execute_csi_private(&mut self, csi: &CsiAction) {
        let enable = match csi.final_char {
            'h' => true,
            'l' => false,
            _ => {
                debug!(
                    final_char = %csi.final_char,
                    params = ?csi.params,
                    marker = ?csi.private_marker,
                    "unhandled private CSI sequence"
                );
                return;
            }
        };

        for &mode in &csi.params {
            match mode {
                // DECAWM: autowrap
                7 => self.screen.cursor_mut().autowrap = enable,
                // DECTCEM: cursor visibility
                25 => self.screen.cursor_mut().visible = enable,
                _ => debug!(mode, enable, "unhandled DEC private mode"),
            }
        }
    }

    fn apply_sgr(&mut self, params: &[u16]) {
        if params.is_empty() {
            self.screen.cursor_mut().reset_attributes();
            return;
        }

        let mut i = 0;
        while i < params.len() {
            let cursor = self.screen.cursor_mut();
            match params[i] {
                0 => cursor.reset_attributes(),
                1 => cursor.attrs.bold = true,
                4 => cursor.attrs.underline = true,
                7 => cursor.attrs.inverse = true,
                22 => cursor.attrs.bold = false,
                24 => cursor.attrs.underline = false,
                27 => cursor.attrs.inverse = false,
                30..=37 => cursor.fg = Color::Indexed((params[i] - 30) as u8),
                39 => cursor.fg = Color::Default,
                40..=47 => cursor.bg = Color::Indexed((params[i] - 40) as u8),
                49 => cursor.bg = Color::Default,
                90..=97 => cursor.fg = Color::Indexed((params[i] - 90 + 8) as u8),
                100..=107 => cursor.bg = Color::Indexed((params[i] - 100 + 8) as u8),
                38 | 48 => {
                    let foreground = params[i] == 38;
                    let (color, consumed) = match parse_extended_color(&params[i + 1..]) {
                        Some(parsed) => parsed,
                        None => {
                            debug!(params = ?params, "malformed extended SGR color");
                            return;
                        }
                    };
                    let cursor = self.screen.cursor_mut();
                    if foreground {
                        cursor.fg = color;
                    } else {
                        cursor.bg = color;
                    }
                    i += consumed;
                }
                other => debug!(code = other, "unhandled SGR code"),
            }
            i += 1;
        }
    }

    fn execute_esc(&mut self, esc: EscAction) {
        match esc {
            EscAction::SaveCursor => self.screen.save_cursor(),
            EscAction::RestoreCursor => self.screen.restore_cursor(),
            EscAction::Index => self.screen.index(),
            EscAction::ReverseIndex => self.screen.reverse_index(),
            EscAction::NextLine => self.screen.next_line(),
            EscAction::TabSet => self.screen.set_tab_stop(),
            EscAction::FullReset => {
                self.screen.reset();
                self.parser.reset();
            }
            EscAction::Unknown(c) => debug!(final_char = %c, "unhandled ESC sequence"),
        }
    }
}

/// Parse the tail of an SGR 38/48 extended color: `5;n` or `2;r;g;b`.
/// Returns the color and how many parameters were consumed.
fn parse_extended_color(params: &[u16]) -> Option<(Color, usize)> {
    match *params.first()? {
        5 => {
            let index = *params.get(1)?;
            (index <= 255).then(|| (Color::Indexed(index as u8), 2))
        }
        2 => {
            let r = *params.get(1)?;
            let g = *params.get(2)?;
            let b = *params.get(3)?;
            (r <= 255 && g <= 255 && b <= 255)
                .then(|| (Color::Rgb(r as u8, g as u8, b as u8), 4))
        }
        _ => None,
    }
}
