//! Terminal cell
//!
//! A single slot in the screen grid: the character it holds and the
//! attributes it was written with. Cells are replaced wholesale on write,
//! never partially mutated.

use serde::{Deserialize, Serialize};

/// Display attributes applied to a cell when it is written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attrs {
    pub bold: bool,
    pub underline: bool,
    pub inverse: bool,
}

impl Attrs {
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Color of a cell foreground or background.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Color {
    /// Default terminal color (foreground or background)
    Default,
    /// Indexed color from the xterm 256-color palette (0-255)
    Indexed(u8),
    /// 24-bit RGB color
    Rgb(u8, u8, u8),
}

impl Default for Color {
    fn default() -> Self {
        Color::Default
    }
}

impl Color {
    /// Standard ANSI colors (0-7)
    pub const BLACK: Color = Color::Indexed(0);
    pub const RED: Color = Color::Indexed(1);
    pub const GREEN: Color = Color::Indexed(2);
    pub const YELLOW: Color = Color::Indexed(3);
    pub const BLUE: Color = Color::Indexed(4);
    pub const MAGENTA: Color = Color::Indexed(5);
    pub const CYAN: Color = Color::Indexed(6);
    pub const WHITE: Color = Color::Indexed(7);

    /// Convert a 256-color index to RGB using the standard xterm palette.
    pub fn indexed_to_rgb(index: u8) -> (u8, u8, u8) {
        match index {
            // Standard colors (0-15), typical xterm defaults
            0 => (0, 0, 0),
            1 => (205, 0, 0),
            2 => (0, 205, 0),
            3 => (205, 205, 0),
            4 => (0, 0, 238),
            5 => (205, 0, 205),
            6 => (0, 205, 205),
            7 => (229, 229, 229),
            8 => (127, 127, 127),
            9 => (255, 0, 0),
            10 => (0, 255, 0),
            11 => (255, 255, 0),
            12 => (92, 92, 255),
            13 => (255, 0, 255),
            14 => (0, 255, 255),
            15 => (255, 255, 255),
            // 216-color cube (16-231)
            16..=231 => {
                let n = index - 16;
                let r = n / 36;
                let g = (n % 36) / 6;
                let b = n % 6;
                let level = |v: u8| if v == 0 { 0 } else { 55 + v * 40 };
                (level(r), level(g), level(b))
            }
            // Grayscale ramp (232-255)
            232..=255 => {
                let gray = 8 + (index - 232) * 10;
                (gray, gray, gray)
            }
        }
    }

    /// Resolve this color to RGB, substituting defaults.
    pub fn to_rgb(&self, is_foreground: bool) -> (u8, u8, u8) {
        match self {
            Color::Default => {
                if is_foreground {
                    (229, 229, 229)
                } else {
                    (0, 0, 0)
                }
            }
            Color::Indexed(i) => Self::indexed_to_rgb(*i),
            Color::Rgb(r, g, b) => (*r, *g, *b),
        }
    }
}

/// A single cell in the terminal grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    /// The character(s) in this cell. Empty for blanks and for the trailing
    /// half of a wide character; may hold several codepoints when combining
    /// marks attach to the base character.
    pub content: String,
    /// Foreground color
    pub fg: Color,
    /// Background color
    pub bg: Color,
    /// Display attributes
    pub attrs: Attrs,
    /// Display width: 0 for a wide-character continuation, 1 normal, 2 wide
    pub width: u8,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            content: String::new(),
            fg: Color::Default,
            bg: Color::Default,
            attrs: Attrs::default(),
            width: 1,
        }
    }
}

impl Cell {
    /// Check if this cell holds no character.
    pub fn is_blank(&self) -> bool {
        self.content.is_empty()
    }

    /// Check if this cell is the trailing half of a wide character.
    pub fn is_continuation(&self) -> bool {
        self.width == 0
    }

    /// The character to display, with blanks rendered as a space.
    pub fn display_char(&self) -> char {
        self.content.chars().next().unwrap_or(' ')
    }

    /// Reset the cell to the default state.
    pub fn clear(&mut self) {
        self.content.clear();
        self.fg = Color::Default;
        self.bg = Color::Default;
        self.attrs = Attrs::default();
        self.width = 1;
    }

    /// Clear the cell but keep the erasing background color.
    pub fn erase(&mut self, bg: Color) {
        self.content.clear();
        self.fg = Color::Default;
        self.bg = bg;
        self.attrs = Attrs::default();
        self.width = 1;
    }

    /// Attach a zero-width combining mark to this cell's content.
    pub fn append_combining(&mut self, c: char) {
        if !self.content.is_empty() {
            self.content.push(c);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_cell_is_blank() {
        let cell = Cell::default();
        assert!(cell.is_blank());
        assert_eq!(cell.fg, Color::Default);
        assert_eq!(cell.bg, Color::Default);
        assert_eq!(cell.display_char(), ' ');
    }

    #[test]
    fn clear_resets_attributes() {
        let mut cell = Cell {
            content: "A".to_string(),
            fg: Color::RED,
            ..Default::default()
        };
        cell.attrs.bold = true;
        cell.clear();
        assert!(cell.is_blank());
        assert_eq!(cell.fg, Color::Default);
        assert!(!cell.attrs.bold);
    }

    #[test]
    fn erase_keeps_background() {
        let mut cell = Cell {
            content: "A".to_string(),
            ..Default::default()
        };
        cell.erase(Color::BLUE);
        assert!(cell.is_blank());
        assert_eq!(cell.bg, Color::BLUE);
    }

    #[test]
    fn indexed_to_rgb_palette() {
        assert_eq!(Color::indexed_to_rgb(0), (0, 0, 0));
        assert_eq!(Color::indexed_to_rgb(15), (255, 255, 255));
        assert_eq!(Color::indexed_to_rgb(16), (0, 0, 0));
        assert_eq!(Color::indexed_to_rgb(231), (255, 255, 255));
        assert_eq!(Color::indexed_to_rgb(232), (8, 8, 8));
        assert_eq!(Color::indexed_to_rgb(255), (238, 238, 238));
    }

    #[test]
    fn combining_mark_needs_base() {
        let mut cell = Cell::default();
        cell.append_combining('\u{0301}');
        assert!(cell.is_blank());

        cell.content.push('e');
        cell.append_combining('\u{0301}');
        assert_eq!(cell.content, "e\u{0301}");
    }
}
