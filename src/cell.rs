//! Terminal cell type representing a single character position.
//!
//! A terminal display is a grid of cells, each holding one character plus
//! its [`Style`]. Document columns map one-to-one onto cells, so every cell
//! must occupy exactly one terminal column: characters that would not
//! (control characters, tabs, wide CJK, zero-width marks) are stored as a
//! space.
//!
//! # Examples
//!
//! ```
//! use ten::{Cell, Style};
//!
//! let cell = Cell::new('A', Style::NONE);
//! assert_eq!(cell.ch, 'A');
//!
//! // Tabs and other controls occupy one blank cell.
//! assert_eq!(Cell::new('\t', Style::NONE).ch, ' ');
//! ```

use crate::style::Style;
use std::io::{self, Write};
use unicode_width::UnicodeWidthChar;

/// A single grid cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Cell {
    /// Displayed character (always single-column).
    pub ch: char,
    /// Display style.
    pub style: Style,
}

impl Cell {
    /// Create a cell, replacing characters that are not exactly one column
    /// wide with a space.
    #[must_use]
    pub fn new(ch: char, style: Style) -> Self {
        Self {
            ch: display_char(ch),
            style,
        }
    }

    /// Create a blank cell with the given style.
    #[must_use]
    pub const fn blank(style: Style) -> Self {
        Self { ch: ' ', style }
    }

    /// Check if the cell shows nothing but background.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.ch == ' '
    }

    /// Write the cell's character as UTF-8.
    pub fn write_content<W: Write>(&self, w: &mut W) -> io::Result<()> {
        let mut buf = [0u8; 4];
        w.write_all(self.ch.encode_utf8(&mut buf).as_bytes())
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::blank(Style::NONE)
    }
}

/// Map a document character to the character shown in its cell.
#[must_use]
pub fn display_char(ch: char) -> char {
    if ch.width() == Some(1) { ch } else { ' ' }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_creation() {
        let cell = Cell::new('x', Style::bold());
        assert_eq!(cell.ch, 'x');
        assert_eq!(cell.style, Style::bold());
        assert!(!cell.is_blank());
    }

    #[test]
    fn test_cell_sanitizes_non_single_width() {
        assert_eq!(Cell::new('\t', Style::NONE).ch, ' ');
        assert_eq!(Cell::new('\u{7}', Style::NONE).ch, ' ');
        assert_eq!(Cell::new('漢', Style::NONE).ch, ' ');
        assert_eq!(Cell::new('é', Style::NONE).ch, 'é');
    }

    #[test]
    fn test_write_content() {
        let mut out = Vec::new();
        Cell::new('é', Style::NONE).write_content(&mut out).unwrap();
        assert_eq!(out, "é".as_bytes());
    }

    #[test]
    fn test_default_is_blank() {
        let cell = Cell::default();
        assert!(cell.is_blank());
        assert!(cell.style.is_empty());
    }
}
