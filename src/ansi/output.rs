//! Buffered ANSI output writer with state tracking.

use crate::ansi;
use crate::cell::Cell;
use crate::style::TextAttributes;
use std::io::{self, Write};

/// Buffered writer that tracks ANSI state to minimize escape sequences.
///
/// Everything is staged in memory and reaches the wrapped writer only on
/// [`flush`](Self::flush), so one frame becomes one write.
pub struct AnsiWriter<W: Write> {
    writer: W,
    buffer: Vec<u8>,
    current_attrs: TextAttributes,
    /// Known cursor position, `None` until the first absolute move.
    cursor: Option<(u32, u32)>,
}

impl<W: Write> AnsiWriter<W> {
    /// Create a new ANSI writer wrapping the given output.
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            buffer: Vec::with_capacity(8192),
            current_attrs: TextAttributes::empty(),
            cursor: None,
        }
    }

    /// Forget tracked state so the next writes are emitted unconditionally.
    pub fn reset_state(&mut self) {
        self.current_attrs = TextAttributes::empty();
        self.cursor = None;
    }

    /// Write a raw string to the buffer.
    pub fn write_str(&mut self, s: &str) {
        self.buffer.extend_from_slice(s.as_bytes());
    }

    /// Move the cursor, skipping the sequence when already there.
    pub fn move_cursor(&mut self, row: u32, col: u32) {
        if self.cursor == Some((row, col)) {
            return;
        }
        let _ = ansi::write_cursor_position(&mut self.buffer, row, col);
        self.cursor = Some((row, col));
    }

    /// Set text attributes, only writing changes.
    pub fn set_attributes(&mut self, attrs: TextAttributes) {
        if self.current_attrs == attrs {
            return;
        }

        let removed = self.current_attrs - attrs;
        if removed.intersects(TextAttributes::BOLD | TextAttributes::DIM) {
            self.write_str(ansi::attr::RESET_INTENSITY);
            self.current_attrs -= TextAttributes::BOLD | TextAttributes::DIM;
        }
        if removed.contains(TextAttributes::UNDERLINE) {
            self.write_str(ansi::attr::RESET_UNDERLINE);
            self.current_attrs -= TextAttributes::UNDERLINE;
        }
        if removed.contains(TextAttributes::INVERSE) {
            self.write_str(ansi::attr::RESET_INVERSE);
            self.current_attrs -= TextAttributes::INVERSE;
        }

        let to_add = attrs - self.current_attrs;
        let _ = ansi::write_attributes(&mut self.buffer, to_add);
        self.current_attrs = attrs;
    }

    /// Write a cell at the current cursor position.
    pub fn write_cell(&mut self, cell: &Cell) {
        self.set_attributes(cell.style.attributes);
        let _ = cell.write_content(&mut self.buffer);
        if let Some((row, col)) = self.cursor {
            self.cursor = Some((row, col + 1));
        }
    }

    /// Write a cell at a specific position.
    pub fn write_cell_at(&mut self, row: u32, col: u32, cell: &Cell) {
        self.move_cursor(row, col);
        self.write_cell(cell);
    }

    /// Reset all ANSI attributes.
    pub fn reset(&mut self) {
        self.write_str(ansi::RESET);
        self.current_attrs = TextAttributes::empty();
    }

    /// Flush the buffer to the underlying writer.
    pub fn flush(&mut self) -> io::Result<()> {
        self.writer.write_all(&self.buffer)?;
        self.buffer.clear();
        self.writer.flush()
    }

    /// Get a reference to the underlying writer.
    pub fn get_ref(&self) -> &W {
        &self.writer
    }

    /// Get the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
    }

    /// Get a reference to the staged bytes.
    pub fn buffer(&self) -> &[u8] {
        &self.buffer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::Style;

    #[test]
    fn test_ansi_writer_basic() {
        let mut writer = AnsiWriter::new(Vec::new());
        writer.write_str("Hello");
        assert_eq!(writer.buffer(), b"Hello");
        assert!(writer.get_ref().is_empty());
        writer.flush().unwrap();
        assert_eq!(writer.into_inner(), b"Hello");
    }

    #[test]
    fn test_sequential_cells_skip_cursor_moves() {
        let mut writer = AnsiWriter::new(Vec::new());
        writer.write_cell_at(0, 0, &Cell::new('a', Style::NONE));
        writer.write_cell_at(0, 1, &Cell::new('b', Style::NONE));
        assert_eq!(writer.buffer(), b"\x1b[1;1Hab");
    }

    #[test]
    fn test_attribute_caching() {
        let mut writer = AnsiWriter::new(Vec::new());
        writer.set_attributes(TextAttributes::INVERSE);
        let len1 = writer.buffer().len();
        writer.set_attributes(TextAttributes::INVERSE);
        assert_eq!(writer.buffer().len(), len1);
    }

    #[test]
    fn test_attribute_removal() {
        let mut writer = AnsiWriter::new(Vec::new());
        writer.set_attributes(TextAttributes::INVERSE);
        writer.set_attributes(TextAttributes::DIM);
        assert_eq!(writer.buffer(), b"\x1b[7m\x1b[27m\x1b[2m");
    }

    #[test]
    fn test_reset_state_forces_move() {
        let mut writer = AnsiWriter::new(Vec::new());
        writer.move_cursor(2, 3);
        writer.reset_state();
        writer.move_cursor(2, 3);
        assert_eq!(writer.buffer(), b"\x1b[3;4H\x1b[3;4H");
    }
}
