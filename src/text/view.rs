//! Viewport projection of a document and its cursors onto a surface.

use crate::cell::Cell;
use crate::grid::Surface;
use crate::style::Style;
use crate::text::cursor::CursorSet;
use crate::text::document::Document;

/// Vertical window into a document.
///
/// Drawing is stateless: every call clears the target and redraws it from
/// the document, and never touches the document or cursors.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DocumentView {
    /// First document row shown at the top of the surface.
    pub start_line: usize,
    /// Style for text and background.
    pub text_style: Style,
    /// Style for cells under a cursor.
    pub cursor_style: Style,
}

impl Default for DocumentView {
    fn default() -> Self {
        Self {
            start_line: 0,
            text_style: Style::NONE,
            cursor_style: Style::inverse(),
        }
    }
}

impl DocumentView {
    /// Create a view starting at the first line.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Draw the visible lines and cursors onto `surface`.
    pub fn draw(&self, document: &Document, cursors: &CursorSet, surface: &mut impl Surface) {
        let (width, height) = surface.size();
        surface.fill(self.text_style);

        let rows = self.visible_rows(document, height);
        for (y, line) in (0..height).zip(document.lines().skip(rows.start).take(rows.len())) {
            for (x, &ch) in (0..width).zip(line.chars()) {
                surface.set_cell(x, y, Cell::new(ch, self.text_style));
            }
        }

        for cursor in cursors {
            if !rows.contains(&cursor.row) || cursor.col >= width as usize {
                continue;
            }
            let y = (cursor.row - self.start_line) as u32;
            let ch = document.get(cursor.row, cursor.col).unwrap_or(' ');
            surface.set_cell(cursor.col as u32, y, Cell::new(ch, self.cursor_style));
        }
    }

    /// Scroll the least amount that makes `row` visible in `height` rows.
    pub fn scroll_to(&mut self, row: usize, height: u32) {
        let height = height as usize;
        if height == 0 {
            return;
        }
        if row < self.start_line {
            self.start_line = row;
        } else if row >= self.start_line + height {
            self.start_line = row + 1 - height;
        }
    }

    /// Document rows visible in a surface of `height` rows.
    #[must_use]
    pub fn visible_rows(&self, document: &Document, height: u32) -> std::ops::Range<usize> {
        let end = (self.start_line + height as usize).min(document.len());
        self.start_line.min(end)..end
    }
}
