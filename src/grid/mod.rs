//! Cell grids: the abstract character surface the editor draws onto.
//!
//! [`Surface`] is the drawing contract every view renders through: write a
//! string at a position, write a single styled cell, and query the extent.
//! [`CellGrid`] is the in-memory implementation used as the renderer's back
//! buffer, and [`GridRegion`] is a clipped, offset window into a grid so a
//! panel can draw in its own local coordinates.
//!
//! # Examples
//!
//! ```
//! use ten::grid::{CellGrid, Rect, Surface};
//! use ten::Style;
//!
//! let mut grid = CellGrid::new(10, 2);
//! grid.draw_text(0, 0, "hello", Style::NONE);
//!
//! let mut status = grid.region(Rect::new(0, 1, 10, 1));
//! status.draw_text(0, 0, "status", Style::inverse());
//!
//! assert_eq!(grid.row_text(0), "hello     ");
//! assert_eq!(grid.row_text(1), "status    ");
//! ```

mod region;

pub use region::{GridRegion, Rect};

use crate::cell::Cell;
use crate::style::Style;

/// A rectangular character surface.
///
/// Coordinates are (x, y) with (0, 0) at the top-left corner. Writes outside
/// the surface are clipped silently.
pub trait Surface {
    /// Surface extent as `(width, height)`.
    fn size(&self) -> (u32, u32);

    /// Write a single cell.
    fn set_cell(&mut self, x: u32, y: u32, cell: Cell);

    /// Write `text` starting at `(x, y)`, one cell per character, truncated
    /// at the right edge.
    fn draw_text(&mut self, x: u32, y: u32, text: &str, style: Style) {
        let (width, height) = self.size();
        if y >= height {
            return;
        }
        let mut col = x;
        for ch in text.chars() {
            if col >= width {
                break;
            }
            self.set_cell(col, y, Cell::new(ch, style));
            col += 1;
        }
    }

    /// Fill the whole surface with blank cells of `style`.
    fn fill(&mut self, style: Style) {
        let (width, height) = self.size();
        for y in 0..height {
            for x in 0..width {
                self.set_cell(x, y, Cell::blank(style));
            }
        }
    }
}

/// In-memory grid of [`Cell`]s, stored row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CellGrid {
    width: u32,
    height: u32,
    cells: Vec<Cell>,
}

impl CellGrid {
    /// Create a blank grid.
    ///
    /// Zero dimensions are clamped to 1.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        let width = width.max(1);
        let height = height.max(1);
        let size = (width as usize).saturating_mul(height as usize);
        Self {
            width,
            height,
            cells: vec![Cell::default(); size],
        }
    }

    /// Get grid width.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get grid height.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    fn cell_index(&self, x: u32, y: u32) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let row_offset = (y as usize).checked_mul(self.width as usize)?;
        row_offset.checked_add(x as usize)
    }

    /// Get cell at position.
    #[must_use]
    pub fn get(&self, x: u32, y: u32) -> Option<&Cell> {
        self.cell_index(x, y).map(|idx| &self.cells[idx])
    }

    /// Reset every cell to the default blank cell.
    pub fn clear(&mut self) {
        self.cells.fill(Cell::default());
    }

    /// Resize the grid, clearing contents.
    pub fn resize(&mut self, width: u32, height: u32) {
        *self = Self::new(width, height);
    }

    /// Get raw cell slice.
    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Characters of row `y` as a string (empty if out of range).
    #[must_use]
    pub fn row_text(&self, y: u32) -> String {
        if y >= self.height {
            return String::new();
        }
        let start = y as usize * self.width as usize;
        self.cells[start..start + self.width as usize]
            .iter()
            .map(|cell| cell.ch)
            .collect()
    }

    /// All rows with trailing blanks removed, for assertions and snapshots.
    #[must_use]
    pub fn to_trimmed_lines(&self) -> Vec<String> {
        (0..self.height)
            .map(|y| self.row_text(y).trim_end().to_string())
            .collect()
    }

    /// Borrow a clipped window of this grid.
    pub fn region(&mut self, rect: Rect) -> GridRegion<'_> {
        GridRegion::new(self, rect)
    }
}

impl Surface for CellGrid {
    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn set_cell(&mut self, x: u32, y: u32, cell: Cell) {
        if let Some(idx) = self.cell_index(x, y) {
            self.cells[idx] = cell;
        }
    }

    fn fill(&mut self, style: Style) {
        self.cells.fill(Cell::blank(style));
    }
}

impl Default for CellGrid {
    fn default() -> Self {
        Self::new(80, 24)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_size_clamped() {
        let grid = CellGrid::new(0, 0);
        assert_eq!(grid.size(), (1, 1));
        assert!(grid.get(0, 0).is_some());
    }

    #[test]
    fn test_draw_text_truncates_at_width() {
        let mut grid = CellGrid::new(4, 1);
        grid.draw_text(1, 0, "abcdef", Style::NONE);
        assert_eq!(grid.row_text(0), " abc");
    }

    #[test]
    fn test_out_of_bounds_writes_ignored() {
        let mut grid = CellGrid::new(3, 2);
        grid.set_cell(3, 0, Cell::new('x', Style::NONE));
        grid.set_cell(0, 2, Cell::new('x', Style::NONE));
        grid.draw_text(0, 5, "hidden", Style::NONE);
        assert!(grid.cells().iter().all(Cell::is_blank));
    }

    #[test]
    fn test_fill_applies_style() {
        let mut grid = CellGrid::new(2, 2);
        grid.draw_text(0, 0, "ab", Style::NONE);
        grid.fill(Style::dim());
        assert!(grid.cells().iter().all(|c| c.is_blank() && c.style == Style::dim()));
    }

    #[test]
    fn test_trimmed_lines() {
        let mut grid = CellGrid::new(5, 2);
        grid.draw_text(0, 1, "hi", Style::NONE);
        assert_eq!(grid.to_trimmed_lines(), vec![String::new(), "hi".to_string()]);
    }

    #[test]
    fn test_resize_clears() {
        let mut grid = CellGrid::new(2, 2);
        grid.draw_text(0, 0, "ab", Style::NONE);
        grid.resize(3, 1);
        assert_eq!(grid.size(), (3, 1));
        assert_eq!(grid.row_text(0), "   ");
    }
}
