//! Rectangles and clipped grid windows.

use super::{CellGrid, Surface};
use crate::cell::Cell;
use crate::style::Style;

/// An axis-aligned rectangle in grid cells.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Rect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    /// Create a new rectangle.
    #[must_use]
    pub const fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Check if a point is inside this rectangle.
    #[must_use]
    pub const fn contains(&self, px: u32, py: u32) -> bool {
        px >= self.x
            && py >= self.y
            && px < self.x.saturating_add(self.width)
            && py < self.y.saturating_add(self.height)
    }

    /// Compute intersection with another rectangle.
    #[must_use]
    pub fn intersect(&self, other: &Self) -> Option<Self> {
        let x1 = self.x.max(other.x);
        let y1 = self.y.max(other.y);
        let x2 = self
            .x
            .saturating_add(self.width)
            .min(other.x.saturating_add(other.width));
        let y2 = self
            .y
            .saturating_add(self.height)
            .min(other.y.saturating_add(other.height));

        if x2 > x1 && y2 > y1 {
            Some(Self::new(x1, y1, x2 - x1, y2 - y1))
        } else {
            None
        }
    }

    /// Check if this rectangle is empty (zero area).
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// A mutable window into a [`CellGrid`].
///
/// Coordinates passed to the [`Surface`] methods are local to the window and
/// writes are clipped to it, so a panel can never draw over its neighbours.
#[derive(Debug)]
pub struct GridRegion<'a> {
    grid: &'a mut CellGrid,
    rect: Rect,
}

impl<'a> GridRegion<'a> {
    /// Create a window over `rect`, clipped to the grid bounds.
    pub fn new(grid: &'a mut CellGrid, rect: Rect) -> Self {
        let bounds = Rect::new(0, 0, grid.width(), grid.height());
        let rect = rect.intersect(&bounds).unwrap_or_default();
        Self { grid, rect }
    }

    /// The window's rectangle in grid coordinates.
    #[must_use]
    pub fn rect(&self) -> Rect {
        self.rect
    }
}

impl Surface for GridRegion<'_> {
    fn size(&self) -> (u32, u32) {
        (self.rect.width, self.rect.height)
    }

    fn set_cell(&mut self, x: u32, y: u32, cell: Cell) {
        if x < self.rect.width && y < self.rect.height {
            self.grid.set_cell(self.rect.x + x, self.rect.y + y, cell);
        }
    }

    fn fill(&mut self, style: Style) {
        for y in 0..self.rect.height {
            for x in 0..self.rect.width {
                self.grid
                    .set_cell(self.rect.x + x, self.rect.y + y, Cell::blank(style));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_contains() {
        let rect = Rect::new(2, 1, 3, 2);
        assert!(rect.contains(2, 1));
        assert!(rect.contains(4, 2));
        assert!(!rect.contains(5, 1));
        assert!(!rect.contains(1, 1));
    }

    #[test]
    fn test_rect_intersect() {
        let a = Rect::new(0, 0, 10, 10);
        let b = Rect::new(5, 5, 10, 10);
        assert_eq!(a.intersect(&b), Some(Rect::new(5, 5, 5, 5)));
        assert_eq!(a.intersect(&Rect::new(10, 0, 2, 2)), None);
    }

    #[test]
    fn test_region_offsets_and_clips() {
        let mut grid = CellGrid::new(6, 2);
        {
            let mut region = grid.region(Rect::new(2, 1, 3, 1));
            assert_eq!(region.size(), (3, 1));
            region.draw_text(0, 0, "abcdef", Style::NONE);
            region.set_cell(0, 1, Cell::new('z', Style::NONE));
        }
        assert_eq!(grid.row_text(0), "      ");
        assert_eq!(grid.row_text(1), "  abc ");
    }

    #[test]
    fn test_region_clipped_to_grid() {
        let mut grid = CellGrid::new(4, 4);
        let region = grid.region(Rect::new(3, 3, 10, 10));
        assert_eq!(region.rect(), Rect::new(3, 3, 1, 1));

        let region = grid.region(Rect::new(8, 8, 2, 2));
        assert!(region.rect().is_empty());
    }

    #[test]
    fn test_region_fill_stays_inside() {
        let mut grid = CellGrid::new(3, 3);
        grid.region(Rect::new(1, 1, 1, 1)).fill(Style::inverse());
        let inverse: Vec<_> = grid
            .cells()
            .iter()
            .map(|c| c.style.is_inverse())
            .collect();
        assert_eq!(inverse.iter().filter(|&&b| b).count(), 1);
        assert!(grid.get(1, 1).unwrap().style.is_inverse());
    }
}
