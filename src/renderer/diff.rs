//! Grid diffing for incremental presentation.

use crate::grid::CellGrid;

/// A horizontal run of changed cells on one row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DirtySpan {
    pub x: u32,
    pub y: u32,
    pub width: u32,
}

impl DirtySpan {
    /// Create a new span.
    #[must_use]
    pub const fn new(x: u32, y: u32, width: u32) -> Self {
        Self { x, y, width }
    }

    /// Column one past the end of the span.
    #[must_use]
    pub const fn end(&self) -> u32 {
        self.x + self.width
    }
}

/// Result of diffing two grids of the same size.
#[derive(Debug, Default)]
pub struct BufferDiff {
    /// Changed cells as `(x, y)`, in row-major order.
    pub changed_cells: Vec<(u32, u32)>,
    /// Changed cells grouped into runs per row.
    pub dirty_spans: Vec<DirtySpan>,
    /// Total number of changed cells.
    pub change_count: usize,
}

impl BufferDiff {
    /// Compare two grids and find the cells that differ.
    ///
    /// Grids of different sizes compare as entirely changed.
    #[must_use]
    pub fn compute(old: &CellGrid, new: &CellGrid) -> Self {
        let (width, height) = (new.width(), new.height());

        if old.width() != width || old.height() != height {
            let changed_cells: Vec<_> = (0..height)
                .flat_map(|y| (0..width).map(move |x| (x, y)))
                .collect();
            let dirty_spans = (0..height).map(|y| DirtySpan::new(0, y, width)).collect();
            return Self {
                change_count: changed_cells.len(),
                changed_cells,
                dirty_spans,
            };
        }

        let old_cells = old.cells();
        let new_cells = new.cells();
        let mut changed_cells = Vec::new();

        for y in 0..height {
            let row_offset = (y * width) as usize;
            for x in 0..width {
                let idx = row_offset + x as usize;
                if old_cells[idx] != new_cells[idx] {
                    changed_cells.push((x, y));
                }
            }
        }

        let dirty_spans = Self::group_spans(&changed_cells);
        Self {
            change_count: changed_cells.len(),
            changed_cells,
            dirty_spans,
        }
    }

    /// Check if there are any changes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.changed_cells.is_empty()
    }

    /// Calculate if a full redraw is cheaper than patching.
    #[must_use]
    pub fn should_full_redraw(&self, total_cells: usize) -> bool {
        self.change_count > total_cells / 2
    }

    fn group_spans(cells: &[(u32, u32)]) -> Vec<DirtySpan> {
        let mut spans: Vec<DirtySpan> = Vec::new();
        for &(x, y) in cells {
            match spans.last_mut() {
                Some(span) if span.y == y && span.end() == x => span.width += 1,
                _ => spans.push(DirtySpan::new(x, y, 1)),
            }
        }
        spans
    }
}
