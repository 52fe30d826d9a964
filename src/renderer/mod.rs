//! Double-buffered rendering with diff detection.
//!
//! The session draws each frame into [`Renderer::buffer`]; [`Renderer::present`]
//! compares it with the frame on screen and writes only the cells that
//! changed. The whole frame goes out in one `write` wrapped in a synchronized
//! update, so the terminal never shows a half-drawn screen.

mod diff;

pub use diff::{BufferDiff, DirtySpan};

use crate::ansi::{AnsiWriter, sequences};
use crate::grid::CellGrid;
use crate::terminal::Terminal;
use std::io::{self, Write};

/// Renderer options.
#[derive(Clone, Copy, Debug)]
pub struct RendererOptions {
    /// Switch to the alternate screen while running.
    pub use_alt_screen: bool,
    /// Hide the terminal's own cursor while running.
    pub hide_cursor: bool,
}

impl Default for RendererOptions {
    fn default() -> Self {
        Self {
            use_alt_screen: true,
            hide_cursor: true,
        }
    }
}

/// Counters for the last presented frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderStats {
    /// Frames presented so far.
    pub frames: u64,
    /// Cells written by the most recent frame.
    pub last_frame_cells: usize,
    /// Bytes written by the most recent frame.
    pub last_frame_bytes: usize,
}

/// Terminal renderer.
pub struct Renderer<W: Write> {
    terminal: Terminal<W>,
    front_buffer: CellGrid,
    back_buffer: CellGrid,
    scratch_buffer: Vec<u8>,
    force_redraw: bool,
    stats: RenderStats,
    active: bool,
}

impl<W: Write> Renderer<W> {
    /// Create a renderer writing to `writer` and prepare the screen.
    pub fn new(writer: W, width: u32, height: u32, options: RendererOptions) -> io::Result<Self> {
        let mut terminal = Terminal::new(writer);
        if options.use_alt_screen {
            terminal.enter_alt_screen()?;
        }
        if options.hide_cursor {
            terminal.hide_cursor()?;
        }
        terminal.clear()?;
        terminal.flush()?;

        Ok(Self {
            terminal,
            front_buffer: CellGrid::new(width, height),
            back_buffer: CellGrid::new(width, height),
            scratch_buffer: Vec::with_capacity(16 * 1024),
            force_redraw: true,
            stats: RenderStats::default(),
            active: true,
        })
    }

    /// Get the back buffer for drawing the next frame.
    pub fn buffer(&mut self) -> &mut CellGrid {
        &mut self.back_buffer
    }

    /// Get the frame currently on screen.
    #[must_use]
    pub fn front_buffer(&self) -> &CellGrid {
        &self.front_buffer
    }

    /// Get renderer size.
    #[must_use]
    pub fn size(&self) -> (u32, u32) {
        (self.back_buffer.width(), self.back_buffer.height())
    }

    /// Statistics for the last presented frame.
    #[must_use]
    pub fn stats(&self) -> RenderStats {
        self.stats
    }

    /// Get the terminal this renderer writes to.
    #[must_use]
    pub fn terminal(&self) -> &Terminal<W> {
        &self.terminal
    }

    /// Present the back buffer to the screen.
    ///
    /// After presenting, the buffers swap and the new back buffer is blank.
    pub fn present(&mut self) -> io::Result<()> {
        let total_cells = self.back_buffer.cells().len();
        let diff = BufferDiff::compute(&self.front_buffer, &self.back_buffer);

        self.scratch_buffer.clear();
        let mut writer = AnsiWriter::new(&mut self.scratch_buffer);
        writer.write_str(sequences::sync::BEGIN);

        let cells_written = if self.force_redraw || diff.should_full_redraw(total_cells) {
            writer.write_str(sequences::CURSOR_HOME);
            writer.reset_state();
            for y in 0..self.back_buffer.height() {
                for x in 0..self.back_buffer.width() {
                    if let Some(cell) = self.back_buffer.get(x, y) {
                        writer.write_cell_at(y, x, cell);
                    }
                }
            }
            total_cells
        } else {
            for span in &diff.dirty_spans {
                for x in span.x..span.end() {
                    if let Some(cell) = self.back_buffer.get(x, span.y) {
                        writer.write_cell_at(span.y, x, cell);
                    }
                }
            }
            diff.change_count
        };

        writer.reset();
        writer.write_str(sequences::sync::END);
        writer.flush()?;

        self.terminal.write_all(&self.scratch_buffer)?;
        self.terminal.flush()?;

        self.force_redraw = false;
        self.stats = RenderStats {
            frames: self.stats.frames + 1,
            last_frame_cells: cells_written,
            last_frame_bytes: self.scratch_buffer.len(),
        };

        std::mem::swap(&mut self.front_buffer, &mut self.back_buffer);
        self.back_buffer.clear();
        Ok(())
    }

    /// Resize both buffers; the next frame is a full redraw.
    pub fn resize(&mut self, width: u32, height: u32) -> io::Result<()> {
        self.front_buffer.resize(width, height);
        self.back_buffer.resize(width, height);
        self.terminal.clear()?;
        self.force_redraw = true;
        Ok(())
    }

    /// Force the next frame to redraw every cell.
    pub fn invalidate(&mut self) {
        self.force_redraw = true;
    }

    /// Restore the terminal. Safe to call more than once.
    pub fn cleanup(&mut self) -> io::Result<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;
        self.terminal.cleanup()
    }
}

impl<W: Write> Drop for Renderer<W> {
    fn drop(&mut self) {
        let _ = self.cleanup();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Surface;
    use crate::style::Style;

    fn renderer(width: u32, height: u32) -> Renderer<Vec<u8>> {
        Renderer::new(Vec::new(), width, height, RendererOptions::default()).unwrap()
    }

    fn output(renderer: &Renderer<Vec<u8>>) -> String {
        String::from_utf8_lossy(renderer.terminal().writer()).into_owned()
    }

    #[test]
    fn test_new_prepares_screen() {
        let r = renderer(10, 3);
        let out = output(&r);
        assert!(out.starts_with(sequences::ALT_SCREEN_ON));
        assert!(out.contains(sequences::CURSOR_HIDE));
    }

    #[test]
    fn test_first_frame_is_full_redraw() {
        let mut r = renderer(10, 3);
        r.buffer().draw_text(0, 0, "hi", Style::NONE);
        r.present().unwrap();
        assert_eq!(r.stats().last_frame_cells, 30);
        assert_eq!(r.front_buffer().row_text(0), "hi        ");
    }

    #[test]
    fn test_second_frame_writes_only_changes() {
        let mut r = renderer(10, 3);
        r.buffer().draw_text(0, 0, "hi", Style::NONE);
        r.present().unwrap();

        r.buffer().draw_text(0, 0, "ho", Style::NONE);
        r.present().unwrap();
        assert_eq!(r.stats().last_frame_cells, 1);
        assert_eq!(r.stats().frames, 2);
    }

    #[test]
    fn test_frame_wrapped_in_sync_update() {
        let mut r = renderer(4, 1);
        let before = r.terminal().writer().len();
        r.present().unwrap();
        let frame = &output(&r)[before..];
        assert!(frame.starts_with(sequences::sync::BEGIN));
        assert!(frame.ends_with(sequences::sync::END));
    }

    #[test]
    fn test_unchanged_frame_writes_no_cells() {
        let mut r = renderer(4, 2);
        r.present().unwrap();
        r.present().unwrap();
        assert_eq!(r.stats().last_frame_cells, 0);
    }

    #[test]
    fn test_resize_and_invalidate_force_full_redraw() {
        let mut r = renderer(4, 2);
        r.present().unwrap();
        r.resize(6, 2).unwrap();
        assert_eq!(r.size(), (6, 2));
        r.present().unwrap();
        assert_eq!(r.stats().last_frame_cells, 12);

        r.invalidate();
        r.present().unwrap();
        assert_eq!(r.stats().last_frame_cells, 12);
    }

    #[test]
    fn test_cleanup_runs_once() {
        let mut r = renderer(4, 1);
        r.cleanup().unwrap();
        let len = r.terminal().writer().len();
        r.cleanup().unwrap();
        assert_eq!(r.terminal().writer().len(), len);
        assert!(output(&r).ends_with(sequences::ALT_SCREEN_OFF));
    }
}
