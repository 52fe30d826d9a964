//! Screen layout: text area, line-number gutter and status line.

use crate::config::EditorConfig;
use crate::error::{Error, Result};
use crate::grid::{Rect, Surface};
use crate::style::Style;

/// Narrowest the number column of the gutter gets.
pub const MIN_NUMBER_WIDTH: usize = 4;

/// Rectangles for each screen area.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Layout {
    /// Document text.
    pub text: Rect,
    /// Line numbers, left of the text.
    pub gutter: Option<Rect>,
    /// Status line, bottom row.
    pub status: Option<Rect>,
}

impl Layout {
    /// Split a `width` x `height` screen for a document of `line_count`
    /// lines.
    ///
    /// Fails with [`Error::TerminalTooSmall`] below the configured minimum.
    pub fn compute(
        width: u32,
        height: u32,
        line_count: usize,
        config: &EditorConfig,
    ) -> Result<Self> {
        check_size(width, height, config)?;

        let status_rows = u32::from(config.status_bar);
        let text_height = height.saturating_sub(status_rows);
        let status = config
            .status_bar
            .then(|| Rect::new(0, text_height, width, status_rows));

        let gutter_width = if config.line_numbers {
            u32::try_from(gutter_width(line_count))
                .unwrap_or(u32::MAX)
                .min(width)
        } else {
            0
        };
        let gutter = (gutter_width > 0).then(|| Rect::new(0, 0, gutter_width, text_height));
        let text = Rect::new(gutter_width, 0, width - gutter_width, text_height);

        Ok(Self {
            text,
            gutter,
            status,
        })
    }
}

/// Fail unless the screen meets the configured minimum size.
pub fn check_size(width: u32, height: u32, config: &EditorConfig) -> Result<()> {
    let min_width = u32::from(config.min_width);
    let min_height = u32::from(config.min_height);
    if width < min_width || height < min_height {
        return Err(Error::TerminalTooSmall {
            width,
            height,
            min_width,
            min_height,
        });
    }
    Ok(())
}

fn number_width(line_count: usize) -> usize {
    line_count.max(1).to_string().len().max(MIN_NUMBER_WIDTH)
}

/// Total gutter columns: a bar, the right-aligned number and a space.
#[must_use]
pub fn gutter_width(line_count: usize) -> usize {
    number_width(line_count) + 2
}

/// Draw 1-based line numbers for the document rows starting at
/// `first_row`; rows past the document stay blank.
pub fn draw_gutter(surface: &mut impl Surface, first_row: usize, line_count: usize, style: Style) {
    let (_, height) = surface.size();
    let width = number_width(line_count);
    surface.fill(style);
    for y in 0..height {
        let row = first_row + y as usize;
        if row >= line_count {
            break;
        }
        let label = format!("|{:>width$} ", row + 1);
        surface.draw_text(0, y, &label, style);
    }
}
