//! Line-oriented document storage.
//!
//! A [`Document`] is a list of [`Line`]s indexed by row; a line is a list of
//! `char`s indexed by column. Rows may be addressed before they exist: the
//! mutating primitives first extend the document with empty lines up to the
//! row (gap-fill), and columns past the end of a line are padded with
//! spaces before the edit applies.
//!
//! # Examples
//!
//! ```
//! use ten::text::Document;
//!
//! let mut doc = Document::new();
//! doc.set_char(2, 3, 'x');
//! assert_eq!(doc.len(), 3);
//! assert_eq!(doc.text(), "\n\n   x");
//! ```

use crate::error::{Error, Result};
use std::fmt;

/// One line of text.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Line(Vec<char>);

impl Line {
    /// Create an empty line.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of characters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if the line has no characters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Character at `col`, if materialized.
    #[must_use]
    pub fn get(&self, col: usize) -> Option<char> {
        self.0.get(col).copied()
    }

    /// The line's characters.
    #[must_use]
    pub fn chars(&self) -> &[char] {
        &self.0
    }

    fn pad_to(&mut self, len: usize) {
        if self.0.len() < len {
            self.0.resize(len, ' ');
        }
    }
}

impl From<&str> for Line {
    fn from(s: &str) -> Self {
        Self(s.chars().collect())
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.iter().try_for_each(|ch| fmt::Write::write_char(f, *ch))
    }
}

/// Ordered, never-empty sequence of lines.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Document {
    lines: Vec<Line>,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// Create a document with one empty line.
    #[must_use]
    pub fn new() -> Self {
        Self {
            lines: vec![Line::new()],
        }
    }

    /// Create a document from lines of text. No lines gives one empty line.
    #[must_use]
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let lines: Vec<Line> = lines.into_iter().map(|s| Line::from(s.as_ref())).collect();
        if lines.is_empty() {
            Self::new()
        } else {
            Self { lines }
        }
    }

    /// Number of lines (always at least 1).
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Always false; kept for API symmetry with `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Line at `row`, if it exists.
    #[must_use]
    pub fn line(&self, row: usize) -> Option<&Line> {
        self.lines.get(row)
    }

    /// Length of line `row`, or 0 for missing rows.
    #[must_use]
    pub fn line_len(&self, row: usize) -> usize {
        self.lines.get(row).map_or(0, Line::len)
    }

    /// Iterate over all lines.
    pub fn lines(&self) -> impl Iterator<Item = &Line> {
        self.lines.iter()
    }

    /// The whole document with lines joined by `'\n'`.
    #[must_use]
    pub fn text(&self) -> String {
        self.lines
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Character at `(row, col)`: a space past the end of an existing line.
    pub fn get(&self, row: usize, col: usize) -> Result<char> {
        let line = self.lines.get(row).ok_or(Error::OutOfRange {
            row,
            len: self.lines.len(),
        })?;
        Ok(line.get(col).unwrap_or(' '))
    }

    /// Extend with empty lines until `row` exists.
    pub fn ensure_row(&mut self, row: usize) {
        if row >= self.lines.len() {
            self.lines.resize_with(row + 1, Line::new);
        }
    }

    fn line_mut(&mut self, row: usize) -> &mut Line {
        self.ensure_row(row);
        &mut self.lines[row]
    }

    /// Overwrite the character at `(row, col)`, padding the line with spaces
    /// first and extending it by one when `col` is its length.
    pub fn set_char(&mut self, row: usize, col: usize, ch: char) {
        let line = self.line_mut(row);
        line.pad_to(col);
        if col == line.0.len() {
            line.0.push(ch);
        } else {
            line.0[col] = ch;
        }
    }

    /// Split line `row` at `col`; the tail becomes a new line below.
    pub fn split_line(&mut self, row: usize, col: usize) {
        let line = self.line_mut(row);
        let tail = if col < line.0.len() {
            line.0.split_off(col)
        } else {
            Vec::new()
        };
        self.lines.insert(row + 1, Line(tail));
    }

    /// Append line `row` to line `row - 1` and remove it.
    ///
    /// Returns the length line `row - 1` had before the join, or
    /// [`Error::NoOp`] for row 0.
    pub fn join_line_into_previous(&mut self, row: usize) -> Result<usize> {
        if row == 0 {
            return Err(Error::NoOp);
        }
        self.ensure_row(row);
        let line = self.lines.remove(row);
        let prev = &mut self.lines[row - 1];
        let prev_len = prev.len();
        prev.0.extend(line.0);
        Ok(prev_len)
    }

    /// Remove the character just before `(row, col)`.
    ///
    /// The line is padded to `col` first; [`Error::NoOp`] for column 0.
    pub fn delete_char_before(&mut self, row: usize, col: usize) -> Result<()> {
        if col == 0 {
            return Err(Error::NoOp);
        }
        let line = self.line_mut(row);
        line.pad_to(col);
        line.0.remove(col - 1);
        Ok(())
    }
}
