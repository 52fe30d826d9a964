//! Multi-cursor editing operations.
//!
//! Every edit reads the cursor set once, as a snapshot, and performs its
//! mutation at each snapshot position in order. After each single mutation
//! the live cursors are all passed through [`shift`] and deduplicated, so
//! later snapshot positions are applied to text that earlier ones already
//! changed.
//!
//! # Examples
//!
//! ```
//! use ten::text::{Cursor, CursorSet, Document, Editor};
//!
//! let mut editor = Editor::new();
//! editor.add("ab\ncd");
//! assert_eq!(editor.document().text(), "ab\ncd");
//! assert_eq!(editor.cursors().primary(), Cursor::new(1, 2));
//!
//! // Two cursors on one line overwrite in turn.
//! let doc = Document::from_lines(["  "]);
//! let cursors = CursorSet::from_cursors([(0, 0), (0, 1)]);
//! let mut editor = Editor::with_state(doc, cursors).unwrap();
//! editor.insert_char('x');
//! assert_eq!(editor.document().text(), "xx");
//! ```

use crate::error::{Error, Result};
use crate::text::cursor::{Cursor, CursorSet};
use crate::text::document::Document;
use crate::text::shift::{Edit, shift};

/// A document with its cursors.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Editor {
    document: Document,
    cursors: CursorSet,
}

impl Editor {
    /// One empty line with one cursor at `(0, 0)`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from existing state. Every cursor row must exist.
    pub fn with_state(document: Document, cursors: CursorSet) -> Result<Self> {
        if let Some(cursor) = cursors.iter().find(|c| c.row >= document.len()) {
            return Err(Error::OutOfRange {
                row: cursor.row,
                len: document.len(),
            });
        }
        Ok(Self { document, cursors })
    }

    /// The document being edited.
    #[must_use]
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// The current cursors.
    #[must_use]
    pub fn cursors(&self) -> &CursorSet {
        &self.cursors
    }

    /// Character shown at `cursor`; a space outside the materialized text.
    #[must_use]
    pub fn char_at(&self, cursor: Cursor) -> char {
        self.document.get(cursor.row, cursor.col).unwrap_or(' ')
    }

    fn shift_all(&mut self, edit: &Edit) {
        self.cursors.map(|cursor| shift(cursor, edit));
    }

    /// Write `ch` at every cursor, overwriting what is there.
    pub fn insert_char(&mut self, ch: char) {
        for Cursor { row, col } in self.cursors.snapshot() {
            self.document.set_char(row, col, ch);
            self.shift_all(&Edit::InsertChar { row, col });
        }
    }

    /// Split the line at every cursor.
    pub fn insert_newline(&mut self) {
        for Cursor { row, col } in self.cursors.snapshot() {
            self.document.split_line(row, col);
            self.shift_all(&Edit::SplitLine { row, col });
        }
    }

    /// Delete the character before every cursor, joining with the previous
    /// line at column 0. Nothing happens at `(0, 0)`.
    pub fn delete_backward(&mut self) {
        for Cursor { row, col } in self.cursors.snapshot() {
            let edit = if col > 0 {
                self.document
                    .delete_char_before(row, col)
                    .map(|()| Edit::DeleteChar { row, col })
            } else {
                self.document
                    .join_line_into_previous(row)
                    .map(|prev_len| Edit::JoinLine { row, prev_len })
            };
            // NoOp at the document start leaves every cursor in place.
            if let Ok(edit) = edit {
                self.shift_all(&edit);
            }
        }
    }

    /// Type `text`: `'\n'` splits lines, every other character is written.
    pub fn add(&mut self, text: &str) {
        for ch in text.chars() {
            if ch == '\n' {
                self.insert_newline();
            } else {
                self.insert_char(ch);
            }
        }
    }

    /// Move every cursor up one line, clamping the column.
    pub fn move_up(&mut self) {
        let document = &self.document;
        self.cursors.map(|c| up_of(document, c));
    }

    /// Move every cursor down one line, clamping the column.
    pub fn move_down(&mut self) {
        let document = &self.document;
        self.cursors.map(|c| down_of(document, c));
    }

    /// Move every cursor one character left, wrapping to the previous line.
    pub fn move_left(&mut self) {
        let document = &self.document;
        self.cursors.map(|c| left_of(document, c));
    }

    /// Move every cursor one character right, wrapping to the next line.
    pub fn move_right(&mut self) {
        let document = &self.document;
        self.cursors.map(|c| right_of(document, c));
    }

    /// Add a cursor above every cursor.
    pub fn clone_up(&mut self) {
        let added: Vec<_> = self.cursors.iter().map(|&c| up_of(&self.document, c)).collect();
        self.cursors.union(added);
    }

    /// Add a cursor below every cursor.
    pub fn clone_down(&mut self) {
        let added: Vec<_> = self.cursors.iter().map(|&c| down_of(&self.document, c)).collect();
        self.cursors.union(added);
    }
}

fn up_of(document: &Document, cursor: Cursor) -> Cursor {
    if cursor.row == 0 {
        return cursor;
    }
    let row = cursor.row - 1;
    Cursor::new(row, cursor.col.min(document.line_len(row)))
}

fn down_of(document: &Document, cursor: Cursor) -> Cursor {
    if cursor.row + 1 >= document.len() {
        return cursor;
    }
    let row = cursor.row + 1;
    Cursor::new(row, cursor.col.min(document.line_len(row)))
}

fn left_of(document: &Document, cursor: Cursor) -> Cursor {
    match cursor {
        Cursor { row: 0, col: 0 } => cursor,
        Cursor { row, col: 0 } => Cursor::new(row - 1, document.line_len(row - 1)),
        Cursor { row, col } => Cursor::new(row, col - 1),
    }
}

fn right_of(document: &Document, cursor: Cursor) -> Cursor {
    let Cursor { row, col } = cursor;
    if col < document.line_len(row) {
        Cursor::new(row, col + 1)
    } else if row + 1 >= document.len() {
        cursor
    } else {
        Cursor::new(row + 1, 0)
    }
}
