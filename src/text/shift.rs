//! Cursor shift rules for document mutations.
//!
//! Every edit moves text around, so every cursor (not only the one that
//! caused the edit) has to be recomputed. [`shift`] maps one cursor through
//! one [`Edit`]; the editor applies it to the whole set after each mutation,
//! so shifts from successive edits of one operation compound.

use crate::text::cursor::Cursor;

/// A single performed document mutation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Edit {
    /// A character was written at `(row, col)`.
    InsertChar { row: usize, col: usize },
    /// Line `row` was split at `col`.
    SplitLine { row: usize, col: usize },
    /// The character before `(row, col)` was removed.
    DeleteChar { row: usize, col: usize },
    /// Line `row` was appended to line `row - 1`, which had `prev_len`
    /// characters before.
    JoinLine { row: usize, prev_len: usize },
}

/// Position of `cursor` after `edit`.
#[must_use]
pub fn shift(cursor: Cursor, edit: &Edit) -> Cursor {
    let Cursor { row, col } = cursor;
    match *edit {
        Edit::InsertChar { row: r, col: c } => {
            if row == r && col >= c {
                Cursor::new(row, col + 1)
            } else {
                cursor
            }
        }
        Edit::SplitLine { row: r, col: c } => {
            if row == r && col >= c {
                Cursor::new(row + 1, col - c)
            } else if row >= r {
                Cursor::new(row + 1, col)
            } else {
                cursor
            }
        }
        Edit::DeleteChar { row: r, col: c } => {
            if row == r && col >= c {
                Cursor::new(row, col - 1)
            } else {
                cursor
            }
        }
        Edit::JoinLine { row: r, prev_len } => {
            if row == r {
                Cursor::new(row - 1, col + prev_len)
            } else if row > r {
                Cursor::new(row - 1, col)
            } else {
                cursor
            }
        }
    }
}
