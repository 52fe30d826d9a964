//! Documents, cursors and multi-cursor editing.
//!
//! Key types:
//!
//! - [`Document`]: line-oriented text storage with gap-filling primitives
//! - [`CursorSet`]: ordered, duplicate-free cursor positions
//! - [`Editor`]: applies edits at every cursor and recomputes positions
//! - [`DocumentView`]: draws a window of the document onto a surface
//!
//! # Examples
//!
//! ```
//! use ten::grid::CellGrid;
//! use ten::text::{DocumentView, Editor};
//!
//! let mut editor = Editor::new();
//! editor.add("one\ntwo");
//! editor.clone_up();
//! editor.add("!");
//!
//! let mut grid = CellGrid::new(8, 2);
//! DocumentView::new().draw(editor.document(), editor.cursors(), &mut grid);
//! assert_eq!(grid.to_trimmed_lines(), ["one!", "two!"]);
//! ```

mod cursor;
mod document;
mod editor;
pub mod shift;
mod view;

pub use cursor::{Cursor, CursorSet};
pub use document::{Document, Line};
pub use editor::Editor;
pub use shift::Edit;
pub use view::DocumentView;
