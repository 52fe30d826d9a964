//! `ten` - a multi-cursor terminal text editor.
//!
//! The crate is organized leaves first: [`text`] holds the document, the
//! cursor set and the editing operations; [`grid`] is the character surface
//! views draw onto; [`renderer`] and [`terminal`] get a surface onto the
//! screen; [`input`] turns key bytes into [`input::InputEvent`]s; and
//! [`app::Session`] ties them together in the main loop.
//!
//! # Examples
//!
//! ```
//! use ten::app::Session;
//! use ten::config::EditorConfig;
//! use ten::grid::CellGrid;
//! use ten::input::InputEvent;
//!
//! let mut session = Session::new(EditorConfig::default(), 60, 5)?;
//! for ch in "hey".chars() {
//!     session.handle(InputEvent::Printable(ch))?;
//! }
//!
//! let mut grid = CellGrid::new(60, 5);
//! session.draw(&mut grid);
//! assert_eq!(grid.to_trimmed_lines()[0], "|   1 hey");
//! # Ok::<(), ten::Error>(())
//! ```

// Crate-level lint configuration
#![warn(unsafe_code)] // Unsafe code needs justification (required for termios FFI)
#![allow(clippy::cast_possible_truncation)] // Intentional coordinate casts
#![allow(clippy::cast_sign_loss)] // Intentional coordinate conversions
#![allow(clippy::cast_possible_wrap)] // Intentional coordinate conversions
#![allow(clippy::module_name_repetitions)] // Allow KeyCode in input::keyboard etc
#![allow(clippy::struct_excessive_bools)] // Config and terminal state need flags
#![allow(clippy::missing_errors_doc)] // Docs WIP
#![allow(clippy::missing_panics_doc)] // Docs WIP
#![allow(clippy::missing_const_for_fn)] // Many functions could be const, not critical
#![allow(clippy::doc_markdown)] // Allow technical names without backticks
#![allow(clippy::use_self)] // Allow explicit type names in impl blocks
#![allow(clippy::needless_pass_by_value)] // Allow pass by value for small Copy types
#![allow(clippy::collapsible_if)] // Sometimes nested ifs are clearer
#![allow(clippy::cast_lossless)] // as casts are fine for primitive widening
#![allow(clippy::items_after_statements)] // Common pattern in tests
#![allow(clippy::semicolon_if_nothing_returned)] // Style preference
#![allow(clippy::needless_collect)] // Collect for assertions is clear

pub mod ansi;
pub mod app;
pub mod cell;
pub mod config;
pub mod error;
pub mod event;
pub mod grid;
pub mod input;
pub mod layout;
pub mod renderer;
pub mod style;
pub mod terminal;
pub mod text;

// Re-export core types at crate root
pub use cell::Cell;
pub use error::{Error, Result};
pub use event::{LogLevel, emit_event, emit_log, set_event_callback, set_log_callback};
pub use style::{Style, TextAttributes};

pub use app::{Flow, Session};
pub use config::{EditorConfig, UnhandledInputPolicy};
pub use grid::{CellGrid, Rect, Surface};
pub use input::{InputEvent, InputParser, KeyCode, KeyEvent, KeyModifiers};
pub use layout::Layout;
pub use renderer::{RenderStats, Renderer, RendererOptions};
pub use terminal::{RawModeGuard, Terminal, enable_raw_mode, is_tty, terminal_size};
pub use text::{Cursor, CursorSet, Document, DocumentView, Editor};
