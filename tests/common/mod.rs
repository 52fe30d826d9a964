//! Shared helpers for integration tests.

#![allow(dead_code)] // Shared test helper; not every integration test uses every utility
#![allow(clippy::nursery)] // Test infra prioritizes clarity over pedantry
#![allow(clippy::pedantic)] // Test infra prioritizes clarity over pedantry

use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use ten::{CursorSet, Document, Editor};
use tracing::Level;

/// Writer that records everything into a buffer shared with the test.
///
/// The renderer owns one clone, the test keeps another to inspect output.
#[derive(Clone, Debug, Default)]
pub struct MockTerminal {
    output: Arc<Mutex<Vec<u8>>>,
}

impl MockTerminal {
    pub fn new() -> Self {
        Self::default()
    }

    /// All bytes written so far.
    pub fn bytes(&self) -> Vec<u8> {
        self.output.lock().unwrap().clone()
    }

    /// Output as a lossy string.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.bytes()).into_owned()
    }

    /// Number of bytes written so far.
    pub fn len(&self) -> usize {
        self.output.lock().unwrap().len()
    }

    /// Replay the output through a vt100 emulator of the given size.
    pub fn screen(&self, width: u16, height: u16) -> vt100::Parser {
        let mut parser = vt100::Parser::new(height, width, 0);
        parser.process(&self.bytes());
        parser
    }
}

impl Write for MockTerminal {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.output.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Rows of an emulated screen with trailing blanks removed.
pub fn screen_rows(parser: &vt100::Parser) -> Vec<String> {
    let (_, cols) = parser.screen().size();
    parser
        .screen()
        .rows(0, cols)
        .map(|row| row.trim_end().to_string())
        .collect()
}

/// Rows joined with newlines, for snapshots.
pub fn screen_text(parser: &vt100::Parser) -> String {
    screen_rows(parser).join("\n")
}

/// Build an editor from lines and cursor positions.
pub fn editor(lines: &[&str], cursors: &[(usize, usize)]) -> Editor {
    Editor::with_state(
        Document::from_lines(lines),
        CursorSet::from_cursors(cursors.iter().copied()),
    )
    .expect("cursor rows exist")
}

/// Document lines as owned strings.
pub fn lines(editor: &Editor) -> Vec<String> {
    editor.document().lines().map(|l| l.to_string()).collect()
}

/// Cursor positions as tuples.
pub fn cursors(editor: &Editor) -> Vec<(usize, usize)> {
    editor.cursors().iter().map(|c| (c.row, c.col)).collect()
}

pub fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(Level::DEBUG)
        .with_target(true)
        .with_test_writer()
        .try_init();
}
