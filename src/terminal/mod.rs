//! Terminal setup: raw mode, alternate screen and cursor visibility.
//!
//! Raw mode is held by a [`RawModeGuard`] owned by the caller; [`Terminal`]
//! only manages the output side.

mod raw;

pub use raw::{DEFAULT_READ_TIMEOUT, RawModeGuard, enable_raw_mode, is_tty, terminal_size};

use crate::ansi::sequences;
use std::io::{self, Write};

/// Terminal state manager.
///
/// Tracks which modes have been switched on so [`cleanup`](Self::cleanup)
/// only undoes what was done.
pub struct Terminal<W: Write> {
    writer: W,
    alt_screen: bool,
    cursor_visible: bool,
}

impl<W: Write> Terminal<W> {
    /// Create a new terminal with the given writer.
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            alt_screen: false,
            cursor_visible: true,
        }
    }

    /// Check if the alternate screen is active.
    #[must_use]
    pub fn is_alt_screen(&self) -> bool {
        self.alt_screen
    }

    /// Enter alternate screen buffer.
    pub fn enter_alt_screen(&mut self) -> io::Result<()> {
        if !self.alt_screen {
            self.writer.write_all(sequences::ALT_SCREEN_ON.as_bytes())?;
            self.alt_screen = true;
        }
        Ok(())
    }

    /// Leave alternate screen buffer.
    pub fn leave_alt_screen(&mut self) -> io::Result<()> {
        if self.alt_screen {
            self.writer
                .write_all(sequences::ALT_SCREEN_OFF.as_bytes())?;
            self.alt_screen = false;
        }
        Ok(())
    }

    /// Hide cursor.
    pub fn hide_cursor(&mut self) -> io::Result<()> {
        if self.cursor_visible {
            self.writer.write_all(sequences::CURSOR_HIDE.as_bytes())?;
            self.cursor_visible = false;
        }
        Ok(())
    }

    /// Show cursor.
    pub fn show_cursor(&mut self) -> io::Result<()> {
        if !self.cursor_visible {
            self.writer.write_all(sequences::CURSOR_SHOW.as_bytes())?;
            self.cursor_visible = true;
        }
        Ok(())
    }

    /// Clear the screen and home the cursor.
    pub fn clear(&mut self) -> io::Result<()> {
        self.writer.write_all(sequences::CLEAR_SCREEN.as_bytes())?;
        self.writer.write_all(sequences::CURSOR_HOME.as_bytes())
    }

    /// Begin synchronized update (for flicker-free rendering).
    pub fn begin_sync(&mut self) -> io::Result<()> {
        self.writer.write_all(sequences::sync::BEGIN.as_bytes())
    }

    /// End synchronized update.
    pub fn end_sync(&mut self) -> io::Result<()> {
        self.writer.write_all(sequences::sync::END.as_bytes())
    }

    /// Write raw bytes.
    pub fn write_all(&mut self, bytes: &[u8]) -> io::Result<()> {
        self.writer.write_all(bytes)
    }

    /// Flush the output.
    pub fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }

    /// Get a reference to the underlying writer.
    pub fn writer(&self) -> &W {
        &self.writer
    }

    /// Restore the terminal on exit.
    pub fn cleanup(&mut self) -> io::Result<()> {
        self.writer.write_all(sequences::RESET.as_bytes())?;
        self.show_cursor()?;
        self.leave_alt_screen()?;
        self.flush()
    }
}
